//! Responsive chart configuration.
//!
//! Pure functions from the viewport width to the geometry and
//! formatting parameters the chart views paint with. Recomputed on
//! every frame; derivation is O(1) and idempotent, so no resize
//! debouncing is needed.

use chrono::{Datelike, NaiveDate};

use crate::model::Candidate;

/// Series palette for the trending-votes chart.
pub const SERIES_PALETTE: [[f32; 4]; 5] = [
    [0.23, 0.51, 0.96, 1.0], // blue
    [0.06, 0.73, 0.51, 1.0], // emerald
    [0.96, 0.25, 0.37, 1.0], // rose
    [0.55, 0.36, 0.96, 1.0], // violet
    [0.96, 0.62, 0.04, 1.0], // amber
];

/// Candidate names longer than this are truncated on narrow viewports.
const NAME_LIMIT: usize = 10;
const NAME_KEEP: usize = 8;

// ── Breakpoints ──

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// Width below 640.
    Narrow,
    /// Width 640 to 1023.
    Medium,
    /// Width 1024 and up.
    Wide,
}

impl Breakpoint {
    pub fn for_width(width: f32) -> Self {
        if width < 640.0 {
            Breakpoint::Narrow
        } else if width < 1024.0 {
            Breakpoint::Medium
        } else {
            Breakpoint::Wide
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartMargin {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

/// Everything the chart painter needs that depends on viewport width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartConfig {
    pub breakpoint: Breakpoint,
    pub x_axis_height: f32,
    /// X tick label rotation, degrees. Negative tilts labels up-left.
    pub x_tick_angle: f32,
    pub x_tick_size: f32,
    pub y_axis_width: f32,
    pub y_tick_size: f32,
    pub dot_radius: f32,
    pub active_dot_radius: f32,
    pub stroke_width: f32,
    pub margin: ChartMargin,
    pub legend: LegendPosition,
    pub legend_size: f32,
}

impl ChartConfig {
    /// Deterministic for a given width.
    pub fn for_width(width: f32) -> Self {
        let breakpoint = Breakpoint::for_width(width);
        let narrow = breakpoint == Breakpoint::Narrow;
        let medium = breakpoint == Breakpoint::Medium;

        Self {
            breakpoint,
            x_axis_height: if narrow { 50.0 } else { 30.0 },
            x_tick_angle: if narrow { -30.0 } else { 0.0 },
            x_tick_size: if narrow {
                10.0
            } else if medium {
                11.0
            } else {
                12.0
            },
            y_axis_width: if narrow { 40.0 } else { 50.0 },
            y_tick_size: if narrow { 10.0 } else { 12.0 },
            dot_radius: if narrow { 2.0 } else { 3.0 },
            active_dot_radius: if narrow { 5.0 } else { 7.0 },
            stroke_width: if narrow { 2.0 } else { 3.0 },
            margin: ChartMargin {
                top: 20.0,
                right: if narrow { 10.0 } else { 20.0 },
                bottom: if narrow { 10.0 } else { 20.0 },
                left: if narrow { 0.0 } else { 10.0 },
            },
            legend: if narrow {
                LegendPosition::Bottom
            } else {
                LegendPosition::Top
            },
            legend_size: if narrow { 10.0 } else { 12.0 },
        }
    }
}

/// Chart body height for the viewport width.
pub fn optimal_height(width: f32) -> f32 {
    match Breakpoint::for_width(width) {
        Breakpoint::Narrow => {
            if width < 375.0 {
                250.0
            } else {
                280.0
            }
        }
        Breakpoint::Medium => 320.0,
        Breakpoint::Wide => 350.0,
    }
}

/// Display-safe candidate name. Long names are shortened on narrow
/// viewports only, and the shortened form is the data-series key, so
/// legend and series always agree.
pub fn display_name(name: &str, breakpoint: Breakpoint) -> String {
    if breakpoint == Breakpoint::Narrow && name.chars().count() > NAME_LIMIT {
        let kept: String = name.chars().take(NAME_KEEP).collect();
        format!("{kept}...")
    } else {
        name.to_string()
    }
}

/// X tick label for a trend date, formatted per breakpoint.
pub fn tick_label(date: NaiveDate, breakpoint: Breakpoint) -> String {
    match breakpoint {
        Breakpoint::Narrow => format!("{}/{}", date.month(), date.day()),
        Breakpoint::Medium => date.format("%b %-d").to_string(),
        Breakpoint::Wide => date.format("%b %-d %y").to_string(),
    }
}

/// Long-form date shown in tooltips.
pub fn full_label(date: NaiveDate) -> String {
    date.format("%B %-d").to_string()
}

// ── Trend series assembly ──

#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub label: String,
    pub full_label: String,
    /// One running total per series; `None` where a candidate has no
    /// sample for this date.
    pub counts: Vec<Option<u32>>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrendSeries {
    /// Display-safe series keys, in candidate order.
    pub names: Vec<String>,
    /// Untruncated names for tooltips, aligned with `names`.
    pub full_names: Vec<String>,
    pub points: Vec<TrendPoint>,
}

impl TrendSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest sampled count across all series, for y-axis scaling.
    pub fn max_count(&self) -> u32 {
        self.points
            .iter()
            .flat_map(|p| p.counts.iter().flatten())
            .copied()
            .max()
            .unwrap_or(0)
    }
}

/// Assemble the trending-votes series. The first candidate's history
/// drives the date axis; candidates without a sample at a given index
/// contribute a gap. No history at all yields an empty series (the
/// view renders its empty state, never an error).
pub fn build_trend(candidates: &[Candidate], breakpoint: Breakpoint) -> TrendSeries {
    let Some(spine) = candidates.first().and_then(|c| c.vote_history.as_ref()) else {
        return TrendSeries::default();
    };

    let names = candidates
        .iter()
        .map(|c| display_name(&c.name, breakpoint))
        .collect();
    let full_names = candidates.iter().map(|c| c.name.clone()).collect();

    let points = spine
        .iter()
        .enumerate()
        .map(|(i, sample)| TrendPoint {
            date: sample.date,
            label: tick_label(sample.date, breakpoint),
            full_label: full_label(sample.date),
            counts: candidates
                .iter()
                .map(|c| {
                    c.vote_history
                        .as_ref()
                        .and_then(|h| h.get(i))
                        .map(|p| p.count)
                })
                .collect(),
        })
        .collect();

    TrendSeries {
        names,
        full_names,
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed_elections;

    #[test]
    fn narrow_config_at_500() {
        let config = ChartConfig::for_width(500.0);
        assert_eq!(config.breakpoint, Breakpoint::Narrow);
        assert_eq!(config.x_tick_size, 10.0);
        assert_eq!(config.legend, LegendPosition::Bottom);
        assert_eq!(config.x_tick_angle, -30.0);
        assert_eq!(config.dot_radius, 2.0);
    }

    #[test]
    fn wide_config_at_1280() {
        let config = ChartConfig::for_width(1280.0);
        assert_eq!(config.breakpoint, Breakpoint::Wide);
        assert_eq!(config.x_tick_size, 12.0);
        assert_eq!(config.legend, LegendPosition::Top);
        assert_eq!(config.stroke_width, 3.0);
    }

    #[test]
    fn breakpoint_edges() {
        assert_eq!(Breakpoint::for_width(639.9), Breakpoint::Narrow);
        assert_eq!(Breakpoint::for_width(640.0), Breakpoint::Medium);
        assert_eq!(Breakpoint::for_width(1023.9), Breakpoint::Medium);
        assert_eq!(Breakpoint::for_width(1024.0), Breakpoint::Wide);
    }

    #[test]
    fn config_is_deterministic() {
        assert_eq!(ChartConfig::for_width(800.0), ChartConfig::for_width(800.0));
    }

    #[test]
    fn heights_per_breakpoint() {
        assert_eq!(optimal_height(320.0), 250.0);
        assert_eq!(optimal_height(500.0), 280.0);
        assert_eq!(optimal_height(800.0), 320.0);
        assert_eq!(optimal_height(1280.0), 350.0);
    }

    #[test]
    fn names_truncate_on_narrow_only() {
        assert_eq!(
            display_name("Alice Johnson", Breakpoint::Narrow),
            "Alice Jo..."
        );
        assert_eq!(
            display_name("Alice Johnson", Breakpoint::Wide),
            "Alice Johnson"
        );
        assert_eq!(display_name("Bob Smith", Breakpoint::Narrow), "Bob Smith");
    }

    #[test]
    fn tick_labels_per_breakpoint() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 3).unwrap();
        assert_eq!(tick_label(date, Breakpoint::Narrow), "2/3");
        assert_eq!(tick_label(date, Breakpoint::Medium), "Feb 3");
        assert_eq!(tick_label(date, Breakpoint::Wide), "Feb 3 24");
        assert_eq!(full_label(date), "February 3");
    }

    #[test]
    fn trend_series_uses_display_names_as_keys() {
        let elections = seed_elections();
        let series = build_trend(&elections[0].candidates, Breakpoint::Narrow);
        assert_eq!(series.names[0], "Alice Jo...");
        assert_eq!(series.full_names[0], "Alice Johnson");
        assert_eq!(series.points.len(), 3);
        assert_eq!(series.points[0].counts.len(), 3);
        assert_eq!(series.max_count(), 300);
    }

    #[test]
    fn no_history_yields_empty_series() {
        let elections = seed_elections();
        // The registration-phase election has no vote history.
        let series = build_trend(&elections[1].candidates, Breakpoint::Wide);
        assert!(series.is_empty());
        assert_eq!(series.max_count(), 0);
    }
}
