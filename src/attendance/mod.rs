//! Attendance statistics derived from the student directory.

use crate::model::{Student, WeeklyRate};

/// Counts shown by the statistics panel. Derived, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceStats {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
    /// Percentage in `[0, 100]`. Zero students yields a rate of 0.
    pub rate: f32,
    pub weekly_trend: Vec<WeeklyRate>,
}

impl AttendanceStats {
    pub fn derive(students: &[Student], trend: &[WeeklyRate]) -> Self {
        let total = students.len();
        let present = students.iter().filter(|s| s.is_present).count();
        let absent = total - present;
        let rate = if total == 0 {
            0.0
        } else {
            present as f32 / total as f32 * 100.0
        };
        Self {
            total,
            present,
            absent,
            rate,
            weekly_trend: trend.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{seed_students, weekly_trend};

    #[test]
    fn counts_add_up() {
        let stats = AttendanceStats::derive(&seed_students(), &weekly_trend());
        assert_eq!(stats.present + stats.absent, stats.total);
        assert_eq!(stats.weekly_trend.len(), 5);
    }

    #[test]
    fn empty_directory_has_zero_rate() {
        let stats = AttendanceStats::derive(&[], &[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.rate, 0.0);
    }

    #[test]
    fn rate_is_present_over_total() {
        let stats = AttendanceStats::derive(&seed_students(), &[]);
        let expected = stats.present as f32 / stats.total as f32 * 100.0;
        assert!((stats.rate - expected).abs() < f32::EPSILON);
    }
}
