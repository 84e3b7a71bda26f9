//! Reveal timeline for the leaderboard podium.
//!
//! The podium choreography is an explicit state machine driving
//! declarative per-slot animation targets. The app advances one clock
//! by frame `dt`; every visual property (`SlotVisual`) is a pure
//! function of that clock, so the whole sequence is testable without a
//! rendering surface and no two tweens can ever stack on one slot.
//!
//! Choreography, seconds from the start of `Entering`:
//!
//! ```text
//! 0.0           1.2
//! [== winner entrance ==]~~~~~ idle bob + glow, perpetual ~~~~~
//!       0.4          1.2
//!       [ side slides ]
//!          0.7                2.7
//!          [== vote counters ==]
//!               1.2                      burst fires once here
//!               1.2  [shine]....[shine]  4 sweeps, 4 s apart
//! ```

use crate::anim;
use crate::election::counter::CounterTween;
use crate::election::ranking::{RankedEntry, PODIUM_SIZE};
use crate::model::Candidate;

// ── Timing ──

/// Winner entrance duration (elastic settle).
pub const WINNER_ENTRANCE: f32 = 1.2;
/// Side-card entrance duration.
pub const SIDE_ENTRANCE: f32 = 0.8;
/// Side cards start this long before the winner entrance ends.
pub const SIDE_OVERLAP: f32 = 0.8;
/// Counters start this long before the winner entrance ends.
pub const COUNTER_LEAD: f32 = 0.5;
pub const COUNTER_DURATION: f32 = 2.0;

/// When the side slides begin. Strictly after the winner's start.
pub const SIDE_START: f32 = WINNER_ENTRANCE - SIDE_OVERLAP;
/// When the counters begin.
pub const COUNTER_START: f32 = WINNER_ENTRANCE - COUNTER_LEAD;

/// Idle bob: one direction of the oscillation, seconds.
const BOB_PERIOD: f32 = 2.0;
const BOB_AMPLITUDE: f32 = 10.0;
/// Glow pulse round-trip, seconds.
const GLOW_PERIOD: f32 = 3.0;

pub const SHINE_DELAY: f32 = 1.2;
pub const SHINE_DURATION: f32 = 2.0;
pub const SHINE_PAUSE: f32 = 4.0;
/// Total number of shine sweeps; the effect is bounded, not perpetual.
pub const SHINE_PLAYS: u32 = 4;

// ── Entrance geometry ──

const DEG: f32 = std::f32::consts::PI / 180.0;

const WINNER_SCALE_FROM: f32 = 0.5;
const WINNER_SCALE_TO: f32 = 1.05;
const WINNER_TILT_FROM: f32 = 40.0 * DEG;
const ELASTIC_PERIOD: f32 = 0.5;

const SIDE_BACK_OVERSHOOT: f32 = 1.5;
const RUNNER_UP_SLIDE: f32 = -50.0;
const THIRD_SLIDE: f32 = 200.0;
const SIDE_TILT: f32 = 10.0 * DEG;

// ── Types ──

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// No ranked data yet, or freshly reset.
    Idle,
    /// Entrance motion in progress.
    Entering,
    /// Winner settled; idle loops only. Terminal until the ranked data
    /// changes identity.
    Settled,
}

/// One-shot notifications reported by [`RevealTimeline::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEvent {
    /// The winner entrance completed. Fired exactly once per run; the
    /// celebration burst hangs off this.
    WinnerSettled,
}

/// Declarative render target for one podium slot at the current clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotVisual {
    pub opacity: f32,
    pub scale: f32,
    /// Tilt in radians. Positive is clockwise.
    pub rotation: f32,
    /// Offset from the slot's resting position, points.
    pub offset: [f32; 2],
    /// Vote count to display right now.
    pub counter: usize,
    /// Shine sweep progress in `[0, 1]` while a sweep is running.
    pub shine: Option<f32>,
    /// Winner glow pulse in `[0, 1]`.
    pub glow: f32,
}

impl SlotVisual {
    /// A slot with nothing to show: fully transparent, at rest.
    pub const HIDDEN: SlotVisual = SlotVisual {
        opacity: 0.0,
        scale: 1.0,
        rotation: 0.0,
        offset: [0.0, 0.0],
        counter: 0,
        shine: None,
        glow: 0.0,
    };
}

// ── Timeline ──

/// Sequences the podium entrance whenever the ranked data changes
/// identity.
///
/// `sync` compares a signature of (candidate id, vote count) per podium
/// seat; a change cancels everything in flight and re-runs the reveal
/// from scratch. Because all outputs derive from the single clock,
/// resetting the clock is the cancellation; there is no tween registry
/// to leak.
#[derive(Debug, Clone)]
pub struct RevealTimeline {
    phase: RevealPhase,
    clock: f32,
    signature: u64,
    burst_fired: bool,
    /// Final vote count per occupied podium slot.
    seats: [Option<usize>; PODIUM_SIZE],
    counters: [CounterTween; PODIUM_SIZE],
}

impl Default for RevealTimeline {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealTimeline {
    pub fn new() -> Self {
        Self {
            phase: RevealPhase::Idle,
            clock: 0.0,
            signature: 0,
            burst_fired: false,
            seats: [None; PODIUM_SIZE],
            counters: std::array::from_fn(|_| {
                CounterTween::new(0, COUNTER_DURATION).with_delay(COUNTER_START)
            }),
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Reconcile the timeline with freshly ranked data. A changed
    /// signature restarts the reveal; an unchanged one is a no-op.
    pub fn sync(&mut self, candidates: &[Candidate], podium: &[RankedEntry]) {
        let signature = podium_signature(candidates, podium);
        if signature == self.signature {
            return;
        }

        log::debug!(
            "podium data changed (signature {:#x} -> {:#x}), restarting reveal",
            self.signature,
            signature
        );

        self.signature = signature;
        self.clock = 0.0;
        self.burst_fired = false;
        self.seats = [None; PODIUM_SIZE];
        for entry in podium.iter().take(PODIUM_SIZE) {
            if let Some(slot) = entry.slot {
                self.seats[slot] = Some(entry.votes);
                self.counters[slot].restart(entry.votes);
            }
        }

        // Idle for one observable instant, then straight back into the
        // entrance: no partial resume.
        self.phase = if self.seats.iter().any(Option::is_some) {
            RevealPhase::Entering
        } else {
            RevealPhase::Idle
        };
    }

    /// Advance the clock by one frame. Returns the burst trigger the
    /// first time the winner entrance completes.
    pub fn tick(&mut self, dt: f32) -> Option<RevealEvent> {
        if self.phase == RevealPhase::Idle {
            return None;
        }

        self.clock += dt.max(0.0);
        for c in &mut self.counters {
            c.advance(dt.max(0.0));
        }

        if !self.burst_fired && self.clock >= WINNER_ENTRANCE {
            self.burst_fired = true;
            self.phase = RevealPhase::Settled;
            return Some(RevealEvent::WinnerSettled);
        }
        None
    }

    /// Whether a repaint is still needed. The winner's idle loops keep
    /// a populated podium animating forever.
    pub fn is_animating(&self) -> bool {
        self.phase != RevealPhase::Idle && self.seats.iter().any(Option::is_some)
    }

    /// The render target for a podium slot at the current clock.
    /// Unoccupied or out-of-range slots are hidden, never an error.
    pub fn visual(&self, slot: usize) -> SlotVisual {
        let Some(&Some(_)) = self.seats.get(slot) else {
            return SlotVisual::HIDDEN;
        };
        if self.phase == RevealPhase::Idle {
            return SlotVisual::HIDDEN;
        }

        let counter = self.counters[slot].value();
        match slot {
            0 => self.winner_visual(counter),
            _ => self.side_visual(slot, counter),
        }
    }

    fn winner_visual(&self, counter: usize) -> SlotVisual {
        let t = anim::ease_out_elastic(self.clock / WINNER_ENTRANCE, ELASTIC_PERIOD);
        let settled = self.clock - WINNER_ENTRANCE;

        let bob = if settled > 0.0 {
            // sine-eased yoyo between 0 and -amplitude
            -BOB_AMPLITUDE * 0.5
                * (1.0 - (std::f32::consts::PI * settled / BOB_PERIOD).cos())
        } else {
            0.0
        };
        let glow = if settled > 0.0 {
            0.5 * (1.0 - (std::f32::consts::TAU * settled / GLOW_PERIOD).cos())
        } else {
            0.0
        };

        SlotVisual {
            opacity: t.clamp(0.0, 1.0),
            scale: anim::lerp(WINNER_SCALE_FROM, WINNER_SCALE_TO, t),
            rotation: anim::lerp(WINNER_TILT_FROM, 0.0, t),
            offset: [0.0, bob],
            counter,
            shine: self.shine_progress(),
            glow,
        }
    }

    fn side_visual(&self, slot: usize, counter: usize) -> SlotVisual {
        let local = (self.clock - SIDE_START) / SIDE_ENTRANCE;
        if local <= 0.0 {
            // Entrance not started: parked off to the side, invisible.
            return SlotVisual {
                counter,
                ..SlotVisual::HIDDEN
            };
        }

        let e = anim::ease_out_back(local, SIDE_BACK_OVERSHOOT);
        let (slide, tilt) = if slot == 1 {
            (RUNNER_UP_SLIDE, -SIDE_TILT)
        } else {
            (THIRD_SLIDE, SIDE_TILT)
        };

        SlotVisual {
            opacity: local.clamp(0.0, 1.0),
            scale: 1.0,
            rotation: anim::lerp(tilt, 0.0, e),
            offset: [anim::lerp(slide, 0.0, e), 0.0],
            counter,
            shine: None,
            glow: 0.0,
        }
    }

    /// Progress of the active shine sweep, if one is running. Sweeps
    /// start after a delay and repeat a bounded number of times with a
    /// fixed pause between plays.
    fn shine_progress(&self) -> Option<f32> {
        let since = self.clock - SHINE_DELAY;
        if since < 0.0 {
            return None;
        }
        let cycle = SHINE_DURATION + SHINE_PAUSE;
        let play = (since / cycle) as u32;
        if play >= SHINE_PLAYS {
            return None;
        }
        let local = since - play as f32 * cycle;
        (local < SHINE_DURATION).then(|| anim::ease_in_out_cubic(local / SHINE_DURATION))
    }
}

/// Identity of the podium: candidate ids and counts folded into one
/// value, in slot order. Any change to membership, order or counts
/// yields a new signature.
fn podium_signature(candidates: &[Candidate], podium: &[RankedEntry]) -> u64 {
    let mut h: u64 = 0xcbf2_9ce4_8422_2325;
    for entry in podium.iter().take(PODIUM_SIZE) {
        if let Some(c) = candidates.get(entry.candidate) {
            for b in c.id.as_bytes() {
                h ^= u64::from(*b);
                h = h.wrapping_mul(0x0000_0100_0000_01B3);
            }
            h ^= entry.votes as u64;
            h = h.wrapping_mul(0x0000_0100_0000_01B3);
        }
    }
    // An empty podium must still differ from "never synced".
    h ^= podium.len() as u64 + 1;
    h
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::election::ranking;
    use crate::model::{Ballot, Candidate};

    fn candidates(counts: &[usize]) -> Vec<Candidate> {
        counts
            .iter()
            .enumerate()
            .map(|(i, &n)| Candidate {
                id: format!("c{i}"),
                name: format!("Candidate {i}"),
                avatar: None,
                position: "President".into(),
                manifesto: None,
                votes: vec![Ballot; n],
                vote_history: None,
            })
            .collect()
    }

    fn synced(counts: &[usize]) -> RevealTimeline {
        let cs = candidates(counts);
        let ranking = ranking::rank(&cs);
        let mut tl = RevealTimeline::new();
        tl.sync(&cs, ranking::podium(&ranking));
        tl
    }

    #[test]
    fn idle_until_ranked_data_arrives() {
        let mut tl = RevealTimeline::new();
        assert_eq!(tl.phase(), RevealPhase::Idle);
        assert_eq!(tl.tick(0.1), None);
        assert_eq!(tl.visual(0), SlotVisual::HIDDEN);

        let tl = synced(&[340, 2200, 180]);
        assert_eq!(tl.phase(), RevealPhase::Entering);
    }

    #[test]
    fn winner_enters_before_side_cards() {
        let mut tl = synced(&[340, 2200, 180]);
        tl.tick(0.2); // before SIDE_START
        assert!(tl.visual(0).opacity > 0.0);
        assert_eq!(tl.visual(1).opacity, 0.0);
        assert_eq!(tl.visual(2).opacity, 0.0);

        tl.tick(0.4); // past SIDE_START
        assert!(tl.visual(1).opacity > 0.0);
        assert!(tl.visual(2).opacity > 0.0);
    }

    #[test]
    fn side_cards_slide_from_opposite_directions() {
        let mut tl = synced(&[340, 2200, 180]);
        tl.tick(SIDE_START + 0.1);
        assert!(tl.visual(1).offset[0] < 0.0);
        assert!(tl.visual(2).offset[0] > 0.0);
        assert!(tl.visual(1).rotation < 0.0);
        assert!(tl.visual(2).rotation > 0.0);
    }

    #[test]
    fn burst_fires_exactly_once_at_winner_settle() {
        let mut tl = synced(&[340, 2200, 180]);
        assert_eq!(tl.tick(1.0), None);
        assert_eq!(tl.phase(), RevealPhase::Entering);

        assert_eq!(tl.tick(0.3), Some(RevealEvent::WinnerSettled));
        assert_eq!(tl.phase(), RevealPhase::Settled);

        for _ in 0..100 {
            assert_eq!(tl.tick(0.1), None);
        }
    }

    #[test]
    fn counters_settle_at_final_counts() {
        let mut tl = synced(&[340, 2200, 180]);
        for _ in 0..40 {
            tl.tick(0.1);
        }
        // 4.0 s > COUNTER_START + COUNTER_DURATION
        assert_eq!(tl.visual(0).counter, 2200);
        assert_eq!(tl.visual(1).counter, 340);
        assert_eq!(tl.visual(2).counter, 180);
    }

    #[test]
    fn counters_hold_zero_before_their_start() {
        let mut tl = synced(&[340, 2200, 180]);
        tl.tick(COUNTER_START - 0.1);
        assert_eq!(tl.visual(0).counter, 0);
    }

    #[test]
    fn unchanged_data_does_not_restart() {
        let cs = candidates(&[340, 2200, 180]);
        let ranking = ranking::rank(&cs);
        let mut tl = RevealTimeline::new();
        tl.sync(&cs, ranking::podium(&ranking));
        tl.tick(2.0);
        assert_eq!(tl.phase(), RevealPhase::Settled);

        tl.sync(&cs, ranking::podium(&ranking));
        assert_eq!(tl.phase(), RevealPhase::Settled);
        // The counter keeps running instead of snapping back to 0.
        assert!(tl.visual(0).counter > 0);
    }

    #[test]
    fn changed_data_cancels_and_restarts_from_scratch() {
        let mut tl = synced(&[340, 2200, 180]);
        tl.tick(2.0);
        assert_eq!(tl.phase(), RevealPhase::Settled);

        let fresh = synced(&[340, 2200, 180]);
        let cs = candidates(&[500, 2200, 180]);
        let ranking = ranking::rank(&cs);
        tl.sync(&cs, ranking::podium(&ranking));

        // Clock reset: visuals equal a fresh timeline's, so no stale
        // tween can overlap the new one.
        assert_eq!(tl.phase(), RevealPhase::Entering);
        assert_eq!(tl.visual(0).opacity, fresh.visual(0).opacity);
        assert_eq!(tl.visual(0).counter, 0);

        // And the burst re-arms.
        assert_eq!(tl.tick(WINNER_ENTRANCE), Some(RevealEvent::WinnerSettled));
    }

    #[test]
    fn short_fields_leave_slots_hidden() {
        let mut tl = synced(&[100, 50]);
        tl.tick(3.0);
        assert!(tl.visual(0).opacity > 0.0);
        assert!(tl.visual(1).opacity > 0.0);
        assert_eq!(tl.visual(2), SlotVisual::HIDDEN);
        assert_eq!(tl.visual(9), SlotVisual::HIDDEN);
    }

    #[test]
    fn empty_podium_stays_idle() {
        let mut tl = synced(&[]);
        assert_eq!(tl.phase(), RevealPhase::Idle);
        assert_eq!(tl.tick(1.0), None);
        assert!(!tl.is_animating());
    }

    #[test]
    fn shine_is_delayed_bounded_and_paused() {
        let mut tl = synced(&[340, 2200, 180]);
        tl.tick(SHINE_DELAY - 0.1);
        assert_eq!(tl.visual(0).shine, None);

        let mut tl = synced(&[340, 2200, 180]);
        tl.tick(SHINE_DELAY + 0.5);
        assert!(tl.visual(0).shine.is_some());

        // Inside the pause between sweeps.
        let mut tl = synced(&[340, 2200, 180]);
        tl.tick(SHINE_DELAY + SHINE_DURATION + 1.0);
        assert_eq!(tl.visual(0).shine, None);

        // After the last sweep ends, never again.
        let mut tl = synced(&[340, 2200, 180]);
        tl.tick(SHINE_DELAY + SHINE_PLAYS as f32 * (SHINE_DURATION + SHINE_PAUSE) + 1.0);
        assert_eq!(tl.visual(0).shine, None);
    }

    #[test]
    fn winner_bobs_after_settling() {
        let mut tl = synced(&[340, 2200, 180]);
        tl.tick(WINNER_ENTRANCE - 0.05);
        assert_eq!(tl.visual(0).offset[1], 0.0);

        tl.tick(BOB_PERIOD / 2.0);
        assert!(tl.visual(0).offset[1] < 0.0);
        assert!(tl.visual(0).glow > 0.0);
    }
}
