//! Numeric counter tween: animates a displayed vote total from 0 to its
//! final value.

use crate::anim;

/// A single counter tween. One instance per podium slot; restarting
/// supersedes whatever was running, so two tweens can never stack on
/// the same display.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterTween {
    target: usize,
    duration: f32,
    delay: f32,
    clock: f32,
}

impl CounterTween {
    pub fn new(target: usize, duration: f32) -> Self {
        Self {
            target,
            duration: duration.max(1e-3),
            delay: 0.0,
            clock: 0.0,
        }
    }

    /// Hold the displayed value at 0 for `delay` seconds before the
    /// count-up begins.
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// Supersede the running tween with a fresh one toward `target`.
    pub fn restart(&mut self, target: usize) {
        self.target = target;
        self.clock = 0.0;
    }

    pub fn advance(&mut self, dt: f32) {
        self.clock += dt.max(0.0);
    }

    /// The integer to display right now. Eased, rounded, and never
    /// negative; a target of 0 settles at 0 immediately.
    pub fn value(&self) -> usize {
        if self.target == 0 {
            return 0;
        }
        let t = ((self.clock - self.delay) / self.duration).clamp(0.0, 1.0);
        (self.target as f32 * anim::ease_out_cubic(t)).round() as usize
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn finished(&self) -> bool {
        self.clock >= self.delay + self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_target_settles_immediately() {
        let mut tween = CounterTween::new(0, 2.0);
        assert_eq!(tween.value(), 0);
        tween.advance(0.1);
        assert_eq!(tween.value(), 0);
    }

    #[test]
    fn counts_up_to_target() {
        let mut tween = CounterTween::new(340, 2.0);
        assert_eq!(tween.value(), 0);
        tween.advance(1.0);
        let mid = tween.value();
        assert!(mid > 0 && mid < 340);
        tween.advance(1.5);
        assert_eq!(tween.value(), 340);
        assert!(tween.finished());
    }

    #[test]
    fn values_never_decrease() {
        let mut tween = CounterTween::new(2200, 2.0).with_delay(0.7);
        let mut last = tween.value();
        for _ in 0..60 {
            tween.advance(0.05);
            let v = tween.value();
            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn delay_holds_at_zero() {
        let mut tween = CounterTween::new(180, 2.0).with_delay(0.7);
        tween.advance(0.5);
        assert_eq!(tween.value(), 0);
        tween.advance(0.5);
        assert!(tween.value() > 0);
    }

    #[test]
    fn restart_supersedes_prior_tween() {
        let mut tween = CounterTween::new(340, 2.0);
        tween.advance(5.0);
        assert_eq!(tween.value(), 340);
        tween.restart(50);
        assert_eq!(tween.value(), 0);
        tween.advance(5.0);
        assert_eq!(tween.value(), 50);
    }
}
