//! Easing curves shared by the reveal timeline, counter tweens and the
//! particle burst.
//!
//! Every function maps a normalized time `t` in `[0, 1]` to a progress
//! value. Out-of-range inputs are clamped, so callers can feed a raw
//! clock-over-duration ratio. Overshooting curves (back, elastic) may
//! return values outside `[0, 1]` inside the interval; clamp at the call
//! site when the animated property cannot overshoot (opacity).

use std::f32::consts::{PI, TAU};

/// Linear interpolation between `a` and `b`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Quadratic ease-in: slow start, used for fade-outs.
pub fn ease_in_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

/// Cubic ease-out: fast start, gentle settle.
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let u = 1.0 - t;
    1.0 - u * u * u
}

/// Cubic ease-in-out, used for the shine sweep.
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Sinusoidal ease-in-out, used for idle oscillation.
pub fn ease_in_out_sine(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    -(f32::cos(PI * t) - 1.0) / 2.0
}

/// Back ease-out: overshoots the target once, then settles.
/// `overshoot` controls how far past the target the curve swings.
pub fn ease_out_back(t: f32, overshoot: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let c1 = overshoot;
    let c3 = c1 + 1.0;
    let u = t - 1.0;
    1.0 + c3 * u * u * u + c1 * u * u
}

/// Elastic ease-out with the given period: a springy settle that rings
/// a few times before coming to rest at 1.
pub fn ease_out_elastic(t: f32, period: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let p = period.max(1e-3);
    (2.0_f32).powf(-10.0 * t) * ((t - p / 4.0) * TAU / p).sin() + 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_in_quad(0.0), 0.0);
        assert_eq!(ease_in_quad(1.0), 1.0);
        assert_eq!(ease_out_elastic(0.0, 0.5), 0.0);
        assert_eq!(ease_out_elastic(1.0, 0.5), 1.0);
        assert_eq!(ease_out_back(1.0, 1.5), 1.0);
        assert!((ease_in_out_sine(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(ease_out_cubic(-2.0), 0.0);
        assert_eq!(ease_out_cubic(3.0), 1.0);
        assert_eq!(ease_out_back(1.5, 1.5), 1.0);
    }

    #[test]
    fn back_overshoots_inside_interval() {
        let peak = (1..100)
            .map(|i| ease_out_back(i as f32 / 100.0, 1.5))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn elastic_rings_past_target() {
        let peak = (1..200)
            .map(|i| ease_out_elastic(i as f32 / 200.0, 0.5))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0);
    }
}
