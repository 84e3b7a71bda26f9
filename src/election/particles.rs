//! Celebration burst over the winning podium card.
//!
//! One trigger spawns a fixed number of short-lived decorative
//! particles at the card's centroid. Every particle flies outward, then
//! fades and is removed; the system keeps no state beyond the live
//! particles and can be re-triggered at any time. Randomness comes from
//! an injectable deterministic generator so tests can pin the output.

use crate::anim;

/// Particles spawned per burst.
pub const BURST_COUNT: usize = 60;

/// Downward drift applied while a particle fades out.
pub const FADE_DROP: f32 = 50.0;

/// Celebration palette: gold, pink, sky, lime, flame, violet.
pub const PALETTE: [[f32; 4]; 6] = [
    [1.0, 0.84, 0.0, 1.0],
    [1.0, 0.75, 0.80, 1.0],
    [0.53, 0.81, 0.92, 1.0],
    [0.20, 0.80, 0.20, 1.0],
    [1.0, 0.27, 0.0, 1.0],
    [0.58, 0.44, 0.86, 1.0],
];

// ── Random source ──

/// Deterministic xorshift generator. Seeded per burst; the same seed
/// reproduces the same shower.
#[derive(Debug, Clone)]
pub struct BurstRng {
    state: u64,
}

impl BurstRng {
    pub fn new(seed: u64) -> Self {
        // A zero state would lock the generator at zero forever.
        Self {
            state: seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1,
        }
    }

    fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Uniform in `[0, 1)`.
    pub fn unit(&mut self) -> f32 {
        (self.next() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Uniform in `[lo, hi)`.
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.unit() * (hi - lo)
    }

    pub fn index(&mut self, len: usize) -> usize {
        (self.unit() * len as f32) as usize % len.max(1)
    }
}

// ── Particles ──

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleShape {
    Circle,
    Square,
    Triangle,
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub shape: ParticleShape,
    pub color: [f32; 4],
    /// Base size in points; the render size also scales over flight.
    pub size: f32,
    pub origin: [f32; 2],
    /// Total outward displacement reached at the end of the flight.
    pub displacement: [f32; 2],
    /// Total rotation over the flight, radians.
    pub spin: f32,
    pub peak_opacity: f32,
    /// Scale reached at the end of the flight.
    pub end_scale: f32,
    /// Outward flight duration, seconds.
    pub flight: f32,
    /// Fade-out duration after the flight, seconds.
    pub fade: f32,
    pub age: f32,
}

impl Particle {
    pub fn alive(&self) -> bool {
        self.age < self.flight + self.fade
    }

    fn flight_t(&self) -> f32 {
        anim::ease_out_cubic(self.age / self.flight)
    }

    /// Current center position.
    pub fn pos(&self) -> [f32; 2] {
        let t = self.flight_t();
        let drop = if self.age > self.flight {
            FADE_DROP * anim::ease_in_quad((self.age - self.flight) / self.fade)
        } else {
            0.0
        };
        [
            self.origin[0] + self.displacement[0] * t,
            self.origin[1] + self.displacement[1] * t + drop,
        ]
    }

    pub fn opacity(&self) -> f32 {
        if self.age <= self.flight {
            self.peak_opacity * self.flight_t()
        } else {
            let t = anim::ease_in_quad((self.age - self.flight) / self.fade);
            self.peak_opacity * (1.0 - t)
        }
    }

    pub fn rotation(&self) -> f32 {
        self.spin * self.flight_t()
    }

    /// Render size: base size scaled along the flight.
    pub fn render_size(&self) -> f32 {
        self.size * anim::lerp(1.0, self.end_scale, self.flight_t())
    }
}

// ── Burst ──

#[derive(Debug, Clone, Default)]
pub struct Burst {
    pub particles: Vec<Particle>,
}

impl Burst {
    /// Spawn a burst at `center`. A missing center (winner card not on
    /// screen) produces an empty burst rather than an error.
    pub fn spawn(center: Option<[f32; 2]>, rng: &mut BurstRng) -> Self {
        let Some(origin) = center else {
            return Self::default();
        };

        let particles = (0..BURST_COUNT)
            .map(|_| {
                let shape = match rng.index(3) {
                    0 => ParticleShape::Circle,
                    1 => ParticleShape::Square,
                    _ => ParticleShape::Triangle,
                };
                let size = match shape {
                    ParticleShape::Circle => rng.range(5.0, 15.0),
                    ParticleShape::Square => rng.range(4.0, 12.0),
                    ParticleShape::Triangle => rng.range(8.0, 20.0),
                };
                Particle {
                    shape,
                    color: PALETTE[rng.index(PALETTE.len())],
                    size,
                    origin,
                    displacement: [rng.range(-150.0, 150.0), rng.range(-150.0, 150.0)],
                    spin: rng.range(0.0, std::f32::consts::TAU),
                    peak_opacity: rng.range(0.3, 1.0),
                    end_scale: rng.range(0.5, 2.5),
                    flight: rng.range(1.5, 3.5),
                    fade: rng.range(1.0, 2.0),
                    age: 0.0,
                }
            })
            .collect();

        Self { particles }
    }

    /// Age every particle and drop the ones whose lifecycle completed.
    /// Returns whether anything is still alive.
    pub fn update(&mut self, dt: f32) -> bool {
        for p in &mut self.particles {
            p.age += dt;
        }
        self.particles.retain(Particle::alive);
        !self.particles.is_empty()
    }

    pub fn is_done(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_target_spawns_nothing() {
        let mut rng = BurstRng::new(7);
        let burst = Burst::spawn(None, &mut rng);
        assert!(burst.is_done());
    }

    #[test]
    fn spawns_fixed_count_from_palette() {
        let mut rng = BurstRng::new(42);
        let burst = Burst::spawn(Some([100.0, 50.0]), &mut rng);
        assert_eq!(burst.particles.len(), BURST_COUNT);
        for p in &burst.particles {
            assert!(PALETTE.contains(&p.color));
            assert!(p.peak_opacity >= 0.3 && p.peak_opacity <= 1.0);
            assert!(p.flight >= 1.5 && p.flight <= 3.5);
            assert_eq!(p.origin, [100.0, 50.0]);
        }
    }

    #[test]
    fn same_seed_reproduces_the_shower() {
        let a = Burst::spawn(Some([0.0, 0.0]), &mut BurstRng::new(9));
        let b = Burst::spawn(Some([0.0, 0.0]), &mut BurstRng::new(9));
        for (pa, pb) in a.particles.iter().zip(&b.particles) {
            assert_eq!(pa.shape, pb.shape);
            assert_eq!(pa.size, pb.size);
            assert_eq!(pa.displacement, pb.displacement);
        }
    }

    #[test]
    fn all_three_shapes_appear() {
        let mut rng = BurstRng::new(1);
        let burst = Burst::spawn(Some([0.0, 0.0]), &mut rng);
        let has = |s| burst.particles.iter().any(|p| p.shape == s);
        assert!(has(ParticleShape::Circle));
        assert!(has(ParticleShape::Square));
        assert!(has(ParticleShape::Triangle));
    }

    #[test]
    fn particles_self_terminate() {
        let mut rng = BurstRng::new(3);
        let mut burst = Burst::spawn(Some([0.0, 0.0]), &mut rng);
        // Longest possible lifecycle is flight 3.5 + fade 2.0.
        assert!(burst.update(1.0));
        burst.update(5.0);
        assert!(burst.is_done());
    }

    #[test]
    fn opacity_rises_then_falls_to_zero() {
        let mut rng = BurstRng::new(11);
        let mut burst = Burst::spawn(Some([0.0, 0.0]), &mut rng);
        let p0 = burst.particles[0].clone();
        assert_eq!(p0.opacity(), 0.0);

        burst.particles[0].age = p0.flight;
        assert!((burst.particles[0].opacity() - p0.peak_opacity).abs() < 1e-4);

        burst.particles[0].age = p0.flight + p0.fade;
        assert!(burst.particles[0].opacity() < 1e-4);
    }
}
