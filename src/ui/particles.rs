//! Drifting particles behind the hero.
//!
//! Each particle starts at a random point of the hero, drifts in a straight
//! line for its own period (10 to 20 s), fading in and back out, then starts
//! over. Positions are a pure function of the clock, so any frame can be
//! rebuilt from the field and the current time.

use std::time::Duration;

use rand::Rng;

/// Particles scattered over the hero by default.
pub const DEFAULT_PARTICLE_COUNT: usize = 50;

/// Glyph drawn for a particle.
pub const PARTICLE_GLYPH: &str = "·";

/// Distinct brightness steps a visible particle can take.
pub const PARTICLE_LEVELS: u8 = 3;

const MIN_PERIOD_MS: u64 = 10_000;
const MAX_PERIOD_MS: u64 = 20_000;

/// Coordinates are in thousandths of the hero's width or height.
const SCALE: f32 = 1000.0;

/// One particle's motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Particle {
    /// Start point, 0..=1000 on each axis
    pub origin: (u16, u16),
    /// Travel over one period, -500..=500 on each axis
    pub drift: (i16, i16),
    pub period: Duration,
}

/// A particle's cell in one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticleCell {
    pub x: u16,
    pub y: u16,
    /// Brightness, 1..=PARTICLE_LEVELS
    pub level: u8,
}

/// The hero's particle layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

/// A field without particles.
pub static NO_PARTICLES: ParticleField = ParticleField::empty();

impl ParticleField {
    pub const fn empty() -> Self {
        Self {
            particles: Vec::new(),
        }
    }

    /// Scatter `count` particles with random origins, drifts and periods.
    pub fn scatter<R: Rng>(count: usize, rng: &mut R) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                origin: (rng.gen_range(0..=1000), rng.gen_range(0..=1000)),
                drift: (rng.gen_range(-500..=500), rng.gen_range(-500..=500)),
                period: Duration::from_millis(rng.gen_range(MIN_PERIOD_MS..=MAX_PERIOD_MS)),
            })
            .collect();
        Self { particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Visible particle cells at `now` in a `width` x `height` area.
    ///
    /// Particles that drifted outside the area or are fully faded are left
    /// out.
    pub fn cells(&self, now: Duration, width: u16, height: u16) -> Vec<ParticleCell> {
        if width == 0 || height == 0 {
            return Vec::new();
        }
        self.particles
            .iter()
            .filter_map(|particle| particle.cell(now, width, height))
            .collect()
    }
}

impl Particle {
    /// Fraction of the current cycle elapsed at `now`.
    fn phase(&self, now: Duration) -> f32 {
        let period = self.period.as_millis().max(1);
        (now.as_millis() % period) as f32 / period as f32
    }

    fn cell(&self, now: Duration, width: u16, height: u16) -> Option<ParticleCell> {
        let phase = self.phase(now);
        // Fades in over the first half of the cycle and out over the second
        let opacity = 1.0 - (2.0 * phase - 1.0).abs();
        let level = (opacity * f32::from(PARTICLE_LEVELS)).floor() as u8;
        if level == 0 {
            return None;
        }

        let x = (f32::from(self.origin.0) + f32::from(self.drift.0) * phase) / SCALE;
        let y = (f32::from(self.origin.1) + f32::from(self.drift.1) * phase) / SCALE;
        if !(0.0..1.0).contains(&x) || !(0.0..1.0).contains(&y) {
            return None;
        }

        Some(ParticleCell {
            x: (x * f32::from(width)) as u16,
            y: (y * f32::from(height)) as u16,
            level: level.min(PARTICLE_LEVELS),
        })
    }
}
