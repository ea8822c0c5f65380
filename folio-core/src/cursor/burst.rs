use crate::config::BurstConfig;
use crate::foundation::core::{Point, Vec2};

/// One particle of a click burst, ready to paint.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ParticleFrame {
    /// Particle center in viewport pixels.
    pub center: Point,
    /// Spawn radius times `scale`, in pixels.
    pub radius: f64,
    /// Scale relative to the spawn radius, 1 → 0.
    pub scale: f64,
    /// Opacity, 1 → 0.
    pub opacity: f64,
}

/// Fire-and-forget radial burst spawned on release.
///
/// Particles leave `origin` at equal angular spacing and shrink and fade to nothing
/// over the configured duration, after which the burst reports finished and holds
/// no further state worth keeping.
#[derive(Clone, Debug)]
pub struct ParticleBurst {
    origin: Point,
    age: f64,
    cfg: BurstConfig,
}

impl ParticleBurst {
    /// New burst at `origin`, age zero.
    pub fn new(origin: Point, cfg: &BurstConfig) -> Self {
        Self {
            origin,
            age: 0.0,
            cfg: cfg.clone(),
        }
    }

    /// Burst origin.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Seconds since spawn.
    pub fn age(&self) -> f64 {
        self.age
    }

    /// Advance by `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        if dt > 0.0 {
            self.age = (self.age + dt).min(self.cfg.duration);
        }
    }

    /// True once every particle has reached its terminal state.
    pub fn is_finished(&self) -> bool {
        self.age >= self.cfg.duration
    }

    /// Particles at the current age.
    pub fn particles(&self) -> Vec<ParticleFrame> {
        let p = if self.cfg.duration > 0.0 {
            (self.age / self.cfg.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let e = self.cfg.ease.apply(p);
        let fade = (1.0 - e).clamp(0.0, 1.0);
        let count = self.cfg.count.max(1);
        (0..count)
            .map(|i| {
                let angle = std::f64::consts::TAU * f64::from(i) / f64::from(count);
                let dir = Vec2::from_angle(angle);
                ParticleFrame {
                    center: self.origin + dir * (self.cfg.distance * e),
                    radius: self.cfg.particle_radius * fade,
                    scale: fade,
                    opacity: fade,
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cursor/burst.rs"]
mod tests;
