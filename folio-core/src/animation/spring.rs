use crate::foundation::core::Point;
use crate::foundation::error::{FolioError, FolioResult};

/// Largest integration step; longer frames are split so motion does not depend
/// on the host's frame rate.
const MAX_STEP_SECS: f64 = 1.0 / 240.0;

/// Damped harmonic oscillator parameters (framer-motion compatible units).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpringParams {
    /// Restoring force per unit of displacement.
    pub stiffness: f64,
    /// Opposing force per unit of velocity.
    pub damping: f64,
    /// Moving mass.
    pub mass: f64,
    /// Distance to target under which the spring may settle.
    pub rest_delta: f64,
    /// Speed under which the spring may settle.
    pub rest_speed: f64,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
            rest_delta: 0.01,
            rest_speed: 0.01,
        }
    }
}

impl SpringParams {
    /// Spring with the given stiffness and damping and unit mass.
    pub fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            ..Self::default()
        }
    }

    /// Reject parameters that cannot settle or cannot be integrated.
    pub fn validate(&self) -> FolioResult<()> {
        let finite = [
            self.stiffness,
            self.damping,
            self.mass,
            self.rest_delta,
            self.rest_speed,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(FolioError::animation("spring parameters must be finite"));
        }
        if self.stiffness <= 0.0 {
            return Err(FolioError::animation("spring stiffness must be > 0"));
        }
        if self.damping < 0.0 {
            return Err(FolioError::animation("spring damping must be >= 0"));
        }
        if self.mass <= 0.0 {
            return Err(FolioError::animation("spring mass must be > 0"));
        }
        if self.rest_delta < 0.0 || self.rest_speed < 0.0 {
            return Err(FolioError::animation("spring rest thresholds must be >= 0"));
        }
        Ok(())
    }
}

/// Scalar value eased toward a target by a spring.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    params: SpringParams,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    /// Spring resting at `value`.
    pub fn new(params: SpringParams, value: f64) -> Self {
        Self {
            params,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Current velocity in units per second.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Value the spring is moving toward.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Retarget while keeping the current velocity.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Jump to `value` and rest there.
    pub fn snap_to(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// True once the spring has settled exactly on its target.
    pub fn is_at_rest(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advance by `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        if !dt.is_finite() || dt <= 0.0 || self.is_at_rest() {
            return;
        }
        let steps = (dt / MAX_STEP_SECS - 1e-9).ceil().max(1.0);
        let h = dt / steps;
        let SpringParams {
            stiffness,
            damping,
            mass,
            rest_delta,
            rest_speed,
        } = self.params;
        for _ in 0..steps as u32 {
            let force = -stiffness * (self.value - self.target) - damping * self.velocity;
            self.velocity += force / mass * h;
            self.value += self.velocity * h;
            if self.velocity.abs() <= rest_speed && (self.value - self.target).abs() <= rest_delta {
                self.snap_to(self.target);
                break;
            }
        }
    }
}

/// Two-dimensional spring sharing one set of parameters across both axes.
#[derive(Clone, Copy, Debug)]
pub struct Spring2 {
    x: Spring,
    y: Spring,
}

impl Spring2 {
    /// Spring resting at `at`.
    pub fn new(params: SpringParams, at: Point) -> Self {
        Self {
            x: Spring::new(params, at.x),
            y: Spring::new(params, at.y),
        }
    }

    /// Current position.
    pub fn value(&self) -> Point {
        Point::new(self.x.value(), self.y.value())
    }

    /// Position the spring is moving toward.
    pub fn target(&self) -> Point {
        Point::new(self.x.target(), self.y.target())
    }

    /// Retarget both axes.
    pub fn set_target(&mut self, target: Point) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    /// Jump to `at` and rest there.
    pub fn snap_to(&mut self, at: Point) {
        self.x.snap_to(at.x);
        self.y.snap_to(at.y);
    }

    /// True once both axes have settled.
    pub fn is_at_rest(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest()
    }

    /// Advance by `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        self.x.step(dt);
        self.y.step(dt);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
