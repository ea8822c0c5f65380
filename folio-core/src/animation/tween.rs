use crate::animation::ease::Ease;
use crate::foundation::core::Vec2;
use crate::foundation::math::lerp;

/// Time-bounded interpolation from `from` to `to`.
///
/// Time is measured in seconds since the tween was started; `delay` postpones the
/// start and the value holds at `from` until then.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tween {
    /// Start value.
    pub from: f64,
    /// End value.
    pub to: f64,
    /// Seconds from start to end, after the delay.
    pub duration: f64,
    /// Seconds to hold `from` before moving.
    pub delay: f64,
    /// Timing curve.
    pub ease: Ease,
}

impl Tween {
    /// Undelayed tween.
    pub fn new(from: f64, to: f64, duration: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration,
            delay: 0.0,
            ease,
        }
    }

    /// Same tween starting `delay` seconds later.
    pub fn with_delay(self, delay: f64) -> Self {
        Self {
            delay: delay.max(0.0),
            ..self
        }
    }

    /// Linear progress in `[0, 1]` at time `t`.
    pub fn progress(&self, t: f64) -> f64 {
        let local = t - self.delay;
        if local <= 0.0 {
            return 0.0;
        }
        if self.duration <= 0.0 {
            return 1.0;
        }
        (local / self.duration).min(1.0)
    }

    /// Eased value at time `t`.
    pub fn sample(&self, t: f64) -> f64 {
        lerp(self.from, self.to, self.ease.apply(self.progress(t)))
    }

    /// True once the end value has been reached.
    pub fn is_finished(&self, t: f64) -> bool {
        self.progress(t) >= 1.0
    }

    /// Total time including the delay.
    pub fn end_time(&self) -> f64 {
        self.delay + self.duration.max(0.0)
    }
}

/// Two-dimensional tween that can be retargeted mid-flight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween2 {
    from: Vec2,
    to: Vec2,
    started_at: f64,
    duration: f64,
    ease: Ease,
}

impl Tween2 {
    /// Tween resting at `at`.
    pub fn resting(at: Vec2, duration: f64, ease: Ease) -> Self {
        Self {
            from: at,
            to: at,
            started_at: 0.0,
            duration,
            ease,
        }
    }

    /// Value at absolute time `now`.
    pub fn sample(&self, now: f64) -> Vec2 {
        let t = if self.duration <= 0.0 {
            1.0
        } else {
            ((now - self.started_at) / self.duration).clamp(0.0, 1.0)
        };
        self.from.lerp(self.to, self.ease.apply(t))
    }

    /// Start a new tween from the current value toward `to` at time `now`.
    pub fn retarget(&mut self, to: Vec2, now: f64) {
        self.from = self.sample(now);
        self.to = to;
        self.started_at = now;
    }

    /// Current destination.
    pub fn target(&self) -> Vec2 {
        self.to
    }
}

/// Linear progress of an endlessly repeating back-and-forth loop.
///
/// Odd cycles run in reverse, so the value climbs 0 → 1 over `duration` and falls
/// back to 0 over the next `duration`.
pub fn ping_pong(t: f64, duration: f64) -> f64 {
    if duration <= 0.0 || t <= 0.0 {
        return 0.0;
    }
    let cycles = t / duration;
    let cycle = cycles.floor();
    let local = cycles - cycle;
    if cycle as u64 % 2 == 0 {
        local
    } else {
        1.0 - local
    }
}

/// Keyframe-style loop through `values` (evenly spaced), repeated in reverse.
pub fn ping_pong_keys(t: f64, duration: f64, values: &[f64], ease: Ease) -> f64 {
    match values {
        [] => 0.0,
        [only] => *only,
        _ => {
            let p = ping_pong(t, duration) * (values.len() - 1) as f64;
            let i = (p.floor() as usize).min(values.len() - 2);
            lerp(values[i], values[i + 1], ease.apply(p - i as f64))
        }
    }
}

/// Start delay of the `index`-th item in a staggered group.
pub fn stagger(base_delay: f64, index: usize, step: f64) -> f64 {
    base_delay + index as f64 * step
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
