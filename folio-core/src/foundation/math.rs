/// Deterministic SplitMix64 generator.
///
/// Decorative randomness (ambient shapes, particle clouds) is drawn from a seeded
/// generator so a session's layout is fixed once generated and reproducible in tests.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    /// Seeded generator.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_f64_01(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Uniform value in `[min, max)`; returns `min` when the range is empty.
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        if max <= min {
            return min;
        }
        min + (max - min) * self.next_f64_01()
    }

    /// Uniform value in `[-amp, amp)`.
    pub fn symmetric(&mut self, amp: f64) -> f64 {
        self.range(-amp, amp)
    }

    /// Uniformly chosen element, `None` for an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = (self.next_u64() % items.len() as u64) as usize;
        items.get(idx)
    }
}

/// Unclamped scalar interpolation.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Map `x` from `[in0, in1]` onto `[out0, out1]`, clamping to the output range.
pub fn map_range_clamped(x: f64, in0: f64, in1: f64, out0: f64, out1: f64) -> f64 {
    if (in1 - in0).abs() < f64::EPSILON {
        return if x < in0 { out0 } else { out1 };
    }
    let t = ((x - in0) / (in1 - in0)).clamp(0.0, 1.0);
    lerp(out0, out1, t)
}

/// Fraction of the remaining distance to cover after `dt` seconds when closing
/// `per_frame` of the gap every 1/60s.
pub fn damp_factor(per_frame: f64, dt: f64) -> f64 {
    let per_frame = per_frame.clamp(0.0, 1.0);
    1.0 - (1.0 - per_frame).powf((dt * 60.0).max(0.0))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
