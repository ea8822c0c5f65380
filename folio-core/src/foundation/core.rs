use crate::foundation::error::{FolioError, FolioResult};

pub use kurbo::{Point, Rect, Size, Vec2};

/// Simulation frame rate used when stepping components at a fixed cadence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Frames per `den` seconds.
    pub num: u32,
    /// Denominator, must be > 0.
    pub den: u32,
}

impl Fps {
    /// Build a validated frame rate.
    pub fn new(num: u32, den: u32) -> FolioResult<Self> {
        if den == 0 {
            return Err(FolioError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(FolioError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Timestamp of frame `frames` in seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    /// Number of whole frames elapsed at `secs`.
    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64()).floor().max(0.0) as u64
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha, 255 is opaque.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque color from channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent black.
    pub const fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Parse `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(s: &str) -> FolioResult<Self> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| FolioError::validation(format!("color '{s}' must start with '#'")))?;
        if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
            return Err(FolioError::validation(format!(
                "color '{s}' must be #rrggbb or #rrggbbaa"
            )));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| FolioError::validation(format!("color '{s}' has non-hex digits")))
        };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a: if hex.len() == 8 { channel(6)? } else { 255 },
        })
    }

    /// Same color with alpha taken from a `[0, 1]` opacity.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }

    /// Alpha as a `[0, 1]` float.
    pub fn alpha_f64(self) -> f64 {
        f64::from(self.a) / 255.0
    }
}

/// World-space 3D vector used by the scene graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Vec3(pub [f64; 3]);

impl Vec3 {
    /// Origin.
    pub const ZERO: Self = Self([0.0, 0.0, 0.0]);

    /// Build from components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self([x, y, z])
    }

    /// X component.
    pub fn x(self) -> f64 {
        self.0[0]
    }

    /// Y component.
    pub fn y(self) -> f64 {
        self.0[1]
    }

    /// Z component.
    pub fn z(self) -> f64 {
        self.0[2]
    }

    /// Component-wise linear interpolation, `t` unclamped.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = other.0;
        Self([ax + (bx - ax) * t, ay + (by - ay) * t, az + (bz - az) * t])
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Self) -> f64 {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = other.0;
        ((bx - ax).powi(2) + (by - ay).powi(2) + (bz - az).powi(2)).sqrt()
    }
}

impl std::ops::Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self([self.0[0] + rhs.0[0], self.0[1] + rhs.0[1], self.0[2] + rhs.0[2]])
    }
}

/// Hit-testing behaviour of a painted layer.
///
/// Every decorative output carries `None`: overlays must let clicks through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerEvents {
    /// Layer receives pointer events.
    Auto,
    /// Layer is click-through.
    #[default]
    None,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
