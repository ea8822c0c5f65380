use crate::animation::ease::Ease;
use crate::animation::tween::{ping_pong, ping_pong_keys};
use crate::foundation::core::{Point, PointerEvents, Rgba8, Size, Vec2};
use crate::foundation::error::{FolioError, FolioResult};
use crate::foundation::math::Rng64;

/// Site accent colors.
pub mod palette {
    use crate::foundation::core::Rgba8;

    /// Primary violet.
    pub const PRIMARY: Rgba8 = Rgba8::rgb(0x6C, 0x63, 0xFF);
    /// Secondary pink.
    pub const PINK: Rgba8 = Rgba8::rgb(0xFF, 0x65, 0x84);
    /// Neon cyan.
    pub const CYAN: Rgba8 = Rgba8::rgb(0x00, 0xD9, 0xF5);
    /// Neon green.
    pub const GREEN: Rgba8 = Rgba8::rgb(0x39, 0xFF, 0x14);
    /// Plain white.
    pub const WHITE: Rgba8 = Rgba8::rgb(0xFF, 0xFF, 0xFF);
}

/// How shape colors are drawn from the palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteMode {
    /// Uniformly random per shape.
    #[default]
    Random,
    /// By shape index, wrapping.
    Cycle,
}

/// Recipe for a field of floating shapes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FieldSpec {
    /// Number of shapes.
    pub count: usize,
    /// Diameter range in pixels, `[min, max)`.
    pub size: [f64; 2],
    /// Maximum drift per axis; each shape drifts by a random offset in `[-drift, drift)`.
    pub drift: f64,
    /// Half-cycle duration range in seconds.
    pub duration: [f64; 2],
    /// Base opacity range.
    pub alpha: [f64; 2],
    /// Colors to draw from.
    pub palette: Vec<Rgba8>,
    /// Color assignment.
    pub palette_mode: PaletteMode,
    /// Optional opacity keyframes looped with the drift (overrides base opacity).
    pub opacity_pulse: Option<Vec<f64>>,
    /// Random start offset as a fraction of each shape's cycle.
    pub phase_spread: f64,
    /// Blur radius hint for the painter.
    pub blur: f64,
}

impl FieldSpec {
    /// Translucent bubbles behind the hero.
    pub fn hero() -> Self {
        Self {
            count: 20,
            size: [50.0, 150.0],
            drift: 50.0,
            duration: [10.0, 20.0],
            alpha: [0.0, 0.1],
            palette: vec![palette::WHITE],
            palette_mode: PaletteMode::Random,
            opacity_pulse: None,
            phase_spread: 0.0,
            blur: 10.0,
        }
    }

    /// Soft green/cyan glows behind the skills grid.
    pub fn skills() -> Self {
        Self {
            count: 10,
            size: [50.0, 250.0],
            drift: 25.0,
            duration: [10.0, 20.0],
            alpha: [0.1, 0.1],
            palette: vec![palette::GREEN, palette::CYAN],
            palette_mode: PaletteMode::Random,
            opacity_pulse: None,
            phase_spread: 0.0,
            blur: 40.0,
        }
    }

    /// Large pulsing neon lights behind the projects grid.
    pub fn projects() -> Self {
        Self {
            count: 3,
            size: [200.0, 600.0],
            drift: 50.0,
            duration: [20.0, 40.0],
            alpha: [0.3, 0.3],
            palette: vec![palette::CYAN, palette::PINK],
            palette_mode: PaletteMode::Cycle,
            opacity_pulse: Some(vec![0.2, 0.4, 0.2]),
            phase_spread: 0.0,
            blur: 80.0,
        }
    }

    /// Preset by name (`hero`, `skills`, `projects`).
    pub fn preset(name: &str) -> FolioResult<Self> {
        match name {
            "hero" => Ok(Self::hero()),
            "skills" => Ok(Self::skills()),
            "projects" => Ok(Self::projects()),
            other => Err(FolioError::validation(format!(
                "unknown field preset '{other}' (expected hero, skills or projects)"
            ))),
        }
    }

    /// Reject specs that cannot produce a looping field.
    pub fn validate(&self) -> FolioResult<()> {
        if self.palette.is_empty() {
            return Err(FolioError::validation("field palette must not be empty"));
        }
        if !(self.duration[0] > 0.0 && self.duration[1] >= self.duration[0]) {
            return Err(FolioError::validation(
                "field duration must be positive with min <= max",
            ));
        }
        if !(self.size[0] >= 0.0 && self.size[1] >= self.size[0]) {
            return Err(FolioError::validation(
                "field size must be non-negative with min <= max",
            ));
        }
        if !(self.drift >= 0.0) {
            return Err(FolioError::validation("field drift must be >= 0"));
        }
        Ok(())
    }
}

/// One decorative shape with its frozen motion parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AmbientShape {
    /// Position in the generated set.
    pub index: usize,
    /// Top-left corner as a fraction of the container.
    pub anchor: Point,
    /// Diameter in pixels.
    pub size: f64,
    /// Drawn from the spec's palette at generation.
    pub color: Rgba8,
    /// Opacity used when the spec has no pulse keyframes.
    pub alpha: f64,
    /// Offset reached at the far end of the loop.
    pub drift: Vec2,
    /// Seconds per half-cycle.
    pub duration: f64,
    /// Seconds the loop is advanced at t = 0.
    pub phase: f64,
}

/// A shape at one instant, ready to paint.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ShapeFrame {
    /// Index into [`AmbientField::shapes`].
    pub index: usize,
    /// Center in container pixels, including the current drift.
    pub center: Point,
    /// Diameter in pixels.
    pub size: f64,
    /// Opaque fill; transparency comes from `opacity`.
    pub color: Rgba8,
    /// Base alpha, or the pulse keyframe value at this instant.
    pub opacity: f64,
    /// Gaussian blur radius in pixels for the painter.
    pub blur: f64,
}

/// The whole field at one instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FieldFrame {
    /// Seconds since mount.
    pub time: f64,
    /// Shapes in paint order.
    pub shapes: Vec<ShapeFrame>,
    /// Always click-through.
    pub pointer_events: PointerEvents,
}

/// Decorative floating shapes, generated once and animated purely by time.
///
/// The shape set is frozen at generation; sampling never mutates it, so re-rendering
/// at any rate yields the same layout for the same time.
#[derive(Clone, Debug)]
pub struct AmbientField {
    spec: FieldSpec,
    seed: u64,
    shapes: Vec<AmbientShape>,
}

impl AmbientField {
    /// Generate the shape set for `spec` from `seed`.
    #[tracing::instrument(skip(spec), fields(count = spec.count))]
    pub fn generate(spec: FieldSpec, seed: u64) -> FolioResult<Self> {
        spec.validate()?;
        let mut rng = Rng64::new(seed);
        let shapes = (0..spec.count)
            .map(|index| {
                let size = rng.range(spec.size[0], spec.size[1]);
                let anchor = Point::new(rng.next_f64_01(), rng.next_f64_01());
                let color = match spec.palette_mode {
                    PaletteMode::Cycle => spec.palette[index % spec.palette.len()],
                    PaletteMode::Random => rng.pick(&spec.palette).copied().unwrap_or(palette::WHITE),
                };
                let alpha = rng.range(spec.alpha[0], spec.alpha[1]);
                let drift = Vec2::new(rng.symmetric(spec.drift), rng.symmetric(spec.drift));
                let duration = rng.range(spec.duration[0], spec.duration[1]);
                let phase = rng.range(0.0, spec.phase_spread.max(0.0)) * 2.0 * duration;
                AmbientShape {
                    index,
                    anchor,
                    size,
                    color,
                    alpha,
                    drift,
                    duration,
                    phase,
                }
            })
            .collect();
        Ok(Self { spec, seed, shapes })
    }

    /// Seed the field was generated from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Recipe the field was generated from.
    pub fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    /// The frozen shape set.
    pub fn shapes(&self) -> &[AmbientShape] {
        &self.shapes
    }

    /// Field state `t` seconds after mount inside a container of `container` size.
    pub fn sample(&self, t: f64, container: Size) -> FieldFrame {
        let shapes = self
            .shapes
            .iter()
            .map(|s| {
                let local = t + s.phase;
                let p = Ease::InOutSine.apply(ping_pong(local, s.duration));
                let origin = Point::new(
                    s.anchor.x * container.width + s.size / 2.0,
                    s.anchor.y * container.height + s.size / 2.0,
                );
                let opacity = match &self.spec.opacity_pulse {
                    Some(keys) => ping_pong_keys(local, s.duration, keys, Ease::InOutSine),
                    None => s.alpha,
                };
                ShapeFrame {
                    index: s.index,
                    center: origin + s.drift * p,
                    size: s.size,
                    color: s.color,
                    opacity,
                    blur: self.spec.blur,
                }
            })
            .collect();
        FieldFrame {
            time: t,
            shapes,
            pointer_events: PointerEvents::None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ambient/field.rs"]
mod tests;
