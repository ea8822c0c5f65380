//! Tunable motion constants, loadable from JSON.
//!
//! Every section defaults to the values the site ships with, so a config file only
//! needs to name what it overrides.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::animation::ease::Ease;
use crate::animation::spring::SpringParams;
use crate::foundation::core::Rgba8;
use crate::foundation::error::{FolioError, FolioResult};

/// Root configuration.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Pointer tracking.
    pub pointer: PointerConfig,
    /// Custom cursor layers.
    pub cursor: CursorConfig,
    /// Scroll-triggered reveals.
    pub reveal: RevealConfig,
    /// Hero parallax, navbar and backdrop.
    pub hero: HeroConfig,
    /// 3D background.
    pub scene: SceneConfig,
}

/// Pointer tracking settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PointerConfig {
    /// Viewports at or below this width count as mobile.
    pub mobile_breakpoint: f64,
    /// Attribute carrying the hover label on interactive elements.
    pub label_attribute: String,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768.0,
            label_attribute: "data-cursor-label".to_owned(),
        }
    }
}

/// Custom cursor settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    /// Spring moving the dot and ring with the pointer.
    pub follow_spring: SpringParams,
    /// Spring for ring radius, fill and label opacity.
    pub style_spring: SpringParams,
    /// Softer spring for the trailing halo.
    pub halo_spring: SpringParams,
    /// Radius of the center dot.
    pub dot_radius: f64,
    /// Ring radius with nothing hovered.
    pub ring_radius: f64,
    /// Ring radius over an interactive element.
    pub ring_radius_hover: f64,
    /// Ring radius while pressed.
    pub ring_radius_pressed: f64,
    /// Border width of the hollow ring.
    pub ring_border: f64,
    /// Cursor color.
    pub color: Rgba8,
    /// Halo radius.
    pub halo_radius: f64,
    /// Halo fill.
    pub halo_color: Rgba8,
    /// Click burst.
    pub burst: BurstConfig,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            follow_spring: SpringParams::new(500.0, 28.0),
            style_spring: SpringParams::new(300.0, 25.0),
            halo_spring: SpringParams::new(120.0, 20.0),
            dot_radius: 3.0,
            ring_radius: 12.0,
            ring_radius_hover: 18.0,
            ring_radius_pressed: 4.0,
            ring_border: 1.5,
            color: Rgba8::rgb(255, 255, 255),
            halo_radius: 80.0,
            halo_color: Rgba8 {
                r: 108,
                g: 99,
                b: 255,
                a: 26,
            },
            burst: BurstConfig::default(),
        }
    }
}

/// Click particle burst settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BurstConfig {
    /// Particles per burst, spaced evenly around the circle.
    pub count: u32,
    /// Seconds until every particle has faded out.
    pub duration: f64,
    /// Distance travelled by each particle.
    pub distance: f64,
    /// Particle radius at spawn.
    pub particle_radius: f64,
    /// Curve for travel and decay.
    pub ease: Ease,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            count: 6,
            duration: 0.5,
            distance: 30.0,
            particle_radius: 3.0,
            ease: Ease::OutCubic,
        }
    }
}

/// Defaults applied to reveal registrations.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Visible fraction that triggers the reveal.
    pub threshold: f64,
    /// Reveal duration in seconds.
    pub duration: f64,
    /// Vertical start offset of hidden elements.
    pub offset_y: f64,
    /// Reveal curve.
    pub ease: Ease,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.2,
            duration: 0.8,
            offset_y: 20.0,
            ease: Ease::OutCubic,
        }
    }
}

/// Hero section settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    /// Downward parallax shift of hero content at full progress.
    pub parallax_distance: f64,
    /// Hero progress at which the content is fully faded.
    pub fade_end: f64,
    /// Scroll offset past which the navbar switches to its compact style.
    pub navbar_scrolled_at: f64,
    /// Background-position shift per unit of normalized pointer, in percent.
    pub backdrop_shift_percent: f64,
    /// Seconds between backdrop retargets.
    pub backdrop_interval: f64,
    /// Backdrop tween duration.
    pub backdrop_duration: f64,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            parallax_distance: 200.0,
            fade_end: 0.8,
            navbar_scrolled_at: 50.0,
            backdrop_shift_percent: 10.0,
            backdrop_interval: 0.1,
            backdrop_duration: 1.0,
        }
    }
}

/// 3D background settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// World units the camera shifts per unit of normalized pointer.
    pub camera_follow: f64,
    /// Fraction of the camera's remaining distance closed per 1/60s.
    pub camera_lerp: f64,
    /// Points in the background particle cloud.
    pub particle_count: u32,
    /// Radius of the particle cloud.
    pub particle_spread: f64,
    /// Skip the 3D layer on mobile viewports.
    pub desktop_only: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera_follow: 0.5,
            camera_lerp: 0.05,
            particle_count: 200,
            particle_spread: 8.0,
            desktop_only: true,
        }
    }
}

impl MotionConfig {
    /// Parse a config from a JSON reader and validate it.
    pub fn from_reader<R: std::io::Read>(r: R) -> FolioResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| FolioError::serde(format!("parse motion config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a config from a JSON string and validate it.
    pub fn from_json_str(s: &str) -> FolioResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse a config from a JSON file on disk and validate it.
    #[tracing::instrument]
    pub fn from_path(path: impl AsRef<Path> + std::fmt::Debug) -> FolioResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FolioError::config(format!("open motion config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject values that would produce undefined motion.
    pub fn validate(&self) -> FolioResult<()> {
        if !(self.pointer.mobile_breakpoint >= 0.0) {
            return Err(FolioError::config("pointer.mobile_breakpoint must be >= 0"));
        }
        if self.pointer.label_attribute.is_empty() {
            return Err(FolioError::config("pointer.label_attribute must not be empty"));
        }

        let c = &self.cursor;
        for (name, spring) in [
            ("cursor.follow_spring", &c.follow_spring),
            ("cursor.style_spring", &c.style_spring),
            ("cursor.halo_spring", &c.halo_spring),
        ] {
            spring
                .validate()
                .map_err(|e| FolioError::config(format!("{name}: {e}")))?;
        }
        let radii = [
            c.dot_radius,
            c.ring_radius,
            c.ring_radius_hover,
            c.ring_radius_pressed,
            c.ring_border,
            c.halo_radius,
        ];
        if radii.iter().any(|r| !(*r >= 0.0)) {
            return Err(FolioError::config("cursor radii must be >= 0"));
        }
        if c.burst.count == 0 {
            return Err(FolioError::config("cursor.burst.count must be > 0"));
        }
        if !(c.burst.duration > 0.0) {
            return Err(FolioError::config("cursor.burst.duration must be > 0"));
        }

        let r = &self.reveal;
        if !(r.threshold > 0.0 && r.threshold <= 1.0) {
            return Err(FolioError::config("reveal.threshold must be in (0, 1]"));
        }
        if !(r.duration >= 0.0) {
            return Err(FolioError::config("reveal.duration must be >= 0"));
        }

        let h = &self.hero;
        if !(h.fade_end > 0.0 && h.fade_end <= 1.0) {
            return Err(FolioError::config("hero.fade_end must be in (0, 1]"));
        }
        if !(h.backdrop_interval > 0.0) {
            return Err(FolioError::config("hero.backdrop_interval must be > 0"));
        }

        let s = &self.scene;
        if !(s.camera_lerp > 0.0 && s.camera_lerp <= 1.0) {
            return Err(FolioError::config("scene.camera_lerp must be in (0, 1]"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
