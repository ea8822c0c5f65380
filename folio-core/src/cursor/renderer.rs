use crate::animation::spring::{Spring, Spring2};
use crate::config::CursorConfig;
use crate::cursor::burst::{ParticleBurst, ParticleFrame};
use crate::foundation::core::{Point, PointerEvents, Rgba8};
use crate::input::pointer::PointerState;

/// Most bursts spawned in a single frame; extra releases in the same frame are dropped.
const MAX_PENDING_BURSTS: u64 = 4;

/// Cursor state machine. Lives for the whole page session; no terminal state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorPhase {
    /// Plain pointer.
    #[default]
    Idle,
    /// Over an interactive element.
    Hovering,
    /// Button held; takes precedence over hovering.
    Pressed,
}

impl CursorPhase {
    /// Phase implied by the tracker flags.
    pub fn from_state(state: &PointerState) -> Self {
        if state.is_pressed {
            Self::Pressed
        } else if state.is_hovering {
            Self::Hovering
        } else {
            Self::Idle
        }
    }
}

/// Small dot pinned to the pointer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct DotLayer {
    /// Spring-followed pointer position, viewport pixels.
    pub center: Point,
    /// Fixed radius in pixels.
    pub radius: f64,
    /// Configured cursor color, opaque.
    pub color: Rgba8,
}

/// Ring around the dot; hollow while hovering.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RingLayer {
    /// Shares the dot's center.
    pub center: Point,
    /// Outer radius in pixels, sprung between the idle, hover and pressed sizes.
    pub radius: f64,
    /// 1 = solid disc, 0 = border only.
    pub fill: f64,
    /// Border stroke in pixels, drawn at any fill.
    pub border_width: f64,
    /// Used for both the border and the fill.
    pub color: Rgba8,
}

/// Hover label centred in the ring.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LabelLayer {
    /// Kept while fading out so the text does not vanish mid-fade.
    pub text: String,
    /// Ring center, viewport pixels.
    pub center: Point,
    /// Sprung toward 1 while hovering a labelled element and back to 0 after.
    pub opacity: f64,
}

/// Translucent glow trailing the pointer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct HaloLayer {
    /// Lags the dot on a softer spring.
    pub center: Point,
    /// Fixed radius in pixels, usually far larger than the ring.
    pub radius: f64,
    /// Translucent fill; alpha is part of the color.
    pub color: Rgba8,
}

/// Everything needed to paint the custom cursor for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CursorFrame {
    /// State machine phase.
    pub phase: CursorPhase,
    /// Painted first, below every other layer.
    pub halo: HaloLayer,
    /// Painted above the halo.
    pub ring: RingLayer,
    /// Painted above the ring.
    pub dot: DotLayer,
    /// `None` once a label has fully faded out.
    pub label: Option<LabelLayer>,
    /// Particles of every live burst, oldest burst first.
    pub particles: Vec<ParticleFrame>,
    /// Always [`PointerEvents::None`].
    pub pointer_events: PointerEvents,
}

/// Turns [`PointerState`] into a spring-smoothed [`CursorFrame`].
///
/// The state layer is never smoothed; every ease happens here.
#[derive(Clone, Debug)]
pub struct CursorRenderer {
    cfg: CursorConfig,
    phase: CursorPhase,
    follow: Spring2,
    halo: Spring2,
    ring_radius: Spring,
    ring_fill: Spring,
    label_opacity: Spring,
    label_text: String,
    releases_seen: u64,
    bursts: Vec<ParticleBurst>,
}

impl CursorRenderer {
    /// Renderer resting at `at`.
    pub fn new(cfg: CursorConfig, at: Point) -> Self {
        Self {
            phase: CursorPhase::Idle,
            follow: Spring2::new(cfg.follow_spring, at),
            halo: Spring2::new(cfg.halo_spring, at),
            ring_radius: Spring::new(cfg.style_spring, cfg.ring_radius),
            ring_fill: Spring::new(cfg.style_spring, 1.0),
            label_opacity: Spring::new(cfg.style_spring, 0.0),
            label_text: String::new(),
            releases_seen: 0,
            bursts: Vec::new(),
            cfg,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> CursorPhase {
        self.phase
    }

    /// Number of bursts still animating.
    pub fn live_bursts(&self) -> usize {
        self.bursts.len()
    }

    /// Jump every layer to `state` without easing and drop running bursts.
    pub fn snap(&mut self, state: &PointerState) {
        self.follow.snap_to(state.position);
        self.halo.snap_to(state.position);
        self.phase = CursorPhase::from_state(state);
        let (radius, fill) = self.ring_targets(self.phase);
        self.ring_radius.snap_to(radius);
        self.ring_fill.snap_to(fill);
        self.label_opacity.snap_to(0.0);
        self.label_text.clear();
        self.releases_seen = state.release_count;
        self.bursts.clear();
    }

    /// Move the dot, ring and halo to `at` without easing. Styling and bursts are kept.
    pub fn jump_to(&mut self, at: Point) {
        self.follow.snap_to(at);
        self.halo.snap_to(at);
    }

    fn ring_targets(&self, phase: CursorPhase) -> (f64, f64) {
        match phase {
            CursorPhase::Idle => (self.cfg.ring_radius, 1.0),
            CursorPhase::Hovering => (self.cfg.ring_radius_hover, 0.0),
            CursorPhase::Pressed => (self.cfg.ring_radius_pressed, 1.0),
        }
    }

    /// Advance by `dt` seconds toward `state` and produce the frame to paint.
    pub fn render(&mut self, state: &PointerState, dt: f64) -> CursorFrame {
        let phase = CursorPhase::from_state(state);
        if phase != self.phase {
            tracing::debug!(from = ?self.phase, to = ?phase, "cursor phase");
            self.phase = phase;
        }

        for burst in &mut self.bursts {
            burst.advance(dt);
        }
        self.bursts.retain(|b| !b.is_finished());
        let fresh = state.release_count.saturating_sub(self.releases_seen);
        for _ in 0..fresh.min(MAX_PENDING_BURSTS) {
            self.bursts
                .push(ParticleBurst::new(state.release_position, &self.cfg.burst));
        }
        self.releases_seen = state.release_count;

        let (radius, fill) = self.ring_targets(phase);
        self.ring_radius.set_target(radius);
        self.ring_fill.set_target(fill);

        let show_label = phase == CursorPhase::Hovering && !state.hover_label.is_empty();
        if show_label {
            self.label_text.clone_from(&state.hover_label);
        }
        self.label_opacity
            .set_target(if show_label { 1.0 } else { 0.0 });

        self.follow.set_target(state.position);
        self.halo.set_target(state.position);

        self.follow.step(dt);
        self.halo.step(dt);
        self.ring_radius.step(dt);
        self.ring_fill.step(dt);
        self.label_opacity.step(dt);

        if self.label_opacity.is_at_rest() && self.label_opacity.value() == 0.0 {
            self.label_text.clear();
        }

        let center = self.follow.value();
        let label = (!self.label_text.is_empty()).then(|| LabelLayer {
            text: self.label_text.clone(),
            center,
            opacity: self.label_opacity.value().clamp(0.0, 1.0),
        });

        CursorFrame {
            phase,
            halo: HaloLayer {
                center: self.halo.value(),
                radius: self.cfg.halo_radius,
                color: self.cfg.halo_color,
            },
            ring: RingLayer {
                center,
                radius: self.ring_radius.value().max(0.0),
                fill: self.ring_fill.value().clamp(0.0, 1.0),
                border_width: self.cfg.ring_border,
                color: self.cfg.color,
            },
            dot: DotLayer {
                center,
                radius: self.cfg.dot_radius,
                color: self.cfg.color,
            },
            label,
            particles: self.bursts.iter().flat_map(|b| b.particles()).collect(),
            pointer_events: PointerEvents::None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cursor/renderer.rs"]
mod tests;
