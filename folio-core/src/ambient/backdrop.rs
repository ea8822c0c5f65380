use crate::animation::ease::Ease;
use crate::animation::tween::Tween2;
use crate::config::HeroConfig;
use crate::foundation::core::{Point, Size, Vec2};
use crate::input::host::{EventKind, HostEvent, HostListener};
use crate::input::pointer::normalize_in;

/// Hero gradient whose background position leans toward the pointer.
///
/// The pointer is sampled on a fixed interval and each sample starts a fresh
/// `power2.out` tween from wherever the gradient currently is.
#[derive(Clone, Debug)]
pub struct HeroBackdrop {
    cfg: HeroConfig,
    viewport: Size,
    pointer: Vec2,
    tween: Tween2,
    now: f64,
    since_sample: f64,
}

impl HeroBackdrop {
    /// Backdrop centred at `0% 0%`.
    pub fn new(cfg: HeroConfig, viewport: Size) -> Self {
        let tween = Tween2::resting(Vec2::ZERO, cfg.backdrop_duration, Ease::OutQuad);
        Self {
            cfg,
            viewport,
            pointer: Vec2::ZERO,
            tween,
            now: 0.0,
            since_sample: 0.0,
        }
    }

    /// Record a pointer normalized to `[-0.5, 0.5]`.
    pub fn set_pointer(&mut self, normalized: Vec2) {
        self.pointer = normalized;
    }

    /// Advance by `dt` seconds, retargeting on every elapsed interval.
    pub fn advance(&mut self, dt: f64) {
        if !(dt > 0.0) {
            return;
        }
        self.now += dt;
        self.since_sample += dt;
        let interval = self.cfg.backdrop_interval;
        if self.since_sample >= interval {
            self.since_sample %= interval;
            let target = self.pointer * self.cfg.backdrop_shift_percent;
            if target != self.tween.target() {
                self.tween.retarget(target, self.now);
            }
        }
    }

    /// Current background position in percent.
    pub fn background_position(&self) -> Vec2 {
        self.tween.sample(self.now)
    }
}

impl HostListener for HeroBackdrop {
    fn event_kinds(&self) -> Vec<EventKind> {
        vec![EventKind::PointerMove, EventKind::Resize]
    }

    fn on_event(&mut self, event: &HostEvent) {
        match event {
            HostEvent::PointerMove { x, y } => {
                self.pointer = normalize_in(Point::new(*x, *y), self.viewport);
            }
            HostEvent::Resize { width, height } => self.viewport = Size::new(*width, *height),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ambient/backdrop.rs"]
mod tests;
