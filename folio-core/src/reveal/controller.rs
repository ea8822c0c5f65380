use crate::animation::ease::Ease;
use crate::animation::tween::Tween;
use crate::config::RevealConfig;
use crate::foundation::core::{Rect, Size, Vec2};
use crate::input::host::{EventKind, HostEvent, HostListener};

/// Handle for a registered element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct ElementId(pub usize);

/// How an element reveals itself.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealSpec {
    /// Visible fraction (of the element's own area) that triggers the reveal.
    pub threshold: f64,
    /// Animation duration in seconds.
    pub duration: f64,
    /// Delay after triggering, for staggered groups.
    pub delay: f64,
    /// Offset of the hidden state from the element's resting position.
    pub offset: Vec2,
    /// Animation curve.
    pub ease: Ease,
}

impl RevealSpec {
    /// Fade up from `offset_y` below, using configured defaults.
    pub fn from_config(cfg: &RevealConfig) -> Self {
        Self {
            threshold: cfg.threshold,
            duration: cfg.duration,
            delay: 0.0,
            offset: Vec2::new(0.0, cfg.offset_y),
            ease: cfg.ease,
        }
    }

    /// Override the trigger fraction.
    pub fn with_threshold(self, threshold: f64) -> Self {
        Self { threshold, ..self }
    }

    /// Override the start delay.
    pub fn with_delay(self, delay: f64) -> Self {
        Self {
            delay: delay.max(0.0),
            ..self
        }
    }

    /// Override the hidden-state offset (e.g. `(-50, 0)` to enter from the left).
    pub fn with_offset(self, offset: Vec2) -> Self {
        Self { offset, ..self }
    }

    /// Override the duration.
    pub fn with_duration(self, duration: f64) -> Self {
        Self {
            duration: duration.max(0.0),
            ..self
        }
    }
}

impl Default for RevealSpec {
    fn default() -> Self {
        Self::from_config(&RevealConfig::default())
    }
}

/// Per-element observation record.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ViewportEntry {
    /// Handle returned by `register`.
    pub id: ElementId,
    /// Layout box in document coordinates.
    pub rect: Rect,
    /// Reveal parameters.
    pub spec: RevealSpec,
    /// Set on the first qualifying intersection; never cleared.
    pub has_entered_once: bool,
    /// Latest visible fraction in `[0, 1]`.
    pub visibility_fraction: f64,
    /// Controller clock at the moment the reveal fired.
    pub entered_at: Option<f64>,
}

/// Paint state of a revealed element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RevealStyle {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Translation from the resting position.
    pub translate: Vec2,
    /// Eased progress, 0 hidden and 1 visible; drives width reveals such as skill bars.
    pub progress: f64,
}

impl RevealStyle {
    /// Fully hidden at `offset`.
    pub fn hidden(offset: Vec2) -> Self {
        Self {
            opacity: 0.0,
            translate: offset,
            progress: 0.0,
        }
    }

    /// Fully visible at rest.
    pub fn visible() -> Self {
        Self {
            opacity: 1.0,
            translate: Vec2::ZERO,
            progress: 1.0,
        }
    }
}

/// Fraction of `element` inside `view`, by area. Zero-area elements count as fully
/// visible when they touch the view and invisible otherwise.
pub fn visible_fraction(element: Rect, view: Rect) -> f64 {
    let area = element.area();
    let overlap = element.intersect(view);
    let touches = element.x0 <= view.x1
        && element.x1 >= view.x0
        && element.y0 <= view.y1
        && element.y1 >= view.y0;
    if area <= 0.0 {
        return if touches { 1.0 } else { 0.0 };
    }
    (overlap.area() / area).clamp(0.0, 1.0)
}

/// "Animate once when scrolled into view" for any number of elements.
///
/// Every registration is checked immediately, so content already on screen at mount
/// reveals without waiting for a scroll. Once an element has entered it stays
/// revealed for the session regardless of later scrolling.
#[derive(Clone, Debug)]
pub struct ViewportRevealController {
    viewport: Size,
    scroll_y: f64,
    clock: f64,
    entries: Vec<ViewportEntry>,
}

impl ViewportRevealController {
    /// Controller for a viewport at a given scroll offset.
    pub fn new(viewport: Size, scroll_y: f64) -> Self {
        Self {
            viewport,
            scroll_y,
            clock: 0.0,
            entries: Vec::new(),
        }
    }

    /// Visible part of the document.
    pub fn view_rect(&self) -> Rect {
        Rect::from_origin_size((0.0, self.scroll_y), self.viewport)
    }

    /// Seconds since the controller was created.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Observe `rect` (document coordinates) and evaluate it right away.
    pub fn register(&mut self, rect: Rect, spec: RevealSpec) -> ElementId {
        let id = ElementId(self.entries.len());
        self.entries.push(ViewportEntry {
            id,
            rect,
            spec,
            has_entered_once: false,
            visibility_fraction: 0.0,
            entered_at: None,
        });
        self.evaluate();
        id
    }

    /// Move an element after a layout change.
    pub fn update_rect(&mut self, id: ElementId, rect: Rect) {
        if let Some(entry) = self.entries.get_mut(id.0) {
            entry.rect = rect;
        }
        self.evaluate();
    }

    /// Page scrolled.
    pub fn on_scroll(&mut self, offset_y: f64) {
        self.scroll_y = offset_y;
        self.evaluate();
    }

    /// Viewport resized.
    pub fn on_resize(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.evaluate();
    }

    /// Advance the animation clock.
    pub fn advance(&mut self, dt: f64) {
        if dt > 0.0 {
            self.clock += dt;
        }
    }

    /// Observation record for `id`.
    pub fn entry(&self, id: ElementId) -> Option<&ViewportEntry> {
        self.entries.get(id.0)
    }

    /// All observation records in registration order.
    pub fn entries(&self) -> &[ViewportEntry] {
        &self.entries
    }

    /// Whether `id` has ever revealed.
    pub fn has_entered_once(&self, id: ElementId) -> bool {
        self.entry(id).is_some_and(|e| e.has_entered_once)
    }

    /// Paint state of `id` at the current clock.
    pub fn style(&self, id: ElementId) -> Option<RevealStyle> {
        let entry = self.entry(id)?;
        let Some(entered_at) = entry.entered_at else {
            return Some(RevealStyle::hidden(entry.spec.offset));
        };
        let tween =
            Tween::new(0.0, 1.0, entry.spec.duration, entry.spec.ease).with_delay(entry.spec.delay);
        let progress = tween.sample(self.clock - entered_at);
        Some(RevealStyle {
            opacity: progress.clamp(0.0, 1.0),
            translate: entry.spec.offset * (1.0 - progress),
            progress,
        })
    }

    fn evaluate(&mut self) {
        let view = self.view_rect();
        let clock = self.clock;
        for entry in &mut self.entries {
            entry.visibility_fraction = visible_fraction(entry.rect, view);
            if !entry.has_entered_once
                && entry.visibility_fraction > 0.0
                && entry.visibility_fraction >= entry.spec.threshold
            {
                entry.has_entered_once = true;
                entry.entered_at = Some(clock);
                tracing::debug!(
                    id = entry.id.0,
                    fraction = entry.visibility_fraction,
                    "reveal fired"
                );
            }
        }
    }
}

impl HostListener for ViewportRevealController {
    fn event_kinds(&self) -> Vec<EventKind> {
        vec![EventKind::Scroll, EventKind::Resize]
    }

    fn on_event(&mut self, event: &HostEvent) {
        match event {
            HostEvent::Scroll { offset_y } => self.on_scroll(*offset_y),
            HostEvent::Resize { width, height } => self.on_resize(Size::new(*width, *height)),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/controller.rs"]
mod tests;
