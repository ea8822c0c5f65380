use crate::config::PointerConfig;
use crate::foundation::core::{Point, Size, Vec2};
use crate::input::host::{Element, EventKind, HostEvent, HostListener};

/// Reactive pointer state consumed by the cursor renderer.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PointerState {
    /// Last pointer position in viewport pixels, exactly as received.
    pub position: Point,
    /// Pointer is over an interactive element (or inside one).
    pub is_hovering: bool,
    /// Label of the nearest interactive element; empty when absent.
    pub hover_label: String,
    /// Primary button is held.
    pub is_pressed: bool,
    /// Completed press/release cycles since mount. Renderers compare it against the
    /// last count they consumed, so a click between two frames is never lost.
    pub release_count: u64,
    /// Viewport position of the most recent release.
    pub release_position: Point,
}

impl PointerState {
    /// Pointer position mapped to `[-0.5, 0.5]` on both axes of `viewport`.
    pub fn normalized(&self, viewport: Size) -> Vec2 {
        normalize_in(self.position, viewport)
    }
}

/// Map a viewport point to `[-0.5, 0.5]` on both axes; the center maps to zero.
pub fn normalize_in(p: Point, viewport: Size) -> Vec2 {
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(p.x / viewport.width - 0.5, p.y / viewport.height - 0.5)
}

/// Whether `el` is a link or button, by tag or by explicit role.
pub fn is_interactive(el: &Element) -> bool {
    let by_tag = el.tag.eq_ignore_ascii_case("a") || el.tag.eq_ignore_ascii_case("button");
    let by_role = matches!(el.role.as_deref(), Some("link" | "button"));
    by_tag || by_role
}

/// Classify a hovered path (target first). Returns `None` when nothing in the chain
/// is interactive, otherwise the label of the nearest interactive element.
pub fn classify_hover(path: &[Element], label_attr: &str) -> Option<String> {
    path.iter()
        .find(|el| is_interactive(el))
        .map(|el| el.attr(label_attr).unwrap_or_default().to_owned())
}

/// Maps raw pointer, hover, press and resize events into [`PointerState`] plus the
/// viewport class that decides whether a synthetic cursor is shown at all.
#[derive(Clone, Debug)]
pub struct PointerTracker {
    cfg: PointerConfig,
    state: PointerState,
    viewport: Size,
    is_mobile: bool,
    has_pointer: bool,
}

impl PointerTracker {
    /// Tracker for an initial viewport. The mobile flag is computed immediately.
    pub fn new(cfg: PointerConfig, viewport: Size) -> Self {
        let is_mobile = viewport.width <= cfg.mobile_breakpoint;
        Self {
            cfg,
            state: PointerState::default(),
            viewport,
            is_mobile,
            has_pointer: false,
        }
    }

    /// Current pointer state.
    pub fn state(&self) -> &PointerState {
        &self.state
    }

    /// Current viewport size.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Viewport is at or below the mobile breakpoint.
    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    /// At least one pointer-move has been received, so `state().position` is real.
    pub fn has_pointer(&self) -> bool {
        self.has_pointer
    }

    /// Synthetic cursor should be rendered.
    pub fn cursor_enabled(&self) -> bool {
        !self.is_mobile
    }

    /// Apply one host event.
    pub fn apply(&mut self, event: &HostEvent) {
        match event {
            HostEvent::PointerMove { x, y } => {
                self.state.position = Point::new(*x, *y);
                self.has_pointer = true;
            }
            HostEvent::PointerOver { path } => {
                match classify_hover(path, &self.cfg.label_attribute) {
                    Some(label) => {
                        self.state.is_hovering = true;
                        self.state.hover_label = label;
                    }
                    None => {
                        self.state.is_hovering = false;
                        self.state.hover_label.clear();
                    }
                }
            }
            HostEvent::PointerDown => self.state.is_pressed = true,
            HostEvent::PointerUp => {
                if self.state.is_pressed {
                    self.state.release_count += 1;
                    self.state.release_position = self.state.position;
                }
                self.state.is_pressed = false;
            }
            HostEvent::Resize { width, height } => {
                self.viewport = Size::new(*width, *height);
                let is_mobile = *width <= self.cfg.mobile_breakpoint;
                if is_mobile != self.is_mobile {
                    tracing::debug!(width, is_mobile, "viewport class changed");
                }
                self.is_mobile = is_mobile;
            }
            HostEvent::Scroll { .. } => {}
        }
    }
}

impl HostListener for PointerTracker {
    fn event_kinds(&self) -> Vec<EventKind> {
        vec![
            EventKind::PointerMove,
            EventKind::PointerOver,
            EventKind::PointerDown,
            EventKind::PointerUp,
            EventKind::Resize,
        ]
    }

    fn on_event(&mut self, event: &HostEvent) {
        self.apply(event);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/pointer.rs"]
mod tests;
