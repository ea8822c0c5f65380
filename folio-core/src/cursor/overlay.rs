use crate::config::MotionConfig;
use crate::cursor::renderer::{CursorFrame, CursorRenderer};
use crate::foundation::core::Size;
use crate::input::host::{EventHub, Mounted};
use crate::input::pointer::PointerTracker;

/// Custom cursor feature: a tracker mounted on the hub feeding a renderer.
///
/// Dropping the overlay unsubscribes the tracker.
pub struct CursorOverlay {
    tracker: Mounted<PointerTracker>,
    renderer: CursorRenderer,
    was_enabled: bool,
    placed: bool,
}

impl CursorOverlay {
    /// Mount on `hub` for an initial viewport.
    pub fn mount(hub: &EventHub, cfg: &MotionConfig, viewport: Size) -> Self {
        let tracker = PointerTracker::new(cfg.pointer.clone(), viewport);
        let was_enabled = tracker.cursor_enabled();
        let renderer = CursorRenderer::new(cfg.cursor.clone(), tracker.state().position);
        Self {
            tracker: hub.mount(tracker),
            renderer,
            was_enabled,
            placed: false,
        }
    }

    /// The mounted tracker.
    pub fn tracker(&self) -> std::cell::Ref<'_, PointerTracker> {
        self.tracker.borrow()
    }

    /// Cursor is currently shown.
    pub fn is_enabled(&self) -> bool {
        self.tracker.borrow().cursor_enabled()
    }

    /// Advance by `dt` seconds. `None` while the viewport is mobile.
    pub fn tick(&mut self, dt: f64) -> Option<CursorFrame> {
        let tracker = self.tracker.borrow();
        let enabled = tracker.cursor_enabled();
        let state = tracker.state();
        if !enabled {
            if self.was_enabled {
                self.renderer.snap(state);
            }
            self.was_enabled = false;
            return None;
        }
        if !self.was_enabled {
            self.renderer.snap(state);
            self.was_enabled = true;
            self.placed = tracker.has_pointer();
        } else if !self.placed && tracker.has_pointer() {
            // Appear where the pointer first shows up instead of easing in from the origin.
            self.renderer.jump_to(state.position);
            self.placed = true;
        }
        Some(self.renderer.render(state, dt))
    }
}

impl std::fmt::Debug for CursorOverlay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CursorOverlay")
            .field("tracker", &self.tracker)
            .field("phase", &self.renderer.phase())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cursor/overlay.rs"]
mod tests;
