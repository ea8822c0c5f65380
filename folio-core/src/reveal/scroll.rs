use crate::config::HeroConfig;
use crate::foundation::core::Size;
use crate::foundation::math::map_range_clamped;
use crate::input::host::{EventKind, HostEvent, HostListener};

/// Normalized scroll position. A pure function of the offset; tracks both directions.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct ScrollProgress {
    /// Raw offset in pixels.
    pub offset_y: f64,
    /// Progress through the first viewport height, `[0, 1]`.
    pub hero: f64,
    /// Progress through the whole scrollable document, `[0, 1]`.
    pub page: f64,
}

impl ScrollProgress {
    /// Progress for `offset_y` in a document of `document_height` seen through `viewport`.
    pub fn compute(offset_y: f64, viewport: Size, document_height: f64) -> Self {
        let hero = if viewport.height > 0.0 {
            (offset_y / viewport.height).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let scrollable = document_height - viewport.height;
        let page = if scrollable > 0.0 {
            (offset_y / scrollable).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            offset_y,
            hero,
            page,
        }
    }
}

/// Hero content transform while scrolling past it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct HeroMotion {
    /// Downward parallax shift in pixels.
    pub translate_y: f64,
    /// Content opacity.
    pub opacity: f64,
}

/// Parallax and fade for a given hero progress.
pub fn hero_motion(hero_progress: f64, cfg: &HeroConfig) -> HeroMotion {
    let p = hero_progress.clamp(0.0, 1.0);
    HeroMotion {
        translate_y: p * cfg.parallax_distance,
        opacity: map_range_clamped(p, 0.0, cfg.fade_end, 1.0, 0.0),
    }
}

/// Navbar switches to its compact style past the configured offset.
pub fn is_navbar_scrolled(offset_y: f64, cfg: &HeroConfig) -> bool {
    offset_y > cfg.navbar_scrolled_at
}

/// Continuous scroll-driven state for the hero section and navbar.
#[derive(Clone, Debug)]
pub struct HeroScroll {
    cfg: HeroConfig,
    viewport: Size,
    document_height: f64,
    offset_y: f64,
}

impl HeroScroll {
    /// Tracker for a document of `document_height`, initially at the top.
    pub fn new(cfg: HeroConfig, viewport: Size, document_height: f64) -> Self {
        Self {
            cfg,
            viewport,
            document_height,
            offset_y: 0.0,
        }
    }

    /// Update after the document grew or shrank.
    pub fn set_document_height(&mut self, document_height: f64) {
        self.document_height = document_height;
    }

    /// Current progress.
    pub fn progress(&self) -> ScrollProgress {
        ScrollProgress::compute(self.offset_y, self.viewport, self.document_height)
    }

    /// Current hero transform.
    pub fn motion(&self) -> HeroMotion {
        hero_motion(self.progress().hero, &self.cfg)
    }

    /// Navbar compact flag.
    pub fn navbar_scrolled(&self) -> bool {
        is_navbar_scrolled(self.offset_y, &self.cfg)
    }
}

impl HostListener for HeroScroll {
    fn event_kinds(&self) -> Vec<EventKind> {
        vec![EventKind::Scroll, EventKind::Resize]
    }

    fn on_event(&mut self, event: &HostEvent) {
        match event {
            HostEvent::Scroll { offset_y } => self.offset_y = *offset_y,
            HostEvent::Resize { width, height } => self.viewport = Size::new(*width, *height),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/scroll.rs"]
mod tests;
