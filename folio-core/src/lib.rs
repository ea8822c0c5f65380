//! folio is the headless interaction and motion core of a personal portfolio site.
//!
//! A render host (browser glue, a native shell, a test) feeds host events into an
//! [`EventHub`] and advances components with a frame delta; components answer with
//! plain, serializable frame data to paint. Nothing here touches a DOM or a GPU.
//!
//! # Components
//!
//! - **Pointer tracking**: [`PointerTracker`] maps pointer, hover, press and resize
//!   events into a [`PointerState`] and a mobile flag.
//! - **Custom cursor**: [`CursorRenderer`] springs a dot, ring, label and halo toward
//!   the tracked state and spawns a [`ParticleBurst`] on release; [`CursorOverlay`]
//!   couples it with a mounted tracker and hides it on mobile viewports.
//! - **Scroll reveals**: [`ViewportRevealController`] fires each registered element's
//!   reveal exactly once; [`HeroScroll`] maps scroll offset to hero parallax and fade.
//! - **Ambient motion**: [`AmbientField`] animates a seeded, frozen set of floating
//!   shapes; [`Scene3D`] is the optional 3D background; [`HeroBackdrop`] drifts the
//!   hero gradient toward the pointer.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single-threaded**: shared state is `Rc<RefCell<_>>`, never locked.
//! - **Explicit lifetimes for listeners**: every subscription is a value; dropping a
//!   [`Subscription`] or [`Mounted`] component unregisters it.
//! - **Infallible hot path**: only configuration and data boundaries return
//!   [`FolioResult`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod ambient;
mod animation;
mod cursor;
mod foundation;
mod input;
mod reveal;
mod site;

/// Tunable motion constants.
pub mod config;

pub use ambient::backdrop::HeroBackdrop;
pub use ambient::field::{
    AmbientField, AmbientShape, FieldFrame, FieldSpec, PaletteMode, ShapeFrame, palette,
};
pub use ambient::scene3d::{
    Camera, Light, ParticleCloud, RenderCaps, Scene3D, SceneGraph, SphereNode, animate_graph,
};
pub use animation::ease::Ease;
pub use animation::spring::{Spring, Spring2, SpringParams};
pub use animation::tween::{Tween, Tween2, ping_pong, ping_pong_keys, stagger};
pub use config::MotionConfig;
pub use cursor::burst::{ParticleBurst, ParticleFrame};
pub use cursor::overlay::CursorOverlay;
pub use cursor::renderer::{
    CursorFrame, CursorPhase, CursorRenderer, DotLayer, HaloLayer, LabelLayer, RingLayer,
};
pub use foundation::core::{Fps, Point, PointerEvents, Rect, Rgba8, Size, Vec2, Vec3};
pub use foundation::error::{FolioError, FolioResult};
pub use foundation::math::{Rng64, damp_factor, lerp, map_range_clamped};
pub use input::host::{
    Element, EventHub, EventKind, HostEvent, HostListener, Mounted, Subscription,
};
pub use input::pointer::{
    PointerState, PointerTracker, classify_hover, is_interactive, normalize_in,
};
pub use reveal::controller::{
    ElementId, RevealSpec, RevealStyle, ViewportEntry, ViewportRevealController,
    visible_fraction,
};
pub use reveal::scroll::{HeroMotion, HeroScroll, ScrollProgress, hero_motion, is_navbar_scrolled};
pub use site::projects::{Category, PROJECTS, Project, filter_projects};
pub use site::skills::{SKILL_CATEGORIES, Skill, SkillCategory, skill_bar_reveal, skill_bar_width};
