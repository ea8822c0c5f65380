//! Optional 3D background: distorted spheres and a particle cloud in a lit scene,
//! with a camera that leans toward the pointer.
//!
//! Per-frame mutation is confined to [`Scene3D::frame`], which owns the scene graph;
//! the render host only reads [`Scene3D::graph`].

use crate::ambient::field::palette;
use crate::config::SceneConfig;
use crate::foundation::core::{Point, PointerEvents, Rgba8, Size, Vec2, Vec3};
use crate::foundation::math::{Rng64, damp_factor};
use crate::input::host::{EventKind, HostEvent, HostListener};
use crate::input::pointer::normalize_in;

/// Amplitude of the vertical bob of each sphere.
const BOB_AMPLITUDE: f64 = 0.5;

/// What the host can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RenderCaps {
    /// A WebGL-class 3D context is available.
    pub webgl: bool,
}

/// Distorted sphere mesh.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SphereNode {
    /// Rest position.
    pub base: Vec3,
    /// Current position.
    pub position: Vec3,
    /// Euler rotation in radians.
    pub rotation: Vec3,
    /// Sphere radius.
    pub radius: f64,
    /// Material color.
    pub color: Rgba8,
    /// Bob frequency (radians per second); also scales the distortion speed.
    pub speed: f64,
    /// Surface distortion amount.
    pub distort: f64,
    /// Material roughness.
    pub roughness: f64,
    /// Material metalness.
    pub metalness: f64,
}

/// Scene light.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Light {
    /// Uniform fill light.
    Ambient {
        /// Multiplier on white light, usually below 1.
        intensity: f64,
    },
    /// Parallel light from `position` toward the origin.
    Directional {
        /// World-space source position.
        position: Vec3,
        /// Multiplier on `color`.
        intensity: f64,
        /// Opaque light tint.
        color: Rgba8,
    },
}

/// Perspective camera.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Camera {
    /// World-space position, eased toward the pointer-driven target each frame.
    pub position: Vec3,
    /// Vertical field of view in degrees.
    pub fov_deg: f64,
    /// Point the camera faces.
    pub look_at: Vec3,
}

/// Slowly rotating cloud of points.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ParticleCloud {
    /// Points in cloud-local space.
    pub points: Vec<Vec3>,
    /// Current rotation about the y axis.
    pub rotation_y: f64,
}

/// Everything the host draws for the 3D layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SceneGraph {
    /// Viewpoint; the only part that reacts to input.
    pub camera: Camera,
    /// Ambient fill first, then directional lights.
    pub lights: Vec<Light>,
    /// Bobbing spheres, posed for the current elapsed time.
    pub spheres: Vec<SphereNode>,
    /// Background point cloud, frozen at mount apart from its rotation.
    pub particles: ParticleCloud,
    /// Always [`PointerEvents::None`].
    pub pointer_events: PointerEvents,
}

impl SceneGraph {
    /// The site's background scene at t = 0.
    pub fn site_default(particles: Vec<Vec3>) -> Self {
        let sphere = |base: Vec3, color: Rgba8, speed: f64, distort: f64| SphereNode {
            base,
            position: base,
            rotation: Vec3::ZERO,
            radius: 1.0,
            color,
            speed,
            distort,
            roughness: 0.2,
            metalness: 0.8,
        };
        Self {
            camera: Camera {
                position: Vec3::new(0.0, 0.0, 5.0),
                fov_deg: 75.0,
                look_at: Vec3::ZERO,
            },
            lights: vec![
                Light::Ambient { intensity: 0.5 },
                Light::Directional {
                    position: Vec3::new(10.0, 10.0, 5.0),
                    intensity: 1.0,
                    color: palette::WHITE,
                },
                Light::Directional {
                    position: Vec3::new(-10.0, -10.0, -5.0),
                    intensity: 0.5,
                    color: Rgba8::rgb(0xFF, 0x00, 0xFF),
                },
            ],
            spheres: vec![
                sphere(Vec3::new(-3.0, 0.0, 0.0), palette::PRIMARY, 0.5, 0.4),
                sphere(Vec3::new(3.0, 0.0, 0.0), palette::PINK, 0.3, 0.6),
                sphere(Vec3::new(0.0, 2.0, -2.0), palette::CYAN, 0.4, 0.5),
            ],
            particles: ParticleCloud {
                points: particles,
                rotation_y: 0.0,
            },
            pointer_events: PointerEvents::None,
        }
    }
}

/// Per-frame update of the owned scene graph at `elapsed` seconds.
pub fn animate_graph(graph: &mut SceneGraph, elapsed: f64) {
    for s in &mut graph.spheres {
        s.position = Vec3::new(
            s.base.x(),
            s.base.y() + (elapsed * s.speed).sin() * BOB_AMPLITUDE,
            s.base.z(),
        );
        s.rotation = Vec3::new(elapsed * 0.2, elapsed * 0.1, 0.0);
    }
    graph.particles.rotation_y = elapsed * 0.05;
}

/// Mounted 3D background.
#[derive(Clone, Debug)]
pub struct Scene3D {
    cfg: SceneConfig,
    graph: SceneGraph,
    camera_home: Vec3,
    camera_target: Vec3,
    viewport: Size,
    elapsed: f64,
}

impl Scene3D {
    /// Mount the scene, or `None` when the host cannot draw it (no 3D context, or a
    /// mobile viewport when configured desktop-only). Pages render fine without it.
    #[tracing::instrument(skip(cfg))]
    pub fn try_mount(
        caps: RenderCaps,
        viewport: Size,
        mobile_breakpoint: f64,
        cfg: &SceneConfig,
        seed: u64,
    ) -> Option<Self> {
        if !caps.webgl {
            tracing::warn!("3D context unavailable, skipping background scene");
            return None;
        }
        if cfg.desktop_only && viewport.width <= mobile_breakpoint {
            tracing::debug!("mobile viewport, skipping background scene");
            return None;
        }

        let mut rng = Rng64::new(seed);
        let spread = cfg.particle_spread;
        let points = (0..cfg.particle_count)
            .map(|_| {
                Vec3::new(
                    rng.symmetric(spread),
                    rng.symmetric(spread),
                    rng.symmetric(spread),
                )
            })
            .collect();
        let graph = SceneGraph::site_default(points);
        let camera_home = graph.camera.position;
        Some(Self {
            cfg: cfg.clone(),
            graph,
            camera_home,
            camera_target: camera_home,
            viewport,
            elapsed: 0.0,
        })
    }

    /// Read-only view for the host.
    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    /// Seconds since mount.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Where the camera is heading.
    pub fn camera_target(&self) -> Vec3 {
        self.camera_target
    }

    /// Aim the camera from a pointer normalized to `[-0.5, 0.5]`.
    pub fn set_pointer(&mut self, normalized: Vec2) {
        let k = self.cfg.camera_follow;
        self.camera_target = self.camera_home + Vec3::new(normalized.x * k, -normalized.y * k, 0.0);
    }

    /// Advance by `dt` seconds.
    pub fn frame(&mut self, dt: f64) {
        if dt > 0.0 {
            self.elapsed += dt;
        }
        animate_graph(&mut self.graph, self.elapsed);
        let alpha = damp_factor(self.cfg.camera_lerp, dt);
        self.graph.camera.position = self.graph.camera.position.lerp(self.camera_target, alpha);
    }
}

impl HostListener for Scene3D {
    fn event_kinds(&self) -> Vec<EventKind> {
        vec![EventKind::PointerMove, EventKind::Resize]
    }

    fn on_event(&mut self, event: &HostEvent) {
        match event {
            HostEvent::PointerMove { x, y } => {
                self.set_pointer(normalize_in(Point::new(*x, *y), self.viewport));
            }
            HostEvent::Resize { width, height } => self.viewport = Size::new(*width, *height),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ambient/scene3d.rs"]
mod tests;
