//! Drawable world objects
//!
//! Every object carries the same kinematic state and differs only in what it
//! draws. The client turns `GameObject::world_transform` into a `Transform`
//! and lets the camera supply view/projection.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::kinematics::{sanitize_dt, Kinematics};
use crate::math::{elevation, euler_quat};

/// Which model a `Drawable::Model` instance shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelKind {
    #[default]
    Bullet,
    BeachBall,
}

impl ModelKind {
    pub const ALL: [ModelKind; 2] = [ModelKind::Bullet, ModelKind::BeachBall];
}

/// What an object looks like.
#[derive(Clone, Debug, PartialEq)]
pub enum Drawable {
    /// Coloured segment; endpoints are local to the object.
    Line { start: Vec3, end: Vec3, color: Color },
    /// Four local corners p1..p4, split into (p1,p3,p2) and (p2,p3,p4) so the
    /// front face points along (p3-p1) x (p2-p1).
    TexturedQuad { corners: [Vec3; 4] },
    /// Mesh/scene instance that pitches to follow its velocity.
    Model { model: ModelKind, scale: f32 },
}

/// A simulated, drawable object.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct GameObject {
    pub kinematics: Kinematics,
    pub drawable: Drawable,
    /// Seconds since spawn.
    pub age: f32,
    /// `None` keeps the object forever.
    pub lifetime: Option<f32>,
}

impl GameObject {
    pub fn new(kinematics: Kinematics, drawable: Drawable) -> Self {
        Self {
            kinematics,
            drawable,
            age: 0.0,
            lifetime: None,
        }
    }

    pub fn line(origin: Vec3, end: Vec3, color: Color) -> Self {
        Self::new(
            Kinematics::at(origin),
            Drawable::Line {
                start: Vec3::ZERO,
                end: end - origin,
                color,
            },
        )
    }

    pub fn quad(position: Vec3, corners: [Vec3; 4]) -> Self {
        Self::new(Kinematics::at(position), Drawable::TexturedQuad { corners })
    }

    pub fn model(kinematics: Kinematics, model: ModelKind, scale: f32) -> Self {
        Self::new(kinematics, Drawable::Model { model, scale })
    }

    pub fn with_lifetime(mut self, seconds: f32) -> Self {
        self.lifetime = Some(seconds);
        self
    }

    /// Advance one frame.
    pub fn update(&mut self, dt: f32) {
        let dt = sanitize_dt(dt);
        self.kinematics.integrate(dt);
        self.age += dt;

        if let Drawable::Model { .. } = self.drawable {
            // Nose follows the flight path; a stalled model keeps its last pitch.
            if let Some(pitch) = elevation(self.kinematics.velocity) {
                self.kinematics.rotation.y = pitch;
            }
        }
    }

    /// Model transform handed to the renderer.
    pub fn world_transform(&self) -> Transform {
        let scale = match self.drawable {
            Drawable::Model { scale, .. } => scale,
            _ => 1.0,
        };
        Transform::from_translation(self.kinematics.position)
            .with_rotation(euler_quat(self.kinematics.rotation))
            .with_scale(Vec3::splat(scale))
    }

    /// World-space endpoints, for line objects only.
    pub fn line_endpoints(&self) -> Option<(Vec3, Vec3, Color)> {
        let Drawable::Line { start, end, color } = self.drawable else {
            return None;
        };
        let transform = self.world_transform();
        Some((
            transform.transform_point(start),
            transform.transform_point(end),
            color,
        ))
    }

    /// Past its lifetime or fallen through the kill plane.
    ///
    /// Objects without a lifetime never expire.
    pub fn is_expired(&self, kill_plane_y: f32) -> bool {
        match self.lifetime {
            Some(lifetime) => self.age > lifetime || self.kinematics.position.y < kill_plane_y,
            None => false,
        }
    }
}

/// Vertex data for a textured quad.
#[derive(Clone, Debug, PartialEq)]
pub struct QuadGeometry {
    pub positions: [[f32; 3]; 4],
    pub normals: [[f32; 3]; 4],
    pub uvs: [[f32; 2]; 4],
    pub indices: [u16; 6],
}

/// Build quad vertices with a shared face normal.
///
/// A degenerate quad (collinear corners) gets a +Y normal.
pub fn quad_geometry(corners: [Vec3; 4]) -> QuadGeometry {
    let [p1, p2, p3, _] = corners;
    let normal = (p3 - p1)
        .cross(p2 - p1)
        .try_normalize()
        .unwrap_or(Vec3::Y)
        .to_array();

    QuadGeometry {
        positions: corners.map(|c| c.to_array()),
        normals: [normal; 4],
        uvs: [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]],
        indices: [0, 2, 1, 1, 2, 3],
    }
}

/// Unit floor tile spanning +X and +Z from its origin.
pub const UNIT_TILE: [Vec3; 4] = [
    Vec3::ZERO,
    Vec3::X,
    Vec3::Z,
    Vec3::new(1.0, 0.0, 1.0),
];
