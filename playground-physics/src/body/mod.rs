// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Simulated bodies
//!
//! A [`Body`] couples a [`Shape`] with kinematic state (position, velocity,
//! acceleration) and physical flags. Bodies are created through
//! [`BodyBuilder`], which validates the request and fails fast on malformed
//! input.
//!
//! Static bodies behave as infinite mass: the integrator, the collision
//! detector and the boundary handler never move them or change their
//! velocity.

mod builder;
mod shape;

pub use builder::BodyBuilder;
pub use shape::{Shape, ShapeKind};

use crate::math::Vector2;

/// A shaped rigid body with kinematic state
///
/// # Examples
///
/// ```
/// use playground_physics::body::BodyBuilder;
/// use playground_physics::math::Vector2;
///
/// let ball = BodyBuilder::circle(0.5)
///     .position(Vector2::new(2.0, 8.0))
///     .velocity(Vector2::new(1.0, 0.0))
///     .build()
///     .unwrap();
///
/// assert_eq!(ball.radius(), Some(0.5));
/// assert!(!ball.is_static());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub(crate) shape: Shape,
    pub(crate) position: Vector2,
    pub(crate) velocity: Vector2,
    pub(crate) acceleration: Vector2,
    pub(crate) mass: f64,
    pub(crate) is_static: bool,
    pub(crate) rotation: f64,
    pub(crate) collidable: bool,
}

impl Body {
    /// Get the shape
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Get the shape tag
    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    /// Get the position (circle center, rectangle bottom-left corner)
    pub fn position(&self) -> Vector2 {
        self.position
    }

    /// Get the velocity
    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    /// Get the acceleration
    pub fn acceleration(&self) -> Vector2 {
        self.acceleration
    }

    /// Get the mass in kilograms
    ///
    /// The value of a static body is carried for persistence only; static
    /// bodies are treated as infinite mass.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Inverse mass, 0.0 for static bodies
    pub fn inverse_mass(&self) -> f64 {
        if self.is_static {
            0.0
        } else {
            1.0 / self.mass
        }
    }

    /// Check if the body is static (infinite mass, never moved)
    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Rotation in radians; only affects [`Body::outline`]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Check if the body takes part in collision detection
    pub fn is_collidable(&self) -> bool {
        self.collidable
    }

    /// Radius for circles
    pub fn radius(&self) -> Option<f64> {
        match self.shape {
            Shape::Circle { radius } => Some(radius),
            _ => None,
        }
    }

    /// Width and height for rectangles
    pub fn size(&self) -> Option<(f64, f64)> {
        match self.shape {
            Shape::Rectangle { width, height } => Some((width, height)),
            _ => None,
        }
    }

    /// Overwrite the position
    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }

    /// Overwrite the velocity
    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    /// Overwrite the acceleration
    pub fn set_acceleration(&mut self, acceleration: Vector2) {
        self.acceleration = acceleration;
    }

    /// Overwrite the rotation
    pub fn set_rotation(&mut self, rotation: f64) {
        if rotation.is_finite() {
            self.rotation = rotation;
        }
    }

    /// Enable or disable collision detection for this body
    pub fn set_collidable(&mut self, collidable: bool) {
        self.collidable = collidable;
    }

    /// World-space vertices of a triangle or polygon
    ///
    /// Local points are rotated by [`Body::rotation`] around the body
    /// position and then translated by it. Circles and rectangles have no
    /// vertex list and return an empty vector.
    pub fn outline(&self) -> Vec<Vector2> {
        self.shape
            .local_points()
            .iter()
            .map(|p| self.position + p.rotate(self.rotation))
            .collect()
    }
}
