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
//! Spawn interface for bodies

use super::{Body, Shape, ShapeKind};
use crate::error::BodyError;
use crate::math::Vector2;

/// Validating builder for [`Body`]
///
/// Velocity and acceleration default to zero, mass to 1 kg, rotation to
/// zero, and bodies are dynamic and collidable unless told otherwise. A
/// position has no default: building without one is an error.
#[derive(Debug, Clone)]
pub struct BodyBuilder {
    shape: Shape,
    position: Option<Vector2>,
    velocity: Vector2,
    acceleration: Vector2,
    mass: f64,
    is_static: bool,
    rotation: f64,
    collidable: bool,
}

impl BodyBuilder {
    /// Start building a body of the given shape
    pub fn new(shape: Shape) -> Self {
        BodyBuilder {
            shape,
            position: None,
            velocity: Vector2::zero(),
            acceleration: Vector2::zero(),
            mass: 1.0,
            is_static: false,
            rotation: 0.0,
            collidable: true,
        }
    }

    /// Start from the interactive spawn defaults for `kind`
    ///
    /// Circles get radius 20, rectangles 50x50 and triangles the points
    /// (0, 0), (50, 0), (25, 50). Polygons start with no points, so building
    /// one fails until [`BodyBuilder::polygon`] is used instead.
    pub fn from_kind(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Circle => Self::circle(20.0),
            ShapeKind::Rectangle => Self::rectangle(50.0, 50.0),
            ShapeKind::Triangle => Self::triangle([
                Vector2::new(0.0, 0.0),
                Vector2::new(50.0, 0.0),
                Vector2::new(25.0, 50.0),
            ]),
            ShapeKind::Polygon => Self::polygon(Vec::new()),
        }
    }

    /// Circle centered on the body position
    pub fn circle(radius: f64) -> Self {
        Self::new(Shape::Circle { radius })
    }

    /// Rectangle whose bottom-left corner is the body position
    pub fn rectangle(width: f64, height: f64) -> Self {
        Self::new(Shape::Rectangle { width, height })
    }

    /// Triangle with vertices relative to the body position
    pub fn triangle(points: [Vector2; 3]) -> Self {
        Self::new(Shape::Triangle { points })
    }

    /// Polygon with vertices relative to the body position
    pub fn polygon(points: Vec<Vector2>) -> Self {
        Self::new(Shape::Polygon { points })
    }

    /// Set the position
    pub fn position(mut self, position: Vector2) -> Self {
        self.position = Some(position);
        self
    }

    /// Set the initial velocity
    pub fn velocity(mut self, velocity: Vector2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the initial acceleration
    pub fn acceleration(mut self, acceleration: Vector2) -> Self {
        self.acceleration = acceleration;
        self
    }

    /// Set the mass in kilograms
    pub fn mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Mark the body as static
    pub fn static_body(self) -> Self {
        self.is_static(true)
    }

    /// Set whether the body is static
    pub fn is_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    /// Set the rotation in radians
    pub fn rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set whether the body takes part in collisions
    pub fn collidable(mut self, collidable: bool) -> Self {
        self.collidable = collidable;
        self
    }

    /// Validate and build the body
    ///
    /// # Errors
    ///
    /// - [`BodyError::MissingPosition`] if no position was given
    /// - [`BodyError::InvalidDimension`] / [`BodyError::TooFewPoints`] for bad geometry
    /// - [`BodyError::InvalidMass`] if a dynamic body's mass is not positive and
    ///   finite, or a static body's mass is negative or not finite
    pub fn build(self) -> Result<Body, BodyError> {
        let position = self.position.ok_or(BodyError::MissingPosition)?;
        self.shape.validate()?;

        let mass_ok = if self.is_static {
            self.mass >= 0.0 && self.mass.is_finite()
        } else {
            self.mass > 0.0 && self.mass.is_finite()
        };
        if !mass_ok {
            return Err(BodyError::InvalidMass { value: self.mass });
        }

        Ok(Body {
            shape: self.shape,
            position,
            velocity: self.velocity,
            acceleration: self.acceleration,
            mass: self.mass,
            is_static: self.is_static,
            rotation: if self.rotation.is_finite() { self.rotation } else { 0.0 },
            collidable: self.collidable,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let body = BodyBuilder::circle(0.5)
            .position(Vector2::new(1.0, 2.0))
            .build()
            .unwrap();
        assert_eq!(body.velocity(), Vector2::zero());
        assert_eq!(body.acceleration(), Vector2::zero());
        assert_eq!(body.mass(), 1.0);
        assert_eq!(body.rotation(), 0.0);
        assert!(body.is_collidable());
        assert!(!body.is_static());
    }

    #[test]
    fn test_missing_position() {
        let result = BodyBuilder::circle(0.5).build();
        assert_eq!(result, Err(BodyError::MissingPosition));
    }

    #[test]
    fn test_invalid_mass_rejected() {
        let zero = BodyBuilder::circle(0.5)
            .position(Vector2::zero())
            .mass(0.0)
            .build();
        assert_eq!(zero, Err(BodyError::InvalidMass { value: 0.0 }));

        let nan = BodyBuilder::circle(0.5)
            .position(Vector2::zero())
            .mass(f64::NAN)
            .build();
        assert!(matches!(nan, Err(BodyError::InvalidMass { .. })));
    }

    #[test]
    fn test_static_body_allows_zero_mass() {
        let wall = BodyBuilder::rectangle(1.0, 10.0)
            .position(Vector2::zero())
            .mass(0.0)
            .static_body()
            .build();
        assert!(wall.is_ok());
        assert!(wall.unwrap().is_static());
    }

    #[test]
    fn test_non_finite_kinematics_sanitized() {
        let body = BodyBuilder::circle(1.0)
            .position(Vector2::new(3.0, 3.0))
            .velocity(Vector2::new(f64::INFINITY, 1.0))
            .acceleration(Vector2::new(f64::NAN, f64::NAN))
            .rotation(f64::NAN)
            .build()
            .unwrap();
        assert_eq!(body.velocity(), Vector2::new(0.0, 1.0));
        assert_eq!(body.acceleration(), Vector2::zero());
        assert_eq!(body.rotation(), 0.0);
    }

    #[test]
    fn test_bad_geometry_rejected() {
        let result = BodyBuilder::rectangle(0.0, 1.0)
            .position(Vector2::zero())
            .build();
        assert!(matches!(result, Err(BodyError::InvalidDimension { dimension: "width", .. })));

        let result = BodyBuilder::polygon(vec![Vector2::zero()])
            .position(Vector2::zero())
            .build();
        assert_eq!(result, Err(BodyError::TooFewPoints { got: 1 }));
    }

    #[test]
    fn test_spawn_defaults_by_kind() {
        let at = Vector2::new(100.0, 100.0);

        let circle = BodyBuilder::from_kind(ShapeKind::Circle).position(at).build().unwrap();
        assert_eq!(circle.radius(), Some(20.0));

        let rect = BodyBuilder::from_kind(ShapeKind::Rectangle).position(at).build().unwrap();
        assert_eq!(rect.size(), Some((50.0, 50.0)));

        let tri = BodyBuilder::from_kind(ShapeKind::Triangle).position(at).build().unwrap();
        assert_eq!(tri.kind(), ShapeKind::Triangle);
        assert_eq!(tri.shape().local_points()[2], Vector2::new(25.0, 50.0));

        let poly = BodyBuilder::from_kind(ShapeKind::Polygon).position(at).build();
        assert_eq!(poly, Err(BodyError::TooFewPoints { got: 0 }));
    }
}
