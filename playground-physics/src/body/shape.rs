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
//! Body shapes
//!
//! Every consumer of a shape matches on [`Shape`] exhaustively; adding a
//! variant means touching each of those matches.

use crate::error::BodyError;
use crate::math::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Geometry of a body
///
/// Position conventions: a circle's position is its center, a rectangle's
/// position is its bottom-left corner, and triangle/polygon points are
/// offsets from the body position.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Circle of the given radius
    Circle {
        /// Radius in meters
        radius: f64,
    },
    /// Axis-aligned rectangle
    Rectangle {
        /// Extent along x in meters
        width: f64,
        /// Extent along y in meters
        height: f64,
    },
    /// Triangle given by three local-space vertices
    Triangle {
        /// Vertices relative to the body position
        points: [Vector2; 3],
    },
    /// Polygon given by local-space vertices in winding order
    Polygon {
        /// Vertices relative to the body position
        points: Vec<Vector2>,
    },
}

impl Shape {
    /// Get the discriminant of this shape
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Rectangle { .. } => ShapeKind::Rectangle,
            Shape::Triangle { .. } => ShapeKind::Triangle,
            Shape::Polygon { .. } => ShapeKind::Polygon,
        }
    }

    /// Check the shape's dimensions
    pub fn validate(&self) -> Result<(), BodyError> {
        match self {
            Shape::Circle { radius } => check_dimension("radius", *radius),
            Shape::Rectangle { width, height } => {
                check_dimension("width", *width)?;
                check_dimension("height", *height)
            }
            Shape::Triangle { .. } => Ok(()),
            Shape::Polygon { points } => {
                if points.len() < 3 {
                    Err(BodyError::TooFewPoints { got: points.len() })
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Local-space vertices for triangles and polygons, empty otherwise
    pub fn local_points(&self) -> &[Vector2] {
        match self {
            Shape::Triangle { points } => points.as_slice(),
            Shape::Polygon { points } => points.as_slice(),
            Shape::Circle { .. } | Shape::Rectangle { .. } => &[],
        }
    }
}

fn check_dimension(dimension: &'static str, value: f64) -> Result<(), BodyError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(BodyError::InvalidDimension { dimension, value })
    }
}

/// Shape tag without geometry, as stored in persisted records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// See [`Shape::Circle`]
    #[default]
    Circle,
    /// See [`Shape::Rectangle`]
    Rectangle,
    /// See [`Shape::Triangle`]
    Triangle,
    /// See [`Shape::Polygon`]
    Polygon,
}

impl ShapeKind {
    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Polygon => "polygon",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
