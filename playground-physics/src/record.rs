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
//! Persisted body records
//!
//! [`BodyRecord`] is the stored form of a body inside a saved playground.
//! Field names are camelCase and missing fields fall back to the stored
//! schema's defaults. Fields from older records that the engine no longer
//! models (`appliedForce`, `coefficientOfRestitution`) are ignored on read.
//!
//! Only the fields matching the record's `shape` are used when building a
//! [`Body`]; the others keep their defaults.

use serde::{Deserialize, Serialize};

use crate::body::{Body, BodyBuilder, Shape, ShapeKind};
use crate::error::BodyError;
use crate::math::Vector2;

fn default_mass() -> f64 {
    1.0
}

fn default_radius() -> f64 {
    10.0
}

fn default_side() -> f64 {
    20.0
}

fn default_color() -> String {
    "#ff0000".to_string()
}

fn default_true() -> bool {
    true
}

/// Stored form of a body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyRecord {
    /// Display name
    pub name: String,
    /// Identifier of the owning playground
    pub playground: String,
    /// Mass in kilograms
    #[serde(default = "default_mass")]
    pub mass: f64,
    /// Circle center or rectangle bottom-left corner
    pub position: Vector2,
    /// Initial velocity
    #[serde(default)]
    pub velocity: Vector2,
    /// Stored acceleration; the vertical part is replaced by gravity each tick
    #[serde(default)]
    pub acceleration: Vector2,
    /// Whether the body takes part in collisions
    #[serde(default = "default_true")]
    pub collidable: bool,
    /// Shape tag selecting which geometry fields apply
    #[serde(default)]
    pub shape: ShapeKind,
    /// Circle radius
    #[serde(default = "default_radius")]
    pub radius: f64,
    /// Rectangle width
    #[serde(default = "default_side")]
    pub width: f64,
    /// Rectangle height
    #[serde(default = "default_side")]
    pub height: f64,
    /// Triangle or polygon vertices relative to the position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<Vector2>>,
    /// Rotation in radians
    #[serde(default)]
    pub rotation: f64,
    /// Render color, opaque to the engine
    #[serde(default = "default_color")]
    pub color: String,
    /// Static bodies never move
    #[serde(default)]
    pub is_static: bool,
}

impl BodyRecord {
    /// Build the record for `body`
    ///
    /// Geometry fields that do not apply to the body's shape keep the
    /// schema defaults.
    pub fn from_body(
        name: impl Into<String>,
        playground: impl Into<String>,
        color: impl Into<String>,
        body: &Body,
    ) -> Self {
        let mut record = BodyRecord {
            name: name.into(),
            playground: playground.into(),
            mass: body.mass(),
            position: body.position(),
            velocity: body.velocity(),
            acceleration: body.acceleration(),
            collidable: body.is_collidable(),
            shape: body.kind(),
            radius: default_radius(),
            width: default_side(),
            height: default_side(),
            points: None,
            rotation: body.rotation(),
            color: color.into(),
            is_static: body.is_static(),
        };

        match body.shape() {
            Shape::Circle { radius } => record.radius = *radius,
            Shape::Rectangle { width, height } => {
                record.width = *width;
                record.height = *height;
            }
            Shape::Triangle { .. } | Shape::Polygon { .. } => {
                record.points = Some(body.shape().local_points().to_vec());
            }
        }

        record
    }

    /// Geometry described by this record
    pub fn to_shape(&self) -> Result<Shape, BodyError> {
        let points = || {
            self.points.as_ref().ok_or(BodyError::MissingPoints {
                shape: self.shape.as_str(),
            })
        };

        Ok(match self.shape {
            ShapeKind::Circle => Shape::Circle { radius: self.radius },
            ShapeKind::Rectangle => Shape::Rectangle {
                width: self.width,
                height: self.height,
            },
            ShapeKind::Triangle => {
                let pts = points()?;
                let points: [Vector2; 3] = pts
                    .as_slice()
                    .try_into()
                    .map_err(|_| BodyError::TrianglePoints { got: pts.len() })?;
                Shape::Triangle { points }
            }
            ShapeKind::Polygon => Shape::Polygon {
                points: points()?.clone(),
            },
        })
    }
}

impl TryFrom<&BodyRecord> for Body {
    type Error = BodyError;

    fn try_from(record: &BodyRecord) -> Result<Self, Self::Error> {
        BodyBuilder::new(record.to_shape()?)
            .position(record.position)
            .velocity(record.velocity)
            .acceleration(record.acceleration)
            .mass(record.mass)
            .is_static(record.is_static)
            .rotation(record.rotation)
            .collidable(record.collidable)
            .build()
    }
}
