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
//! World-edge containment
//!
//! The world is the box [0, width] x [0, height]. A body crossing an edge is
//! clamped back onto it and the velocity component along that axis is
//! reversed and damped. The x and y axes are handled independently; on each
//! axis the low edge is checked first and the high edge only if the low one
//! did not fire.
//!
//! Triangles and polygons have no extent in the engine and are not
//! contained.

use crate::body::{Body, Shape};
use crate::config::DEFAULT_DAMPING;

/// Clamps bodies into the world box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryHandler {
    damping: f64,
}

impl Default for BoundaryHandler {
    fn default() -> Self {
        BoundaryHandler::new(DEFAULT_DAMPING)
    }
}

/// Clamp `value` into [low, high] on one axis
///
/// Returns the clamped value, or `None` if it was already inside.
fn clamp_axis(value: f64, low: f64, high: f64) -> Option<f64> {
    if value < low {
        Some(low)
    } else if value > high {
        Some(high)
    } else {
        None
    }
}

impl BoundaryHandler {
    /// Create a handler with the given damping constant
    ///
    /// # Panics
    ///
    /// Panics if `damping` is not in (0, 1].
    pub fn new(damping: f64) -> Self {
        assert!(
            damping > 0.0 && damping <= 1.0,
            "Damping must be in (0, 1]"
        );
        BoundaryHandler { damping }
    }

    /// Get the damping constant
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Keep a body inside a `width` x `height` world
    ///
    /// Returns true if any edge clamped the body. Static bodies are never
    /// touched.
    pub fn apply_boundaries(&self, body: &mut Body, width: f64, height: f64) -> bool {
        if body.is_static() {
            return false;
        }

        // Admissible range of the position on each axis
        let (x_range, y_range) = match body.shape {
            Shape::Circle { radius } => ((radius, width - radius), (radius, height - radius)),
            Shape::Rectangle { width: w, height: h } => ((0.0, width - w), (0.0, height - h)),
            Shape::Triangle { .. } | Shape::Polygon { .. } => return false,
        };

        let mut clamped = false;

        if let Some(x) = clamp_axis(body.position.x(), x_range.0, x_range.1) {
            body.position = body.position.with_x(x);
            body.velocity = body.velocity.with_x(-body.velocity.x() * self.damping);
            clamped = true;
        }

        if let Some(y) = clamp_axis(body.position.y(), y_range.0, y_range.1) {
            body.position = body.position.with_y(y);
            body.velocity = body.velocity.with_y(-body.velocity.y() * self.damping);
            clamped = true;
        }

        clamped
    }
}
