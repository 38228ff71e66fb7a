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
//! Pairwise intersection tests
//!
//! Each test returns a [`Contact`] whose normal points from the first
//! argument toward the second. A zero distance between the reference points
//! is reported as no contact, so the normal is always a unit vector.

use crate::math::Vector2;

/// Result of a positive intersection test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit normal pointing from the first shape toward the second
    pub normal: Vector2,
    /// Overlap depth along the normal (>= 0)
    pub penetration: f64,
}

/// Circle–circle test
///
/// Collision iff 0 < d <= r_a + r_b, where d is the center distance.
/// Touching circles count as colliding.
pub fn circle_circle(
    center_a: Vector2,
    radius_a: f64,
    center_b: Vector2,
    radius_b: f64,
) -> Option<Contact> {
    let delta = center_b - center_a;
    let d = delta.magnitude();
    let reach = radius_a + radius_b;

    if d == 0.0 || d > reach {
        return None;
    }

    Some(Contact {
        normal: delta.scale(1.0 / d),
        penetration: reach - d,
    })
}

/// Closest point of the box [x, x+w] x [y, y+h] to `point`
///
/// `corner` is the bottom-left corner of the box.
pub fn closest_point_on_box(point: Vector2, corner: Vector2, width: f64, height: f64) -> Vector2 {
    Vector2::new(
        point.x().clamp(corner.x(), corner.x() + width),
        point.y().clamp(corner.y(), corner.y() + height),
    )
}

/// Circle–axis-aligned-rectangle test
///
/// Collision iff 0 < d <= radius, where d is the distance from the circle
/// center to the closest point on the box. A center inside the box gives
/// d = 0 and is not resolved.
pub fn circle_rectangle(
    center: Vector2,
    radius: f64,
    corner: Vector2,
    width: f64,
    height: f64,
) -> Option<Contact> {
    let closest = closest_point_on_box(center, corner, width, height);
    let delta = closest - center;
    let d = delta.magnitude();

    if d == 0.0 || d > radius {
        return None;
    }

    Some(Contact {
        normal: delta.scale(1.0 / d),
        penetration: radius - d,
    })
}
