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
//! 2D vector math
//!
//! [`Vector2`] is the value type used for every kinematic quantity in the
//! engine: positions, velocities, accelerations and collision normals.
//! It is `Copy`, so assigning a vector from one body to another always
//! produces an independent value.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// 2D vector with double-precision components
///
/// Non-finite components are coerced to zero at construction, so a
/// `Vector2` built through [`Vector2::new`] is always valid.
///
/// # Examples
///
/// ```
/// use playground_physics::math::Vector2;
///
/// let v = Vector2::new(3.0, 4.0);
/// assert_eq!(v.magnitude(), 5.0);
///
/// let sanitized = Vector2::new(f64::NAN, 1.0);
/// assert_eq!(sanitized.x(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawVector2", into = "RawVector2")]
pub struct Vector2 {
    x: f64,
    y: f64,
}

impl Vector2 {
    /// Create a new vector, replacing NaN or infinite components with zero
    pub fn new(x: f64, y: f64) -> Self {
        Vector2 {
            x: if x.is_finite() { x } else { 0.0 },
            y: if y.is_finite() { y } else { 0.0 },
        }
    }

    /// The zero vector
    pub const fn zero() -> Self {
        Vector2 { x: 0.0, y: 0.0 }
    }

    /// Unit vector pointing at `angle` radians from the +x axis
    pub fn from_angle(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Vector2::new(cos, sin)
    }

    /// Get the x component
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Get the y component
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Copy of this vector with a new x component
    pub fn with_x(self, x: f64) -> Self {
        Vector2::new(x, self.y)
    }

    /// Copy of this vector with a new y component
    pub fn with_y(self, y: f64) -> Self {
        Vector2::new(self.x, y)
    }

    /// `self + v * scale`
    pub fn add(self, v: Vector2, scale: f64) -> Self {
        Vector2::new(self.x + v.x * scale, self.y + v.y * scale)
    }

    /// `self - v`
    pub fn subtract(self, v: Vector2) -> Self {
        Vector2::new(self.x - v.x, self.y - v.y)
    }

    /// Multiply both components by `s`
    pub fn scale(self, s: f64) -> Self {
        Vector2::new(self.x * s, self.y * s)
    }

    /// Dot product
    pub fn dot(&self, v: Vector2) -> f64 {
        self.x * v.x + self.y * v.y
    }

    /// Euclidean length
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Squared length, for comparisons that don't need the square root
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Distance between two points
    pub fn distance(&self, v: Vector2) -> f64 {
        v.subtract(*self).magnitude()
    }

    /// Unit vector in the same direction
    ///
    /// A zero vector is returned unchanged rather than divided by zero.
    pub fn normalize(self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            return self;
        }
        self.scale(1.0 / mag)
    }

    /// Rotate counter-clockwise by `angle` radians
    pub fn rotate(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Vector2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Check if both components are finite
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Get the vector as an array
    pub fn as_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from(arr: [f64; 2]) -> Self {
        Vector2::new(arr[0], arr[1])
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2::new(x, y)
    }
}

impl Add for Vector2 {
    type Output = Vector2;
    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;
    fn sub(self, rhs: Vector2) -> Vector2 {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;
    fn mul(self, rhs: f64) -> Vector2 {
        self.scale(rhs)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;
    fn neg(self) -> Vector2 {
        self.scale(-1.0)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Vector2) {
        *self = *self - rhs;
    }
}

/// Wire form of [`Vector2`]; deserialized values pass through `Vector2::new`
#[derive(Serialize, Deserialize)]
struct RawVector2 {
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
}

impl From<RawVector2> for Vector2 {
    fn from(raw: RawVector2) -> Self {
        Vector2::new(raw.x, raw.y)
    }
}

impl From<Vector2> for RawVector2 {
    fn from(v: Vector2) -> Self {
        RawVector2 { x: v.x, y: v.y }
    }
}
