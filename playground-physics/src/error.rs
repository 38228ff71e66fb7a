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
//! Error types for body construction and world configuration

use thiserror::Error;

/// Errors raised while constructing a [`Body`](crate::body::Body)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BodyError {
    /// A size parameter (radius, width, height) is not positive and finite
    #[error("Invalid {dimension}: {value} (must be positive and finite)")]
    InvalidDimension {
        /// Name of the dimension
        dimension: &'static str,
        /// Rejected value
        value: f64,
    },

    /// Mass is not positive and finite for a dynamic body
    #[error("Invalid mass {value}: dynamic bodies need a positive, finite mass")]
    InvalidMass {
        /// Rejected value
        value: f64,
    },

    /// Polygon with fewer than three vertices
    #[error("Polygon needs at least 3 points, got {got}")]
    TooFewPoints {
        /// Number of points supplied
        got: usize,
    },

    /// Triangle given a point count other than three
    #[error("Triangle needs exactly 3 points, got {got}")]
    TrianglePoints {
        /// Number of points supplied
        got: usize,
    },

    /// The spawn request never supplied a position
    #[error("Body has no position")]
    MissingPosition,

    /// A record is missing the point list its shape requires
    #[error("{shape} record is missing its points")]
    MissingPoints {
        /// Shape name as stored in the record
        shape: &'static str,
    },
}

/// Errors raised by [`WorldConfig::validate`](crate::config::WorldConfig::validate)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// World width or height is not positive and finite
    #[error("Invalid world size {width}x{height}")]
    InvalidWorldSize {
        /// Configured width
        width: f64,
        /// Configured height
        height: f64,
    },

    /// Gravity magnitude is not finite
    #[error("Invalid gravity {0}: must be finite")]
    InvalidGravity(f64),

    /// Damping outside (0, 1]
    #[error("Invalid damping {0}: must be in (0, 1]")]
    InvalidDamping(f64),

    /// Zero collision sweeps per tick
    #[error("collision_passes must be at least 1")]
    NoCollisionPasses,
}
