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
//! World configuration
//!
//! Everything the simulation manager needs to know about the world lives in
//! [`WorldConfig`]: the size of the containment box, the default gravity
//! magnitude, the damping constant shared by collision and boundary
//! response, how many collision sweeps to run per tick, and whether
//! separating pairs skip the collision velocity response.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default world width in meters
pub const DEFAULT_WORLD_WIDTH: f64 = 20.0;

/// Default world height in meters
pub const DEFAULT_WORLD_HEIGHT: f64 = 12.0;

/// Default gravity magnitude in m/s², acting toward decreasing y
pub const DEFAULT_GRAVITY: f64 = 9.8;

/// Velocity multiplier applied after every collision or boundary bounce
pub const DEFAULT_DAMPING: f64 = 0.9;

/// Configuration for a [`SimulationManager`](crate::simulation::SimulationManager)
///
/// # Examples
///
/// ```
/// use playground_physics::config::WorldConfig;
///
/// let config = WorldConfig::new(40.0, 24.0).with_gravity(0.0);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.damping, 0.9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// World width in meters; x is contained to [0, width]
    pub width: f64,
    /// World height in meters; y is contained to [0, height]
    pub height: f64,
    /// Gravity magnitude used when `step` is called without one
    pub gravity: f64,
    /// Fixed damping constant in (0, 1]
    pub damping: f64,
    /// Collision sweeps over all pairs per tick (1 = single pass)
    pub collision_passes: usize,
    /// Skip the collision velocity response for pairs already moving apart
    pub skip_separating: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            width: DEFAULT_WORLD_WIDTH,
            height: DEFAULT_WORLD_HEIGHT,
            gravity: DEFAULT_GRAVITY,
            damping: DEFAULT_DAMPING,
            collision_passes: 1,
            skip_separating: false,
        }
    }
}

impl WorldConfig {
    /// Create a configuration for a world of the given size with default physics
    pub fn new(width: f64, height: f64) -> Self {
        WorldConfig {
            width,
            height,
            ..Default::default()
        }
    }

    /// Set the gravity magnitude
    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the damping constant
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Run `passes` collision sweeps per tick
    ///
    /// More than one sweep is an iterative relaxation that helps stacked
    /// bodies settle; it changes results compared to the single pass.
    pub fn with_collision_passes(mut self, passes: usize) -> Self {
        self.collision_passes = passes;
        self
    }

    /// Only correct the positions of colliding pairs that are already separating
    ///
    /// Off by default, in which case every detected contact gets the impulse
    /// exchange or reflection regardless of relative velocity.
    pub fn with_skip_separating(mut self, skip: bool) -> Self {
        self.skip_separating = skip;
        self
    }

    /// Check that every field is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.width.is_finite() && self.height > 0.0 && self.height.is_finite()) {
            return Err(ConfigError::InvalidWorldSize {
                width: self.width,
                height: self.height,
            });
        }
        if !self.gravity.is_finite() {
            return Err(ConfigError::InvalidGravity(self.gravity));
        }
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(ConfigError::InvalidDamping(self.damping));
        }
        if self.collision_passes == 0 {
            return Err(ConfigError::NoCollisionPasses);
        }
        Ok(())
    }
}
