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
//! # Playground Physics
//!
//! A small 2D rigid-body engine for an interactive physics playground:
//! circles and axis-aligned rectangles fall under gravity, bounce off each
//! other and stay inside a rectangular world.
//!
//! ## Features
//!
//! - **Bodies**: circles, rectangles, triangles and polygons built through a
//!   validating [`BodyBuilder`]
//! - **Integration**: semi-implicit Euler with a configurable gravity magnitude
//! - **Collisions**: circle–circle and circle–rectangle detection with
//!   positional correction and a damped impulse exchange
//! - **Boundaries**: damped reflection off the world edges
//! - **Persistence**: serde records compatible with saved playgrounds
//! - **Parallelization**: optional Rayon integration for the per-body passes
//!
//! ## Coordinates
//!
//! y points up and gravity pulls toward decreasing y. A circle's position is
//! its center; a rectangle's position is its bottom-left corner.
//!
//! ## Example
//!
//! ```rust
//! use playground_physics::{BodyBuilder, SimulationManager, Vector2, WorldConfig};
//!
//! let mut sim = SimulationManager::new(WorldConfig::default());
//!
//! let ground = BodyBuilder::rectangle(20.0, 1.0)
//!     .position(Vector2::new(0.0, 0.0))
//!     .mass(100.0)
//!     .static_body()
//!     .build()
//!     .unwrap();
//! let ball = BodyBuilder::circle(0.75)
//!     .position(Vector2::new(5.0, 10.0))
//!     .velocity(Vector2::new(3.0, 0.0))
//!     .build()
//!     .unwrap();
//!
//! let mut bodies = vec![ground, ball];
//! for _ in 0..60 {
//!     bodies = sim.step(&bodies, 1.0 / 60.0, None);
//! }
//! assert!(bodies[1].position().y() < 10.0);
//! ```

#![warn(missing_docs)]

/// 2D vector math
pub mod math;

/// Error types
pub mod error;

/// World configuration
pub mod config;

/// Bodies and their shapes
pub mod body;

/// Numerical integration
pub mod integration;

/// Collision detection and response
pub mod collision;

/// World-edge containment
pub mod boundary;

/// Per-frame orchestration
pub mod simulation;

/// Persisted body records
pub mod record;

pub use body::{Body, BodyBuilder, Shape, ShapeKind};
pub use config::WorldConfig;
pub use error::{BodyError, ConfigError};
pub use math::Vector2;
pub use record::BodyRecord;
pub use simulation::{SimulationManager, StepStats};
