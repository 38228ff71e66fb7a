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
//! Numerical integration for the playground simulation
//!
//! Bodies are advanced with semi-implicit (symplectic) Euler, see
//! [`PhysicsEngine`]. The order of the two updates matters: velocity is
//! advanced first and the new velocity moves the position. Swapping them
//! gives explicit Euler, which gains energy on every bounce.
//!
//! # Timestep Guidelines
//!
//! - The host drives one step per frame, typically dt = 1/60
//! - dt is never clamped or sub-stepped; very large values can diverge
//! - [`validate_timestep`] reports suspicious values without rejecting them

use crate::body::Body;

mod euler;

pub use euler::PhysicsEngine;

/// Timesteps below this lose precision in f64 position updates
pub const MIN_RECOMMENDED_TIMESTEP: f64 = 1e-9;

/// Timesteps above this make bounces visibly unstable
pub const MAX_RECOMMENDED_TIMESTEP: f64 = 1.0;

/// Check a timestep for numerical problems
///
/// Returns a warning message for non-positive, non-finite, extremely small
/// or large timesteps. The engine still integrates with whatever dt it is
/// given; callers decide what to do with the warning.
pub fn validate_timestep(dt: f64) -> Result<(), String> {
    if dt <= 0.0 || !dt.is_finite() {
        return Err(format!("Invalid timestep: {}. Must be positive and finite.", dt));
    }

    if dt < MIN_RECOMMENDED_TIMESTEP {
        return Err(format!(
            "Timestep {} is extremely small and may cause precision loss with f64.",
            dt
        ));
    }

    if dt > MAX_RECOMMENDED_TIMESTEP {
        return Err(format!(
            "Timestep {} is large and may cause instability or tunneling.",
            dt
        ));
    }

    Ok(())
}

/// Kinetic energy of a single body
///
/// KE = 0.5 * m * v²; static bodies report zero.
pub fn kinetic_energy(body: &Body) -> f64 {
    if body.is_static() {
        return 0.0;
    }
    0.5 * body.mass() * body.velocity().magnitude_squared()
}

/// Total kinetic energy of a set of bodies
pub fn total_kinetic_energy(bodies: &[Body]) -> f64 {
    bodies.iter().map(kinetic_energy).sum()
}
