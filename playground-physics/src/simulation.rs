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
//! Per-frame orchestration
//!
//! [`SimulationManager::step`] advances a set of bodies by one tick. The
//! passes always run in the same order:
//!
//! 1. Collision: every unordered pair is visited once per sweep, in index
//!    order, and resolved immediately. Later pairs see the corrected state of
//!    earlier ones.
//! 2. Integration: each dynamic body gets its vertical acceleration replaced
//!    by the gravity term and is advanced with semi-implicit Euler.
//! 3. Boundaries: each dynamic body is clamped into the world box.
//!
//! The collision pass is order dependent and always sequential. With the
//! `parallel` feature the two per-body passes run on the rayon pool and join
//! before `step` returns.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::body::Body;
use crate::boundary::BoundaryHandler;
use crate::collision::CollisionDetector;
use crate::config::WorldConfig;
use crate::error::ConfigError;
use crate::integration::{total_kinetic_energy, validate_timestep, PhysicsEngine};

/// Counters collected during the last tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepStats {
    /// Pairs that were found in contact, summed over all sweeps
    pub contacts: usize,
    /// Bodies clamped by at least one world edge
    pub boundary_clamps: usize,
    /// Dynamic bodies advanced by the integrator
    pub integrated: usize,
    /// Total kinetic energy after the tick
    pub kinetic_energy: f64,
}

/// Drives the simulation one tick at a time
///
/// # Examples
///
/// ```
/// use playground_physics::{BodyBuilder, SimulationManager, Vector2, WorldConfig};
///
/// let mut sim = SimulationManager::new(WorldConfig::default());
/// let ball = BodyBuilder::circle(0.5)
///     .position(Vector2::new(10.0, 6.0))
///     .build()
///     .unwrap();
///
/// let next = sim.step(&[ball], 1.0 / 60.0, None);
/// assert!(next[0].position().y() < 6.0);
/// ```
#[derive(Debug, Clone)]
pub struct SimulationManager {
    config: WorldConfig,
    gravity: f64,
    detector: CollisionDetector,
    boundaries: BoundaryHandler,
    stats: StepStats,
}

impl SimulationManager {
    /// Create a manager for the given world
    ///
    /// # Panics
    ///
    /// Panics if the configuration does not validate. Use
    /// [`SimulationManager::try_new`] to handle the error instead.
    pub fn new(config: WorldConfig) -> Self {
        match Self::try_new(config) {
            Ok(manager) => manager,
            Err(e) => panic!("Invalid world configuration: {}", e),
        }
    }

    /// Create a manager, rejecting an invalid configuration
    pub fn try_new(config: WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(SimulationManager {
            config,
            gravity: config.gravity,
            detector: CollisionDetector::new(config.damping)
                .with_skip_separating(config.skip_separating),
            boundaries: BoundaryHandler::new(config.damping),
            stats: StepStats::default(),
        })
    }

    /// Get the world configuration
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Gravity magnitude used when `step` is called without one
    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    /// Counters from the most recent tick
    pub fn last_stats(&self) -> StepStats {
        self.stats
    }

    /// Advance `bodies` by `dt` seconds and return the new state
    ///
    /// The input slice is left untouched; the returned vector holds fresh
    /// copies with the same order. A `Some` gravity replaces the stored
    /// magnitude for this and all later calls.
    pub fn step(&mut self, bodies: &[Body], dt: f64, gravity: Option<f64>) -> Vec<Body> {
        let mut working = bodies.to_vec();
        self.step_in_place(&mut working, dt, gravity);
        working
    }

    /// Advance `bodies` by `dt` seconds, overwriting them
    ///
    /// Same pass order as [`SimulationManager::step`].
    pub fn step_in_place(&mut self, bodies: &mut [Body], dt: f64, gravity: Option<f64>) {
        if let Some(g) = gravity {
            if g.is_finite() {
                self.gravity = g;
            } else {
                log::warn!("Ignoring non-finite gravity {}, keeping {}", g, self.gravity);
            }
        }

        if let Err(msg) = validate_timestep(dt) {
            log::warn!("{}", msg);
        }

        let mut contacts = 0;
        for _ in 0..self.config.collision_passes {
            contacts += self.detector.resolve_all(bodies);
        }

        let integrated = self.integrate(bodies, dt);
        let boundary_clamps = self.apply_boundaries(bodies);

        self.stats = StepStats {
            contacts,
            boundary_clamps,
            integrated,
            kinetic_energy: total_kinetic_energy(bodies),
        };

        log::trace!(
            "step: dt={} gravity={} bodies={} contacts={} clamps={} ke={:.4}",
            dt,
            self.gravity,
            bodies.len(),
            contacts,
            boundary_clamps,
            self.stats.kinetic_energy
        );
    }

    /// Integration pass; returns the number of bodies advanced
    fn integrate(&self, bodies: &mut [Body], dt: f64) -> usize {
        let gravity = self.gravity;

        // The stored acceleration carries gravity, so the integrator adds none
        let advance = move |body: &mut Body| -> bool {
            if body.is_static() {
                return false;
            }
            body.acceleration = body.acceleration.with_y(-gravity);
            PhysicsEngine::update(body, dt, 0.0)
        };

        #[cfg(feature = "parallel")]
        {
            bodies.par_iter_mut().map(advance).filter(|&moved| moved).count()
        }

        #[cfg(not(feature = "parallel"))]
        {
            bodies.iter_mut().map(advance).filter(|&moved| moved).count()
        }
    }

    /// Boundary pass; returns the number of bodies clamped
    fn apply_boundaries(&self, bodies: &mut [Body]) -> usize {
        let handler = self.boundaries;
        let (width, height) = (self.config.width, self.config.height);
        let clamp = move |body: &mut Body| handler.apply_boundaries(body, width, height);

        #[cfg(feature = "parallel")]
        {
            bodies.par_iter_mut().map(clamp).filter(|&hit| hit).count()
        }

        #[cfg(not(feature = "parallel"))]
        {
            bodies.iter_mut().map(clamp).filter(|&hit| hit).count()
        }
    }
}

impl Default for SimulationManager {
    fn default() -> Self {
        SimulationManager::new(WorldConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::BodyBuilder;
    use crate::math::Vector2;

    fn ball(x: f64, y: f64, vx: f64) -> Body {
        BodyBuilder::circle(0.5)
            .position(Vector2::new(x, y))
            .velocity(Vector2::new(vx, 0.0))
            .build()
            .unwrap()
    }

    #[test]
    fn test_step_leaves_input_untouched() {
        let mut sim = SimulationManager::default();
        let bodies = vec![ball(5.0, 6.0, 1.0)];
        let snapshot = bodies.clone();

        let next = sim.step(&bodies, 0.1, None);

        assert_eq!(bodies, snapshot);
        assert_ne!(next[0].position(), bodies[0].position());
    }

    #[test]
    fn test_gravity_applied_once() {
        let mut sim = SimulationManager::default();
        let next = sim.step(&[ball(10.0, 6.0, 0.0)], 0.1, Some(10.0));

        // v' = -10 * 0.1, p' = 6 + v' * 0.1
        assert!((next[0].velocity().y() + 1.0).abs() < 1e-12);
        assert!((next[0].position().y() - 5.9).abs() < 1e-12);
        assert_eq!(next[0].acceleration().y(), -10.0);
    }

    #[test]
    fn test_horizontal_acceleration_survives() {
        let mut sim = SimulationManager::default();
        let mut pushed = ball(10.0, 6.0, 0.0);
        pushed.set_acceleration(Vector2::new(2.0, 7.0));

        let next = sim.step(&[pushed], 0.1, Some(0.0));

        assert_eq!(next[0].acceleration(), Vector2::new(2.0, 0.0));
        assert!((next[0].velocity().x() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_gravity_persists_between_steps() {
        let mut sim = SimulationManager::default();
        assert_eq!(sim.gravity(), 9.8);

        let bodies = sim.step(&[ball(10.0, 6.0, 1.0)], 0.1, Some(0.0));
        let bodies = sim.step(&bodies, 0.1, None);

        assert_eq!(sim.gravity(), 0.0);
        assert_eq!(bodies[0].velocity(), Vector2::new(1.0, 0.0));
    }

    #[test]
    fn test_non_finite_gravity_ignored() {
        let mut sim = SimulationManager::default();
        sim.step(&[], 0.1, Some(f64::NAN));
        assert_eq!(sim.gravity(), 9.8);
    }

    #[test]
    fn test_static_bodies_unchanged() {
        let mut sim = SimulationManager::default();
        let ground = BodyBuilder::rectangle(20.0, 1.0)
            .position(Vector2::zero())
            .velocity(Vector2::new(0.5, 0.0))
            .mass(100.0)
            .static_body()
            .build()
            .unwrap();

        let mut bodies = vec![ground.clone()];
        for _ in 0..10 {
            bodies = sim.step(&bodies, 1.0 / 60.0, None);
        }

        assert_eq!(bodies[0], ground);
        assert_eq!(sim.last_stats().integrated, 0);
    }

    #[test]
    fn test_step_in_place_matches_step() {
        let start = vec![ball(4.0, 6.0, 3.0), ball(4.9, 6.0, -3.0)];

        let mut a = SimulationManager::default();
        let stepped = a.step(&start, 1.0 / 60.0, None);

        let mut b = SimulationManager::default();
        let mut in_place = start.clone();
        b.step_in_place(&mut in_place, 1.0 / 60.0, None);

        assert_eq!(stepped, in_place);
        assert_eq!(a.last_stats(), b.last_stats());
    }

    #[test]
    fn test_stats_track_tick() {
        let mut sim = SimulationManager::new(WorldConfig::default().with_gravity(0.0));
        let bodies = vec![
            ball(4.0, 6.0, 3.0),
            ball(4.9, 6.0, -3.0),
            ball(19.8, 3.0, 1.0),
        ];

        sim.step(&bodies, 1.0 / 60.0, None);
        let stats = sim.last_stats();

        assert_eq!(stats.contacts, 1);
        assert_eq!(stats.integrated, 3);
        assert_eq!(stats.boundary_clamps, 1);
        assert!(stats.kinetic_energy > 0.0);
    }

    #[test]
    fn test_skip_separating_follows_config() {
        // Overlapping but already moving apart
        let start = vec![ball(4.0, 6.0, -3.0), ball(4.9, 6.0, 3.0)];

        let mut always = SimulationManager::new(WorldConfig::default().with_gravity(0.0));
        let bodies = always.step(&start, 1.0 / 60.0, None);
        assert_eq!(always.last_stats().contacts, 1);
        assert!((bodies[0].velocity().x() - 2.7).abs() < 1e-12);
        assert!((bodies[1].velocity().x() + 2.7).abs() < 1e-12);

        let mut skipping = SimulationManager::new(
            WorldConfig::default()
                .with_gravity(0.0)
                .with_skip_separating(true),
        );
        let bodies = skipping.step(&start, 1.0 / 60.0, None);
        assert_eq!(skipping.last_stats().contacts, 1);
        assert_eq!(bodies[0].velocity(), Vector2::new(-3.0, 0.0));
        assert_eq!(bodies[1].velocity(), Vector2::new(3.0, 0.0));
    }

    #[test]
    fn test_try_new_rejects_bad_config() {
        let result = SimulationManager::try_new(WorldConfig::new(-1.0, 10.0));
        assert!(matches!(result, Err(ConfigError::InvalidWorldSize { .. })));
    }

    #[test]
    #[should_panic(expected = "Invalid world configuration")]
    fn test_new_panics_on_bad_config() {
        SimulationManager::new(WorldConfig::default().with_damping(2.0));
    }
}
