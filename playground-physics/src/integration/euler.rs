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
//! Semi-implicit Euler integrator
//!
//! ```text
//! a  = a_body + (0, -g)
//! v' = v + a*dt
//! p' = p + v'*dt
//! ```
//!
//! With zero acceleration this reduces to exact translation, p' = p + v*dt.

use crate::body::Body;
use crate::math::Vector2;

/// Integrator applying body acceleration plus a downward gravity term
///
/// # Example
///
/// ```
/// use playground_physics::body::BodyBuilder;
/// use playground_physics::integration::PhysicsEngine;
/// use playground_physics::math::Vector2;
///
/// let mut ball = BodyBuilder::circle(0.5)
///     .position(Vector2::new(0.0, 10.0))
///     .build()
///     .unwrap();
///
/// PhysicsEngine::update(&mut ball, 0.1, 10.0);
/// assert!((ball.velocity().y() + 1.0).abs() < 1e-12);
/// assert!((ball.position().y() - 9.9).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PhysicsEngine;

impl PhysicsEngine {
    /// Advance one body by `dt` seconds
    ///
    /// `gravity` is a magnitude; it accelerates the body toward decreasing y
    /// on top of the body's own acceleration. Static bodies are skipped.
    /// A step whose velocity or position comes out non-finite, whether from
    /// non-finite input or from finite input overflowing, is logged and the
    /// offending components are reset to zero.
    ///
    /// Returns true if the body was integrated.
    pub fn update(body: &mut Body, dt: f64, gravity: f64) -> bool {
        if body.is_static() {
            return false;
        }

        let acceleration = body.acceleration();
        let (ax, ay) = (acceleration.x(), acceleration.y() - gravity);

        // Velocity first, then position from the new velocity
        let vx = body.velocity.x() + ax * dt;
        let vy = body.velocity.y() + ay * dt;
        body.velocity = Vector2::new(vx, vy);

        let px = body.position.x() + body.velocity.x() * dt;
        let py = body.position.y() + body.velocity.y() * dt;
        body.position = Vector2::new(px, py);

        if ![vx, vy, px, py].iter().all(|c| c.is_finite()) {
            log::warn!(
                "Integration produced non-finite state (dt = {}, gravity = {}, velocity = ({}, {}), position = ({}, {})); reset to zero",
                dt,
                gravity,
                vx,
                vy,
                px,
                py
            );
        }

        true
    }
}
