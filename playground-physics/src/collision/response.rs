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
//! Velocity response to a contact

use crate::body::Body;
use crate::math::Vector2;

/// Elastic 1-D impulse exchange along `normal` (pointing from `a` to `b`)
///
/// ```text
/// J   = 2 * (v_a·n - v_b·n) / (m_a + m_b)
/// v_a' = (v_a - J * m_b * n) * damping
/// v_b' = (v_b + J * m_a * n) * damping
/// ```
///
/// Both bodies must be dynamic.
pub fn exchange_velocities(a: &mut Body, b: &mut Body, normal: Vector2, damping: f64) {
    let v1 = a.velocity.dot(normal);
    let v2 = b.velocity.dot(normal);
    let impulse = 2.0 * (v1 - v2) / (a.mass + b.mass);

    a.velocity = a.velocity.add(normal, -impulse * b.mass).scale(damping);
    b.velocity = b.velocity.add(normal, impulse * a.mass).scale(damping);
}

/// Reflect a body's velocity about `normal`
///
/// v' = (v - 2(v·n)n) * damping
pub fn reflect_velocity(body: &mut Body, normal: Vector2, damping: f64) {
    let along = body.velocity.dot(normal);
    body.velocity = body.velocity.add(normal, -2.0 * along).scale(damping);
}
