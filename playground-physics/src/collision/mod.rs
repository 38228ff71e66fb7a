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
//! Narrow-phase collision detection and impulse resolution
//!
//! There is no broad phase: [`CollisionDetector::resolve_all`] checks every
//! pair (i < j) in ascending index order once per sweep. A body displaced by
//! an earlier pair is used as-is by later pairs, so results depend on body
//! order when several bodies touch at once.
//!
//! # Supported pairs
//!
//! | pair               | test                                   |
//! |--------------------|----------------------------------------|
//! | circle–circle      | center distance against radius sum     |
//! | circle–rectangle   | closest point on the axis-aligned box  |
//! | anything else      | never collides                         |
//!
//! # Resolution
//!
//! Penetration is removed along the contact normal: split in halves when
//! both bodies are dynamic, taken entirely by the dynamic body otherwise.
//! Velocities then get an elastic impulse exchange (both dynamic) or a
//! reflection about the normal (one static), scaled by the damping
//! constant. The velocity response runs for every detected contact,
//! including pairs that are already moving apart; with
//! [`CollisionDetector::with_skip_separating`] such pairs only get the
//! positional correction.

mod narrow_phase;
mod response;

pub use narrow_phase::{circle_circle, circle_rectangle, closest_point_on_box, Contact};
pub use response::{exchange_velocities, reflect_velocity};

use crate::body::{Body, Shape};
use crate::config::DEFAULT_DAMPING;

/// Pairwise collision detector and resolver
///
/// # Example
///
/// ```
/// use playground_physics::body::BodyBuilder;
/// use playground_physics::collision::CollisionDetector;
/// use playground_physics::math::Vector2;
///
/// let mut a = BodyBuilder::circle(1.0)
///     .position(Vector2::new(0.0, 0.0))
///     .velocity(Vector2::new(1.0, 0.0))
///     .build()
///     .unwrap();
/// let mut b = BodyBuilder::circle(1.0)
///     .position(Vector2::new(1.5, 0.0))
///     .velocity(Vector2::new(-1.0, 0.0))
///     .build()
///     .unwrap();
///
/// let detector = CollisionDetector::default();
/// assert!(detector.detect_and_resolve(&mut a, &mut b));
/// assert!((a.position().distance(b.position()) - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionDetector {
    damping: f64,
    skip_separating: bool,
}

impl Default for CollisionDetector {
    fn default() -> Self {
        CollisionDetector::new(DEFAULT_DAMPING)
    }
}

impl CollisionDetector {
    /// Create a detector with the given damping constant
    ///
    /// # Panics
    ///
    /// Panics if `damping` is not in (0, 1].
    pub fn new(damping: f64) -> Self {
        assert!(
            damping > 0.0 && damping <= 1.0,
            "Damping must be in (0, 1]"
        );
        CollisionDetector {
            damping,
            skip_separating: false,
        }
    }

    /// Leave the velocities of separating pairs untouched
    ///
    /// Off by default. When enabled, a contact whose relative normal velocity
    /// is non-negative is only corrected positionally.
    pub fn with_skip_separating(mut self, skip: bool) -> Self {
        self.skip_separating = skip;
        self
    }

    /// Get the damping constant
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Check if separating pairs skip the velocity response
    pub fn skips_separating(&self) -> bool {
        self.skip_separating
    }

    /// Find the contact between two bodies without resolving it
    ///
    /// The normal points from `a` toward `b`. Returns `None` for unsupported
    /// shape pairs, non-collidable bodies, and pairs that don't touch.
    pub fn contact(a: &Body, b: &Body) -> Option<Contact> {
        if !(a.is_collidable() && b.is_collidable()) {
            return None;
        }

        match (&a.shape, &b.shape) {
            (Shape::Circle { radius: ra }, Shape::Circle { radius: rb }) => {
                circle_circle(a.position, *ra, b.position, *rb)
            }
            (Shape::Circle { radius }, Shape::Rectangle { width, height }) => {
                circle_rectangle(a.position, *radius, b.position, *width, *height)
            }
            (Shape::Rectangle { width, height }, Shape::Circle { radius }) => {
                circle_rectangle(b.position, *radius, a.position, *width, *height).map(|c| Contact {
                    normal: -c.normal,
                    penetration: c.penetration,
                })
            }
            (Shape::Rectangle { .. }, Shape::Rectangle { .. })
            | (Shape::Triangle { .. }, _)
            | (Shape::Polygon { .. }, _)
            | (_, Shape::Triangle { .. })
            | (_, Shape::Polygon { .. }) => None,
        }
    }

    /// Detect and resolve a collision between two bodies
    ///
    /// Returns true if the bodies were in contact and at least one of them
    /// could be moved. Two static bodies are never resolved.
    pub fn detect_and_resolve(&self, a: &mut Body, b: &mut Body) -> bool {
        if a.is_static() && b.is_static() {
            return false;
        }

        match Self::contact(a, b) {
            Some(contact) => {
                self.resolve(a, b, contact);
                true
            }
            None => false,
        }
    }

    /// Run one sweep over every pair (i < j) in ascending order
    ///
    /// Returns the number of resolved contacts.
    pub fn resolve_all(&self, bodies: &mut [Body]) -> usize {
        let mut contacts = 0;
        for i in 0..bodies.len() {
            let (head, tail) = bodies.split_at_mut(i + 1);
            let a = &mut head[i];
            for b in tail.iter_mut() {
                if self.detect_and_resolve(a, b) {
                    contacts += 1;
                }
            }
        }
        contacts
    }

    fn resolve(&self, a: &mut Body, b: &mut Body, contact: Contact) {
        let Contact { normal, penetration } = contact;
        let respond =
            !self.skip_separating || b.velocity.dot(normal) - a.velocity.dot(normal) < 0.0;

        match (a.is_static(), b.is_static()) {
            (false, false) => {
                let half = penetration / 2.0;
                a.position = a.position.add(normal, -half);
                b.position = b.position.add(normal, half);
                if respond {
                    exchange_velocities(a, b, normal, self.damping);
                }
            }
            (false, true) => {
                a.position = a.position.add(normal, -penetration);
                if respond {
                    reflect_velocity(a, normal, self.damping);
                }
            }
            (true, false) => {
                b.position = b.position.add(normal, penetration);
                if respond {
                    reflect_velocity(b, normal, self.damping);
                }
            }
            (true, true) => {}
        }
    }
}
