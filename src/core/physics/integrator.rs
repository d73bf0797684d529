//=========================================================================
// Physics Integrator
//=========================================================================
//
// Stateless semi-implicit Euler step over a RigidBody.
//
// Order within one step is fixed:
//   1. velocity += acceleration * delta
//   2. velocity.y += GRAVITY * delta     (gravitational bodies only)
//   3. position += velocity * delta
//
//=========================================================================

use super::{RigidBody, Vec2};

/// Gravitational acceleration along y, in units per second squared.
pub const GRAVITY: f32 = -9.8;

/// Advances `body` by `delta` seconds.
pub fn integrate(body: &mut RigidBody, delta: f32) {
    body.velocity.accelerate(body.acceleration * delta);

    if body.is_gravitational {
        body.velocity.accelerate(Vec2::new(0.0, GRAVITY * delta));
    }

    body.position += body.velocity.components() * delta;
}

/// Accumulates `force / mass` into the body's acceleration.
///
/// Mass is not checked here; a zero mass yields non-finite acceleration.
pub fn apply_force(body: &mut RigidBody, force: Vec2) {
    body.acceleration += force / body.mass();
}

//=========================================================================
// Unit Tests
//=========================================================================
