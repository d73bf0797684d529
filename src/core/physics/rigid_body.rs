//=========================================================================
// Rigid Body
//=========================================================================
//
// Kinematic state owned by a single entity: center position, velocity,
// accumulated acceleration, mass and a gravity flag.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use super::{integrate, Vec2, Velocity};

//=== RigidBody ===========================================================

/// A body whose motion is governed by the integrator.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    /// Center of the body.
    pub position: Vec2,

    /// Linear velocity in units per second.
    pub velocity: Velocity,

    /// Accumulated acceleration in units per second squared.
    ///
    /// [`super::apply_force`] adds to it; nothing clears it implicitly.
    pub acceleration: Vec2,

    /// Whether [`super::GRAVITY`] applies.
    pub is_gravitational: bool,

    mass: f32,
}

impl RigidBody {
    /// Creates a body at rest at `position`.
    ///
    /// `mass` must be positive.
    pub fn new(position: Vec2, mass: f32) -> Self {
        debug_assert!(mass > 0.0, "mass must be positive, got {}", mass);
        Self {
            position,
            velocity: Velocity::ZERO,
            acceleration: Vec2::ZERO,
            is_gravitational: false,
            mass,
        }
    }

    /// Enables gravity on this body.
    pub fn with_gravity(mut self) -> Self {
        self.is_gravitational = true;
        self
    }

    /// Sets the initial velocity.
    pub fn with_velocity(mut self, velocity: Velocity) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Steps the body by the wall time of one tick.
    pub fn update(&mut self, elapsed: Duration) {
        integrate(self, elapsed.as_secs_f32());
    }

    /// Brings the body to rest. Acceleration is left untouched.
    pub fn stop(&mut self) {
        self.velocity = Velocity::ZERO;
    }
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new(Vec2::ZERO, 1.0)
    }
}
