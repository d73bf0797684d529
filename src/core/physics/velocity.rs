//=========================================================================
// Velocity
//=========================================================================
//
// Velocity with a polar view (speed + direction) over Cartesian storage.
//
// Components are the source of truth. Speed and angle are derived on
// read, so repeated integration never accumulates polar round-trip error.
//
//=========================================================================

use super::Vec2;

/// Linear velocity in units per second.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Velocity {
    components: Vec2,
}

impl Velocity {
    /// A velocity of zero.
    pub const ZERO: Velocity = Velocity {
        components: Vec2::ZERO,
    };

    /// Builds a velocity from Cartesian components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            components: Vec2::new(x, y),
        }
    }

    /// Builds a velocity from a speed and a direction in degrees.
    pub fn from_polar(speed: f32, degrees: f32) -> Self {
        Self {
            components: Vec2::from_polar(speed, degrees),
        }
    }

    //--- Polar View -------------------------------------------------------

    pub fn speed(&self) -> f32 {
        self.components.magnitude()
    }

    /// Direction of motion in degrees.
    pub fn angle(&self) -> f32 {
        self.components.direction()
    }

    /// Changes the speed, keeping the direction.
    pub fn set_speed(&mut self, speed: f32) {
        self.components = Vec2::from_polar(speed, self.angle());
    }

    /// Changes the direction, keeping the speed.
    pub fn set_angle(&mut self, degrees: f32) {
        self.components = Vec2::from_polar(self.speed(), degrees);
    }

    //--- Cartesian View ---------------------------------------------------

    pub fn components(&self) -> Vec2 {
        self.components
    }

    pub fn x(&self) -> f32 {
        self.components.x
    }

    pub fn y(&self) -> f32 {
        self.components.y
    }

    pub fn set_components(&mut self, components: Vec2) {
        self.components = components;
    }

    /// Adds `delta` componentwise.
    pub fn accelerate(&mut self, delta: Vec2) {
        self.components += delta;
    }
}
