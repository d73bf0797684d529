//=========================================================================
// Vec2
//=========================================================================
//
// Plain 2D Cartesian vector used for positions, velocities, accelerations
// and forces.
//
//=========================================================================

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// 2D vector in world units.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Builds a vector from a magnitude and a direction in degrees,
    /// measured counter-clockwise from +x.
    #[inline]
    pub fn from_polar(magnitude: f32, degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self::new(magnitude * cos, magnitude * sin)
    }

    #[inline]
    pub fn magnitude(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Direction in degrees, in `(-180, 180]`.
    #[inline]
    pub fn direction(self) -> f32 {
        self.y.atan2(self.x).to_degrees()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polar_round_trip_on_axes() {
        let up = Vec2::from_polar(2.0, 90.0);
        assert!(up.x.abs() < 1e-5);
        assert!((up.y - 2.0).abs() < 1e-5);
        assert!((up.direction() - 90.0).abs() < 1e-4);
        assert!((up.magnitude() - 2.0).abs() < 1e-5);
    }

    #[test]
    fn arithmetic() {
        let mut v = Vec2::new(1.0, 2.0) + Vec2::new(3.0, 4.0);
        assert_eq!(v, Vec2::new(4.0, 6.0));

        v -= Vec2::new(1.0, 1.0);
        assert_eq!(v, Vec2::new(3.0, 5.0));
        assert_eq!(v * 2.0, Vec2::new(6.0, 10.0));
        assert_eq!(v / 2.0, Vec2::new(1.5, 2.5));
        assert_eq!(-v, Vec2::new(-3.0, -5.0));
    }
}
