//! 2D vector primitives shared by every layout computation.

use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Represents a 2D vector or point with X and Y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Creates a new vector with the given X and Y components.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Dot product with another vector.
    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product. Positive when `other` lies
    /// counterclockwise of `self`.
    pub fn cross(self, other: Vec2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Euclidean length of the vector.
    pub fn magnitude(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Calculates the distance to another point.
    pub fn distance_to(&self, other: &Vec2) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Returns the unit vector in the same direction, or the zero vector
    /// when the magnitude is zero so callers never divide by zero.
    pub fn normalize(self) -> Vec2 {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Vec2::ZERO;
        }
        Vec2::new(self.x / mag, self.y / mag)
    }

    /// A vector perpendicular to this one: the edge normal used by the
    /// separating-axis test, `(y, -x)`.
    pub fn perpendicular(self) -> Vec2 {
        Vec2::new(self.y, -self.x)
    }

    /// Rotates the vector about the origin. Angles are in radians,
    /// counterclockwise-positive.
    pub fn rotated(self, angle_rad: f64) -> Vec2 {
        let cos_a = angle_rad.cos();
        let sin_a = angle_rad.sin();
        Vec2::new(
            self.x * cos_a - self.y * sin_a,
            self.x * sin_a + self.y * cos_a,
        )
    }

    /// Rotates the point about `center`.
    pub fn rotated_about(self, center: Vec2, angle_rad: f64) -> Vec2 {
        if angle_rad.abs() < 1e-12 {
            return self;
        }
        center + (self - center).rotated(angle_rad)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, factor: f64) -> Vec2 {
        Vec2::new(self.x * factor, self.y * factor)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_vector_arithmetic() {
        let a = Vec2::new(3.0, 4.0);
        let b = Vec2::new(-1.0, 2.0);
        assert_eq!(a + b, Vec2::new(2.0, 6.0));
        assert_eq!(a - b, Vec2::new(4.0, 2.0));
        assert_eq!(a * 2.0, Vec2::new(6.0, 8.0));
        assert_eq!(-a, Vec2::new(-3.0, -4.0));
        assert_eq!(a.dot(b), 5.0);
        assert_eq!(a.cross(b), 10.0);
        assert_eq!(a.magnitude(), 5.0);
    }

    #[test]
    fn test_normalize_unit_length() {
        let v = Vec2::new(3.0, 4.0).normalize();
        assert!((v.magnitude() - 1.0).abs() < EPS);
        assert!((v.x - 0.6).abs() < EPS);
        assert!((v.y - 0.8).abs() < EPS);
    }

    #[test]
    fn test_normalize_zero_guard() {
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
    }

    #[test]
    fn test_rotation_quarter_turn() {
        let v = Vec2::new(1.0, 0.0).rotated(std::f64::consts::FRAC_PI_2);
        assert!(v.x.abs() < EPS);
        assert!((v.y - 1.0).abs() < EPS);
    }

    #[test]
    fn test_rotation_about_point() {
        let center = Vec2::new(10.0, 10.0);
        let p = Vec2::new(12.0, 10.0).rotated_about(center, std::f64::consts::PI);
        assert!((p.x - 8.0).abs() < EPS);
        assert!((p.y - 10.0).abs() < EPS);
    }

    #[test]
    fn test_perpendicular_is_orthogonal() {
        let v = Vec2::new(2.5, -7.0);
        assert_eq!(v.dot(v.perpendicular()), 0.0);
    }
}
