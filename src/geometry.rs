//! Plane geometry helpers

use derive_more::{Add, AddAssign, Sub, SubAssign};
use std::f64::consts::PI;

/// A point in the unbounded drawing plane
#[derive(Debug, Clone, Copy, PartialEq, Add, AddAssign, Sub, SubAssign)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Smallest of three values
pub fn min3(a: f64, b: f64, c: f64) -> f64 {
    a.min(b).min(c)
}

/// Largest of three values
pub fn max3(a: f64, b: f64, c: f64) -> f64 {
    a.max(b).max(c)
}

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_of_three() {
        assert_eq!(min3(1.0, 2.0, 3.0), 1.0);
        assert_eq!(min3(3.0, -2.0, 1.0), -2.0);
        assert_eq!(min3(f64::INFINITY, 0.5, 0.25), 0.25);
        assert_eq!(max3(1.0, 2.0, 3.0), 3.0);
        assert_eq!(max3(-3.0, -2.0, -1.0), -1.0);
        assert_eq!(max3(f64::NEG_INFINITY, 0.5, 0.25), 0.5);
    }

    #[test]
    fn degrees_to_radians() {
        assert_eq!(deg_to_rad(0.0), 0.0);
        assert_eq!(deg_to_rad(180.0), PI);
        assert_eq!(deg_to_rad(-180.0), -PI);
        assert!((deg_to_rad(90.0) - PI / 2.0).abs() < 1e-15);
        assert!((deg_to_rad(720.0) - 4.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn point_arithmetic() {
        let a = Point::new(3.0, -1.0);
        let b = Point::new(0.5, 2.0);
        assert_eq!(a + b, Point::new(3.5, 1.0));
        assert_eq!(a - b, Point::new(2.5, -3.0));

        let mut c = Point::ORIGIN;
        c += a;
        c -= b;
        assert_eq!(c, Point::new(2.5, -3.0));
    }
}
