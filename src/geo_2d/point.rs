use std::ops::{
    Add, Sub,
    Mul, Neg,
};
use std::fmt;
use serde::{Serialize, Deserialize};

/// A point in the layout plane.
/// Also used as a planar offset, so it supports adding, subtracting and scaling.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}
impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Point{x, y}
    }

    /// Create a new zero point.
    pub fn zero() -> Self {
        Point{x: 0.0, y: 0.0}
    }

    /// Get the distance between two points.
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;

        (dx*dx + dy*dy).sqrt()
    }

    /// Euclidean norm, treating the point as an offset from the origin.
    pub fn norm(&self) -> f64 {
        (self.x*self.x + self.y*self.y).sqrt()
    }

    /// Unit offset in the same direction (zero stays zero).
    pub fn normalize(&self) -> Self {
        let mag = self.norm();
        if mag == 0.0 {
            return *self;
        }
        Point{x: self.x / mag, y: self.y / mag}
    }

    /// Check if two points coincide within `epsilon` on both axes.
    pub fn approx_eq(&self, other: &Point, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "({:.*}, {:.*})", precision, self.x, precision, self.y)
    }
}
impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point{x, y}
    }
}
impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Point) -> Self {
        Point{
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Point) -> Self {
        Point{
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Point{
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Point{x: -self.x, y: -self.y}
    }
}
