use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};

mod circle;
mod rectangle;
mod square;
mod triangle;

pub use circle::Circle;
pub use rectangle::Rectangle;
pub use square::Square;
pub use triangle::Triangle;

/// Produces area and perimeter from a shape's defining measurements.
pub trait Measurable {
    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;
}

/// Closed union over the four shape families.
///
/// Every shape value is immutable once constructed, so equality and hashing
/// stay stable for the lifetime of the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Geometry {
    Circle(Circle),
    Rectangle(Rectangle),
    Square(Square),
    Triangle(Triangle),
}

impl Measurable for Geometry {
    fn area(&self) -> f64 {
        match self {
            Geometry::Circle(s) => s.area(),
            Geometry::Rectangle(s) => s.area(),
            Geometry::Square(s) => s.area(),
            Geometry::Triangle(s) => s.area(),
        }
    }

    fn perimeter(&self) -> f64 {
        match self {
            Geometry::Circle(s) => s.perimeter(),
            Geometry::Rectangle(s) => s.perimeter(),
            Geometry::Square(s) => s.perimeter(),
            Geometry::Triangle(s) => s.perimeter(),
        }
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Geometry::Circle(s) => write!(f, "{}", s),
            Geometry::Rectangle(s) => write!(f, "{}", s),
            Geometry::Square(s) => write!(f, "{}", s),
            Geometry::Triangle(s) => write!(f, "{}", s),
        }
    }
}

impl From<Circle> for Geometry {
    fn from(shape: Circle) -> Self {
        Geometry::Circle(shape)
    }
}

impl From<Rectangle> for Geometry {
    fn from(shape: Rectangle) -> Self {
        Geometry::Rectangle(shape)
    }
}

impl From<Square> for Geometry {
    fn from(shape: Square) -> Self {
        Geometry::Square(shape)
    }
}

impl From<Triangle> for Geometry {
    fn from(shape: Triangle) -> Self {
        Geometry::Triangle(shape)
    }
}

pub(crate) fn check_dimension(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::InvalidDimension { name, value })
    }
}
