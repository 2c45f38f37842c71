//! # ShapeKit Core
//!
//! Geometry value types for ShapeKit. Provides the four shape families
//! (circle, rectangle, square, triangle) as immutable, validated values, the
//! [`Measurable`] trait producing area and perimeter from their defining
//! measurements, and the closed [`Geometry`] union the figure layer builds on.

pub mod error;
pub mod geometry;

pub use error::{GeometryError, Result};
pub use geometry::{Circle, Geometry, Measurable, Rectangle, Square, Triangle};
