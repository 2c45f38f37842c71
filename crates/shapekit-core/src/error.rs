//! Error handling for ShapeKit geometry.
//!
//! Geometry construction is the only fallible operation in this crate;
//! everything downstream (figures, serialization) builds on values that are
//! already known to be valid. All error types use `thiserror`.

use thiserror::Error;

/// Geometry construction error type
///
/// Raised by the validating constructors in [`crate::geometry`]. Once a
/// shape value exists its measurements are guaranteed positive and finite.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A dimension was zero, negative, or not finite
    #[error("invalid {name}: {value} (must be positive and finite)")]
    InvalidDimension {
        /// Name of the offending dimension (e.g. "radius", "width").
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Triangle sides that cannot form a triangle
    #[error("sides {a}, {b}, {c} do not satisfy the triangle inequality")]
    TriangleInequality {
        /// First side.
        a: f64,
        /// Second side.
        b: f64,
        /// Third side.
        c: f64,
    },
}

/// Result type using [`GeometryError`]
pub type Result<T> = std::result::Result<T, GeometryError>;
