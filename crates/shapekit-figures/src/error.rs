//! Error handling for the figure state machine.

use thiserror::Error;

use crate::material::Color;

/// Figure error type
///
/// Represents violations of the material state machine. File and format
/// errors are reported separately by the serialization layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FigureError {
    /// Paint-over was requested after the figure's single coat was spent
    #[error("figure has already been painted over (current color: {color})")]
    AlreadyPaintedOver {
        /// The color the figure currently carries.
        color: Color,
    },
}
