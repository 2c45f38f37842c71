use std::fmt;

use shapekit_core::{Geometry, Measurable};

use super::Color;
use crate::error::FigureError;

/// A figure cut from a sheet of colored paper.
///
/// A paper figure always starts out painted, whether it was made directly
/// from a sheet or cut out of an existing figure. Painting it over is a
/// one-shot operation: the first coat consumes the paintable flag and any
/// later attempt fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PaperFigure {
    geometry: Geometry,
    color: Color,
    is_painted: bool,
}

impl PaperFigure {
    pub fn new(geometry: impl Into<Geometry>, color: Color) -> Self {
        Self {
            geometry: geometry.into(),
            color,
            is_painted: true,
        }
    }

    /// Builds a figure cut out of an existing paper figure.
    ///
    /// The new piece keeps the sheet's paint: its color is copied from the
    /// source, and it starts out painted even when the source itself has
    /// already been painted over.
    pub fn cut_out(geometry: impl Into<Geometry>, source: &PaperFigure) -> Self {
        Self::new(geometry, source.color)
    }

    // Deserializer-only: restores paint state recorded on the wire without
    // weakening the public starts-painted invariant.
    pub(crate) fn from_parts(geometry: Geometry, color: Color, is_painted: bool) -> Self {
        Self {
            geometry,
            color,
            is_painted,
        }
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_painted(&self) -> bool {
        self.is_painted
    }

    /// Applies a fresh coat of paint over the figure.
    ///
    /// Allowed exactly once: while the figure still carries its original
    /// paint this sets the new color and consumes the paintable flag.
    /// Afterwards every call fails with [`FigureError::AlreadyPaintedOver`]
    /// naming the current color, and the figure is left unchanged.
    pub fn paint_over(&mut self, color: Color) -> Result<(), FigureError> {
        if !self.is_painted {
            return Err(FigureError::AlreadyPaintedOver { color: self.color });
        }
        self.color = color;
        self.is_painted = false;
        Ok(())
    }
}

impl Measurable for PaperFigure {
    fn area(&self) -> f64 {
        self.geometry.area()
    }

    fn perimeter(&self) -> f64 {
        self.geometry.perimeter()
    }
}

impl fmt::Display for PaperFigure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Color: {};", self.geometry, self.color)
    }
}
