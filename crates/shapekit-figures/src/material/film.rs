use std::fmt;

use shapekit_core::{Geometry, Measurable};

/// A figure cut from transparent film.
///
/// Film carries no paint state; the decoration wraps geometry only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilmFigure {
    geometry: Geometry,
}

impl FilmFigure {
    pub fn new(geometry: impl Into<Geometry>) -> Self {
        Self {
            geometry: geometry.into(),
        }
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }
}

impl Measurable for FilmFigure {
    fn area(&self) -> f64 {
        self.geometry.area()
    }

    fn perimeter(&self) -> f64 {
        self.geometry.perimeter()
    }
}

impl fmt::Display for FilmFigure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (film)", self.geometry)
    }
}
