use std::fmt;

use serde::{Deserialize, Serialize};

use shapekit_core::{Geometry, Measurable};

mod film;
mod paper;

pub use film::FilmFigure;
pub use paper::PaperFigure;

/// Paint colors a paper figure can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::White => "White",
            Color::Black => "Black",
            Color::Red => "Red",
            Color::Orange => "Orange",
            Color::Yellow => "Yellow",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Purple => "Purple",
        };
        f.write_str(name)
    }
}

/// A geometric figure combined with one of the two material decorations.
///
/// The set is closed: every figure is either paper or film, and its
/// geometry is one of the four `shapekit-core` shape families. The only
/// mutable state anywhere in a figure is the paper paint flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Figure {
    Paper(PaperFigure),
    Film(FilmFigure),
}

impl Figure {
    pub fn geometry(&self) -> &Geometry {
        match self {
            Figure::Paper(figure) => figure.geometry(),
            Figure::Film(figure) => figure.geometry(),
        }
    }
}

impl Measurable for Figure {
    fn area(&self) -> f64 {
        self.geometry().area()
    }

    fn perimeter(&self) -> f64 {
        self.geometry().perimeter()
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Figure::Paper(figure) => write!(f, "{}", figure),
            Figure::Film(figure) => write!(f, "{}", figure),
        }
    }
}

impl From<PaperFigure> for Figure {
    fn from(figure: PaperFigure) -> Self {
        Figure::Paper(figure)
    }
}

impl From<FilmFigure> for Figure {
    fn from(figure: FilmFigure) -> Self {
        Figure::Film(figure)
    }
}
