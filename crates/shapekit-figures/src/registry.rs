//! Closed registry of the eight concrete figure kinds.
//!
//! Each (geometry family × material) combination maps to a stable name used
//! as the wire tag. The mapping is a total bijection over exactly these
//! eight kinds; any other tag resolves to `None` and callers decide whether
//! that means an error or a skip.

use std::fmt;

use shapekit_core::Geometry;

use crate::material::Figure;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FigureKind {
    PaperCircle,
    PaperRectangle,
    PaperSquare,
    PaperTriangle,
    FilmCircle,
    FilmRectangle,
    FilmSquare,
    FilmTriangle,
}

impl FigureKind {
    /// All eight kinds, in tag order.
    pub const ALL: [FigureKind; 8] = [
        FigureKind::PaperCircle,
        FigureKind::PaperRectangle,
        FigureKind::PaperSquare,
        FigureKind::PaperTriangle,
        FigureKind::FilmCircle,
        FigureKind::FilmRectangle,
        FigureKind::FilmSquare,
        FigureKind::FilmTriangle,
    ];

    /// The wire tag for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            FigureKind::PaperCircle => "PaperCircle",
            FigureKind::PaperRectangle => "PaperRectangle",
            FigureKind::PaperSquare => "PaperSquare",
            FigureKind::PaperTriangle => "PaperTriangle",
            FigureKind::FilmCircle => "FilmCircle",
            FigureKind::FilmRectangle => "FilmRectangle",
            FigureKind::FilmSquare => "FilmSquare",
            FigureKind::FilmTriangle => "FilmTriangle",
        }
    }

    /// Resolves a wire tag back to its kind. `None` for anything outside
    /// the closed set; never panics.
    pub fn from_tag(tag: &str) -> Option<FigureKind> {
        match tag {
            "PaperCircle" => Some(FigureKind::PaperCircle),
            "PaperRectangle" => Some(FigureKind::PaperRectangle),
            "PaperSquare" => Some(FigureKind::PaperSquare),
            "PaperTriangle" => Some(FigureKind::PaperTriangle),
            "FilmCircle" => Some(FigureKind::FilmCircle),
            "FilmRectangle" => Some(FigureKind::FilmRectangle),
            "FilmSquare" => Some(FigureKind::FilmSquare),
            "FilmTriangle" => Some(FigureKind::FilmTriangle),
            _ => None,
        }
    }
}

impl fmt::Display for FigureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Figure {
    /// The concrete kind of this figure.
    pub fn kind(&self) -> FigureKind {
        match self {
            Figure::Paper(figure) => match figure.geometry() {
                Geometry::Circle(_) => FigureKind::PaperCircle,
                Geometry::Rectangle(_) => FigureKind::PaperRectangle,
                Geometry::Square(_) => FigureKind::PaperSquare,
                Geometry::Triangle(_) => FigureKind::PaperTriangle,
            },
            Figure::Film(figure) => match figure.geometry() {
                Geometry::Circle(_) => FigureKind::FilmCircle,
                Geometry::Rectangle(_) => FigureKind::FilmRectangle,
                Geometry::Square(_) => FigureKind::FilmSquare,
                Geometry::Triangle(_) => FigureKind::FilmTriangle,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip_is_bijective() {
        for kind in FigureKind::ALL {
            assert_eq!(FigureKind::from_tag(kind.tag()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_tags_resolve_to_none() {
        assert_eq!(FigureKind::from_tag("GlassCircle"), None);
        assert_eq!(FigureKind::from_tag("papercircle"), None);
        assert_eq!(FigureKind::from_tag(""), None);
    }
}
