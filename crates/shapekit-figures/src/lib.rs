//! # ShapeKit Figures
//!
//! Material-decorated figures and their tagged wire format.
//!
//! ## Core Components
//!
//! - **Material model**: [`PaperFigure`] (paintable exactly once after
//!   construction, cut-out construction inheriting the source sheet's color)
//!   and [`FilmFigure`], both wrapping a `shapekit-core` geometry value.
//! - **Kind registry**: [`FigureKind`], the closed set of the eight
//!   (geometry family × material) combinations and their stable wire tags.
//! - **Serialization**: [`read_figures`] / [`write_figures`], dispatching
//!   each tagged element to its per-kind parse/write routine. Unrecognized
//!   tags are skipped but reported via [`ReadReport`].

pub mod error;
pub mod material;
pub mod registry;
pub mod serialization;

pub use error::FigureError;
pub use material::{Color, Figure, FilmFigure, PaperFigure};
pub use registry::FigureKind;
pub use serialization::{read_figures, write_figures, ReadReport};
