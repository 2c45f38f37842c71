//! Serialization and deserialization for figure collections.
//!
//! Implements save/load for the tagged figure format: a JSON document with
//! a root `Figures` array whose elements are single-entry objects keyed by
//! the kind tag from the registry. The tag is the sole type discriminator.
//! Circular geometries carry a `radius`; polygon geometries carry an
//! ordered `sides` list; paper elements additionally carry the paint flag
//! and color.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use shapekit_core::{Circle, Geometry, Rectangle, Square, Triangle};

use crate::material::{Color, Figure, FilmFigure, PaperFigure};
use crate::registry::FigureKind;

/// On-disk document: the root `Figures` element wrapping the ordered
/// figure list. Elements stay untyped until the dispatcher has resolved
/// their tag.
#[derive(Debug, Serialize, Deserialize)]
struct FigureDocument {
    #[serde(rename = "Figures")]
    figures: Vec<Value>,
}

/// Outcome of a read pass.
///
/// Elements with unrecognized tags are not silently lost: every skipped
/// tag is recorded here (and logged) while recognized figures land in
/// `figures` in document order.
#[derive(Debug, Default)]
pub struct ReadReport {
    pub figures: Vec<Figure>,
    pub skipped_tags: Vec<String>,
}

/// Element body shared by the circular paper kind.
#[derive(Debug, Serialize, Deserialize)]
struct PaperCircularElement {
    radius: f64,
    is_painted: bool,
    color: Color,
}

/// Element body shared by the polygon paper kinds. The `sides` list is
/// ordered: `[width, height]` for rectangles, `[side]` for squares, three
/// sides for triangles.
#[derive(Debug, Serialize, Deserialize)]
struct PaperPolygonElement {
    sides: Vec<f64>,
    is_painted: bool,
    color: Color,
}

#[derive(Debug, Serialize, Deserialize)]
struct FilmCircularElement {
    radius: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct FilmPolygonElement {
    sides: Vec<f64>,
}

/// Reads a figure collection from a file.
///
/// Single forward pass in document order. Elements whose tag resolves to a
/// known kind are parsed by that kind's routine; elements with an
/// unrecognized tag are skipped and reported through
/// [`ReadReport::skipped_tags`]. I/O failures, malformed JSON, and invalid
/// element fields abort the pass with a contextual error.
pub fn read_figures(path: impl AsRef<Path>) -> Result<ReadReport> {
    let content =
        std::fs::read_to_string(path.as_ref()).context("Failed to read figures file")?;

    let document: FigureDocument =
        serde_json::from_str(&content).context("Failed to parse figures file")?;

    let mut report = ReadReport::default();
    for element in &document.figures {
        let Some((tag, body)) = single_entry(element) else {
            bail!("figure element is not a single tagged object: {element}");
        };
        match FigureKind::from_tag(tag) {
            Some(kind) => {
                let figure = parse_element(kind, body)
                    .with_context(|| format!("Failed to parse {tag} element"))?;
                report.figures.push(figure);
            }
            None => {
                warn!(tag, "skipping figure element with unrecognized tag");
                report.skipped_tags.push(tag.to_string());
            }
        }
    }

    debug!(
        read = report.figures.len(),
        skipped = report.skipped_tags.len(),
        "finished reading figures"
    );
    Ok(report)
}

/// Writes a figure collection to a file.
///
/// Every kind in the closed set has a writer, so no figure can be dropped;
/// the first encoding or I/O failure aborts the pass and propagates.
pub fn write_figures(path: impl AsRef<Path>, figures: &[Figure]) -> Result<()> {
    let document = FigureDocument {
        figures: figures
            .iter()
            .map(write_element)
            .collect::<Result<Vec<_>>>()?,
    };

    let json =
        serde_json::to_string_pretty(&document).context("Failed to serialize figures")?;
    std::fs::write(path.as_ref(), json).context("Failed to write figures file")?;

    debug!(written = figures.len(), "finished writing figures");
    Ok(())
}

fn single_entry(element: &Value) -> Option<(&str, &Value)> {
    let object = element.as_object()?;
    if object.len() != 1 {
        return None;
    }
    object.iter().next().map(|(tag, body)| (tag.as_str(), body))
}

fn parse_element(kind: FigureKind, body: &Value) -> Result<Figure> {
    match kind {
        FigureKind::PaperCircle => parse_paper_circle(body),
        FigureKind::PaperRectangle => parse_paper_rectangle(body),
        FigureKind::PaperSquare => parse_paper_square(body),
        FigureKind::PaperTriangle => parse_paper_triangle(body),
        FigureKind::FilmCircle => parse_film_circle(body),
        FigureKind::FilmRectangle => parse_film_rectangle(body),
        FigureKind::FilmSquare => parse_film_square(body),
        FigureKind::FilmTriangle => parse_film_triangle(body),
    }
}

fn parse_paper_circle(body: &Value) -> Result<Figure> {
    let element: PaperCircularElement = serde_json::from_value(body.clone())?;
    let geometry = Geometry::Circle(Circle::new(element.radius)?);
    Ok(Figure::Paper(PaperFigure::from_parts(
        geometry,
        element.color,
        element.is_painted,
    )))
}

fn parse_paper_rectangle(body: &Value) -> Result<Figure> {
    let element: PaperPolygonElement = serde_json::from_value(body.clone())?;
    let geometry = rectangle_from_sides(&element.sides)?;
    Ok(Figure::Paper(PaperFigure::from_parts(
        geometry,
        element.color,
        element.is_painted,
    )))
}

fn parse_paper_square(body: &Value) -> Result<Figure> {
    let element: PaperPolygonElement = serde_json::from_value(body.clone())?;
    let geometry = square_from_sides(&element.sides)?;
    Ok(Figure::Paper(PaperFigure::from_parts(
        geometry,
        element.color,
        element.is_painted,
    )))
}

fn parse_paper_triangle(body: &Value) -> Result<Figure> {
    let element: PaperPolygonElement = serde_json::from_value(body.clone())?;
    let geometry = triangle_from_sides(&element.sides)?;
    Ok(Figure::Paper(PaperFigure::from_parts(
        geometry,
        element.color,
        element.is_painted,
    )))
}

fn parse_film_circle(body: &Value) -> Result<Figure> {
    let element: FilmCircularElement = serde_json::from_value(body.clone())?;
    let circle = Circle::new(element.radius)?;
    Ok(Figure::Film(FilmFigure::new(circle)))
}

fn parse_film_rectangle(body: &Value) -> Result<Figure> {
    let element: FilmPolygonElement = serde_json::from_value(body.clone())?;
    Ok(Figure::Film(FilmFigure::new(rectangle_from_sides(
        &element.sides,
    )?)))
}

fn parse_film_square(body: &Value) -> Result<Figure> {
    let element: FilmPolygonElement = serde_json::from_value(body.clone())?;
    Ok(Figure::Film(FilmFigure::new(square_from_sides(
        &element.sides,
    )?)))
}

fn parse_film_triangle(body: &Value) -> Result<Figure> {
    let element: FilmPolygonElement = serde_json::from_value(body.clone())?;
    Ok(Figure::Film(FilmFigure::new(triangle_from_sides(
        &element.sides,
    )?)))
}

fn rectangle_from_sides(sides: &[f64]) -> Result<Geometry> {
    match sides {
        [width, height] => Ok(Geometry::Rectangle(Rectangle::new(*width, *height)?)),
        _ => bail!("rectangle element must carry exactly 2 sides, got {}", sides.len()),
    }
}

fn square_from_sides(sides: &[f64]) -> Result<Geometry> {
    match sides {
        [side] => Ok(Geometry::Square(Square::new(*side)?)),
        _ => bail!("square element must carry exactly 1 side, got {}", sides.len()),
    }
}

fn triangle_from_sides(sides: &[f64]) -> Result<Geometry> {
    match sides {
        [a, b, c] => Ok(Geometry::Triangle(Triangle::new(*a, *b, *c)?)),
        _ => bail!("triangle element must carry exactly 3 sides, got {}", sides.len()),
    }
}

fn write_element(figure: &Figure) -> Result<Value> {
    let body = match figure {
        Figure::Paper(paper) => {
            let is_painted = paper.is_painted();
            let color = paper.color();
            match paper.geometry() {
                Geometry::Circle(circle) => serde_json::to_value(PaperCircularElement {
                    radius: circle.radius(),
                    is_painted,
                    color,
                }),
                Geometry::Rectangle(rect) => serde_json::to_value(PaperPolygonElement {
                    sides: vec![rect.width(), rect.height()],
                    is_painted,
                    color,
                }),
                Geometry::Square(square) => serde_json::to_value(PaperPolygonElement {
                    sides: vec![square.side()],
                    is_painted,
                    color,
                }),
                Geometry::Triangle(triangle) => serde_json::to_value(PaperPolygonElement {
                    sides: triangle.sides().to_vec(),
                    is_painted,
                    color,
                }),
            }
        }
        Figure::Film(film) => match film.geometry() {
            Geometry::Circle(circle) => serde_json::to_value(FilmCircularElement {
                radius: circle.radius(),
            }),
            Geometry::Rectangle(rect) => serde_json::to_value(FilmPolygonElement {
                sides: vec![rect.width(), rect.height()],
            }),
            Geometry::Square(square) => serde_json::to_value(FilmPolygonElement {
                sides: vec![square.side()],
            }),
            Geometry::Triangle(triangle) => serde_json::to_value(FilmPolygonElement {
                sides: triangle.sides().to_vec(),
            }),
        },
    }
    .context("Failed to encode figure element")?;

    let mut element = serde_json::Map::new();
    element.insert(figure.kind().tag().to_string(), body);
    Ok(Value::Object(element))
}
