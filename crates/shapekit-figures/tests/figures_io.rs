use shapekit_core::{Circle, Rectangle, Square, Triangle};
use shapekit_figures::{
    read_figures, write_figures, Color, Figure, FigureError, FigureKind, FilmFigure, PaperFigure,
};

fn one_of_each_kind() -> Vec<Figure> {
    let circle = Circle::new(2.0).expect("valid circle");
    let rect = Rectangle::new(3.0, 4.0).expect("valid rectangle");
    let square = Square::new(3.0).expect("valid square");
    let triangle = Triangle::new(3.0, 4.0, 5.0).expect("valid triangle");

    vec![
        Figure::Paper(PaperFigure::new(circle, Color::Red)),
        Figure::Paper(PaperFigure::new(rect, Color::Green)),
        Figure::Paper(PaperFigure::new(square, Color::Blue)),
        Figure::Paper(PaperFigure::new(triangle, Color::Yellow)),
        Figure::Film(FilmFigure::new(circle)),
        Figure::Film(FilmFigure::new(rect)),
        Figure::Film(FilmFigure::new(square)),
        Figure::Film(FilmFigure::new(triangle)),
    ]
}

#[test]
fn test_round_trip_preserves_figures_and_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("figures.json");

    let figures = one_of_each_kind();
    write_figures(&path, &figures).expect("write failed");

    let report = read_figures(&path).expect("read failed");
    assert_eq!(report.figures, figures);
    assert!(report.skipped_tags.is_empty());
}

#[test]
fn test_round_trip_preserves_consumed_paint_state() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("figures.json");

    let mut figure = PaperFigure::new(Square::new(3.0).expect("valid square"), Color::Red);
    figure.paint_over(Color::Black).expect("first coat succeeds");
    write_figures(&path, &[Figure::Paper(figure.clone())]).expect("write failed");

    let report = read_figures(&path).expect("read failed");
    assert_eq!(report.figures, vec![Figure::Paper(figure)]);
}

#[test]
fn test_written_elements_carry_registry_tags() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("figures.json");

    let figures = one_of_each_kind();
    write_figures(&path, &figures).expect("write failed");

    let content = std::fs::read_to_string(&path).expect("read failed");
    let document: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let elements = document["Figures"].as_array().expect("root Figures array");

    assert_eq!(elements.len(), figures.len());
    for (element, kind) in elements.iter().zip(FigureKind::ALL) {
        let object = element.as_object().expect("tagged object");
        assert_eq!(object.len(), 1);
        assert!(object.contains_key(kind.tag()));
    }
}

#[test]
fn test_unrecognized_tag_is_skipped_but_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("figures.json");

    let content = r#"{
        "Figures": [
            { "PaperCircle": { "radius": 2.0, "is_painted": true, "color": "Red" } },
            { "GlassOval": { "radius": 1.0 } }
        ]
    }"#;
    std::fs::write(&path, content).expect("write failed");

    let report = read_figures(&path).expect("read failed");
    assert_eq!(report.figures.len(), 1);
    assert_eq!(report.figures[0].kind(), FigureKind::PaperCircle);
    assert_eq!(report.skipped_tags, vec!["GlassOval".to_string()]);
}

#[test]
fn test_read_nonexistent_file_fails() {
    assert!(read_figures("/nonexistent/path/figures.json").is_err());
}

#[test]
fn test_read_invalid_json_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("figures.json");

    std::fs::write(&path, "{ invalid json }").expect("write failed");
    assert!(read_figures(&path).is_err());
}

#[test]
fn test_invalid_geometry_in_element_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("figures.json");

    let content = r#"{
        "Figures": [
            { "PaperCircle": { "radius": -1.0, "is_painted": true, "color": "Red" } }
        ]
    }"#;
    std::fs::write(&path, content).expect("write failed");
    assert!(read_figures(&path).is_err());
}

#[test]
fn test_wrong_side_count_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("figures.json");

    let content = r#"{
        "Figures": [
            { "FilmSquare": { "sides": [3.0, 4.0] } }
        ]
    }"#;
    std::fs::write(&path, content).expect("write failed");
    assert!(read_figures(&path).is_err());
}

// The end-to-end scenario: write a painted circle and a film square, read
// them back, then exercise the one-shot paint-over on the read-back circle.
#[test]
fn test_write_read_paint_over_scenario() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("figures.json");

    let circle = Circle::new(2.0).expect("valid circle");
    let square = Square::new(3.0).expect("valid square");
    let figures = vec![
        Figure::Paper(PaperFigure::new(circle, Color::Red)),
        Figure::Film(FilmFigure::new(square)),
    ];
    write_figures(&path, &figures).expect("write failed");

    let report = read_figures(&path).expect("read failed");
    assert_eq!(report.figures, figures);

    let Figure::Paper(mut paper) = report.figures.into_iter().next().expect("two figures")
    else {
        panic!("first figure should be paper");
    };
    assert!(paper.is_painted());
    assert_eq!(paper.color(), Color::Red);

    paper.paint_over(Color::Blue).expect("first coat succeeds");
    assert!(!paper.is_painted());
    assert_eq!(paper.color(), Color::Blue);

    let err = paper.paint_over(Color::Green).unwrap_err();
    assert_eq!(err, FigureError::AlreadyPaintedOver { color: Color::Blue });
}
