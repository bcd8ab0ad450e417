use std::path::Path;

use svg::node::element::Circle as SvgCircle;
use svg::Document;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::drawing::{Drawing, DrawnCircle};

pub struct SvgFilePresenter {}

impl FilePresenterPort for SvgFilePresenter {
    fn present(&self, drawing: &Drawing, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();

        if let Some(parent) = filepath.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        svg::save(filepath, &self.document(drawing))
    }
}

impl Default for SvgFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgFilePresenter {
    pub fn new() -> Self {
        Self {}
    }

    #[must_use]
    pub fn document(&self, drawing: &Drawing) -> Document {
        let canvas = drawing.canvas();

        drawing.circles().iter().map(circle_element).fold(
            Document::new()
                .set("width", canvas.width())
                .set("height", canvas.height())
                .set("viewBox", (0, 0, canvas.width(), canvas.height())),
            |document, element| document.add(element),
        )
    }
}

fn circle_element(drawn: &DrawnCircle) -> SvgCircle {
    let DrawnCircle { circle, style } = drawn;

    SvgCircle::new()
        .set("cx", circle.center.x)
        .set("cy", circle.center.y)
        .set("r", circle.radius)
        .set("fill", style.fill.as_str())
        .set("stroke", style.stroke.as_str())
        .set("stroke-width", style.stroke_width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::canvas_size::CanvasSize;
    use crate::core::data::circle::Circle;
    use crate::core::data::point::Point;
    use crate::core::data::style::Style;

    fn drawing(circles: &[(f64, f64, f64)]) -> Drawing {
        let drawn = circles
            .iter()
            .map(|&(x, y, r)| DrawnCircle {
                circle: Circle::new(Point::new(x, y), r),
                style: Style::default(),
            })
            .collect();

        Drawing::new(CanvasSize::new(800.0, 600.0).unwrap(), drawn)
    }

    #[test]
    fn test_document_has_one_circle_element_per_drawn_circle() {
        let drawing = drawing(&[(400.0, 300.0, 200.0), (600.0, 300.0, 100.0), (200.0, 300.0, 100.0)]);
        let markup = SvgFilePresenter::new().document(&drawing).to_string();

        assert_eq!(markup.matches("<circle").count(), 3);
    }

    #[test]
    fn test_document_carries_geometry_and_style() {
        let drawing = drawing(&[(400.0, 300.0, 12.5)]);
        let markup = SvgFilePresenter::new().document(&drawing).to_string();

        assert!(markup.contains(r#"cx="400""#));
        assert!(markup.contains(r#"cy="300""#));
        assert!(markup.contains(r#"r="12.5""#));
        assert!(markup.contains(r#"fill="none""#));
        assert!(markup.contains(r#"stroke="blue""#));
        assert!(markup.contains(r#"stroke-width="1""#));
    }

    #[test]
    fn test_document_uses_canvas_size() {
        let markup = SvgFilePresenter::new().document(&drawing(&[])).to_string();

        assert!(markup.contains(r#"width="800""#));
        assert!(markup.contains(r#"height="600""#));
        assert!(markup.contains(r#"viewBox="0 0 800 600""#));
        assert_eq!(markup.matches("<circle").count(), 0);
    }

    #[test]
    fn test_present_writes_file_and_creates_directory() {
        let dir = std::env::temp_dir().join(format!("circle_fractal_svg_{}", std::process::id()));
        let path = dir.join("nested").join("out.svg");

        SvgFilePresenter::new()
            .present(&drawing(&[(1.0, 2.0, 3.0), (4.0, 5.0, 6.0)]), &path)
            .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.matches("<circle").count(), 2);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_present_truncates_existing_file() {
        let dir = std::env::temp_dir().join(format!("circle_fractal_trunc_{}", std::process::id()));
        let path = dir.join("out.svg");
        let presenter = SvgFilePresenter::new();

        presenter.present(&drawing(&[(1.0, 1.0, 1.0); 5]), &path).unwrap();
        presenter.present(&drawing(&[(1.0, 1.0, 1.0)]), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.matches("<circle").count(), 1);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
