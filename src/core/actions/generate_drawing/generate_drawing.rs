use crate::core::actions::generate_drawing::ports::style_map::StyleMap;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::drawing::{Drawing, DrawnCircle};
use crate::core::data::fractal::Fractal;

/// Pairs every circle of `fractal` with its own style, in generation order.
pub fn generate_drawing<S: StyleMap + ?Sized>(
    fractal: &Fractal,
    canvas: CanvasSize,
    style_map: &mut S,
) -> Drawing {
    let circles = fractal
        .iter()
        .map(|circle| DrawnCircle {
            circle: *circle,
            style: style_map.style_for(circle),
        })
        .collect();

    Drawing::new(canvas, circles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::circle::Circle;
    use crate::core::data::point::Point;
    use crate::core::data::style::Style;

    /// Colours circles by how many it has seen so far.
    #[derive(Debug, Default)]
    struct StubCountingStyleMap {
        seen: usize,
    }

    impl StyleMap for StubCountingStyleMap {
        fn style_for(&mut self, _: &Circle) -> Style {
            self.seen += 1;
            Style::default().with_stroke(format!("#{:06}", self.seen))
        }

        fn display_name(&self) -> &str {
            "Stub Counting"
        }
    }

    fn fractal_of(count: usize) -> Fractal {
        let circles = (0..count)
            .map(|i| Circle::new(Point::new(i as f64, -(i as f64)), 10.0 + i as f64))
            .collect();

        Fractal::from_circles(circles)
    }

    #[test]
    fn test_drawing_keeps_order_and_geometry() {
        let fractal = fractal_of(5);
        let canvas = CanvasSize::new(100.0, 100.0).unwrap();
        let drawing = generate_drawing(&fractal, canvas, &mut StubCountingStyleMap::default());

        assert_eq!(drawing.len(), fractal.len());
        assert_eq!(drawing.canvas(), canvas);
        for (drawn, circle) in drawing.circles().iter().zip(fractal.iter()) {
            assert_eq!(&drawn.circle, circle);
        }
    }

    #[test]
    fn test_each_circle_gets_its_own_style() {
        let fractal = fractal_of(3);
        let canvas = CanvasSize::new(100.0, 100.0).unwrap();
        let drawing = generate_drawing(&fractal, canvas, &mut StubCountingStyleMap::default());

        let strokes: Vec<&str> = drawing
            .circles()
            .iter()
            .map(|drawn| drawn.style.stroke.as_str())
            .collect();

        assert_eq!(strokes, vec!["#000001", "#000002", "#000003"]);
    }

    #[test]
    fn test_accepts_boxed_style_map() {
        let fractal = fractal_of(2);
        let canvas = CanvasSize::new(10.0, 10.0).unwrap();
        let mut style_map: Box<dyn StyleMap> = Box::new(StubCountingStyleMap::default());
        let drawing = generate_drawing(&fractal, canvas, style_map.as_mut());

        assert_eq!(drawing.len(), 2);
    }
}
