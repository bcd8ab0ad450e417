use crate::core::data::{canvas_size::CanvasSize, circle::Circle, style::Style};

#[derive(Debug, Clone, PartialEq)]
pub struct DrawnCircle {
    pub circle: Circle,
    pub style: Style,
}

/// Styled circles ready to hand to a presenter.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    canvas: CanvasSize,
    circles: Vec<DrawnCircle>,
}

impl Drawing {
    pub(crate) fn new(canvas: CanvasSize, circles: Vec<DrawnCircle>) -> Self {
        Self { canvas, circles }
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    #[must_use]
    pub fn circles(&self) -> &[DrawnCircle] {
        &self.circles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.circles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }
}
