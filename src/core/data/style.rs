/// Paint applied to a single drawn circle.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
}

impl Style {
    #[must_use]
    pub fn new(fill: impl Into<String>, stroke: impl Into<String>, stroke_width: f64) -> Self {
        Self {
            fill: fill.into(),
            stroke: stroke.into(),
            stroke_width,
        }
    }

    #[must_use]
    pub fn with_stroke(&self, stroke: impl Into<String>) -> Self {
        Self {
            stroke: stroke.into(),
            ..self.clone()
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new("none", "blue", 1.0)
    }
}
