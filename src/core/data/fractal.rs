use crate::core::data::circle::Circle;

/// Every circle produced by one generation run, seed first.
#[derive(Debug, Clone, PartialEq)]
pub struct Fractal {
    circles: Vec<Circle>,
}

impl Fractal {
    pub(crate) fn from_circles(circles: Vec<Circle>) -> Self {
        Self { circles }
    }

    #[must_use]
    pub fn circles(&self) -> &[Circle] {
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

    #[must_use]
    pub fn seed(&self) -> Option<&Circle> {
        self.circles.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Circle> {
        self.circles.iter()
    }

    #[must_use]
    pub fn into_circles(self) -> Vec<Circle> {
        self.circles
    }
}

impl<'a> IntoIterator for &'a Fractal {
    type Item = &'a Circle;
    type IntoIter = std::slice::Iter<'a, Circle>;

    fn into_iter(self) -> Self::IntoIter {
        self.circles.iter()
    }
}
