use std::ops::Index;

/// Ordered angles in radians, shared unchanged by every recursion level.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleSet {
    radians: Vec<f64>,
}

impl AngleSet {
    pub(crate) fn from_radians(radians: Vec<f64>) -> Self {
        Self { radians }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.radians.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.radians.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.radians
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.radians.iter().copied()
    }
}

impl Index<usize> for AngleSet {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.radians[index]
    }
}
