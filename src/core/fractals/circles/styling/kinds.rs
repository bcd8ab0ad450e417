#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(Default)]
pub enum StyleMapKinds {
    #[default]
    Uniform,
    RandomPalette,
}

impl StyleMapKinds {
    pub const ALL: &'static [Self] = &[Self::Uniform, Self::RandomPalette];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Uniform => "Uniform",
            Self::RandomPalette => "Random palette",
        }
    }
}

impl std::fmt::Display for StyleMapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
