#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MandelbrotColourMapKind {
    #[default]
    RainbowHsv,
    FireGradient,
    BlueWhiteGradient,
}

impl MandelbrotColourMapKind {
    pub const ALL: &'static [Self] = &[Self::RainbowHsv, Self::FireGradient, Self::BlueWhiteGradient];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::RainbowHsv => "Rainbow HSV",
            Self::FireGradient => "Fire gradient",
            Self::BlueWhiteGradient => "Blue-white gradient",
        }
    }
}

impl std::fmt::Display for MandelbrotColourMapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
