//! Color-scheme preference shared with the presentation layer.

/// The two presentation color schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

/// Holds the active color scheme.
#[derive(Debug, Default)]
pub struct AppearanceStore {
    scheme: ColorScheme,
}

impl AppearanceStore {
    pub fn new(scheme: ColorScheme) -> Self {
        Self { scheme }
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn is_dark_mode(&self) -> bool {
        self.scheme == ColorScheme::Dark
    }

    /// Switches between light and dark.
    pub fn toggle(&mut self) {
        self.scheme = match self.scheme {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        };
    }
}
