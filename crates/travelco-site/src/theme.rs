//! Color themes.
//!
//! The site ships a light and a dark palette; the active one lives in
//! [`crate::state::SiteState`] next to the locale and is toggled from the
//! header. The stylesheet keys every color off the `data-theme` attribute
//! the root component writes.

/// Active color palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Daylight,
    Dusk,
}

impl Theme {
    /// Value of the `data-theme` attribute on the site root.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Daylight => "daylight",
            Theme::Dusk => "dusk",
        }
    }

    /// Glyph shown on the header toggle: the palette you would switch to.
    pub fn toggle_glyph(&self) -> &'static str {
        match self {
            Theme::Daylight => "☾",
            Theme::Dusk => "☀",
        }
    }

    /// Returns the other palette.
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Daylight => Theme::Dusk,
            Theme::Dusk => Theme::Daylight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_the_two_palettes() {
        assert_eq!(Theme::Daylight.toggled(), Theme::Dusk);
        assert_eq!(Theme::Dusk.toggled(), Theme::Daylight);
    }

    #[test]
    fn css_values_are_distinct() {
        assert_ne!(Theme::Daylight.css_value(), Theme::Dusk.css_value());
    }
}
