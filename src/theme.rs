//! Color themes for the terminal storefront.

use std::str::FromStr;

use ratatui::style::Color;

/// Available color themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Ocean,
    Sunset,
    Purple,
    Emerald,
    Modern,
    Rose,
}

/// Colors a theme resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Highlight background for the active tab, selected item, totals bar.
    pub primary: Color,
    /// Foreground used on top of `primary`.
    pub on_primary: Color,
    /// Panel borders when unfocused.
    pub border: Color,
    /// Accent text such as titles and prices.
    pub text: Color,
}

impl Theme {
    /// All themes in selector order.
    pub const ALL: [Theme; 6] = [
        Theme::Ocean,
        Theme::Sunset,
        Theme::Purple,
        Theme::Emerald,
        Theme::Modern,
        Theme::Rose,
    ];

    /// Returns the configuration id, e.g. `"ocean"`.
    pub fn id(&self) -> &'static str {
        match self {
            Theme::Ocean => "ocean",
            Theme::Sunset => "sunset",
            Theme::Purple => "purple",
            Theme::Emerald => "emerald",
            Theme::Modern => "modern",
            Theme::Rose => "rose",
        }
    }

    /// Returns the display name.
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Ocean => "Ocean Blue",
            Theme::Sunset => "Sunset Orange",
            Theme::Purple => "Royal Purple",
            Theme::Emerald => "Emerald Forest",
            Theme::Modern => "Modern Lime",
            Theme::Rose => "Rose Gold",
        }
    }

    /// Returns the next theme, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Resolves the theme to concrete colors.
    pub fn palette(&self) -> Palette {
        let (primary, border, text) = match self {
            Theme::Ocean => (
                Color::Rgb(37, 99, 235),
                Color::Rgb(191, 219, 254),
                Color::Rgb(6, 182, 212),
            ),
            Theme::Sunset => (
                Color::Rgb(234, 88, 12),
                Color::Rgb(254, 215, 170),
                Color::Rgb(236, 72, 153),
            ),
            Theme::Purple => (
                Color::Rgb(147, 51, 234),
                Color::Rgb(233, 213, 255),
                Color::Rgb(99, 102, 241),
            ),
            Theme::Emerald => (
                Color::Rgb(5, 150, 105),
                Color::Rgb(167, 243, 208),
                Color::Rgb(13, 148, 136),
            ),
            Theme::Modern => (
                Color::Rgb(101, 163, 13),
                Color::Rgb(217, 249, 157),
                Color::Rgb(234, 179, 8),
            ),
            Theme::Rose => (
                Color::Rgb(244, 63, 94),
                Color::Rgb(254, 205, 211),
                Color::Rgb(236, 72, 153),
            ),
        };
        Palette {
            primary,
            on_primary: Color::White,
            border,
            text,
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| format!("unknown theme {s:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(theme.id().parse::<Theme>(), Ok(theme));
        }
        assert!("neon".parse::<Theme>().is_err());
    }

    #[test]
    fn default_is_ocean() {
        assert_eq!(Theme::default(), Theme::Ocean);
        assert_eq!(Theme::Rose.next(), Theme::Ocean);
    }

    #[test]
    fn palettes_differ() {
        assert_ne!(Theme::Ocean.palette(), Theme::Sunset.palette());
    }
}
