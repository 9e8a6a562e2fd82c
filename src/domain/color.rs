//! The fixed note background palette.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the five background colors a note can carry.
///
/// The palette is closed: there is no way to construct a color outside it.
/// `Default` is the first entry.
///
/// # Examples
///
/// ```
/// use memo::domain::Color;
///
/// let color: Color = "light-blue".parse().unwrap();
/// assert_eq!(color.hex(), "#ddddff");
/// assert_eq!("#DDDDFF".parse::<Color>().unwrap(), color);
/// assert_eq!(Color::default(), Color::PALETTE[0]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Color {
    #[default]
    Default,
    LightRed,
    LightGreen,
    LightBlue,
    LightYellow,
}

/// Error returned when a string names no palette color.
#[derive(Debug, Clone, Error)]
#[error("unknown color '{0}': expected one of default, light-red, light-green, light-blue, light-yellow or their hex values")]
pub struct ParseColorError(String);

impl Color {
    /// The palette in display order.
    pub const PALETTE: [Color; 5] = [
        Color::Default,
        Color::LightRed,
        Color::LightGreen,
        Color::LightBlue,
        Color::LightYellow,
    ];

    /// Returns the stable kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            Color::Default => "default",
            Color::LightRed => "light-red",
            Color::LightGreen => "light-green",
            Color::LightBlue => "light-blue",
            Color::LightYellow => "light-yellow",
        }
    }

    /// Returns the lowercase `#rrggbb` background value.
    pub fn hex(self) -> &'static str {
        match self {
            Color::Default => "#fefefe",
            Color::LightRed => "#ffdddd",
            Color::LightGreen => "#ddffdd",
            Color::LightBlue => "#ddddff",
            Color::LightYellow => "#fff7cc",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Accepts a palette name or hex value, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::PALETTE
            .into_iter()
            .find(|c| c.name() == normalized || c.hex() == normalized)
            .ok_or_else(|| ParseColorError(s.trim().to_string()))
    }
}
