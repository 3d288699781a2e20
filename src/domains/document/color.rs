//! Color name lookup for font colors and run highlights.
//!
//! The document tools accept a small enumerated set of color names. Each name
//! maps to a hex RGB code (for font colors) and to a WordprocessingML
//! highlight code (for run highlighting). Unrecognized names are rejected at
//! the tool boundary instead of propagating an undefined value into the
//! document.

use super::error::DocumentError;

/// A named color usable as a font color or a run highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocColor {
    Black,
    Blue,
    Green,
    DarkBlue,
    DarkRed,
    DarkYellow,
    DarkGreen,
    Pink,
    Red,
    White,
    Teal,
    Yellow,
    Violet,
    Gray25,
    Gray50,
}

impl DocColor {
    /// All accepted color names, as callers spell them.
    pub const NAMES: [&'static str; 15] = [
        "black",
        "blue",
        "green",
        "dark blue",
        "dark red",
        "dark yellow",
        "dark green",
        "pink",
        "red",
        "white",
        "teal",
        "yellow",
        "violet",
        "gray25",
        "gray50",
    ];

    /// Look up a color by name. Matching is case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "black" => Some(Self::Black),
            "blue" => Some(Self::Blue),
            "green" => Some(Self::Green),
            "dark blue" => Some(Self::DarkBlue),
            "dark red" => Some(Self::DarkRed),
            "dark yellow" => Some(Self::DarkYellow),
            "dark green" => Some(Self::DarkGreen),
            "pink" => Some(Self::Pink),
            "red" => Some(Self::Red),
            "white" => Some(Self::White),
            "teal" => Some(Self::Teal),
            "yellow" => Some(Self::Yellow),
            "violet" => Some(Self::Violet),
            "gray25" => Some(Self::Gray25),
            "gray50" => Some(Self::Gray50),
            _ => None,
        }
    }

    /// Hex RGB code used when the color is applied to a font.
    pub fn hex(self) -> &'static str {
        match self {
            Self::Black => "000000",
            Self::Blue => "0000FF",
            Self::Green => "00FF00",
            Self::DarkBlue => "00008B",
            Self::DarkRed => "8B0000",
            Self::DarkYellow => "808000",
            Self::DarkGreen => "006400",
            Self::Pink => "FFC0CB",
            Self::Red => "FF0000",
            Self::White => "FFFFFF",
            Self::Teal => "008080",
            Self::Yellow => "FFFF00",
            Self::Violet => "EE82EE",
            Self::Gray25 => "BFBFBF",
            Self::Gray50 => "808080",
        }
    }

    /// WordprocessingML highlight code used when the color highlights a run.
    pub fn highlight(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::DarkBlue => "darkBlue",
            Self::DarkRed => "darkRed",
            Self::DarkYellow => "darkYellow",
            Self::DarkGreen => "darkGreen",
            Self::Pink => "magenta",
            Self::Red => "red",
            Self::White => "white",
            Self::Teal => "darkCyan",
            Self::Yellow => "yellow",
            Self::Violet => "darkMagenta",
            Self::Gray25 => "lightGray",
            Self::Gray50 => "darkGray",
        }
    }
}

/// Resolve a caller-supplied color name, failing fast on unknown names.
pub fn parse_color(name: &str) -> Result<DocColor, DocumentError> {
    DocColor::from_name(name).ok_or_else(|| DocumentError::UnknownColor(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_names_resolve() {
        for name in DocColor::NAMES {
            assert!(
                DocColor::from_name(name).is_some(),
                "name '{}' should resolve",
                name
            );
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(DocColor::from_name("Dark Blue"), Some(DocColor::DarkBlue));
        assert_eq!(DocColor::from_name("RED"), Some(DocColor::Red));
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        assert_eq!(DocColor::from_name("chartreuse"), None);
        assert!(parse_color("chartreuse").is_err());
    }

    #[test]
    fn test_highlight_codes() {
        assert_eq!(DocColor::Green.highlight(), "green");
        assert_eq!(DocColor::Pink.highlight(), "magenta");
        assert_eq!(DocColor::Teal.highlight(), "darkCyan");
        assert_eq!(DocColor::Gray25.highlight(), "lightGray");
    }

    #[test]
    fn test_hex_codes() {
        assert_eq!(DocColor::Black.hex(), "000000");
        assert_eq!(DocColor::Yellow.hex(), "FFFF00");
    }
}
