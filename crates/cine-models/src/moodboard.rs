//! Moodboard artifact models.
//!
//! Like storyboards, moodboards are write-once artifacts: item order is
//! significant and fixed at generation time.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Role a color swatch plays on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SwatchRole {
    Primary,
    Secondary,
    Accent,
    Depth,
    Contrast,
}

impl SwatchRole {
    /// Roles in board order.
    pub const ALL: &'static [SwatchRole] = &[
        SwatchRole::Primary,
        SwatchRole::Secondary,
        SwatchRole::Accent,
        SwatchRole::Depth,
        SwatchRole::Contrast,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Depth => "depth",
            Self::Contrast => "contrast",
        }
    }
}

impl fmt::Display for SwatchRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Color harmony label derived from the dominant-color count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    Monochromatic,
    Complementary,
    Triadic,
    Tetradic,
}

impl ColorScheme {
    /// Scheme for a given number of supplied dominant colors.
    pub fn from_color_count(count: usize) -> Self {
        match count {
            0 | 1 => Self::Monochromatic,
            2 => Self::Complementary,
            3 | 4 => Self::Triadic,
            _ => Self::Tetradic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monochromatic => "monochromatic",
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
        }
    }

    /// Display name, e.g. "Tetradic".
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Monochromatic => "Monochromatic",
            Self::Complementary => "Complementary",
            Self::Triadic => "Triadic",
            Self::Tetradic => "Tetradic",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One ordered item on a moodboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoodboardItem {
    /// Derived color swatch with its role and harmony rationale
    ColorSwatch {
        role: SwatchRole,
        name: String,
        hex: String,
        harmony_note: String,
    },
    /// Thematic reference placeholder selected by snapshot conditions
    ThematicReference { theme: String, note: String },
    /// Curated cinematography reference
    FilmReference { title: String, note: String },
}

impl MoodboardItem {
    pub fn swatch(
        role: SwatchRole,
        name: impl Into<String>,
        hex: impl Into<String>,
        harmony_note: impl Into<String>,
    ) -> Self {
        Self::ColorSwatch {
            role,
            name: name.into(),
            hex: hex.into(),
            harmony_note: harmony_note.into(),
        }
    }

    pub fn thematic(theme: impl Into<String>, note: impl Into<String>) -> Self {
        Self::ThematicReference {
            theme: theme.into(),
            note: note.into(),
        }
    }

    pub fn film(title: impl Into<String>, note: impl Into<String>) -> Self {
        Self::FilmReference {
            title: title.into(),
            note: note.into(),
        }
    }

    pub fn is_film_reference(&self) -> bool {
        matches!(self, Self::FilmReference { .. })
    }

    pub fn is_swatch(&self) -> bool {
        matches!(self, Self::ColorSwatch { .. })
    }
}

/// A generated moodboard, ready for export hand-off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Moodboard {
    pub title: String,
    pub description: String,
    pub items: Vec<MoodboardItem>,

    /// Generation metadata (color scheme, culture, mood/genre keys)
    pub metadata: BTreeMap<String, String>,
}

impl Moodboard {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        items: Vec<MoodboardItem>,
        metadata: BTreeMap<String, String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            items,
            metadata,
        }
    }
}
