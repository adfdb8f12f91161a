//! Moodboard generation.
//!
//! Builds an ordered board of derived color swatches, condition-selected
//! thematic references and curated film references from one
//! classification and its snapshot.

use std::collections::BTreeMap;

use cine_models::{
    AnalysisSnapshot, CinematicIntelligence, ColorScheme, Moodboard, MoodboardItem, SwatchRole,
};
use tracing::debug;

/// Description carried by the empty artifact when no classification is
/// available.
pub const EMPTY_MOODBOARD_DESCRIPTION: &str =
    "No classification available; moodboard generation was skipped.";

/// Curated film references keyed on mood/genre keywords. Scanned in
/// order; the first few keyword hits make the board.
const FILM_REFERENCES: &[(&str, &str, &str)] = &[
    (
        "noir",
        "The Third Man (1949)",
        "Hard single-source light, canted angles, shadow-split faces.",
    ),
    (
        "tense",
        "Se7en (1995)",
        "Desaturated grime, rain-soaked blacks, oppressive top light.",
    ),
    (
        "thriller",
        "No Country for Old Men (2007)",
        "Dry palettes and patient wides that let dread accumulate.",
    ),
    (
        "horror",
        "The Shining (1980)",
        "Symmetrical corridors and flat, wrong-feeling brightness.",
    ),
    (
        "romantic",
        "In the Mood for Love (2000)",
        "Saturated reds, slow drift, frames within frames.",
    ),
    (
        "romance",
        "Her (2013)",
        "Warm coral and soft backlight for intimate distance.",
    ),
    (
        "melancholic",
        "Lost in Translation (2003)",
        "Neon loneliness, window reflections, muted pastels.",
    ),
    (
        "joyful",
        "Amelie (2001)",
        "Golden-green grade and playful symmetrical staging.",
    ),
    (
        "dreamy",
        "The Tree of Life (2011)",
        "Natural backlight, floating handheld, prayer-like whisper pace.",
    ),
    (
        "sci-fi",
        "Blade Runner 2049 (2017)",
        "Monochrome haze fields and brutalist silhouettes.",
    ),
    (
        "cold",
        "Fargo (1996)",
        "White-out flatness against small warm interiors.",
    ),
    (
        "western",
        "The Good, the Bad and the Ugly (1966)",
        "Scorched ochre vistas cut with extreme close-ups.",
    ),
    (
        "epic",
        "Lawrence of Arabia (1962)",
        "Horizon-dominated wides and heat-shimmer scale.",
    ),
    (
        "action",
        "Mad Max: Fury Road (2015)",
        "Teal-and-orange crush with center-framed chaos.",
    ),
    (
        "mysterious",
        "Prisoners (2013)",
        "Rain-gray palettes and interiors that swallow light.",
    ),
    (
        "drama",
        "The Godfather (1972)",
        "Top-lit amber interiors and pooled darkness.",
    ),
];

/// Fallback reference guaranteed on every populated board with no
/// keyword hits.
const FALLBACK_REFERENCE: (&str, &str) = (
    "Days of Heaven (1978)",
    "Universal magic-hour reference for color-driven mood.",
);

/// Inputs for moodboard generation. An empty request yields the
/// documented empty artifact.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoodboardRequest<'a> {
    pub intelligence: Option<&'a CinematicIntelligence>,
    pub snapshot: Option<&'a AnalysisSnapshot>,
    pub preview_ref: Option<&'a str>,
}

impl<'a> MoodboardRequest<'a> {
    pub fn new(intelligence: &'a CinematicIntelligence, snapshot: &'a AnalysisSnapshot) -> Self {
        Self {
            intelligence: Some(intelligence),
            snapshot: Some(snapshot),
            preview_ref: None,
        }
    }

    pub fn with_preview_ref(mut self, preview_ref: &'a str) -> Self {
        self.preview_ref = Some(preview_ref);
        self
    }
}

/// Generate a moodboard from a classification.
pub fn generate_moodboard(request: &MoodboardRequest<'_>) -> Moodboard {
    let intelligence = match request.intelligence {
        Some(intelligence) => intelligence,
        None => {
            return Moodboard::new(
                "Moodboard",
                EMPTY_MOODBOARD_DESCRIPTION,
                Vec::new(),
                BTreeMap::new(),
            )
        }
    };
    let neutral = AnalysisSnapshot::neutral();
    let snapshot = request.snapshot.unwrap_or(&neutral);

    let scheme = ColorScheme::from_color_count(snapshot.color.dominant_colors.len());
    let mut items = Vec::new();

    // Hero item carries the preview reference opaquely
    if let Some(preview) = request.preview_ref {
        items.push(MoodboardItem::thematic("Hero Frame", preview));
    }

    items.extend(color_swatches(snapshot, scheme));
    items.extend(thematic_references(snapshot));
    items.extend(film_references(intelligence));

    let mut metadata = BTreeMap::new();
    metadata.insert("catalog_version".to_string(), intelligence.catalog_version.clone());
    metadata.insert("culture".to_string(), intelligence.culture.to_string());
    metadata.insert("color_scheme".to_string(), scheme.display_name().to_string());
    metadata.insert("mood".to_string(), intelligence.mood.label.clone());
    metadata.insert("genre".to_string(), intelligence.genre.label.clone());

    debug!(
        items = items.len(),
        scheme = %scheme,
        "Moodboard generated"
    );

    Moodboard::new(
        format!("{} {} Moodboard", intelligence.mood.label, intelligence.genre.label),
        format!(
            "A {} palette board for a {} {} piece.",
            scheme.display_name().to_lowercase(),
            intelligence.mood.label.to_lowercase(),
            intelligence.genre.label.to_lowercase()
        ),
        items,
        metadata,
    )
}

/// Derive the five-role swatch run from the dominant colors.
///
/// Missing roles are synthesized from the primary color (a shade for
/// depth, an inversion for contrast) so the run stays complete.
fn color_swatches(snapshot: &AnalysisSnapshot, scheme: ColorScheme) -> Vec<MoodboardItem> {
    let colors = &snapshot.color.dominant_colors;
    if colors.is_empty() {
        return Vec::new();
    }

    let primary_hex = colors[0].hex.clone();
    SwatchRole::ALL
        .iter()
        .enumerate()
        .map(|(i, &role)| {
            let (name, hex) = match colors.get(i) {
                Some(color) => (color.name.clone(), color.hex.clone()),
                None => match role {
                    SwatchRole::Depth => ("deep shade".to_string(), shade_hex(&primary_hex)),
                    SwatchRole::Contrast => ("counter tone".to_string(), invert_hex(&primary_hex)),
                    _ => (colors[0].name.clone(), primary_hex.clone()),
                },
            };
            MoodboardItem::swatch(role, name, hex, harmony_note(role, scheme))
        })
        .collect()
}

fn harmony_note(role: SwatchRole, scheme: ColorScheme) -> String {
    let scheme_name = scheme.display_name().to_lowercase();
    match role {
        SwatchRole::Primary => format!("Anchor of the {scheme_name} scheme"),
        SwatchRole::Secondary => format!("Supports the anchor within the {scheme_name} scheme"),
        SwatchRole::Accent => "Sparing accent for points of attention".to_string(),
        SwatchRole::Depth => "Darkened register for backgrounds and falloff".to_string(),
        SwatchRole::Contrast => "Opposing tone that keeps the frame from flattening".to_string(),
    }
}

/// Thematic placeholders chosen by snapshot conditions.
fn thematic_references(snapshot: &AnalysisSnapshot) -> Vec<MoodboardItem> {
    let mut items = Vec::new();

    if snapshot.color.temperature.is_warm() {
        items.push(MoodboardItem::thematic(
            "Golden-hour warmth",
            "Late sun, long shadows, skin tones leaning amber.",
        ));
    } else if snapshot.color.temperature.is_cool() {
        items.push(MoodboardItem::thematic(
            "Blue-hour chill",
            "Post-sunset cyan cast, sodium lamps for counterpoint.",
        ));
    }

    if snapshot.metrics.contrast >= 65.0 {
        items.push(MoodboardItem::thematic(
            "Chiaroscuro",
            "Single hard sources, faces half-lost to shadow.",
        ));
    } else if snapshot.metrics.contrast <= 35.0 {
        items.push(MoodboardItem::thematic(
            "Soft wash",
            "Overcast evenness, shadows barely deeper than mids.",
        ));
    }

    if snapshot.composition.rule_of_thirds {
        items.push(MoodboardItem::thematic(
            "Thirds framing",
            "Subjects pinned to intersections, horizons on lines.",
        ));
    }
    if snapshot.composition.symmetry {
        items.push(MoodboardItem::thematic(
            "Mirror symmetry",
            "Centered one-point staging, architectural balance.",
        ));
    }
    if snapshot.composition.leading_lines {
        items.push(MoodboardItem::thematic(
            "Leading lines",
            "Roads, rails and sightlines converging on the subject.",
        ));
    }
    if snapshot.composition.depth_layers >= 4 {
        items.push(MoodboardItem::thematic(
            "Deep staging",
            "Action layered from foreground to far distance.",
        ));
    }

    items
}

/// 2-3 curated film references keyed on mood/genre keywords, with the
/// generic fallback guaranteed when nothing specific matches.
fn film_references(intelligence: &CinematicIntelligence) -> Vec<MoodboardItem> {
    let haystack = format!(
        "{} {}",
        intelligence.mood.label.to_lowercase(),
        intelligence.genre.label.to_lowercase()
    );

    let mut items: Vec<MoodboardItem> = FILM_REFERENCES
        .iter()
        .filter(|(keyword, _, _)| haystack.contains(keyword))
        .take(3)
        .map(|(_, title, note)| MoodboardItem::film(*title, *note))
        .collect();

    if items.len() < 2 {
        items.push(MoodboardItem::film(FALLBACK_REFERENCE.0, FALLBACK_REFERENCE.1));
    }

    items
}

fn shade_hex(hex: &str) -> String {
    transform_hex(hex, |v| v / 2)
}

fn invert_hex(hex: &str) -> String {
    transform_hex(hex, |v| 255 - v)
}

fn transform_hex(hex: &str, f: impl Fn(u8) -> u8) -> String {
    let parse = |s: &str| u8::from_str_radix(s, 16).unwrap_or(0);
    let body = hex.trim_start_matches('#');
    if body.len() != 6 {
        return hex.to_string();
    }
    format!(
        "#{:02x}{:02x}{:02x}",
        f(parse(&body[0..2])),
        f(parse(&body[2..4])),
        f(parse(&body[4..6]))
    )
}
