//! Localization lookup for catalog labels.
//!
//! Localization is a side table keyed by label, kept apart from the
//! matching algorithm so the matcher stays culture-agnostic and the data
//! can be extended independently.

use cine_models::{Culture, LocalizedLabel, Taxonomy};

/// English label paired with its Arabic translation.
///
/// Covers every label any catalog (or the energy scale) can emit;
/// completeness is enforced by test.
const TRANSLATIONS: &[(&str, &str)] = &[
    // Moods
    ("Joyful", "مبهج"),
    ("Serene", "صافٍ"),
    ("Melancholic", "كئيب"),
    ("Tense", "متوتر"),
    ("Romantic", "رومانسي"),
    ("Mysterious", "غامض"),
    ("Energetic", "نشيط"),
    ("Somber", "قاتم"),
    ("Hopeful", "متفائل"),
    ("Nostalgic", "حنيني"),
    ("Dramatic", "درامي"),
    ("Playful", "مرح"),
    ("Ominous", "منذر"),
    ("Tranquil", "ساكن"),
    ("Passionate", "عاطفي"),
    ("Gritty", "خشن"),
    ("Dreamy", "حالم"),
    ("Cold", "بارد"),
    ("Warm", "دافئ"),
    ("Neutral", "محايد"),
    // Shot types
    ("Extreme Wide", "لقطة واسعة جدًا"),
    ("Wide", "لقطة واسعة"),
    ("Full", "لقطة كاملة"),
    ("Medium Wide", "لقطة متوسطة واسعة"),
    ("Medium", "لقطة متوسطة"),
    ("Medium Close-Up", "لقطة متوسطة قريبة"),
    ("Close-Up", "لقطة قريبة"),
    ("Extreme Close-Up", "لقطة قريبة جدًا"),
    ("Over-the-Shoulder", "لقطة من فوق الكتف"),
    ("Two-Shot", "لقطة ثنائية"),
    ("Insert", "لقطة تفصيلية"),
    ("Establishing", "لقطة تأسيسية"),
    ("Low Angle", "زاوية منخفضة"),
    ("High Angle", "زاوية مرتفعة"),
    ("Aerial", "لقطة جوية"),
    // Genres
    ("Drama", "دراما"),
    ("Comedy", "كوميديا"),
    ("Thriller", "إثارة"),
    ("Horror", "رعب"),
    ("Romance", "رومانسية"),
    ("Action", "حركة"),
    ("Adventure", "مغامرة"),
    ("Sci-Fi", "خيال علمي"),
    ("Fantasy", "فانتازيا"),
    ("Documentary", "وثائقي"),
    ("Film Noir", "فيلم نوار"),
    ("Western", "ويسترن"),
    ("Musical", "موسيقي"),
    ("Mystery", "غموض"),
    ("Crime", "جريمة"),
    ("War", "حرب"),
    ("Biography", "سيرة ذاتية"),
    ("History", "تاريخي"),
    ("Sport", "رياضي"),
    ("Family", "عائلي"),
    ("Animation", "رسوم متحركة"),
    ("Art House", "سينما فنية"),
    ("Coming of Age", "قصة نضوج"),
    ("Road Movie", "فيلم طريق"),
    ("Psychological", "نفسي"),
    ("Melodrama", "ميلودراما"),
    ("Epic", "ملحمي"),
    ("Indie", "مستقل"),
    ("Social Realism", "واقعية اجتماعية"),
    ("Experimental", "تجريبي"),
    // Energy levels
    ("Meditative", "تأملي"),
    ("Calm", "هادئ"),
    ("Relaxed", "مسترخٍ"),
    ("Moderate", "معتدل"),
    ("Lively", "حيوي"),
    ("Dynamic", "ديناميكي"),
    ("Explosive", "متفجر"),
];

/// Arabic translation for a label, falling back to the label itself for
/// anything outside the catalogs.
fn arabic_for(label: &str) -> &str {
    TRANSLATIONS
        .iter()
        .find(|(en, _)| *en == label)
        .map(|(_, ar)| *ar)
        .unwrap_or(label)
}

/// Localized label pair for the given culture.
///
/// Western: English primary, Arabic secondary. Arabic: the reverse.
pub fn localize(label: &str, culture: Culture) -> LocalizedLabel {
    let arabic = arabic_for(label);
    match culture {
        Culture::Western => LocalizedLabel::new(label, arabic),
        Culture::Arabic => LocalizedLabel::new(arabic, label),
    }
}

/// Short cultural framing note attached to each classification.
pub fn cultural_context(taxonomy: Taxonomy, culture: Culture) -> &'static str {
    match (taxonomy, culture) {
        (Taxonomy::Mood, Culture::Western) => {
            "Read through Western color convention: cool palettes lean somber, warm palettes lean intimate."
        }
        (Taxonomy::Mood, Culture::Arabic) => {
            "Arabic visual tradition favors warm, hospitable palettes; warm-leaning moods carry extra weight."
        }
        (Taxonomy::Energy, Culture::Western) => {
            "Pacing judged against Western editing rhythms, where contrast and motion read as intensity."
        }
        (Taxonomy::Energy, Culture::Arabic) => {
            "Pacing judged against Arabic cinema's preference for measured, deliberate rhythm."
        }
        (Taxonomy::ShotType, Culture::Western) => {
            "Shot vocabulary follows Western continuity-coverage convention."
        }
        (Taxonomy::ShotType, Culture::Arabic) => {
            "Shot vocabulary follows Arabic broadcast convention, favoring closer framings for dialogue."
        }
        (Taxonomy::Genre, Culture::Western) => {
            "Genre cues follow Western studio color and lighting codes."
        }
        (Taxonomy::Genre, Culture::Arabic) => {
            "Genre cues adjusted for Arabic audiences, where melodrama and family stories dominate."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{GENRE_RULES, MOOD_RULES, SHOT_RULES};
    use cine_models::EnergyLevel;

    #[test]
    fn test_every_catalog_label_translated() {
        let all_labels = MOOD_RULES
            .iter()
            .chain(SHOT_RULES)
            .chain(GENRE_RULES)
            .map(|r| r.label)
            .chain(EnergyLevel::ALL.iter().map(|l| l.display_name()));

        for label in all_labels {
            assert_ne!(
                arabic_for(label),
                label,
                "missing Arabic translation for {label}"
            );
        }
    }

    #[test]
    fn test_localize_orientation() {
        let western = localize("Joyful", Culture::Western);
        assert_eq!(western.primary, "Joyful");
        assert_eq!(western.secondary, "مبهج");

        let arabic = localize("Joyful", Culture::Arabic);
        assert_eq!(arabic.primary, "مبهج");
        assert_eq!(arabic.secondary, "Joyful");
    }

    #[test]
    fn test_unknown_label_falls_back() {
        let pair = localize("Unheard Of", Culture::Arabic);
        assert_eq!(pair.primary, "Unheard Of");
        assert_eq!(pair.secondary, "Unheard Of");
    }

    #[test]
    fn test_context_differs_by_culture() {
        for taxonomy in [
            Taxonomy::Mood,
            Taxonomy::Energy,
            Taxonomy::ShotType,
            Taxonomy::Genre,
        ] {
            let western = cultural_context(taxonomy, Culture::Western);
            let arabic = cultural_context(taxonomy, Culture::Arabic);
            assert_ne!(western, arabic);
            assert!(!western.is_empty() && !arabic.is_empty());
        }
    }
}
