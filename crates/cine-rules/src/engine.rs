//! The cinematic rule engine: snapshot in, four-taxonomy intelligence out.

use cine_models::{
    clamp_score, AlternativeLabel, AnalysisSnapshot, CinematicIntelligence, ClassificationResult,
    Culture, Explainability, Taxonomy,
};
use tracing::debug;

use crate::catalog::{
    Rule, CATALOG_VERSION, FALLBACK_GENRE, FALLBACK_MOOD, FALLBACK_SHOT, GENRE_RULES, MOOD_RULES,
    SHOT_RULES,
};
use crate::energy::{bucket_energy, energy_components, energy_score};
use crate::locale::{cultural_context, localize};
use crate::score::{
    cultural_adjustment, rank_alternatives, score_catalog, select_winner, FALLBACK_CONFIDENCE,
};

/// Deterministic classifier over the declarative rule catalogs.
///
/// Stateless: identical snapshot and culture always produce an identical
/// structured result.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleEngine;

impl RuleEngine {
    pub fn new() -> Self {
        Self
    }

    /// Classify under the default Western culture.
    pub fn classify_default(&self, snapshot: &AnalysisSnapshot) -> CinematicIntelligence {
        self.classify(snapshot, Culture::default())
    }

    /// Classify one snapshot into mood, energy, shot type and genre.
    pub fn classify(&self, snapshot: &AnalysisSnapshot, culture: Culture) -> CinematicIntelligence {
        let mut explainability = Explainability::default();

        let mood = self.classify_catalog(
            Taxonomy::Mood,
            MOOD_RULES,
            FALLBACK_MOOD,
            snapshot,
            culture,
            &mut explainability,
        );
        let energy = self.classify_energy(snapshot, culture, &mut explainability);
        let shot_type = self.classify_catalog(
            Taxonomy::ShotType,
            SHOT_RULES,
            FALLBACK_SHOT,
            snapshot,
            culture,
            &mut explainability,
        );
        let genre = self.classify_catalog(
            Taxonomy::Genre,
            GENRE_RULES,
            FALLBACK_GENRE,
            snapshot,
            culture,
            &mut explainability,
        );

        debug!(
            mood = %mood.label,
            energy = %energy.label,
            shot = %shot_type.label,
            genre = %genre.label,
            culture = %culture,
            "Snapshot classified"
        );

        CinematicIntelligence {
            mood,
            energy,
            shot_type,
            genre,
            catalog_version: CATALOG_VERSION.to_string(),
            culture,
            explainability,
        }
    }

    fn classify_catalog(
        &self,
        taxonomy: Taxonomy,
        catalog: &[Rule],
        fallback: &str,
        snapshot: &AnalysisSnapshot,
        culture: Culture,
        explainability: &mut Explainability,
    ) -> ClassificationResult {
        let scores = score_catalog(catalog, snapshot, culture);
        let winner = select_winner(&scores);

        let (label, confidence, explanation, matched_strings) = match winner {
            Some(w) => {
                let rule = &catalog[w.index];
                let matched: Vec<String> = rule
                    .conditions
                    .iter()
                    .map(|c| c.describe(snapshot))
                    .collect();
                let explanation = format!(
                    "Matched {} conditions: {}",
                    rule.conditions.len(),
                    matched.join("; ")
                );
                (rule.label, clamp_score(w.composite), explanation, matched)
            }
            None => (
                fallback,
                FALLBACK_CONFIDENCE,
                format!(
                    "No {} rule fully matched; defaulting to {} at low confidence",
                    taxonomy.as_str(),
                    fallback
                ),
                Vec::new(),
            ),
        };

        // Runners-up, strictly below the winner, never repeating its label
        let winner_index = winner.map(|w| w.index);
        let candidates = rank_alternatives(&scores, winner_index);
        let raw_confidences: Vec<f64> = candidates
            .iter()
            .map(|s| {
                if s.full_match {
                    clamp_score(s.composite)
                } else {
                    // Near misses scale by the share of conditions held
                    let fraction = s.matched as f64 / catalog[s.index].conditions.len() as f64;
                    clamp_score(s.composite * fraction * 0.5)
                }
            })
            .collect();
        let enforced = crate::score::enforce_decreasing(&raw_confidences, confidence);
        let alternatives: Vec<AlternativeLabel> = candidates
            .iter()
            .zip(enforced.iter())
            .filter(|(s, _)| catalog[s.index].label != label)
            .map(|(s, &conf)| AlternativeLabel::new(catalog[s.index].label, conf))
            .collect();

        let prefix = taxonomy.as_str();
        if let Some(w) = winner {
            explainability
                .confidence_factors
                .insert(format!("{prefix}_complexity"), w.matched as f64);
            explainability
                .confidence_factors
                .insert(format!("{prefix}_proximity"), w.proximity);
            explainability.confidence_factors.insert(
                format!("{prefix}_cultural_adjustment"),
                cultural_adjustment(catalog[w.index].warmth, culture),
            );
            if let Some(first_alt) = alternatives.first() {
                explainability.confidence_factors.insert(
                    format!("{prefix}_margin"),
                    confidence - first_alt.confidence,
                );
            }
        }
        explainability
            .matched_conditions
            .insert(prefix.to_string(), matched_strings);

        ClassificationResult::new(
            label,
            confidence,
            alternatives,
            localize(label, culture),
            explanation,
            cultural_context(taxonomy, culture),
        )
    }

    fn classify_energy(
        &self,
        snapshot: &AnalysisSnapshot,
        culture: Culture,
        explainability: &mut Explainability,
    ) -> ClassificationResult {
        let score = energy_score(snapshot);
        let (level, confidence) = bucket_energy(score);
        let (low, high) = level.score_range();

        let components = energy_components(snapshot);
        let component_text = components
            .iter()
            .map(|(name, value, weight)| format!("{name} {value:.1} x {weight:.2}"))
            .collect::<Vec<_>>()
            .join(" + ");
        let explanation = format!(
            "Energy score {:.1} ({component_text}) sits in {} [{:.1}, {:.1})",
            score,
            level.display_name(),
            low,
            high
        );

        // Adjacent levels as runners-up, stepped below the winner
        let raw: Vec<f64> = level
            .neighbors()
            .iter()
            .enumerate()
            .map(|(i, _)| confidence - 12.0 * (i as f64 + 1.0))
            .collect();
        let enforced = crate::score::enforce_decreasing(&raw, confidence);
        let alternatives: Vec<AlternativeLabel> = level
            .neighbors()
            .iter()
            .zip(enforced.iter())
            .map(|(l, &conf)| AlternativeLabel::new(l.display_name(), conf))
            .collect();

        explainability.matched_conditions.insert(
            Taxonomy::Energy.as_str().to_string(),
            components
                .iter()
                .map(|(name, value, weight)| format!("{name}={value:.1} weight {weight:.2}"))
                .collect(),
        );
        explainability.confidence_factors.insert(
            "energy_definitiveness".to_string(),
            (confidence - 55.0) / 40.0,
        );
        explainability
            .confidence_factors
            .insert("energy_score".to_string(), score);

        ClassificationResult::new(
            level.display_name(),
            confidence,
            alternatives,
            localize(level.display_name(), culture),
            explanation,
            cultural_context(Taxonomy::Energy, culture),
        )
    }
}
