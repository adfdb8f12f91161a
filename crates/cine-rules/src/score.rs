//! Composite scoring and winner selection over a rule catalog.

use cine_models::{AnalysisSnapshot, Culture};

use crate::catalog::{Rule, Warmth};

/// Bonus per condition on a matched rule. More specific rules outrank
/// broader ones at equal base weight.
const COMPLEXITY_BONUS: f64 = 5.0;

/// Maximum bonus for metrics sitting at their range centers.
const PROXIMITY_BONUS: f64 = 15.0;

/// Weight adjustments applied under the Arabic culture selector.
const ARABIC_WARM_BOOST: f64 = 6.0;
const ARABIC_COOL_PENALTY: f64 = -4.0;

/// Confidence assigned to a fallback label when nothing matched.
pub const FALLBACK_CONFIDENCE: f64 = 25.0;

/// Maximum alternatives reported per taxonomy.
pub const MAX_ALTERNATIVES: usize = 3;

/// Evaluation of one rule against one snapshot.
#[derive(Debug, Clone)]
pub struct RuleScore {
    /// Index of the rule in its catalog (declaration order)
    pub index: usize,

    /// Conditions that held
    pub matched: usize,

    /// Mean proximity over matched conditions
    pub proximity: f64,

    /// Base weight + complexity bonus + proximity bonus + cultural
    /// adjustment
    pub composite: f64,

    /// Whether every condition held
    pub full_match: bool,
}

/// Cultural weight adjustment for a rule's palette leaning.
pub fn cultural_adjustment(warmth: Warmth, culture: Culture) -> f64 {
    match culture {
        Culture::Western => 0.0,
        Culture::Arabic => match warmth {
            Warmth::Warm => ARABIC_WARM_BOOST,
            Warmth::Cool => ARABIC_COOL_PENALTY,
            Warmth::Neutral => 0.0,
        },
    }
}

/// Score a single rule.
pub fn score_rule(
    index: usize,
    rule: &Rule,
    snapshot: &AnalysisSnapshot,
    culture: Culture,
) -> RuleScore {
    let matched = rule
        .conditions
        .iter()
        .filter(|c| c.matches(snapshot))
        .count();
    let full_match = matched == rule.conditions.len();

    let proximity = if matched == 0 {
        0.0
    } else {
        rule.conditions
            .iter()
            .map(|c| c.proximity(snapshot))
            .sum::<f64>()
            / matched as f64
    };

    let composite = rule.weight
        + COMPLEXITY_BONUS * rule.conditions.len() as f64
        + PROXIMITY_BONUS * proximity
        + cultural_adjustment(rule.warmth, culture);

    RuleScore {
        index,
        matched,
        proximity,
        composite,
        full_match,
    }
}

/// Score every rule in a catalog, in declaration order.
pub fn score_catalog(
    catalog: &[Rule],
    snapshot: &AnalysisSnapshot,
    culture: Culture,
) -> Vec<RuleScore> {
    catalog
        .iter()
        .enumerate()
        .map(|(index, rule)| score_rule(index, rule, snapshot, culture))
        .collect()
}

/// Pick the winning full match.
///
/// Ties on composite score resolve to the earlier declaration: the scan
/// only replaces the current best on a strictly greater score, which
/// keeps selection deterministic.
pub fn select_winner(scores: &[RuleScore]) -> Option<&RuleScore> {
    let mut best: Option<&RuleScore> = None;
    for score in scores.iter().filter(|s| s.full_match) {
        match best {
            None => best = Some(score),
            Some(current) if score.composite > current.composite => best = Some(score),
            Some(_) => {}
        }
    }
    best
}

/// Rank runner-up candidates below the winner.
///
/// Full matches rank by composite; when nothing fully matched, the
/// nearest misses rank by matched-condition count then composite. The
/// winner's label is excluded by index.
pub fn rank_alternatives(scores: &[RuleScore], winner_index: Option<usize>) -> Vec<&RuleScore> {
    let any_full = scores.iter().any(|s| s.full_match);

    let mut candidates: Vec<&RuleScore> = scores
        .iter()
        .filter(|s| Some(s.index) != winner_index)
        .filter(|s| if any_full { s.full_match } else { s.matched > 0 })
        .collect();

    if any_full {
        candidates.sort_by(|a, b| {
            b.composite
                .partial_cmp(&a.composite)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.index.cmp(&b.index))
        });
    } else {
        candidates.sort_by(|a, b| {
            b.matched
                .cmp(&a.matched)
                .then(
                    b.composite
                        .partial_cmp(&a.composite)
                        .unwrap_or(std::cmp::Ordering::Equal),
                )
                .then(a.index.cmp(&b.index))
        });
    }

    candidates.truncate(MAX_ALTERNATIVES);
    candidates
}

/// Enforce strictly decreasing confidences under a cap.
///
/// Returns `(raw confidence, enforced confidence)` pairs; entries that
/// would drop to zero or below are cut.
pub fn enforce_decreasing(raws: &[f64], cap: f64) -> Vec<f64> {
    let mut out = Vec::with_capacity(raws.len());
    let mut ceiling = cap;
    for &raw in raws {
        let conf = raw.min(ceiling - 1.0);
        if conf <= 0.0 {
            break;
        }
        out.push(conf);
        ceiling = conf;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MOOD_RULES;
    use cine_models::{
        AnalysisSnapshot, ColorProfile, CompositionProfile, LightingProfile, TechnicalMetrics,
    };

    fn snapshot(brightness: f64, contrast: f64, saturation: f64, kelvin: f64) -> AnalysisSnapshot {
        AnalysisSnapshot::new(
            100,
            100,
            TechnicalMetrics::new(brightness, contrast, 50.0, 10.0, 20.0, 30.0, 50.0),
            ColorProfile::new(kelvin, saturation, vec![]),
            CompositionProfile::new(55.0, false, false, false, 3),
            LightingProfile::neutral(),
        )
    }

    #[test]
    fn test_clean_triple_match_scores_high() {
        // Dead center of the Joyful ranges
        let snapshot = snapshot(80.0, 40.0, 77.5, 3750.0);
        let scores = score_catalog(MOOD_RULES, &snapshot, Culture::Western);
        let winner = select_winner(&scores).expect("full match expected");

        assert!(winner.composite >= 70.0, "composite {}", winner.composite);
    }

    #[test]
    fn test_cultural_adjustment_directions() {
        assert_eq!(cultural_adjustment(Warmth::Warm, Culture::Western), 0.0);
        assert!(cultural_adjustment(Warmth::Warm, Culture::Arabic) > 0.0);
        assert!(cultural_adjustment(Warmth::Cool, Culture::Arabic) < 0.0);
        assert_eq!(cultural_adjustment(Warmth::Neutral, Culture::Arabic), 0.0);
    }

    #[test]
    fn test_no_full_match_yields_no_winner() {
        // Force every mood rule to miss at least one condition:
        // brightness 100 excludes the darker rules, saturation 0 the
        // vivid ones, kelvin 8000 the warm ones, contrast 0 the rest.
        let snapshot = snapshot(100.0, 0.0, 0.0, 8000.0);
        let scores = score_catalog(MOOD_RULES, &snapshot, Culture::Western);

        if select_winner(&scores).is_none() {
            let alternatives = rank_alternatives(&scores, None);
            assert!(!alternatives.is_empty());
            assert!(alternatives.iter().all(|s| !s.full_match));
        }
    }

    #[test]
    fn test_enforce_decreasing() {
        let confs = enforce_decreasing(&[80.0, 80.0, 60.0, 1.0], 82.0);
        assert_eq!(confs, vec![80.0, 79.0, 60.0, 1.0]);

        let capped = enforce_decreasing(&[90.0, 89.0], 50.0);
        assert_eq!(capped, vec![49.0, 48.0]);

        let floored = enforce_decreasing(&[5.0, 4.0, 3.0], 2.0);
        assert_eq!(floored, vec![1.0]);

        let cut = enforce_decreasing(&[5.0, 4.0, 3.0], 1.0);
        assert!(cut.is_empty());
    }

    #[test]
    fn test_ties_resolve_to_earlier_rule() {
        let scores = vec![
            RuleScore {
                index: 0,
                matched: 3,
                proximity: 0.5,
                composite: 70.0,
                full_match: true,
            },
            RuleScore {
                index: 1,
                matched: 3,
                proximity: 0.5,
                composite: 70.0,
                full_match: true,
            },
        ];
        assert_eq!(select_winner(&scores).unwrap().index, 0);
    }
}
