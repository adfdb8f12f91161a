//! Declarative cinematic classification for CineLens.
//!
//! This crate provides:
//! - Range-condition primitives over analysis snapshots
//! - Data-table rule catalogs for mood (20), shot type (15) and genre (30)
//! - Composite scoring: base weight + complexity bonus + proximity bonus
//!   +/- cultural adjustment, first-declared-wins on ties
//! - The derived seven-level energy scalar
//! - (label, culture) localization lookup with cultural context notes
//! - Explanations generated from the same condition objects used to match

pub mod catalog;
pub mod condition;
pub mod energy;
pub mod engine;
pub mod locale;
pub mod score;

pub use catalog::{
    Rule, Warmth, CATALOG_VERSION, FALLBACK_GENRE, FALLBACK_MOOD, FALLBACK_SHOT, GENRE_RULES,
    MOOD_RULES, SHOT_RULES,
};
pub use condition::{Condition, MetricField};
pub use energy::{bucket_energy, energy_score};
pub use engine::RuleEngine;
pub use locale::{cultural_context, localize};
