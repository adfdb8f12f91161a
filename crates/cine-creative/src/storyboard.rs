//! Storyboard generation.
//!
//! Expands one classification into a fixed 24-frame production storyboard
//! grouped into seven narrative beats. Frame specs come from small
//! template functions keyed on shot type, energy level and technical
//! metrics, so the same classification always expands to the same board.

use std::collections::BTreeMap;

use cine_models::{
    AnalysisSnapshot, CameraPlan, CinematicIntelligence, EnergyLevel, LightingPlan, StoryBeat,
    Storyboard, StoryboardFrame,
};
use tracing::debug;

/// Frames per generated storyboard.
pub const STORYBOARD_FRAME_COUNT: usize = 24;

/// Description carried by the empty artifact when no classification is
/// available.
pub const EMPTY_STORYBOARD_DESCRIPTION: &str =
    "No classification available; storyboard generation was skipped.";

/// Beat plan: (beat, frame count, seconds per frame). Counts sum to 24.
const BEAT_PLAN: &[(StoryBeat, usize, f64)] = &[
    (StoryBeat::Establishing, 3, 4.0),
    (StoryBeat::Coverage, 5, 3.0),
    (StoryBeat::CloseUp, 4, 2.5),
    (StoryBeat::Insert, 2, 2.0),
    (StoryBeat::Reverse, 3, 3.0),
    (StoryBeat::Climax, 4, 2.0),
    (StoryBeat::Resolution, 3, 4.0),
];

/// Inputs for storyboard generation. All fields optional: an empty
/// request yields the documented empty artifact.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoryboardRequest<'a> {
    pub intelligence: Option<&'a CinematicIntelligence>,
    pub snapshot: Option<&'a AnalysisSnapshot>,
    pub preview_ref: Option<&'a str>,
}

impl<'a> StoryboardRequest<'a> {
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

/// Generate a storyboard from a classification.
///
/// Without a classification this returns the empty artifact (zero frames,
/// fixed description) rather than failing.
pub fn generate_storyboard(request: &StoryboardRequest<'_>) -> Storyboard {
    let intelligence = match request.intelligence {
        Some(intelligence) => intelligence,
        None => {
            return Storyboard::new(
                "Storyboard",
                EMPTY_STORYBOARD_DESCRIPTION,
                Vec::new(),
                BTreeMap::new(),
            )
        }
    };
    let neutral = AnalysisSnapshot::neutral();
    let snapshot = request.snapshot.unwrap_or(&neutral);

    let energy = energy_level(intelligence);
    let shot_label = intelligence.shot_type.label.as_str();
    let mood_label = intelligence.mood.label.as_str();

    let mut frames = Vec::with_capacity(STORYBOARD_FRAME_COUNT);
    let mut number = 1u32;
    for &(beat, count, duration) in BEAT_PLAN {
        for position in 0..count {
            frames.push(StoryboardFrame::new(
                number,
                beat,
                shot_description(beat, shot_label, position),
                camera_plan(beat, shot_label, energy),
                lighting_plan(beat, snapshot),
                composition_note(beat, snapshot),
                talent_direction(beat, mood_label, energy),
                duration,
            ));
            number += 1;
        }
    }

    if let Some(preview) = request.preview_ref {
        frames[0] = frames[0].clone().with_preview_ref(preview);
    }
    let last = frames.len() - 1;
    frames[last] = frames[last].clone().with_transition(closing_transition(mood_label, energy));

    let mut metadata = BTreeMap::new();
    metadata.insert("catalog_version".to_string(), intelligence.catalog_version.clone());
    metadata.insert("culture".to_string(), intelligence.culture.to_string());
    metadata.insert("mood".to_string(), intelligence.mood.label.clone());
    metadata.insert("shot_type".to_string(), intelligence.shot_type.label.clone());
    metadata.insert("energy".to_string(), intelligence.energy.label.clone());
    metadata.insert("genre".to_string(), intelligence.genre.label.clone());

    debug!(
        frames = frames.len(),
        mood = mood_label,
        energy = %energy,
        "Storyboard generated"
    );

    Storyboard::new(
        format!("{} {} Storyboard", mood_label, intelligence.genre.label),
        format!(
            "A {}-beat production storyboard built for a {} {} piece at {} energy.",
            BEAT_PLAN.len(),
            mood_label.to_lowercase(),
            intelligence.genre.label.to_lowercase(),
            intelligence.energy.label.to_lowercase()
        ),
        frames,
        metadata,
    )
}

/// Resolve the classified energy label back to its scale level.
fn energy_level(intelligence: &CinematicIntelligence) -> EnergyLevel {
    EnergyLevel::ALL
        .iter()
        .copied()
        .find(|level| level.display_name() == intelligence.energy.label)
        .unwrap_or(EnergyLevel::Moderate)
}

fn shot_description(beat: StoryBeat, shot_label: &str, position: usize) -> String {
    match beat {
        StoryBeat::Establishing => format!("Wide establishing view, angle {}", position + 1),
        StoryBeat::Coverage => format!("{} coverage, setup {}", shot_label, position + 1),
        StoryBeat::CloseUp => format!("Close-up emphasis, subject {}", position + 1),
        StoryBeat::Insert => format!("Insert detail {}", position + 1),
        StoryBeat::Reverse => format!("Reverse angle {}", position + 1),
        StoryBeat::Climax => format!("Climax beat {}", position + 1),
        StoryBeat::Resolution => format!("Resolution beat {}", position + 1),
    }
}

fn camera_plan(beat: StoryBeat, shot_label: &str, energy: EnergyLevel) -> CameraPlan {
    let wide_shot = matches!(
        shot_label,
        "Extreme Wide" | "Wide" | "Establishing" | "Aerial"
    );
    let tight_shot = matches!(shot_label, "Close-Up" | "Extreme Close-Up" | "Insert");

    let lens = match beat {
        StoryBeat::Establishing => "18mm wide",
        StoryBeat::Coverage if wide_shot => "24mm wide",
        StoryBeat::Coverage if tight_shot => "85mm prime",
        StoryBeat::Coverage => "50mm prime",
        StoryBeat::CloseUp => "85mm prime",
        StoryBeat::Insert => "100mm macro",
        StoryBeat::Reverse => "50mm prime",
        StoryBeat::Climax if tight_shot => "85mm prime",
        StoryBeat::Climax => "35mm prime",
        StoryBeat::Resolution => "35mm prime",
    };

    let movement = if energy >= EnergyLevel::Dynamic {
        match beat {
            StoryBeat::Establishing => "fast aerial push",
            StoryBeat::Climax => "handheld whip pan",
            _ => "energetic handheld",
        }
    } else if energy <= EnergyLevel::Calm {
        match beat {
            StoryBeat::Climax => "slow dolly in",
            _ => "locked off",
        }
    } else {
        match beat {
            StoryBeat::Establishing => "slow push in",
            StoryBeat::Climax => "dolly in",
            StoryBeat::Resolution => "slow pull back",
            _ => "subtle drift",
        }
    };

    let angle = match beat {
        StoryBeat::Establishing => "high vantage",
        StoryBeat::CloseUp | StoryBeat::Insert => "eye level",
        StoryBeat::Climax => "low angle",
        _ => "eye level",
    };

    CameraPlan::new(lens, movement, angle)
}

fn lighting_plan(beat: StoryBeat, snapshot: &AnalysisSnapshot) -> LightingPlan {
    let hard_light = snapshot.metrics.contrast > 65.0;
    let dark_scene = snapshot.metrics.brightness < 35.0;

    let setup = if dark_scene {
        "low-key dramatic"
    } else if hard_light {
        "high-contrast key"
    } else {
        "balanced naturalistic"
    };

    let key = if hard_light {
        "hard key, steep falloff"
    } else {
        "soft key through diffusion"
    };

    let fill = match beat {
        StoryBeat::CloseUp | StoryBeat::Insert => "tight bounce fill",
        StoryBeat::Climax if dark_scene => "minimal fill, let shadows hold",
        _ => "ambient fill",
    };

    LightingPlan::new(setup, key, fill)
}

fn composition_note(beat: StoryBeat, snapshot: &AnalysisSnapshot) -> String {
    let base = match beat {
        StoryBeat::Establishing => "layer foreground, midground and horizon",
        StoryBeat::Coverage => "hold consistent screen direction",
        StoryBeat::CloseUp => "short side the subject, give the eyes room",
        StoryBeat::Insert => "center the detail, fall off fast",
        StoryBeat::Reverse => "mirror the coverage framing",
        StoryBeat::Climax => "tighten the frame as tension peaks",
        StoryBeat::Resolution => "open the frame back up",
    };

    if snapshot.composition.rule_of_thirds {
        format!("{base}; keep subjects on thirds lines")
    } else if snapshot.composition.symmetry {
        format!("{base}; preserve the mirrored balance")
    } else {
        base.to_string()
    }
}

fn talent_direction(beat: StoryBeat, mood_label: &str, energy: EnergyLevel) -> String {
    let pace = if energy >= EnergyLevel::Dynamic {
        "keep movement quick and decisive"
    } else if energy <= EnergyLevel::Calm {
        "let moments breathe"
    } else {
        "play it at a natural pace"
    };

    match beat {
        StoryBeat::Establishing => format!("Set the {} tone; {}", mood_label.to_lowercase(), pace),
        StoryBeat::Climax => format!("Commit fully to the {} peak; {}", mood_label.to_lowercase(), pace),
        StoryBeat::Resolution => format!("Release the tension; {}", pace),
        _ => format!("Stay in the {} register; {}", mood_label.to_lowercase(), pace),
    }
}

fn closing_transition(mood_label: &str, energy: EnergyLevel) -> String {
    if energy >= EnergyLevel::Dynamic {
        "Hard cut to black".to_string()
    } else if matches!(mood_label, "Melancholic" | "Somber" | "Nostalgic" | "Dreamy") {
        "Long slow fade to black".to_string()
    } else {
        "Slow fade to black".to_string()
    }
}
