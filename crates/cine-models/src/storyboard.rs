//! Storyboard artifact models.
//!
//! Storyboards are write-once: generated in full, then handed off. No
//! mutating API is exposed beyond construction.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Named narrative beat a storyboard frame belongs to.
///
/// Beats order by narrative position, establishing first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum StoryBeat {
    Establishing,
    Coverage,
    CloseUp,
    Insert,
    Reverse,
    Climax,
    Resolution,
}

impl StoryBeat {
    /// All beats in narrative order.
    pub const ALL: &'static [StoryBeat] = &[
        StoryBeat::Establishing,
        StoryBeat::Coverage,
        StoryBeat::CloseUp,
        StoryBeat::Insert,
        StoryBeat::Reverse,
        StoryBeat::Climax,
        StoryBeat::Resolution,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Establishing => "establishing",
            Self::Coverage => "coverage",
            Self::CloseUp => "close_up",
            Self::Insert => "insert",
            Self::Reverse => "reverse",
            Self::Climax => "climax",
            Self::Resolution => "resolution",
        }
    }
}

impl fmt::Display for StoryBeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Camera sub-spec for one storyboard frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CameraPlan {
    /// Lens choice, e.g. "24mm wide"
    pub lens: String,

    /// Camera movement, e.g. "slow dolly in"
    pub movement: String,

    /// Camera angle, e.g. "eye level"
    pub angle: String,
}

impl CameraPlan {
    pub fn new(
        lens: impl Into<String>,
        movement: impl Into<String>,
        angle: impl Into<String>,
    ) -> Self {
        Self {
            lens: lens.into(),
            movement: movement.into(),
            angle: angle.into(),
        }
    }
}

/// Lighting sub-spec for one storyboard frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LightingPlan {
    /// Overall setup, e.g. "low-key dramatic"
    pub setup: String,

    /// Key light treatment
    pub key: String,

    /// Fill light treatment
    pub fill: String,
}

impl LightingPlan {
    pub fn new(setup: impl Into<String>, key: impl Into<String>, fill: impl Into<String>) -> Self {
        Self {
            setup: setup.into(),
            key: key.into(),
            fill: fill.into(),
        }
    }
}

/// One frame of a generated storyboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StoryboardFrame {
    /// 1-based contiguous frame number
    pub number: u32,

    /// Narrative beat this frame belongs to
    pub beat: StoryBeat,

    /// Shot description, e.g. "wide establishing shot"
    pub shot: String,

    pub camera: CameraPlan,
    pub lighting: LightingPlan,

    /// Composition note for the frame
    pub composition: String,

    /// Direction note for on-screen talent
    pub talent_direction: String,

    /// Planned duration in seconds
    pub duration_secs: f64,

    /// Preview reference, carried only by frame 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_ref: Option<String>,

    /// Closing transition annotation, carried only by the final frame
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<String>,
}

impl StoryboardFrame {
    /// Create a frame with the required fields; optional annotations are
    /// attached with the `with_*` builders.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        number: u32,
        beat: StoryBeat,
        shot: impl Into<String>,
        camera: CameraPlan,
        lighting: LightingPlan,
        composition: impl Into<String>,
        talent_direction: impl Into<String>,
        duration_secs: f64,
    ) -> Self {
        Self {
            number,
            beat,
            shot: shot.into(),
            camera,
            lighting,
            composition: composition.into(),
            talent_direction: talent_direction.into(),
            duration_secs,
            preview_ref: None,
            transition: None,
        }
    }

    pub fn with_preview_ref(mut self, preview_ref: impl Into<String>) -> Self {
        self.preview_ref = Some(preview_ref.into());
        self
    }

    pub fn with_transition(mut self, transition: impl Into<String>) -> Self {
        self.transition = Some(transition.into());
        self
    }
}

/// A generated storyboard, ready for export hand-off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Storyboard {
    pub title: String,
    pub description: String,
    pub frames: Vec<StoryboardFrame>,

    /// Generation metadata (catalog version, culture, shot/energy keys)
    pub metadata: BTreeMap<String, String>,
}

impl Storyboard {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        frames: Vec<StoryboardFrame>,
        metadata: BTreeMap<String, String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            frames,
            metadata,
        }
    }

    /// Total planned runtime across all frames.
    pub fn total_duration_secs(&self) -> f64 {
        self.frames.iter().map(|f| f.duration_secs).sum()
    }
}
