//! Creative asset generation for CineLens.
//!
//! Expands one classification result into:
//! - A fixed 24-frame storyboard across seven narrative beats, with
//!   camera/lighting/composition/talent specs chosen by template
//!   functions keyed on shot type, energy and metrics
//! - A categorized moodboard of derived swatches, thematic placeholders
//!   and curated film references
//!
//! Both generators are deterministic and total: a missing classification
//! produces the documented empty artifact, never an error.

pub mod moodboard;
pub mod storyboard;

pub use moodboard::{generate_moodboard, MoodboardRequest, EMPTY_MOODBOARD_DESCRIPTION};
pub use storyboard::{
    generate_storyboard, StoryboardRequest, EMPTY_STORYBOARD_DESCRIPTION, STORYBOARD_FRAME_COUNT,
};
