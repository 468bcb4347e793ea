#[cfg(test)]
#[path = "mood_test.rs"]
mod mood_test;

use crate::net::error::ApiError;
use crate::net::types::MoodResult;
use crate::state::flow::FlowStatus;

/// State for the mood checker flow.
///
/// The result is the whole [`MoodResult`] record — mood label, emoji
/// glyph, confidence label — replaced in one assignment so the panel
/// never renders a mix of old and new fields.
#[derive(Clone, Debug, Default)]
pub struct MoodState {
    /// Free-text content pasted by the user.
    pub input: String,
    pub result: Option<MoodResult>,
    pub status: FlowStatus,
    pub last_error: Option<ApiError>,
}

impl MoodState {
    pub fn ready(&self) -> bool {
        !self.input.trim().is_empty()
    }

    pub fn begin(&mut self) {
        self.status = FlowStatus::Submitting;
    }

    /// Replace the displayed record atomically.
    pub fn apply(&mut self, result: MoodResult) {
        self.result = Some(result);
        self.status = FlowStatus::Succeeded;
        self.last_error = None;
    }

    pub fn fail(&mut self, err: ApiError) {
        self.status = FlowStatus::Failed;
        self.last_error = Some(err);
    }
}
