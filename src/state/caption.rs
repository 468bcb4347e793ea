#[cfg(test)]
#[path = "caption_test.rs"]
mod caption_test;

use crate::net::error::ApiError;
use crate::net::types::CaptionResponse;
use crate::state::flow::FlowStatus;

/// State for the caption generator flow.
///
/// Held in an `RwSignal` provided via context; the panel component binds
/// its inputs and buttons to these fields. Transitions are methods so
/// they stay testable without a browser.
#[derive(Clone, Debug, Default)]
pub struct CaptionState {
    /// Free-text image description typed by the user.
    pub input: String,
    /// Last successfully generated caption; empty until the first success.
    pub caption: String,
    pub status: FlowStatus,
    /// Drives the "Copied! ✓" button label.
    pub copied: bool,
    /// Bumped on every copy action; a scheduled reset carrying a stale
    /// epoch is ignored, so an old timer never clears a newer copy.
    pub copy_epoch: u64,
    /// Last failure, kept for logging/tests; never shown to the user.
    pub last_error: Option<ApiError>,
}

impl CaptionState {
    /// Whether the action should fire: input is non-blank after trim.
    pub fn ready(&self) -> bool {
        !self.input.trim().is_empty()
    }

    /// Enter the submitting state. The previous caption stays displayed.
    pub fn begin(&mut self) {
        self.status = FlowStatus::Submitting;
    }

    /// Replace the displayed caption with a fresh backend result.
    pub fn apply(&mut self, resp: CaptionResponse) {
        self.caption = resp.caption;
        self.status = FlowStatus::Succeeded;
        self.last_error = None;
    }

    /// Record a failed submission. The previous caption is untouched and
    /// the flow returns to a resubmittable state.
    pub fn fail(&mut self, err: ApiError) {
        self.status = FlowStatus::Failed;
        self.last_error = Some(err);
    }

    /// Flag the caption as copied and return the epoch the caller should
    /// pass back to [`Self::expire_copied`] after the feedback delay.
    pub fn mark_copied(&mut self) -> u64 {
        self.copied = true;
        self.copy_epoch += 1;
        self.copy_epoch
    }

    /// Clear the copied flag, unless a newer copy superseded this one.
    pub fn expire_copied(&mut self, epoch: u64) {
        if self.copy_epoch == epoch {
            self.copied = false;
        }
    }
}
