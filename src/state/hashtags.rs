#[cfg(test)]
#[path = "hashtags_test.rs"]
mod hashtags_test;

use crate::net::error::ApiError;
use crate::net::types::HashtagResponse;
use crate::state::flow::FlowStatus;

/// State for the hashtag suggestor flow.
#[derive(Clone, Debug, Default)]
pub struct HashtagState {
    /// Free-text keywords typed by the user.
    pub input: String,
    /// Suggested tags in the order the backend returned them.
    pub tags: Vec<String>,
    pub status: FlowStatus,
    pub copied: bool,
    /// See `CaptionState::copy_epoch`.
    pub copy_epoch: u64,
    pub last_error: Option<ApiError>,
}

impl HashtagState {
    pub fn ready(&self) -> bool {
        !self.input.trim().is_empty()
    }

    pub fn begin(&mut self) {
        self.status = FlowStatus::Submitting;
    }

    /// Replace the displayed tag list, preserving backend order.
    pub fn apply(&mut self, resp: HashtagResponse) {
        self.tags = resp.hashtags;
        self.status = FlowStatus::Succeeded;
        self.last_error = None;
    }

    pub fn fail(&mut self, err: ApiError) {
        self.status = FlowStatus::Failed;
        self.last_error = Some(err);
    }

    /// Text placed on the clipboard by "Copy All Hashtags".
    pub fn copy_text(&self) -> String {
        self.tags.join(" ")
    }

    pub fn mark_copied(&mut self) -> u64 {
        self.copied = true;
        self.copy_epoch += 1;
        self.copy_epoch
    }

    pub fn expire_copied(&mut self, epoch: u64) {
        if self.copy_epoch == epoch {
            self.copied = false;
        }
    }
}
