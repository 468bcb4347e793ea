#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the tool tab selector.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub active_tab: ToolTab,
}

/// The three tools of the panel, one tab each.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToolTab {
    #[default]
    Caption,
    Mood,
    Hashtags,
}

impl ToolTab {
    /// Tab button label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Caption => "📸 Caption",
            Self::Mood => "😊 Mood",
            Self::Hashtags => "#️⃣ Hashtags",
        }
    }

    /// Small descriptive line under the tab label.
    pub fn description(self) -> &'static str {
        match self {
            Self::Caption => "Generate Captions",
            Self::Mood => "Check Sentiment",
            Self::Hashtags => "Suggest Tags",
        }
    }

    /// All tabs in display order.
    pub fn all() -> [Self; 3] {
        [Self::Caption, Self::Mood, Self::Hashtags]
    }
}
