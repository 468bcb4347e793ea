//! UI components for the SocialFlow panel.

pub mod caption_panel;
pub mod hashtag_panel;
pub mod mood_panel;
pub mod tab_bar;
