//! Top-level pages.

pub mod home;
