//! Browser-capability helpers.

pub mod clipboard;
