//! Network layer: REST helpers, wire types, and the API error taxonomy.

pub mod api;
pub mod error;
pub mod types;
