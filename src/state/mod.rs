//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by tool flow (`caption`, `mood`, `hashtags`) plus the
//! tab selector (`ui`), so individual panels depend on small focused
//! models. Each flow carries its own [`flow::FlowStatus`]; the busy flag
//! that gates every action button is derived from the three statuses
//! rather than stored, so it can never drift from the requests actually
//! in flight.

pub mod caption;
pub mod flow;
pub mod hashtags;
pub mod mood;
pub mod ui;
