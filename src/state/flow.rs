#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

/// Lifecycle of one request/response flow.
///
/// `Succeeded` and `Failed` are both idle from the UI's perspective —
/// the action button re-enables — but keeping them distinct makes the
/// outcome of the last submission observable in tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlowStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl FlowStatus {
    /// True while a request for this flow is outstanding.
    pub fn is_submitting(self) -> bool {
        self == Self::Submitting
    }
}

/// Derived busy flag: true iff any flow has a request in flight.
///
/// This is the only concurrency guard in the client — while true, every
/// action button is disabled, so at most one request runs at a time.
pub fn any_in_flight(statuses: &[FlowStatus]) -> bool {
    statuses.iter().any(|s| s.is_submitting())
}
