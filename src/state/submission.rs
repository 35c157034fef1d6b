//! Submission lifecycle for assignable forms.
//!
//! DESIGN
//! ======
//! The lifecycle is an explicit enum rather than an inference from which DOM
//! nodes currently exist. Entry into `Submitting` is refused while a request
//! is in flight, so rapid repeated triggers cannot issue overlapping
//! requests against the same form.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

/// Lifecycle of one assignable form's request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    /// No request in flight and nothing rendered yet.
    #[default]
    Idle,
    /// A request is in flight; further submissions are refused and the
    /// triggering control is disabled.
    Submitting,
    /// The server accepted the assignment; carries the display value from
    /// the response (`assigned_to` or `message`, depending on the variant).
    Resolved(String),
    /// The request failed; carries the detail shown with the retry
    /// affordance.
    Failed(String),
}

impl SubmissionState {
    /// Whether a new submission may begin from this state.
    ///
    /// Resolution and failure both allow re-entry: the sidebar variant
    /// re-submits on every selection change, and a failed form offers retry.
    pub fn can_begin(&self) -> bool {
        !matches!(self, Self::Submitting)
    }

    /// Whether a request is currently in flight.
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}
