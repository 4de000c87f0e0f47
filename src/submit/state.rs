//! Explicit submission lifecycle, consumed single-shot.

use super::SubmitError;
use serde_json::Value;

/// Outcome of one submission attempt. Created once, consumed once by
/// the effect dispatch, then discarded.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionResult {
    Success(Value),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded(Value),
    Failed(String),
}

/// Holds the lifecycle of the current form instance's submission.
/// `begin` rejects re-entry while pending; `take` yields the terminal
/// result exactly once, so success effects can never re-fire.
#[derive(Debug, Default)]
pub struct SubmissionSlot {
    state: SubmissionState,
}

impl SubmissionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Transition to `Pending`. A slot already pending refuses a
    /// second submission; any other state starts a fresh attempt.
    pub fn begin(&mut self) -> Result<(), SubmitError> {
        if self.state == SubmissionState::Pending {
            return Err(SubmitError::InFlight);
        }
        self.state = SubmissionState::Pending;
        Ok(())
    }

    /// Client-side precondition failed before any request was sent;
    /// return to `Idle` so the user may resubmit.
    pub fn abort(&mut self) {
        self.state = SubmissionState::Idle;
    }

    /// Record the attempt's outcome.
    pub fn complete(&mut self, result: SubmissionResult) {
        self.state = match result {
            SubmissionResult::Success(value) => SubmissionState::Succeeded(value),
            SubmissionResult::Error(message) => SubmissionState::Failed(message),
        };
    }

    /// Consume the terminal result, leaving the slot `Idle`. Returns
    /// `None` when there is nothing (left) to consume.
    pub fn take(&mut self) -> Option<SubmissionResult> {
        match std::mem::take(&mut self.state) {
            SubmissionState::Succeeded(value) => Some(SubmissionResult::Success(value)),
            SubmissionState::Failed(message) => Some(SubmissionResult::Error(message)),
            SubmissionState::Pending => {
                // Not terminal yet; put it back untouched.
                self.state = SubmissionState::Pending;
                None
            }
            SubmissionState::Idle => None,
        }
    }
}
