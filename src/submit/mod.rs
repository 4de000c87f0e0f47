//! Submission side: result-state machine, transport seam, and the
//! handler that wires one submit action to one notification and at
//! most one navigation.

pub mod effects;
pub mod handler;
pub mod state;
pub mod transport;


pub use effects::{LogNotifier, Navigator, Notifier};
pub use handler::SubmissionHandler;
pub use state::{SubmissionResult, SubmissionSlot, SubmissionState};
pub use transport::{Transport, TransportError};

use crate::form::FormError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    /// A prior submission on this form is still pending.
    #[error("a submission is already in flight")]
    InFlight,
    #[error(transparent)]
    Form(#[from] FormError),
    /// Transport or server failure, message surfaced verbatim.
    #[error("{0}")]
    Failed(String),
}

pub type SubmitResult<T> = Result<T, SubmitError>;
