//! Single transition handler: UI state → payload assembly → transport
//! → result → one notification (+ optional navigation).

use super::effects::{Navigator, Notifier};
use super::state::{SubmissionResult, SubmissionSlot, SubmissionState};
use super::transport::Transport;
use super::{SubmitError, SubmitResult};
use crate::api::Operation;
use crate::form::{assemble, AttachmentRule, AttachmentSet, FormPayload};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Drives one form instance's submissions. Side effects go through the
/// injected collaborators, never through ambient singletons.
pub struct SubmissionHandler<T: Transport> {
    transport: T,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    slot: SubmissionSlot,
}

impl<T: Transport> SubmissionHandler<T> {
    pub fn new(transport: T, notifier: Arc<dyn Notifier>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            transport,
            notifier,
            navigator,
            slot: SubmissionSlot::new(),
        }
    }

    pub fn state(&self) -> &SubmissionState {
        self.slot.state()
    }

    /// One user-initiated submit action. Produces exactly one encoded
    /// request (or none, on a precondition failure) and exactly one
    /// notification.
    #[instrument(skip(self, payload, attachments), fields(operation = op.name))]
    pub async fn submit(
        &mut self,
        op: &Operation,
        payload: &FormPayload,
        attachments: AttachmentSet,
        rule: AttachmentRule,
    ) -> SubmitResult<Value> {
        self.slot.begin()?;

        let request = match assemble(payload, attachments, rule) {
            Ok(request) => request,
            Err(err) => {
                // No request was sent; the interaction stays resubmittable.
                self.slot.abort();
                self.notifier.error(&err.to_string());
                return Err(err.into());
            }
        };

        let outcome = match self.transport.submit(op, request).await {
            Ok(value) => SubmissionResult::Success(value),
            Err(err) => SubmissionResult::Error(err.to_string()),
        };
        self.slot.complete(outcome);
        self.dispatch(op)
    }

    /// Consume the terminal result once and fire its effects.
    fn dispatch(&mut self, op: &Operation) -> SubmitResult<Value> {
        match self.slot.take() {
            Some(SubmissionResult::Success(value)) => {
                info!(operation = op.name, "submission succeeded");
                self.notifier.success(op.success_message);
                if let Some(route) = op.redirect {
                    self.navigator.push(route);
                }
                Ok(value)
            }
            Some(SubmissionResult::Error(message)) => {
                warn!(operation = op.name, %message, "submission failed");
                self.notifier.error(&message);
                Err(SubmitError::Failed(message))
            }
            None => Err(SubmitError::Failed("no submission outcome recorded".into())),
        }
    }
}
