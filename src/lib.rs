//! Client-side core of the recipe-sharing community app.
//! Collects validated form fields and attachments into one multipart
//! request, submits it once, and turns the outcome into exactly one
//! notification (plus an optional navigation) via injected collaborators.

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod submit;

pub use api::{ApiClient, Operation};
pub use config::Config;
pub use error::{ClientError, ClientResult};
pub use form::{
    assemble, Attachment, AttachmentRule, AttachmentSet, EncodedRequest, FormPayload,
};
pub use models::{IngredientRow, Recipe};
pub use submit::{
    Navigator, Notifier, SubmissionHandler, SubmissionState, SubmitError, Transport,
    TransportError,
};
