//! Form-side core: field values, attachments, and the multipart
//! payload assembly step that turns both into one encoded request.

pub mod assembler;
pub mod attachment;
pub mod hydrate;
pub mod payload;


pub use assembler::{assemble, AttachmentRule, EncodedRequest, DATA_FIELD, FILE_FIELD};
pub use attachment::{Attachment, AttachmentSet};
pub use payload::{FieldValue, FormPayload};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    /// Client-side precondition: the form needs an attachment and none
    /// was selected. Blocks request construction entirely.
    #[error("{0}")]
    AttachmentRequired(String),
    #[error("Field `{field}` is not a number: {raw:?}")]
    NotANumber { field: String, raw: String },
    #[error("Payload serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type FormResult<T> = Result<T, FormError>;
