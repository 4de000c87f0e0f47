//! Payload assembly: one JSON `data` part plus 0..N `file` parts.

use super::attachment::{Attachment, AttachmentSet};
use super::payload::FormPayload;
use super::{FormError, FormResult};
use reqwest::multipart::{Form, Part};
use serde_json::Value;

/// Multipart field carrying the JSON-serialized payload.
pub const DATA_FIELD: &str = "data";
/// Multipart field carrying each binary attachment.
pub const FILE_FIELD: &str = "file";

/// Per-form attachment policy. `Required` carries the message shown to
/// the user when no file was selected.
#[derive(Debug, Clone, Copy)]
pub enum AttachmentRule {
    Optional,
    Required(&'static str),
}

/// One outbound request body: the serialized payload plus attachments
/// in selection order. Exactly one is produced per submit action.
#[derive(Debug, Clone)]
pub struct EncodedRequest {
    data: String,
    files: Vec<Attachment>,
}

/// Transform validated field values and attachments into an encoded
/// request. Fails before any request is constructed when a required
/// attachment is missing.
pub fn assemble(
    payload: &FormPayload,
    attachments: AttachmentSet,
    rule: AttachmentRule,
) -> FormResult<EncodedRequest> {
    if let AttachmentRule::Required(message) = rule {
        if attachments.is_empty() {
            return Err(FormError::AttachmentRequired(message.to_string()));
        }
    }

    let data = serde_json::to_string(&payload.to_json())?;
    Ok(EncodedRequest {
        data,
        files: attachments.into_vec(),
    })
}

impl EncodedRequest {
    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn files(&self) -> &[Attachment] {
        &self.files
    }

    /// Parse the `data` part back to JSON (receiver's view of the payload).
    pub fn decode_data(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.data)
    }

    /// Consume into the wire form: `data` first, then each `file` part
    /// in original order.
    pub fn into_multipart(self) -> Result<Form, reqwest::Error> {
        let mut form = Form::new().text(DATA_FIELD, self.data);
        for file in self.files {
            let part = Part::bytes(file.bytes.to_vec())
                .file_name(file.file_name)
                .mime_str(&file.content_type)?;
            form = form.part(FILE_FIELD, part);
        }
        Ok(form)
    }
}
