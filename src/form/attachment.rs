//! Binary attachments selected by the user, kept in selection order.

use bytes::Bytes;

#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl Attachment {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }
}

/// Ordered set of 0..N attachments. Mutated only by file-selection
/// events; insertion order is preserved through encoding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttachmentSet {
    files: Vec<Attachment>,
}

impl AttachmentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, attachment: Attachment) {
        self.files.push(attachment);
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attachment> {
        self.files.iter()
    }

    pub(crate) fn into_vec(self) -> Vec<Attachment> {
        self.files
    }
}

impl FromIterator<Attachment> for AttachmentSet {
    fn from_iter<I: IntoIterator<Item = Attachment>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}
