use super::DomainError;

pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// An image accepted for upload: image content type, at most 5 MiB.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(
        file_name: Option<String>,
        content_type: Option<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, DomainError> {
        let content_type = content_type.unwrap_or_default();
        if !content_type.starts_with("image/") {
            return Err(DomainError::InvalidUpload(
                "file must be an image".to_string(),
            ));
        }
        if bytes.is_empty() {
            return Err(DomainError::InvalidUpload("file is empty".to_string()));
        }
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(DomainError::InvalidUpload(
                "file must not exceed 5MB".to_string(),
            ));
        }

        Ok(Self {
            file_name: file_name.unwrap_or_default(),
            content_type,
            bytes,
        })
    }

    /// File extension for the stored object, taken from the file name and
    /// falling back to the image subtype.
    pub fn extension(&self) -> String {
        let from_name = self
            .file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty());
        let raw = from_name.unwrap_or_else(|| {
            self.content_type
                .trim_start_matches("image/")
                .split(['+', ';'])
                .next()
                .unwrap_or_default()
        });

        let ext: String = raw
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect();
        if ext.is_empty() { "bin".to_string() } else { ext }
    }
}
