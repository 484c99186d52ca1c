use serde::{Deserialize, Serialize};

/// File attached to an order; only its metadata travels with the payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub file_name: String,
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub size_bytes: u64,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            size_bytes,
        }
    }

    pub fn is_image(&self) -> bool {
        if self.content_type.starts_with("image/") {
            return true;
        }
        // Browsers leave the type empty for some files; fall back to the extension.
        let lower = self.file_name.to_ascii_lowercase();
        self.content_type.is_empty()
            && [".png", ".jpg", ".jpeg", ".gif", ".webp", ".bmp", ".svg"]
                .iter()
                .any(|ext| lower.ends_with(ext))
    }

    pub fn is_empty(&self) -> bool {
        self.file_name.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_detection_uses_type_then_extension() {
        assert!(Attachment::new("logo.bin", "image/png", 10).is_image());
        assert!(Attachment::new("Logo.JPG", "", 10).is_image());
        assert!(!Attachment::new("invoice.pdf", "application/pdf", 10).is_image());
        assert!(!Attachment::new("fake.png", "application/pdf", 10).is_image());
    }
}
