//! Raw (binary) responses

/// Body of a binary endpoint (vector tile, glyph range, static map image)
/// returned as-is together with its transport status and content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RawResponse {
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Whether the server labelled the body as an image.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.content_type.as_deref().is_some_and(|ct| ct.starts_with("image/"))
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.body
    }
}
