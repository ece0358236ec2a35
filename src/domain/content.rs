//! Advertisement content as owned by the content collaborator.

use serde::{Deserialize, Serialize};

use crate::domain::ContentId;

/// One renderable advertisement.
///
/// The rendering payload is opaque to the selection engine; it is carried
/// through unchanged and only the content id participates in selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvertisementContent {
    content_id: ContentId,
    rendering_payload: String,
}

impl AdvertisementContent {
    /// Create content with the given id and opaque rendering payload.
    pub fn new(content_id: ContentId, rendering_payload: impl Into<String>) -> Self {
        Self {
            content_id,
            rendering_payload: rendering_payload.into(),
        }
    }

    /// Identifier, unique per marketplace.
    pub fn content_id(&self) -> &ContentId {
        &self.content_id
    }

    /// Opaque payload handed to the renderer.
    pub fn rendering_payload(&self) -> &str {
        &self.rendering_payload
    }
}
