//! The selection engine's sole output type.

use crate::domain::AdvertisementContent;

/// Result of a selection call.
///
/// Selection is total: absent marketplaces, empty candidate lists, and
/// requests no candidate is eligible for all resolve to [`Self::Empty`]
/// rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedAdvertisement {
    /// A concrete advertisement to render.
    Advertisement(AdvertisementContent),
    /// No advertisement available for this request.
    Empty,
}

impl GeneratedAdvertisement {
    /// The selected content, if any.
    pub fn content(&self) -> Option<&AdvertisementContent> {
        match self {
            Self::Advertisement(content) => Some(content),
            Self::Empty => None,
        }
    }

    /// Whether this is the no-advertisement sentinel.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<AdvertisementContent> for GeneratedAdvertisement {
    fn from(content: AdvertisementContent) -> Self {
        Self::Advertisement(content)
    }
}
