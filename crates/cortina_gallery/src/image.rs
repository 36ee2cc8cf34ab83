use cortina_i18n::LocalizedText;
use serde::{Deserialize, Serialize};

/// One displayable picture, as normalized from the CMS by
/// `cortina_content`.
///
/// The binary asset stays in the external media store; this type only
/// carries its URL. `upload_date` is the raw CMS value and may be missing
/// or malformed — [`crate::normalize_date`] decides what day it lands on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    /// URL or handle into the media store.
    pub image_ref: String,
    /// Raw upload date as stored in the CMS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_date: Option<String>,
    /// Tie-break within a date group; images without one sort last.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<LocalizedText>,
}

impl GalleryImage {
    pub fn new(image_ref: impl Into<String>) -> Self {
        Self {
            image_ref: image_ref.into(),
            upload_date: None,
            order: None,
            caption: None,
        }
    }

    pub fn with_upload_date(mut self, date: impl Into<String>) -> Self {
        self.upload_date = Some(date.into());
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_caption(mut self, caption: LocalizedText) -> Self {
        self.caption = Some(caption);
        self
    }
}
