use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ContentError;
use crate::ingest::page_document;
use crate::model::PageDocument;

/// Black-box "get document by slug" contract with the CMS.
///
/// Implementations own networking, auth and persistence; this crate only
/// sees the result. A failing source is expected and handled by
/// [`resolve_document`], never surfaced to the page.
pub trait ContentSource {
    fn document(&self, slug: &str) -> Result<PageDocument, ContentError>;
}

/// In-memory document store, used both for the static fallback content
/// shipped with the site and as the test double for the CMS.
#[derive(Debug, Clone, Default)]
pub struct StaticContent {
    documents: HashMap<String, PageDocument>,
}

impl StaticContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, doc: PageDocument) {
        self.documents.insert(doc.slug.clone(), doc);
    }

    /// Load documents from a JSON map of slug to raw CMS-shaped document.
    pub fn from_json(src: &str) -> Result<Self, ContentError> {
        let raw: Value = serde_json::from_str(src)?;
        let Value::Object(map) = raw else {
            return Err(ContentError::MalformedDocument {
                slug: "<root>".to_string(),
                reason: "fallback content must be a map of slug to document".to_string(),
            });
        };

        let mut content = Self::new();
        for (slug, doc) in &map {
            content.insert(page_document(slug, doc)?);
        }
        Ok(content)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl ContentSource for StaticContent {
    fn document(&self, slug: &str) -> Result<PageDocument, ContentError> {
        self.documents
            .get(slug)
            .cloned()
            .ok_or_else(|| ContentError::MissingDocument(slug.to_string()))
    }
}

/// Fetch a page, serving static fallback content when the CMS source
/// fails.
///
/// This is the named fail-soft branch for CMS outages: the error is logged
/// and the page renders defaults. Only a slug unknown to both sides is an
/// error.
pub fn resolve_document(
    source: &dyn ContentSource,
    fallback: &StaticContent,
    slug: &str,
) -> Result<PageDocument, ContentError> {
    match source.document(slug) {
        Ok(doc) => {
            debug!(slug, "document served from content source");
            Ok(doc)
        }
        Err(err) => {
            warn!(slug, error = %err, "content source failed, serving fallback content");
            fallback.document(slug)
        }
    }
}
