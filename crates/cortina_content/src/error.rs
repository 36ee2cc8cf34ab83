use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("document `{0}` not found")]
    MissingDocument(String),

    #[error("document `{slug}` is malformed: {reason}")]
    MalformedDocument { slug: String, reason: String },

    #[error("content source failure: {0}")]
    Source(String),

    #[error("invalid content json: {0}")]
    Json(#[from] serde_json::Error),
}
