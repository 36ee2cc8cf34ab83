use thiserror::Error;

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("unknown date label format `{0}` (expected full, short, numeric or iso)")]
    UnknownDateFormat(String),
}
