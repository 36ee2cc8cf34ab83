use thiserror::Error;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("unknown locale `{0}` (expected ro, en or he)")]
    UnknownLocale(String),
}
