//! Cortina content layer
//!
//! The CMS delivers page documents as loosely-shaped JSON: a field may be
//! a plain string, a per-language map, a number, a numeric string, or null
//! depending on how far an editor got. This crate normalizes those shapes
//! into strict typed documents exactly once, at the ingestion boundary, so
//! nothing downstream ever branches on payload shape:
//! - [`value`]: the duck-typed field walkers
//! - [`PageDocument`] and friends: the strict document model
//! - [`ContentSource`] / [`StaticContent`] / [`resolve_document`]: the
//!   black-box CMS contract with fail-soft static fallback
//! - [`GalleryView`]: the render-ready, date-grouped gallery assembly
//!
//! Consistent with the rest of the workspace, degradation is silent but
//! named: a failing content source logs and serves fallback content
//! instead of erroring the page.

mod error;
mod ingest;
mod model;
mod page;
mod source;
pub mod value;

pub use error::ContentError;
pub use ingest::page_document;
pub use model::{ContentSection, FaqEntry, HeroSection, PageDocument};
pub use page::{build_gallery_view, GallerySection, GalleryView};
pub use source::{resolve_document, ContentSource, StaticContent};
