//! Cortina gallery engine
//!
//! The construction-progress gallery shows CMS-uploaded photos grouped by
//! the day they were taken, newest day first, with a lightbox that steps
//! through every photo in one continuous circular sequence.
//!
//! This crate turns the flat, unordered image list delivered by the CMS
//! into that structure:
//! - [`normalize_date`]: permissive date parsing that degrades to "today"
//!   instead of failing
//! - [`group_by_date`] / [`GroupedGallery`]: calendar-day grouping with a
//!   deterministic order (groups descending by date, images ascending by
//!   their explicit order, ties stable)
//! - [`format_date_label`]: per-locale group headings from fixed month
//!   tables (wording is content, not a formatting-library concern)
//! - [`Lightbox`]: the open/closed navigation state machine addressing the
//!   flattened sequence
//!
//! Everything here is a pure transformation over already-fetched data; the
//! only failure mode is [`GalleryError::UnknownDateFormat`] at the
//! configuration boundary.

mod date;
mod error;
mod group;
mod image;
mod label;
mod lightbox;

pub use date::normalize_date;
pub use error::GalleryError;
pub use group::{group_by_date, DateGroup, GroupedGallery};
pub use image::GalleryImage;
pub use label::{format_date_label, DateLabelFormat};
pub use lightbox::{Lightbox, LightboxState};
