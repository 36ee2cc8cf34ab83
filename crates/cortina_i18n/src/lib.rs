//! Cortina internationalization
//!
//! The site is served in three languages (Romanian, English, Hebrew) and
//! every route exists once per locale under a `/<locale>/<slug>` prefix.
//! This crate owns the pieces the rest of the workspace needs to stay
//! locale-correct:
//! - [`Locale`]: the closed set of supported languages, with URL codes,
//!   regional formatting codes, and RTL awareness (Hebrew)
//! - [`LocalizedText`]: the per-language text triple authored in the CMS,
//!   resolved through a fallback chain
//! - route slug translation ([`translate_route`], [`breadcrumbs`]): mapping
//!   a path between locales while preserving the route's identity
//!
//! Route translation is deliberately fail-soft: an unmapped slug keeps its
//! original spelling under the new locale prefix rather than erroring.

mod error;
mod locale;
mod routes;
mod text;

pub use error::I18nError;
pub use locale::Locale;
pub use routes::{breadcrumbs, lookup_slug, translate_route, RouteSlugEntry, ROUTES};
pub use text::LocalizedText;
