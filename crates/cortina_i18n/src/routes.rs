use tracing::debug;

use crate::locale::Locale;

/// One route's slug in each locale, keyed by a canonical route name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteSlugEntry {
    pub key: &'static str,
    pub ro: &'static str,
    pub en: &'static str,
    pub he: &'static str,
}

impl RouteSlugEntry {
    pub fn slug(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ro => self.ro,
            Locale::En => self.en,
            Locale::He => self.he,
        }
    }

    fn matches(&self, slug: &str) -> bool {
        self.ro == slug || self.en == slug || self.he == slug
    }
}

/// Hand-maintained slug table.
///
/// Every entry must carry a slug for all three locales, and slugs must be
/// unique within a locale; `tests::table_is_complete_and_unambiguous`
/// enforces both, which keeps lookups symmetric (if A translates to B,
/// B translates back to A).
pub const ROUTES: &[RouteSlugEntry] = &[
    RouteSlugEntry {
        key: "about-us",
        ro: "despre-noi",
        en: "about-us",
        he: "אודות",
    },
    RouteSlugEntry {
        key: "gallery",
        ro: "galerie",
        en: "gallery",
        he: "גלריה",
    },
    RouteSlugEntry {
        key: "floor-plans",
        ro: "planuri",
        en: "floor-plans",
        he: "תוכניות-דירה",
    },
    RouteSlugEntry {
        key: "location",
        ro: "locatie",
        en: "location",
        he: "מיקום",
    },
    RouteSlugEntry {
        key: "faq",
        ro: "intrebari-frecvente",
        en: "faq",
        he: "שאלות-נפוצות",
    },
    RouteSlugEntry {
        key: "contact",
        ro: "contact",
        en: "contact-us",
        he: "צור-קשר",
    },
];

/// Find the table entry whose slug (in any locale) matches `slug`.
pub fn lookup_slug(slug: &str) -> Option<&'static RouteSlugEntry> {
    ROUTES.iter().find(|e| e.matches(slug))
}

/// Translate `current_path` into the equivalent path under `target`.
///
/// The path is expected to look like `/<locale>/<slug>`; anything else
/// degrades rather than erring:
/// - no locale prefix: the whole path is kept unchanged under the target
///   locale prefix (no slug translation attempted)
/// - locale root (`/ro`): translates to the target locale root
/// - slug not in the table: the original slug is reused under the new
///   prefix, on the assumption that unmapped routes are locale-invariant
///
/// Never fails; the worst case is a path that 404s at the routing layer.
pub fn translate_route(current_path: &str, target: Locale) -> String {
    let segments: Vec<&str> = current_path.split('/').filter(|s| !s.is_empty()).collect();

    let Some(first) = segments.first() else {
        return format!("/{}", target.code());
    };

    if Locale::parse(first).is_none() {
        // No locale prefix; keep the path as-is under the target locale.
        return format!("/{}/{}", target.code(), segments.join("/"));
    }

    let Some(slug) = segments.get(1) else {
        // Locale root: the home page.
        return format!("/{}", target.code());
    };

    match lookup_slug(slug) {
        Some(entry) => format!("/{}/{}", target.code(), entry.slug(target)),
        None => {
            debug!(slug, target = target.code(), "unmapped slug, keeping original spelling");
            format!("/{}/{}", target.code(), slug)
        }
    }
}

/// Breadcrumb trail for `current_path`, rewritten into `target`.
///
/// Returns cumulative paths starting at the locale root, with each segment
/// translated where the table knows it: `/ro/despre-noi` targeting English
/// yields `["/en", "/en/about-us"]`. Unmapped segments keep their spelling,
/// same as [`translate_route`].
pub fn breadcrumbs(current_path: &str, target: Locale) -> Vec<String> {
    let segments: Vec<&str> = current_path.split('/').filter(|s| !s.is_empty()).collect();

    let rest = match segments.first() {
        Some(first) if Locale::parse(first).is_some() => &segments[1..],
        _ => &segments[..],
    };

    let mut acc = format!("/{}", target.code());
    let mut trail = vec![acc.clone()];
    for seg in rest {
        let slug = lookup_slug(seg).map(|e| e.slug(target)).unwrap_or(*seg);
        acc.push('/');
        acc.push_str(slug);
        trail.push(acc.clone());
    }
    trail
}
