use cortina_gallery::{
    format_date_label, group_by_date, DateLabelFormat, GalleryImage, Lightbox,
};
use cortina_i18n::Locale;
use serde::Serialize;

use crate::model::PageDocument;

/// One date group, ready for the template: heading label plus the images
/// in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GallerySection {
    pub date_key: String,
    pub label: String,
    pub images: Vec<GalleryImage>,
}

/// The render-ready gallery for one page and locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryView {
    pub sections: Vec<GallerySection>,
    /// Flat-sequence length, the lightbox addressing space.
    pub image_count: usize,
    pub lightbox_enabled: bool,
}

impl GalleryView {
    /// Fresh navigation state for this view.
    pub fn lightbox(&self) -> Lightbox {
        Lightbox::new(self.image_count, self.lightbox_enabled)
    }
}

/// Assemble the date-grouped gallery for a page.
///
/// Returns `None` when the document has no gallery images, so templates
/// suppress the section instead of rendering an empty one.
pub fn build_gallery_view(
    doc: &PageDocument,
    locale: Locale,
    label_format: DateLabelFormat,
    lightbox_enabled: bool,
) -> Option<GalleryView> {
    let grouped = group_by_date(doc.gallery.clone());
    if grouped.is_empty() {
        return None;
    }

    let image_count = grouped.len();
    let sections = grouped
        .groups
        .into_iter()
        .map(|group| GallerySection {
            date_key: group.date_key(),
            label: format_date_label(group.date, label_format, locale),
            images: group.images,
        })
        .collect();

    Some(GalleryView {
        sections,
        image_count,
        lightbox_enabled,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn doc_with_gallery() -> PageDocument {
        let gallery = vec![
            GalleryImage::new("b.jpg").with_upload_date("2025-08-05").with_order(2),
            GalleryImage::new("a.jpg").with_upload_date("2025-08-05").with_order(1),
            GalleryImage::new("c.jpg").with_upload_date("2025-08-01").with_order(1),
        ];
        PageDocument {
            slug: "gallery".to_string(),
            gallery,
            ..PageDocument::default()
        }
    }

    #[test]
    fn builds_localized_sections_newest_first() {
        let view =
            build_gallery_view(&doc_with_gallery(), Locale::Ro, DateLabelFormat::Full, true)
                .unwrap();

        assert_eq!(view.image_count, 3);
        assert_eq!(view.sections.len(), 2);
        assert_eq!(view.sections[0].label, "5 August, 2025");
        assert_eq!(view.sections[0].date_key, "2025-08-05");
        let first: Vec<_> = view.sections[0]
            .images
            .iter()
            .map(|i| i.image_ref.as_str())
            .collect();
        assert_eq!(first, vec!["a.jpg", "b.jpg"]);
        assert_eq!(view.sections[1].label, "1 August, 2025");
    }

    #[test]
    fn empty_gallery_suppresses_the_section() {
        let doc = PageDocument {
            slug: "contact".to_string(),
            ..PageDocument::default()
        };
        assert_eq!(
            build_gallery_view(&doc, Locale::En, DateLabelFormat::Full, true),
            None
        );
    }

    #[test]
    fn lightbox_matches_the_flat_sequence() {
        let view =
            build_gallery_view(&doc_with_gallery(), Locale::He, DateLabelFormat::Iso, true)
                .unwrap();
        let mut lb = view.lightbox();
        assert!(lb.open(0));
        lb.prev();
        assert_eq!(lb.current_index(), Some(2));

        let disabled =
            build_gallery_view(&doc_with_gallery(), Locale::He, DateLabelFormat::Iso, false)
                .unwrap();
        let mut lb = disabled.lightbox();
        assert!(!lb.open(0));
    }
}
