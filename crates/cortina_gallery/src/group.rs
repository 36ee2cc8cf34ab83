use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::date::normalize_date;
use crate::image::GalleryImage;

/// All images uploaded on one calendar day, ordered for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateGroup {
    pub date: NaiveDate,
    pub images: Vec<GalleryImage>,
}

impl DateGroup {
    /// Group heading key in `YYYY-MM-DD` form.
    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// The display-ready gallery: groups descending by date, images within a
/// group ascending by their explicit order.
///
/// The flattened concatenation of all groups is the addressing space for
/// lightbox navigation; [`GroupedGallery::flat_sequence`] and
/// [`GroupedGallery::image_at`] expose it. It is rebuilt on every render
/// and never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedGallery {
    pub groups: Vec<DateGroup>,
}

impl GroupedGallery {
    /// An empty gallery renders nothing; callers suppress the section.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of images across all groups, the length of the flat
    /// sequence.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.images.len()).sum()
    }

    /// All images in render order: date-descending across groups,
    /// order-ascending within a group. No further sorting happens here.
    pub fn flat_sequence(&self) -> Vec<&GalleryImage> {
        self.groups.iter().flat_map(|g| g.images.iter()).collect()
    }

    /// Image at a flat-sequence index.
    pub fn image_at(&self, index: usize) -> Option<&GalleryImage> {
        self.groups
            .iter()
            .flat_map(|g| g.images.iter())
            .nth(index)
    }
}

/// Group images by their normalized upload day.
///
/// Within a group the first-seen input order is kept, then a stable sort by
/// `order` runs on top (missing order sorts last, ties keep input order).
/// Groups come out newest day first.
pub fn group_by_date(images: Vec<GalleryImage>) -> GroupedGallery {
    let mut by_date: IndexMap<NaiveDate, Vec<GalleryImage>> = IndexMap::new();
    for image in images {
        let day = normalize_date(image.upload_date.as_deref());
        by_date.entry(day).or_default().push(image);
    }

    let mut groups: Vec<DateGroup> = by_date
        .into_iter()
        .map(|(date, mut images)| {
            images.sort_by_key(|i| i.order.unwrap_or(i64::MAX));
            DateGroup { date, images }
        })
        .collect();
    groups.sort_by(|a, b| b.date.cmp(&a.date));

    GroupedGallery { groups }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn img(url: &str, date: &str, order: Option<i64>) -> GalleryImage {
        let mut i = GalleryImage::new(url).with_upload_date(date);
        i.order = order;
        i
    }

    fn refs(group: &DateGroup) -> Vec<&str> {
        group.images.iter().map(|i| i.image_ref.as_str()).collect()
    }

    #[test]
    fn groups_by_day_newest_first() {
        let gallery = group_by_date(vec![
            img("b.jpg", "2025-08-05", Some(2)),
            img("a.jpg", "2025-08-05", Some(1)),
            img("c.jpg", "2025-08-01", Some(1)),
        ]);

        assert_eq!(gallery.groups.len(), 2);
        assert_eq!(gallery.groups[0].date_key(), "2025-08-05");
        assert_eq!(refs(&gallery.groups[0]), vec!["a.jpg", "b.jpg"]);
        assert_eq!(gallery.groups[1].date_key(), "2025-08-01");
        assert_eq!(refs(&gallery.groups[1]), vec!["c.jpg"]);
    }

    #[test]
    fn no_image_is_lost_or_duplicated() {
        let images: Vec<_> = (0..20)
            .map(|n| {
                img(
                    &format!("{n}.jpg"),
                    if n % 3 == 0 { "2025-07-01" } else { "2025-07-02" },
                    Some(n % 5),
                )
            })
            .collect();
        let gallery = group_by_date(images.clone());

        assert_eq!(gallery.len(), images.len());
        assert_eq!(gallery.flat_sequence().len(), images.len());
        for original in &images {
            let copies = gallery
                .flat_sequence()
                .iter()
                .filter(|i| i.image_ref == original.image_ref)
                .count();
            assert_eq!(copies, 1, "{}", original.image_ref);
        }
    }

    #[test]
    fn missing_order_sorts_last_and_ties_are_stable() {
        let gallery = group_by_date(vec![
            img("late.jpg", "2025-08-05", None),
            img("first-tie.jpg", "2025-08-05", Some(3)),
            img("second-tie.jpg", "2025-08-05", Some(3)),
            img("lead.jpg", "2025-08-05", Some(1)),
        ]);

        assert_eq!(
            refs(&gallery.groups[0]),
            vec!["lead.jpg", "first-tie.jpg", "second-tie.jpg", "late.jpg"]
        );
    }

    #[test]
    fn flat_sequence_follows_group_order() {
        let gallery = group_by_date(vec![
            img("old.jpg", "2025-06-30", Some(1)),
            img("new-b.jpg", "2025-08-05", Some(2)),
            img("new-a.jpg", "2025-08-05", Some(1)),
        ]);

        let flat: Vec<&str> = gallery
            .flat_sequence()
            .iter()
            .map(|i| i.image_ref.as_str())
            .collect();
        assert_eq!(flat, vec!["new-a.jpg", "new-b.jpg", "old.jpg"]);
        assert_eq!(gallery.image_at(2).unwrap().image_ref, "old.jpg");
        assert_eq!(gallery.image_at(3), None);
    }

    #[test]
    fn empty_input_yields_empty_gallery() {
        let gallery = group_by_date(Vec::new());
        assert!(gallery.is_empty());
        assert_eq!(gallery.len(), 0);
        assert!(gallery.flat_sequence().is_empty());
    }

    #[test]
    fn malformed_dates_share_the_today_group() {
        let gallery = group_by_date(vec![
            img("x.jpg", "not-a-date", Some(1)),
            img("y.jpg", "???", Some(2)),
        ]);
        assert_eq!(gallery.groups.len(), 1);
        assert_eq!(refs(&gallery.groups[0]), vec!["x.jpg", "y.jpg"]);
    }
}
