use cortina_gallery::GalleryImage;
use serde_json::Value;
use tracing::debug;

use crate::error::ContentError;
use crate::model::{ContentSection, FaqEntry, HeroSection, PageDocument};
use crate::value::{order_field, string_field, text_field};

/// Normalize a raw CMS document into a [`PageDocument`].
///
/// Only the top-level shape is mandatory (it must be a JSON object).
/// Individual entries are tolerated or skipped: a gallery item without an
/// image reference, a FAQ without a question, a section without body text
/// are dropped with a debug log rather than failing the page.
pub fn page_document(slug: &str, raw: &Value) -> Result<PageDocument, ContentError> {
    let Value::Object(map) = raw else {
        return Err(ContentError::MalformedDocument {
            slug: slug.to_string(),
            reason: "document root must be an object".to_string(),
        });
    };

    Ok(PageDocument {
        slug: slug.to_string(),
        hero: hero_section(map.get("hero")),
        sections: array_of(map.get("sections"), content_section),
        gallery: array_of(map.get("gallery"), gallery_image),
        faqs: faq_entries(map.get("faqs")),
    })
}

fn array_of<T>(value: Option<&Value>, one: impl Fn(&Value) -> Option<T>) -> Vec<T> {
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(one).collect(),
        _ => Vec::new(),
    }
}

fn hero_section(value: Option<&Value>) -> Option<HeroSection> {
    let obj = value?.as_object()?;
    let title = text_field(obj.get("title"))?;
    Some(HeroSection {
        title,
        subtitle: text_field(obj.get("subtitle")),
        image_ref: string_field(obj.get("image")),
    })
}

fn content_section(value: &Value) -> Option<ContentSection> {
    let obj = value.as_object()?;
    let Some(body) = text_field(obj.get("body")) else {
        debug!("section without body text skipped");
        return None;
    };
    let image_refs = match obj.get("images") {
        Some(Value::Array(items)) => items.iter().filter_map(|v| string_field(Some(v))).collect(),
        _ => Vec::new(),
    };
    Some(ContentSection {
        heading: text_field(obj.get("heading")),
        body,
        image_refs,
    })
}

fn gallery_image(value: &Value) -> Option<GalleryImage> {
    let obj = value.as_object()?;
    let Some(image_ref) = string_field(obj.get("image")).or_else(|| string_field(obj.get("url")))
    else {
        debug!("gallery entry without an image reference skipped");
        return None;
    };

    let mut image = GalleryImage::new(image_ref);
    image.upload_date = match obj.get("date").or_else(|| obj.get("uploadDate")) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    };
    image.order = order_field(obj.get("order"));
    image.caption = text_field(obj.get("caption"));
    Some(image)
}

fn faq_entries(value: Option<&Value>) -> Vec<FaqEntry> {
    let mut faqs = array_of(value, |v| {
        let obj = v.as_object()?;
        let question = text_field(obj.get("question"))?;
        let answer = text_field(obj.get("answer"))?;
        Some(FaqEntry {
            question,
            answer,
            order: order_field(obj.get("order")),
        })
    });
    faqs.sort_by_key(|f| f.order.unwrap_or(i64::MAX));
    faqs
}
