//! Duck-typed CMS field walkers.
//!
//! Every accessor takes the raw `serde_json::Value` straight from the CMS
//! and produces a strict shape or `None`. All shape tolerance lives here;
//! the document model and rendering logic only ever see normalized types.

use cortina_i18n::{Locale, LocalizedText};
use serde_json::Value;

/// A text field: plain string, per-language map (`{"ro": .., "en": ..,
/// "he": ..}`), or null/absent. Plain strings count as untranslated
/// primary-language text. Non-text shapes normalize to `None`.
pub fn text_field(value: Option<&Value>) -> Option<LocalizedText> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(LocalizedText::from_plain(s.clone())),
        Value::Object(map) => {
            let mut text = LocalizedText::new();
            for locale in Locale::ALL {
                if let Some(Value::String(s)) = map.get(locale.code()) {
                    if !s.trim().is_empty() {
                        text.set(locale, s.clone());
                    }
                }
            }
            (!text.is_empty()).then_some(text)
        }
        _ => None,
    }
}

/// A plain string field (URLs, slugs). Also unwraps the common
/// `{"url": "..."}` media-reference shape.
pub fn string_field(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Object(map) => match map.get("url") {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
            _ => None,
        },
        _ => None,
    }
}

/// An ordering field: an integer, or an integer spelled as a string
/// (editors type into a free-text CMS field). Anything else is `None`,
/// which sorts last.
pub fn order_field(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn plain_string_becomes_primary_language_text() {
        let v = json!("Galerie foto");
        let text = text_field(Some(&v)).unwrap();
        assert_eq!(text.get(Locale::Ro), Some("Galerie foto"));
        assert_eq!(text.resolve(Locale::He), Some("Galerie foto"));
    }

    #[test]
    fn language_map_keeps_each_translation() {
        let v = json!({"ro": "Despre noi", "en": "About us", "he": "אודות"});
        let text = text_field(Some(&v)).unwrap();
        assert_eq!(text.get(Locale::En), Some("About us"));
        assert_eq!(text.get(Locale::He), Some("אודות"));
    }

    #[test]
    fn null_and_junk_text_shapes_normalize_to_none() {
        assert_eq!(text_field(None), None);
        assert_eq!(text_field(Some(&Value::Null)), None);
        assert_eq!(text_field(Some(&json!(42))), None);
        assert_eq!(text_field(Some(&json!(""))), None);
        assert_eq!(text_field(Some(&json!({"ro": null, "en": ""}))), None);
    }

    #[test]
    fn string_field_unwraps_media_references() {
        assert_eq!(
            string_field(Some(&json!({"url": "https://cdn/a.jpg"}))),
            Some("https://cdn/a.jpg".to_string())
        );
        assert_eq!(string_field(Some(&json!("b.jpg"))), Some("b.jpg".to_string()));
        assert_eq!(string_field(Some(&json!({"id": 3}))), None);
    }

    #[test]
    fn order_accepts_numbers_and_numeric_strings() {
        assert_eq!(order_field(Some(&json!(7))), Some(7));
        assert_eq!(order_field(Some(&json!("12"))), Some(12));
        assert_eq!(order_field(Some(&json!(" 3 "))), Some(3));
        assert_eq!(order_field(Some(&json!("first"))), None);
        assert_eq!(order_field(Some(&json!(2.5))), None);
        assert_eq!(order_field(None), None);
    }
}
