use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use cortina_i18n::Locale;

use crate::error::GalleryError;

// Month wording is content, not a formatting-library concern: the site's
// editors sign off on these exact strings, so they live in fixed tables
// instead of going through a generic locale formatter.
const MONTHS_RO: [&str; 12] = [
    "Ianuarie",
    "Februarie",
    "Martie",
    "Aprilie",
    "Mai",
    "Iunie",
    "Iulie",
    "August",
    "Septembrie",
    "Octombrie",
    "Noiembrie",
    "Decembrie",
];
const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
const MONTHS_HE: [&str; 12] = [
    "ינואר",
    "פברואר",
    "מרץ",
    "אפריל",
    "מאי",
    "יוני",
    "יולי",
    "אוגוסט",
    "ספטמבר",
    "אוקטובר",
    "נובמבר",
    "דצמבר",
];

const MONTHS_RO_SHORT: [&str; 12] = [
    "Ian", "Feb", "Mar", "Apr", "Mai", "Iun", "Iul", "Aug", "Sep", "Oct", "Noi", "Dec",
];
const MONTHS_EN_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const MONTHS_HE_SHORT: [&str; 12] = [
    "ינו", "פבר", "מרץ", "אפר", "מאי", "יונ", "יול", "אוג", "ספט", "אוק", "נוב", "דצמ",
];

/// How a date-group heading is rendered.
///
/// The set is closed; configuration strings enter through [`FromStr`] and
/// an unrecognized name is rejected there rather than silently falling
/// back to the raw key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateLabelFormat {
    /// `5 August, 2025` with the full localized month name.
    #[default]
    Full,
    /// `5 Aug, 2025` with the abbreviated month name.
    Short,
    /// Regional numeric form (`05.08.2025` for ro-RO and he-IL,
    /// `8/5/2025` for en-US).
    Numeric,
    /// The `YYYY-MM-DD` group key unchanged.
    Iso,
}

impl FromStr for DateLabelFormat {
    type Err = GalleryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(DateLabelFormat::Full),
            "short" => Ok(DateLabelFormat::Short),
            "numeric" => Ok(DateLabelFormat::Numeric),
            "iso" => Ok(DateLabelFormat::Iso),
            _ => Err(GalleryError::UnknownDateFormat(s.to_string())),
        }
    }
}

fn month_name(date: NaiveDate, locale: Locale, short: bool) -> &'static str {
    let idx = date.month0() as usize;
    match (locale, short) {
        (Locale::Ro, false) => MONTHS_RO[idx],
        (Locale::En, false) => MONTHS_EN[idx],
        (Locale::He, false) => MONTHS_HE[idx],
        (Locale::Ro, true) => MONTHS_RO_SHORT[idx],
        (Locale::En, true) => MONTHS_EN_SHORT[idx],
        (Locale::He, true) => MONTHS_HE_SHORT[idx],
    }
}

/// Render a date-group heading for one locale.
pub fn format_date_label(date: NaiveDate, format: DateLabelFormat, locale: Locale) -> String {
    match format {
        DateLabelFormat::Full => format!(
            "{} {}, {}",
            date.day(),
            month_name(date, locale, false),
            date.year()
        ),
        DateLabelFormat::Short => format!(
            "{} {}, {}",
            date.day(),
            month_name(date, locale, true),
            date.year()
        ),
        DateLabelFormat::Numeric => {
            // Day-first with dot separators for ro-RO and he-IL,
            // month-first with slashes for en-US.
            let pattern = match locale {
                Locale::Ro | Locale::He => "%d.%m.%Y",
                Locale::En => "%-m/%-d/%Y",
            };
            date.format(pattern).to_string()
        }
        DateLabelFormat::Iso => date.format("%Y-%m-%d").to_string(),
    }
}
