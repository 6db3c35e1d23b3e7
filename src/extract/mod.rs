// src/extract/mod.rs

mod fields;
mod headers;
mod rows;

pub use fields::{
    booster_version, date_time, first_string, link_or_text, normalize_mass, payload_mass,
};
pub use headers::{column_name, extract_column_names};
pub use rows::{extract_rows, RowError};

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

pub(crate) static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("Invalid CSS selector for the page title"));
pub(crate) static TR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr").expect("Invalid CSS selector for table rows"));
pub(crate) static TH_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("th").expect("Invalid CSS selector for header cells"));
pub(crate) static TD_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td").expect("Invalid CSS selector for data cells"));
pub(crate) static A_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a").expect("Invalid CSS selector for links"));

/// Text of the document's `<title>`, if it has one.
pub fn page_title(doc: &Html) -> Option<String> {
    doc.select(&TITLE_SELECTOR)
        .next()
        .map(|title| title.text().collect())
}
