// src/extract/fields.rs

use scraper::{ElementRef, Node};
use unicode_normalization::UnicodeNormalization;

use super::A_SELECTOR;

/// Text of a cell that wraps a single text node, looking through lone
/// element wrappers. A cell with siblings next to its text has no sole
/// string.
pub(crate) fn sole_string<'a>(el: ElementRef<'a>) -> Option<&'a str> {
    let mut children = el.children();
    let only = children.next()?;
    if children.next().is_some() {
        return None;
    }
    match only.value() {
        Node::Text(text) => Some(&*text.text),
        Node::Element(_) => ElementRef::wrap(only).and_then(sole_string),
        _ => None,
    }
}

/// First two text fragments of the cell, trimmed: the launch date (with any
/// trailing comma dropped) and the time, when the cell carries one.
pub fn date_time(cell: ElementRef<'_>) -> (Option<String>, Option<String>) {
    let mut fragments = cell.text().map(str::trim);
    let date = fragments
        .next()
        .map(|d| d.trim_end_matches(',').to_string());
    let time = fragments.next().map(str::to_string);
    (date, time)
}

/// Booster designation reassembled from text split across footnote markers
/// and line breaks: the even-indexed fragments, minus the last of them,
/// concatenated. Falls back to the first link's text when nothing is left.
pub fn booster_version(cell: ElementRef<'_>) -> Option<String> {
    let evens: Vec<&str> = cell
        .text()
        .enumerate()
        .filter(|(i, _)| i % 2 == 0)
        .map(|(_, fragment)| fragment)
        .collect();
    let keep = evens.len().saturating_sub(1);
    let version = evens[..keep].concat();
    if !version.is_empty() {
        return Some(version);
    }
    cell.select(&A_SELECTOR)
        .next()
        .and_then(sole_string)
        .map(str::to_string)
}

/// Text of the cell's first link if it has one, otherwise the cell's full
/// text, trimmed.
pub fn link_or_text(cell: ElementRef<'_>) -> Option<String> {
    match cell.select(&A_SELECTOR).next() {
        Some(link) => sole_string(link).map(str::to_string),
        None => Some(cell.text().collect::<String>().trim().to_string()),
    }
}

/// Payload mass from the cell's full text, via [`normalize_mass`].
pub fn payload_mass(cell: ElementRef<'_>) -> Option<String> {
    let text: String = cell.text().collect();
    normalize_mass(&text)
}

/// NFKD-normalize `raw`, trim it, and keep everything up to and including
/// the first "kg". Flattening first is what turns the page's non-breaking
/// spaces into plain ones. No "kg" means no mass.
pub fn normalize_mass(raw: &str) -> Option<String> {
    let mass: String = raw.nfkd().collect();
    let mass = mass.trim();
    mass.find("kg").map(|at| mass[..at + 2].to_string())
}

/// First raw text fragment inside the cell, untrimmed.
pub fn first_string(cell: ElementRef<'_>) -> Option<String> {
    cell.text().next().map(str::to_string)
}
