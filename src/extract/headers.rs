// src/extract/headers.rs

use scraper::{ElementRef, Node};

use super::TH_SELECTOR;

/// Cleaned name of one header cell, or None when the cell has nothing
/// usable.
///
/// The first line break, the first link, and the first footnote marker are
/// each skipped once; what remains contributes its text, joined with single
/// spaces. Works on the borrowed node as-is, nothing in the tree moves.
/// Names that are empty or entirely digits are stray row artifacts, not
/// column names.
pub fn column_name(cell: ElementRef<'_>) -> Option<String> {
    let mut seen_br = false;
    let mut seen_a = false;
    let mut seen_sup = false;
    let mut parts: Vec<String> = Vec::new();

    for child in cell.children() {
        match child.value() {
            Node::Text(text) => parts.push(text.text.to_string()),
            Node::Element(element) => {
                let skip = match element.name() {
                    "br" if !seen_br => {
                        seen_br = true;
                        true
                    }
                    "a" if !seen_a => {
                        seen_a = true;
                        true
                    }
                    "sup" if !seen_sup => {
                        seen_sup = true;
                        true
                    }
                    _ => false,
                };
                if !skip {
                    if let Some(kept) = ElementRef::wrap(child) {
                        parts.push(kept.text().collect());
                    }
                }
            }
            _ => {}
        }
    }

    let name = parts.join(" ").trim().to_string();
    if name.is_empty() || name.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(name)
}

/// Column names from every header cell anywhere in the table, in encounter
/// order. Header-type cells also open every data row here, so the digit-only
/// flight numbers fall out via [`column_name`]. Duplicates are kept.
pub fn extract_column_names(table: ElementRef<'_>) -> Vec<String> {
    table.select(&TH_SELECTOR).filter_map(column_name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn header_doc(cell: &str) -> Html {
        Html::parse_document(&format!("<table><tr>{}</tr></table>", cell))
    }

    fn first_th(doc: &Html) -> ElementRef<'_> {
        doc.select(&TH_SELECTOR).next().expect("fixture has a th")
    }

    #[test]
    fn test_column_name_plain() {
        let doc = header_doc(r#"<th scope="col">Launch site</th>"#);
        assert_eq!(column_name(first_th(&doc)).as_deref(), Some("Launch site"));
    }

    #[test]
    fn test_column_name_skips_break_and_link_once() {
        let doc = header_doc(r##"<th scope="col">Date and<br/>time (<a href="#">UTC</a>)</th>"##);
        assert_eq!(
            column_name(first_th(&doc)).as_deref(),
            Some("Date and time ( )")
        );
    }

    #[test]
    fn test_column_name_skips_footnote_marker() {
        let doc = header_doc(r#"<th scope="col">Version,<br/>booster<sup>[b]</sup></th>"#);
        assert_eq!(
            column_name(first_th(&doc)).as_deref(),
            Some("Version, booster")
        );
    }

    #[test]
    fn test_column_name_keeps_second_element_of_a_kind() {
        // only the first sup is skipped, the second contributes its text
        let doc = header_doc("<th>Payload<sup>[c]</sup> mass<sup>[d]</sup></th>");
        assert_eq!(
            column_name(first_th(&doc)).as_deref(),
            Some("Payload  mass [d]")
        );
    }

    #[test]
    fn test_column_name_drops_digit_and_empty_cells() {
        let doc = header_doc(r#"<th scope="row">96</th>"#);
        assert_eq!(column_name(first_th(&doc)), None);
        let doc = header_doc("<th>  </th>");
        assert_eq!(column_name(first_th(&doc)), None);
        let doc = header_doc("<th></th>");
        assert_eq!(column_name(first_th(&doc)), None);
    }

    #[test]
    fn test_extract_column_names_keeps_order_and_duplicates() {
        let doc = Html::parse_document(
            "<table>\
             <tr><th>Flight No.</th><th>Payload</th></tr>\
             <tr><th>7</th><td>x</td></tr>\
             <tr><th>Payload</th><td>y</td></tr>\
             </table>",
        );
        let table_selector = Selector::parse("table").unwrap();
        let table = doc.select(&table_selector).next().expect("table");
        assert_eq!(
            extract_column_names(table),
            vec!["Flight No.", "Payload", "Payload"]
        );
    }
}
