// src/schema/page.rs

use anyhow::{bail, Result};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Where one scrape target sits inside one page revision.
///
/// Everything positional about the page is collected here rather than spread
/// through the extraction code. Swapping revisions means shipping a new
/// descriptor, not hunting for magic numbers.
#[derive(Debug, Clone)]
pub struct PageSchema {
    /// Short name for log lines.
    pub name: &'static str,
    /// MediaWiki revision id (`oldid`) the positions below were verified on.
    pub revision: u64,
    /// Attribute-exact selector for candidate tables. A table carrying extra
    /// class tokens on top of these does not match.
    pub table_selector: &'static str,
    /// Candidate tables that must exist before `table_index` is trusted.
    pub min_tables: usize,
    /// Zero-based index of the target among the candidates. Must stay below
    /// `min_tables`.
    pub table_index: usize,
    /// Data cells a complete launch row carries.
    pub data_cells: usize,
    /// Leading data cells a row must have to be extracted at all; the cells
    /// past this point hold fields that may be absent.
    pub required_cells: usize,
}

/// Launch-record table of the pinned Falcon 9 / Falcon Heavy list revision.
pub static FALCON_LAUNCHES: PageSchema = PageSchema {
    name: "falcon_launches",
    revision: 1027686922,
    table_selector: r#"table[class="wikitable plainrowheaders collapsible"]"#,
    min_tables: 3,
    table_index: 2,
    data_cells: 9,
    required_cells: 6,
};

impl PageSchema {
    /// Find the target table in `doc`.
    ///
    /// Fewer than `min_tables` matching tables means the page no longer looks
    /// like the verified revision, and indexing into it would be a guess.
    pub fn locate<'a>(&self, doc: &'a Html) -> Result<ElementRef<'a>> {
        let selector =
            Selector::parse(self.table_selector).expect("Invalid table selector in page schema");
        let tables: Vec<ElementRef<'a>> = doc.select(&selector).collect();
        debug!(
            schema = self.name,
            found = tables.len(),
            "matched candidate tables"
        );

        if tables.len() < self.min_tables {
            bail!(
                "Expected launch record table not found: {} matching tables on page, need at least {}",
                tables.len(),
                self.min_tables
            );
        }
        Ok(tables[self.table_index])
    }
}
