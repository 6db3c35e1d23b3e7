// src/extract/rows.rs

use scraper::ElementRef;
use thiserror::Error;
use tracing::{trace, warn};

use super::fields::{
    booster_version, date_time, first_string, link_or_text, payload_mass, sole_string,
};
use super::{TD_SELECTOR, TH_SELECTOR, TR_SELECTOR};
use crate::schema::PageSchema;
use crate::table::{LaunchRecord, LaunchTable};

/// A row that passed acceptance but cannot be extracted.
#[derive(Debug, Error)]
pub enum RowError {
    #[error("flight {flight_no}: row has {found} data cells, extraction needs {required}")]
    TooFewCells {
        flight_no: String,
        found: usize,
        required: usize,
    },
}

/// Flight number of an extractable row: the first header cell's sole-string
/// text, trimmed, when that text is entirely digits. Column headers and
/// rowspan continuation rows fail this and are not launch rows.
fn flight_number(row: ElementRef<'_>) -> Option<String> {
    let th = row.select(&TH_SELECTOR).next()?;
    let number = sole_string(th)?.trim();
    if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(number.to_string())
}

fn extract_record(
    flight_no: String,
    cells: &[ElementRef<'_>],
    required: usize,
) -> Result<LaunchRecord, RowError> {
    if cells.len() < required {
        return Err(RowError::TooFewCells {
            flight_no,
            found: cells.len(),
            required,
        });
    }

    let (date, time) = date_time(cells[0]);
    Ok(LaunchRecord {
        flight_no,
        launch_site: link_or_text(cells[2]),
        payload: link_or_text(cells[3]),
        payload_mass: payload_mass(cells[4]),
        orbit: link_or_text(cells[5]),
        customer: cells.get(6).copied().and_then(link_or_text),
        launch_outcome: cells.get(7).copied().and_then(first_string),
        version_booster: booster_version(cells[1]),
        booster_landing: cells.get(8).copied().and_then(first_string),
        date,
        time,
    })
}

/// Walk every row of the launch table in document order and collect the
/// accepted ones. Rows failing acceptance are not launches and disappear
/// silently; accepted rows that are short of `required_cells` are logged
/// and skipped whole, never extracted partially.
#[tracing::instrument(level = "info", skip_all, fields(schema = schema.name))]
pub fn extract_rows(table: ElementRef<'_>, schema: &PageSchema) -> LaunchTable {
    let mut launches = LaunchTable::new();

    for row in table.select(&TR_SELECTOR) {
        let flight_no = match flight_number(row) {
            Some(number) => number,
            None => continue,
        };
        trace!(flight_no = %flight_no, "row accepted");

        let cells: Vec<ElementRef<'_>> = row.select(&TD_SELECTOR).collect();
        match extract_record(flight_no, &cells, schema.required_cells) {
            Ok(record) => launches.push(record),
            Err(err) => warn!(%err, "skipping malformed row"),
        }
    }

    launches
}
