// src/table.rs

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Output file, written into the working directory.
pub const OUTPUT_FILE: &str = "spacex_web_scraped.csv";

/// The eleven output columns, in write order. The header names extracted
/// from the page are logged for inspection but never drive this schema; it
/// stays fixed so the file shape survives page edits.
pub const COLUMNS: [&str; 11] = [
    "Flight No.",
    "Launch site",
    "Payload",
    "Payload mass",
    "Orbit",
    "Customer",
    "Launch outcome",
    "Version Booster",
    "Booster landing",
    "Date",
    "Time",
];

/// One accepted launch row. Every field except the flight number can be
/// absent; absent serializes as an empty CSV field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchRecord {
    #[serde(rename = "Flight No.")]
    pub flight_no: String,
    #[serde(rename = "Launch site")]
    pub launch_site: Option<String>,
    #[serde(rename = "Payload")]
    pub payload: Option<String>,
    #[serde(rename = "Payload mass")]
    pub payload_mass: Option<String>,
    #[serde(rename = "Orbit")]
    pub orbit: Option<String>,
    #[serde(rename = "Customer")]
    pub customer: Option<String>,
    #[serde(rename = "Launch outcome")]
    pub launch_outcome: Option<String>,
    #[serde(rename = "Version Booster")]
    pub version_booster: Option<String>,
    #[serde(rename = "Booster landing")]
    pub booster_landing: Option<String>,
    #[serde(rename = "Date")]
    pub date: Option<String>,
    #[serde(rename = "Time")]
    pub time: Option<String>,
}

/// Launch records in the order their rows were encountered. Nothing is
/// deduplicated; a repeated flight number in the source stays repeated here.
#[derive(Debug, Default)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
}

impl LaunchTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: LaunchRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Serialize every record to `path`. The header row is written even when
    /// the table is empty.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("Failed to create `{}`", path.display()))?;

        // serialize() emits the header row before the first record; an empty
        // table never reaches that point, so write the header by hand
        if self.records.is_empty() {
            writer
                .write_record(&COLUMNS)
                .context("Failed to write header row")?;
        }
        for record in &self.records {
            writer
                .serialize(record)
                .with_context(|| format!("Failed to write record for flight {}", record.flight_no))?;
        }
        writer
            .flush()
            .with_context(|| format!("Failed to flush `{}`", path.display()))?;

        info!(rows = self.records.len(), path = %path.display(), "table written");
        Ok(())
    }

    /// Console rendering of the first `n` records, one line per record,
    /// headed by the column names.
    pub fn preview(&self, n: usize) -> String {
        let mut out = COLUMNS.join(" | ");
        for record in self.records.iter().take(n) {
            let fields = [
                record.flight_no.as_str(),
                field_or_empty(&record.launch_site),
                field_or_empty(&record.payload),
                field_or_empty(&record.payload_mass),
                field_or_empty(&record.orbit),
                field_or_empty(&record.customer),
                field_or_empty(&record.launch_outcome),
                field_or_empty(&record.version_booster),
                field_or_empty(&record.booster_landing),
                field_or_empty(&record.date),
                field_or_empty(&record.time),
            ];
            out.push('\n');
            out.push_str(&fields.join(" | "));
        }
        out
    }
}

fn field_or_empty(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn sample_record() -> LaunchRecord {
        LaunchRecord {
            flight_no: "5".to_string(),
            launch_site: Some("CCAFS".to_string()),
            payload: Some("Starlink, v1.0".to_string()),
            payload_mass: Some("15,600 kg".to_string()),
            orbit: Some("LEO".to_string()),
            customer: Some("SpaceX".to_string()),
            launch_outcome: Some("Success".to_string()),
            version_booster: Some("F9 B1049".to_string()),
            booster_landing: Some("Success".to_string()),
            date: Some("4 June 2010".to_string()),
            time: Some("18:45".to_string()),
        }
    }

    #[test]
    fn test_serialized_header_matches_columns() {
        let mut writer = csv::Writer::from_writer(vec![]);
        writer.serialize(sample_record()).expect("serialize");
        let data = String::from_utf8(writer.into_inner().expect("into_inner")).expect("utf8");

        let header = data.lines().next().expect("header line");
        assert_eq!(header, COLUMNS.join(","));
    }

    #[test]
    fn test_write_csv_quotes_embedded_commas() -> Result<()> {
        let dir = tempdir()?;
        let out = dir.path().join("launches.csv");

        let mut table = LaunchTable::new();
        table.push(sample_record());
        table.write_csv(&out)?;

        let written = fs::read_to_string(&out)?;
        let data_line = written.lines().nth(1).expect("data line");
        assert!(data_line.contains(r#""Starlink, v1.0""#));
        assert!(data_line.starts_with('5'));
        Ok(())
    }

    #[test]
    fn test_write_csv_none_becomes_empty_field() -> Result<()> {
        let dir = tempdir()?;
        let out = dir.path().join("launches.csv");

        let mut record = sample_record();
        record.customer = None;
        record.time = None;
        let mut table = LaunchTable::new();
        table.push(record);
        table.write_csv(&out)?;

        let mut reader = csv::Reader::from_path(&out)?;
        let headers = reader.headers()?.clone();
        assert_eq!(headers.len(), COLUMNS.len());

        let row = reader.records().next().expect("one data row")?;
        assert_eq!(row.len(), COLUMNS.len());
        assert_eq!(row.get(5), Some(""));
        assert_eq!(row.get(10), Some(""));
        assert_eq!(row.get(3), Some("15,600 kg"));
        Ok(())
    }

    #[test]
    fn test_empty_table_still_writes_header() -> Result<()> {
        let dir = tempdir()?;
        let out = dir.path().join("launches.csv");

        LaunchTable::new().write_csv(&out)?;

        let written = fs::read_to_string(&out)?;
        assert_eq!(written.trim_end(), COLUMNS.join(","));
        Ok(())
    }

    #[test]
    fn test_preview_caps_rows_and_keeps_header() {
        let mut table = LaunchTable::new();
        for i in 0..4 {
            let mut record = sample_record();
            record.flight_no = i.to_string();
            table.push(record);
        }

        let preview = table.preview(2);
        let lines: Vec<&str> = preview.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Flight No. | Launch site"));
        assert!(lines[1].starts_with("0 | "));
        assert!(lines[2].starts_with("1 | "));
    }
}
