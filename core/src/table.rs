use serde::{Deserialize, Serialize};

use crate::error::ScoreError;
use crate::events::{Event, RecordFormat};
use crate::scoring::score;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub formatted_record: String,
    pub score: u32,
}

/// Formater en rekord gitt i hundredeler.
///
/// Formateringen går via heltall slik at 120.1 s blir "2:00.10" og ikke
/// bærer med seg flyttallsstøy.
pub fn format_hundredths(value: u32, format: RecordFormat) -> String {
    match format {
        RecordFormat::Decimal => format!("{}.{:02}", value / 100, value % 100),
        RecordFormat::MinutesSeconds => {
            let minutes = value / 6000;
            let seconds = (value % 6000) / 100;
            format!("{}:{:02}.{:02}", minutes, seconds, value % 100)
        }
    }
}

/// Poengtabell for en øvelse, stigende etter rekord.
pub fn generate_table(event: Event) -> Vec<TableRow> {
    let f = event.formula();
    let rows: Vec<TableRow> = (f.domain_start..=f.domain_end)
        .step_by(f.step as usize)
        .map(|v| TableRow {
            formatted_record: format_hundredths(v, f.format),
            score: score(event, v as f64 / 100.0),
        })
        .collect();
    log::debug!("table {}: {} rows", event, rows.len());
    rows
}

pub fn generate_table_label(event: &str) -> Result<Vec<TableRow>, ScoreError> {
    Ok(generate_table(event.parse()?))
}
