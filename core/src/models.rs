use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::convert::RoundTo;
use crate::events::Event;
use crate::scoring::score;

/// Én lagret rad. Feltrekkefølgen er kolonnerekkefølgen i CSV-filen.
///
/// Aliasene lar oss lese filer skrevet av eldre versjoner av skjemaet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    #[serde(alias = "名前")]
    pub name: String,
    #[serde(alias = "学年")]
    pub grade: String,
    #[serde(alias = "種目")]
    pub event: Event,
    #[serde(alias = "記録")]
    pub record: f64,
    #[serde(alias = "得点")]
    pub score: u32,
    #[serde(alias = "日付")]
    pub date: NaiveDate,
}

impl ScoreRecord {
    /// Poeng regnes av rå rekord; rekorden lagres avrundet til 2 desimaler.
    pub fn new(
        name: impl Into<String>,
        grade: impl Into<String>,
        event: Event,
        record: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            grade: grade.into(),
            event,
            record: record.round_to(2),
            score: score(event, record),
            date,
        }
    }

    /// Feltene slik de skrives til fil: rekord med 2 desimaler, dato som YYYY-MM-DD.
    pub fn to_fields(&self) -> [String; 6] {
        [
            self.name.clone(),
            self.grade.clone(),
            self.event.label().to_string(),
            format!("{:.2}", self.record),
            self.score.to_string(),
            self.date.format("%Y-%m-%d").to_string(),
        ]
    }
}
