// core/src/events.rs
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::ScoreError;

/// Laveste poengsum en øvelse kan gi.
pub const SCORE_FLOOR: i64 = 50;

/// De seks øvelsene skjemaet kjenner.
///
/// Serialiseres med de faste etikettene (`100m`, `800m`, ...). Ved lesing
/// godtas også etikettene fra eldre versjoner av skjemaet, slik at gamle
/// CSV-filer kan lastes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Event {
    #[serde(rename = "100m")]
    Sprint100m,
    #[serde(rename = "800m")]
    Run800m,
    #[serde(rename = "80mHurdle", alias = "80mハードル")]
    Hurdles80m,
    #[serde(rename = "HighJump", alias = "走高跳")]
    HighJump,
    #[serde(rename = "LongJump", alias = "走幅跳")]
    LongJump,
    #[serde(rename = "JavelinBallThrow", alias = "ジャベリックボール投")]
    JavelinBallThrow,
}

/// Hvordan en rekord vises i tabellen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    /// "S.SS" – sekunder eller meter med to desimaler
    Decimal,
    /// "M:SS.ss" – minutter:sekunder.hundredeler
    MinutesSeconds,
}

/// Fast formel og tabelldomene for en øvelse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventFormula {
    pub slope: f64,
    pub intercept: f64,
    pub floor: i64,
    /// Tabelldomene i hundredeler av enheten (inklusivt)
    pub domain_start: u32,
    pub domain_end: u32,
    pub step: u32,
    pub format: RecordFormat,
}

impl Event {
    pub const ALL: [Event; 6] = [
        Event::Sprint100m,
        Event::Run800m,
        Event::Hurdles80m,
        Event::HighJump,
        Event::LongJump,
        Event::JavelinBallThrow,
    ];

    /// Etiketten som skrives til fil og vises i UI.
    pub fn label(self) -> &'static str {
        match self {
            Event::Sprint100m => "100m",
            Event::Run800m => "800m",
            Event::Hurdles80m => "80mHurdle",
            Event::HighJump => "HighJump",
            Event::LongJump => "LongJump",
            Event::JavelinBallThrow => "JavelinBallThrow",
        }
    }

    /// Etiketten brukt av eldre versjoner av skjemaet.
    pub fn legacy_label(self) -> &'static str {
        match self {
            Event::Sprint100m => "100m",
            Event::Run800m => "800m",
            Event::Hurdles80m => "80mハードル",
            Event::HighJump => "走高跳",
            Event::LongJump => "走幅跳",
            Event::JavelinBallThrow => "ジャベリックボール投",
        }
    }

    /// Tidsøvelse (lavere rekord = bedre).
    pub fn is_timed(self) -> bool {
        matches!(self, Event::Sprint100m | Event::Run800m | Event::Hurdles80m)
    }

    pub fn formula(self) -> EventFormula {
        let (slope, intercept, domain_start, domain_end, step, format) = match self {
            Event::Sprint100m => (-155.0, 3250.0, 1100, 1700, 1, RecordFormat::Decimal),
            Event::Run800m => (-9.44, 2500.0, 12000, 30000, 10, RecordFormat::MinutesSeconds),
            Event::Hurdles80m => (-170.94, 3342.7, 1100, 1900, 1, RecordFormat::Decimal),
            Event::HighJump => (1153.8, -465.38, 100, 200, 1, RecordFormat::Decimal),
            Event::LongJump => (280.11, -226.61, 200, 650, 1, RecordFormat::Decimal),
            Event::JavelinBallThrow => (20.325, 60.163, 1000, 5500, 10, RecordFormat::Decimal),
        };
        EventFormula {
            slope,
            intercept,
            floor: SCORE_FLOOR,
            domain_start,
            domain_end,
            step,
            format,
        }
    }
}

static LABELS: Lazy<HashMap<&'static str, Event>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for ev in Event::ALL {
        m.insert(ev.label(), ev);
        m.insert(ev.legacy_label(), ev);
    }
    m
});

impl FromStr for Event {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LABELS
            .get(s.trim())
            .copied()
            .ok_or_else(|| ScoreError::UnsupportedEvent(s.to_string()))
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
