// core/src/convert.rs
use serde::{Deserialize, Serialize};

use crate::error::ScoreError;
use crate::events::Event;
use crate::scoring::score;

// --- RoundTo trait (offentlig, brukt av models.rs) ---
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 { return self.round(); }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// Rå feltverdier slik UI-et samler dem inn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RawInput {
    /// 100m og 80m hekk: sekunder + hundredeler
    Sprint { seconds: u32, hundredths: u32 },
    /// 800m: minutter + sekunder + hundredeler
    MiddleDistance { minutes: u32, seconds: u32, hundredths: u32 },
    /// Hopp og kast: meter direkte
    Distance { meters: f64 },
}

impl RawInput {
    fn kind(&self) -> &'static str {
        match self {
            RawInput::Sprint { .. } => "sprint",
            RawInput::MiddleDistance { .. } => "middle_distance",
            RawInput::Distance { .. } => "distance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComputedScore {
    pub record: f64,
    pub score: u32,
}

/// sek + hundredeler/100
pub fn convert_100m_time(seconds: u32, hundredths: u32) -> f64 {
    seconds as f64 + hundredths as f64 / 100.0
}

/// min*60 + sek + hundredeler/100
pub fn convert_time_to_seconds(minutes: u32, seconds: u32, hundredths: u32) -> f64 {
    minutes as f64 * 60.0 + seconds as f64 + hundredths as f64 / 100.0
}

/// Normaliser rå input til én rekordverdi for øvelsen.
///
/// Ingen plausibilitetssjekk: hundredeler > 99 eller sekunder > 59 regnes
/// bare inn. Meterverdier må være endelige og ikke-negative.
pub fn normalize(event: Event, raw: RawInput) -> Result<f64, ScoreError> {
    match (event, raw) {
        (Event::Sprint100m | Event::Hurdles80m, RawInput::Sprint { seconds, hundredths }) => {
            Ok(convert_100m_time(seconds, hundredths))
        }
        (Event::Run800m, RawInput::MiddleDistance { minutes, seconds, hundredths }) => {
            Ok(convert_time_to_seconds(minutes, seconds, hundredths))
        }
        (
            Event::HighJump | Event::LongJump | Event::JavelinBallThrow,
            RawInput::Distance { meters },
        ) => {
            if !meters.is_finite() || meters < 0.0 {
                return Err(ScoreError::InvalidRecord(meters));
            }
            Ok(meters)
        }
        (ev, other) => Err(ScoreError::InputMismatch { event: ev, input: other.kind() }),
    }
}

/// UI-inngang: rå felt → (rekord, poeng).
pub fn compute_score(event: Event, raw: RawInput) -> Result<ComputedScore, ScoreError> {
    let record = normalize(event, raw)?;
    Ok(ComputedScore { record, score: score(event, record) })
}
