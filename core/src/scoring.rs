use crate::error::ScoreError;
use crate::events::Event;

/// Poeng for en rekord: affin formel, trunkert mot null, gulv på 50.
pub fn score(event: Event, record: f64) -> u32 {
    let f = event.formula();
    let raw = f.slope * record + f.intercept;
    // `as i64` trunkerer mot null (og metter ved NaN/inf)
    let truncated = raw as i64;
    let val = truncated.max(f.floor);
    log::trace!("score {} record={:.2} raw={:.3} -> {}", event, record, raw, val);
    val.min(u32::MAX as i64) as u32
}

/// Som `score`, men med øvelsen som etikett fra UI.
pub fn score_label(event: &str, record: f64) -> Result<u32, ScoreError> {
    let ev: Event = event.parse()?;
    Ok(score(ev, record))
}

/// Sammenlagt poengsum for to ulike øvelser (summen av begge).
pub fn combined_score(first: (Event, f64), second: (Event, f64)) -> Result<u32, ScoreError> {
    if first.0 == second.0 {
        return Err(ScoreError::DuplicateEvent(first.0));
    }
    let a = score(first.0, first.1);
    let b = score(second.0, second.1);
    log::debug!("combined {}+{} = {}+{}", first.0, second.0, a, b);
    Ok(a.saturating_add(b))
}
