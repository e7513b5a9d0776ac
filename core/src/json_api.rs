// core/src/json_api.rs
//
// JSON-inn / JSON-ut for alle kjerneoperasjoner. Brukes av py-modulen og av
// integrasjonstestene (samme sti som UI-et går).
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use serde_path_to_error as spte;

use crate::config::StoreConfig;
use crate::convert::{compute_score, ComputedScore, RawInput};
use crate::events::Event;
use crate::models::ScoreRecord;
use crate::scoring::combined_score;
use crate::table::generate_table;

#[derive(Debug, Deserialize)]
struct EventInput {
    event: String,
    input: RawInput,
}

#[derive(Debug, Deserialize)]
struct SaveIn {
    #[serde(default)]
    name: String,
    #[serde(default)]
    grade: String,
    event: String,
    input: RawInput,
    /// YYYY-MM-DD; mangler den, brukes dagens dato
    #[serde(default)]
    date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
struct CombinedIn {
    first: EventInput,
    second: EventInput,
}

fn parse<T: DeserializeOwned>(json_in: &str, what: &str) -> Result<T> {
    let mut de = serde_json::Deserializer::from_str(json_in);
    spte::deserialize(&mut de)
        .map_err(|e| anyhow::anyhow!("parse error ({}) at {}: {}", what, e.path(), e.inner()))
}

fn resolve(ev: &EventInput) -> Result<(Event, ComputedScore)> {
    let event: Event = ev.event.parse()?;
    let computed = compute_score(event, ev.input)?;
    Ok((event, computed))
}

/// {"event": "...", "input": {...}} → {"record": .., "score": ..}
pub fn compute_score_json(json_in: &str) -> Result<String> {
    let parsed: EventInput = parse(json_in, "EventInput")?;
    let (_, computed) = resolve(&parsed)?;
    Ok(serde_json::to_string(&computed)?)
}

pub fn generate_table_json(event: &str) -> Result<String> {
    let ev: Event = event.parse()?;
    Ok(serde_json::to_string(&generate_table(ev))?)
}

/// Sum av to øvelser. Svar: {"first": .., "second": .., "total": ..}
pub fn combined_score_json(json_in: &str) -> Result<String> {
    let parsed: CombinedIn = parse(json_in, "CombinedIn")?;
    let (ev_a, a) = resolve(&parsed.first).context("first event")?;
    let (ev_b, b) = resolve(&parsed.second).context("second event")?;
    let total = combined_score((ev_a, a.record), (ev_b, b.record))?;
    Ok(json!({ "first": a, "second": b, "total": total }).to_string())
}

/// Beregner og lagrer én rekord. Returnerer raden slik den ble lagret.
pub fn save_record_json(json_in: &str, cfg_json: Option<&str>) -> Result<String> {
    let cfg = StoreConfig::from_optional_json(cfg_json)?;
    let parsed: SaveIn = parse(json_in, "SaveIn")?;
    let event: Event = parsed.event.parse()?;
    let computed = compute_score(event, parsed.input)?;
    let date = parsed.date.unwrap_or_else(|| chrono::Local::now().date_naive());

    let record = ScoreRecord::new(parsed.name, parsed.grade, event, computed.record, date);
    let store = cfg.open_store();
    store
        .append(&record)
        .with_context(|| format!("append to {}", store.path().display()))?;
    Ok(serde_json::to_string(&record)?)
}

pub fn load_records_json(cfg_json: Option<&str>) -> Result<String> {
    let cfg = StoreConfig::from_optional_json(cfg_json)?;
    let store = cfg.open_store();
    let rows = store
        .load_all()
        .with_context(|| format!("load {}", store.path().display()))?;
    Ok(serde_json::to_string(&rows)?)
}

/// Sletter rad `position` og returnerer den slettede raden.
pub fn delete_record_json(position: usize, cfg_json: Option<&str>) -> Result<String> {
    let cfg = StoreConfig::from_optional_json(cfg_json)?;
    let store = cfg.open_store();
    let removed = store
        .delete_at(position)
        .with_context(|| format!("delete row {} in {}", position, store.path().display()))?;
    Ok(serde_json::to_string(&removed)?)
}
