use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::json_api;

// ──────────────────────────────────────────────────────────────────────────────
// Hjelpere
// ──────────────────────────────────────────────────────────────────────────────

fn to_py_err(e: anyhow::Error) -> PyErr {
    // {:#} tar med hele kontekstkjeden
    PyValueError::new_err(format!("{:#}", e))
}

// ──────────────────────────────────────────────────────────────────────────────
// PyO3-FUNKSJONER
// ──────────────────────────────────────────────────────────────────────────────

/// Poeng direkte fra (etikett, rekord).
#[pyfunction]
fn score(event: &str, record: f64) -> PyResult<u32> {
    crate::scoring::score_label(event, record).map_err(|e| PyValueError::new_err(e.to_string()))
}

#[pyfunction]
fn compute_score_json(json_in: &str) -> PyResult<String> {
    json_api::compute_score_json(json_in).map_err(to_py_err)
}

#[pyfunction]
fn generate_table_json(event: &str) -> PyResult<String> {
    json_api::generate_table_json(event).map_err(to_py_err)
}

#[pyfunction]
fn combined_score_json(json_in: &str) -> PyResult<String> {
    json_api::combined_score_json(json_in).map_err(to_py_err)
}

#[pyfunction]
#[pyo3(signature = (json_in, cfg_json = None))]
fn save_record_json(json_in: &str, cfg_json: Option<&str>) -> PyResult<String> {
    json_api::save_record_json(json_in, cfg_json).map_err(to_py_err)
}

#[pyfunction]
#[pyo3(signature = (cfg_json = None))]
fn load_records_json(cfg_json: Option<&str>) -> PyResult<String> {
    json_api::load_records_json(cfg_json).map_err(to_py_err)
}

#[pyfunction]
#[pyo3(signature = (position, cfg_json = None))]
fn delete_record_json(position: usize, cfg_json: Option<&str>) -> PyResult<String> {
    json_api::delete_record_json(position, cfg_json).map_err(to_py_err)
}

/// Etikettene UI-et skal tilby i nedtrekkslisten.
#[pyfunction]
fn event_labels() -> Vec<&'static str> {
    crate::events::Event::ALL.iter().map(|e| e.label()).collect()
}

// ──────────────────────────────────────────────────────────────────────────────
// PyO3-MODUL
// ──────────────────────────────────────────────────────────────────────────────

#[pymodule]
fn scorecard_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(score, m)?)?;
    m.add_function(wrap_pyfunction!(compute_score_json, m)?)?;
    m.add_function(wrap_pyfunction!(generate_table_json, m)?)?;
    m.add_function(wrap_pyfunction!(combined_score_json, m)?)?;

    // Lagring
    m.add_function(wrap_pyfunction!(save_record_json, m)?)?;
    m.add_function(wrap_pyfunction!(load_records_json, m)?)?;
    m.add_function(wrap_pyfunction!(delete_record_json, m)?)?;

    m.add_function(wrap_pyfunction!(event_labels, m)?)?;
    Ok(())
}
