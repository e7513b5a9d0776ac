// core/src/lib.rs
pub mod config;
pub mod convert;
pub mod error;
pub mod events;
pub mod json_api;
pub mod models;
pub mod scoring;
pub mod storage;
pub mod table;

#[cfg(feature = "python")]
mod py;

pub use config::StoreConfig;
pub use convert::{
    compute_score, convert_100m_time, convert_time_to_seconds, normalize, ComputedScore, RawInput,
    RoundTo,
};
pub use error::{ConfigError, ScoreError, StoreError};
pub use events::{Event, EventFormula, RecordFormat, SCORE_FLOOR};
pub use json_api::{
    combined_score_json, compute_score_json, delete_record_json, generate_table_json,
    load_records_json, save_record_json,
};
pub use models::ScoreRecord;
pub use scoring::{combined_score, score, score_label};
pub use storage::ScoreStore;
pub use table::{format_hundredths, generate_table, generate_table_label, TableRow};
