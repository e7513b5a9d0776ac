use thiserror::Error;

use crate::events::Event;

/// Feil fra poengberegning og konvertering av rå input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoreError {
    #[error("unsupported event: {0:?}")]
    UnsupportedEvent(String),

    #[error("input {input} does not fit event {event}")]
    InputMismatch { event: Event, input: &'static str },

    /// Negativ eller ikke-endelig meterverdi.
    #[error("invalid record value: {0}")]
    InvalidRecord(f64),

    #[error("event {0} used twice in combined score")]
    DuplicateEvent(Event),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("position {position} out of range (store has {len} rows)")]
    PositionOutOfRange { position: usize, len: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parse error (StoreConfig) at {path}: {message}")]
    Parse { path: String, message: String },
}
