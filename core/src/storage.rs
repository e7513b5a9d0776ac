use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::models::ScoreRecord;

/// Kolonnerekkefølge i filen.
pub const HEADERS: [&str; 6] = ["name", "grade", "event", "record", "score", "date"];

/// CSV-fil med lagrede rekorder. Eier hele samlingen; hver lesing går til disk.
///
/// Ingen låsing: to samtidige skrivere kan miste en rad.
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn has_content(&self) -> bool {
        fs::metadata(&self.path).map(|m| m.len() > 0).unwrap_or(false)
    }

    /// Legger til én rad. Ny (eller tom) fil får header først.
    pub fn append(&self, record: &ScoreRecord) -> Result<(), StoreError> {
        let fresh = !self.has_content();
        let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(file);
        if fresh {
            wtr.write_record(HEADERS)?;
        }
        wtr.write_record(record.to_fields())?;
        wtr.flush()?;
        log::info!(
            "✅ Rekord lagret til {} ({} {} {:.2} -> {})",
            self.path.display(),
            record.name,
            record.event,
            record.record,
            record.score
        );
        Ok(())
    }

    /// Leser alle rader i filrekkefølge. Mangler filen, er samlingen tom.
    pub fn load_all(&self) -> Result<Vec<ScoreRecord>, StoreError> {
        if !self.path.exists() {
            log::debug!("⚠️ Fant ikke {}, returnerer tom liste", self.path.display());
            return Ok(Vec::new());
        }
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)?;
        let mut out: Vec<ScoreRecord> = Vec::new();
        for row in rdr.deserialize() {
            out.push(row?);
        }
        log::debug!("📂 {} rader lastet fra {}", out.len(), self.path.display());
        Ok(out)
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.load_all()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    /// Sletter rad nr. `position` (0-basert) og skriver hele filen på nytt.
    /// Utenfor rekkevidde gir feil og filen røres ikke.
    pub fn delete_at(&self, position: usize) -> Result<ScoreRecord, StoreError> {
        let mut rows = self.load_all()?;
        if position >= rows.len() {
            return Err(StoreError::PositionOutOfRange { position, len: rows.len() });
        }
        let removed = rows.remove(position);
        self.rewrite(&rows)?;
        log::info!(
            "🗑️ Slettet rad {} ({} {}) fra {}",
            position,
            removed.name,
            removed.event,
            self.path.display()
        );
        Ok(removed)
    }

    fn rewrite(&self, rows: &[ScoreRecord]) -> Result<(), StoreError> {
        let mut wtr = csv::WriterBuilder::new().has_headers(false).from_path(&self.path)?;
        wtr.write_record(HEADERS)?;
        for r in rows {
            wtr.write_record(r.to_fields())?;
        }
        wtr.flush()?;
        Ok(())
    }
}
