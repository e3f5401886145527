use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::models::Vacancy;

/// Appends vacancies to a JSON Lines file, one object per line. The file
/// stays parseable line by line no matter how many records land in it.
pub struct JsonlSink {
    path: PathBuf,
}

impl JsonlSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonlSink { path: path.into() }
    }

    /// Append one serialized record. The destination is created on first
    /// use; an unwritable destination is an explicit error, never silence.
    pub fn append(&self, vacancy: &Vacancy) -> Result<(), AppError> {
        let line = serde_json::to_string(vacancy)
            .map_err(|e| AppError::Persistence(e.to_string()))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }

    /// Read every previously saved record back. Blank lines are skipped; a
    /// malformed line is a parse error.
    pub fn read_all(path: &Path) -> Result<Vec<Vacancy>, AppError> {
        let reader = BufReader::new(File::open(path)?);
        let mut vacancies = Vec::new();

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let vacancy = serde_json::from_str(&line)
                .map_err(|e| AppError::Parse(format!("bad line in {}: {e}", path.display())))?;
            vacancies.push(vacancy);
        }

        Ok(vacancies)
    }
}
