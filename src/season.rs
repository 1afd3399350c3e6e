//! The loaded season: an immutable, ordered snapshot of match records.
//!
//! Loading is all-or-nothing. The header line is skipped, every data line is
//! parsed in file order, and the first malformed line aborts the load.

use crate::error::StatsError;
use crate::record::MatchRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Every match of a season, in file order. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Season {
    records: Vec<MatchRecord>,
}

impl Season {
    /// Read a season from CSV text with one header line.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, StatsError> {
        read_records(reader, Path::new("<input>"))
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<MatchRecord>> for Season {
    fn from(records: Vec<MatchRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a Season {
    type Item = &'a MatchRecord;
    type IntoIter = std::slice::Iter<'a, MatchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Load a season from a CSV file.
pub fn load_season(path: impl AsRef<Path>) -> Result<Season, StatsError> {
    let path = path.as_ref();
    log::debug!("Loading season from {}", path.display());

    let file = File::open(path).map_err(|source| StatsError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let season = read_records(file, path)?;

    log::info!("Loaded {} records from {}", season.len(), path.display());
    Ok(season)
}

fn read_records<R: Read>(reader: R, path: &Path) -> Result<Season, StatsError> {
    // Field count is checked per record so the error names the line.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in reader.records() {
        let fields = result.map_err(|e| csv_error(e, path))?;
        let line = fields.position().map_or(0, |pos| pos.line());
        records.push(MatchRecord::from_csv_record(&fields, line)?);
    }

    Ok(Season::from(records))
}

fn csv_error(err: csv::Error, path: &Path) -> StatsError {
    let line = err.position().map_or(0, |pos| pos.line());
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => StatsError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        },
        _ => StatsError::malformed(line, reason),
    }
}
