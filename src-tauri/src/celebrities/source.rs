// Record sources
// The list is populated once from a static JSON document: an array of
// celebrity objects. Sources read and decode it; they never validate content.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use super::record::Celebrity;
use crate::error::Result;

/// Something that can produce the initial celebrity document.
pub trait RecordSource {
    /// Human-readable location, used in log lines
    fn describe(&self) -> String;

    /// Read and decode the document
    fn fetch(&self) -> Result<Vec<Celebrity>>;
}

/// JSON document on the local filesystem (the bundled static asset).
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<Vec<Celebrity>> {
        let file = File::open(&self.path)?;
        let records = serde_json::from_reader(BufReader::new(file))?;
        Ok(records)
    }
}

/// Records already in memory
#[derive(Debug, Clone, Default)]
pub struct StaticSource(pub Vec<Celebrity>);

impl RecordSource for StaticSource {
    fn describe(&self) -> String {
        format!("in-memory ({} records)", self.0.len())
    }

    fn fetch(&self) -> Result<Vec<Celebrity>> {
        Ok(self.0.clone())
    }
}
