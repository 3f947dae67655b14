//! File-based reading source.
//!
//! Replays readings from a JSON file, reloading whenever the file changes.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::{info, warn};

use super::{parse_records, ReadingSource};
use crate::data::Reading;

/// A source that reads a JSON array of readings from disk.
///
/// The source tracks the file's modification time and only returns a new
/// batch when the file has been updated. See [`super::RawReading`] for the
/// accepted record format.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    description: String,
    last_error: Option<String>,
    last_modified: Option<SystemTime>,
}

impl FileSource {
    /// Create a new file source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self {
            path,
            description,
            last_error: None,
            last_modified: None,
        }
    }

    /// Returns the path being replayed.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Force the next poll to re-read the file.
    pub fn invalidate(&mut self) {
        self.last_modified = None;
    }

    fn get_modified_time(&self) -> Option<SystemTime> {
        fs::metadata(&self.path).ok()?.modified().ok()
    }

    fn read_file(&mut self) -> Option<Vec<Reading>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                self.last_error = Some(format!("Read error: {}", e));
                return None;
            }
        };

        match parse_records(&content) {
            Ok(readings) => {
                info!(path = %self.path.display(), count = readings.len(), "loaded readings");
                self.last_error = None;
                Some(readings)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "rejected readings file");
                self.last_error = Some(format!("Parse error: {}", e));
                None
            }
        }
    }
}

impl ReadingSource for FileSource {
    fn poll(&mut self) -> Option<Vec<Reading>> {
        let current_modified = self.get_modified_time();

        let file_changed = match (&self.last_modified, &current_modified) {
            (None, _) => true,        // First poll, always read
            (Some(_), None) => false, // File disappeared, keep what we have
            (Some(last), Some(current)) => current > last,
        };

        if !file_changed {
            return None;
        }

        // Recorded even on failure so a broken file is read once per change
        self.last_modified = current_modified;
        self.read_file()
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
