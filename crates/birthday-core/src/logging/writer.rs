//! Append-only JSONL writer, one file per session per day.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::entry::JsonLogEntry;

pub struct SessionLogWriter {
    session: String,
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl SessionLogWriter {
    /// Open `<logs_dir>/raw/<date>_<session>.jsonl` for appending.
    pub fn new(logs_dir: impl AsRef<Path>, session: impl Into<String>) -> io::Result<Self> {
        let session = session.into();
        let raw_dir = logs_dir.as_ref().join("raw");
        fs::create_dir_all(&raw_dir)?;

        let date = chrono::Local::now().format("%Y-%m-%d");
        let path = raw_dir.join(format!("{}_{}.jsonl", date, session));

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            session,
            writer: Mutex::new(BufWriter::new(file)),
            path,
        })
    }

    pub fn session(&self) -> &str {
        &self.session
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry as a line and flush.
    pub fn write(&self, entry: &JsonLogEntry) -> io::Result<()> {
        let json = entry
            .to_json_line()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let mut writer = self
            .writer
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log writer poisoned"))?;
        writeln!(writer, "{}", json)?;
        writer.flush()
    }

    pub fn flush(&self) -> io::Result<()> {
        match self.writer.lock() {
            Ok(mut writer) => writer.flush(),
            Err(_) => Err(io::Error::new(io::ErrorKind::Other, "log writer poisoned")),
        }
    }
}

impl Drop for SessionLogWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// Read every parseable entry from a JSONL file. Malformed lines are skipped.
pub fn read_entries(path: impl AsRef<Path>) -> io::Result<Vec<JsonLogEntry>> {
    let reader = BufReader::new(File::open(path)?);
    let mut entries = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Ok(entry) = JsonLogEntry::from_json_line(&line) {
            entries.push(entry);
        }
    }
    Ok(entries)
}
