// File: src/persistence.rs
use crate::core::session::SessionState;
use crate::core::types::Keyword;
use crate::errors::Error;
use log::info;
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

const EXPORT_HEADER: &str = "keyword";

/// Writes the session snapshot. The bytes go through a temp file in the
/// target directory first, so a crash mid-write cannot clobber an existing
/// snapshot.
pub fn save_session(session: &SessionState, path: &Path) -> Result<(), Error> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let writer = BufWriter::new(&temp_file);
    bincode::serialize_into(writer, session)?;
    temp_file.persist(path).map_err(|e| Error::Io(e.error))?;

    info!("session snapshot written to '{}'", path.display());
    Ok(())
}

/// Reads a session snapshot back. A missing file gets its own error so the
/// import action can tell the user exactly that.
pub fn load_session(path: &Path) -> Result<SessionState, Error> {
    if !path.exists() {
        return Err(Error::SnapshotNotFound(path.to_path_buf()));
    }
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(bincode::deserialize_from(reader)?)
}

/// Exports the keyword set as a single-column table: a header row, then one
/// keyword per row.
pub fn export_keywords(keywords: &[Keyword], path: &Path) -> Result<(), Error> {
    let mut file = File::create(path)?;
    writeln!(file, "{}", EXPORT_HEADER)?;
    for keyword in keywords {
        writeln!(file, "{}", keyword)?;
    }
    info!("exported {} keyword(s) to '{}'", keywords.len(), path.display());
    Ok(())
}

/// Reads an exported keyword table back into a deduplicated sequence.
pub fn import_keywords(path: &Path) -> Result<Vec<Keyword>, Error> {
    let file = File::open(path)?;
    let mut seen = HashSet::new();
    let mut keywords = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || (index == 0 && trimmed == EXPORT_HEADER) {
            continue;
        }
        if seen.insert(trimmed.to_string()) {
            keywords.push(trimmed.to_string());
        }
    }
    Ok(keywords)
}
