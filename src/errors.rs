// File: src/errors.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for processing, session, and persistence failures.
/// Nothing here is fatal: every variant is reported to the user and the
/// current action simply stops.
#[derive(Debug, Error)]
pub enum Error {
    #[error("input produced no keywords")]
    EmptyInput,
    #[error("keyword '{0}' is not part of the current set")]
    UnknownKeyword(String),
    #[error("no session snapshot at '{}'", .0.display())]
    SnapshotNotFound(PathBuf),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("snapshot encoding failed: {0}")]
    Snapshot(#[from] bincode::Error),
}
