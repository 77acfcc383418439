//! File backend

use super::stream::Stream;
use crate::core::{LoggerError, Options, Result};
use std::fs::OpenOptions;
use std::path::Path;

impl Stream {
    /// Opens `path` for logging, creating it if needed.
    ///
    /// Existing content is truncated unless the append option is set. Lines
    /// are written straight to the file without buffering.
    pub fn file(path: impl AsRef<Path>, options: impl Into<Options>) -> Result<Self> {
        let path = path.as_ref();
        let options = options.into();
        let append = options.append.unwrap_or(false);

        let mut open = OpenOptions::new();
        open.create(true);
        if append {
            open.append(true);
        } else {
            open.write(true).truncate(true);
        }
        let file = open
            .open(path)
            .map_err(|e| LoggerError::file_open(path, e))?;

        tracing::debug!(path = %path.display(), append, "opened log file");
        Ok(Self::from_boxed(Box::new(file), &options))
    }
}
