//! Process-wide logger handle
//!
//! Pass loggers explicitly where you can. When a single ambient handle is
//! more practical, install it once with [`set_global`] at start-up, before
//! other threads log, and fetch it with [`global`].

use crate::appenders::Stream;
use crate::core::{LogWriter, Options};
use parking_lot::{const_rwlock, RwLock};
use std::sync::Arc;

static GLOBAL: RwLock<Option<Arc<dyn LogWriter>>> = const_rwlock(None);

/// Installs `logger` as the process-wide handle, replacing any previous one.
pub fn set_global(logger: Arc<dyn LogWriter>) {
    *GLOBAL.write() = Some(logger);
}

/// Returns the process-wide handle.
///
/// Without a prior [`set_global`], a console logger with default options is
/// created on first use and kept.
pub fn global() -> Arc<dyn LogWriter> {
    if let Some(logger) = GLOBAL.read().as_ref() {
        return Arc::clone(logger);
    }
    let mut slot = GLOBAL.write();
    let logger = slot.get_or_insert_with(|| {
        let console: Arc<dyn LogWriter> = Arc::new(Stream::console(Options::new()));
        console
    });
    Arc::clone(logger)
}
