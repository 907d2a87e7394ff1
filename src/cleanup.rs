//! Source tree cleanup.
//!
//! The archiver leaves two transient artifacts behind in the source root:
//! the archive itself and the manifest descriptor copy. Cleanup removes
//! both so the source tree returns to its pre-build state, apart from the
//! freshly compiled class files. It runs best-effort after the rest of the
//! pipeline regardless of outcome, so targets that were never created are
//! tolerated.

use crate::error::{BuildError, Result};
use crate::plan::{ARCHIVE_NAME, JAR_MANIFEST_NAME};
use camino::Utf8Path;
use std::fs;
use std::io::ErrorKind;

/// Removes transient build artifacts from the source root.
///
/// A missing target is not an error; an earlier pipeline failure may mean
/// it was never created. Any other removal failure is reported, not
/// swallowed.
///
/// # Errors
///
/// Returns `CleanupFailed` naming the first artifact that could not be
/// removed.
pub fn clean_source_tree(source_root: &Utf8Path) -> Result<()> {
    for name in [ARCHIVE_NAME, JAR_MANIFEST_NAME] {
        let path = source_root.join(name);
        match fs::remove_file(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(BuildError::CleanupFailed { path, source: e }),
        }
    }
    Ok(())
}
