//! Output directory staging.
//!
//! Assembles the final deliverable: a self-contained directory holding the
//! archive, the full library tree, the manifest descriptor, the launcher,
//! and an empty scratch subdirectory. The output directory is always
//! rebuilt from scratch; destructive recreation is the documented contract,
//! there is no incremental update path and no rollback on partial failure.

use crate::error::{BuildError, Result};
use crate::layout::ProjectLayout;
use crate::plan::{ARCHIVE_NAME, JAR_MANIFEST_NAME, SCRATCH_DIR};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::io::ErrorKind;

/// Handles assembly of the output directory.
pub struct Stager {
    output_dir: Utf8PathBuf,
}

impl Stager {
    /// Creates a stager targeting the given output directory.
    #[must_use]
    pub fn new(output_dir: Utf8PathBuf) -> Self {
        Self { output_dir }
    }

    /// Returns the output directory path.
    #[must_use]
    pub fn output_dir(&self) -> &Utf8Path {
        &self.output_dir
    }

    /// Destructively recreates the output directory and stages everything
    /// into it.
    ///
    /// Steps, in order: remove any pre-existing output directory, create a
    /// fresh one, copy the library tree, copy the manifest descriptor, copy
    /// the archive, copy the launcher, and create the scratch subdirectory.
    ///
    /// # Errors
    ///
    /// Returns `StagingFailed` naming the operation and path of the first
    /// filesystem step that fails.
    pub fn stage(&self, layout: &ProjectLayout, archive: &Utf8Path) -> Result<()> {
        self.prepare()?;

        copy_dir_recursive(&layout.lib_dir, &self.output_dir.join("lib"))?;
        copy_file(&layout.jar_manifest, &self.output_dir.join(JAR_MANIFEST_NAME))?;
        copy_file(archive, &self.output_dir.join(ARCHIVE_NAME))?;
        let launcher_name = layout
            .launcher
            .file_name()
            .unwrap_or("launcher.bat");
        copy_file(&layout.launcher, &self.output_dir.join(launcher_name))?;

        let scratch = self.output_dir.join(SCRATCH_DIR);
        fs::create_dir(&scratch).map_err(|e| staging_error("create", &scratch, e))?;

        Ok(())
    }

    /// Removes any pre-existing output directory and creates a fresh one.
    ///
    /// # Errors
    ///
    /// Returns `StagingFailed` if removal or creation fails.
    pub fn prepare(&self) -> Result<()> {
        match fs::remove_dir_all(&self.output_dir) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(staging_error("remove", &self.output_dir, e)),
        }

        fs::create_dir_all(&self.output_dir)
            .map_err(|e| staging_error("create", &self.output_dir, e))
    }
}

/// Copies a single file, mapping failure to a staging error.
fn copy_file(from: &Utf8Path, to: &Utf8Path) -> Result<()> {
    fs::copy(from, to)
        .map(|_| ())
        .map_err(|e| staging_error("copy", from, e))
}

/// Recursively copies a directory tree.
///
/// The whole source tree is copied as-is; the library bundle is treated as
/// opaque, with no filtering.
fn copy_dir_recursive(from: &Utf8Path, to: &Utf8Path) -> Result<()> {
    fs::create_dir_all(to).map_err(|e| staging_error("create", to, e))?;

    let entries = from
        .read_dir_utf8()
        .map_err(|e| staging_error("read", from, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| staging_error("read", from, e))?;
        let dest = to.join(entry.file_name());
        let file_type = entry
            .file_type()
            .map_err(|e| staging_error("read", entry.path(), e))?;

        if file_type.is_dir() {
            copy_dir_recursive(entry.path(), &dest)?;
        } else {
            copy_file(entry.path(), &dest)?;
        }
    }

    Ok(())
}

fn staging_error(operation: &'static str, path: &Utf8Path, source: std::io::Error) -> BuildError {
    BuildError::StagingFailed {
        operation,
        path: path.to_owned(),
        source,
    }
}
