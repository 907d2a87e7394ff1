//! Executable archive packaging.
//!
//! Bundles the compiled package subtree into a single executable jar. The
//! jar manifest descriptor is copied into the source root first because the
//! `jar` tool resolves both the manifest and the package directory relative
//! to its working directory. Bundling is by recursive traversal of the
//! package subtree, not an explicit file list.

use crate::error::{BuildError, Result};
use crate::exec::CommandExecutor;
use crate::plan::{ARCHIVE_NAME, JAR_MANIFEST_NAME, PACKAGE};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Packages compiled class files into an executable archive.
pub struct Archiver<'a> {
    source_root: &'a Utf8Path,
    jar_manifest: &'a Utf8Path,
    jar_tool: &'a str,
    executor: &'a dyn CommandExecutor,
}

impl<'a> Archiver<'a> {
    /// Creates an archiver for the given source root and manifest descriptor.
    #[must_use]
    pub fn new(
        source_root: &'a Utf8Path,
        jar_manifest: &'a Utf8Path,
        jar_tool: &'a str,
        executor: &'a dyn CommandExecutor,
    ) -> Self {
        Self {
            source_root,
            jar_manifest,
            jar_tool,
            executor,
        }
    }

    /// Produces the executable archive and returns its path.
    ///
    /// Copies the manifest descriptor into the source root, runs the `jar`
    /// tool there, and verifies the archive actually exists afterwards.
    ///
    /// # Errors
    ///
    /// Returns `PackagingFailed` if the manifest cannot be copied, the tool
    /// exits non-zero, or no archive appears at the expected path.
    pub fn archive(&self) -> Result<Utf8PathBuf> {
        let manifest_copy = self.source_root.join(JAR_MANIFEST_NAME);
        fs::copy(self.jar_manifest, &manifest_copy).map_err(|e| BuildError::PackagingFailed {
            reason: format!(
                "could not copy {} to {manifest_copy}: {e}",
                self.jar_manifest
            ),
        })?;

        let output = self.executor.run(
            self.source_root,
            self.jar_tool,
            &["cvfm", ARCHIVE_NAME, JAR_MANIFEST_NAME, PACKAGE],
        )?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BuildError::PackagingFailed {
                reason: stderr.trim().to_owned(),
            });
        }

        let archive = self.source_root.join(ARCHIVE_NAME);
        if !archive.exists() {
            return Err(BuildError::PackagingFailed {
                reason: format!("{} was not produced at {archive}", self.jar_tool),
            });
        }

        Ok(archive)
    }
}
