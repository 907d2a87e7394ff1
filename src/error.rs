//! Error types for the Kryptos3dit build pipeline.
//!
//! This module defines one semantic error variant per failure category of the
//! pipeline, so that every stage failure names the unit, path, or operation
//! involved. Each category maps to a distinct process exit code.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur while running the build pipeline.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A required third-party library is absent from the library directory.
    #[error("required library {name} is missing from {lib_dir}")]
    MissingDependency {
        /// Name of the missing library.
        name: String,
        /// The library directory that was checked.
        lib_dir: Utf8PathBuf,
    },

    /// The dependency manifest file was not found at the expected location.
    #[error("dependency manifest not found at {path}")]
    ManifestNotFound {
        /// Path where the manifest was expected.
        path: Utf8PathBuf,
    },

    /// The dependency manifest could not be parsed.
    #[error("invalid dependency manifest at {path}: {reason}")]
    InvalidManifest {
        /// Path to the malformed manifest.
        path: Utf8PathBuf,
        /// Description of the parse error.
        reason: String,
    },

    /// A compiler invocation for a single unit returned a non-zero status.
    #[error("compilation failed for {unit}: {reason}")]
    CompilationFailed {
        /// Source path of the unit that failed to compile.
        unit: String,
        /// Captured compiler diagnostics.
        reason: String,
    },

    /// The archiver step failed to produce the executable archive.
    #[error("packaging failed: {reason}")]
    PackagingFailed {
        /// Description of the packaging failure.
        reason: String,
    },

    /// A filesystem operation during output staging failed.
    #[error("staging failed: could not {operation} {path}")]
    StagingFailed {
        /// The operation that failed (e.g. "remove", "copy").
        operation: &'static str,
        /// The path the operation targeted.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Removal of a transient build artifact from the source tree failed.
    #[error("cleanup failed: could not remove {path}")]
    CleanupFailed {
        /// The artifact that could not be removed.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An I/O operation outside the categories above failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Test stub received an unexpected or mismatched command invocation.
    #[cfg(any(test, feature = "test-support"))]
    #[error("stub mismatch: {message}")]
    StubMismatch {
        /// Description of what was expected versus what was received.
        message: String,
    },
}

impl BuildError {
    /// Returns the process exit code for this failure category.
    ///
    /// Each category has a distinct code so that scripts wrapping the build
    /// can tell a missing dependency apart from a broken compile or a
    /// staging problem.
    ///
    /// # Examples
    ///
    /// ```
    /// use camino::Utf8PathBuf;
    /// use kryptos_build::error::BuildError;
    ///
    /// let err = BuildError::MissingDependency {
    ///     name: "javafx-sdk-11.0.2".to_owned(),
    ///     lib_dir: Utf8PathBuf::from("build/lib"),
    /// };
    /// assert_eq!(err.exit_code(), 2);
    /// ```
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingDependency { .. }
            | Self::ManifestNotFound { .. }
            | Self::InvalidManifest { .. } => 2,
            Self::CompilationFailed { .. } => 3,
            Self::PackagingFailed { .. } => 4,
            Self::StagingFailed { .. } => 5,
            Self::CleanupFailed { .. } => 6,
            Self::Io(_) => 1,
            #[cfg(any(test, feature = "test-support"))]
            Self::StubMismatch { .. } => 1,
        }
    }
}

/// Result type alias using [`BuildError`].
pub type Result<T> = std::result::Result<T, BuildError>;
