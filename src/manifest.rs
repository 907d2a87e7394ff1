//! Dependency manifest loading.
//!
//! The manifest (`depend.json`) lists the third-party libraries the build
//! requires, as an ordered sequence of directory or jar names under the
//! library directory. The schema is deliberately minimal: a single `list`
//! key, no versioning, no nesting.

use crate::error::{BuildError, Result};
use camino::Utf8Path;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;

/// The set of required third-party library names, in declaration order.
///
/// Loaded once at pipeline start and immutable thereafter.
#[derive(Debug, Clone, Deserialize)]
pub struct DependencyManifest {
    /// Ordered names of required libraries.
    list: Vec<String>,
}

impl DependencyManifest {
    /// Loads and parses the manifest from the given path.
    ///
    /// # Errors
    ///
    /// Returns `ManifestNotFound` if the file does not exist and
    /// `InvalidManifest` if it is not valid JSON for the expected schema.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use camino::Utf8Path;
    /// use kryptos_build::manifest::DependencyManifest;
    ///
    /// let manifest = DependencyManifest::load(Utf8Path::new("build/depend.json"))?;
    /// for name in manifest.required() {
    ///     println!("requires {name}");
    /// }
    /// # Ok::<(), kryptos_build::error::BuildError>(())
    /// ```
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                BuildError::ManifestNotFound {
                    path: path.to_owned(),
                }
            } else {
                BuildError::Io(e)
            }
        })?;

        serde_json::from_str(&contents).map_err(|e| BuildError::InvalidManifest {
            path: path.to_owned(),
            reason: e.to_string(),
        })
    }

    /// Returns the required library names in declaration order.
    #[must_use]
    pub fn required(&self) -> &[String] {
        &self.list
    }
}
