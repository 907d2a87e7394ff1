//! Dependency validation.
//!
//! A fail-fast precondition gate: every library named by the manifest must
//! exist as a direct child of the library directory before any compilation
//! starts. The validator never fetches or installs anything.

use crate::error::{BuildError, Result};
use crate::manifest::DependencyManifest;
use camino::Utf8Path;

/// Checks that every required library is present in the library directory.
///
/// Names are checked in declaration order and the first missing one aborts
/// the check; remaining names are not examined. The library directory is
/// probed directly on each run, never cached.
///
/// # Errors
///
/// Returns `MissingDependency` naming the first absent library.
///
/// # Examples
///
/// ```no_run
/// use camino::Utf8Path;
/// use kryptos_build::manifest::DependencyManifest;
/// use kryptos_build::validator::verify_dependencies;
///
/// let manifest = DependencyManifest::load(Utf8Path::new("build/depend.json"))?;
/// verify_dependencies(&manifest, Utf8Path::new("build/lib"))?;
/// # Ok::<(), kryptos_build::error::BuildError>(())
/// ```
pub fn verify_dependencies(manifest: &DependencyManifest, lib_dir: &Utf8Path) -> Result<()> {
    for name in manifest.required() {
        if !lib_dir.join(name).exists() {
            return Err(BuildError::MissingDependency {
                name: name.clone(),
                lib_dir: lib_dir.to_owned(),
            });
        }
    }
    Ok(())
}
