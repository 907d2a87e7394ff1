//! Project layout resolution.
//!
//! The pipeline operates on a fixed directory shape: a project root holding
//! `build/` (working directory with the manifest, library tree, and
//! launcher), `src/` (the Java source tree, which is also the compiler
//! output root and the archiver's working directory), and `output/` (the
//! final deliverable). Every path can be overridden individually on the
//! command line.

use crate::cli::Cli;
use crate::error::{BuildError, Result};
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};

/// Resolved filesystem paths for one pipeline run.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    /// Root of the Java source tree (shared compiler output root).
    pub source_root: Utf8PathBuf,
    /// Directory holding the third-party library tree.
    pub lib_dir: Utf8PathBuf,
    /// The final deliverable directory, destructively recreated each run.
    pub output_dir: Utf8PathBuf,
    /// Path to the dependency manifest (`depend.json`).
    pub dependency_manifest: Utf8PathBuf,
    /// Path to the jar manifest descriptor (`manifest.txt`).
    pub jar_manifest: Utf8PathBuf,
    /// Path to the launcher script, copied opaquely into the output.
    pub launcher: Utf8PathBuf,
}

impl ProjectLayout {
    /// Builds the default layout under the given project root.
    ///
    /// # Examples
    ///
    /// ```
    /// use camino::Utf8Path;
    /// use kryptos_build::layout::ProjectLayout;
    ///
    /// let layout = ProjectLayout::from_root(Utf8Path::new("/project"));
    /// assert_eq!(layout.source_root, "/project/src");
    /// assert_eq!(layout.lib_dir, "/project/build/lib");
    /// ```
    #[must_use]
    pub fn from_root(root: &Utf8Path) -> Self {
        let build_dir = root.join("build");
        Self {
            source_root: root.join("src"),
            lib_dir: build_dir.join("lib"),
            output_dir: root.join("output"),
            dependency_manifest: build_dir.join("depend.json"),
            jar_manifest: build_dir.join("manifest.txt"),
            launcher: build_dir.join("launcher.bat"),
        }
    }

    /// Resolves the layout from CLI arguments, applying per-path overrides.
    ///
    /// Relative paths (including the default project root of `.`) are
    /// resolved against the invoking directory. The compiler and archiver
    /// run their tools inside the source root, so every layout path must
    /// stand on its own rather than depend on the tool's working directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the current directory cannot be determined or
    /// is not valid UTF-8.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut layout = Self::from_root(&absolutize(&cli.project_root)?);
        if let Some(lib_dir) = &cli.lib_dir {
            layout.lib_dir = absolutize(lib_dir)?;
        }
        if let Some(output_dir) = &cli.output_dir {
            layout.output_dir = absolutize(output_dir)?;
        }
        if let Some(manifest) = &cli.manifest {
            layout.dependency_manifest = absolutize(manifest)?;
        }
        if let Some(jar_manifest) = &cli.jar_manifest {
            layout.jar_manifest = absolutize(jar_manifest)?;
        }
        if let Some(launcher) = &cli.launcher {
            layout.launcher = absolutize(launcher)?;
        }
        Ok(layout)
    }
}

/// Anchors a relative path at the invoking directory, folding away `.` and
/// `..` components. Absolute paths pass through untouched.
fn absolutize(path: &Utf8Path) -> Result<Utf8PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }
    let cwd = Utf8PathBuf::try_from(std::env::current_dir()?)
        .map_err(|err| BuildError::Io(err.into_io_error()))?;
    let mut absolute = cwd;
    for component in path.components() {
        match component {
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir => {
                absolute.pop();
            }
            other => absolute.push(other.as_str()),
        }
    }
    Ok(absolute)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_follows_project_shape() {
        let layout = ProjectLayout::from_root(Utf8Path::new("/project"));

        assert_eq!(layout.source_root, "/project/src");
        assert_eq!(layout.lib_dir, "/project/build/lib");
        assert_eq!(layout.output_dir, "/project/output");
        assert_eq!(layout.dependency_manifest, "/project/build/depend.json");
        assert_eq!(layout.jar_manifest, "/project/build/manifest.txt");
        assert_eq!(layout.launcher, "/project/build/launcher.bat");
    }

    #[test]
    fn resolve_applies_individual_overrides() {
        let cli = Cli {
            project_root: Utf8PathBuf::from("/project"),
            lib_dir: Some(Utf8PathBuf::from("/elsewhere/lib")),
            launcher: Some(Utf8PathBuf::from("/elsewhere/run.sh")),
            ..Cli::default()
        };

        let layout = ProjectLayout::resolve(&cli).expect("layout should resolve");
        assert_eq!(layout.lib_dir, "/elsewhere/lib");
        assert_eq!(layout.launcher, "/elsewhere/run.sh");
        // Unoverridden paths keep their defaults.
        assert_eq!(layout.output_dir, "/project/output");
    }

    fn invoking_dir() -> Utf8PathBuf {
        Utf8PathBuf::try_from(std::env::current_dir().expect("current dir available"))
            .expect("current dir is UTF-8")
    }

    #[test]
    fn resolve_anchors_the_default_relative_root() {
        let layout =
            ProjectLayout::resolve(&Cli::default()).expect("layout should resolve");

        let cwd = invoking_dir();
        assert_eq!(layout.source_root, cwd.join("src"));
        assert_eq!(layout.lib_dir, cwd.join("build/lib"));
        assert_eq!(layout.dependency_manifest, cwd.join("build/depend.json"));
    }

    #[test]
    fn resolve_yields_only_absolute_paths_for_relative_inputs() {
        let cli = Cli {
            project_root: Utf8PathBuf::from("./checkout"),
            lib_dir: Some(Utf8PathBuf::from("deps/lib")),
            launcher: Some(Utf8PathBuf::from("scripts/run.bat")),
            ..Cli::default()
        };

        let layout = ProjectLayout::resolve(&cli).expect("layout should resolve");
        let cwd = invoking_dir();
        assert_eq!(layout.source_root, cwd.join("checkout/src"));
        assert_eq!(layout.lib_dir, cwd.join("deps/lib"));
        assert_eq!(layout.launcher, cwd.join("scripts/run.bat"));
        assert!(layout.output_dir.is_absolute());
        assert!(layout.jar_manifest.is_absolute());
    }
}
