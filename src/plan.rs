//! The fixed compilation plan and shared build configuration.
//!
//! The unit list is hand-specified and ordered, not discovered: for a recipe
//! this small an explicit plan is simpler and more predictable than source
//! scanning. Later units may reference types compiled by earlier ones; all
//! units share one output root and one classpath, so cross-references
//! resolve via previously written class files.

use crate::layout::ProjectLayout;
use camino::Utf8PathBuf;
use std::fmt;

/// The Java package all compilation units belong to.
pub const PACKAGE: &str = "kryptos3dit";

/// Name of the executable archive produced by the archiver.
pub const ARCHIVE_NAME: &str = "app.jar";

/// Name of the jar manifest descriptor consumed by the archiver.
pub const JAR_MANIFEST_NAME: &str = "manifest.txt";

/// Name of the scratch subdirectory created inside the output directory.
pub const SCRATCH_DIR: &str = "temp";

/// JavaFX SDK directory expected under the library directory.
pub const JAVAFX_SDK: &str = "javafx-sdk-11.0.2";

/// FontAwesomeFX jar expected under the library directory.
pub const FONTAWESOME_JAR: &str = "fontawesomefx-8.2.jar";

/// Platform modules passed to the compiler via `--add-modules`.
pub const PLATFORM_MODULES: &[&str] = &[
    "javafx.base",
    "javafx.media",
    "javafx.graphics",
    "javafx.swing",
    "javafx.controls",
    "javafx.fxml",
    "javafx.web",
];

/// One source file designated for compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompilationUnit {
    /// Source path relative to the package directory.
    pub source: &'static str,
    /// Module identifier of the unit.
    pub module: &'static str,
}

impl CompilationUnit {
    /// Returns the source path relative to the source root.
    ///
    /// # Examples
    ///
    /// ```
    /// use kryptos_build::plan::COMPILATION_UNITS;
    ///
    /// let entry_point = COMPILATION_UNITS.first().expect("the plan is never empty");
    /// assert_eq!(entry_point.source_path(), "kryptos3dit/Main.java");
    /// ```
    #[must_use]
    pub fn source_path(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(PACKAGE).join(self.source)
    }
}

impl fmt::Display for CompilationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", PACKAGE, self.source)
    }
}

/// The fixed, ordered list of compilation units.
///
/// The entry point compiles first; the UI controllers last.
pub const COMPILATION_UNITS: &[CompilationUnit] = &[
    CompilationUnit {
        source: "Main.java",
        module: "kryptos3dit",
    },
    CompilationUnit {
        source: "crypto/AES256CTR.java",
        module: "kryptos3dit.crypto",
    },
    CompilationUnit {
        source: "filters/Filters.java",
        module: "kryptos3dit.filters",
    },
    CompilationUnit {
        source: "ui/homepageController.java",
        module: "kryptos3dit.ui",
    },
    CompilationUnit {
        source: "ui/encryptionController.java",
        module: "kryptos3dit.ui",
    },
    CompilationUnit {
        source: "ui/UifxmlController.java",
        module: "kryptos3dit.ui",
    },
];

/// The shared compilation context, constructed once and reused per unit.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// JavaFX module path passed via `--module-path`.
    pub module_path: Utf8PathBuf,
    /// Platform modules enabled via `--add-modules`.
    pub platform_modules: &'static [&'static str],
    /// Classpath entries, joined with `:` on the command line.
    pub classpath: Vec<Utf8PathBuf>,
    /// Root of the Java source tree.
    pub source_root: Utf8PathBuf,
    /// Shared output directory for compiled class files (`-d`).
    pub output_dir: Utf8PathBuf,
    /// The compiler executable to invoke.
    pub javac: String,
}

impl BuildConfig {
    /// Builds the configuration for the given project layout.
    ///
    /// The source root doubles as the class-file output directory so the
    /// archiver can bundle the package subtree in place.
    #[must_use]
    pub fn for_layout(layout: &ProjectLayout, javac: String) -> Self {
        Self {
            module_path: layout.lib_dir.join(JAVAFX_SDK).join("lib"),
            platform_modules: PLATFORM_MODULES,
            classpath: vec![layout.lib_dir.join(FONTAWESOME_JAR), layout.source_root.clone()],
            source_root: layout.source_root.clone(),
            output_dir: layout.source_root.clone(),
            javac,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8Path;

    #[test]
    fn plan_lists_exactly_six_units() {
        assert_eq!(COMPILATION_UNITS.len(), 6);
    }

    #[test]
    fn entry_point_compiles_first() {
        let first = COMPILATION_UNITS.first().expect("plan must not be empty");
        assert_eq!(first.source, "Main.java");
        assert_eq!(first.module, "kryptos3dit");
    }

    #[test]
    fn plan_covers_crypto_filters_and_ui() {
        let modules: Vec<&str> = COMPILATION_UNITS.iter().map(|u| u.module).collect();
        assert!(modules.contains(&"kryptos3dit.crypto"));
        assert!(modules.contains(&"kryptos3dit.filters"));
        assert_eq!(
            modules.iter().filter(|&&m| m == "kryptos3dit.ui").count(),
            3
        );
    }

    #[test]
    fn source_path_is_rooted_at_the_package() {
        let unit = CompilationUnit {
            source: "crypto/AES256CTR.java",
            module: "kryptos3dit.crypto",
        };
        assert_eq!(
            unit.source_path(),
            Utf8Path::new("kryptos3dit/crypto/AES256CTR.java")
        );
    }

    #[test]
    fn config_shares_source_root_as_output_dir() {
        let layout = ProjectLayout::from_root(Utf8Path::new("/project"));
        let config = BuildConfig::for_layout(&layout, "javac".to_owned());

        assert_eq!(config.output_dir, config.source_root);
        assert_eq!(config.module_path, "/project/build/lib/javafx-sdk-11.0.2/lib");
        assert!(
            config
                .classpath
                .iter()
                .any(|p| p.as_str().ends_with(FONTAWESOME_JAR))
        );
        assert!(config.classpath.contains(&config.source_root));
    }
}
