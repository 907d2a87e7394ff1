//! CLI argument definitions for the build pipeline.
//!
//! This module defines the command-line interface using clap. It is
//! separated from the main entrypoint to keep the binary small and focused
//! on orchestration.

use camino::Utf8PathBuf;
use clap::Parser;

/// Build and package the Kryptos3dit desktop application.
#[derive(Parser, Debug, Clone)]
#[command(name = "kryptos-build")]
#[command(version, about)]
#[command(long_about = concat!(
    "Build and package the Kryptos3dit desktop application.\n\n",
    "The pipeline runs a fixed, linear recipe: verify the third-party ",
    "libraries listed in depend.json are present, compile each source unit ",
    "with javac into a shared output tree, bundle the compiled package into ",
    "an executable app.jar, and assemble a self-contained output directory ",
    "with the libraries, manifest, launcher, and a scratch subdirectory.\n\n",
    "The output directory is destructively rebuilt on every run. The first ",
    "failing stage aborts the build; pass --lenient to keep going past ",
    "individual compilation failures instead.",
))]
#[command(after_help = concat!(
    "EXIT CODES:\n",
    "  0  success\n",
    "  2  missing dependency or unreadable manifest\n",
    "  3  compilation failure\n",
    "  4  packaging failure\n",
    "  5  staging failure\n",
    "  6  cleanup failure\n\n",
    "EXAMPLES:\n",
    "  Build from the project root:\n",
    "    $ kryptos-build\n\n",
    "  Build a checkout that lives elsewhere:\n",
    "    $ kryptos-build --project-root ~/src/kryptos3dit\n\n",
    "  Keep going past broken units:\n",
    "    $ kryptos-build --lenient\n\n",
    "  Preview the configuration without building:\n",
    "    $ kryptos-build --dry-run",
))]
pub struct Cli {
    /// Project root containing build/, src/, and output/ [default: .].
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub project_root: Utf8PathBuf,

    /// Library directory checked for dependencies [default: <root>/build/lib].
    #[arg(long, value_name = "DIR")]
    pub lib_dir: Option<Utf8PathBuf>,

    /// Output directory to assemble [default: <root>/output].
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<Utf8PathBuf>,

    /// Dependency manifest file [default: <root>/build/depend.json].
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<Utf8PathBuf>,

    /// Jar manifest descriptor [default: <root>/build/manifest.txt].
    #[arg(long, value_name = "FILE")]
    pub jar_manifest: Option<Utf8PathBuf>,

    /// Launcher script copied into the output [default: <root>/build/launcher.bat].
    #[arg(long, value_name = "FILE")]
    pub launcher: Option<Utf8PathBuf>,

    /// The Java compiler executable to invoke.
    #[arg(long, value_name = "PATH", default_value = "javac")]
    pub javac: String,

    /// The jar tool executable to invoke.
    #[arg(long, value_name = "PATH", default_value = "jar")]
    pub jar: String,

    /// Record compilation failures and keep going instead of halting.
    #[arg(long)]
    pub lenient: bool,

    /// Show configuration and exit without building.
    #[arg(long)]
    pub dry_run: bool,

    /// Suppress progress output (errors still shown).
    #[arg(short, long)]
    pub quiet: bool,
}

impl Default for Cli {
    /// Creates a `Cli` with the current directory as project root and all
    /// flags disabled, for tests and programmatic construction.
    fn default() -> Self {
        Self {
            project_root: Utf8PathBuf::from("."),
            lib_dir: None,
            output_dir: None,
            manifest: None,
            jar_manifest: None,
            launcher: None,
            javac: "javac".to_owned(),
            jar: "jar".to_owned(),
            lenient: false,
            dry_run: false,
            quiet: false,
        }
    }
}
