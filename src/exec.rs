//! External command execution seam.
//!
//! Every external tool the pipeline shells out to (`javac`, `jar`) runs
//! through the [`CommandExecutor`] trait, which captures exit status and
//! output so call sites can branch on the result instead of firing and
//! forgetting.

use crate::error::{BuildError, Result};
use camino::Utf8Path;
use std::process::{Command, Output};

/// Abstraction for running external commands.
pub trait CommandExecutor {
    /// Runs a command in the given working directory and returns the
    /// captured output.
    ///
    /// # Errors
    ///
    /// Returns any I/O errors encountered while spawning or running the
    /// command. A non-zero exit status is not an error at this level; the
    /// caller inspects `Output::status`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use camino::Utf8Path;
    /// use kryptos_build::exec::{CommandExecutor, SystemCommandExecutor};
    ///
    /// let executor = SystemCommandExecutor;
    /// let output = executor.run(Utf8Path::new("."), "javac", &["-version"])?;
    /// assert!(output.status.success());
    /// # Ok::<(), kryptos_build::error::BuildError>(())
    /// ```
    fn run(&self, dir: &Utf8Path, cmd: &str, args: &[&str]) -> Result<Output>;
}

/// Executes commands on the host system.
///
/// # Examples
///
/// ```no_run
/// use camino::Utf8Path;
/// use kryptos_build::exec::{CommandExecutor, SystemCommandExecutor};
///
/// let executor = SystemCommandExecutor;
/// let output = executor.run(Utf8Path::new("."), "jar", &["--version"])?;
/// assert!(output.status.success());
/// # Ok::<(), kryptos_build::error::BuildError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandExecutor;

impl CommandExecutor for SystemCommandExecutor {
    fn run(&self, dir: &Utf8Path, cmd: &str, args: &[&str]) -> Result<Output> {
        Command::new(cmd)
            .args(args)
            .current_dir(dir)
            .output()
            .map_err(BuildError::from)
    }
}
