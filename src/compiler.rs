//! Compiler invocation for the fixed unit plan.
//!
//! Each unit is compiled by one external `javac` invocation built from the
//! shared [`BuildConfig`]. Invocations run strictly in declared order; the
//! failure policy is selectable between halting on the first broken unit
//! (strict, the default) and recording failures while carrying on (lenient,
//! which reproduces the historical fire-and-forget behaviour on request).

use crate::error::{BuildError, Result};
use crate::exec::CommandExecutor;
use crate::plan::{BuildConfig, CompilationUnit};

/// How compilation failures are treated by [`Compiler::compile_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    /// The first non-zero compiler exit aborts the run.
    Strict,
    /// Failures are recorded and reported; remaining units still compile
    /// and the pipeline proceeds.
    Lenient,
}

/// A unit that failed to compile in lenient mode.
#[derive(Debug, Clone)]
pub struct FailedUnit {
    /// The unit that failed.
    pub unit: CompilationUnit,
    /// Captured compiler diagnostics.
    pub reason: String,
}

/// Invokes the compiler once per compilation unit.
pub struct Compiler<'a> {
    config: &'a BuildConfig,
    executor: &'a dyn CommandExecutor,
}

impl<'a> Compiler<'a> {
    /// Creates a compiler over the given configuration and executor.
    #[must_use]
    pub fn new(config: &'a BuildConfig, executor: &'a dyn CommandExecutor) -> Self {
        Self { config, executor }
    }

    /// Compiles a single unit, capturing diagnostics on failure.
    ///
    /// # Errors
    ///
    /// Returns `CompilationFailed` with the unit name and captured stderr
    /// if the compiler exits non-zero, or an I/O error if it could not be
    /// spawned at all.
    pub fn compile_unit(&self, unit: &CompilationUnit) -> Result<()> {
        let args = self.javac_args(unit);
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();

        let output = self
            .executor
            .run(&self.config.source_root, &self.config.javac, &arg_refs)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BuildError::CompilationFailed {
                unit: unit.to_string(),
                reason: stderr.trim().to_owned(),
            });
        }

        Ok(())
    }

    /// Compiles every unit in declared order under the given failure mode.
    ///
    /// Returns the units that failed; the list is always empty in strict
    /// mode since the first failure aborts the run.
    ///
    /// # Errors
    ///
    /// In strict mode, returns the first unit's `CompilationFailed`. In
    /// either mode, an I/O failure to spawn the compiler aborts the run.
    pub fn compile_all(
        &self,
        units: &[CompilationUnit],
        mode: FailureMode,
    ) -> Result<Vec<FailedUnit>> {
        let mut failed = Vec::new();

        for unit in units {
            match self.compile_unit(unit) {
                Ok(()) => {}
                Err(BuildError::CompilationFailed { unit: _, reason })
                    if mode == FailureMode::Lenient =>
                {
                    failed.push(FailedUnit {
                        unit: *unit,
                        reason,
                    });
                }
                Err(err) => return Err(err),
            }
        }

        Ok(failed)
    }

    /// Builds the argument list for one unit's compiler invocation.
    fn javac_args(&self, unit: &CompilationUnit) -> Vec<String> {
        let classpath: Vec<&str> = self.config.classpath.iter().map(|p| p.as_str()).collect();

        vec![
            "--module-path".to_owned(),
            self.config.module_path.to_string(),
            "--add-modules".to_owned(),
            self.config.platform_modules.join(","),
            "-cp".to_owned(),
            classpath.join(":"),
            unit.source_path().to_string(),
            "-d".to_owned(),
            self.config.output_dir.to_string(),
        ]
    }
}
