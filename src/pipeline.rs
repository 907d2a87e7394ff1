//! Sequential pipeline orchestration.
//!
//! The recipe is strictly linear: dependency validation, one compiler
//! invocation per unit, archival, output staging, then cleanup. The first
//! failing stage aborts the remaining build steps; cleanup alone runs
//! best-effort regardless of the upstream outcome, and its own failures are
//! reported rather than swallowed.

use crate::archiver::Archiver;
use crate::cleanup::clean_source_tree;
use crate::compiler::{Compiler, FailureMode};
use crate::error::Result;
use crate::exec::CommandExecutor;
use crate::layout::ProjectLayout;
use crate::manifest::DependencyManifest;
use crate::output::{success_message, write_stderr_line};
use crate::plan::{BuildConfig, COMPILATION_UNITS};
use crate::stager::Stager;
use crate::validator::verify_dependencies;
use std::io::Write;

/// Context for one pipeline run.
pub struct PipelineContext<'a> {
    /// Resolved project paths.
    pub layout: &'a ProjectLayout,
    /// Shared compilation configuration.
    pub config: &'a BuildConfig,
    /// How compilation failures are treated.
    pub failure_mode: FailureMode,
    /// The archiver executable to invoke.
    pub jar_tool: &'a str,
    /// Suppress progress output.
    pub quiet: bool,
}

/// Runs the full build pipeline.
///
/// Cleanup always runs after the build steps, even when one of them failed.
/// If the build succeeded but cleanup did not, the cleanup error is
/// returned; if both failed, the build error wins and the cleanup error is
/// printed.
///
/// # Errors
///
/// Returns the first stage failure, with cleanup errors folded in as
/// described above.
pub fn run_pipeline(
    context: &PipelineContext<'_>,
    executor: &dyn CommandExecutor,
    stderr: &mut dyn Write,
) -> Result<()> {
    let build_result = run_build_steps(context, executor, stderr);
    let cleanup_result = clean_source_tree(&context.layout.source_root);
    fold_cleanup_result(build_result, cleanup_result, stderr)
}

/// Folds the cleanup outcome into the build outcome.
///
/// A cleanup failure must not mask a build failure: when both fail the
/// build error propagates and the cleanup error is only printed. When the
/// build succeeded, a cleanup failure is the run's failure.
fn fold_cleanup_result(
    build_result: Result<()>,
    cleanup_result: Result<()>,
    stderr: &mut dyn Write,
) -> Result<()> {
    match (build_result, cleanup_result) {
        (Ok(()), cleanup) => cleanup,
        (Err(build_err), Err(cleanup_err)) => {
            write_stderr_line(stderr, cleanup_err);
            Err(build_err)
        }
        (Err(build_err), Ok(())) => Err(build_err),
    }
}

/// Runs the checked build steps: validate, compile, archive, stage.
fn run_build_steps(
    context: &PipelineContext<'_>,
    executor: &dyn CommandExecutor,
    stderr: &mut dyn Write,
) -> Result<()> {
    let layout = context.layout;

    let manifest = DependencyManifest::load(&layout.dependency_manifest)?;
    if !context.quiet {
        write_stderr_line(
            stderr,
            format!(
                "Checking {} required libraries in {}...",
                manifest.required().len(),
                layout.lib_dir
            ),
        );
    }
    verify_dependencies(&manifest, &layout.lib_dir)?;

    if !context.quiet {
        write_stderr_line(
            stderr,
            format!(
                "Compiling {} units with {}...",
                COMPILATION_UNITS.len(),
                context.config.javac
            ),
        );
        for unit in COMPILATION_UNITS {
            write_stderr_line(stderr, format!("  - {unit}"));
        }
    }

    let compiler = Compiler::new(context.config, executor);
    let failed = compiler.compile_all(COMPILATION_UNITS, context.failure_mode)?;
    for failure in &failed {
        write_stderr_line(
            stderr,
            format!("warning: {} failed to compile: {}", failure.unit, failure.reason),
        );
    }

    if !context.quiet {
        write_stderr_line(stderr, "Packaging archive...");
    }
    let archiver = Archiver::new(
        &layout.source_root,
        &layout.jar_manifest,
        context.jar_tool,
        executor,
    );
    let archive = archiver.archive()?;

    if !context.quiet {
        write_stderr_line(stderr, format!("Staging output to {}...", layout.output_dir));
    }
    let stager = Stager::new(layout.output_dir.clone());
    stager.stage(layout, &archive)?;

    if !context.quiet {
        let compiled = COMPILATION_UNITS.len() - failed.len();
        write_stderr_line(stderr, success_message(compiled, &layout.output_dir));
    }

    Ok(())
}
