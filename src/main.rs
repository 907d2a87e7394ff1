//! Kryptos3dit build CLI entrypoint.
//!
//! Parses arguments, resolves the project layout, and runs the build
//! pipeline, mapping each failure category to a distinct exit code.

use clap::Parser;
use kryptos_build::cli::Cli;
use kryptos_build::compiler::FailureMode;
use kryptos_build::error::Result;
use kryptos_build::exec::SystemCommandExecutor;
use kryptos_build::layout::ProjectLayout;
use kryptos_build::output::{DryRunInfo, write_stderr_line};
use kryptos_build::pipeline::{PipelineContext, run_pipeline};
use kryptos_build::plan::{BuildConfig, COMPILATION_UNITS};
use std::io::Write;

fn main() {
    let cli = Cli::parse();
    let mut stderr = std::io::stderr();
    let run_result = run(&cli, &mut stderr);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(cli: &Cli, stderr: &mut dyn Write) -> Result<()> {
    let layout = ProjectLayout::resolve(cli)?;
    let config = BuildConfig::for_layout(&layout, cli.javac.clone());

    if cli.dry_run {
        let info = DryRunInfo {
            source_root: &layout.source_root,
            lib_dir: &layout.lib_dir,
            output_dir: &layout.output_dir,
            javac: &cli.javac,
            jar_tool: &cli.jar,
            lenient: cli.lenient,
            units: COMPILATION_UNITS,
        };
        write_stderr_line(stderr, info.display_text());
        return Ok(());
    }

    let context = PipelineContext {
        layout: &layout,
        config: &config,
        failure_mode: failure_mode_for_cli(cli),
        jar_tool: &cli.jar,
        quiet: cli.quiet,
    };

    run_pipeline(&context, &SystemCommandExecutor, stderr)
}

fn failure_mode_for_cli(cli: &Cli) -> FailureMode {
    if cli.lenient {
        FailureMode::Lenient
    } else {
        FailureMode::Strict
    }
}

fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            let code = err.exit_code();
            write_stderr_line(stderr, err);
            code
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use kryptos_build::error::BuildError;
    use rstest::rstest;

    #[test]
    fn exit_code_for_run_result_returns_zero_on_success() {
        let mut stderr = Vec::new();
        let exit_code = exit_code_for_run_result(Ok(()), &mut stderr);
        assert_eq!(exit_code, 0);
        assert!(stderr.is_empty());
    }

    #[test]
    fn exit_code_for_run_result_prints_error_and_maps_the_category() {
        let err = BuildError::MissingDependency {
            name: "javafx-sdk-11.0.2".to_owned(),
            lib_dir: Utf8PathBuf::from("build/lib"),
        };

        let mut stderr = Vec::new();
        let exit_code = exit_code_for_run_result(Err(err), &mut stderr);
        assert_eq!(exit_code, 2);

        let stderr_text = String::from_utf8(stderr).expect("stderr was not UTF-8");
        assert!(stderr_text.contains("javafx-sdk-11.0.2"));
    }

    #[rstest]
    #[case::strict(false, FailureMode::Strict)]
    #[case::lenient(true, FailureMode::Lenient)]
    fn failure_mode_follows_the_lenient_flag(#[case] lenient: bool, #[case] expected: FailureMode) {
        let cli = Cli {
            lenient,
            ..Cli::default()
        };
        assert_eq!(failure_mode_for_cli(&cli), expected);
    }

    #[test]
    fn dry_run_prints_configuration_without_touching_the_filesystem() {
        let cli = Cli {
            project_root: Utf8PathBuf::from("/nonexistent/project"),
            dry_run: true,
            ..Cli::default()
        };
        let mut stderr = Vec::new();

        run(&cli, &mut stderr).expect("expected dry run to succeed");

        let output = String::from_utf8(stderr).expect("stderr was not UTF-8");
        assert!(output.contains("Dry run"));
        assert!(output.contains("/nonexistent/project/src"));
        assert!(output.contains("kryptos3dit/Main.java"));
    }
}
