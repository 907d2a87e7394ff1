//! Shared fixtures for the behaviour tests.

use camino::{Utf8Path, Utf8PathBuf};
use kryptos_build::error::Result;
use kryptos_build::exec::CommandExecutor;
use kryptos_build::layout::ProjectLayout;
use kryptos_build::plan::BuildConfig;
use kryptos_build::test_utils::{failure_output, success_output};
use std::cell::{Cell, RefCell};
use std::fs;
use std::process::Output;
use tempfile::TempDir;

/// A fully populated project tree on disk, ready for a pipeline run.
pub struct ProjectFixture {
    // Keep the temp dir alive for the lifetime of the test.
    _dir: TempDir,
    pub layout: ProjectLayout,
    pub config: BuildConfig,
}

/// Builds a project tree matching the expected layout: a dependency
/// manifest listing the JavaFX SDK and icon jar, a populated library
/// directory, a jar manifest, a launcher, and the source package tree.
pub fn project() -> ProjectFixture {
    let dir = TempDir::new().expect("failed to create temp dir");
    let root = Utf8PathBuf::try_from(dir.path().to_path_buf()).expect("temp dir path not UTF-8");
    let layout = ProjectLayout::from_root(&root);

    let build_dir = layout
        .dependency_manifest
        .parent()
        .expect("manifest path has a parent");
    fs::create_dir_all(build_dir).expect("failed to create build dir");
    fs::write(
        &layout.dependency_manifest,
        r#"{"list": ["javafx-sdk-11.0.2", "fontawesomefx-8.2.jar"]}"#,
    )
    .expect("failed to write dependency manifest");

    let sdk_lib = layout.lib_dir.join("javafx-sdk-11.0.2").join("lib");
    fs::create_dir_all(&sdk_lib).expect("failed to create sdk tree");
    fs::write(sdk_lib.join("javafx.base.jar"), b"base").expect("failed to write sdk jar");
    fs::write(layout.lib_dir.join("fontawesomefx-8.2.jar"), b"icons")
        .expect("failed to write icon jar");

    fs::write(&layout.jar_manifest, "Main-Class: kryptos3dit.Main\n")
        .expect("failed to write jar manifest");
    fs::write(&layout.launcher, "java -jar app.jar\n").expect("failed to write launcher");

    for subdir in ["kryptos3dit/crypto", "kryptos3dit/filters", "kryptos3dit/ui"] {
        fs::create_dir_all(layout.source_root.join(subdir)).expect("failed to create src tree");
    }
    fs::write(
        layout.source_root.join("kryptos3dit/Main.java"),
        "public class Main {}\n",
    )
    .expect("failed to write source file");

    let config = BuildConfig::for_layout(&layout, "javac".to_owned());
    ProjectFixture {
        _dir: dir,
        layout,
        config,
    }
}

/// One recorded external invocation.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub dir: Utf8PathBuf,
    pub cmd: String,
    pub args: Vec<String>,
}

/// A scripted executor that simulates the compiler and archiver.
///
/// Successful `jar` invocations write the archive file into their working
/// directory, mirroring the real tool's side effect so staging has
/// something to copy.
pub struct ScriptedExecutor {
    calls: RefCell<Vec<RecordedCall>>,
    javac_seen: Cell<usize>,
    fail_javac_at: Option<usize>,
    jar_fails: bool,
}

impl ScriptedExecutor {
    /// All tools succeed.
    pub fn succeeding() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            javac_seen: Cell::new(0),
            fail_javac_at: None,
            jar_fails: false,
        }
    }

    /// The compiler invocation with the given zero-based index fails.
    pub fn failing_javac_at(index: usize) -> Self {
        Self {
            fail_javac_at: Some(index),
            ..Self::succeeding()
        }
    }

    /// The archiver invocation fails.
    pub fn failing_jar() -> Self {
        Self {
            jar_fails: true,
            ..Self::succeeding()
        }
    }

    /// Returns the recorded invocations in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }
}

impl CommandExecutor for ScriptedExecutor {
    fn run(&self, dir: &Utf8Path, cmd: &str, args: &[&str]) -> Result<Output> {
        self.calls.borrow_mut().push(RecordedCall {
            dir: dir.to_owned(),
            cmd: cmd.to_owned(),
            args: args.iter().map(|&a| a.to_owned()).collect(),
        });

        match cmd {
            "javac" => {
                let index = self.javac_seen.get();
                self.javac_seen.set(index + 1);
                if self.fail_javac_at == Some(index) {
                    Ok(failure_output("error: cannot find symbol"))
                } else {
                    Ok(success_output())
                }
            }
            "jar" => {
                if self.jar_fails {
                    Ok(failure_output("java.io.IOException: invalid manifest"))
                } else {
                    fs::write(dir.join("app.jar"), b"jar bytes")
                        .expect("failed to write simulated archive");
                    Ok(success_output())
                }
            }
            other => panic!("unexpected tool invocation: {other}"),
        }
    }
}
