//! Kryptos3dit build pipeline library.
//!
//! This crate provides the core functionality for the `kryptos-build` CLI:
//! a fixed, linear build recipe that validates third-party dependencies,
//! compiles the application's source units, packages them into a single
//! executable archive, and stages a self-contained output directory.
//!
//! # Modules
//!
//! - [`archiver`] - Executable archive packaging via the external jar tool
//! - [`cleanup`] - Removal of transient artifacts from the source tree
//! - [`cli`] - Command-line argument definitions
//! - [`compiler`] - Compiler invocation for the fixed unit plan
//! - [`error`] - Semantic error types with per-category exit codes
//! - [`exec`] - External command execution seam
//! - [`layout`] - Project layout resolution
//! - [`manifest`] - Dependency manifest loading
//! - [`output`] - Progress and configuration output formatting
//! - [`pipeline`] - Sequential pipeline orchestration
//! - [`plan`] - The fixed compilation plan and shared build configuration
//! - [`stager`] - Output directory staging
//! - [`validator`] - Fail-fast dependency validation

pub mod archiver;
pub mod cleanup;
pub mod cli;
pub mod compiler;
pub mod error;
pub mod exec;
pub mod layout;
pub mod manifest;
pub mod output;
pub mod pipeline;
pub mod plan;
pub mod stager;
pub mod validator;

#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;
