//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: hosts file loading, process
//! execution, terminal input and output.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::cli` or `crate::output` are forbidden.

pub mod command_runner;
pub mod config;
pub mod prompt;
pub mod sink;

pub use command_runner::{DEFAULT_TRANSPORT, TokioRemoteShell};
pub use config::{IniGroupStore, default_hosts_path, parse_groups};
pub use prompt::StdinConfirmation;
pub use sink::StdoutSink;
