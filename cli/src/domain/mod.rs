//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::application`,
//! `crate::output`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod confirm;
pub mod error;
pub mod execution;
pub mod group;
pub mod render;
pub mod resolve;

pub use confirm::{CONTINUE_PROMPT, describe_plan, is_affirmative};
pub use error::{RemoteError, SaError};
pub use execution::{ExecutionMode, ExecutionResult, RunSummary};
pub use group::{DEFAULT_GROUP, Group, GroupSet};
pub use render::{output_segments, render_output};
pub use resolve::{Classification, Resolution, classify, dedup_stable, resolve_targets};
