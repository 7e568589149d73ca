//! sa library: exposes modules for the binaries and integration testing.

pub mod app;
pub mod application;
pub mod cli;
pub mod domain;
pub mod infra;
pub mod output;
