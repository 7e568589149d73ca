//! Unit tests for sa
//!
//! These tests use mocked ports and run fast without spawning processes.

mod architecture;
mod confirm_gate;
mod engine;
