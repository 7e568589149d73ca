//! Integration tests for sa
//!
//! These tests spawn the actual binaries and test end-to-end behavior.
//! `echo` stands in for the remote shell so no SSH is involved.
