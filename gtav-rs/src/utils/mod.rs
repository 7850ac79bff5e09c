//! Shared utilities for command output

pub mod table;
