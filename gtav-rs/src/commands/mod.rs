//! Command implementations for the gtav-rs CLI

pub mod vehicle;
