//! Workflows behind the `check`, `bump` and `list` commands

pub mod orchestration;

pub use orchestration::{BumpOutcome, CheckReport, VersionRequest};
