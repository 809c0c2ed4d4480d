pub mod canonical;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod registry;
pub mod rewriter;
pub mod tree;
pub mod ui;

pub use error::{Result, VersionSyncError};
