//! Domain types - versions and the declarative rules that place them

pub mod rule;
pub mod version;

pub use rule::{CanonicalSource, Rule, RuleSet};
pub use version::{Version, VersionBump};
