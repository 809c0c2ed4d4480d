//! Check and bump workflows
//!
//! Both modes walk the same rule set in the same order but deliberately
//! differ in failure policy: bump stops at the first error, check collects
//! every mismatch before reporting.

use crate::canonical::read_canonical_version;
use crate::domain::{CanonicalSource, RuleSet, Version, VersionBump};
use crate::error::Result;
use crate::rewriter::{self, Mismatch};
use crate::tree::Tree;
use crate::ui;

/// How the bump target is chosen
#[derive(Debug, Clone, PartialEq)]
pub enum VersionRequest {
    /// Explicit `X.Y.Z` as typed by the user; validated before use
    Exact(String),

    /// Next major/minor/patch after the canonical version
    Next(VersionBump),
}

/// Result of a successful bump
#[derive(Debug, Clone, PartialEq)]
pub enum BumpOutcome {
    /// At least one file was written; paths in first-write order
    Changed { files: Vec<String> },

    /// Every target already carried the version
    Unchanged,
}

impl BumpOutcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, BumpOutcome::Changed { .. })
    }
}

/// Result of a check: the canonical version and everything that disagrees with it
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    pub version: Version,
    pub mismatches: Vec<Mismatch>,
}

impl CheckReport {
    pub fn is_consistent(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Turn a [VersionRequest] into the version string handed to [run_bump].
///
/// `Exact` is passed through untouched so that validation happens in one
/// place; `Next` reads the canonical version and increments it.
pub fn resolve_version_request<T: Tree + ?Sized>(
    tree: &T,
    source: &CanonicalSource,
    request: &VersionRequest,
) -> Result<String> {
    match request {
        VersionRequest::Exact(version) => Ok(version.clone()),
        VersionRequest::Next(bump) => {
            let current = read_canonical_version(tree, source)?;
            Ok(current.bump(*bump)?.to_string())
        }
    }
}

/// Propagate `requested` into every rule's target.
///
/// 1. Validate `requested`; nothing is read or written if it is malformed
/// 2. Apply rules in declaration order
/// 3. Abort on the first error; files written earlier stay written
///
/// # Returns
/// * `Ok(BumpOutcome)` - Whether any file changed
/// * `Err` - Invalid version, unreadable target, or a count mismatch
pub fn run_bump<T: Tree + ?Sized>(
    tree: &T,
    rules: &RuleSet,
    requested: &str,
    verbose: bool,
) -> Result<BumpOutcome> {
    let version = Version::parse(requested)?;
    let mut files: Vec<String> = Vec::new();

    for rule in rules {
        let changed = rewriter::apply(tree, rule, &version)?;
        if verbose {
            let state = if changed { "updated" } else { "unchanged" };
            ui::display_status(&format!("{}: {} ({})", rule.path, state, rule.pattern));
        }
        if changed && !files.contains(&rule.path) {
            files.push(rule.path.clone());
        }
    }

    if files.is_empty() {
        Ok(BumpOutcome::Unchanged)
    } else {
        Ok(BumpOutcome::Changed { files })
    }
}

/// Verify every rule's target against the canonical version.
///
/// Mismatches never stop the walk: each rule contributes at most one
/// [Mismatch] and all of them are returned together.
///
/// # Returns
/// * `Ok(CheckReport)` - The canonical version and all mismatches (possibly none)
/// * `Err` - If the canonical version or any target cannot be read, or a pattern is invalid
pub fn run_check<T: Tree + ?Sized>(
    tree: &T,
    source: &CanonicalSource,
    rules: &RuleSet,
    verbose: bool,
) -> Result<CheckReport> {
    let version = read_canonical_version(tree, source)?;
    let mut mismatches = Vec::new();

    for rule in rules {
        match rewriter::inspect(tree, rule, &version)? {
            Some(mismatch) => mismatches.push(mismatch),
            None if verbose => {
                ui::display_status(&format!("{}: ok ({})", rule.path, rule.pattern))
            }
            None => {}
        }
    }

    Ok(CheckReport {
        version,
        mismatches,
    })
}
