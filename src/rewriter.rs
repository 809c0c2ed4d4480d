//! Exact-count text rewriting.
//!
//! [`apply`] is the only place that writes to a target file. It refuses to
//! touch a file whose match count differs from the rule's expectation, and it
//! skips the write entirely when the substituted text equals the original.

use crate::domain::{Rule, Version};
use crate::error::{Result, VersionSyncError};
use crate::tree::Tree;
use std::fmt;

/// Rewrite every match of `rule` in its target to carry `version`.
///
/// Returns `true` when the file was written, `false` when it already held the
/// desired text. Fails with [`VersionSyncError::ReplacementCountMismatch`]
/// (and writes nothing) when the number of matches is not `rule.expected`.
pub fn apply<T: Tree + ?Sized>(tree: &T, rule: &Rule, version: &Version) -> Result<bool> {
    let re = rule.regex()?;
    let replacement = rule.render(version);
    let text = tree.read(&rule.path)?;

    let actual = re.find_iter(&text).count();
    if actual != rule.expected {
        return Err(VersionSyncError::ReplacementCountMismatch {
            path: rule.path.clone(),
            pattern: rule.pattern.clone(),
            expected: rule.expected,
            actual,
        });
    }

    let updated = re.replace_all(&text, replacement.as_str());
    if updated == text {
        return Ok(false);
    }

    tree.write(&rule.path, &updated)?;
    Ok(true)
}

/// Why a target does not reflect the expected version
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MismatchKind {
    /// Pattern does not occur at all
    Missing { pattern: String },
    /// Pattern occurs, but no match carries the expected text
    Stale { found: String, expected: String },
}

/// One failed expectation found by a consistency check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub path: String,
    pub kind: MismatchKind,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            MismatchKind::Missing { pattern } => write!(
                f,
                "{}: missing expected version reference ({})",
                self.path, pattern
            ),
            MismatchKind::Stale { found, expected } => write!(
                f,
                "{}: found '{}' (expected '{}')",
                self.path,
                found.trim(),
                expected.trim()
            ),
        }
    }
}

/// Read-only counterpart of [`apply`].
///
/// Passes when any match of `rule` already equals its rendering for
/// `version`. The occurrence count is not enforced here; that guard belongs
/// to [`apply`]. An unreadable target or an invalid pattern is an error.
pub fn inspect<T: Tree + ?Sized>(
    tree: &T,
    rule: &Rule,
    version: &Version,
) -> Result<Option<Mismatch>> {
    let re = rule.regex()?;
    let replacement = rule.render(version);
    let text = tree.read(&rule.path)?;

    let mut first_stale: Option<(String, String)> = None;
    for caps in re.captures_iter(&text) {
        let mut expected = String::new();
        caps.expand(&replacement, &mut expected);
        let found = &caps[0];
        if found == expected {
            return Ok(None);
        }
        if first_stale.is_none() {
            first_stale = Some((found.to_string(), expected));
        }
    }

    let kind = match first_stale {
        Some((found, expected)) => MismatchKind::Stale { found, expected },
        None => MismatchKind::Missing {
            pattern: rule.pattern.clone(),
        },
    };
    Ok(Some(Mismatch {
        path: rule.path.clone(),
        kind,
    }))
}
