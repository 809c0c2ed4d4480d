use crate::domain::Version;
use crate::error::{Result, VersionSyncError};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Placeholder substituted with the version being written.
pub const VERSION_SLOT: &str = "{version}";

/// Placeholder substituted with the rule's own target path.
pub const PATH_SLOT: &str = "{path}";

fn default_expected() -> usize {
    1
}

/// One version-bearing text span in one target file.
///
/// `pattern` is matched in multi-line mode, so `^` and `$` anchor to line
/// boundaries (`\r\n` included). `replacement` is a regex replacement
/// template: `${1}` style references re-insert captured literal text and
/// [`VERSION_SLOT`] / [`PATH_SLOT`] are rendered before substitution.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Rule {
    pub path: String,
    pub pattern: String,
    pub replacement: String,

    /// Exact number of matches the target must contain.
    #[serde(default = "default_expected")]
    pub expected: usize,
}

impl Rule {
    pub fn new(
        path: impl Into<String>,
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Rule {
            path: path.into(),
            pattern: pattern.into(),
            replacement: replacement.into(),
            expected: 1,
        }
    }

    pub fn with_expected(mut self, expected: usize) -> Self {
        self.expected = expected;
        self
    }

    /// Compile `pattern` with line-anchored semantics.
    pub fn regex(&self) -> Result<Regex> {
        compile_line_pattern(&self.pattern)
    }

    /// Render the replacement template for `version`.
    ///
    /// Capture references (`${1}`) are left in place for the regex engine;
    /// any `$` in the substituted version or path is escaped as `$$`.
    pub fn render(&self, version: &Version) -> String {
        self.replacement
            .replace(VERSION_SLOT, &escape_replacement(version.as_str()))
            .replace(PATH_SLOT, &escape_replacement(&self.path))
    }
}

/// Where the authoritative version lives.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CanonicalSource {
    #[serde(default = "default_canonical_path")]
    pub path: String,

    /// Line pattern whose first capture group is the version.
    #[serde(default = "default_canonical_pattern")]
    pub pattern: String,
}

fn default_canonical_path() -> String {
    "Cargo.toml".to_string()
}

fn default_canonical_pattern() -> String {
    r#"^version = "([0-9]+\.[0-9]+\.[0-9]+)"$"#.to_string()
}

impl Default for CanonicalSource {
    fn default() -> Self {
        CanonicalSource {
            path: default_canonical_path(),
            pattern: default_canonical_pattern(),
        }
    }
}

/// Ordered collection of rules; declaration order is application order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        RuleSet { rules }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Reject rules that can never be satisfied before any file is touched.
    pub fn validate(&self) -> Result<()> {
        for rule in &self.rules {
            if rule.expected == 0 {
                return Err(VersionSyncError::config(format!(
                    "{}: expected occurrence count must be at least 1 (pattern '{}')",
                    rule.path, rule.pattern
                )));
            }
            if !rule.replacement.contains(VERSION_SLOT) {
                return Err(VersionSyncError::config(format!(
                    "{}: replacement '{}' has no {} slot",
                    rule.path, rule.replacement, VERSION_SLOT
                )));
            }
            rule.regex()?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

fn escape_replacement(text: &str) -> String {
    text.replace('$', "$$")
}

pub(crate) fn compile_line_pattern(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .multi_line(true)
        .crlf(true)
        .build()
        .map_err(|source| VersionSyncError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}
