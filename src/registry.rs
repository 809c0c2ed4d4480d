//! Built-in rule table for the default project layout.
//!
//! Used whenever no `versionsync.toml` is present. Order matters: rules run
//! top to bottom, and files listed more than once accumulate edits.

use crate::domain::{CanonicalSource, Rule, RuleSet};

pub const CARGO_MANIFESTS: &[&str] = &[
    "Cargo.toml",
    "crates/arbiter-config/Cargo.toml",
    "crates/arbiter-contracts/Cargo.toml",
    "crates/arbiter-kernel/Cargo.toml",
    "crates/arbiter-server/Cargo.toml",
];

pub const SCHEMA_FILES: &[&str] = &[
    "contracts/v1/ops.event.schema.json",
    "contracts/v1/ops.action.schema.json",
    "contracts/v1/ops.plan.schema.json",
    "contracts/v1/ops.approval_event.schema.json",
    "contracts/v1/ops.action_result.schema.json",
    "contracts/v1/ops.errors.schema.json",
    "contracts/v1/ops.capabilities.schema.json",
    "contracts/v1/ops.contracts_metadata.schema.json",
    "config/config.schema.json",
];

pub const READMES: &[&str] = &["README.md", "README.ja.md"];

/// `(path, pattern, replacement)` for every rule that targets a single file.
const SINGLE_FILE_RULES: &[(&str, &str, &str)] = &[
    (
        "openapi/v1.yaml",
        r"^  version: [0-9]+\.[0-9]+\.[0-9]+$",
        "  version: {version}",
    ),
    (
        "crates/arbiter-contracts/src/lib.rs",
        r#"^pub const API_VERSION: &str = "[0-9]+\.[0-9]+\.[0-9]+";$"#,
        r#"pub const API_VERSION: &str = "{version}";"#,
    ),
];

const SCHEMA_ID_PATTERN: &str = r#"^(\s*"\$id":\s*")[^"]+(",?)$"#;
const SCHEMA_ID_TEMPLATE: &str =
    "${1}https://raw.githubusercontent.com/viasnake/arbiter/v{version}/{path}${2}";

const SCHEMA_RULES: &[(&str, &str, &str)] = &[
    (
        "config/config.schema.json",
        r#"^  "title": "Arbiter Configuration Schema v[0-9]+\.[0-9]+\.[0-9]+",$"#,
        r#"  "title": "Arbiter Configuration Schema v{version}","#,
    ),
    (
        "contracts/v1/ops.contracts_metadata.schema.json",
        r#"^    "api_version": \{ "type": "string", "const": "[0-9]+\.[0-9]+\.[0-9]+" \},$"#,
        r#"    "api_version": { "type": "string", "const": "{version}" },"#,
    ),
];

const README_HEADINGS: &[(&str, &str, &str)] = &[
    (
        "README.md",
        r"^## API surface \(v[0-9]+\.[0-9]+\.[0-9]+\)$",
        "## API surface (v{version})",
    ),
    (
        "README.ja.md",
        r"^## API \(v[0-9]+\.[0-9]+\.[0-9]+\)$",
        "## API (v{version})",
    ),
];

/// Applied to each entry of [`READMES`], in this order.
const README_REFERENCES: &[(&str, &str)] = &[
    (
        r"^(docker pull ghcr\.io/viasnake/arbiter:)v[0-9]+\.[0-9]+\.[0-9]+$",
        "${1}v{version}",
    ),
    (
        r"^(\s+ghcr\.io/viasnake/arbiter:)v[0-9]+\.[0-9]+\.[0-9]+(\s+\\)?$",
        "${1}v{version}${2}",
    ),
    (
        r"(https://raw\.githubusercontent\.com/viasnake/arbiter/)v[0-9]+\.[0-9]+\.[0-9]+(/contracts/v1/ops\.event\.schema\.json)",
        "${1}v{version}${2}",
    ),
    (
        r"(`docs/releases/)v[0-9]+\.[0-9]+\.[0-9]+(\.md`)",
        "${1}v{version}${2}",
    ),
];

const EXAMPLE_RULES: &[(&str, &str, &str)] = &[
    (
        "README.md",
        r#"("policy_version": "policy:)v[0-9]+\.[0-9]+\.[0-9]+(",)"#,
        "${1}v{version}${2}",
    ),
    (
        "config/example-config.yaml",
        r#"^(  version: "policy:)v[0-9]+\.[0-9]+\.[0-9]+(")$"#,
        "${1}v{version}${2}",
    ),
];

const MANIFEST_PATTERN: &str = r#"^version = "[0-9]+\.[0-9]+\.[0-9]+"$"#;
const MANIFEST_TEMPLATE: &str = r#"version = "{version}""#;

/// The canonical source for the default layout: the root manifest's version.
pub fn canonical_source() -> CanonicalSource {
    CanonicalSource::default()
}

fn from_table(table: &[(&str, &str, &str)]) -> Vec<Rule> {
    table
        .iter()
        .map(|(path, pattern, replacement)| Rule::new(*path, *pattern, *replacement))
        .collect()
}

/// Build the default rule set in application order.
pub fn builtin_rules() -> RuleSet {
    let mut rules: Vec<Rule> = CARGO_MANIFESTS
        .iter()
        .map(|path| Rule::new(*path, MANIFEST_PATTERN, MANIFEST_TEMPLATE))
        .collect();

    rules.extend(from_table(SINGLE_FILE_RULES));
    rules.extend(
        SCHEMA_FILES
            .iter()
            .map(|path| Rule::new(*path, SCHEMA_ID_PATTERN, SCHEMA_ID_TEMPLATE)),
    );
    rules.extend(from_table(SCHEMA_RULES));
    rules.extend(from_table(README_HEADINGS));
    for readme in READMES {
        rules.extend(
            README_REFERENCES
                .iter()
                .map(|(pattern, replacement)| Rule::new(*readme, *pattern, *replacement)),
        );
    }
    rules.extend(from_table(EXAMPLE_RULES));

    RuleSet::new(rules)
}
