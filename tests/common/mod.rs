//! Builds a project tree on disk matching the built-in rule table.
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use version_sync::registry::{CARGO_MANIFESTS, SCHEMA_FILES};

pub fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

pub fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

fn schema(rel: &str, version: &str) -> String {
    let id = format!(
        "https://raw.githubusercontent.com/viasnake/arbiter/v{}/{}",
        version, rel
    );
    match rel {
        "config/config.schema.json" => format!(
            "{{\n  \"$schema\": \"https://json-schema.org/draft/2020-12/schema\",\n  \"$id\": \"{}\",\n  \"title\": \"Arbiter Configuration Schema v{}\",\n  \"type\": \"object\"\n}}\n",
            id, version
        ),
        "contracts/v1/ops.contracts_metadata.schema.json" => format!(
            "{{\n  \"$id\": \"{}\",\n  \"type\": \"object\",\n  \"properties\": {{\n    \"api_version\": {{ \"type\": \"string\", \"const\": \"{}\" }},\n    \"schemas\": {{ \"type\": \"array\" }}\n  }}\n}}\n",
            id, version
        ),
        _ => format!("{{\n  \"$id\": \"{}\",\n  \"type\": \"object\"\n}}\n", id),
    }
}

fn readme(heading: &str, version: &str, with_policy: bool) -> String {
    let mut text = format!(
        "# Arbiter\n\n{heading}\n\n```sh\ndocker pull ghcr.io/viasnake/arbiter:v{v}\n\ndocker run --rm \\\n  ghcr.io/viasnake/arbiter:v{v} \\\n  serve\n```\n\nSchema: https://raw.githubusercontent.com/viasnake/arbiter/v{v}/contracts/v1/ops.event.schema.json\n\nRelease notes: `docs/releases/v{v}.md`\n",
        heading = heading,
        v = version
    );
    if with_policy {
        text.push_str(&format!(
            "\n```json\n{{\n  \"policy_version\": \"policy:v{}\",\n  \"mode\": \"enforce\"\n}}\n```\n",
            version
        ));
    }
    text
}

/// Write every file the built-in registry touches, all at `version`.
pub fn write_project(root: &Path, version: &str) {
    for (i, manifest) in CARGO_MANIFESTS.iter().enumerate() {
        let contents = if i == 0 {
            format!(
                "[workspace]\nmembers = [\"crates/*\"]\n\n[workspace.package]\nversion = \"{}\"\nedition = \"2021\"\n",
                version
            )
        } else {
            format!(
                "[package]\nname = \"crate-{}\"\nversion = \"{}\"\nedition = \"2021\"\n\n[dependencies]\nserde = {{ version = \"1.0\" }}\n",
                i, version
            )
        };
        write(root, manifest, &contents);
    }

    write(
        root,
        "openapi/v1.yaml",
        &format!(
            "openapi: 3.0.3\ninfo:\n  title: Arbiter API\n  version: {}\npaths: {{}}\n",
            version
        ),
    );
    write(
        root,
        "crates/arbiter-contracts/src/lib.rs",
        &format!(
            "pub const API_VERSION: &str = \"{}\";\n\npub fn api_version() -> &'static str {{\n    API_VERSION\n}}\n",
            version
        ),
    );
    for rel in SCHEMA_FILES {
        write(root, rel, &schema(rel, version));
    }
    write(
        root,
        "README.md",
        &readme(&format!("## API surface (v{})", version), version, true),
    );
    write(
        root,
        "README.ja.md",
        &readme(&format!("## API (v{})", version), version, false),
    );
    write(
        root,
        "config/example-config.yaml",
        &format!("policy:\n  version: \"policy:v{}\"\n  mode: enforce\n", version),
    );
}
