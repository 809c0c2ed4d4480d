use crate::domain::rule::compile_line_pattern;
use crate::domain::{CanonicalSource, Version};
use crate::error::{Result, VersionSyncError};
use crate::tree::Tree;

/// Reads the authoritative version from the canonical source.
///
/// Lines are scanned in order and the first one matching `source.pattern`
/// wins; its first capture group must hold the version. The result is the
/// root of trust for a check and is never itself verified.
///
/// # Returns
/// * `Ok(Version)` - The canonical version
/// * `Err(CanonicalVersionNotFound)` - If no line matches, or the captured text is not `X.Y.Z`
/// * `Err(FileNotFound / Io)` - If the source cannot be read
pub fn read_canonical_version<T: Tree + ?Sized>(
    tree: &T,
    source: &CanonicalSource,
) -> Result<Version> {
    let re = compile_line_pattern(&source.pattern)?;
    let text = tree.read(&source.path)?;

    let captured = text
        .lines()
        .find_map(|line| re.captures(line))
        .and_then(|caps| caps.get(1).map(|m| m.as_str().to_string()));

    match captured {
        Some(raw) => Version::parse(&raw).map_err(|_| VersionSyncError::CanonicalVersionNotFound {
            path: source.path.clone(),
        }),
        None => Err(VersionSyncError::CanonicalVersionNotFound {
            path: source.path.clone(),
        }),
    }
}
