//! Minimal java-properties reader, enough for sbt `build.properties` files.

use crate::error::Result;
use std::collections::BTreeMap;
use std::path::Path;

pub fn load(path: &Path) -> Result<BTreeMap<String, String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse(&content))
}

/// Parses `key=value` / `key:value` lines. Comment lines start with `#` or
/// `!`; lines without a separator are ignored.
pub fn parse(content: &str) -> BTreeMap<String, String> {
    let mut properties = BTreeMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        let Some(split) = line.find(['=', ':']) else {
            continue;
        };
        let key = line[..split].trim();
        let value = line[split + 1..].trim();
        if !key.is_empty() {
            properties.insert(key.to_string(), value.to_string());
        }
    }
    properties
}
