// SPDX-License-Identifier: PMPL-1.0-or-later

//! Constant-definition extractor
//!
//! Pulls keys out of `export const NAME = { KEY: value, ... };` blocks.
//! Line-oriented and regex-driven: a key is a line-leading identifier
//! followed by a colon. Nested or unusually formatted blocks may yield
//! fewer keys; that is not reported.

use anyhow::{Context, Result};
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

static BLOCK_REGEX: OnceLock<Regex> = OnceLock::new();
static KEY_REGEX: OnceLock<Regex> = OnceLock::new();

fn block_regex() -> &'static Regex {
    BLOCK_REGEX.get_or_init(|| {
        Regex::new(r"(?s)export const (\w+) = \{(.+?)\};").expect("valid block regex")
    })
}

fn key_regex() -> &'static Regex {
    KEY_REGEX.get_or_init(|| Regex::new(r"^(\w+):").expect("valid key regex"))
}

/// Every key declared in any block of `source`, flattened into one set.
pub fn extract_declared_keys(source: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();

    for block in block_regex().captures_iter(source) {
        let name = &block[1];
        let before = keys.len();

        for line in block[2].lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with("//") {
                continue;
            }
            if let Some(key) = key_regex().captures(line) {
                keys.insert(key[1].to_string());
            }
        }

        tracing::debug!(block = name, new_keys = keys.len() - before, "declaration block");
    }

    keys
}

/// Read `path` and extract its declared keys. A read failure is fatal.
pub fn extract_declared_keys_from_file(path: &Path) -> Result<BTreeSet<String>> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("reading constants {}", path.display()))?;
    Ok(extract_declared_keys(&source))
}
