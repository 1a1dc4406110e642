// SPDX-License-Identifier: PMPL-1.0-or-later

//! Documentation token scanner
//!
//! Walks the documentation files of one directory line by line, tracking the
//! most recent `#` heading as the section label, and collects uppercase
//! tokens that look like SDK constants under that label. Sections with the
//! same label in different files share one token set.

use super::normalize::split_prefix;
use anyhow::{bail, Context, Result};
use regex::Regex;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Section label -> candidate tokens.
pub type SectionTokens = BTreeMap<String, BTreeSet<String>>;

static UPPERCASE_TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();
static PREFIXED_TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

fn uppercase_token_regex() -> &'static Regex {
    UPPERCASE_TOKEN_REGEX
        .get_or_init(|| Regex::new(r"\b[A-Z][A-Z0-9_]{2,}\b").expect("valid token regex"))
}

fn prefixed_token_regex() -> &'static Regex {
    PREFIXED_TOKEN_REGEX
        .get_or_init(|| Regex::new(r"\bSENT[A-Za-z0-9_]+\b").expect("valid prefix regex"))
}

/// Uppercase and iOS-prefixed tokens on one line, stoplist not applied.
pub fn line_tokens(line: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = uppercase_token_regex()
        .find_iter(line)
        .map(|m| m.as_str())
        .collect();
    tokens.extend(
        prefixed_token_regex()
            .find_iter(line)
            .map(|m| m.as_str())
            .filter(|t| matches!(split_prefix(t), Some((_, _, rest)) if !rest.is_empty())),
    );
    tokens
}

/// Heading label for `line`, if it is a heading.
pub fn heading_label(line: &str) -> Option<String> {
    if line.starts_with('#') {
        Some(line.replace('#', "").trim().to_string())
    } else {
        None
    }
}

pub struct DocScanner {
    stoplist: BTreeSet<String>,
}

impl DocScanner {
    pub fn new(stoplist: BTreeSet<String>) -> Self {
        Self { stoplist }
    }

    /// Scan one document's text into `sections`.
    pub fn scan_text(&self, text: &str, sections: &mut SectionTokens) {
        let mut current = String::new();

        for line in text.lines() {
            if let Some(label) = heading_label(line) {
                current = label;
            }

            for token in line_tokens(line) {
                if self.stoplist.contains(token) {
                    continue;
                }
                sections
                    .entry(current.clone())
                    .or_default()
                    .insert(token.to_string());
            }
        }
    }

    /// Scan every `*.<extension>` file directly inside `dir`.
    ///
    /// Any read failure aborts the scan.
    pub fn scan_dir(&self, dir: &Path, extension: &str) -> Result<SectionTokens> {
        if !dir.is_dir() {
            bail!("documentation directory not found: {}", dir.display());
        }

        let files = doc_files(dir, extension)?;
        if files.is_empty() {
            tracing::warn!(dir = %dir.display(), extension, "no documentation files found");
        }

        let mut sections = SectionTokens::new();
        for file in &files {
            let bytes =
                fs::read(file).with_context(|| format!("reading {}", file.display()))?;
            let text = String::from_utf8_lossy(&bytes);
            if matches!(text, Cow::Owned(_)) {
                tracing::warn!(file = %file.display(), "invalid UTF-8 replaced while scanning");
            }
            tracing::debug!(file = %file.display(), "scanning");
            self.scan_text(&text, &mut sections);
        }

        Ok(sections)
    }
}

/// Documentation files in `dir` (non-recursive), sorted by path.
fn doc_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("reading {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext == extension)
                .unwrap_or(false)
        })
        .collect();
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_STOPLIST;

    fn scanner() -> DocScanner {
        DocScanner::new(DEFAULT_STOPLIST.iter().map(|s| s.to_string()).collect())
    }

    fn tokens<'a>(sections: &'a SectionTokens, label: &str) -> Vec<&'a str> {
        sections
            .get(label)
            .map(|s| s.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    #[test]
    fn token_pattern() {
        assert_eq!(line_tokens("CAR and BUS, ON_FOOT, PHYSICAL_ACTIVITY__HIGH"), vec![
            "CAR",
            "BUS",
            "ON_FOOT",
            "PHYSICAL_ACTIVITY__HIGH"
        ]);
        // two characters is too short, lowercase breaks the word
        assert!(line_tokens("ID Car car CaR").is_empty());
        assert_eq!(line_tokens("A1B2 V2X"), vec!["A1B2", "V2X"]);
    }

    #[test]
    fn prefixed_tokens_are_captured() {
        assert_eq!(
            line_tokens("case SENTSegmentTypeBarGoer:"),
            vec!["SENTSegmentTypeBarGoer"]
        );
        assert_eq!(
            line_tokens("SENTSegmentTypeBAR_GOER"),
            vec!["SENTSegmentTypeBAR_GOER"]
        );
        // bare prefix or unknown prefix
        assert!(line_tokens("enum SENTSegmentType").is_empty());
        assert!(line_tokens("SENTWidgetFoo").is_empty());
    }

    #[test]
    fn heading_labels() {
        assert_eq!(heading_label("## TransportMode ##").as_deref(), Some("TransportMode"));
        assert_eq!(heading_label("#SemanticTime").as_deref(), Some("SemanticTime"));
        assert_eq!(heading_label(" # not a heading"), None);
    }

    #[test]
    fn tokens_grouped_under_latest_heading() {
        let mut sections = SectionTokens::new();
        scanner().scan_text(
            "Intro with WALKING\n# TransportMode\n- BOAT\n- CAR via the SDK API\n## OccupantRole\nDRIVER PASSENGER\n",
            &mut sections,
        );
        assert_eq!(tokens(&sections, ""), vec!["WALKING"]);
        assert_eq!(tokens(&sections, "TransportMode"), vec!["BOAT", "CAR"]);
        assert_eq!(tokens(&sections, "OccupantRole"), vec!["DRIVER", "PASSENGER"]);
    }

    #[test]
    fn heading_line_itself_is_scanned() {
        let mut sections = SectionTokens::new();
        scanner().scan_text("# Values: UNKNOWN\n", &mut sections);
        assert_eq!(tokens(&sections, "Values: UNKNOWN"), vec!["UNKNOWN"]);
    }

    #[test]
    fn stoplist_filters() {
        let mut sections = SectionTokens::new();
        scanner().scan_text("# VenueType\nSENTIANCE GPS IOS ANDROID OFFICE\n", &mut sections);
        assert_eq!(tokens(&sections, "VenueType"), vec!["OFFICE"]);
    }

    #[test]
    fn same_label_accumulates_across_texts() {
        let mut sections = SectionTokens::new();
        let s = scanner();
        s.scan_text("# SegmentType\nBAR_GOER\n", &mut sections);
        s.scan_text("# SegmentType\nFOODIE\nBAR_GOER\n", &mut sections);
        assert_eq!(tokens(&sections, "SegmentType"), vec!["BAR_GOER", "FOODIE"]);
    }

    #[test]
    fn scan_dir_is_flat_and_filters_extension() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(dir.path().join("a.md"), "# TransportMode\nBOAT\n").unwrap();
        fs::write(dir.path().join("b.txt"), "# TransportMode\nPLANE\n").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/c.md"), "# TransportMode\nTRAIN\n").unwrap();

        let sections = scanner().scan_dir(dir.path(), "md").unwrap();
        assert_eq!(tokens(&sections, "TransportMode"), vec!["BOAT"]);
    }

    #[test]
    fn scan_dir_missing_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(scanner().scan_dir(&dir.path().join("absent"), "md").is_err());
    }

    #[test]
    fn scan_dir_tolerates_invalid_utf8() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(dir.path().join("a.md"), b"# EventType\n\xff STATIONARY\n").unwrap();
        let sections = scanner().scan_dir(dir.path(), "md").unwrap();
        assert_eq!(tokens(&sections, "EventType"), vec!["STATIONARY"]);
    }
}
