// SPDX-License-Identifier: PMPL-1.0-or-later

//! Coverage checker configuration.
//!
//! Defaults describe the usual layout (scraped Markdown docs under
//! `scraped_site/`, the built-in dictionary as the constants source). A YAML
//! file can replace any field; CLI flags are applied on top by the caller.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DOCS_DIR: &str = "scraped_site";
pub const DEFAULT_EXTENSION: &str = "md";

/// Uppercase words in the docs that are never SDK constants.
pub const DEFAULT_STOPLIST: &[&str] = &[
    "SENTIANCE", "SDK", "API", "URL", "ID", "UTC", "MB", "GB", "GPS", "OSM", "IOS", "ANDROID",
];

/// Heading substrings (case-insensitive) that mark a section documenting
/// one of the dictionary's categories.
pub const DEFAULT_RELEVANT_SECTIONS: &[&str] = &[
    "SegmentType",
    "SENTSegmentType",
    "TransportMode",
    "SENTTransportMode",
    "VenueType",
    "SENTVenueType",
    "EventType",
    "SENTTimelineEventType",
    "OccupantRole",
    "SENTOccupantRole",
    "SemanticTime",
    "SENTSemanticTime",
    "VenueSignificance",
    "SENTVenueSignificance",
    "SegmentCategory",
    "SENTSegmentCategory",
    "SegmentSubcategory",
    "SENTSegmentSubCategory",
    "HarshDrivingEventType",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Constants-definition text. `None` checks the built-in dictionary.
    pub constants: Option<PathBuf>,
    /// Directory of documentation files (not walked recursively).
    pub docs_dir: PathBuf,
    /// Extension of documentation files, without the dot.
    pub extension: String,
    pub stoplist: Vec<String>,
    /// Appended to `stoplist`, so a config file can extend the defaults.
    pub extra_stoplist: Vec<String>,
    pub relevant_sections: Vec<String>,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            constants: None,
            docs_dir: PathBuf::from(DEFAULT_DOCS_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
            stoplist: DEFAULT_STOPLIST.iter().map(|s| s.to_string()).collect(),
            extra_stoplist: Vec::new(),
            relevant_sections: DEFAULT_RELEVANT_SECTIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl CheckerConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// `stoplist` and `extra_stoplist` combined.
    pub fn effective_stoplist(&self) -> BTreeSet<String> {
        self.stoplist
            .iter()
            .chain(self.extra_stoplist.iter())
            .cloned()
            .collect()
    }

    /// Extension with any leading dot removed.
    pub fn normalized_extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }

    /// Whether `label` contains one of the relevant section substrings,
    /// ignoring case.
    pub fn is_relevant_section(&self, label: &str) -> bool {
        let label = label.to_lowercase();
        self.relevant_sections
            .iter()
            .any(|s| label.contains(&s.to_lowercase()))
    }
}
