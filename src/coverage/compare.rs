// SPDX-License-Identifier: PMPL-1.0-or-later

//! Coverage comparator
//!
//! Keeps the scanned sections whose label names a dictionary category and
//! reports every token found there whose raw and normalised forms are both
//! absent from the declared keys.

use super::docs::SectionTokens;
use super::normalize::normalize_token;
use crate::config::CheckerConfig;
use crate::i18n::Category;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// A documented token the dictionary does not declare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingEntry {
    pub raw: String,
    /// Normalised form, only when normalisation changed the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<String>,
    /// Category implied by an iOS prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl MissingEntry {
    /// `RAW` or `RAW (-> NORMALIZED)`.
    pub fn label(&self) -> String {
        match &self.normalized {
            Some(n) => format!("{} (-> {})", self.raw, n),
            None => self.raw.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageReport {
    /// Where the declared keys came from.
    pub constants_source: String,
    pub declared_keys: usize,
    pub sections_scanned: usize,
    pub relevant_sections: usize,
    /// Section label -> missing entries, sorted by label text.
    pub missing: BTreeMap<String, Vec<MissingEntry>>,
    /// Missing tokens that look like acronyms rather than constants.
    pub stoplist_candidates: Vec<String>,
}

impl CoverageReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn missing_count(&self) -> usize {
        self.missing.values().map(Vec::len).sum()
    }
}

/// Compare scanned documentation against the declared keys.
pub fn compare(
    constants_source: &str,
    declared: &BTreeSet<String>,
    sections: &SectionTokens,
    config: &CheckerConfig,
) -> CoverageReport {
    let mut missing: BTreeMap<String, Vec<MissingEntry>> = BTreeMap::new();
    let mut relevant = 0;

    for (label, tokens) in sections {
        if !config.is_relevant_section(label) {
            continue;
        }
        relevant += 1;

        for token in tokens {
            let normalized = normalize_token(token);
            if declared.contains(token) || declared.contains(&normalized.value) {
                continue;
            }
            let changed = normalized.value != *token;
            missing.entry(label.clone()).or_default().push(MissingEntry {
                raw: token.clone(),
                normalized: changed.then(|| normalized.value.clone()),
                category: normalized.category,
            });
        }
    }

    for entries in missing.values_mut() {
        entries.sort_by_key(MissingEntry::label);
        entries.dedup_by(|a, b| a.label() == b.label());
    }

    let stoplist_candidates = stoplist_candidates(&missing, sections);
    tracing::debug!(
        relevant,
        missing = missing.values().map(Vec::len).sum::<usize>(),
        "comparison done"
    );

    CoverageReport {
        constants_source: constants_source.to_string(),
        declared_keys: declared.len(),
        sections_scanned: sections.len(),
        relevant_sections: relevant,
        missing,
        stoplist_candidates,
    }
}

/// Short, underscore-free, unprefixed missing tokens that appear under two
/// or more section labels. Flagged only; they stay in the missing list.
fn stoplist_candidates(
    missing: &BTreeMap<String, Vec<MissingEntry>>,
    sections: &SectionTokens,
) -> Vec<String> {
    let looks_like_acronym = |e: &MissingEntry| {
        e.normalized.is_none() && !e.raw.contains('_') && e.raw.chars().count() <= 4
    };

    let candidates: BTreeSet<&str> = missing
        .values()
        .flatten()
        .filter(|e| looks_like_acronym(e))
        .map(|e| e.raw.as_str())
        .filter(|raw| sections.values().filter(|t| t.contains(*raw)).count() >= 2)
        .collect();

    candidates.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sections(items: &[(&str, &[&str])]) -> SectionTokens {
        items
            .iter()
            .map(|(label, tokens)| (label.to_string(), set(tokens)))
            .collect()
    }

    #[test]
    fn boat_missing_under_transport_mode() {
        let report = compare(
            "constants.js",
            &set(&["CAR"]),
            &sections(&[("TransportMode", &["BOAT", "CAR"])]),
            &CheckerConfig::default(),
        );
        let entries = &report.missing["TransportMode"];
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].raw, "BOAT");
        assert_eq!(entries[0].normalized, None);
        assert_eq!(entries[0].label(), "BOAT");
    }

    #[test]
    fn normalized_match_is_not_missing() {
        let report = compare(
            "constants.js",
            &set(&["BAR_GOER"]),
            &sections(&[("SegmentType", &["SENTSegmentTypeBAR_GOER", "SENTSegmentTypeBarGoer"])]),
            &CheckerConfig::default(),
        );
        assert!(report.is_complete());
    }

    #[test]
    fn normalized_form_shown_when_changed() {
        let report = compare(
            "constants.js",
            &set(&[]),
            &sections(&[("SENTTransportMode", &["SENTTransportModeElectricScooter"])]),
            &CheckerConfig::default(),
        );
        let entry = &report.missing["SENTTransportMode"][0];
        assert_eq!(entry.label(), "SENTTransportModeElectricScooter (-> ELECTRIC_SCOOTER)");
        assert_eq!(entry.category, Some(Category::TransportMode));
    }

    #[test]
    fn irrelevant_sections_are_ignored() {
        let report = compare(
            "constants.js",
            &set(&[]),
            &sections(&[("Installation", &["GRADLE"]), ("", &["WALKING"])]),
            &CheckerConfig::default(),
        );
        assert!(report.is_complete());
        assert_eq!(report.sections_scanned, 2);
        assert_eq!(report.relevant_sections, 0);
    }

    #[test]
    fn entries_sorted_by_label() {
        let report = compare(
            "constants.js",
            &set(&[]),
            &sections(&[("VenueType", &["TRAVEL_BUS", "HEALTH", "OFFICE"])]),
            &CheckerConfig::default(),
        );
        let labels: Vec<String> = report.missing["VenueType"].iter().map(|e| e.label()).collect();
        assert_eq!(labels, vec!["HEALTH", "OFFICE", "TRAVEL_BUS"]);
        assert_eq!(report.missing_count(), 3);
    }

    #[test]
    fn acronyms_seen_in_several_sections_are_flagged() {
        let report = compare(
            "constants.js",
            &set(&[]),
            &sections(&[
                ("TransportMode", &["BOAT", "JSON", "LONG_NAME"]),
                ("EventType", &["JSON"]),
                ("Setup", &["LONG_NAME"]),
            ]),
            &CheckerConfig::default(),
        );
        assert_eq!(report.stoplist_candidates, vec!["JSON".to_string()]);
        // still reported as missing
        assert!(report.missing["EventType"].iter().any(|e| e.raw == "JSON"));
    }
}
