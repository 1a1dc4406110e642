// SPDX-License-Identifier: PMPL-1.0-or-later

//! Dictionary coverage checker
//!
//! Flags constants that the SDK documentation mentions but the dictionary
//! does not declare. Report-only: fixing a gap means editing the catalog
//! by hand.
//!
//! The pipeline reads everything up front, then compares:
//! 1. [`constants`] extracts declared keys from a constants-definition text
//! 2. [`docs`] collects candidate tokens per documentation section
//! 3. [`compare`] normalises iOS-prefixed tokens and diffs the two
//!
//! Any read failure aborts the run before a report is produced.

pub mod compare;
pub mod constants;
pub mod docs;
pub mod normalize;
pub mod report;

use crate::config::CheckerConfig;
use crate::i18n::Registry;
use anyhow::Result;

pub use compare::{compare, CoverageReport, MissingEntry};
pub use docs::{DocScanner, SectionTokens};
pub use report::ReportFormat;

/// Label used for the constants source when checking the built-in registry.
pub const BUILTIN_SOURCE: &str = "built-in dictionary";

/// Run the checker described by `config`.
///
/// Without `config.constants`, the declared keys come from `registry`
/// rendered as constant definitions.
pub fn run(config: &CheckerConfig, registry: &Registry) -> Result<CoverageReport> {
    let (source, declared) = match &config.constants {
        Some(path) => (
            path.display().to_string(),
            constants::extract_declared_keys_from_file(path)?,
        ),
        None => (
            BUILTIN_SOURCE.to_string(),
            constants::extract_declared_keys(&registry.render_declarations()),
        ),
    };
    tracing::info!(source = %source, keys = declared.len(), "declared keys extracted");

    let scanner = DocScanner::new(config.effective_stoplist());
    let sections = scanner.scan_dir(&config.docs_dir, config.normalized_extension())?;
    tracing::info!(
        dir = %config.docs_dir.display(),
        sections = sections.len(),
        "documentation scanned"
    );

    Ok(compare(&source, &declared, &sections, config))
}
