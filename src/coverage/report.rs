// SPDX-License-Identifier: PMPL-1.0-or-later

//! Coverage report rendering

use super::compare::CoverageReport;
use anyhow::Result;
use clap::ValueEnum;
use colored::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn render(&self, report: &CoverageReport, color: bool) -> Result<String> {
        match self {
            ReportFormat::Text => Ok(render_text(report, color)),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        }
    }
}

fn paint(text: &str, color: bool, style: fn(ColoredString) -> ColoredString) -> String {
    if color {
        style(text.normal()).to_string()
    } else {
        text.to_string()
    }
}

/// Line-oriented console report.
pub fn render_text(report: &CoverageReport, color: bool) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "Checking for missing constants in {}...",
        report.constants_source
    ));

    if report.is_complete() {
        lines.push(paint("No missing constants found.", color, |s| s.green()));
        return lines.join("\n");
    }

    lines.push(paint(
        &format!(
            "MISSING CONSTANTS (In docs but not in {}):",
            report.constants_source
        ),
        color,
        |s| s.bold().red(),
    ));

    for (label, entries) in &report.missing {
        lines.push(String::new());
        lines.push(paint(&format!("Category: {}", label), color, |s| s.bold().yellow()));
        for entry in entries {
            lines.push(format!("  - {}", entry.label()));
        }
    }

    if !report.stoplist_candidates.is_empty() {
        lines.push(String::new());
        lines.push(paint(
            "Possible acronyms (consider extending the stoplist):",
            color,
            |s| s.dimmed(),
        ));
        for token in &report.stoplist_candidates {
            lines.push(format!("  - {}", token));
        }
    }

    lines.join("\n")
}
