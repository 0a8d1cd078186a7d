//! Validation reports and their text/JSON renderings.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use crate::record::Record;
use crate::schema::SchemaValidator;
use crate::ui;
use crate::validator;
use crate::violation::{kinds, Violation, ViolationKind};

/// Outcome of validating one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordReport {
    /// File the record came from
    pub source: String,
    /// Position of the record within its file
    pub index: usize,
    pub violations: Vec<Violation>,
    /// Kinds the schema baseline reported, when they differ from ours
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_mismatch: Option<Vec<ViolationKind>>,
}

impl RecordReport {
    /// Validate `record`, optionally cross-checking it against `baseline`.
    pub fn build(
        source: impl Into<String>,
        index: usize,
        record: &Record,
        baseline: Option<&SchemaValidator>,
    ) -> Self {
        let violations = validator::validate(record);
        let baseline_mismatch = baseline.and_then(|schema| {
            let theirs = kinds(&schema.validate(record));
            (theirs != kinds(&violations)).then_some(theirs)
        });

        Self {
            source: source.into(),
            index,
            violations,
            baseline_mismatch,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn label(&self) -> String {
        format!("{}#{}", self.source, self.index)
    }
}

/// Totals over a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub records: usize,
    pub valid: usize,
    pub invalid: usize,
    pub mismatches: usize,
}

impl Summary {
    pub fn from_reports(reports: &[RecordReport]) -> Self {
        let valid = reports.iter().filter(|r| r.is_valid()).count();
        Self {
            records: reports.len(),
            valid,
            invalid: reports.len() - valid,
            mismatches: reports
                .iter()
                .filter(|r| r.baseline_mismatch.is_some())
                .count(),
        }
    }

    /// True when every record passed and the baseline never disagreed.
    pub fn is_clean(&self) -> bool {
        self.invalid == 0 && self.mismatches == 0
    }
}

/// Render reports as colored text, one block per record plus a summary line.
pub fn format_text(reports: &[RecordReport], show_valid: bool) -> String {
    let mut output = Vec::new();

    for report in reports {
        if report.is_valid() && !show_valid {
            continue;
        }

        output.push(format!(
            "  {} {}",
            ui::outcome_icon(report.is_valid()),
            report.label().cyan()
        ));
        for violation in &report.violations {
            output.push(format!(
                "      {} {} {}",
                "→".cyan(),
                violation.kind.to_string().bold(),
                violation.message
            ));
        }
    }

    let summary = Summary::from_reports(reports);
    output.push(String::new());
    output.push(format_summary(&summary));
    output.join("\n")
}

fn format_summary(summary: &Summary) -> String {
    let noun = if summary.records == 1 {
        "record"
    } else {
        "records"
    };
    let mut line = format!(
        "{} {}: {} valid, {} invalid",
        summary.records,
        noun,
        summary.valid.to_string().green(),
        summary.invalid.to_string().red()
    );
    if summary.mismatches > 0 {
        line.push_str(&format!(
            ", {} baseline mismatch(es)",
            summary.mismatches.to_string().yellow()
        ));
    }
    line
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: Summary,
    records: &'a [RecordReport],
}

/// Render reports as a single pretty-printed JSON document.
pub fn format_json(reports: &[RecordReport]) -> Result<String> {
    let doc = JsonReport {
        summary: Summary::from_reports(reports),
        records: reports,
    };
    serde_json::to_string_pretty(&doc).context("Failed to serialize report as JSON")
}
