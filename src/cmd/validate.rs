//! `fieldcheck validate`: validate record files and report violations.

use anyhow::Result;
use std::path::PathBuf;

use fieldcheck::config::{Config, OutputFormat};
use fieldcheck::record::load_records;
use fieldcheck::report::{self, RecordReport, Summary};
use fieldcheck::schema::SchemaValidator;
use fieldcheck::ui;
use fieldcheck::violation::kinds;

/// Options for a validate run. `None` fields fall back to config.
#[derive(Debug, Default)]
pub struct ValidateOptions {
    pub format: Option<OutputFormat>,
    pub compare: bool,
}

/// Validate every record in `files` and print the report.
///
/// Returns whether the run was clean (no violations, no baseline
/// mismatches). Unreadable or malformed files abort the run.
pub fn cmd_validate(files: &[PathBuf], options: ValidateOptions) -> Result<bool> {
    let config = Config::load()?;
    let format = options.format.unwrap_or(config.output.format);
    let show_valid = config.output.show_valid && !ui::is_quiet();

    let baseline = if options.compare || config.compare.baseline {
        Some(SchemaValidator::new()?)
    } else {
        None
    };

    let mut reports = Vec::new();
    for path in files {
        let records = load_records(path)?;
        if records.is_empty() {
            ui::warn(&format!("{} contains no records", path.display()));
        }

        let source = path.display().to_string();
        for (index, record) in records.iter().enumerate() {
            let report = RecordReport::build(source.as_str(), index, record, baseline.as_ref());
            if let Some(theirs) = &report.baseline_mismatch {
                ui::warn(&format!(
                    "{}: baseline reported {:?}, validator reported {:?}",
                    report.label(),
                    theirs,
                    kinds(&report.violations)
                ));
            }
            reports.push(report);
        }
    }

    match format {
        OutputFormat::Text => println!("{}", report::format_text(&reports, show_valid)),
        OutputFormat::Json => println!("{}", report::format_json(&reports)?),
    }

    Ok(Summary::from_reports(&reports).is_clean())
}
