use std::io::{self, Write};

use pathfix_core::{Event, Reporter, RunSummary};
use serde_json::{json, Value};

use crate::style::Style;

/// Prints progress on stdout and diagnostics on stderr as they happen.
pub struct ConsoleReporter {
    style: Style,
}

impl ConsoleReporter {
    pub fn new(style: Style) -> Self {
        Self { style }
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, event: Event) {
        // Progress and diagnostics interleave; flush stdout before stderr writes.
        match &event {
            Event::NoChange(path) => println!("{}: no change", path.display()),
            Event::Updating(path) => println!("{}: updating", path.display()),
            Event::Updated(_) => {}
            Event::Warning(warning) => {
                let _ = io::stdout().flush();
                eprintln!("{}", self.style.warning(&warning.to_string()));
            }
            Event::Error(err) => {
                let _ = io::stdout().flush();
                eprintln!("{}", self.style.error(&err.to_string()));
            }
        }
    }
}

pub fn summary_message(summary: &RunSummary) -> String {
    format!(
        "pathfix: {} updated, {} unchanged, {} failed",
        summary.updated, summary.unchanged, summary.failed
    )
}

pub fn to_json_response(summary: &RunSummary, events: &[Event]) -> Value {
    let status = if summary.is_success() { "ok" } else { "error" };
    let mut files = Vec::new();
    let mut warnings = Vec::new();
    let mut errors = Vec::new();
    for event in events {
        match event {
            Event::NoChange(path) => files.push(json!({
                "path": path.display().to_string(),
                "status": "unchanged",
            })),
            // Stays "failed" unless the matching `Updated` arrives.
            Event::Updating(path) => files.push(json!({
                "path": path.display().to_string(),
                "status": "failed",
            })),
            Event::Updated(path) => {
                let shown = path.display().to_string();
                if let Some(entry) = files
                    .iter_mut()
                    .rev()
                    .find(|entry| entry["path"] == shown.as_str())
                {
                    entry["status"] = json!("updated");
                }
            }
            Event::Warning(warning) => warnings.push(json!({
                "kind": warning.kind(),
                "path": warning.path().display().to_string(),
                "message": warning.to_string(),
            })),
            Event::Error(err) => errors.push(json!({
                "kind": err.kind(),
                "path": err.path().display().to_string(),
                "message": err.to_string(),
            })),
        }
    }
    json!({
        "status": status,
        "message": summary_message(summary),
        "details": {
            "updated": summary.updated,
            "unchanged": summary.unchanged,
            "failed": summary.failed,
            "files": files,
            "warnings": warnings,
            "errors": errors,
        },
    })
}
