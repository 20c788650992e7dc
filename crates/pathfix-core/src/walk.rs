use std::{
    fs,
    ops::AddAssign,
    path::Path,
};

use tracing::{debug, trace};

use crate::config::RewriteConfig;
use crate::errors::FixError;
use crate::fix::{fix_file, FileOutcome};
use crate::report::{Event, Reporter};

/// Tally of a run; any failure makes the process exit with 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub updated: usize,
    pub unchanged: usize,
    pub failed: usize,
}

impl RunSummary {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.is_success())
    }

    fn record(&mut self, result: Result<FileOutcome, FixError>, reporter: &mut dyn Reporter) {
        match result {
            Ok(FileOutcome::Unchanged) => self.unchanged += 1,
            Ok(FileOutcome::Updated { .. }) => self.updated += 1,
            Err(err) => self.fail(err, reporter),
        }
    }

    fn fail(&mut self, err: FixError, reporter: &mut dyn Reporter) {
        self.failed += 1;
        reporter.report(Event::Error(err));
    }
}

impl AddAssign for RunSummary {
    fn add_assign(&mut self, other: Self) {
        self.updated += other.updated;
        self.unchanged += other.unchanged;
        self.failed += other.failed;
    }
}

/// Names that look like a python module: `[A-Za-z0-9_]+\.py`.
#[must_use]
pub fn is_python_module_name(name: &str) -> bool {
    name.strip_suffix(".py").is_some_and(|stem| {
        !stem.is_empty()
            && stem
                .bytes()
                .all(|byte| byte.is_ascii_alphanumeric() || byte == b'_')
    })
}

/// Processes every command-line target in order.
///
/// Directories (including symlinks to them) are walked; any other symlink is
/// refused; everything else is fixed whatever its name.
pub fn run<P: AsRef<Path>>(
    targets: &[P],
    config: &RewriteConfig,
    reporter: &mut dyn Reporter,
) -> RunSummary {
    let mut summary = RunSummary::default();
    for target in targets {
        let target = target.as_ref();
        if target.is_dir() {
            summary += recurse_down(target, config, reporter);
        } else if target.is_symlink() {
            summary.fail(
                FixError::SymlinkArgument {
                    path: target.to_path_buf(),
                },
                reporter,
            );
        } else {
            summary.record(fix_file(target, config, reporter), reporter);
        }
    }
    summary
}

/// Walks `dir` depth-first: files in name order, then subdirectories.
///
/// Symlinks found along the way are skipped without comment.
pub fn recurse_down(
    dir: &Path,
    config: &RewriteConfig,
    reporter: &mut dyn Reporter,
) -> RunSummary {
    debug!(dir = %dir.display(), "recursing into directory");
    let mut summary = RunSummary::default();
    let mut entries = match list_dir(dir) {
        Ok(entries) => entries,
        Err(source) => {
            summary.fail(
                FixError::ListDirectory {
                    path: dir.to_path_buf(),
                    source,
                },
                reporter,
            );
            return summary;
        }
    };
    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let mut subdirs = Vec::new();
    for entry in entries {
        let path = entry.path();
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(source) => {
                summary.fail(FixError::Open { path, source }, reporter);
                continue;
            }
        };
        if file_type.is_symlink() {
            debug!(path = %path.display(), "skipping symbolic link");
        } else if file_type.is_dir() {
            subdirs.push(path);
        } else if entry.file_name().to_str().is_some_and(is_python_module_name) {
            summary.record(fix_file(&path, config, reporter), reporter);
        } else {
            trace!(path = %path.display(), "not a python module name");
        }
    }

    for subdir in subdirs {
        summary += recurse_down(&subdir, config, reporter);
    }
    summary
}

fn list_dir(dir: &Path) -> std::io::Result<Vec<fs::DirEntry>> {
    fs::read_dir(dir)?.collect()
}
