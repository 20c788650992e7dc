use std::{
    ffi::OsString,
    fs::{self, File, Metadata},
    io::{self, BufRead, BufReader, Read, Write},
    path::{Path, PathBuf},
};

use filetime::FileTime;
use tracing::debug;

use crate::config::RewriteConfig;
use crate::errors::{FixError, FixWarning};
use crate::report::{Event, Reporter};
use crate::shebang::fix_line;

/// Size of the chunks the body of a rewritten file is copied in.
pub const CHUNK_SIZE: usize = 8 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Unchanged,
    Updated { backup: Option<PathBuf> },
}

/// Rewrites the shebang of a single file in place.
///
/// The new content goes to `@<name>` next to the file first and is then
/// renamed over it, so the original name never points at a half-written file.
/// Nothing is written when the first line is already correct.
///
/// # Errors
/// Returns a [`FixError`] when the file cannot be read, the temp file cannot
/// be written, the temp file cannot be moved into place, or the timestamps
/// cannot be restored. Warnings are sent to `reporter` instead.
pub fn fix_file(
    path: &Path,
    config: &RewriteConfig,
    reporter: &mut dyn Reporter,
) -> Result<FileOutcome, FixError> {
    let open_error = |source| FixError::Open {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(open_error)?;
    let original = file.metadata();
    let mut reader = BufReader::with_capacity(CHUNK_SIZE, file);
    let mut line = Vec::new();
    reader.read_until(b'\n', &mut line).map_err(open_error)?;

    let fixed = fix_line(&line, config);
    if *fixed == line[..] {
        reporter.report(Event::NoChange(path.to_path_buf()));
        return Ok(FileOutcome::Unchanged);
    }

    let temp = sibling(path, "@", "");
    let mut out = File::create(&temp).map_err(|source| FixError::CreateTemp {
        temp: temp.clone(),
        source,
    })?;
    reporter.report(Event::Updating(path.to_path_buf()));
    if let Err(source) = write_rewritten(&mut out, &fixed, &mut reader) {
        drop(out);
        let _ = fs::remove_file(&temp);
        return Err(FixError::CreateTemp { temp, source });
    }
    drop(out);
    drop(reader);

    let times = carry_over_metadata(original, &temp, reporter);

    let backup = if config.create_backup() {
        match make_backup(path) {
            Ok(backup) => Some(backup),
            Err(source) => {
                reporter.report(Event::Warning(FixWarning::Backup {
                    path: path.to_path_buf(),
                    source,
                }));
                None
            }
        }
    } else {
        None
    };

    // Without a backup the rename replaces the original in one step.
    fs::rename(&temp, path).map_err(|source| FixError::Rename {
        path: path.to_path_buf(),
        source,
    })?;

    if config.preserve_timestamps() {
        if let Some((atime, mtime)) = times {
            filetime::set_file_times(path, atime, mtime).map_err(|source| {
                FixError::ResetTimestamps {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
        }
    }

    reporter.report(Event::Updated(path.to_path_buf()));
    Ok(FileOutcome::Updated { backup })
}

fn write_rewritten(out: &mut File, first_line: &[u8], rest: &mut impl Read) -> io::Result<()> {
    out.write_all(first_line)?;
    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        let read = match rest.read(&mut buf) {
            Ok(0) => break,
            Ok(read) => read,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        out.write_all(&buf[..read])?;
    }
    out.flush()
}

/// Gives `temp` the permission bits of the original and returns its times.
///
/// Failing to stat the original or to chmod the temp file is only a warning.
fn carry_over_metadata(
    original: io::Result<Metadata>,
    temp: &Path,
    reporter: &mut dyn Reporter,
) -> Option<(FileTime, FileTime)> {
    let warn = |reporter: &mut dyn Reporter, source: io::Error| {
        reporter.report(Event::Warning(FixWarning::Chmod {
            temp: temp.to_path_buf(),
            source,
        }));
    };
    match original {
        Ok(meta) => {
            if let Err(source) = copy_mode(&meta, temp) {
                warn(reporter, source);
            }
            Some((
                FileTime::from_last_access_time(&meta),
                FileTime::from_last_modification_time(&meta),
            ))
        }
        Err(source) => {
            warn(reporter, source);
            None
        }
    }
}

#[cfg(unix)]
fn copy_mode(meta: &Metadata, dest: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mode = meta.permissions().mode() & 0o7777;
    fs::set_permissions(dest, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn copy_mode(meta: &Metadata, dest: &Path) -> io::Result<()> {
    fs::set_permissions(dest, meta.permissions())
}

/// Leaves the original content reachable as `<name>~`.
///
/// A hard link keeps the original name in place until the rewritten file is
/// renamed over it; filesystems without hard links get a plain rename.
fn make_backup(path: &Path) -> io::Result<PathBuf> {
    let backup = sibling(path, "", "~");
    match fs::remove_file(&backup) {
        Ok(()) => debug!(backup = %backup.display(), "replacing stale backup"),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    if let Err(err) = fs::hard_link(path, &backup) {
        debug!(%err, path = %path.display(), "hard link failed; renaming original to backup");
        fs::rename(path, &backup)?;
    }
    Ok(backup)
}

fn sibling(path: &Path, prefix: &str, suffix: &str) -> PathBuf {
    let mut name = OsString::from(prefix);
    name.push(path.file_name().unwrap_or_default());
    name.push(suffix);
    path.with_file_name(name)
}
