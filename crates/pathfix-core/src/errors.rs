use std::{io, path::PathBuf};

/// Failures that stop work on a single target.
#[derive(thiserror::Error, Debug)]
pub enum FixError {
    #[error("{}: cannot open: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("{}: cannot create: {source}", temp.display())]
    CreateTemp { temp: PathBuf, source: io::Error },
    #[error("{}: rename failed ({source})", path.display())]
    Rename { path: PathBuf, source: io::Error },
    #[error("{}: reset of timestamp failed ({source})", path.display())]
    ResetTimestamps { path: PathBuf, source: io::Error },
    #[error("{}: will not process symbolic links", path.display())]
    SymlinkArgument { path: PathBuf },
    #[error("{}: cannot list directory: {source}", path.display())]
    ListDirectory { path: PathBuf, source: io::Error },
}

impl FixError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Open { path, .. }
            | Self::Rename { path, .. }
            | Self::ResetTimestamps { path, .. }
            | Self::SymlinkArgument { path }
            | Self::ListDirectory { path, .. } => path,
            Self::CreateTemp { temp, .. } => temp,
        }
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Open { .. } => "open",
            Self::CreateTemp { .. } => "create_temp",
            Self::Rename { .. } => "rename",
            Self::ResetTimestamps { .. } => "reset_timestamps",
            Self::SymlinkArgument { .. } => "symlink_argument",
            Self::ListDirectory { .. } => "list_directory",
        }
    }
}

/// Problems that are reported but leave the rewrite of a file going.
#[derive(thiserror::Error, Debug)]
pub enum FixWarning {
    #[error("{}: warning: chmod failed ({source})", temp.display())]
    Chmod { temp: PathBuf, source: io::Error },
    #[error("{}: warning: backup failed ({source})", path.display())]
    Backup { path: PathBuf, source: io::Error },
}

impl FixWarning {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Chmod { temp, .. } => temp,
            Self::Backup { path, .. } => path,
        }
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Chmod { .. } => "chmod",
            Self::Backup { .. } => "backup",
        }
    }
}
