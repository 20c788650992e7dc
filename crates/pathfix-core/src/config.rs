use std::path::{Path, PathBuf};

/// Settings shared by every file touched during a run.
///
/// Built once from the command line and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteConfig {
    interpreter: PathBuf,
    preserve_timestamps: bool,
    create_backup: bool,
    keep_flags: bool,
    add_flags: Vec<u8>,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("-i option or file-or-directory missing")]
    MissingInterpreter,
    #[error("interpreter must be an absolute path (got '{0}')")]
    RelativeInterpreter(String),
    #[error("-a option doesn't support whitespaces")]
    WhitespaceInFlags,
}

impl RewriteConfig {
    pub fn new(interpreter: impl Into<PathBuf>) -> Self {
        Self {
            interpreter: interpreter.into(),
            preserve_timestamps: false,
            create_backup: true,
            keep_flags: false,
            add_flags: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_preserve_timestamps(mut self, preserve: bool) -> Self {
        self.preserve_timestamps = preserve;
        self
    }

    #[must_use]
    pub fn with_backup(mut self, create_backup: bool) -> Self {
        self.create_backup = create_backup;
        self
    }

    #[must_use]
    pub fn with_keep_flags(mut self, keep: bool) -> Self {
        self.keep_flags = keep;
        self
    }

    #[must_use]
    pub fn with_add_flags(mut self, flags: impl Into<Vec<u8>>) -> Self {
        self.add_flags = flags.into();
        self
    }

    /// Checks the invariants the rewrite relies on.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] when the interpreter is empty or relative, or
    /// when the added flags contain whitespace.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.interpreter.as_os_str().is_empty() {
            return Err(ConfigError::MissingInterpreter);
        }
        if !self.interpreter.is_absolute() {
            return Err(ConfigError::RelativeInterpreter(
                self.interpreter.display().to_string(),
            ));
        }
        if self.add_flags.iter().any(u8::is_ascii_whitespace) {
            return Err(ConfigError::WhitespaceInFlags);
        }
        Ok(self)
    }

    #[must_use]
    pub fn interpreter(&self) -> &Path {
        &self.interpreter
    }

    /// The interpreter path as it will be written into the shebang.
    #[must_use]
    pub fn interpreter_bytes(&self) -> Vec<u8> {
        #[cfg(unix)]
        {
            use std::os::unix::ffi::OsStrExt;
            self.interpreter.as_os_str().as_bytes().to_vec()
        }
        #[cfg(not(unix))]
        {
            self.interpreter.to_string_lossy().into_owned().into_bytes()
        }
    }

    #[must_use]
    pub fn preserve_timestamps(&self) -> bool {
        self.preserve_timestamps
    }

    #[must_use]
    pub fn create_backup(&self) -> bool {
        self.create_backup
    }

    #[must_use]
    pub fn keep_flags(&self) -> bool {
        self.keep_flags
    }

    #[must_use]
    pub fn add_flags(&self) -> &[u8] {
        &self.add_flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_a_backup_and_drop_old_flags() {
        let config = RewriteConfig::new("/usr/bin/python3");
        assert!(config.create_backup());
        assert!(!config.keep_flags());
        assert!(!config.preserve_timestamps());
        assert!(config.add_flags().is_empty());
    }

    #[test]
    fn empty_interpreter_is_missing() {
        assert_eq!(
            RewriteConfig::new("").validate(),
            Err(ConfigError::MissingInterpreter)
        );
    }

    #[cfg(unix)]
    #[test]
    fn relative_interpreter_is_rejected() {
        let err = RewriteConfig::new("bin/python").validate().unwrap_err();
        assert_eq!(err, ConfigError::RelativeInterpreter("bin/python".into()));
    }

    #[cfg(unix)]
    #[test]
    fn whitespace_in_added_flags_is_rejected() {
        for flags in ["s v", "s\tv", "\n"] {
            let err = RewriteConfig::new("/opt/bin/python3")
                .with_add_flags(flags)
                .validate()
                .unwrap_err();
            assert_eq!(err, ConfigError::WhitespaceInFlags, "flags {flags:?}");
        }
    }

    #[cfg(unix)]
    #[test]
    fn validate_accepts_absolute_interpreter_with_flags() {
        let config = RewriteConfig::new("/opt/bin/python3")
            .with_add_flags("sv")
            .with_keep_flags(true)
            .with_backup(false)
            .with_preserve_timestamps(true);
        let validated = config.clone().validate().expect("valid config");
        assert_eq!(validated, config);
        assert_eq!(validated.interpreter_bytes(), b"/opt/bin/python3".to_vec());
    }
}
