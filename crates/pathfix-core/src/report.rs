use std::path::{Path, PathBuf};

use crate::errors::{FixError, FixWarning};

/// Something worth telling the user about while a run is in progress.
#[derive(Debug)]
pub enum Event {
    NoChange(PathBuf),
    Updating(PathBuf),
    /// The rewritten file is in place; follows `Updating` for the same path.
    Updated(PathBuf),
    Warning(FixWarning),
    Error(FixError),
}

impl Event {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NoChange(path) | Self::Updating(path) | Self::Updated(path) => path,
            Self::Warning(warning) => warning.path(),
            Self::Error(err) => err.path(),
        }
    }
}

/// Sink for run events; the binary prints them, tests collect them.
pub trait Reporter {
    fn report(&mut self, event: Event);
}

#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Vec<Event>,
}

impl RecordingReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    #[must_use]
    pub fn errors(&self) -> Vec<&FixError> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Error(err) => Some(err),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn report(&mut self, event: Event) {
        self.events.push(event);
    }
}
