//! Rewrites the `#!` line of Python scripts to point at a new interpreter.
//!
//! The binary in `pathfix-cli` parses arguments into a [`RewriteConfig`] and
//! hands the targets to [`run`]; everything the run wants to say goes through
//! a [`Reporter`].

mod config;
mod errors;
mod fix;
mod report;
mod shebang;
mod walk;

pub use crate::config::{ConfigError, RewriteConfig};
pub use crate::errors::{FixError, FixWarning};
pub use crate::fix::{fix_file, FileOutcome, CHUNK_SIZE};
pub use crate::report::{Event, RecordingReporter, Reporter};
pub use crate::shebang::{fix_line, is_python_shebang, parse_flags};
pub use crate::walk::{is_python_module_name, recurse_down, run, RunSummary};
