use std::path::PathBuf;

use clap::{ArgAction, Parser};

pub const PATHFIX_BEFORE_HELP: &str = concat!(
    "pathfix ",
    env!("CARGO_PKG_VERSION"),
    " – Point python shebangs at a new interpreter\n\n",
    "Directories are searched recursively for files named like a python module\n",
    "(letters, digits and underscores followed by .py). Symbolic links found while\n",
    "searching are ignored; symbolic links given as arguments are refused unless\n",
    "they point at a directory. Each rewritten file keeps a backup named FILE~.\n",
);

pub const PATHFIX_AFTER_HELP: &str = concat!(
    "Examples:\n",
    "  pathfix -i /usr/bin/python3 scripts/\n",
    "  pathfix -i /opt/py/bin/python3 -k -a s -n tool.py\n",
);

#[derive(Parser, Debug)]
#[command(
    name = "pathfix",
    author,
    version,
    before_help = PATHFIX_BEFORE_HELP,
    after_help = PATHFIX_AFTER_HELP,
    override_usage = "pathfix -i /interpreter [-p] [-n] [-k] [-a FLAGS] file-or-directory ..."
)]
#[allow(clippy::struct_excessive_bools)]
pub struct PathfixCli {
    #[arg(
        short = 'i',
        value_name = "INTERPRETER",
        env = "PATHFIX_INTERPRETER",
        overrides_with = "interpreter",
        help = "Absolute path of the interpreter to write into each shebang"
    )]
    pub interpreter: Option<PathBuf>,
    #[arg(short = 'p', help = "Keep the modification and access times of rewritten files")]
    pub preserve_timestamps: bool,
    #[arg(short = 'n', help = "Do not keep a FILE~ backup of rewritten files")]
    pub no_backup: bool,
    #[arg(short = 'k', help = "Keep the flags of the original shebang")]
    pub keep_flags: bool,
    #[arg(
        short = 'a',
        value_name = "FLAGS",
        allow_hyphen_values = true,
        overrides_with = "add_flags",
        help = "Add one literal flag (no whitespace) in front of any kept flags"
    )]
    pub add_flags: Option<String>,
    #[arg(short, long, action = ArgAction::Count, help = "Increase logging (-vv reaches trace)")]
    pub verbose: u8,
    #[arg(long, help = "Force trace logging regardless of -v")]
    pub trace: bool,
    #[arg(
        long,
        help = "Emit a {status,message,details} JSON envelope instead of progress lines"
    )]
    pub json: bool,
    #[arg(long, help = "Disable colored diagnostics")]
    pub no_color: bool,
    #[arg(value_name = "PATH", help = "Files or directories to process")]
    pub targets: Vec<PathBuf>,
}
