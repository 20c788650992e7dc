use atty::Stream;
use clap::{error::ErrorKind, CommandFactory, Parser};
use color_eyre::Result;
use pathfix_core::{ConfigError, RecordingReporter, RewriteConfig};

mod cli;
mod output;
mod style;

use cli::PathfixCli;
use output::ConsoleReporter;
use style::Style;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = PathfixCli::parse();
    init_tracing(cli.trace, cli.verbose);

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            let kind = match err {
                ConfigError::MissingInterpreter => ErrorKind::MissingRequiredArgument,
                _ => ErrorKind::ValueValidation,
            };
            PathfixCli::command().error(kind, err).exit()
        }
    };
    tracing::debug!(
        interpreter = %config.interpreter().display(),
        targets = cli.targets.len(),
        "starting shebang rewrite"
    );

    let code = if cli.json {
        let mut reporter = RecordingReporter::new();
        let summary = pathfix_core::run(&cli.targets, &config, &mut reporter);
        let payload = output::to_json_response(&summary, reporter.events());
        println!("{}", serde_json::to_string_pretty(&payload)?);
        summary.exit_code()
    } else {
        let style = Style::new(cli.no_color, atty::is(Stream::Stderr));
        let mut reporter = ConsoleReporter::new(style);
        let summary = pathfix_core::run(&cli.targets, &config, &mut reporter);
        tracing::info!("{}", output::summary_message(&summary));
        summary.exit_code()
    };

    if code == 0 {
        Ok(())
    } else {
        std::process::exit(code);
    }
}

fn build_config(cli: &PathfixCli) -> Result<RewriteConfig, ConfigError> {
    let Some(interpreter) = cli.interpreter.as_ref() else {
        return Err(ConfigError::MissingInterpreter);
    };
    if cli.targets.is_empty() {
        return Err(ConfigError::MissingInterpreter);
    }
    RewriteConfig::new(interpreter)
        .with_preserve_timestamps(cli.preserve_timestamps)
        .with_backup(!cli.no_backup)
        .with_keep_flags(cli.keep_flags)
        .with_add_flags(cli.add_flags.clone().unwrap_or_default())
        .validate()
}

fn init_tracing(trace: bool, verbose: u8) {
    let level = if trace {
        "trace"
    } else {
        match verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = format!("pathfix={level},pathfix_core={level}");
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
