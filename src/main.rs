use calver_check::{
    command::{self, CalcChecks, Outcome},
    CommandError,
};
use clap::{CommandFactory, Parser};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

mod cli;

use crate::cli::{Cli, Commands};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too, and they are not failures
            let exit_code = i32::from(e.use_stderr());
            let _ = e.print();
            std::process::exit(exit_code);
        }
    };

    init_tracing(cli.verbose);

    match do_work(cli) {
        Ok(Outcome {
            stdout,
            stderr,
            exit_code,
        }) => {
            if let Some(stdout) = stdout {
                println!("{stdout}");
            }
            if let Some(stderr) = stderr {
                eprintln!("{stderr}");
            }
            std::process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr so that stdout only ever holds the command's output.
fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn do_work(cli: Cli) -> Result<Outcome, CommandError> {
    let config = cli.config();
    let json = config.json;

    match cli.command {
        Some(Commands::Calc { validate, pep440 }) => command::calc(
            &config.date,
            &config.tags,
            CalcChecks { validate, pep440 },
            json,
        ),
        Some(Commands::Check) => {
            command::check(&config.manifest, &config.tags, &config.version_file, json)
        }
        Some(Commands::Validate { version }) => command::validate(version.as_deref(), json),
        Some(Commands::Compare { versions }) => command::compare(&versions, json),
        Some(Commands::Info) => command::info(&config.date, &config.tags, &config.manifest, json),
        None => Ok(Outcome {
            stdout: Some(Cli::command().render_help().to_string()),
            stderr: None,
            exit_code: 1,
        }),
    }
}
