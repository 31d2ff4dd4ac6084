//! Command-line front end for the agent config migration helpers.
//!
//! ```text
//! cw-config-migrate compare <EXPECTED> <ACTUAL>   exit 0 equal, 1 different, 2 load failure
//! cw-config-migrate inspect-new <PATH>            print decoded current-format config
//! cw-config-migrate inspect-old <PATH>            print decoded legacy config
//! ```

use std::error::Error;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::Level;

use cw_config_migrate::config::{are_equal, load_new_config, load_old_config, ConfigError};
use cw_config_migrate::observability::logging;

#[derive(Parser)]
#[command(name = "cw-config-migrate")]
#[command(about = "Read and compare agent configurations during migration", long_about = None)]
struct Cli {
    /// Default log level when RUST_LOG is unset (trace, debug, info, warn, error).
    #[arg(long, env = "CW_MIGRATE_LOG", default_value = "info", global = true)]
    log_level: Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two current-format configs, ignoring the metrics section
    Compare { expected: PathBuf, actual: PathBuf },
    /// Decode a current-format config and print it
    InspectNew { path: PathBuf },
    /// Decode a legacy config and print it
    InspectOld { path: PathBuf },
}

const EXIT_EQUAL: u8 = 0;
const EXIT_DIFFERENT: u8 = 1;
const EXIT_LOAD_FAILED: u8 = 2;

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let cli = Cli::parse();
    logging::init(cli.log_level);

    let result = run(cli.command, &mut io::stdout().lock());
    exit_status(result).map(ExitCode::from)
}

/// Execute one subcommand, writing its report to `out`.
fn run(command: Commands, out: &mut impl Write) -> Result<u8, Box<dyn Error>> {
    match command {
        Commands::Compare { expected, actual } => compare(&expected, &actual, out),
        Commands::InspectNew { path } => print_json(&load_new_config(&path)?, out),
        Commands::InspectOld { path } => print_json(&load_old_config(&path)?, out),
    }
}

/// Load failures become an exit code; anything else is a real error.
fn exit_status(result: Result<u8, Box<dyn Error>>) -> Result<u8, Box<dyn Error>> {
    match result {
        Err(e) => match e.downcast::<ConfigError>() {
            Ok(e) => {
                eprintln!("Error: {} ({})", e, e.path().display());
                Ok(EXIT_LOAD_FAILED)
            }
            Err(e) => Err(e),
        },
        ok => ok,
    }
}

fn compare(expected: &Path, actual: &Path, out: &mut impl Write) -> Result<u8, Box<dyn Error>> {
    let expected = load_new_config(expected)?;
    let actual = load_new_config(actual)?;

    if are_equal(&expected, &actual) {
        writeln!(out, "equal")?;
        Ok(EXIT_EQUAL)
    } else {
        writeln!(out, "different")?;
        Ok(EXIT_DIFFERENT)
    }
}

fn print_json<T: Serialize>(value: &T, out: &mut impl Write) -> Result<u8, Box<dyn Error>> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(EXIT_EQUAL)
}
