//! Spark SQL Script CLI
//!
//! Prints the launcher banner, then runs the Spark SQL shell driver with this
//! process's arguments. The driver's exit status becomes ours; a driver that
//! cannot be started ends the process with the error.

use spark_sql_script_cli::logging::init_logging;
use spark_sql_script_cli::process::exit_byte;
use spark_sql_script_cli::{LauncherConfig, SparkClassDriver, launch};
use std::ffi::OsString;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let config = LauncherConfig::from_env();
    init_logging(&config.log_filter);

    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    let status = launch(&mut std::io::stdout(), SparkClassDriver::new(config), args)?;

    match exit_byte(status) {
        Some(byte) => Ok(ExitCode::from(byte)),
        None => std::process::exit(status),
    }
}
