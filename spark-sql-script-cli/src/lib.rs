//! Spark SQL Script CLI
//!
//! A launcher that announces itself and hands the command line, untouched, to
//! the Spark SQL shell driver so SQL scripts can run in cluster mode.
//!
//! The shim itself interprets nothing: every argument, including `--help`,
//! belongs to the driver. See [`launch`] for the contract.

pub mod banner;
pub mod config;
pub mod driver;
pub mod error;
pub mod launcher;
pub mod logging;
pub mod process;

pub use crate::config::LauncherConfig;
pub use crate::driver::Driver;
pub use crate::error::DelegateError;
pub use crate::launcher::launch;
pub use crate::process::SparkClassDriver;

/// Fully qualified name this launcher identifies itself by.
pub const SHIM_CLASS: &str = "org.apache.spark.sql.hive.thriftserver.SparkSqlScriptCli";

/// Main class of the SQL shell driver every invocation is forwarded to.
pub const DRIVER_CLASS: &str = "org.apache.spark.sql.hive.thriftserver.SparkSQLCLIDriver";
