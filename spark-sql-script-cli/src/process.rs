//! The production driver: `spark-class` running the SQL shell driver class.

use crate::DRIVER_CLASS;
use crate::config::LauncherConfig;
use crate::driver::Driver;
use crate::error::DelegateError;
use std::ffi::OsString;
use std::process::{Command, ExitStatus};
use tracing::{debug, info};

/// Runs `<spark-class> SparkSQLCLIDriver <args...>` on the launcher's own
/// stdin, stdout and stderr, and reports the child's exit status.
#[derive(Clone, Debug)]
pub struct SparkClassDriver {
    config: LauncherConfig,
}

impl SparkClassDriver {
    pub fn new(config: LauncherConfig) -> Self {
        Self { config }
    }
}

impl Driver for SparkClassDriver {
    type Error = DelegateError;

    fn main(self, args: Vec<OsString>) -> Result<i32, DelegateError> {
        let program = self.config.resolve_spark_class()?;
        info!("Launching {} via {}", DRIVER_CLASS, program.display());

        // The terminal delivers Ctrl-C to the shell as well; let the shell
        // decide what it means and report whatever status it ends with.
        if let Err(e) = ctrlc::set_handler(|| {}) {
            debug!("Could not install interrupt handler: {}", e);
        }

        let mut child = Command::new(&program)
            .arg(DRIVER_CLASS)
            .args(&args)
            .spawn()
            .map_err(|source| DelegateError::Unavailable {
                program: program.clone(),
                source,
            })?;

        let status = child
            .wait()
            .map_err(|source| DelegateError::Wait { source })?;
        info!("Driver exited with {}", status);

        Ok(exit_code(status))
    }
}

/// Map a child's exit status to the status the launcher reports.
///
/// A normal exit keeps its code. On Unix a signal death becomes
/// `128 + signal`, the shell convention. Anything else is `1`.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

/// The status as an `ExitCode` byte, or `None` when it does not fit in one.
///
/// Unix statuses always fit. Windows statuses are 32 bits wide and must go
/// through `std::process::exit` whole.
pub fn exit_byte(status: i32) -> Option<u8> {
    u8::try_from(status).ok()
}
