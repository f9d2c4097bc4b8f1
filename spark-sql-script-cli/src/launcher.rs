use crate::DRIVER_CLASS;
use crate::banner::write_banner;
use crate::driver::Driver;
use std::ffi::OsString;
use std::io::Write;
use tracing::{debug, warn};

/// Announce the launcher on `out`, then hand `args` to `driver`.
///
/// The arguments reach the driver exactly as given. Whatever the driver
/// returns, status or error, is returned unchanged. Failing to write the
/// banner is logged and otherwise ignored.
///
/// # Examples
/// ```
/// use std::ffi::OsString;
///
/// let mut out = Vec::new();
/// let status = spark_sql_script_cli::launch(
///     &mut out,
///     |args: Vec<OsString>| -> Result<i32, std::io::Error> { Ok(args.len() as i32) },
///     vec!["-e".into(), "SELECT 1".into()],
/// );
/// assert_eq!(status.unwrap(), 2);
/// assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);
/// ```
pub fn launch<W, D>(out: &mut W, driver: D, args: Vec<OsString>) -> Result<i32, D::Error>
where
    W: Write + ?Sized,
    D: Driver,
{
    if let Err(e) = write_banner(out) {
        warn!("Failed to print launcher banner: {}", e);
    }

    debug!("Delegating {} argument(s) to {}", args.len(), DRIVER_CLASS);
    driver.main(args)
}
