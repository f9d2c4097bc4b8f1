//! The announcement printed before the driver takes over.

use crate::{DRIVER_CLASS, SHIM_CLASS};
use std::io::{self, Write};

/// The three announcement lines, in the order they are printed.
pub fn lines() -> [String; 3] {
    [
        format!("Running from {SHIM_CLASS}"),
        format!("    which wrapped up {DRIVER_CLASS}"),
        "    for running Spark SQL Shell from with cluster mode...".to_string(),
    ]
}

/// Write the banner and flush, so it lands before anything the driver writes
/// to the same stream.
pub fn write_banner<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    for line in lines() {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
