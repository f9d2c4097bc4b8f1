use std::ffi::OsString;

/// An entry point that takes over the process's command line.
///
/// `main` consumes the driver, so each driver is invoked at most once. The
/// returned value is the exit status the process should report.
pub trait Driver {
    type Error;

    fn main(self, args: Vec<OsString>) -> Result<i32, Self::Error>;
}

impl<F, E> Driver for F
where
    F: FnOnce(Vec<OsString>) -> Result<i32, E>,
{
    type Error = E;

    fn main(self, args: Vec<OsString>) -> Result<i32, E> {
        self(args)
    }
}
