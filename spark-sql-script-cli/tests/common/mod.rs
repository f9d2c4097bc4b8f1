//! Common test utilities and macros

#![allow(dead_code)]

use spark_sql_script_cli::{DelegateError, launch};
use std::cell::RefCell;
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use std::rc::Rc;

#[derive(Debug)]
pub enum TestResult {
    Exited(i32),
    Error(String),
    ErrorRegex(String),
}

impl PartialEq for TestResult {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TestResult::Exited(a), TestResult::Exited(b)) => a == b,
            (TestResult::Error(a), TestResult::Error(b)) => a == b,
            (TestResult::ErrorRegex(pattern), TestResult::Error(msg)) => {
                regex::Regex::new(pattern).unwrap().is_match(msg)
            }
            (TestResult::Error(msg), TestResult::ErrorRegex(pattern)) => {
                regex::Regex::new(pattern).unwrap().is_match(msg)
            }
            _ => false,
        }
    }
}

/// What the driver would do once it is handed the arguments.
#[derive(Debug)]
pub enum Outcome {
    Exit(i32),
    Unavailable,
}

/// Everything observable about one launch.
#[derive(Debug)]
pub struct Launch {
    pub stdout: String,
    /// Arguments the driver received, `None` if it never ran.
    pub received: Option<Vec<OsString>>,
    /// Banner lines already printed when the driver ran.
    pub lines_before_driver: usize,
    pub result: TestResult,
}

pub fn run_launch_test(args: &[&str], outcome: Outcome) -> Launch {
    let args: Vec<OsString> = args.iter().map(OsString::from).collect();
    let stdout = Rc::new(RefCell::new(Vec::new()));
    let mut sink = SharedSink(stdout.clone());
    let mut received = None;
    let mut lines_before_driver = 0;

    let status = launch(
        &mut sink,
        |args: Vec<OsString>| {
            lines_before_driver = stdout.borrow().iter().filter(|b| **b == b'\n').count();
            received = Some(args);
            match outcome {
                Outcome::Exit(code) => Ok(code),
                Outcome::Unavailable => Err(DelegateError::Unavailable {
                    program: PathBuf::from("/nonexistent/spark-class"),
                    source: std::io::ErrorKind::NotFound.into(),
                }),
            }
        },
        args,
    );

    let result = match status {
        Ok(code) => TestResult::Exited(code),
        Err(e) => TestResult::Error(e.to_string()),
    };
    let stdout = String::from_utf8(stdout.borrow().clone()).unwrap();

    Launch {
        stdout,
        received,
        lines_before_driver,
        result,
    }
}

/// Output sink the driver closure can inspect while `launch` holds it.
struct SharedSink(Rc<RefCell<Vec<u8>>>);

impl Write for SharedSink {
    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

pub const BANNER: &str = "\
Running from org.apache.spark.sql.hive.thriftserver.SparkSqlScriptCli
    which wrapped up org.apache.spark.sql.hive.thriftserver.SparkSQLCLIDriver
    for running Spark SQL Shell from with cluster mode...
";

#[macro_export]
macro_rules! check_launch {
    ($test_name:ident, args=[$($arg:expr),* $(,)?], outcome=$outcome:expr, result=$expected:expr) => {
        #[test]
        fn $test_name() {
            let args: &[&str] = &[$($arg),*];
            let launch = crate::common::run_launch_test(args, $outcome);

            assert_eq!(launch.stdout, crate::common::BANNER);
            assert_eq!(launch.lines_before_driver, 3);
            let expected: Vec<std::ffi::OsString> =
                args.iter().map(std::ffi::OsString::from).collect();
            assert_eq!(launch.received, Some(expected));
            assert_eq!(launch.result, $expected);
        }
    };
}
