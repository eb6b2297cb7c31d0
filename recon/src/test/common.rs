//! State shared by all system tests, and macros for reporting test failures.

use lazy_static::lazy_static;
use libtest_mimic::LinePrinter;
use std::collections::HashMap;
use std::sync::RwLock;

/// Index of a failure message stored in [TEST_CONSTRUCTION_FAIL].
pub type ErrorMsgRef = usize;
/// Writes a failure report.
pub type Printer = dyn Fn(&mut dyn LinePrinter) + Send + Sync;

lazy_static! {
    /// Reports for test files that could not be turned into test cases. They are surfaced when
    /// the corresponding test is run.
    pub static ref TEST_CONSTRUCTION_FAIL: RwLock<HashMap<ErrorMsgRef, Box<Printer>>> =
        RwLock::new(HashMap::new());
    /// Whether test files should be rewritten with the actual output of recon.
    pub static ref BLESS: bool = std::env::var("BLESS") == Ok("1".into());
}

macro_rules! prefix_severity {
    (Suggestion, $content:expr) => {
        format!("Hint: {}", $content)
    };

    ($other:ident, $content:expr) => {
        $content
    };
}

/// Fails a test with lines of the form `Severity: format, args;`.
macro_rules! print_fail {
    ($($severity:ident: $($content:expr),*;)*) => {
        fail! { move |printer: &mut dyn libtest_mimic::LinePrinter| { printer! { printer
            $($severity: $($content),*;)*
        };}};
    };
}

macro_rules! printer {
    ($printer:ident $($severity:ident: $($content:expr),*;)*) => {$(
        $printer.print_line(
            &prefix_severity!($severity, &format!($($content),*)),
            &libtest_mimic::LineFormat::$severity
        );
    )*};
}

macro_rules! fail {
    ($report:expr) => {
        libtest_mimic::Outcome::Failed {
            msg: Some(atomic_lock($report)),
        }
    };
}
