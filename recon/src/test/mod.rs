//! recon system tests. Every `.recon` file under this directory is run as one test case; see
//! [ReconEmitTest] for the format.

use difference::{Changeset, Difference};
use libtest_mimic::{run_tests, Arguments, LineFormat, Outcome, Test};
use std::error::Error;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[macro_use]
mod common;

use common::*;
use exec::*;
use recon_emit_test::ReconEmitTest;

const TEST_ROOT: &str = "src/test";

fn main() -> Result<(), Box<dyn Error>> {
    let args = Arguments::from_args();
    let root = Path::new(TEST_ROOT);
    let mut files = Vec::new();
    visit_test_dir(root, &mut files)?;
    files.sort();

    let tests = files
        .into_iter()
        .map(|path| load_test(root, path))
        .collect::<Result<Vec<_>, _>>()?;
    run_tests(&args, tests, drive_test).exit();
}

/// Pushes the path of every `.recon` file in `dir` and its subdirectories to `files`.
fn visit_test_dir(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), Box<dyn Error>> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            visit_test_dir(&path, files)?;
        } else if path.extension() == Some(OsStr::new("recon")) {
            files.push(path);
        }
    }
    Ok(())
}

/// A test file and what could be made of it.
#[derive(Clone)]
struct TestCase {
    path: PathBuf,
    emit: Result<ReconEmitTest, ErrorMsgRef>,
}

/// Reads a test file. A file that is not a valid test is still loaded, so that it is reported
/// as a failure when run.
fn load_test(root: &Path, path: PathBuf) -> Result<Test<TestCase>, Box<dyn Error>> {
    let name = path.strip_prefix(root)?.display().to_string();
    let content = fs::read_to_string(&path)?;

    let file = Test {
        name: name.clone(),
        kind: "system".to_owned(),
        is_ignored: false,
        is_bench: false,
        data: path.clone(),
    };
    let emit = ReconEmitTest::new(&file, content);

    Ok(Test {
        name,
        kind: "system".to_owned(),
        is_ignored: false,
        is_bench: false,
        data: TestCase { path, emit },
    })
}

fn drive_test(test: &Test<TestCase>) -> Outcome {
    match &test.data.emit {
        Ok(emit) => emit
            .clone()
            .drive_test(test.name.clone(), test.data.path.clone()),
        Err(msg_ref) => {
            let failures = TEST_CONSTRUCTION_FAIL.read().unwrap();
            let report: &Printer = failures[msg_ref].as_ref();
            // The report lives in a static map that is never cleared.
            unsafe { fail!(&*(report as *const Printer)) }
        }
    }
}

/// Wraps an object in a thread-safe atomic mutex.
#[inline]
fn atomic_lock<T>(obj: T) -> Arc<Mutex<T>> {
    Arc::new(Mutex::new(obj))
}

/// Returns the command to bless a test file.
fn get_bless_cmd(test_name: &str) -> String {
    format!("BLESS=1 cargo test --test system_tests \"{}\"", test_name)
}
