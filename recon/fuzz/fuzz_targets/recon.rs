#![no_main]
use libfuzzer_sys::fuzz_target;

use std::io::Write;
use std::process::{Command, Stdio};

// Any document must be either reconstructed or rejected with a diagnostic. Exit code 2 means recon
// panicked.
fuzz_target!(|document: String| {
    let mut cmd = Command::new("cargo");
    cmd.args(&["run", "-q", "--"]);
    cmd.stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(_) => return,
    };
    if let Some(mut stdin) = child.stdin.take() {
        let _ = stdin.write_all(document.as_bytes());
    }

    if let Some(2) = child.wait().ok().and_then(|status| status.code()) {
        panic!("Failed!");
    }
});
