use recon::{exit_status, get_opts, init_logger, run_recon, ReconResult};
use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::{Command, Stdio};
use termcolor::{BufferedStandardStream, ColorChoice, WriteColor};

fn main_impl() -> Result<i32, Box<dyn std::error::Error>> {
    let mut ch_stdout = BufferedStandardStream::stdout(ColorChoice::Auto);
    let mut ch_stderr = BufferedStandardStream::stderr(ColorChoice::Auto);
    let is_tty = atty::is(atty::Stream::Stderr);
    let use_color = is_tty && ch_stderr.supports_color();

    let opts = match get_opts(|app| app.get_matches_safe(), use_color) {
        Ok(opts) => opts,
        Err(e) => e.exit(),
    };
    init_logger(opts.verbose);

    let ReconResult {
        code,
        stdout,
        stderr,
        page,
    } = run_recon(opts);

    if !stderr.is_empty() {
        writeln!(&mut ch_stderr, "{}", stderr)?;
        ch_stderr.flush()?;
    }
    if !stdout.is_empty() {
        print_stdout(&stdout, &mut ch_stdout, page && atty::is(atty::Stream::Stdout))?;
    }

    Ok(code)
}

/// Basically just copied from rust/src/librustc_driver/lib.rs#show_content_with_pager
fn print_stdout(
    stdout: &str,
    mut ch_stdout: &mut BufferedStandardStream,
    page: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut fallback_to_print = false;

    if page {
        let pager_name = env::var_os("PAGER")
            .unwrap_or_else(|| OsString::from(if cfg!(windows) { "more.com" } else { "less" }));

        match Command::new(pager_name).stdin(Stdio::piped()).spawn() {
            Ok(mut pager) => {
                if let Some(pipe) = pager.stdin.as_mut() {
                    if pipe.write_all(stdout.as_bytes()).is_err() {
                        fallback_to_print = true;
                    }
                }

                if pager.wait().is_err() {
                    fallback_to_print = true;
                }
            }
            Err(_) => {
                fallback_to_print = true;
            }
        }
    }

    // If pager fails for whatever reason, we should still print the content to standard output.
    // Results are printed bare, with no trailing newline.
    if fallback_to_print || !page {
        write!(&mut ch_stdout, "{}", stdout)?;
        ch_stdout.flush()?;
    }

    Ok(())
}

fn main() {
    let (code, message) = exit_status(std::panic::catch_unwind(main_impl));

    if let Some(message) = message {
        let _ = writeln!(io::stderr(), "{}", message);
    }
    std::process::exit(code);
}
