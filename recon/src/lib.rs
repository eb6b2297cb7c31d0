//! The recon app. For an overview of recon's design, see [librecon's documentation](librecon).

#![deny(warnings)]
#![deny(missing_docs)]

mod diagnostics;
use diagnostics::emit_recon_diagnostic;

mod logger;
pub use logger::init_logger;

use librecon::diagnostics::Diagnostic;
use librecon::reconstruct;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::debug;

/// Where the input document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Standard input.
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

impl Source {
    fn read(&self) -> io::Result<String> {
        match self {
            Source::Stdin => {
                let mut input = String::new();
                io::stdin().read_to_string(&mut input)?;
                Ok(input)
            }
            Source::File(path) => fs::read_to_string(path),
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Stdin => write!(f, "<stdin>"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Options to run recon with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Where the input document is read from.
    pub source: Source,
    /// When is [Some](Option::Some) diagnostic code, will explain that code.
    pub explain_diagnostic: Option<String>,
    /// When true, debug logs of the reconstruction are written to stderr.
    pub verbose: bool,
    /// When true, diagnostics will be colored.
    pub color: bool,
}

/// Parses [Opts](self::Opts) from the command line or given a parser that acts on the clap
/// [App](clap::App).
pub fn get_opts<P>(parser: P, color: bool) -> Result<Opts, clap::Error>
where
    P: for<'a> FnOnce(clap::App<'a, '_>) -> Result<clap::ArgMatches<'a>, clap::Error>,
{
    let app = clap::App::new(clap::crate_name!())
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .arg(
            clap::Arg::with_name("input")
                .help("Input document. Read from stdin when absent or \"-\".")
                .index(1),
        )
        .arg(
            clap::Arg::with_name("explain")
                .long("--explain")
                .value_name("diagnostic")
                .help("Provide a detailed explanation for a diagnostic code.")
                .takes_value(true),
        )
        .arg(
            clap::Arg::with_name("verbose")
                .short("-v")
                .long("--verbose")
                .help("Log the decoded points and interpolation terms to stderr."),
        );
    let matches = parser(app)?;

    let source = match matches.value_of("input") {
        None | Some("-") => Source::Stdin,
        Some(path) => Source::File(path.into()),
    };
    Ok(Opts {
        source,
        explain_diagnostic: matches.value_of("explain").map(str::to_owned),
        verbose: matches.is_present("verbose"),
        color,
    })
}

/// Output of a recon execution.
#[derive(Default, Debug)]
pub struct ReconResult {
    /// Exit code
    pub code: i32,
    /// Emit for stdout
    pub stdout: String,
    /// Emit for stderr
    pub stderr: String,
    /// Whether the stdout should be emit as paged
    pub page: bool,
}

/// Builds a [ReconResult](self::ReconResult).
struct ReconResultBuilder {
    color: bool,
    stdout: String,
    stderr: String,
    page: bool,
}

impl ReconResultBuilder {
    fn new(color: bool) -> Self {
        Self {
            color,
            page: false,
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    fn err(&mut self, diagnostic: &Diagnostic) {
        self.stderr
            .push_str(&emit_recon_diagnostic(diagnostic, self.color));
    }

    fn page(&mut self, page: bool) {
        self.page = page;
    }

    fn ok(self) -> ReconResult {
        ReconResult {
            code: 0,
            stdout: self.stdout,
            stderr: self.stderr,
            page: self.page,
        }
    }

    fn failed(self) -> ReconResult {
        ReconResult {
            code: 1,
            stdout: self.stdout,
            stderr: self.stderr,
            page: self.page,
        }
    }
}

/// Runs recon end-to-end.
pub fn run_recon(opts: Opts) -> ReconResult {
    let mut result = ReconResultBuilder::new(opts.color);

    if let Some(diag_code) = opts.explain_diagnostic {
        return explain(result, &diag_code);
    }

    debug!(source = %opts.source, "reading input");
    let input = match opts.source.read() {
        Ok(input) => input,
        Err(e) => {
            result
                .stderr
                .push_str(&format!("failed to read {}: {}", opts.source, e));
            return result.failed();
        }
    };

    run_document(result, &input)
}

/// Reconstructs the constant term of an input document.
fn run_document(mut result: ReconResultBuilder, input: &str) -> ReconResult {
    match reconstruct(input) {
        Ok(constant) => {
            result.stdout.push_str(&constant.to_string());
            result.ok()
        }
        Err(err) => {
            debug!(?err, "reconstruction failed");
            result.err(&Diagnostic::from(&err));
            result.failed()
        }
    }
}

fn explain(mut result: ReconResultBuilder, diag_code: &str) -> ReconResult {
    let codes = Diagnostic::all_codes_with_explanations();
    match codes.get(diag_code) {
        Some(explanation) => {
            result.stdout.push_str(explanation);
            result.page(true);
            result.ok()
        }
        None => {
            result
                .stderr
                .push_str(&format!("{} is not a diagnostic code", diag_code));
            result.failed()
        }
    }
}

/// Maps how a recon process ended to its exit code and a final message for stderr, if any.
///
/// `outcome` is the result of running recon and writing its output. Failing to write the output
/// exits with 1, and a panic is an internal error exiting with 2.
pub fn exit_status<E: std::fmt::Display>(
    outcome: std::thread::Result<Result<i32, E>>,
) -> (i32, Option<String>) {
    match outcome {
        Ok(Ok(code)) => (code, None),
        Ok(Err(err)) => (1, Some(format!("error: {}", err))),
        Err(..) => (2, Some("\nnote: you found an internal recon error!".to_owned())),
    }
}
