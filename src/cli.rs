//! Command-line interface for shell-render.
//!
//! Uses lexopt for minimal binary size overhead.

use std::ffi::OsString;
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Debug, Clone, Default)]
pub struct Args {
    /// Capture file to render; stdin when absent or `-`.
    pub input: Option<PathBuf>,
    /// Tab stop width (overrides config file).
    pub tab_size: Option<usize>,
    /// Skip the sanitizer pass.
    pub no_sanitize: bool,
    /// Skip pager prompt and dismissal artifact removal.
    pub no_pager: bool,
    /// Path to configuration file.
    pub config: Option<PathBuf>,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: Option<String>,
    /// Show version and exit.
    pub version: bool,
    /// Show help and exit.
    pub help: bool,
}

/// Parse command-line arguments.
pub fn parse_args() -> Result<Args, ArgsError> {
    parse_args_from(std::env::args_os())
}

/// Parse arguments from an iterator (for testing).
pub fn parse_args_from<I>(args: I) -> Result<Args, ArgsError>
where
    I: IntoIterator<Item = OsString>,
{
    use lexopt::prelude::*;

    let mut result = Args::default();
    let mut parser = lexopt::Parser::from_iter(args);

    while let Some(arg) = parser.next()? {
        match arg {
            Short('h') | Long("help") => {
                result.help = true;
            }
            Short('V') | Long("version") => {
                result.version = true;
            }
            Short('t') | Long("tab-size") => {
                let value: String = parser.value()?.parse()?;
                let size = value
                    .parse()
                    .ok()
                    .filter(|&size: &usize| size > 0)
                    .ok_or(ArgsError::InvalidValue("tab-size", value))?;
                result.tab_size = Some(size);
            }
            Long("no-sanitize") => {
                result.no_sanitize = true;
            }
            Long("no-pager") => {
                result.no_pager = true;
            }
            Short('c') | Long("config") => {
                result.config = Some(parser.value()?.parse()?);
            }
            Short('l') | Long("log-level") => {
                result.log_level = Some(parser.value()?.parse()?);
            }
            Value(val) if result.input.is_none() => {
                result.input = Some(PathBuf::from(val));
            }
            Value(val) => {
                return Err(ArgsError::UnexpectedArgument(val.to_string_lossy().into()));
            }
            _ => return Err(arg.unexpected().into()),
        }
    }

    Ok(result)
}

/// Print help message.
pub fn print_help() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        r#"shell-render {version}
Render captured remote shell output into the text a terminal would show

USAGE:
    shell-render [OPTIONS] [FILE]

ARGS:
    [FILE]                  Capture file to render [default: stdin]

OPTIONS:
    -t, --tab-size <N>      Tab stop width [default: 8]
        --no-sanitize       Keep control bytes such as BEL in the output
        --no-pager          Keep --More-- prompts and dismissal artifacts
    -c, --config <FILE>     Path to configuration file (JSON)
    -l, --log-level <LVL>   Log level (error, warn, info, debug, trace)
    -h, --help              Print help
    -V, --version           Print version

ENVIRONMENT VARIABLES:
    SHELL_RENDER_TAB_SIZE   Tab stop width (overrides config)
    SHELL_RENDER_SANITIZE   Enable the sanitizer: true/false (overrides config)
    SHELL_RENDER_LOG_LEVEL  Log level (overrides config)
    RUST_LOG                Alternative log level setting

EXAMPLES:
    # Render a saved session capture
    shell-render session.log

    # Render from a pipe with 4-column tabs
    cat capture.raw | shell-render -t 4

    # Keep pager prompts visible
    shell-render --no-pager capture.raw
"#
    );
}

/// Print version.
pub fn print_version() {
    println!("shell-render {}", env!("CARGO_PKG_VERSION"));
}

/// Argument parsing errors.
#[derive(Debug)]
pub enum ArgsError {
    /// Lexopt parsing error.
    Lexopt(lexopt::Error),
    /// Invalid argument value.
    InvalidValue(&'static str, String),
    /// Unexpected positional argument.
    UnexpectedArgument(String),
}

impl std::fmt::Display for ArgsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexopt(e) => write!(f, "{}", e),
            Self::InvalidValue(name, value) => {
                write!(f, "invalid value for --{}: '{}'", name, value)
            }
            Self::UnexpectedArgument(arg) => {
                write!(f, "unexpected argument: '{}'", arg)
            }
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<lexopt::Error> for ArgsError {
    fn from(e: lexopt::Error) -> Self {
        Self::Lexopt(e)
    }
}
