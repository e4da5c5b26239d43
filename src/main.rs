//! Shell-render binary entry point.

use std::io::{Read, Write};
use std::process::ExitCode;

use shell_render::cli::{self, Args};
use shell_render::config::Config;
use shell_render::logging;
use tracing::{debug, error, info};

fn main() -> ExitCode {
    let args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("Try 'shell-render --help' for more information.");
            return ExitCode::from(2);
        }
    };

    if args.help {
        cli::print_help();
        return ExitCode::SUCCESS;
    }
    if args.version {
        cli::print_version();
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> shell_render::Result<()> {
    let config = Config::load(args)?;
    logging::try_init_with(config.log_filter())?;

    info!("shell-render v{}", env!("CARGO_PKG_VERSION"));
    let pipeline = config.to_pipeline()?;

    let raw = read_input(args)?;
    debug!(bytes = raw.len(), "read capture");

    let output = pipeline.process(&raw);
    if let Some(key) = pipeline.dismissal_key(&output) {
        eprintln!("[pager] prompt removed; dismiss with {:?}", key);
    }

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn read_input(args: &Args) -> shell_render::Result<String> {
    let bytes = match args.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => std::fs::read(path)?,
        _ => {
            let mut buf = Vec::new();
            std::io::stdin().lock().read_to_end(&mut buf)?;
            buf
        }
    };
    // Captures may hold partial multibyte sequences.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
