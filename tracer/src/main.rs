//! circuit-tracer — print every shortest trace between the two terminals of
//! a circuit board.
//!
//! ```text
//! circuit-tracer -s|-q -c|-g <board-file>
//! ```
//!
//! `-s` explores with a stack, `-q` with a queue. `-c` prints to the
//! console; graphical output (`-g`) is not available and is rejected.

mod error;
mod render;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, ArgGroup, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use tracer_core::Board;
use tracer_paths::{Discipline, search};

use error::CliError;

#[derive(Parser, Debug)]
#[command(name = "circuit-tracer", version)]
#[command(about = "Find every shortest trace between two terminals on a circuit board")]
#[command(group(ArgGroup::new("storage").required(true).args(["stack", "queue"])))]
#[command(group(ArgGroup::new("output").required(true).args(["console", "gui"])))]
struct Cli {
    /// Use a stack for pending traces (depth-first)
    #[arg(short = 's')]
    stack: bool,

    /// Use a queue for pending traces (breadth-first)
    #[arg(short = 'q')]
    queue: bool,

    /// Print results to the console
    #[arg(short = 'c')]
    console: bool,

    /// Show results in a window (not available)
    #[arg(short = 'g')]
    gui: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Board description file
    file: PathBuf,
}

impl Cli {
    fn discipline(&self) -> Discipline {
        if self.stack {
            Discipline::Stack
        } else {
            Discipline::Queue
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("exiting after error: {e:?}");
            eprintln!("circuit-tracer: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    if cli.gui {
        return Err(CliError::Unsupported("graphical output (-g)"));
    }

    let board = Board::load(&cli.file)?;
    let discipline = cli.discipline();
    let outcome = search(board, discipline);

    match outcome.best_len() {
        Some(len) => log::info!(
            "{} shortest trace(s) of {len} cell(s) found with a {discipline}",
            outcome.paths().len()
        ),
        None => log::info!("terminals in {} are not connected", cli.file.display()),
    }

    let paths = outcome.into_paths();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render::write_paths(&mut out, &paths).map_err(CliError::Output)?;
    out.flush().map_err(CliError::Output)?;
    Ok(())
}
