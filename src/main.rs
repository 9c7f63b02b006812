// sortty: step-by-step sorting visualizer for the terminal

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use sortty::array::make_rng;
use sortty::config::{Algorithm, Overrides, Settings};
use sortty::errors::Result;
use sortty::playback::Controller;
use sortty::ui::App;

/// Animate bubble, insertion, merge and quick sort in the terminal
#[derive(Parser, Debug)]
#[command(name = "sortty", version, about)]
struct Cli {
    /// TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Algorithm selected at startup
    #[arg(short, long, value_enum)]
    algorithm: Option<Algorithm>,

    /// Sort in descending order
    #[arg(short, long)]
    descending: bool,

    /// Speed slider position, 1 (slowest) to 1999 (fastest)
    #[arg(short, long)]
    speed: Option<u32>,

    /// Number of values in the array
    #[arg(short = 'n', long)]
    length: Option<usize>,

    /// Smallest generated value
    #[arg(long)]
    min: Option<u32>,

    /// Largest generated value
    #[arg(long)]
    max: Option<u32>,

    /// Seed for reproducible arrays
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write logs (the TUI owns the terminal)
    #[arg(long, default_value = "sortty.log")]
    log_file: PathBuf,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            algorithm: self.algorithm,
            descending: self.descending,
            speed: self.speed,
            len: self.length,
            min: self.min,
            max: self.max,
            seed: self.seed,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging to a file; the guard flushes it when main returns
    let log_dir = cli
        .log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let log_name = cli
        .log_file
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sortty.log"));
    let appender = tracing_appender::rolling::never(log_dir, log_name);
    let (writer, _log_guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,sortty=debug")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(writer).with_ansi(false))
        .init();

    tracing::info!("Starting sortty");

    match run(&cli) {
        Ok(()) => {
            tracing::info!("Exiting sortty");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "sortty failed");
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("Run `sortty --help` for the accepted options.");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    settings.apply_overrides(&cli.overrides());
    settings.validate()?;

    let controller = Controller::new(
        settings.array,
        settings.sort_config(),
        make_rng(settings.seed),
    )?;

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(controller);
    let res = app.run(&mut terminal);

    // Restore terminal before reporting any loop error
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}
