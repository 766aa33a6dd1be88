//! dexquiz entry point.
//!
//! # Usage
//!
//! ```bash
//! # Play with the grid sized to the terminal
//! dexquiz
//!
//! # Fixed four columns, no clock, debug log written to a file
//! dexquiz --columns 4 --no-timer --log-file dexquiz.log --log-level debug
//! ```

use std::{
    fs::File,
    io::{self, Write},
    path::{Path, PathBuf},
    sync::Mutex,
    time::Duration,
};

use clap::Parser;
use dexquiz_app::{GameConfig, Runtime};
use dexquiz_core::Roster;
use dexquiz_tui::TerminalDriver;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Name all 151 original Pokémon from memory
#[derive(Parser, Debug)]
#[command(name = "dexquiz")]
#[command(about = "Terminal guessing game: name every Kanto Pokémon")]
#[command(version)]
struct Args {
    /// Fixed number of grid columns (clamped to 2-10)
    ///
    /// If not provided, the column count follows the terminal width.
    #[arg(short, long)]
    columns: Option<usize>,

    /// Pause after each judged guess, in milliseconds
    #[arg(long, default_value = "600")]
    delay_ms: u64,

    /// Hide the elapsed-time clock
    #[arg(long)]
    no_timer: bool,

    /// Clock refresh period, in milliseconds
    #[arg(long, default_value = "1000")]
    tick_ms: u64,

    /// Write logs to this file (the terminal is owned by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            columns: self.columns,
            feedback_delay: Duration::from_millis(self.delay_ms),
            tick_interval: Duration::from_millis(self.tick_ms),
            show_timer: !self.no_timer,
        }
    }
}

/// Install a file-backed subscriber. `RUST_LOG` overrides `level`.
fn init_logging(path: &Path, level: &str) -> io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path, &args.log_level)?;
    }

    let config = args.game_config();
    config.validate()?;
    tracing::info!(?config, "dexquiz starting");

    let driver = TerminalDriver::new()?;
    let summary = Runtime::new(driver, Roster::kanto(), config).run().await?;

    // Runtime::run drops the driver, so the terminal is restored by now
    writeln!(io::stdout().lock(), "{summary}")?;
    Ok(())
}
