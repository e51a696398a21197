use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::application::{ExpenseTracker, Settings};
use crate::domain::DateMode;
use crate::io::BufferedConsole;

/// Expense Tracker - record expenses for this session, filter them and
/// summarize totals by category
#[derive(Parser, Debug)]
#[command(name = "expense-tracker")]
#[command(about = "An interactive, in-memory expense tracker")]
#[command(version)]
pub struct Cli {
    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Only accept dates that exist on the calendar (rejects e.g. 2024-13-40)
    #[arg(long, env = "EXPENSE_TRACKER_STRICT_DATES")]
    pub strict_dates: bool,
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            date_mode: if self.strict_dates {
                DateMode::Calendar
            } else {
                DateMode::Permissive
            },
        }
    }

    /// Diagnostics go to stderr so the menu on stdout is never interleaved
    /// with them. `RUST_LOG` takes precedence over `--verbose`.
    fn init_logging(&self) {
        let level = if self.verbose { "debug" } else { "error" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("expense_tracker={level}")));

        // A subscriber may already be installed when embedded; keep that one
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init()
            .ok();
    }

    pub fn run(self) -> Result<()> {
        self.init_logging();

        let console = BufferedConsole::new(io::stdin().lock(), io::stdout());
        let mut tracker = ExpenseTracker::new(console, self.settings());
        tracker.run().context("Expense tracker session failed")?;

        Ok(())
    }
}
