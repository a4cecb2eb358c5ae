mod cli;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use rapport::config::RapportConfig;

#[derive(Parser)]
#[command(name = "rapport", version, about = "Follow-up reminders for the people you keep in touch with")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the health of every connection
    Status(PassArgs),
    /// Show the most urgent follow-ups
    Reminders {
        #[command(flatten)]
        pass: PassArgs,
        /// Maximum number of reminders (defaults to the configured limit)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Group connections into overdue, this week, this month and unscheduled
    FollowUps(PassArgs),
}

// Options shared by every command that evaluates the connection list.
#[derive(Args)]
struct PassArgs {
    /// Connections JSON file (defaults to the configured file)
    #[arg(long)]
    file: Option<PathBuf>,
    /// Evaluate as of this RFC 3339 instant instead of the current time
    #[arg(long)]
    now: Option<DateTime<Utc>>,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

impl PassArgs {
    fn into_pass(self, config: &RapportConfig) -> cli::Pass {
        cli::Pass {
            file: self
                .file
                .unwrap_or_else(|| config.resolved_connections_path()),
            now: self.now.unwrap_or_else(Utc::now),
            json: self.json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for log level)
    let config = RapportConfig::load()?;

    // Log to stderr so stdout stays clean for JSON output.
    let filter = EnvFilter::try_new(&config.logging.log_level)
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Status(pass) => cli::status::status(&pass.into_pass(&config))?,
        Command::Reminders { pass, limit } => {
            let limit = limit.unwrap_or(config.reminders.limit);
            cli::reminders::reminders(&pass.into_pass(&config), limit)?;
        }
        Command::FollowUps(pass) => cli::follow_ups::follow_ups(&pass.into_pass(&config))?,
    }

    Ok(())
}
