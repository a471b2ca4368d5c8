use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{Value, json};
use snafu::ResultExt;

use crate::{App, Result, error::error::OutputSnafu};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Build the snapshot index from the report set and persist it
    Build,
    /// List every distinct report timestamp
    Timestamps,
    /// Reports observed at exactly the given timestamp
    ReportsAt {
        #[arg(short, long)]
        time: String,
    },
    /// Last known position of every vessel that is not moored
    Positions {
        #[arg(short, long)]
        time: String,
    },
    /// Tugs towing vessels, computed from the reports
    ActiveTugs {
        #[arg(short, long)]
        time: String,
    },
    /// Tugged vessels from the closest timestamp of the snapshot index
    IndexedTugs {
        #[arg(short, long)]
        time: String,
    },
}

/// Runs `command` against `app` and returns its json output.
pub async fn execute(app: &App, command: Command) -> Result<Value> {
    match command {
        Command::Build => {
            let index = app.rebuild_index().await?;
            Ok(json!({ "timestamps": index.len() }))
        }
        Command::Timestamps => to_value(app.tracker().await?.timestamps()),
        Command::ReportsAt { time } => to_value(app.tracker().await?.reports_at(&time)),
        Command::Positions { time } => {
            to_value(app.tracker().await?.last_known_positions(&time)?)
        }
        Command::ActiveTugs { time } => to_value(app.tracker().await?.active_tugs_at(&time)?),
        Command::IndexedTugs { time } => {
            let tracker = app.tracker().await?;
            to_value(tracker.active_tugs_from_index(&time)?)
        }
    }
}

fn to_value<T: Serialize>(value: T) -> Result<Value> {
    serde_json::to_value(value).context(OutputSnafu)
}
