//! Command line and environment configuration of the runner.

use std::path::PathBuf;

#[derive(Debug, clap::Parser)]
#[command(version, about = "Recomputes scouting statistics from competition results")]
pub struct Cli {
    /// Raise the log level, repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Merge raw event documents into the raw store and recompute every table.
    Update {
        #[command(flatten)]
        pipeline: PipelineArgs,

        /// Raw event documents as fetched from the results provider.
        #[arg(required = true)]
        events: Vec<PathBuf>,
    },
    /// Recompute every table from the raw store.
    Recompute {
        #[command(flatten)]
        pipeline: PipelineArgs,
    },
    /// Print one persisted table as JSON.
    Show {
        #[arg(long, env = "SCOUT_DATA_DIR")]
        data: PathBuf,

        table: Table,
    },
}

#[derive(Debug, clap::Args)]
pub struct PipelineArgs {
    #[arg(long, env = "SCOUT_DATA_DIR")]
    pub data: PathBuf,

    /// Role overrides as a JSON list.
    #[arg(long, env = "SCOUT_OVERRIDES")]
    pub overrides: Option<PathBuf>,

    /// Residual penalty of the joint-scoring hypotheses.
    #[arg(long, env = "SCOUT_JOINT_PENALTY", default_value_t = analysis::Config::default().joint_penalty)]
    pub joint_penalty: f64,
}

impl PipelineArgs {
    pub fn analysis_config(&self) -> analysis::Config {
        analysis::Config {
            joint_penalty: self.joint_penalty,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Table {
    Matches,
    Oprs,
    ScoredMatches,
    EventAggregates,
    Disaggregated,
    TeamEventStats,
    TeamSeasonStats,
    EventRatings,
    TeamReports,
}

impl Table {
    pub fn to_json(
        &self,
        tables: &common::tables::Tables,
    ) -> Result<serde_json::Value, serde_json::Error> {
        match self {
            Self::Matches => serde_json::to_value(&tables.matches),
            Self::Oprs => serde_json::to_value(&tables.oprs),
            Self::ScoredMatches => serde_json::to_value(&tables.scored_matches),
            Self::EventAggregates => serde_json::to_value(&tables.event_aggregates),
            Self::Disaggregated => serde_json::to_value(&tables.disaggregated),
            Self::TeamEventStats => serde_json::to_value(&tables.team_event_stats),
            Self::TeamSeasonStats => serde_json::to_value(&tables.team_season_stats),
            Self::EventRatings => serde_json::to_value(&tables.event_ratings),
            Self::TeamReports => serde_json::to_value(&tables.team_reports),
        }
    }
}

/// Log level for the given number of `-v` flags.
pub fn level(verbose: u8) -> tracing::Level {
    match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}
