use clap::Parser;
use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;

use backend::config::{Cli, Command};
use backend::storage::{FileStorage, TableStorage};

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let level = backend::config::level(cli.verbose);
    let registry = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::filter_fn(move |meta| {
            (meta.target().contains("backend") || meta.target().contains("analysis"))
                && *meta.level() <= level
        }));
    if let Err(e) = tracing::subscriber::set_global_default(registry) {
        eprintln!("Setting up logging: {}", e);
    }

    match run(cli.command).await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> Result<(), backend::Error> {
    match command {
        Command::Update { pipeline, events } => {
            let storage = FileStorage::new(&pipeline.data);
            let overrides = backend::overrides::load(pipeline.overrides.as_deref()).await?;

            let mut raw = Vec::with_capacity(events.len());
            for path in events.iter() {
                tracing::info!(?path, "Reading raw event");
                raw.push(backend::read_json(path).await?);
            }

            let tables =
                backend::pipeline::update(&storage, raw, overrides, pipeline.analysis_config())
                    .await?;
            tracing::info!("Stored {} team reports", tables.team_reports.len());
        }
        Command::Recompute { pipeline } => {
            let storage = FileStorage::new(&pipeline.data);
            let overrides = backend::overrides::load(pipeline.overrides.as_deref()).await?;

            let tables =
                backend::pipeline::recompute(&storage, overrides, pipeline.analysis_config())
                    .await?;
            tracing::info!("Stored {} team reports", tables.team_reports.len());
        }
        Command::Show { data, table } => {
            let storage = FileStorage::new(&data);
            let tables = storage.load_tables().await?;
            println!("{}", serde_json::to_string_pretty(&table.to_json(&tables)?)?);
        }
    }

    Ok(())
}
