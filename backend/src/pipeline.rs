//! End-to-end recomputation of every table from the raw events.

use std::collections::BTreeMap;

use common::raw::RawEvent;
use common::tables::{RoleOverride, Tables};

use crate::storage::TableStorage;
use crate::Error;

/// Keeps one document per event code, later documents replace earlier ones.
pub fn dedup_events(events: Vec<RawEvent>) -> Vec<RawEvent> {
    let mut by_code: BTreeMap<String, RawEvent> = BTreeMap::new();
    for event in events {
        if let Some(previous) = by_code.insert(event.event_code.clone(), event) {
            tracing::warn!("Duplicate raw document for {}, keeping the latest", previous.event_code);
        }
    }
    by_code.into_values().collect()
}

/// Runs every stage over `events`. The result only depends on the inputs, so
/// running it twice on the same data yields identical tables.
#[tracing::instrument(skip_all, fields(events = events.len()))]
pub fn run(
    events: &[RawEvent],
    overrides: &[RoleOverride],
    config: &analysis::Config,
) -> Result<Tables, analysis::Error> {
    let matches = analysis::normalize::normalize(events)?;
    tracing::info!("Normalized {} team-match rows", matches.len());

    let oprs = analysis::opr::solve_all(&matches, config)?;
    let scored_matches = analysis::eventstats::score_matches(&matches);
    let event_aggregates = analysis::eventstats::aggregate(&scored_matches);

    let disaggregated = analysis::disaggregate::disaggregate(&matches, &oprs, overrides, config);
    let team_event_stats = analysis::teamstats::team_event_stats(&disaggregated);
    let team_season_stats = analysis::teamstats::team_season_stats(&team_event_stats);

    let event_ratings = analysis::report::event_ratings(&oprs, &event_aggregates);
    let team_reports = analysis::report::all_team_reports(&event_ratings);

    tracing::info!(
        "Computed {} OPR rows and {} team summaries",
        oprs.len(),
        team_season_stats.len()
    );

    Ok(Tables {
        matches,
        oprs,
        scored_matches,
        event_aggregates,
        disaggregated,
        team_event_stats,
        team_season_stats,
        event_ratings,
        team_reports,
    })
}

async fn compute(
    events: Vec<RawEvent>,
    overrides: Vec<RoleOverride>,
    config: analysis::Config,
) -> Result<Tables, Error> {
    let tables =
        tokio::task::spawn_blocking(move || run(&events, &overrides, &config)).await??;
    Ok(tables)
}

/// Recomputes all tables from the stored raw events and replaces the
/// persisted ones.
pub async fn recompute(
    storage: &dyn TableStorage,
    overrides: Vec<RoleOverride>,
    config: analysis::Config,
) -> Result<Tables, Error> {
    let events = dedup_events(storage.load_raw_events().await?);
    tracing::info!("Recomputing from {} raw events", events.len());

    let tables = compute(events, overrides, config).await?;

    storage.replace_tables(&tables).await?;
    Ok(tables)
}

/// Merges newly fetched raw events into the store, then recomputes.
///
/// Nothing is stored unless the pipeline succeeds on the merged events, so a
/// rejected document never reaches the raw store.
pub async fn update(
    storage: &dyn TableStorage,
    events: Vec<RawEvent>,
    overrides: Vec<RoleOverride>,
    config: analysis::Config,
) -> Result<Tables, Error> {
    let incoming = dedup_events(events);
    for event in incoming.iter() {
        crate::storage::validate_event_code(&event.event_code)?;
    }

    let mut merged: BTreeMap<String, RawEvent> = storage
        .load_raw_events()
        .await?
        .into_iter()
        .map(|e| (e.event_code.clone(), e))
        .collect();
    for event in incoming.iter() {
        if merged.insert(event.event_code.clone(), event.clone()).is_some() {
            tracing::info!("Replacing stored raw document of {}", event.event_code);
        }
    }
    tracing::info!("Recomputing from {} raw events", merged.len());

    let tables = compute(merged.into_values().collect(), overrides, config).await?;

    for event in incoming {
        storage.store_raw_event(event).await?;
    }
    storage.replace_tables(&tables).await?;
    Ok(tables)
}
