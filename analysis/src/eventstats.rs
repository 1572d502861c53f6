use std::collections::BTreeMap;

use common::tables::{EventAggregate, ScoredMatch, TeamMatchRecord};
use common::{Stage, TeamNumber};

use crate::{scoring, stats};

type GroupKey<'r> = (&'r str, TeamNumber, Stage);

/// Scores every qualification row with its non-penalty points and attaches
/// the spread of those points over the team's matches in the same event and
/// stage.
#[tracing::instrument(skip(records))]
pub fn score_matches(records: &[TeamMatchRecord]) -> Vec<ScoredMatch> {
    let qualification: Vec<&TeamMatchRecord> = records
        .iter()
        .filter(|r| r.stage == Stage::Qualification)
        .collect();

    let points: Vec<i64> = qualification
        .iter()
        .map(|r| scoring::non_penalty_points(&r.alliance_counts, r.auto_state, r.endgame_state))
        .collect();

    let mut groups: BTreeMap<GroupKey, Vec<f64>> = BTreeMap::new();
    for (record, points) in qualification.iter().copied().zip(points.iter()) {
        groups
            .entry((record.event_code.as_str(), record.team, record.stage))
            .or_default()
            .push(*points as f64);
    }
    let spreads: BTreeMap<GroupKey, f64> = groups
        .into_iter()
        .map(|(key, values)| (key, stats::sample_std(&values)))
        .collect();

    qualification
        .into_iter()
        .zip(points)
        .map(|(record, np_points)| ScoredMatch {
            event_code: record.event_code.clone(),
            stage: record.stage,
            match_number: record.match_number,
            team: record.team,
            win: record.win,
            auto_bonus: record.auto_state.bonus(),
            endgame_bonus: record.endgame_state.bonus(),
            np_points,
            np_points_std: spreads[&(record.event_code.as_str(), record.team, record.stage)],
        })
        .collect()
}

/// One row per event, team and stage, ordered by that key.
#[tracing::instrument(skip(scored))]
pub fn aggregate(scored: &[ScoredMatch]) -> Vec<EventAggregate> {
    let mut groups: BTreeMap<GroupKey, EventAggregate> = BTreeMap::new();
    for row in scored {
        let entry = groups
            .entry((row.event_code.as_str(), row.team, row.stage))
            .or_insert_with(|| EventAggregate {
                event_code: row.event_code.clone(),
                team: row.team,
                stage: row.stage,
                match_count: 0,
                auto_bonus_total: 0,
                endgame_bonus_total: 0,
                wins: 0,
                np_points_std: row.np_points_std,
            });

        entry.match_count += 1;
        entry.auto_bonus_total += row.auto_bonus;
        entry.endgame_bonus_total += row.endgame_bonus;
        entry.wins += row.win as u32;
    }

    groups.into_values().collect()
}
