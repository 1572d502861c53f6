use std::collections::{BTreeMap, BTreeSet};

use common::tables::{
    CompositeScores, DisaggregatedMatchRecord, Role, RoleSeasonStats, TeamEventStats,
    TeamSeasonStats,
};
use common::TeamNumber;

use crate::stats;

fn add_scores(total: &mut CompositeScores, scores: &CompositeScores) {
    total.auto += scores.auto;
    total.endgame += scores.endgame;
    total.fouls += scores.fouls;
    total.bucket += scores.bucket;
    total.specimen += scores.specimen;
    total.points += scores.points;
}

/// One row per team, event and role, ordered by that key.
///
/// Within a bucket-role group the specimen spread is zero and vice versa: the
/// other category is not what the team did in those matches, so its zeros
/// say nothing about consistency.
#[tracing::instrument(skip_all)]
pub fn team_event_stats(records: &[DisaggregatedMatchRecord]) -> Vec<TeamEventStats> {
    let mut groups: BTreeMap<(TeamNumber, &str, Role), Vec<&DisaggregatedMatchRecord>> =
        BTreeMap::new();
    for record in records {
        groups
            .entry((record.team, record.event_code.as_str(), record.role))
            .or_default()
            .push(record);
    }

    groups
        .into_iter()
        .map(|((team, event_code, role), rows)| {
            let mut counts = common::ActionCounts::default();
            let mut totals = CompositeScores::default();
            let mut wins = 0;
            let mut auto_bonus_total = 0;
            let mut endgame_bonus_total = 0;
            for row in rows.iter() {
                counts.accumulate(&row.counts);
                add_scores(&mut totals, &row.scores);
                wins += row.win as u32;
                auto_bonus_total += row.auto_state.bonus();
                endgame_bonus_total += row.endgame_state.bonus();
            }

            let column = |f: fn(&CompositeScores) -> i64| -> Vec<f64> {
                rows.iter().map(|r| f(&r.scores) as f64).collect()
            };
            let max = |f: fn(&CompositeScores) -> i64| -> i64 {
                rows.iter().map(|r| f(&r.scores)).max().unwrap_or(0)
            };

            let match_count = rows.len() as u32;
            let points_sum_of_squares = stats::sum_of_squares(&column(|s| s.points));

            TeamEventStats {
                team,
                event_code: event_code.to_owned(),
                role,
                match_count,
                wins,
                auto_bonus_total,
                endgame_bonus_total,
                counts,
                totals,
                bucket_std: match role {
                    Role::Bucket => stats::sample_std(&column(|s| s.bucket)),
                    Role::Specimen => 0.0,
                },
                specimen_std: match role {
                    Role::Specimen => stats::sample_std(&column(|s| s.specimen)),
                    Role::Bucket => 0.0,
                },
                points_std: stats::std_from_sum_of_squares(points_sum_of_squares, match_count),
                bucket_max: max(|s| s.bucket),
                specimen_max: max(|s| s.specimen),
                points_max: max(|s| s.points),
                points_sum_of_squares,
            }
        })
        .collect()
}

fn add_role(season: &mut RoleSeasonStats, group: &TeamEventStats) {
    if season.match_count == 0 {
        season.bucket_max = group.bucket_max;
        season.specimen_max = group.specimen_max;
        season.points_max = group.points_max;
    } else {
        season.bucket_max = season.bucket_max.max(group.bucket_max);
        season.specimen_max = season.specimen_max.max(group.specimen_max);
        season.points_max = season.points_max.max(group.points_max);
    }
    season.match_count += group.match_count;
    season.wins += group.wins;
    add_scores(&mut season.totals, &group.totals);
}

/// Combines every event and role group of a team into one row per team.
///
/// The point spread is the pooled standard deviation over all groups: each
/// group's sum of squared deviations (its variance times `match_count - 1`)
/// is added up and divided by the team's total matches minus one.
#[tracing::instrument(skip_all)]
pub fn team_season_stats(groups: &[TeamEventStats]) -> Vec<TeamSeasonStats> {
    let mut teams: BTreeMap<TeamNumber, Vec<&TeamEventStats>> = BTreeMap::new();
    for group in groups {
        teams.entry(group.team).or_default().push(group);
    }

    teams
        .into_iter()
        .map(|(team, groups)| {
            let mut bucket = RoleSeasonStats::default();
            let mut specimen = RoleSeasonStats::default();
            for group in groups.iter() {
                match group.role {
                    Role::Bucket => add_role(&mut bucket, group),
                    Role::Specimen => add_role(&mut specimen, group),
                }
            }

            let events: BTreeSet<&str> = groups.iter().map(|g| g.event_code.as_str()).collect();

            TeamSeasonStats {
                team,
                event_count: events.len() as u32,
                match_count: bucket.match_count + specimen.match_count,
                bucket,
                specimen,
                points_std: stats::pooled_std(
                    groups
                        .iter()
                        .map(|g| (g.match_count, g.points_sum_of_squares)),
                ),
            }
        })
        .collect()
}
