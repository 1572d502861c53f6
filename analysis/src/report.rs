//! Scouting ratings projected from the OPR rows and event aggregates.

use std::collections::{BTreeMap, HashMap};

use common::tables::{EventAggregate, Experience, Ratings, TeamEventOpr, TeamEventRating, TeamReport};
use common::{ActionCategory, Stage, TeamNumber};

use crate::scoring;

/// Scrimmage event codes end in `S`.
pub fn is_scrimmage(event_code: &str) -> bool {
    event_code.ends_with('S')
}

/// A team that played any qualifying event is a qualifier, one that only
/// played scrimmages is a scrimmage team.
pub fn experience<'e, I>(event_codes: I) -> Experience
where
    I: IntoIterator<Item = &'e str>,
{
    let mut experience = Experience::None;
    for event_code in event_codes {
        if !is_scrimmage(event_code) {
            return Experience::Qualifier;
        }
        experience = Experience::Scrimmage;
    }
    experience
}

/// One rating row per OPR row that has a qualification aggregate.
#[tracing::instrument(skip_all)]
pub fn event_ratings(oprs: &[TeamEventOpr], aggregates: &[EventAggregate]) -> Vec<TeamEventRating> {
    let aggregates: HashMap<(&str, TeamNumber), &EventAggregate> = aggregates
        .iter()
        .filter(|a| a.stage == Stage::Qualification)
        .map(|a| ((a.event_code.as_str(), a.team), a))
        .collect();

    oprs.iter()
        .filter_map(|opr| {
            let aggregate = match aggregates.get(&(opr.event_code.as_str(), opr.team)) {
                Some(a) => a,
                None => {
                    tracing::warn!(
                        "No aggregate for team {} at {}, skipping rating",
                        opr.team,
                        opr.event_code
                    );
                    return None;
                }
            };

            let contribution = &opr.contribution;
            let bucket = scoring::weighted(contribution, &ActionCategory::BUCKET);
            let specimen = scoring::weighted(contribution, &ActionCategory::SPECIMEN);
            let foul = scoring::weighted(contribution, &ActionCategory::FOULS);
            let end_of_round = if aggregate.match_count == 0 {
                0.0
            } else {
                (aggregate.auto_bonus_total + aggregate.endgame_bonus_total) as f64
                    / aggregate.match_count as f64
            };

            Some(TeamEventRating {
                event_code: opr.event_code.clone(),
                team: opr.team,
                ratings: Ratings {
                    bucket,
                    specimen,
                    auto_bucket: scoring::weighted(contribution, &scoring::AUTO_BUCKET),
                    auto_specimen: scoring::weighted(contribution, &scoring::AUTO_SPECIMEN),
                    end_of_round,
                    foul,
                    bucket_plus: bucket + foul + end_of_round,
                    specimen_plus: specimen + foul + end_of_round,
                    spread: aggregate.np_points_std,
                },
            })
        })
        .collect()
}

fn best_of(ratings: &[&Ratings]) -> Ratings {
    let max = |f: fn(&Ratings) -> f64| {
        ratings
            .iter()
            .map(|r| f(r))
            .fold(f64::NEG_INFINITY, f64::max)
    };

    Ratings {
        bucket: max(|r| r.bucket),
        specimen: max(|r| r.specimen),
        auto_bucket: max(|r| r.auto_bucket),
        auto_specimen: max(|r| r.auto_specimen),
        end_of_round: max(|r| r.end_of_round),
        foul: max(|r| r.foul),
        bucket_plus: max(|r| r.bucket_plus),
        specimen_plus: max(|r| r.specimen_plus),
        spread: ratings.iter().map(|r| r.spread).sum::<f64>() / ratings.len() as f64,
    }
}

/// Summaries of the given teams. Every rating is the team's best event, the
/// spread is averaged over its events. Teams without any rating row still
/// get a report with experience `none`.
pub fn team_reports<I>(ratings: &[TeamEventRating], teams: I) -> Vec<TeamReport>
where
    I: IntoIterator<Item = TeamNumber>,
{
    let mut by_team: BTreeMap<TeamNumber, Vec<&TeamEventRating>> = BTreeMap::new();
    for rating in ratings {
        by_team.entry(rating.team).or_default().push(rating);
    }

    let mut teams: Vec<TeamNumber> = teams.into_iter().collect();
    teams.sort_unstable();
    teams.dedup();

    teams
        .into_iter()
        .map(|team| {
            let rows = by_team.get(&team).map(Vec::as_slice).unwrap_or(&[]);
            let summary: Vec<&Ratings> = rows.iter().map(|r| &r.ratings).collect();

            TeamReport {
                team,
                experience: experience(rows.iter().map(|r| r.event_code.as_str())),
                event_count: rows.len() as u32,
                ratings: (!summary.is_empty()).then(|| best_of(&summary)),
            }
        })
        .collect()
}

/// Reports for every team that has at least one rating.
pub fn all_team_reports(ratings: &[TeamEventRating]) -> Vec<TeamReport> {
    team_reports(ratings, ratings.iter().map(|r| r.team))
}
