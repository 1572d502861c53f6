use std::collections::{HashMap, HashSet};

use common::raw::{RawEvent, RawMatch, RawMatchScore};
use common::tables::TeamMatchRecord;
use common::{AllianceColor, AutoFieldState, EndgameFieldState, MatchKey, Stage, Station};

use crate::Error;

/// Flattens every event into one row per team per played match, ordered by
/// event, stage, match number and station.
pub fn normalize(events: &[RawEvent]) -> Result<Vec<TeamMatchRecord>, Error> {
    let mut records = Vec::new();
    for event in events {
        records.extend(normalize_event(event)?);
    }
    records.sort_by(|a, b| {
        (&a.event_code, a.stage, a.match_number, a.station)
            .cmp(&(&b.event_code, b.stage, b.match_number, b.station))
    });
    Ok(records)
}

#[tracing::instrument(skip(event), fields(event = %event.event_code))]
pub fn normalize_event(event: &RawEvent) -> Result<Vec<TeamMatchRecord>, Error> {
    let duplicate = |stage: Stage, match_number: u32| Error::DuplicateMatch {
        key: MatchKey {
            event_code: event.event_code.clone(),
            stage,
            match_number,
        },
    };

    // Two entries under one key would yield eight rows for one match.
    let mut schedule: HashMap<(Stage, u32), &RawMatch> = HashMap::new();
    for scheduled in event.matches.iter() {
        let key = (scheduled.tournament_level, scheduled.sequence_number());
        if schedule.insert(key, scheduled).is_some() {
            return Err(duplicate(key.0, key.1));
        }
    }

    let mut scored = HashSet::new();
    let mut records = Vec::with_capacity(event.matches.len() * 4);
    for score in event.scores() {
        if !scored.insert((score.match_level, score.sequence_number())) {
            return Err(duplicate(score.match_level, score.sequence_number()));
        }
        records.extend(normalize_match(&event.event_code, &schedule, score)?);
    }

    let unplayed = schedule.len() - scored.len();
    if unplayed > 0 {
        tracing::warn!("{} scheduled matches have no score record yet", unplayed);
    }

    tracing::debug!("Normalized {} team-match rows", records.len());
    Ok(records)
}

fn normalize_match(
    event_code: &str,
    schedule: &HashMap<(Stage, u32), &RawMatch>,
    score: &RawMatchScore,
) -> Result<[TeamMatchRecord; 4], Error> {
    let key = MatchKey {
        event_code: event_code.to_owned(),
        stage: score.match_level,
        match_number: score.sequence_number(),
    };

    let scheduled = schedule
        .get(&(key.stage, key.match_number))
        .ok_or_else(|| Error::MissingSchedule { key: key.clone() })?;

    let alliance_score = |alliance: AllianceColor| {
        score
            .alliance(alliance)
            .ok_or_else(|| Error::MissingAlliance {
                key: key.clone(),
                alliance,
            })
    };
    let red = alliance_score(AllianceColor::Red)?;
    let blue = alliance_score(AllianceColor::Blue)?;

    let total = |alliance: AllianceColor, points: Option<i64>| {
        points.ok_or_else(|| Error::MissingField {
            key: key.clone(),
            alliance,
            field: "totalPoints",
        })
    };
    // A tie leaves both alliances without a win.
    let margin = total(AllianceColor::Red, red.total_points)?
        - total(AllianceColor::Blue, blue.total_points)?;

    let row = |station: Station| -> Result<TeamMatchRecord, Error> {
        let alliance = station.alliance();
        let alliance_score = match alliance {
            AllianceColor::Red => red,
            AllianceColor::Blue => blue,
        };
        let team_at = |station: Station| {
            scheduled
                .team_at(station)
                .ok_or_else(|| Error::MissingStation {
                    key: key.clone(),
                    station,
                })
        };
        let missing = |field: &'static str| Error::MissingField {
            key: key.clone(),
            alliance,
            field,
        };
        let unknown = |source| Error::UnknownFieldState {
            key: key.clone(),
            source,
        };

        let robot = station.robot();
        let auto = alliance_score
            .robot_auto(robot)
            .ok_or_else(|| missing(if robot == 1 { "robot1Auto" } else { "robot2Auto" }))?;
        let endgame = alliance_score
            .robot_teleop(robot)
            .ok_or_else(|| missing(if robot == 1 { "robot1Teleop" } else { "robot2Teleop" }))?;

        Ok(TeamMatchRecord {
            event_code: key.event_code.clone(),
            stage: key.stage,
            match_number: key.match_number,
            team: team_at(station)?,
            station,
            partner: team_at(station.partner())?,
            win: match alliance {
                AllianceColor::Red => margin > 0,
                AllianceColor::Blue => margin < 0,
            },
            auto_state: AutoFieldState::parse(auto).map_err(unknown)?,
            endgame_state: EndgameFieldState::parse(endgame).map_err(unknown)?,
            alliance_counts: alliance_score.counts().map_err(missing)?,
        })
    };

    Ok([
        row(Station::Red1)?,
        row(Station::Red2)?,
        row(Station::Blue1)?,
        row(Station::Blue2)?,
    ])
}
