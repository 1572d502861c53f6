#![allow(dead_code)]

use common::raw::{RawAllianceScore, RawEvent, RawMatch, RawMatchScore, RawStationAssignment};
use common::tables::{TeamEventOpr, TeamMatchRecord};
use common::{
    ActionCategory, ActionCounts, ActionRates, AllianceColor, AutoFieldState, EndgameFieldState,
    Stage, Station, TeamNumber,
};

pub fn alliance_score(color: AllianceColor, total: i64, counts: &ActionCounts) -> RawAllianceScore {
    RawAllianceScore {
        alliance: color,
        total_points: Some(total),
        robot1_auto: Some("ASCENT".to_owned()),
        robot2_auto: Some("NONE".to_owned()),
        robot1_teleop: Some("ASCENT_2".to_owned()),
        robot2_teleop: Some("OBSERVATION_ZONE".to_owned()),
        auto_sample_net: Some(counts.auto_net),
        auto_sample_low: Some(counts.auto_sample_low),
        auto_sample_high: Some(counts.auto_sample_high),
        auto_specimen_low: Some(counts.auto_specimen_low),
        auto_specimen_high: Some(counts.auto_specimen_high),
        teleop_sample_net: Some(counts.teleop_net),
        teleop_sample_low: Some(counts.teleop_sample_low),
        teleop_sample_high: Some(counts.teleop_sample_high),
        teleop_specimen_low: Some(counts.teleop_specimen_low),
        teleop_specimen_high: Some(counts.teleop_specimen_high),
        minor_fouls: Some(counts.minor_fouls),
        major_fouls: Some(counts.major_fouls),
    }
}

pub fn scheduled(stage: Stage, number: u32, series: u32, teams: [TeamNumber; 4]) -> RawMatch {
    RawMatch {
        match_number: number,
        series,
        tournament_level: stage,
        teams: Station::ALL
            .iter()
            .zip(teams)
            .map(|(station, team_number)| RawStationAssignment {
                team_number,
                station: *station,
            })
            .collect(),
    }
}

pub fn score(
    stage: Stage,
    number: u32,
    series: u32,
    red: RawAllianceScore,
    blue: RawAllianceScore,
) -> RawMatchScore {
    RawMatchScore {
        match_level: stage,
        match_series: series,
        match_number: number,
        alliances: vec![red, blue],
    }
}

/// A qualification event where every match has the given teams and totals.
pub fn qualification_event(
    event_code: &str,
    matches: &[([TeamNumber; 4], i64, i64)],
) -> RawEvent {
    let counts = ActionCounts {
        teleop_sample_high: 4,
        teleop_specimen_high: 2,
        minor_fouls: 1,
        ..Default::default()
    };

    RawEvent {
        event_code: event_code.to_owned(),
        matches: matches
            .iter()
            .enumerate()
            .map(|(i, (teams, _, _))| scheduled(Stage::Qualification, i as u32 + 1, 0, *teams))
            .collect(),
        qualification_scores: matches
            .iter()
            .enumerate()
            .map(|(i, (_, red, blue))| {
                score(
                    Stage::Qualification,
                    i as u32 + 1,
                    0,
                    alliance_score(AllianceColor::Red, *red, &counts),
                    alliance_score(AllianceColor::Blue, *blue, &counts),
                )
            })
            .collect(),
        playoff_scores: Vec::new(),
    }
}

pub fn record(
    event_code: &str,
    match_number: u32,
    station: Station,
    team: TeamNumber,
    partner: TeamNumber,
    alliance_counts: ActionCounts,
) -> TeamMatchRecord {
    TeamMatchRecord {
        event_code: event_code.to_owned(),
        stage: Stage::Qualification,
        match_number,
        team,
        station,
        partner,
        win: false,
        auto_state: AutoFieldState::None,
        endgame_state: EndgameFieldState::None,
        alliance_counts,
    }
}

/// The four rows of a match from each alliance's teams and counts.
pub fn match_records(
    event_code: &str,
    match_number: u32,
    red: ([TeamNumber; 2], ActionCounts),
    blue: ([TeamNumber; 2], ActionCounts),
) -> Vec<TeamMatchRecord> {
    let ([r1, r2], red_counts) = red;
    let ([b1, b2], blue_counts) = blue;
    vec![
        record(event_code, match_number, Station::Red1, r1, r2, red_counts),
        record(event_code, match_number, Station::Red2, r2, r1, red_counts),
        record(event_code, match_number, Station::Blue1, b1, b2, blue_counts),
        record(event_code, match_number, Station::Blue2, b2, b1, blue_counts),
    ]
}

pub fn opr(event_code: &str, team: TeamNumber, contribution: ActionRates) -> TeamEventOpr {
    TeamEventOpr {
        event_code: event_code.to_owned(),
        team,
        contribution,
    }
}

/// Every category set to `value`.
pub fn uniform_rates(value: f64) -> ActionRates {
    ActionRates::from_fn(|_| value)
}

/// Counts where category `i` of [`ActionCategory::ALL`] is `f(i)`.
pub fn counts_by_index(f: impl Fn(usize) -> u32) -> ActionCounts {
    ActionCounts::from_fn(|c: ActionCategory| f(c.index()))
}
