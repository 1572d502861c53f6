use common::raw::RawEvent;
use common::tables::TeamMatchRecord;
use common::{ActionCounts, AutoFieldState, EndgameFieldState, Stage, Station};

fn main() {
    divan::main();
}

fn sample_event() -> RawEvent {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../testfiles/sample_event.json");
    let data = std::fs::read(path).unwrap();
    serde_json::from_slice(&data).unwrap()
}

/// A qualification schedule where `teams` teams each play about `rounds`
/// matches, with counts that depend on the teams involved.
fn synthetic_records(teams: u32, rounds: u32) -> Vec<TeamMatchRecord> {
    let mut records = Vec::new();
    let mut match_number = 0;
    for round in 0..rounds {
        for first in (0..teams).step_by(4) {
            match_number += 1;
            let lineup: Vec<u32> = (0..4).map(|i| (first + i + round * 3) % teams + 1).collect();
            for (i, station) in Station::ALL.iter().enumerate() {
                let partner = lineup[i ^ 1];
                let counts = ActionCounts {
                    teleop_sample_high: (lineup[i] + partner) % 9,
                    teleop_specimen_high: (lineup[i] * partner) % 5,
                    auto_net: round % 3,
                    minor_fouls: (match_number + i as u32) % 2,
                    ..Default::default()
                };
                records.push(TeamMatchRecord {
                    event_code: "BENCH".to_owned(),
                    stage: Stage::Qualification,
                    match_number,
                    team: lineup[i],
                    station: *station,
                    partner,
                    win: i < 2,
                    auto_state: AutoFieldState::None,
                    endgame_state: EndgameFieldState::Ascent1,
                    alliance_counts: counts,
                });
            }
        }
    }
    records
}

#[divan::bench]
fn normalize(bencher: divan::Bencher) {
    let events = vec![sample_event()];

    bencher.bench(|| analysis::normalize::normalize(divan::black_box(&events)));
}

#[divan::bench(args = [8, 16, 32])]
fn opr(bencher: divan::Bencher, teams: u32) {
    let records = synthetic_records(teams, 6);
    let config = analysis::Config::default();

    bencher.bench(|| {
        analysis::opr::solve_event("BENCH", divan::black_box(&records), divan::black_box(&config))
    });
}

#[divan::bench(args = [8, 16, 32])]
fn pipeline(bencher: divan::Bencher, teams: u32) {
    let records = synthetic_records(teams, 6);
    let config = analysis::Config::default();

    bencher.bench(|| {
        let oprs = analysis::opr::solve_all(&records, &config).unwrap();
        let scored = analysis::eventstats::score_matches(&records);
        let aggregates = analysis::eventstats::aggregate(&scored);
        let disaggregated = analysis::disaggregate::disaggregate(&records, &oprs, &[], &config);
        let groups = analysis::teamstats::team_event_stats(&disaggregated);
        let season = analysis::teamstats::team_season_stats(&groups);
        let ratings = analysis::report::event_ratings(&oprs, &aggregates);
        (season, analysis::report::all_team_reports(&ratings))
    });
}
