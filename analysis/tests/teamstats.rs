use analysis::{scoring, stats, teamstats};
use common::tables::{DisaggregatedMatchRecord, Hypothesis, Role, RoleSeasonStats};
use common::{ActionCounts, AutoFieldState, EndgameFieldState, Stage, Station, TeamNumber};
use pretty_assertions::assert_eq;

fn row(
    team: TeamNumber,
    event_code: &str,
    match_number: u32,
    role: Role,
    counts: ActionCounts,
) -> DisaggregatedMatchRecord {
    let hypothesis = match role {
        Role::Bucket => Hypothesis::BucketSpecimen,
        Role::Specimen => Hypothesis::SpecimenBucket,
    };
    DisaggregatedMatchRecord {
        event_code: event_code.to_owned(),
        stage: Stage::Qualification,
        match_number,
        team,
        station: Station::Red1,
        partner: 99,
        win: false,
        auto_state: AutoFieldState::None,
        endgame_state: EndgameFieldState::None,
        hypothesis,
        role,
        scores: scoring::composite(&counts, AutoFieldState::None, EndgameFieldState::None),
        counts,
    }
}

fn samples(n: u32) -> ActionCounts {
    ActionCounts {
        teleop_sample_high: n,
        ..Default::default()
    }
}

fn specimens(n: u32) -> ActionCounts {
    ActionCounts {
        teleop_specimen_high: n,
        ..Default::default()
    }
}

/// Team 1 plays bucket at USPAPHQ1 (points 16, 32, 48) and specimen at
/// USNJBRQ (points 10, 30).
fn two_event_rows() -> Vec<DisaggregatedMatchRecord> {
    vec![
        DisaggregatedMatchRecord {
            win: true,
            ..row(1, "USPAPHQ1", 1, Role::Bucket, samples(2))
        },
        row(1, "USPAPHQ1", 2, Role::Bucket, samples(4)),
        row(1, "USPAPHQ1", 3, Role::Bucket, samples(6)),
        row(1, "USNJBRQ", 1, Role::Specimen, specimens(1)),
        row(1, "USNJBRQ", 2, Role::Specimen, specimens(3)),
    ]
}

#[test]
fn groups_by_team_event_and_role() {
    let mut rows = two_event_rows();
    rows.push(row(2, "USPAPHQ1", 1, Role::Specimen, specimens(2)));
    rows.push(row(1, "USPAPHQ1", 4, Role::Specimen, specimens(2)));

    let stats = teamstats::team_event_stats(&rows);
    let keys: Vec<_> = stats
        .iter()
        .map(|s| (s.team, s.event_code.as_str(), s.role, s.match_count))
        .collect();
    assert_eq!(
        keys,
        vec![
            (1, "USNJBRQ", Role::Specimen, 2),
            (1, "USPAPHQ1", Role::Bucket, 3),
            (1, "USPAPHQ1", Role::Specimen, 1),
            (2, "USPAPHQ1", Role::Specimen, 1),
        ]
    );
}

#[test]
fn other_category_has_no_spread() {
    let rows = vec![
        row(
            7,
            "USPAPHQ1",
            1,
            Role::Bucket,
            ActionCounts {
                teleop_specimen_high: 1,
                ..samples(2)
            },
        ),
        row(7, "USPAPHQ1", 2, Role::Bucket, samples(4)),
        row(
            7,
            "USPAPHQ1",
            3,
            Role::Bucket,
            ActionCounts {
                teleop_specimen_high: 3,
                ..samples(6)
            },
        ),
    ];

    let stats = teamstats::team_event_stats(&rows);
    assert_eq!(stats.len(), 1);
    let group = &stats[0];
    assert_eq!(group.bucket_std, 16.0);
    assert_eq!(group.specimen_std, 0.0);
    assert_eq!(group.specimen_max, 30);
    assert_eq!(group.bucket_max, 48);
    assert_eq!(group.totals.bucket, 96);
    assert_eq!(group.totals.specimen, 40);
    assert_eq!(group.counts.teleop_sample_high, 12);
}

#[test]
fn single_group_season_spread_is_the_group_spread() {
    let rows: Vec<_> = two_event_rows()
        .into_iter()
        .filter(|r| r.role == Role::Bucket)
        .collect();

    let groups = teamstats::team_event_stats(&rows);
    let season = teamstats::team_season_stats(&groups);

    assert_eq!(season.len(), 1);
    assert_eq!(season[0].points_std, groups[0].points_std);
    assert_eq!(season[0].points_std, stats::sample_std(&[16.0, 32.0, 48.0]));
}

#[test]
fn season_pools_over_events_and_roles() {
    let groups = teamstats::team_event_stats(&two_event_rows());
    let season = teamstats::team_season_stats(&groups);
    assert_eq!(season.len(), 1);
    let team = &season[0];

    assert_eq!(team.team, 1);
    assert_eq!(team.event_count, 2);
    assert_eq!(team.match_count, 5);

    assert_eq!(team.bucket.match_count, 3);
    assert_eq!(team.bucket.wins, 1);
    assert_eq!(team.bucket.totals.bucket, 96);
    assert_eq!(team.bucket.points_max, 48);

    assert_eq!(team.specimen.match_count, 2);
    assert_eq!(team.specimen.wins, 0);
    assert_eq!(team.specimen.totals.specimen, 40);
    assert_eq!(team.specimen.points_max, 30);

    // (512 + 200) / (5 - 1)
    assert!((team.points_std - 178.0f64.sqrt()).abs() < 1e-12);
}

#[test]
fn role_without_matches_stays_empty() {
    let rows = vec![row(3, "USPAPHQ1", 1, Role::Specimen, specimens(1))];
    let season = teamstats::team_season_stats(&teamstats::team_event_stats(&rows));

    assert_eq!(season[0].bucket, RoleSeasonStats::default());
    assert_eq!(season[0].specimen.match_count, 1);
    assert_eq!(season[0].points_std, 0.0);
}
