//! Splits an alliance's shared counts between its two robots.
//!
//! Each teammate's OPR row is used as a prior for what that robot can score.
//! Four [`Hypothesis`] variants describe how the pair may have divided the
//! work; the one whose predicted bucket and specimen points deviate least from
//! the alliance's actual teleop points wins, unless a scout overrode it.

use std::collections::{BTreeMap, HashMap};

use common::tables::{
    Assignment, DisaggregatedMatchRecord, Hypothesis, Role, RoleOverride, TeamEventOpr,
    TeamMatchRecord,
};
use common::{ActionCategory, ActionCounts, ActionRates, AllianceColor, Stage, TeamNumber};

use crate::{scoring, Config};

/// What a robot is expected to score in teleop according to its OPR row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Potential {
    pub bucket: f64,
    pub specimen: f64,
    pub sample_high: f64,
    pub specimen_high: f64,
}

impl Potential {
    pub fn of(opr: &ActionRates) -> Self {
        Self {
            bucket: scoring::weighted(opr, &scoring::TELEOP_BUCKET),
            specimen: scoring::weighted(opr, &scoring::TELEOP_SPECIMEN),
            sample_high: opr.teleop_sample_high,
            specimen_high: opr.teleop_specimen_high,
        }
    }
}

/// Actual teleop points of an alliance next to both teammates' potentials.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evidence {
    pub bucket: f64,
    pub specimen: f64,
    pub first: Potential,
    pub second: Potential,
}

impl Evidence {
    pub fn new(alliance: &ActionCounts, first: &ActionRates, second: &ActionRates) -> Self {
        Self {
            bucket: scoring::points(alliance, &scoring::TELEOP_BUCKET) as f64,
            specimen: scoring::points(alliance, &scoring::TELEOP_SPECIMEN) as f64,
            first: Potential::of(first),
            second: Potential::of(second),
        }
    }
}

fn split_roles(evidence: &Evidence, bucket_robot: &Potential, specimen_robot: &Potential) -> f64 {
    (evidence.bucket - bucket_robot.bucket - bucket_robot.sample_high).abs()
        + (evidence.specimen - specimen_robot.specimen + specimen_robot.specimen_high).abs()
}

pub fn residual_bucket_specimen(evidence: &Evidence) -> f64 {
    split_roles(evidence, &evidence.first, &evidence.second)
}

pub fn residual_specimen_bucket(evidence: &Evidence) -> f64 {
    split_roles(evidence, &evidence.second, &evidence.first)
}

pub fn residual_joint_bucket(evidence: &Evidence, penalty: f64) -> f64 {
    (evidence.bucket - evidence.first.bucket - evidence.second.bucket).abs()
        + penalty * evidence.specimen
}

pub fn residual_joint_specimen(evidence: &Evidence, penalty: f64) -> f64 {
    (evidence.specimen - evidence.first.specimen - evidence.second.specimen).abs()
        + penalty * evidence.bucket
}

pub fn residual(hypothesis: Hypothesis, evidence: &Evidence, config: &Config) -> f64 {
    match hypothesis {
        Hypothesis::BucketSpecimen => residual_bucket_specimen(evidence),
        Hypothesis::SpecimenBucket => residual_specimen_bucket(evidence),
        Hypothesis::JointBucket => residual_joint_bucket(evidence, config.joint_penalty),
        Hypothesis::JointSpecimen => residual_joint_specimen(evidence, config.joint_penalty),
    }
}

/// The hypothesis with the smallest residual. Ties go to the earlier variant
/// of [`Hypothesis::ALL`].
pub fn select(evidence: &Evidence, config: &Config) -> Hypothesis {
    let mut best = Hypothesis::ALL[0];
    let mut best_residual = residual(best, evidence, config);
    for hypothesis in &Hypothesis::ALL[1..] {
        let candidate = residual(*hypothesis, evidence, config);
        if candidate < best_residual {
            best = *hypothesis;
            best_residual = candidate;
        }
    }
    best
}

/// Splits `actual` proportionally to the non-negative parts of the two
/// predictions. The second share takes the remainder, so the split is a
/// partition of `actual`. Without a positive prior, or with nothing to split,
/// both shares are zero.
pub fn split_proportional(actual: u32, first: f64, second: f64) -> (u32, u32) {
    let first = first.max(0.0);
    let second = second.max(0.0);
    let combined = first + second;
    if combined <= 0.0 || actual == 0 {
        return (0, 0);
    }

    let share = (actual as f64 * first / combined).round_ties_even() as u32;
    let share = share.min(actual);
    (share, actual - share)
}

/// Per-robot counts under `hypothesis`.
///
/// Under a split-role hypothesis each role's categories go entirely to the
/// robot playing that role; joint hypotheses share every scoring category
/// proportionally to the OPR rows. Fouls are always shared proportionally.
pub fn split_counts(
    hypothesis: Hypothesis,
    alliance: &ActionCounts,
    first: &ActionRates,
    second: &ActionRates,
) -> (ActionCounts, ActionCounts) {
    let mut first_counts = ActionCounts::default();
    let mut second_counts = ActionCounts::default();

    let mut proportional = |category: ActionCategory| {
        let (a, b) = split_proportional(
            *alliance.get(category),
            *first.get(category),
            *second.get(category),
        );
        *first_counts.get_mut(category) = a;
        *second_counts.get_mut(category) = b;
    };

    match hypothesis {
        Hypothesis::BucketSpecimen | Hypothesis::SpecimenBucket => {
            for category in ActionCategory::FOULS {
                proportional(category);
            }

            let (bucket_counts, specimen_counts) = match hypothesis {
                Hypothesis::BucketSpecimen => (&mut first_counts, &mut second_counts),
                _ => (&mut second_counts, &mut first_counts),
            };
            for category in ActionCategory::BUCKET {
                *bucket_counts.get_mut(category) = *alliance.get(category);
            }
            for category in ActionCategory::SPECIMEN {
                *specimen_counts.get_mut(category) = *alliance.get(category);
            }
        }
        Hypothesis::JointBucket | Hypothesis::JointSpecimen => {
            for category in ActionCategory::ALL {
                proportional(category);
            }
        }
    }

    (first_counts, second_counts)
}

fn forced(assignment: Assignment, overridden_is_first: bool) -> Hypothesis {
    match (assignment, overridden_is_first) {
        (Assignment::Bucket, true) | (Assignment::Specimen, false) => Hypothesis::BucketSpecimen,
        (Assignment::Specimen, true) | (Assignment::Bucket, false) => Hypothesis::SpecimenBucket,
        (Assignment::BothBucket, _) => Hypothesis::JointBucket,
        (Assignment::BothSpecimen, _) => Hypothesis::JointSpecimen,
    }
}

type OverrideKey<'o> = (&'o str, Stage, u32, TeamNumber);

/// Two rows per alliance pairing, in event, stage, match and station order.
///
/// Pairings where a teammate has no OPR row at that event are skipped.
#[tracing::instrument(skip_all)]
pub fn disaggregate(
    records: &[TeamMatchRecord],
    oprs: &[TeamEventOpr],
    overrides: &[RoleOverride],
    config: &Config,
) -> Vec<DisaggregatedMatchRecord> {
    let opr_rows: HashMap<(&str, TeamNumber), &ActionRates> = oprs
        .iter()
        .map(|o| ((o.event_code.as_str(), o.team), &o.contribution))
        .collect();

    let overrides: HashMap<OverrideKey, Assignment> = overrides
        .iter()
        .map(|o| {
            (
                (o.event_code.as_str(), o.stage, o.match_number, o.team),
                o.assignment,
            )
        })
        .collect();

    let mut pairings: BTreeMap<(&str, Stage, u32, AllianceColor), Vec<&TeamMatchRecord>> =
        BTreeMap::new();
    for record in records {
        pairings
            .entry((
                record.event_code.as_str(),
                record.stage,
                record.match_number,
                record.station.alliance(),
            ))
            .or_default()
            .push(record);
    }

    let mut output = Vec::with_capacity(records.len());
    for ((event_code, stage, match_number, alliance), mut pair) in pairings {
        let _guard =
            tracing::debug_span!("Pairing", event_code, ?stage, match_number, ?alliance).entered();

        pair.sort_by_key(|r| r.station);
        let (first, second) = match pair.as_slice() {
            [first, second] => (*first, *second),
            other => {
                tracing::warn!("Expected two teammates, found {}", other.len());
                continue;
            }
        };

        let (first_opr, second_opr) = match (
            opr_rows.get(&(event_code, first.team)),
            opr_rows.get(&(event_code, second.team)),
        ) {
            (Some(a), Some(b)) => (*a, *b),
            _ => {
                tracing::warn!(
                    "No OPR row for team {} or {}, skipping pairing",
                    first.team,
                    second.team
                );
                continue;
            }
        };

        let overridden = [(first, true), (second, false)]
            .into_iter()
            .find_map(|(record, is_first)| {
                overrides
                    .get(&(event_code, stage, match_number, record.team))
                    .map(|assignment| forced(*assignment, is_first))
            });

        let hypothesis = match overridden {
            Some(hypothesis) => {
                tracing::debug!("Using overridden hypothesis {:?}", hypothesis);
                hypothesis
            }
            None => {
                let evidence = Evidence::new(&first.alliance_counts, first_opr, second_opr);
                select(&evidence, config)
            }
        };

        let (first_counts, second_counts) =
            split_counts(hypothesis, &first.alliance_counts, first_opr, second_opr);
        let (first_role, second_role) = hypothesis.roles();

        output.push(disaggregated(first, hypothesis, first_role, first_counts));
        output.push(disaggregated(second, hypothesis, second_role, second_counts));
    }

    output
}

fn disaggregated(
    record: &TeamMatchRecord,
    hypothesis: Hypothesis,
    role: Role,
    counts: ActionCounts,
) -> DisaggregatedMatchRecord {
    DisaggregatedMatchRecord {
        event_code: record.event_code.clone(),
        stage: record.stage,
        match_number: record.match_number,
        team: record.team,
        station: record.station,
        partner: record.partner,
        win: record.win,
        auto_state: record.auto_state,
        endgame_state: record.endgame_state,
        hypothesis,
        role,
        scores: scoring::composite(&counts, record.auto_state, record.endgame_state),
        counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_is_exact_for_proportional_priors() {
        assert_eq!(split_proportional(10, 6.0, 4.0), (6, 4));
    }

    #[test]
    fn split_clips_negative_priors() {
        assert_eq!(split_proportional(7, 3.5, -1.0), (7, 0));
    }

    #[test]
    fn split_without_prior_is_zero() {
        assert_eq!(split_proportional(5, 0.0, -2.0), (0, 0));
        assert_eq!(split_proportional(0, 1.0, 1.0), (0, 0));
    }

    #[test]
    fn split_halves_round_to_even() {
        assert_eq!(split_proportional(1, 1.0, 1.0), (0, 1));
        assert_eq!(split_proportional(3, 1.0, 1.0), (2, 1));
    }

    #[test]
    fn override_is_relative_to_the_overridden_team() {
        assert_eq!(forced(Assignment::Bucket, true), Hypothesis::BucketSpecimen);
        assert_eq!(forced(Assignment::Bucket, false), Hypothesis::SpecimenBucket);
        assert_eq!(forced(Assignment::Specimen, false), Hypothesis::BucketSpecimen);
        assert_eq!(forced(Assignment::BothSpecimen, false), Hypothesis::JointSpecimen);
    }
}
