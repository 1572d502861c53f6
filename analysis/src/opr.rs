//! Offensive power ratings.
//!
//! For every event the qualification schedule is turned into the normal
//! equations of the alliance least-squares problem: `M[t][t]` counts the
//! matches of team `t`, `M[t][p]` the matches `t` played next to `p`, and the
//! right-hand side holds each team's summed alliance totals per category.
//! The system is solved through the Moore-Penrose pseudoinverse, so
//! degenerate schedules still get a least-norm estimate.

use std::collections::{BTreeSet, HashMap};

use nalgebra::DMatrix;

use common::tables::{TeamEventOpr, TeamMatchRecord};
use common::{ActionCategory, ActionRates, Stage, TeamNumber};

use crate::{Config, Error};

/// The linear system of one event.
#[derive(Debug, Clone)]
pub struct EventSystem {
    pub event_code: String,
    /// Team of every matrix row and column, ascending.
    pub teams: Vec<TeamNumber>,
    /// Square participation matrix.
    pub incidence: DMatrix<f64>,
    /// One row per team, one column per [`ActionCategory`].
    pub totals: DMatrix<f64>,
}

impl EventSystem {
    /// Builds the system from the event's qualification rows. Rows of other
    /// events and playoff rows are ignored, playoff pairings are not
    /// balanced.
    pub fn build(event_code: &str, records: &[TeamMatchRecord]) -> Self {
        let rows: Vec<&TeamMatchRecord> = records
            .iter()
            .filter(|r| r.event_code == event_code && r.stage == Stage::Qualification)
            .collect();

        let teams: Vec<TeamNumber> = rows
            .iter()
            .map(|r| r.team)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let index: HashMap<TeamNumber, usize> =
            teams.iter().enumerate().map(|(i, t)| (*t, i)).collect();

        let n = teams.len();
        let mut incidence = DMatrix::<f64>::zeros(n, n);
        let mut totals = DMatrix::<f64>::zeros(n, ActionCategory::ALL.len());

        for row in rows {
            let i = index[&row.team];
            incidence[(i, i)] += 1.0;
            match index.get(&row.partner) {
                Some(&j) => incidence[(i, j)] += 1.0,
                None => {
                    tracing::warn!(
                        "Team {} in match {} has partner {} without a row of its own",
                        row.team,
                        row.match_number,
                        row.partner
                    );
                }
            }

            for category in ActionCategory::ALL {
                totals[(i, category.index())] += *row.alliance_counts.get(category) as f64;
            }
        }

        Self {
            event_code: event_code.to_owned(),
            teams,
            incidence,
            totals,
        }
    }

    /// Least-norm solution, one row per team and one column per category.
    pub fn solve(&self, config: &Config) -> Result<DMatrix<f64>, Error> {
        let solver_error = |reason| Error::Solver {
            event_code: self.event_code.clone(),
            reason,
        };

        if self.teams.is_empty() {
            return Ok(DMatrix::zeros(0, ActionCategory::ALL.len()));
        }

        let svd = self.incidence.clone().svd(true, true);
        let cutoff = svd.singular_values.max() * config.pinv_rcond;
        let pinv = svd.pseudo_inverse(cutoff).map_err(solver_error)?;

        let solution = pinv * &self.totals;
        if solution.iter().any(|v| !v.is_finite()) {
            return Err(solver_error("non-finite contribution"));
        }
        Ok(solution)
    }
}

/// Solves one event. Output rows are sorted by team.
#[tracing::instrument(skip(records, config))]
pub fn solve_event(
    event_code: &str,
    records: &[TeamMatchRecord],
    config: &Config,
) -> Result<Vec<TeamEventOpr>, Error> {
    let system = EventSystem::build(event_code, records);
    let solution = system.solve(config)?;

    tracing::debug!("Solved OPR for {} teams", system.teams.len());

    Ok(system
        .teams
        .iter()
        .enumerate()
        .map(|(i, team)| TeamEventOpr {
            event_code: event_code.to_owned(),
            team: *team,
            contribution: ActionRates::from_fn(|c| solution[(i, c.index())]),
        })
        .collect())
}

/// Solves every event independently, ordered by event then team.
pub fn solve_all(records: &[TeamMatchRecord], config: &Config) -> Result<Vec<TeamEventOpr>, Error> {
    let events: BTreeSet<&str> = records
        .iter()
        .filter(|r| r.stage == Stage::Qualification)
        .map(|r| r.event_code.as_str())
        .collect();

    let mut oprs = Vec::new();
    for event_code in events {
        oprs.extend(solve_event(event_code, records, config)?);
    }
    Ok(oprs)
}
