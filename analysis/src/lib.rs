//! Scouting statistics over robotics-competition match results.
//!
//! The stages run strictly in order, each one a pure function producing a
//! fresh table from the previous stage's output:
//!
//! 1. [`normalize`] flattens raw schedules and score breakdowns into one row
//!    per team per match.
//! 2. [`opr`] solves the per-event offensive power ratings.
//! 3. [`eventstats`] aggregates non-penalty points per team, event and stage.
//! 4. [`disaggregate`] splits the shared alliance counts between teammates.
//! 5. [`teamstats`] aggregates the split rows per team, event and role, and
//!    pools them into season statistics.
//!
//! [`report`] projects the OPR and event aggregates into scouting ratings.

mod error;
pub use error::Error;

pub mod disaggregate;
pub mod eventstats;
pub mod normalize;
pub mod opr;
pub mod report;
pub mod scoring;
pub mod stats;
pub mod teamstats;

/// Tunables of the pipeline.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// Weight of the opposite category's activity in the residual of a joint
    /// (both robots in one role) hypothesis.
    pub joint_penalty: f64,
    /// Singular values below this fraction of the largest one are treated as
    /// zero by the OPR pseudoinverse.
    pub pinv_rcond: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            joint_penalty: 1.5,
            pinv_rcond: 1e-12,
        }
    }
}
