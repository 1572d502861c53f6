//! Rows of every table the pipeline produces.
//!
//! Each row carries its full composite key (event, team and, where relevant,
//! stage, match number and role); row order never encodes identity.

use crate::{
    ActionCounts, ActionRates, AutoFieldState, EndgameFieldState, Stage, Station,
    TeamNumber,
};

/// One team's view of one match, with the alliance's shared raw counts.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TeamMatchRecord {
    pub event_code: String,
    pub stage: Stage,
    pub match_number: u32,
    pub team: TeamNumber,
    pub station: Station,
    pub partner: TeamNumber,
    pub win: bool,
    pub auto_state: AutoFieldState,
    pub endgame_state: EndgameFieldState,
    /// Counts of the whole alliance, identical for both teammates.
    pub alliance_counts: ActionCounts,
}


#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TeamEventOpr {
    pub event_code: String,
    pub team: TeamNumber,
    pub contribution: ActionRates,
}

/// Non-penalty points of one team in one match, with the spread of that
/// value over the team's matches in the same event and stage.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScoredMatch {
    pub event_code: String,
    pub stage: Stage,
    pub match_number: u32,
    pub team: TeamNumber,
    pub win: bool,
    pub auto_bonus: u32,
    pub endgame_bonus: u32,
    pub np_points: i64,
    pub np_points_std: f64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EventAggregate {
    pub event_code: String,
    pub team: TeamNumber,
    pub stage: Stage,
    pub match_count: u32,
    pub auto_bonus_total: u32,
    pub endgame_bonus_total: u32,
    pub wins: u32,
    pub np_points_std: f64,
}

/// What a robot did in a match after disaggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Bucket,
    Specimen,
}

/// How an alliance's scoring was divided between its two robots.
///
/// "First" and "second" are the teammates on station 1 and station 2 of the
/// alliance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hypothesis {
    /// First robot scored baskets, second robot scored specimens.
    BucketSpecimen,
    /// First robot scored specimens, second robot scored baskets.
    SpecimenBucket,
    /// Both robots scored baskets.
    JointBucket,
    /// Both robots scored specimens.
    JointSpecimen,
}

impl Hypothesis {
    pub const ALL: [Hypothesis; 4] = [
        Self::BucketSpecimen,
        Self::SpecimenBucket,
        Self::JointBucket,
        Self::JointSpecimen,
    ];

    /// Roles of the (first, second) teammate.
    pub fn roles(&self) -> (Role, Role) {
        match self {
            Self::BucketSpecimen => (Role::Bucket, Role::Specimen),
            Self::SpecimenBucket => (Role::Specimen, Role::Bucket),
            Self::JointBucket => (Role::Bucket, Role::Bucket),
            Self::JointSpecimen => (Role::Specimen, Role::Specimen),
        }
    }
}

/// Weighted point categories of a single robot's match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CompositeScores {
    pub auto: i64,
    pub endgame: i64,
    pub fouls: i64,
    pub bucket: i64,
    pub specimen: i64,
    pub points: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DisaggregatedMatchRecord {
    pub event_code: String,
    pub stage: Stage,
    pub match_number: u32,
    pub team: TeamNumber,
    pub station: Station,
    pub partner: TeamNumber,
    pub win: bool,
    pub auto_state: AutoFieldState,
    pub endgame_state: EndgameFieldState,
    pub hypothesis: Hypothesis,
    pub role: Role,
    /// This robot's estimated share of the alliance counts.
    pub counts: ActionCounts,
    pub scores: CompositeScores,
}

/// A scout's correction of the role a team played in one match.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoleOverride {
    pub event_code: String,
    pub stage: Stage,
    pub match_number: u32,
    pub team: TeamNumber,
    pub assignment: Assignment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Assignment {
    /// This team scored baskets, its partner specimens.
    #[serde(rename = "bucket")]
    Bucket,
    /// This team scored specimens, its partner baskets.
    #[serde(rename = "specimen")]
    Specimen,
    #[serde(rename = "2bucket")]
    BothBucket,
    #[serde(rename = "2specimen")]
    BothSpecimen,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TeamEventStats {
    pub team: TeamNumber,
    pub event_code: String,
    pub role: Role,
    pub match_count: u32,
    pub wins: u32,
    pub auto_bonus_total: u32,
    pub endgame_bonus_total: u32,
    pub counts: ActionCounts,
    pub totals: CompositeScores,
    pub bucket_std: f64,
    pub specimen_std: f64,
    pub points_std: f64,
    pub bucket_max: i64,
    pub specimen_max: i64,
    pub points_max: i64,
    /// Sum of squared deviations of points from the group mean.
    pub points_sum_of_squares: f64,
}

/// A role partition of one team, combined over all its events.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RoleSeasonStats {
    pub match_count: u32,
    pub wins: u32,
    pub totals: CompositeScores,
    pub bucket_max: i64,
    pub specimen_max: i64,
    pub points_max: i64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TeamSeasonStats {
    pub team: TeamNumber,
    pub event_count: u32,
    pub match_count: u32,
    pub bucket: RoleSeasonStats,
    pub specimen: RoleSeasonStats,
    /// Pooled standard deviation of points over every event and role group.
    pub points_std: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Experience {
    Qualifier,
    Scrimmage,
    None,
}

/// OPR-derived scouting ratings, in points per match.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Ratings {
    pub bucket: f64,
    pub specimen: f64,
    pub auto_bucket: f64,
    pub auto_specimen: f64,
    /// Average auto and endgame field state bonus.
    pub end_of_round: f64,
    /// Expected foul points, negative.
    pub foul: f64,
    pub bucket_plus: f64,
    pub specimen_plus: f64,
    /// Spread of non-penalty points.
    pub spread: f64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TeamEventRating {
    pub event_code: String,
    pub team: TeamNumber,
    pub ratings: Ratings,
}

/// Scouting summary of a team over every event it played.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TeamReport {
    pub team: TeamNumber,
    pub experience: Experience,
    pub event_count: u32,
    /// Absent for teams without any qualification data.
    pub ratings: Option<Ratings>,
}

/// Every table of one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tables {
    pub matches: Vec<TeamMatchRecord>,
    pub oprs: Vec<TeamEventOpr>,
    pub scored_matches: Vec<ScoredMatch>,
    pub event_aggregates: Vec<EventAggregate>,
    pub disaggregated: Vec<DisaggregatedMatchRecord>,
    pub team_event_stats: Vec<TeamEventStats>,
    pub team_season_stats: Vec<TeamSeasonStats>,
    pub event_ratings: Vec<TeamEventRating>,
    pub team_reports: Vec<TeamReport>,
}
