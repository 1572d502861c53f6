use common::{AllianceColor, MatchKey, Station};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{key}: score record has no matching schedule entry")]
    MissingSchedule { key: MatchKey },
    #[error("{key}: more than one schedule entry or score record")]
    DuplicateMatch { key: MatchKey },
    #[error("{key}: no team assigned to station {station:?}")]
    MissingStation { key: MatchKey, station: Station },
    #[error("{key}: no {alliance:?} alliance in the score record")]
    MissingAlliance { key: MatchKey, alliance: AllianceColor },
    #[error("{key}: {alliance:?} alliance score has no `{field}` field")]
    MissingField {
        key: MatchKey,
        alliance: AllianceColor,
        field: &'static str,
    },
    #[error("{key}: {source}")]
    UnknownFieldState {
        key: MatchKey,
        #[source]
        source: common::UnknownFieldState,
    },
    #[error("OPR solve for event {event_code} failed: {reason}")]
    Solver {
        event_code: String,
        reason: &'static str,
    },
}
