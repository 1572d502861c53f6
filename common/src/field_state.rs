/// Robot position at the end of the autonomous period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AutoFieldState {
    None,
    ObservationZone,
    Ascent,
}

/// Robot position at the end of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum EndgameFieldState {
    #[serde(rename = "NONE")]
    None,
    #[serde(rename = "OBSERVATION_ZONE")]
    ObservationZone,
    #[serde(rename = "ASCENT_1")]
    Ascent1,
    #[serde(rename = "ASCENT_2")]
    Ascent2,
    #[serde(rename = "ASCENT_3")]
    Ascent3,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {period} field state {value:?}")]
pub struct UnknownFieldState {
    pub period: &'static str,
    pub value: String,
}

static AUTO_FIELD_STATES: phf::Map<&'static str, AutoFieldState> = phf::phf_map! {
    "NONE" => AutoFieldState::None,
    "OBSERVATION_ZONE" => AutoFieldState::ObservationZone,
    "ASCENT" => AutoFieldState::Ascent,
};

static ENDGAME_FIELD_STATES: phf::Map<&'static str, EndgameFieldState> = phf::phf_map! {
    "NONE" => EndgameFieldState::None,
    "OBSERVATION_ZONE" => EndgameFieldState::ObservationZone,
    "ASCENT_1" => EndgameFieldState::Ascent1,
    "ASCENT_2" => EndgameFieldState::Ascent2,
    "ASCENT_3" => EndgameFieldState::Ascent3,
};

impl AutoFieldState {
    pub fn parse(value: &str) -> Result<Self, UnknownFieldState> {
        AUTO_FIELD_STATES
            .get(value)
            .copied()
            .ok_or_else(|| UnknownFieldState {
                period: "auto",
                value: value.to_owned(),
            })
    }

    pub fn bonus(&self) -> u32 {
        match self {
            Self::None => 0,
            Self::ObservationZone => 3,
            Self::Ascent => 3,
        }
    }
}

impl EndgameFieldState {
    pub fn parse(value: &str) -> Result<Self, UnknownFieldState> {
        ENDGAME_FIELD_STATES
            .get(value)
            .copied()
            .ok_or_else(|| UnknownFieldState {
                period: "endgame",
                value: value.to_owned(),
            })
    }

    pub fn bonus(&self) -> u32 {
        match self {
            Self::None => 0,
            Self::ObservationZone => 3,
            Self::Ascent1 => 5,
            Self::Ascent2 => 15,
            Self::Ascent3 => 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn endgame_bonus_table() {
        let bonuses: Vec<_> = ["NONE", "OBSERVATION_ZONE", "ASCENT_1", "ASCENT_2", "ASCENT_3"]
            .into_iter()
            .map(|v| EndgameFieldState::parse(v).map(|s| s.bonus()))
            .collect();
        assert_eq!(bonuses, vec![Ok(0), Ok(3), Ok(5), Ok(15), Ok(30)]);
    }

    #[test]
    fn auto_rejects_endgame_values() {
        let err = AutoFieldState::parse("ASCENT_2").unwrap_err();
        assert_eq!(err.period, "auto");
        assert_eq!(err.value, "ASCENT_2");
    }

    #[test]
    fn serde_names_match_provider_values() {
        let encoded = serde_json::to_string(&EndgameFieldState::Ascent2).unwrap();
        assert_eq!(encoded, "\"ASCENT_2\"");
        let decoded: AutoFieldState = serde_json::from_str("\"OBSERVATION_ZONE\"").unwrap();
        assert_eq!(decoded, AutoFieldState::ObservationZone);
    }
}
