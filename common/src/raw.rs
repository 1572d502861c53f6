//! Records as delivered by the competition-data provider.
//!
//! Only the fields the statistics pipeline reads are modelled, anything else
//! in the provider documents is ignored on deserialization. Per-alliance
//! fields are optional here so a missing field can be reported with context
//! instead of as a bare decode failure.

use crate::{ActionCategory, ActionCounts, AllianceColor, Stage, Station, TeamNumber};

/// Everything known about one event: its schedule and the detailed score
/// breakdowns for both stages.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    pub event_code: String,
    pub matches: Vec<RawMatch>,
    #[serde(default)]
    pub qualification_scores: Vec<RawMatchScore>,
    #[serde(default)]
    pub playoff_scores: Vec<RawMatchScore>,
}

impl RawEvent {
    pub fn scores(&self) -> impl Iterator<Item = &RawMatchScore> {
        self.qualification_scores
            .iter()
            .chain(self.playoff_scores.iter())
    }
}

/// One scheduled match.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMatch {
    pub match_number: u32,
    #[serde(default)]
    pub series: u32,
    pub tournament_level: Stage,
    pub teams: Vec<RawStationAssignment>,
}

impl RawMatch {
    /// Playoff schedules number their matches by series, in that case the
    /// series supersedes the per-series match number.
    pub fn sequence_number(&self) -> u32 {
        if self.series > 0 {
            self.series
        } else {
            self.match_number
        }
    }

    pub fn team_at(&self, station: Station) -> Option<TeamNumber> {
        self.teams
            .iter()
            .find(|t| t.station == station)
            .map(|t| t.team_number)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStationAssignment {
    pub team_number: TeamNumber,
    pub station: Station,
}

/// Detailed scoring of one match, one entry per alliance.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMatchScore {
    pub match_level: Stage,
    #[serde(default)]
    pub match_series: u32,
    pub match_number: u32,
    pub alliances: Vec<RawAllianceScore>,
}

impl RawMatchScore {
    pub fn sequence_number(&self) -> u32 {
        if self.match_level.is_playoff() && self.match_series > 0 {
            self.match_series
        } else {
            self.match_number
        }
    }

    pub fn alliance(&self, color: AllianceColor) -> Option<&RawAllianceScore> {
        self.alliances.iter().find(|a| a.alliance == color)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAllianceScore {
    pub alliance: AllianceColor,
    pub total_points: Option<i64>,
    pub robot1_auto: Option<String>,
    pub robot2_auto: Option<String>,
    pub robot1_teleop: Option<String>,
    pub robot2_teleop: Option<String>,
    pub auto_sample_net: Option<u32>,
    pub auto_sample_low: Option<u32>,
    pub auto_sample_high: Option<u32>,
    pub auto_specimen_low: Option<u32>,
    pub auto_specimen_high: Option<u32>,
    pub teleop_sample_net: Option<u32>,
    pub teleop_sample_low: Option<u32>,
    pub teleop_sample_high: Option<u32>,
    pub teleop_specimen_low: Option<u32>,
    pub teleop_specimen_high: Option<u32>,
    pub minor_fouls: Option<u32>,
    pub major_fouls: Option<u32>,
}

impl RawAllianceScore {
    pub fn count(&self, category: ActionCategory) -> Option<u32> {
        match category {
            ActionCategory::AutoNet => self.auto_sample_net,
            ActionCategory::AutoSampleLow => self.auto_sample_low,
            ActionCategory::AutoSampleHigh => self.auto_sample_high,
            ActionCategory::AutoSpecimenLow => self.auto_specimen_low,
            ActionCategory::AutoSpecimenHigh => self.auto_specimen_high,
            ActionCategory::TeleopNet => self.teleop_sample_net,
            ActionCategory::TeleopSampleLow => self.teleop_sample_low,
            ActionCategory::TeleopSampleHigh => self.teleop_sample_high,
            ActionCategory::TeleopSpecimenLow => self.teleop_specimen_low,
            ActionCategory::TeleopSpecimenHigh => self.teleop_specimen_high,
            ActionCategory::MinorFouls => self.minor_fouls,
            ActionCategory::MajorFouls => self.major_fouls,
        }
    }

    /// All twelve counts, or the provider name of the first missing field.
    pub fn counts(&self) -> Result<ActionCounts, &'static str> {
        ActionCounts::try_from_fn(|category| {
            self.count(category).ok_or(category.field_name())
        })
    }

    /// Auto field state of robot 1 or 2, still as the provider string.
    pub fn robot_auto(&self, robot: u8) -> Option<&str> {
        match robot {
            1 => self.robot1_auto.as_deref(),
            _ => self.robot2_auto.as_deref(),
        }
    }

    pub fn robot_teleop(&self, robot: u8) -> Option<&str> {
        match robot {
            1 => self.robot1_teleop.as_deref(),
            _ => self.robot2_teleop.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn playoff_series_supersedes_match_number() {
        let scheduled = RawMatch {
            match_number: 2,
            series: 5,
            tournament_level: Stage::Playoff,
            teams: Vec::new(),
        };
        assert_eq!(scheduled.sequence_number(), 5);

        let score = RawMatchScore {
            match_level: Stage::Playoff,
            match_series: 5,
            match_number: 2,
            alliances: Vec::new(),
        };
        assert_eq!(score.sequence_number(), 5);
    }

    #[test]
    fn qualification_keeps_match_number() {
        let score = RawMatchScore {
            match_level: Stage::Qualification,
            match_series: 0,
            match_number: 12,
            alliances: Vec::new(),
        };
        assert_eq!(score.sequence_number(), 12);
    }

    #[test]
    fn missing_count_names_the_field() {
        let score = RawAllianceScore {
            auto_sample_net: Some(1),
            auto_sample_low: Some(0),
            ..Default::default()
        };
        assert_eq!(score.counts(), Err("autoSampleHigh"));
    }

    #[test]
    fn decodes_provider_document() {
        let doc = r#"{
            "alliance": "Blue",
            "totalPoints": 101,
            "robot1Auto": "ASCENT",
            "robot2Auto": "NONE",
            "robot1Teleop": "ASCENT_2",
            "robot2Teleop": "OBSERVATION_ZONE",
            "autoSampleNet": 1, "autoSampleLow": 0, "autoSampleHigh": 2,
            "autoSpecimenLow": 0, "autoSpecimenHigh": 1,
            "teleopSampleNet": 3, "teleopSampleLow": 0, "teleopSampleHigh": 4,
            "teleopSpecimenLow": 0, "teleopSpecimenHigh": 2,
            "minorFouls": 1, "majorFouls": 0,
            "randomization": 7
        }"#;
        let score: RawAllianceScore = serde_json::from_str(doc).unwrap();
        assert_eq!(score.alliance, AllianceColor::Blue);
        assert_eq!(score.robot_teleop(1), Some("ASCENT_2"));
        assert_eq!(score.counts().map(|c| c.teleop_sample_high), Ok(4));
    }
}
