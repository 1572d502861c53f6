/// The twelve raw action categories reported per alliance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionCategory {
    AutoNet,
    AutoSampleLow,
    AutoSampleHigh,
    AutoSpecimenLow,
    AutoSpecimenHigh,
    TeleopNet,
    TeleopSampleLow,
    TeleopSampleHigh,
    TeleopSpecimenLow,
    TeleopSpecimenHigh,
    MinorFouls,
    MajorFouls,
}

impl ActionCategory {
    pub const ALL: [ActionCategory; 12] = [
        Self::AutoNet,
        Self::AutoSampleLow,
        Self::AutoSampleHigh,
        Self::AutoSpecimenLow,
        Self::AutoSpecimenHigh,
        Self::TeleopNet,
        Self::TeleopSampleLow,
        Self::TeleopSampleHigh,
        Self::TeleopSpecimenLow,
        Self::TeleopSpecimenHigh,
        Self::MinorFouls,
        Self::MajorFouls,
    ];

    /// Categories scored into the baskets (net zone and both basket tiers).
    pub const BUCKET: [ActionCategory; 6] = [
        Self::AutoNet,
        Self::TeleopNet,
        Self::AutoSampleLow,
        Self::TeleopSampleLow,
        Self::AutoSampleHigh,
        Self::TeleopSampleHigh,
    ];

    /// Categories scored on the submersible chambers.
    pub const SPECIMEN: [ActionCategory; 4] = [
        Self::AutoSpecimenLow,
        Self::TeleopSpecimenLow,
        Self::AutoSpecimenHigh,
        Self::TeleopSpecimenHigh,
    ];

    pub const FOULS: [ActionCategory; 2] = [Self::MinorFouls, Self::MajorFouls];

    /// Position inside [`ActionCategory::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Field name used by the provider's score documents.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::AutoNet => "autoSampleNet",
            Self::AutoSampleLow => "autoSampleLow",
            Self::AutoSampleHigh => "autoSampleHigh",
            Self::AutoSpecimenLow => "autoSpecimenLow",
            Self::AutoSpecimenHigh => "autoSpecimenHigh",
            Self::TeleopNet => "teleopSampleNet",
            Self::TeleopSampleLow => "teleopSampleLow",
            Self::TeleopSampleHigh => "teleopSampleHigh",
            Self::TeleopSpecimenLow => "teleopSpecimenLow",
            Self::TeleopSpecimenHigh => "teleopSpecimenHigh",
            Self::MinorFouls => "minorFouls",
            Self::MajorFouls => "majorFouls",
        }
    }
}

/// One value per [`ActionCategory`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actions<T> {
    pub auto_net: T,
    pub auto_sample_low: T,
    pub auto_sample_high: T,
    pub auto_specimen_low: T,
    pub auto_specimen_high: T,
    pub teleop_net: T,
    pub teleop_sample_low: T,
    pub teleop_sample_high: T,
    pub teleop_specimen_low: T,
    pub teleop_specimen_high: T,
    pub minor_fouls: T,
    pub major_fouls: T,
}

/// Raw action counts, as reported or as split between teammates.
pub type ActionCounts = Actions<u32>;

/// Estimated per-robot contribution per category.
pub type ActionRates = Actions<f64>;

impl<T> Actions<T> {
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(ActionCategory) -> T,
    {
        Self {
            auto_net: f(ActionCategory::AutoNet),
            auto_sample_low: f(ActionCategory::AutoSampleLow),
            auto_sample_high: f(ActionCategory::AutoSampleHigh),
            auto_specimen_low: f(ActionCategory::AutoSpecimenLow),
            auto_specimen_high: f(ActionCategory::AutoSpecimenHigh),
            teleop_net: f(ActionCategory::TeleopNet),
            teleop_sample_low: f(ActionCategory::TeleopSampleLow),
            teleop_sample_high: f(ActionCategory::TeleopSampleHigh),
            teleop_specimen_low: f(ActionCategory::TeleopSpecimenLow),
            teleop_specimen_high: f(ActionCategory::TeleopSpecimenHigh),
            minor_fouls: f(ActionCategory::MinorFouls),
            major_fouls: f(ActionCategory::MajorFouls),
        }
    }

    pub fn try_from_fn<F, E>(mut f: F) -> Result<Self, E>
    where
        F: FnMut(ActionCategory) -> Result<T, E>,
    {
        Ok(Self {
            auto_net: f(ActionCategory::AutoNet)?,
            auto_sample_low: f(ActionCategory::AutoSampleLow)?,
            auto_sample_high: f(ActionCategory::AutoSampleHigh)?,
            auto_specimen_low: f(ActionCategory::AutoSpecimenLow)?,
            auto_specimen_high: f(ActionCategory::AutoSpecimenHigh)?,
            teleop_net: f(ActionCategory::TeleopNet)?,
            teleop_sample_low: f(ActionCategory::TeleopSampleLow)?,
            teleop_sample_high: f(ActionCategory::TeleopSampleHigh)?,
            teleop_specimen_low: f(ActionCategory::TeleopSpecimenLow)?,
            teleop_specimen_high: f(ActionCategory::TeleopSpecimenHigh)?,
            minor_fouls: f(ActionCategory::MinorFouls)?,
            major_fouls: f(ActionCategory::MajorFouls)?,
        })
    }

    pub fn get(&self, category: ActionCategory) -> &T {
        match category {
            ActionCategory::AutoNet => &self.auto_net,
            ActionCategory::AutoSampleLow => &self.auto_sample_low,
            ActionCategory::AutoSampleHigh => &self.auto_sample_high,
            ActionCategory::AutoSpecimenLow => &self.auto_specimen_low,
            ActionCategory::AutoSpecimenHigh => &self.auto_specimen_high,
            ActionCategory::TeleopNet => &self.teleop_net,
            ActionCategory::TeleopSampleLow => &self.teleop_sample_low,
            ActionCategory::TeleopSampleHigh => &self.teleop_sample_high,
            ActionCategory::TeleopSpecimenLow => &self.teleop_specimen_low,
            ActionCategory::TeleopSpecimenHigh => &self.teleop_specimen_high,
            ActionCategory::MinorFouls => &self.minor_fouls,
            ActionCategory::MajorFouls => &self.major_fouls,
        }
    }

    pub fn get_mut(&mut self, category: ActionCategory) -> &mut T {
        match category {
            ActionCategory::AutoNet => &mut self.auto_net,
            ActionCategory::AutoSampleLow => &mut self.auto_sample_low,
            ActionCategory::AutoSampleHigh => &mut self.auto_sample_high,
            ActionCategory::AutoSpecimenLow => &mut self.auto_specimen_low,
            ActionCategory::AutoSpecimenHigh => &mut self.auto_specimen_high,
            ActionCategory::TeleopNet => &mut self.teleop_net,
            ActionCategory::TeleopSampleLow => &mut self.teleop_sample_low,
            ActionCategory::TeleopSampleHigh => &mut self.teleop_sample_high,
            ActionCategory::TeleopSpecimenLow => &mut self.teleop_specimen_low,
            ActionCategory::TeleopSpecimenHigh => &mut self.teleop_specimen_high,
            ActionCategory::MinorFouls => &mut self.minor_fouls,
            ActionCategory::MajorFouls => &mut self.major_fouls,
        }
    }
}

impl ActionCounts {
    /// Adds every category of `other` onto `self`.
    pub fn accumulate(&mut self, other: &ActionCounts) {
        for category in ActionCategory::ALL {
            *self.get_mut(category) += *other.get(category);
        }
    }
}
