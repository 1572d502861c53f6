//! Point values of the game's scoring actions.

use common::tables::CompositeScores;
use common::{ActionCategory, ActionCounts, Actions, AutoFieldState, EndgameFieldState};

pub const AUTO_BUCKET: [ActionCategory; 3] = [
    ActionCategory::AutoNet,
    ActionCategory::AutoSampleLow,
    ActionCategory::AutoSampleHigh,
];

pub const AUTO_SPECIMEN: [ActionCategory; 2] = [
    ActionCategory::AutoSpecimenLow,
    ActionCategory::AutoSpecimenHigh,
];

pub const TELEOP_BUCKET: [ActionCategory; 3] = [
    ActionCategory::TeleopNet,
    ActionCategory::TeleopSampleLow,
    ActionCategory::TeleopSampleHigh,
];

pub const TELEOP_SPECIMEN: [ActionCategory; 2] = [
    ActionCategory::TeleopSpecimenLow,
    ActionCategory::TeleopSpecimenHigh,
];

/// Every category except the fouls.
pub const SCORING: [ActionCategory; 10] = [
    ActionCategory::AutoNet,
    ActionCategory::AutoSampleLow,
    ActionCategory::AutoSampleHigh,
    ActionCategory::AutoSpecimenLow,
    ActionCategory::AutoSpecimenHigh,
    ActionCategory::TeleopNet,
    ActionCategory::TeleopSampleLow,
    ActionCategory::TeleopSampleHigh,
    ActionCategory::TeleopSpecimenLow,
    ActionCategory::TeleopSpecimenHigh,
];

pub fn weight(category: ActionCategory) -> i64 {
    match category {
        ActionCategory::AutoNet | ActionCategory::TeleopNet => 2,
        ActionCategory::AutoSampleLow | ActionCategory::TeleopSampleLow => 4,
        ActionCategory::AutoSampleHigh | ActionCategory::TeleopSampleHigh => 8,
        ActionCategory::AutoSpecimenLow | ActionCategory::TeleopSpecimenLow => 6,
        ActionCategory::AutoSpecimenHigh | ActionCategory::TeleopSpecimenHigh => 10,
        ActionCategory::MinorFouls => -5,
        ActionCategory::MajorFouls => -15,
    }
}

/// Exact weighted sum of counts over `categories`.
pub fn points(counts: &ActionCounts, categories: &[ActionCategory]) -> i64 {
    categories
        .iter()
        .map(|c| *counts.get(*c) as i64 * weight(*c))
        .sum()
}

/// Weighted sum over `categories` for fractional values, e.g. OPR rows.
pub fn weighted<T>(values: &Actions<T>, categories: &[ActionCategory]) -> f64
where
    T: Copy + Into<f64>,
{
    categories
        .iter()
        .map(|c| (*values.get(*c)).into() * weight(*c) as f64)
        .sum()
}

/// Points of an alliance's scoring actions plus this robot's own field state
/// bonuses. Fouls and the partner's bonuses are left out.
pub fn non_penalty_points(
    counts: &ActionCounts,
    auto: AutoFieldState,
    endgame: EndgameFieldState,
) -> i64 {
    points(counts, &SCORING) + auto.bonus() as i64 + endgame.bonus() as i64
}

pub fn composite(
    counts: &ActionCounts,
    auto: AutoFieldState,
    endgame: EndgameFieldState,
) -> CompositeScores {
    let bucket = points(counts, &ActionCategory::BUCKET);
    let specimen = points(counts, &ActionCategory::SPECIMEN);
    let fouls = points(counts, &ActionCategory::FOULS);
    let auto_bonus = auto.bonus() as i64;
    let endgame = endgame.bonus() as i64;

    CompositeScores {
        auto: points(counts, &AUTO_BUCKET) + points(counts, &AUTO_SPECIMEN) + auto_bonus,
        endgame,
        fouls,
        bucket,
        specimen,
        points: bucket + specimen + auto_bonus + endgame + fouls,
    }
}
