//! Additive risk scoring over a health profile.
//!
//! The score is a sum of independent rule contributions clamped to
//! [0, 100]. Banded factors (age, BMI) are expressed as ordered band
//! tables where the first matching band wins; lifestyle factors are
//! exhaustive enum matches; condition and family-history flags award
//! fixed points. Groups never interact, so the sum is order-independent.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::bmi::body_mass_index;
use crate::profile::{ActivityLevel, AlcoholConsumption, HealthProfile, SmokingStatus};

/// Upper bound of the risk score scale.
pub const MAX_RISK_SCORE: u8 = 100;

/// Scores below this are Low risk.
pub const MEDIUM_RISK_THRESHOLD: u8 = 30;

/// Scores at or above this are High risk.
pub const HIGH_RISK_THRESHOLD: u8 = 60;

/// Coarse three-level bucketing of the risk score for display.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskCategory {
    Low,
    Medium,
    High,
}

impl RiskCategory {
    /// Bucket a score using the fixed 30/60 thresholds.
    ///
    /// Total over all of `u8`; no profile field other than the score
    /// itself influences the category.
    pub fn from_score(score: u8) -> Self {
        if score < MEDIUM_RISK_THRESHOLD {
            RiskCategory::Low
        } else if score < HIGH_RISK_THRESHOLD {
            RiskCategory::Medium
        } else {
            RiskCategory::High
        }
    }
}

/// A factor group that can contribute points to the score.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskFactor {
    #[display(fmt = "age")]
    Age,
    #[display(fmt = "body mass index")]
    BodyMass,
    #[display(fmt = "smoking")]
    Smoking,
    #[display(fmt = "alcohol consumption")]
    Alcohol,
    #[display(fmt = "physical activity")]
    Activity,
    #[display(fmt = "hypertension")]
    Hypertension,
    #[display(fmt = "diabetes")]
    Diabetes,
    #[display(fmt = "high blood pressure")]
    HighBloodPressure,
    #[display(fmt = "family history of heart disease")]
    FamilyHeartDisease,
    #[display(fmt = "family history of diabetes")]
    FamilyDiabetes,
    #[display(fmt = "family history of hypertension")]
    FamilyHypertension,
}

/// One factor group's contribution to the total.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorContribution {
    pub factor: RiskFactor,
    pub points: u8,
}

/// Per-factor breakdown of a risk evaluation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskBreakdown {
    /// Factors that contributed points, in rule-table order.
    pub contributions: Vec<FactorContribution>,
    /// Sum of all contributions before clamping.
    pub raw_total: u32,
    /// `raw_total` clamped to [0, 100].
    pub score: u8,
}

/// Derived metrics for one profile, recomputed on every change and
/// never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// BMI rounded to one decimal place.
    pub bmi: f64,
    pub risk_score: u8,
    pub risk_category: RiskCategory,
}

/// One half-bounded range check in a band table.
///
/// Bands are evaluated in declaration order and the first match wins,
/// so a table of `Above` bands with descending floors partitions the
/// axis into mutually exclusive ranges.
#[derive(Clone, Copy, Debug)]
enum Band {
    Above(f64),
    AtLeast(f64),
    Below(f64),
}

impl Band {
    fn matches(&self, value: f64) -> bool {
        match self {
            Band::Above(floor) => value > *floor,
            Band::AtLeast(floor) => value >= *floor,
            Band::Below(ceiling) => value < *ceiling,
        }
    }
}

/// Age bands: >65 years, (45, 65], (35, 45].
const AGE_BANDS: [(Band, u8); 3] = [
    (Band::Above(65.0), 20),
    (Band::Above(45.0), 15),
    (Band::Above(35.0), 10),
];

/// BMI bands: obese, overweight, underweight. The normal range [18.5, 25)
/// falls through with zero points.
const BMI_BANDS: [(Band, u8); 3] = [
    (Band::AtLeast(30.0), 25),
    (Band::AtLeast(25.0), 15),
    (Band::Below(18.5), 10),
];

fn band_points(bands: &[(Band, u8)], value: f64) -> u8 {
    bands
        .iter()
        .find(|(band, _)| band.matches(value))
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

fn smoking_points(status: SmokingStatus) -> u8 {
    match status {
        SmokingStatus::Current => 20,
        SmokingStatus::Former => 10,
        SmokingStatus::Never => 0,
    }
}

fn alcohol_points(level: AlcoholConsumption) -> u8 {
    match level {
        AlcoholConsumption::Heavy => 15,
        AlcoholConsumption::Moderate => 5,
        AlcoholConsumption::None => 0,
    }
}

fn activity_points(level: ActivityLevel) -> u8 {
    match level {
        ActivityLevel::Sedentary => 15,
        ActivityLevel::Moderate => 5,
        ActivityLevel::Active => 0,
    }
}

fn flag_points(flag: bool, points: u8) -> u8 {
    if flag {
        points
    } else {
        0
    }
}

/// Evaluate every factor group and report the per-factor contributions
/// alongside the raw and clamped totals.
pub fn score_breakdown(profile: &HealthProfile) -> RiskBreakdown {
    let bmi = body_mass_index(profile.height_cm, profile.weight_kg);

    let groups = [
        (RiskFactor::Age, band_points(&AGE_BANDS, profile.age as f64)),
        (RiskFactor::BodyMass, band_points(&BMI_BANDS, bmi)),
        (RiskFactor::Smoking, smoking_points(profile.smoking)),
        (RiskFactor::Alcohol, alcohol_points(profile.alcohol)),
        (RiskFactor::Activity, activity_points(profile.activity)),
        (RiskFactor::Hypertension, flag_points(profile.has_hypertension, 20)),
        (RiskFactor::Diabetes, flag_points(profile.has_diabetes, 25)),
        (
            RiskFactor::HighBloodPressure,
            flag_points(profile.has_high_blood_pressure, 15),
        ),
        (
            RiskFactor::FamilyHeartDisease,
            flag_points(profile.family_history.heart_disease, 8),
        ),
        (
            RiskFactor::FamilyDiabetes,
            flag_points(profile.family_history.diabetes, 10),
        ),
        (
            RiskFactor::FamilyHypertension,
            flag_points(profile.family_history.hypertension, 8),
        ),
    ];

    let contributions: Vec<FactorContribution> = groups
        .iter()
        .filter(|(_, points)| *points > 0)
        .map(|(factor, points)| FactorContribution {
            factor: *factor,
            points: *points,
        })
        .collect();

    let raw_total: u32 = contributions.iter().map(|c| c.points as u32).sum();
    let score = raw_total.min(MAX_RISK_SCORE as u32) as u8;

    RiskBreakdown {
        contributions,
        raw_total,
        score,
    }
}

/// Map a profile to its derived metrics.
///
/// Total and deterministic over the validated input domain; the same
/// profile always yields the same output.
pub fn evaluate(profile: &HealthProfile) -> DerivedMetrics {
    let bmi = body_mass_index(profile.height_cm, profile.weight_kg);
    let breakdown = score_breakdown(profile);

    DerivedMetrics {
        bmi,
        risk_score: breakdown.score,
        risk_category: RiskCategory::from_score(breakdown.score),
    }
}
