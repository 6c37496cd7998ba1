//! Health and lifestyle profile input model.
//!
//! A [`HealthProfile`] is the fully-populated record a presentation surface
//! (profile form, dashboard) hands to the evaluator. The form layer owns
//! input validation; [`HealthProfile::validate`] is the boundary check it
//! and the zome layer run before a profile is stored or evaluated.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Accepted age range in years.
pub const MIN_AGE_YEARS: u8 = 1;
pub const MAX_AGE_YEARS: u8 = 120;

/// Accepted height range in centimeters.
pub const MIN_HEIGHT_CM: f64 = 100.0;
pub const MAX_HEIGHT_CM: f64 = 250.0;

/// Accepted weight range in kilograms.
pub const MIN_WEIGHT_KG: f64 = 20.0;
pub const MAX_WEIGHT_KG: f64 = 300.0;

/// Self-reported smoking history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SmokingStatus {
    Never,
    Former,
    Current,
}

/// Self-reported alcohol consumption level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlcoholConsumption {
    None,
    Moderate,
    Heavy,
}

/// Self-reported physical activity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    Sedentary,
    Moderate,
    Active,
}

/// First-degree family history flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyHistory {
    pub heart_disease: bool,
    pub diabetes: bool,
    pub hypertension: bool,
}

/// A user's health and lifestyle profile, immutable per evaluation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthProfile {
    /// Age in whole years.
    pub age: u8,
    /// Height in centimeters.
    pub height_cm: f64,
    /// Weight in kilograms.
    pub weight_kg: f64,
    pub smoking: SmokingStatus,
    pub alcohol: AlcoholConsumption,
    pub activity: ActivityLevel,
    /// Diagnosed hypertension.
    pub has_hypertension: bool,
    /// Diagnosed diabetes.
    pub has_diabetes: bool,
    /// Elevated blood pressure reading without a hypertension diagnosis.
    pub has_high_blood_pressure: bool,
    pub family_history: FamilyHistory,
}

/// A profile field outside its accepted domain.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ProfileError {
    #[error("age {0} outside accepted range 1-120 years")]
    AgeOutOfRange(u8),
    #[error("height {0} cm outside accepted range 100-250 cm")]
    HeightOutOfRange(f64),
    #[error("weight {0} kg outside accepted range 20-300 kg")]
    WeightOutOfRange(f64),
    #[error("{0} must be a finite number")]
    NonFinite(&'static str),
}

impl HealthProfile {
    /// Check every numeric field against its accepted domain.
    ///
    /// Evaluation itself never divides by zero or sees a non-finite number
    /// when profiles pass through here first; a degenerate height can only
    /// reach the calculator through an unvalidated path.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if !self.height_cm.is_finite() {
            return Err(ProfileError::NonFinite("height_cm"));
        }
        if !self.weight_kg.is_finite() {
            return Err(ProfileError::NonFinite("weight_kg"));
        }
        if self.age < MIN_AGE_YEARS || self.age > MAX_AGE_YEARS {
            return Err(ProfileError::AgeOutOfRange(self.age));
        }
        if self.height_cm < MIN_HEIGHT_CM || self.height_cm > MAX_HEIGHT_CM {
            return Err(ProfileError::HeightOutOfRange(self.height_cm));
        }
        if self.weight_kg < MIN_WEIGHT_KG || self.weight_kg > MAX_WEIGHT_KG {
            return Err(ProfileError::WeightOutOfRange(self.weight_kg));
        }
        Ok(())
    }
}
