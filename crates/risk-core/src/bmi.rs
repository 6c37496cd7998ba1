//! Body mass index computation and display classification.

use serde::{Deserialize, Serialize};

/// Body mass index from height in centimeters and weight in kilograms,
/// rounded to one decimal place.
pub fn body_mass_index(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    let raw = weight_kg / (height_m * height_m);
    (raw * 10.0).round() / 10.0
}

/// WHO-style BMI bucket, display only - not an input to the risk score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiClass {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiClass {
    /// Classify a BMI value using the standard thresholds.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiClass::Underweight
        } else if bmi < 25.0 {
            BmiClass::Normal
        } else if bmi < 30.0 {
            BmiClass::Overweight
        } else {
            BmiClass::Obese
        }
    }

    /// Human-readable label for the profile and dashboard surfaces.
    pub fn label(&self) -> &'static str {
        match self {
            BmiClass::Underweight => "Underweight",
            BmiClass::Normal => "Normal weight",
            BmiClass::Overweight => "Overweight",
            BmiClass::Obese => "Obese",
        }
    }
}
