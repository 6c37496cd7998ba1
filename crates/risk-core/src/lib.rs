//! Risk Core - profile-derived health metrics
//!
//! Pure Rust implementation of the health risk calculator consumed by
//! the profile and dashboard surfaces: BMI, an additive 0-100 risk
//! score with a per-factor breakdown, and the coarse three-level risk
//! category derived from the score.
//!
//! The crate performs no I/O, reads no clock, and uses no randomness,
//! so it is WASM-safe and can be embedded directly in zomes.
//!
//! # Example
//!
//! ```rust
//! use risk_core::{
//!     evaluate, ActivityLevel, AlcoholConsumption, FamilyHistory,
//!     HealthProfile, RiskCategory, SmokingStatus,
//! };
//!
//! let profile = HealthProfile {
//!     age: 52,
//!     height_cm: 170.0,
//!     weight_kg: 70.0,
//!     smoking: SmokingStatus::Former,
//!     alcohol: AlcoholConsumption::Moderate,
//!     activity: ActivityLevel::Moderate,
//!     has_hypertension: false,
//!     has_diabetes: false,
//!     has_high_blood_pressure: false,
//!     family_history: FamilyHistory::default(),
//! };
//!
//! let metrics = evaluate(&profile);
//! assert_eq!(metrics.bmi, 24.2);
//! assert_eq!(metrics.risk_score, 35);
//! assert_eq!(metrics.risk_category, RiskCategory::Medium);
//! ```

pub mod bmi;
pub mod profile;
pub mod score;

// Re-export commonly used types for convenience
pub use bmi::{body_mass_index, BmiClass};
pub use profile::{
    ActivityLevel, AlcoholConsumption, FamilyHistory, HealthProfile, ProfileError, SmokingStatus,
};
pub use score::{
    evaluate, score_breakdown, DerivedMetrics, FactorContribution, RiskBreakdown, RiskCategory,
    RiskFactor, HIGH_RISK_THRESHOLD, MAX_RISK_SCORE, MEDIUM_RISK_THRESHOLD,
};
