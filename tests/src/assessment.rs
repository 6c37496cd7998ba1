//! Risk Assessment Tests
//!
//! Exercises the assessment pipeline the profile coordinator composes
//! from the pure core: derived metrics, BMI classification, and the
//! per-factor breakdown returned to the dashboard.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use risk_core::{
    evaluate, score_breakdown, ActivityLevel, AlcoholConsumption, BmiClass, FamilyHistory,
    HealthProfile, RiskCategory, SmokingStatus, MAX_RISK_SCORE,
};

/// Draw a profile uniformly from the validated input domain
pub fn random_profile(rng: &mut StdRng) -> HealthProfile {
    HealthProfile {
        age: rng.gen_range(1..=120),
        height_cm: rng.gen_range(100.0..=250.0),
        weight_kg: rng.gen_range(20.0..=300.0),
        smoking: match rng.gen_range(0..3) {
            0 => SmokingStatus::Never,
            1 => SmokingStatus::Former,
            _ => SmokingStatus::Current,
        },
        alcohol: match rng.gen_range(0..3) {
            0 => AlcoholConsumption::None,
            1 => AlcoholConsumption::Moderate,
            _ => AlcoholConsumption::Heavy,
        },
        activity: match rng.gen_range(0..3) {
            0 => ActivityLevel::Sedentary,
            1 => ActivityLevel::Moderate,
            _ => ActivityLevel::Active,
        },
        has_hypertension: rng.gen(),
        has_diabetes: rng.gen(),
        has_high_blood_pressure: rng.gen(),
        family_history: FamilyHistory {
            heart_disease: rng.gen(),
            diabetes: rng.gen(),
            hypertension: rng.gen(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assessment_pieces_agree() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..500 {
            let profile = random_profile(&mut rng);
            let metrics = evaluate(&profile);
            let breakdown = score_breakdown(&profile);

            // The dashboard renders metrics and breakdown side by side;
            // they must come from the same computation
            assert_eq!(metrics.risk_score, breakdown.score);
            assert!(metrics.risk_score <= MAX_RISK_SCORE);
            assert!(profile.validate().is_ok());

            let sum: u32 = breakdown.contributions.iter().map(|c| c.points as u32).sum();
            assert_eq!(sum, breakdown.raw_total);
        }
    }

    #[test]
    fn test_bmi_class_consistent_with_metrics() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let profile = random_profile(&mut rng);
            let metrics = evaluate(&profile);
            let class = BmiClass::from_bmi(metrics.bmi);

            match class {
                BmiClass::Underweight => assert!(metrics.bmi < 18.5),
                BmiClass::Normal => assert!(metrics.bmi >= 18.5 && metrics.bmi < 25.0),
                BmiClass::Overweight => assert!(metrics.bmi >= 25.0 && metrics.bmi < 30.0),
                BmiClass::Obese => assert!(metrics.bmi >= 30.0),
            }
        }
    }

    #[test]
    fn test_dashboard_reference_assessment() {
        // The fixture the profile form displays during onboarding
        let profile = HealthProfile {
            age: 52,
            height_cm: 170.0,
            weight_kg: 70.0,
            smoking: SmokingStatus::Former,
            alcohol: AlcoholConsumption::Moderate,
            activity: ActivityLevel::Moderate,
            has_hypertension: false,
            has_diabetes: false,
            has_high_blood_pressure: false,
            family_history: FamilyHistory::default(),
        };

        let metrics = evaluate(&profile);
        assert_eq!(metrics.bmi, 24.2);
        assert_eq!(metrics.risk_score, 35);
        assert_eq!(metrics.risk_category, RiskCategory::Medium);
        assert_eq!(BmiClass::from_bmi(metrics.bmi), BmiClass::Normal);

        let breakdown = score_breakdown(&profile);
        // Age band, former smoker, moderate alcohol, moderate activity
        assert_eq!(breakdown.contributions.len(), 4);
    }

    #[test]
    fn test_breakdown_empty_for_healthy_profile() {
        let profile = HealthProfile {
            age: 25,
            height_cm: 170.0,
            weight_kg: 63.6,
            smoking: SmokingStatus::Never,
            alcohol: AlcoholConsumption::None,
            activity: ActivityLevel::Active,
            has_hypertension: false,
            has_diabetes: false,
            has_high_blood_pressure: false,
            family_history: FamilyHistory::default(),
        };

        let breakdown = score_breakdown(&profile);
        assert!(breakdown.contributions.is_empty());
        assert_eq!(breakdown.raw_total, 0);
        assert_eq!(breakdown.score, 0);
        assert_eq!(evaluate(&profile).risk_category, RiskCategory::Low);
    }

    #[test]
    fn test_breakdown_serializes_for_display() {
        let mut rng = StdRng::seed_from_u64(99);
        let profile = random_profile(&mut rng);
        let breakdown = score_breakdown(&profile);

        let json = serde_json::to_string(&breakdown).unwrap();
        let back: risk_core::RiskBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(back, breakdown);
    }
}
