//! Tiered treatment-suggestion text
//!
//! Static suggestion strings selected by risk tier plus a handful of
//! history-conditional additions. Like the rest of the crate this is
//! simulated display content, not clinical guidance.

use crate::{HistoryItem, PatientInput};
use serde::{Deserialize, Serialize};

/// Risk above which the high tier applies
const HIGH_TIER_THRESHOLD: f64 = 20.0;

/// Risk above which the intermediate tier applies
const INTERMEDIATE_TIER_THRESHOLD: f64 = 10.0;

/// Tier a computed risk places the patient in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    /// Risk > 20%, or any previous cardiac event on record
    High,
    /// Risk > 10%
    Intermediate,
    /// Everything else
    Low,
}

impl RiskTier {
    /// Classify by computed risk and history.
    ///
    /// A previous cardiac event forces the high tier regardless of the
    /// numeric score.
    pub fn classify(risk_percent: f64, prior_cardiac_event: bool) -> Self {
        if risk_percent > HIGH_TIER_THRESHOLD || prior_cardiac_event {
            RiskTier::High
        } else if risk_percent > INTERMEDIATE_TIER_THRESHOLD {
            RiskTier::Intermediate
        } else {
            RiskTier::Low
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::High => "High",
            RiskTier::Intermediate => "Intermediate",
            RiskTier::Low => "Low",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            RiskTier::High => "High simulated risk - aggressive management suggested",
            RiskTier::Intermediate => "Intermediate simulated risk - moderate management suggested",
            RiskTier::Low => "Low simulated risk - preventive focus suggested",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Build the medication and procedure suggestion lists for a tier
pub(crate) fn recommend(tier: RiskTier, input: &PatientInput) -> (Vec<String>, Vec<String>) {
    let hypertension = input.has_history(HistoryItem::Hypertension);
    let diabetes = input.has_history(HistoryItem::Diabetes);

    let (mut medications, procedures): (Vec<String>, Vec<String>) = match tier {
        RiskTier::High => {
            let mut meds = vec![
                "High-Intensity Statins".to_string(),
                "Dual Antiplatelet Therapy".to_string(),
            ];
            if hypertension {
                meds.push("ACE Inhibitors or ARBs".to_string());
            }
            if diabetes {
                meds.push("SGLT2 Inhibitors or GLP-1 Agonists".to_string());
            }
            (
                meds,
                vec![
                    "Coronary Angiography ± PCI".to_string(),
                    "CABG Evaluation".to_string(),
                ],
            )
        }
        RiskTier::Intermediate => {
            let mut meds = vec![
                "Moderate-Intensity Statins".to_string(),
                "Aspirin 81mg".to_string(),
            ];
            if hypertension {
                meds.push("ACE Inhibitors or ARBs".to_string());
            }
            if diabetes {
                meds.push("Metformin or SGLT2 Inhibitors".to_string());
            }
            (
                meds,
                vec![
                    "Consider Coronary Calcium Score".to_string(),
                    "Consider Stress Test".to_string(),
                ],
            )
        }
        RiskTier::Low => {
            let mut meds = vec![
                "Lifestyle Modifications".to_string(),
                "Consider Low-Dose Aspirin".to_string(),
            ];
            if hypertension {
                meds.push("Continue Blood Pressure Medications".to_string());
            }
            (
                meds,
                vec![
                    "Routine Follow-up".to_string(),
                    "Preventive Screening".to_string(),
                ],
            )
        }
    };

    // Appended at every tier
    if input.has_history(HistoryItem::Smoking) {
        medications.push("Smoking Cessation Counseling/Therapy".to_string());
    }

    (medications, procedures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sex;

    fn input_with_history(history: Vec<HistoryItem>) -> PatientInput {
        PatientInput {
            age: Some(55),
            sex: Some(Sex::Male),
            medical_history: history,
            ..Default::default()
        }
    }

    #[test]
    fn test_classify_thresholds() {
        assert_eq!(RiskTier::classify(25.0, false), RiskTier::High);
        assert_eq!(RiskTier::classify(20.0, false), RiskTier::Intermediate);
        assert_eq!(RiskTier::classify(15.0, false), RiskTier::Intermediate);
        assert_eq!(RiskTier::classify(10.0, false), RiskTier::Low);
        assert_eq!(RiskTier::classify(5.0, false), RiskTier::Low);
    }

    #[test]
    fn test_prior_event_forces_high_tier() {
        assert_eq!(RiskTier::classify(6.0, true), RiskTier::High);
    }

    #[test]
    fn test_high_tier_lists() {
        let input = input_with_history(vec![
            HistoryItem::PreviousCardiacEvent,
            HistoryItem::Hypertension,
            HistoryItem::Diabetes,
        ]);
        let (meds, procedures) = recommend(RiskTier::High, &input);
        assert_eq!(
            meds,
            vec![
                "High-Intensity Statins",
                "Dual Antiplatelet Therapy",
                "ACE Inhibitors or ARBs",
                "SGLT2 Inhibitors or GLP-1 Agonists",
            ]
        );
        assert_eq!(
            procedures,
            vec!["Coronary Angiography ± PCI", "CABG Evaluation"]
        );
    }

    #[test]
    fn test_intermediate_tier_lists() {
        let input = input_with_history(vec![HistoryItem::Diabetes]);
        let (meds, procedures) = recommend(RiskTier::Intermediate, &input);
        assert_eq!(
            meds,
            vec![
                "Moderate-Intensity Statins",
                "Aspirin 81mg",
                "Metformin or SGLT2 Inhibitors",
            ]
        );
        assert_eq!(
            procedures,
            vec!["Consider Coronary Calcium Score", "Consider Stress Test"]
        );
    }

    #[test]
    fn test_low_tier_lists() {
        let input = input_with_history(vec![HistoryItem::Hypertension]);
        let (meds, procedures) = recommend(RiskTier::Low, &input);
        assert_eq!(
            meds,
            vec![
                "Lifestyle Modifications",
                "Consider Low-Dose Aspirin",
                "Continue Blood Pressure Medications",
            ]
        );
        assert_eq!(procedures, vec!["Routine Follow-up", "Preventive Screening"]);
    }

    #[test]
    fn test_smoking_cessation_at_every_tier() {
        let input = input_with_history(vec![HistoryItem::Smoking]);
        for tier in [RiskTier::High, RiskTier::Intermediate, RiskTier::Low] {
            let (meds, _) = recommend(tier, &input);
            assert_eq!(
                meds.last().map(String::as_str),
                Some("Smoking Cessation Counseling/Therapy"),
                "missing cessation entry at {:?}",
                tier
            );
        }
    }
}
