//! MACE Core - Simulated Cardiovascular Risk Estimation
//!
//! Pure Rust implementation of a simulated MACE (Major Adverse Cardiac Event)
//! risk estimator: a deterministic arithmetic heuristic with bounded,
//! seedable randomness. There is no model behind it: the score, the
//! "feature importance" breakdown, and the treatment suggestions are
//! fabricated for display purposes only and must never inform real care.
//!
//! # Features
//!
//! - Heuristic risk percentage, always within [5, 40]
//! - Per-input contribution breakdown normalized to 100%
//! - Tiered medication/procedure suggestion text
//! - Seedable RNG so every output is reproducible in tests
//!
//! # Example
//!
//! ```rust
//! use mace_core::{PatientInput, RiskEstimator, Sex, HistoryItem};
//!
//! let input = PatientInput {
//!     age: Some(65),
//!     sex: Some(Sex::Male),
//!     medical_history: vec![HistoryItem::PreviousCardiacEvent],
//!     ..Default::default()
//! };
//!
//! let estimator = RiskEstimator::seeded(42);
//! let result = estimator.estimate(&input).unwrap();
//!
//! assert!(result.risk_percent > 20.0);
//! assert!(result.medications.iter().any(|m| m == "High-Intensity Statins"));
//! ```

pub mod importance;
pub mod recommendations;
pub mod scoring;
pub mod session;

// Re-export commonly used types for convenience
pub use importance::FeatureContribution;
pub use recommendations::RiskTier;
pub use scoring::{MAX_RISK_PERCENT, MIN_RISK_PERCENT};
pub use session::{EstimationSession, SessionError, SessionState};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

/// Patient sex as collected by the intake form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    Other,
}

impl Sex {
    /// All selectable options, in form order
    pub const ALL: [Sex; 3] = [Sex::Male, Sex::Female, Sex::Other];

    /// Form-facing label
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Other => "other",
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Ethnicity checkbox options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ethnicity {
    #[serde(rename = "Asian")]
    Asian,
    #[serde(rename = "Black or African American")]
    BlackOrAfricanAmerican,
    #[serde(rename = "Hispanic or Latino")]
    HispanicOrLatino,
    #[serde(rename = "White")]
    White,
    #[serde(rename = "Other")]
    Other,
}

impl Ethnicity {
    /// All selectable options, in form order
    pub const ALL: [Ethnicity; 5] = [
        Ethnicity::Asian,
        Ethnicity::BlackOrAfricanAmerican,
        Ethnicity::HispanicOrLatino,
        Ethnicity::White,
        Ethnicity::Other,
    ];

    /// Form-facing label
    pub fn label(&self) -> &'static str {
        match self {
            Ethnicity::Asian => "Asian",
            Ethnicity::BlackOrAfricanAmerican => "Black or African American",
            Ethnicity::HispanicOrLatino => "Hispanic or Latino",
            Ethnicity::White => "White",
            Ethnicity::Other => "Other",
        }
    }
}

/// Medical history checkbox options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryItem {
    #[serde(rename = "Smoking")]
    Smoking,
    #[serde(rename = "Previous Cardiac Event")]
    PreviousCardiacEvent,
    #[serde(rename = "Diabetes")]
    Diabetes,
    #[serde(rename = "Cancer")]
    Cancer,
    #[serde(rename = "Hypertension")]
    Hypertension,
    #[serde(rename = "Dyslipidemia")]
    Dyslipidemia,
}

impl HistoryItem {
    /// All selectable options, in form order
    pub const ALL: [HistoryItem; 6] = [
        HistoryItem::Smoking,
        HistoryItem::PreviousCardiacEvent,
        HistoryItem::Diabetes,
        HistoryItem::Cancer,
        HistoryItem::Hypertension,
        HistoryItem::Dyslipidemia,
    ];

    /// Form-facing label
    pub fn label(&self) -> &'static str {
        match self {
            HistoryItem::Smoking => "Smoking",
            HistoryItem::PreviousCardiacEvent => "Previous Cardiac Event",
            HistoryItem::Diabetes => "Diabetes",
            HistoryItem::Cancer => "Cancer",
            HistoryItem::Hypertension => "Hypertension",
            HistoryItem::Dyslipidemia => "Dyslipidemia",
        }
    }
}

/// Current medication checkbox options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Medication {
    #[serde(rename = "Aspirin")]
    Aspirin,
    #[serde(rename = "Beta Blockers")]
    BetaBlockers,
    #[serde(rename = "ACE Inhibitors")]
    AceInhibitors,
    #[serde(rename = "Statins")]
    Statins,
    #[serde(rename = "Anticoagulants")]
    Anticoagulants,
    #[serde(rename = "Diuretics")]
    Diuretics,
}

impl Medication {
    /// All selectable options, in form order
    pub const ALL: [Medication; 6] = [
        Medication::Aspirin,
        Medication::BetaBlockers,
        Medication::AceInhibitors,
        Medication::Statins,
        Medication::Anticoagulants,
        Medication::Diuretics,
    ];

    /// Form-facing label
    pub fn label(&self) -> &'static str {
        match self {
            Medication::Aspirin => "Aspirin",
            Medication::BetaBlockers => "Beta Blockers",
            Medication::AceInhibitors => "ACE Inhibitors",
            Medication::Statins => "Statins",
            Medication::Anticoagulants => "Anticoagulants",
            Medication::Diuretics => "Diuretics",
        }
    }
}

/// One complete intake-form submission.
///
/// The three collection fields have set semantics: membership is what
/// matters, duplicates and ordering never change the output. `age` and
/// `sex` must both be present before estimation runs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientInput {
    /// Age in years; `None` when the field was left empty
    pub age: Option<u32>,
    /// Sex; `None` when the field was left empty
    pub sex: Option<Sex>,
    /// Selected ethnicity options
    pub ethnicity: Vec<Ethnicity>,
    /// Selected medical history options
    pub medical_history: Vec<HistoryItem>,
    /// Selected current medications
    pub current_medication: Vec<Medication>,
    /// Whether an EHR record was attached (content is never inspected)
    pub ehr_attached: bool,
}

impl PatientInput {
    /// Whether the history set contains the given item
    pub fn has_history(&self, item: HistoryItem) -> bool {
        self.medical_history.contains(&item)
    }

    /// Whether the medication set contains the given item
    pub fn has_medication(&self, med: Medication) -> bool {
        self.current_medication.contains(&med)
    }

    /// Whether the ethnicity set contains the given option
    pub fn has_ethnicity(&self, ethnicity: Ethnicity) -> bool {
        self.ethnicity.contains(&ethnicity)
    }

    /// Whether both required fields are present
    pub fn is_complete(&self) -> bool {
        self.age.is_some() && self.sex.is_some()
    }

    /// Return the required fields, or the single estimation error
    pub fn require_complete(&self) -> Result<(u32, Sex), RiskError> {
        match (self.age, self.sex) {
            (Some(age), Some(sex)) => Ok((age, sex)),
            (age, sex) => Err(RiskError::IncompleteInput {
                missing_age: age.is_none(),
                missing_sex: sex.is_none(),
            }),
        }
    }
}

/// Complete output of one estimation call
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    /// Simulated risk percentage, clamped to [5, 40]
    pub risk_percent: f64,
    /// Contribution breakdown, descending by importance, normalized to 100%
    pub contributions: Vec<FeatureContribution>,
    /// Tier the risk and history placed this patient in
    pub tier: RiskTier,
    /// Suggested medication text, tier-dependent
    pub medications: Vec<String>,
    /// Suggested procedure text, tier-dependent
    pub procedures: Vec<String>,
}

/// Errors that can occur during estimation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RiskError {
    /// Age and/or sex was left empty; at least one flag is always true
    IncompleteInput { missing_age: bool, missing_sex: bool },
}

impl std::fmt::Display for RiskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskError::IncompleteInput { missing_age, missing_sex } => {
                let missing = match (missing_age, missing_sex) {
                    (true, true) => "age and sex are",
                    (true, false) => "age is",
                    _ => "sex is",
                };
                write!(f, "Incomplete input: {} required before estimation", missing)
            }
        }
    }
}

impl std::error::Error for RiskError {}

/// Entry point for estimation, carrying the RNG seeding policy.
///
/// An unseeded estimator draws from entropy on every call; a seeded one is
/// bit-for-bit reproducible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RiskEstimator {
    seed: Option<u64>,
}

impl RiskEstimator {
    /// Estimator drawing fresh entropy on every call
    pub fn new() -> Self {
        RiskEstimator { seed: None }
    }

    /// Fully deterministic estimator
    pub fn seeded(seed: u64) -> Self {
        RiskEstimator { seed: Some(seed) }
    }

    /// Run one estimation over a complete input
    pub fn estimate(&self, input: &PatientInput) -> Result<RiskResult, RiskError> {
        let mut rng = match self.seed {
            Some(s) => ChaCha20Rng::seed_from_u64(s),
            None => ChaCha20Rng::from_entropy(),
        };
        estimate_with_rng(input, &mut rng)
    }
}

/// Pure estimation core over a caller-managed RNG.
///
/// Draw order is fixed (score first, then contributions) so that a given
/// RNG state always maps to the same result.
pub fn estimate_with_rng<R: Rng>(
    input: &PatientInput,
    rng: &mut R,
) -> Result<RiskResult, RiskError> {
    let (age, sex) = input.require_complete()?;

    let risk_percent = scoring::risk_percent(age, sex, input, rng);
    let contributions = importance::contributions(input, rng);
    let tier = RiskTier::classify(
        risk_percent,
        input.has_history(HistoryItem::PreviousCardiacEvent),
    );
    let (medications, procedures) = recommendations::recommend(tier, input);

    Ok(RiskResult {
        risk_percent,
        contributions,
        tier,
        medications,
        procedures,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_input() -> PatientInput {
        PatientInput {
            age: Some(50),
            sex: Some(Sex::Female),
            ..Default::default()
        }
    }

    #[test]
    fn test_incomplete_input_missing_age() {
        let input = PatientInput {
            sex: Some(Sex::Male),
            ..Default::default()
        };
        let err = RiskEstimator::new().estimate(&input).unwrap_err();
        assert_eq!(
            err,
            RiskError::IncompleteInput {
                missing_age: true,
                missing_sex: false
            }
        );
    }

    #[test]
    fn test_incomplete_input_missing_sex() {
        let input = PatientInput {
            age: Some(40),
            ..Default::default()
        };
        let err = RiskEstimator::new().estimate(&input).unwrap_err();
        assert_eq!(
            err,
            RiskError::IncompleteInput {
                missing_age: false,
                missing_sex: true
            }
        );
    }

    #[test]
    fn test_incomplete_input_missing_both() {
        let err = RiskEstimator::new()
            .estimate(&PatientInput::default())
            .unwrap_err();
        assert_eq!(
            err,
            RiskError::IncompleteInput {
                missing_age: true,
                missing_sex: true
            }
        );
        // Error text names both fields
        assert!(err.to_string().contains("age and sex"));
    }

    #[test]
    fn test_seeded_estimation_is_reproducible() {
        let input = complete_input();
        let a = RiskEstimator::seeded(7).estimate(&input).unwrap();
        let b = RiskEstimator::seeded(7).estimate(&input).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_set_semantics_ignore_duplicates_and_order() {
        let mut input = complete_input();
        input.medical_history = vec![HistoryItem::Diabetes, HistoryItem::Smoking];
        let a = RiskEstimator::seeded(3).estimate(&input).unwrap();

        input.medical_history = vec![
            HistoryItem::Smoking,
            HistoryItem::Diabetes,
            HistoryItem::Smoking,
        ];
        let b = RiskEstimator::seeded(3).estimate(&input).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_option_sets_match_form_labels() {
        let labels: Vec<_> = Ethnicity::ALL.iter().map(|e| e.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Asian",
                "Black or African American",
                "Hispanic or Latino",
                "White",
                "Other"
            ]
        );
        assert_eq!(HistoryItem::ALL.len(), 6);
        assert_eq!(Medication::ALL.len(), 6);
        assert_eq!(Sex::ALL.len(), 3);
    }

    #[test]
    fn test_serde_uses_form_strings() {
        let json = serde_json::to_string(&Ethnicity::BlackOrAfricanAmerican).unwrap();
        assert_eq!(json, "\"Black or African American\"");

        let sex: Sex = serde_json::from_str("\"male\"").unwrap();
        assert_eq!(sex, Sex::Male);
    }
}
