//! Fabricated feature-importance breakdown
//!
//! One contribution per present input field: a fixed base weight, a bounded
//! jitter multiplier, then normalization so the displayed percentages sum
//! to 100. The breakdown is for display only; it is not derived from any
//! model.

use crate::{Ethnicity, HistoryItem, Medication, PatientInput};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Floor applied after normalization so every row stays visible
pub const MIN_IMPORTANCE: f64 = 0.1;

/// Jitter half-width for the singleton fields (age, sex, EHR)
const SINGLETON_JITTER: f64 = 0.10;

/// Jitter half-width for ethnicity entries (wider band than history/medication)
const ETHNICITY_JITTER: f64 = 0.20;

/// Jitter half-width for history and medication entries
const SET_JITTER: f64 = 0.15;

/// Base weight for the age field
const AGE_WEIGHT: f64 = 0.30;

/// Base weight for the sex field
const SEX_WEIGHT: f64 = 0.15;

/// Base weight per selected ethnicity entry
const ETHNICITY_WEIGHT: f64 = 0.05;

/// Base weight for an attached EHR record
const EHR_WEIGHT: f64 = 0.10;

impl HistoryItem {
    /// Base importance weight for this history entry
    pub fn base_weight(&self) -> f64 {
        match self {
            HistoryItem::Smoking => 0.20,
            HistoryItem::PreviousCardiacEvent => 0.35,
            HistoryItem::Diabetes => 0.25,
            HistoryItem::Cancer => 0.05,
            HistoryItem::Hypertension => 0.15,
            HistoryItem::Dyslipidemia => 0.10,
        }
    }
}

impl Medication {
    /// Base importance weight for this medication entry
    pub fn base_weight(&self) -> f64 {
        match self {
            Medication::Aspirin => 0.05,
            Medication::BetaBlockers => 0.05,
            Medication::AceInhibitors => 0.05,
            Medication::Statins => 0.10,
            Medication::Anticoagulants => 0.08,
            Medication::Diuretics => 0.03,
        }
    }
}

/// One row of the displayed importance breakdown
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureContribution {
    /// Display label, composite for set members (e.g. "History: Smoking")
    pub feature: String,
    /// Normalized share in percent, ≥ [`MIN_IMPORTANCE`]
    pub importance: f64,
}

/// Apply the jitter multiplier for one raw weight
fn jittered<R: Rng>(base: f64, half_width: f64, rng: &mut R) -> f64 {
    base * (1.0 + rng.gen_range(-half_width..half_width))
}

/// Build the normalized, descending contribution breakdown.
///
/// Membership is tested per enum variant over the `ALL` arrays, so
/// duplicate or re-ordered entries in the input vectors contribute once
/// and the draw order is fixed regardless of input ordering.
pub(crate) fn contributions<R: Rng>(input: &PatientInput, rng: &mut R) -> Vec<FeatureContribution> {
    let mut raw: Vec<FeatureContribution> = Vec::new();

    if input.age.is_some() {
        raw.push(FeatureContribution {
            feature: "Age".to_string(),
            importance: jittered(AGE_WEIGHT, SINGLETON_JITTER, rng),
        });
    }
    if input.sex.is_some() {
        raw.push(FeatureContribution {
            feature: "Sex".to_string(),
            importance: jittered(SEX_WEIGHT, SINGLETON_JITTER, rng),
        });
    }

    for ethnicity in Ethnicity::ALL {
        if input.has_ethnicity(ethnicity) {
            raw.push(FeatureContribution {
                feature: format!("Ethnicity: {}", ethnicity.label()),
                importance: jittered(ETHNICITY_WEIGHT, ETHNICITY_JITTER, rng),
            });
        }
    }

    for item in HistoryItem::ALL {
        if input.has_history(item) {
            raw.push(FeatureContribution {
                feature: format!("History: {}", item.label()),
                importance: jittered(item.base_weight(), SET_JITTER, rng),
            });
        }
    }

    for med in Medication::ALL {
        if input.has_medication(med) {
            raw.push(FeatureContribution {
                feature: format!("Medication: {}", med.label()),
                importance: jittered(med.base_weight(), SET_JITTER, rng),
            });
        }
    }

    if input.ehr_attached {
        raw.push(FeatureContribution {
            feature: "EHR Data".to_string(),
            importance: jittered(EHR_WEIGHT, SINGLETON_JITTER, rng),
        });
    }

    normalize(&mut raw);
    raw
}

/// Normalize raw importances to percentages summing to 100, floor each at
/// [`MIN_IMPORTANCE`], and sort descending.
fn normalize(contributions: &mut Vec<FeatureContribution>) {
    let sum: f64 = contributions.iter().map(|c| c.importance).sum();
    if sum > 0.0 {
        for c in contributions.iter_mut() {
            c.importance = (c.importance / sum * 100.0).max(MIN_IMPORTANCE);
        }
    }
    contributions.sort_by(|a, b| {
        b.importance
            .partial_cmp(&a.importance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
