//! Heuristic risk-percent scoring
//!
//! Additive weighted formula over the intake fields plus one bounded
//! uniform draw, clamped to the displayable range. This is the canonical
//! input-sensitive formula; the output is explainable by the contribution
//! breakdown in [`crate::importance`].

use crate::{HistoryItem, PatientInput, Sex};
use rand::Rng;

/// Lower display bound for the simulated risk percentage
pub const MIN_RISK_PERCENT: f64 = 5.0;

/// Upper display bound for the simulated risk percentage
pub const MAX_RISK_PERCENT: f64 = 40.0;

/// Base score before any input is considered
const BASE: f64 = 5.0;

/// Width of the uniform noise band added on top of the heuristic
const NOISE_SPAN: f64 = 5.0;

/// Age above which the larger age bonus applies
const ELEVATED_AGE: u32 = 60;

/// Compute the simulated risk percentage for a validated input.
///
/// `age` and `sex` are passed separately because the caller has already
/// unwrapped them via [`PatientInput::require_complete`]. Exactly one
/// uniform draw in `[0, NOISE_SPAN)` is consumed from `rng`.
pub(crate) fn risk_percent<R: Rng>(
    age: u32,
    sex: Sex,
    input: &PatientInput,
    rng: &mut R,
) -> f64 {
    let mut score = BASE;

    score += if age > ELEVATED_AGE { 10.0 } else { 5.0 };
    score += if sex == Sex::Male { 3.0 } else { 1.0 };

    if input.has_history(HistoryItem::PreviousCardiacEvent) {
        score += 15.0;
    }
    if input.has_history(HistoryItem::Smoking) {
        score += 5.0;
    }
    if input.has_history(HistoryItem::Diabetes) {
        score += 4.0;
    }
    if input.has_history(HistoryItem::Hypertension) {
        score += 3.0;
    }
    if input.ehr_attached {
        score += 2.0;
    }

    score += rng.gen_range(0.0..NOISE_SPAN);

    score.clamp(MIN_RISK_PERCENT, MAX_RISK_PERCENT)
}
