//! # Parameter Integrity Analyzer
//!
//! Scores a profile against the conformance rule set: how complete the
//! parameter set is, and how closely each ruled value tracks its target band.
//! This is the first stage of the pipeline; its output gates nothing but is
//! surfaced to the user before geometry synthesis.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::round2;
use crate::errors::FacadeResult;
use crate::profile::DesignProfile;
use crate::rules::{RuledField, RULE_SET};

/// Gap values beyond this are treated as fully out-of-band
const GAP_CEILING: f64 = 1.8;

/// Note shown when coverage and rule alignment are both healthy
const NOTE_SATISFACTORY: &str =
    "Parameter coverage satisfactory; proceed to geometry synthesis";

/// Note shown when some inputs need review
const NOTE_REVIEW: &str = "Review highlighted inputs to strengthen rule alignment";

/// Integrity scores for one profile.
///
/// ## JSON Example
///
/// ```json
/// {
///   "completenessScore": 100.0,
///   "ruleMatchScore": 76.19,
///   "normalizedIndicators": { "module_width": 94.5, "module_height": 81.67 },
///   "missingParameters": [],
///   "notes": "Parameter coverage satisfactory; proceed to geometry synthesis"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrityReport {
    /// Share of required parameters present, 0-100
    pub completeness_score: f64,

    /// Aggregate rule-conformance score, 0-100
    pub rule_match_score: f64,

    /// Per-field indicator, keyed by profile field name. Unclamped; a far
    /// out-of-band value can push an indicator negative.
    pub normalized_indicators: BTreeMap<String, f64>,

    /// Ruled fields absent from the profile. Always empty for struct-typed
    /// profiles; kept for snapshot parity with form-driven hosts.
    pub missing_parameters: Vec<String>,

    /// Fixed guidance message derived from the two scores
    pub notes: String,
}

/// Evaluate how well a profile follows the defined rules.
///
/// For each ruled field the normalized gap is `|value - target| / (spread/2)`
/// capped at 1.8, where `spread = max - min` (falling back to the target,
/// then 1.0, to avoid a zero divisor). Gaps accumulate into a weighted
/// penalty; each field also gets an individual 0-100-ish indicator.
pub fn analyze_parameter_integrity(profile: &DesignProfile) -> FacadeResult<IntegrityReport> {
    profile.validate()?;

    let total = RuledField::ALL.len();
    let missing_parameters: Vec<String> = Vec::new();
    let completeness_score = round2((1.0 - missing_parameters.len() as f64 / total as f64) * 100.0);

    let mut penalty = 0.0;
    let mut normalized_indicators = BTreeMap::new();
    for field in RuledField::ALL {
        let rule = RULE_SET[&field];
        let value = field.value(profile);

        let mut spread = rule.max - rule.min;
        if spread == 0.0 {
            spread = if rule.target != 0.0 { rule.target } else { 1.0 };
        }

        let gap = ((value - rule.target).abs() / (spread / 2.0)).min(GAP_CEILING);
        normalized_indicators.insert(
            field.key().to_string(),
            round2(100.0 - gap * 55.0 * rule.weight),
        );
        penalty += gap * rule.weight;
    }

    let rule_match_score = round2((100.0 - penalty * 18.0).max(0.0));

    let notes = if completeness_score > 90.0 && rule_match_score > 72.0 {
        NOTE_SATISFACTORY
    } else {
        NOTE_REVIEW
    };

    Ok(IntegrityReport {
        completeness_score,
        rule_match_score,
        normalized_indicators,
        missing_parameters,
        notes: notes.to_string(),
    })
}
