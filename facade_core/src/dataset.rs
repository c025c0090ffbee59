//! # Dataset Assembly
//!
//! Orchestrates the five analysis stages for the active profile and packages
//! the results, together with the profile list, into the canonical dataset
//! payload consumed by the dashboard host and persisted as the snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::{
    analyze_parameter_integrity, build_data_association, compute_error_correction,
    generate_unit_geometry, run_structural_verification, AssociationReport, CorrectionReport,
    GeometryReport, IntegrityReport, StructuralReport,
};
use crate::errors::{FacadeError, FacadeResult};
use crate::profile::{build_profiles, DesignProfile};

/// The canonical dataset payload: profile list plus the derived sections for
/// the active (first) profile.
///
/// `generated_at` is the only clock-dependent value in the system; equality
/// checks on datasets should compare the other sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacadeDataset {
    /// When this dataset was computed (UTC)
    pub generated_at: DateTime<Utc>,

    /// Id of the profile the derived sections were computed for
    pub active_profile_id: String,

    /// All profiles in the dataset, active profile first
    pub profiles: Vec<DesignProfile>,

    /// Integrity scores for the active profile
    pub integrity: IntegrityReport,

    /// Geometry metrics for the active profile
    pub geometry: GeometryReport,

    /// Structural verification for the active profile
    pub structural: StructuralReport,

    /// Error-correction estimates for the active profile
    pub corrections: CorrectionReport,

    /// Design-to-field association for the active profile
    pub association: AssociationReport,
}

/// Run the full five-stage pipeline and build the canonical dataset.
///
/// Stages run for the first profile of `profiles`; when `None`, the three
/// reference scenarios are used. Fails with [`FacadeError::EmptyProfileSet`]
/// on an empty list.
///
/// # Example
///
/// ```rust
/// use facade_core::dataset::build_dataset;
///
/// let dataset = build_dataset(None).unwrap();
/// assert_eq!(dataset.active_profile_id, "DX-01");
/// assert_eq!(dataset.profiles.len(), 3);
/// ```
pub fn build_dataset(profiles: Option<&[DesignProfile]>) -> FacadeResult<FacadeDataset> {
    let profiles: Vec<DesignProfile> = match profiles {
        Some(list) => list.to_vec(),
        None => build_profiles(),
    };
    let active = profiles.first().ok_or(FacadeError::EmptyProfileSet)?.clone();
    debug!(profile = %active.id, count = profiles.len(), "building dataset");

    let integrity = analyze_parameter_integrity(&active)?;
    let geometry = generate_unit_geometry(&active)?;
    let structural = run_structural_verification(&active, &geometry)?;
    let corrections = compute_error_correction(&active, &geometry)?;
    let association = build_data_association(&active, &corrections)?;

    Ok(FacadeDataset {
        generated_at: Utc::now(),
        active_profile_id: active.id,
        profiles,
        integrity,
        geometry,
        structural,
        corrections,
        association,
    })
}
