//! # Analysis Stages
//!
//! The five transformation stages of the facade analytics pipeline. Each
//! stage follows the same pattern:
//!
//! - a `*Report` output struct (JSON-serializable, camelCase keys)
//! - a pure free function `fn stage(&DesignProfile, ...) -> FacadeResult<*Report>`
//!
//! Control flow is strictly linear: integrity → geometry → structural /
//! correction (both consume geometry) → association. No stage holds state;
//! re-running a stage with identical input yields identical output.
//!
//! ## Available Stages
//!
//! - [`integrity`] - scores a profile against the conformance rule set
//! - [`geometry`] - area/volume/weight/shape-path metrics
//! - [`structural`] - wind pressure, dead load, stress distribution
//! - [`correction`] - iterative deviation-reduction estimates
//! - [`association`] - design-to-field correlation and linkage

pub mod association;
pub mod correction;
pub mod geometry;
pub mod integrity;
pub mod structural;

// Re-export stage functions and reports at module root for convenience
pub use association::{build_data_association, AssociationReport, StageCorrelation, StageLinkage};
pub use correction::{compute_error_correction, CorrectionIteration, CorrectionReport};
pub use geometry::{generate_unit_geometry, DynamicCoefficients, GeometryReport};
pub use integrity::{analyze_parameter_integrity, IntegrityReport};
pub use structural::{run_structural_verification, StressNode, StructuralReport};

/// Round to 2 decimal places, half away from zero
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 3 decimal places, half away from zero
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
