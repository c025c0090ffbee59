//! # facade_core - Facade Analytics Engine
//!
//! `facade_core` computes parametric engineering metrics for curtain-wall
//! facade units: conformance scoring, geometry, simplified structural
//! verification, error-correction estimates, and design-to-field association.
//! All inputs and outputs are JSON-serializable value types, so the engine
//! drops straight into a dashboard host or an API layer.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: five pure stages, each a function of its explicit inputs
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//! - **Deterministic**: identical input yields identical output; the dataset
//!   timestamp is the only clock-dependent value
//!
//! ## Quick Start
//!
//! ```rust
//! use facade_core::dataset::build_dataset;
//!
//! // Analyze the reference profiles
//! let dataset = build_dataset(None).unwrap();
//! assert_eq!(dataset.active_profile_id, "DX-01");
//!
//! // Serialize for the dashboard host
//! let json = serde_json::to_string_pretty(&dataset).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`profile`] - DesignProfile, validation, reference scenarios
//! - [`materials`] - frame material enum and densities
//! - [`rules`] - static conformance rule table
//! - [`analysis`] - the five analysis stages
//! - [`dataset`] - full-pipeline orchestration
//! - [`snapshot`] - atomic JSON snapshot save/load
//! - [`errors`] - structured error types

pub mod analysis;
pub mod dataset;
pub mod errors;
pub mod materials;
pub mod profile;
pub mod rules;
pub mod snapshot;

// Re-export commonly used types at crate root for convenience
pub use analysis::{
    analyze_parameter_integrity, build_data_association, compute_error_correction,
    generate_unit_geometry, run_structural_verification,
};
pub use dataset::{build_dataset, FacadeDataset};
pub use errors::{FacadeError, FacadeResult};
pub use materials::Material;
pub use profile::{build_profiles, DesignProfile};
pub use snapshot::{load_dataset, load_or_build, save_dataset};
