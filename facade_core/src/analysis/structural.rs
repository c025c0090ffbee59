//! # Structural Verifier
//!
//! Derives simplified load and stress metrics from a profile and its
//! geometry: wind pressure from a dynamic-pressure formula, dead load from
//! the frame weight, and a seven-node stress distribution up the module
//! height with a generated-vs-optimized comparison.
//!
//! These are illustrative scalar approximations for dashboard review, not
//! code-compliant structural calculations.

use serde::{Deserialize, Serialize};

use crate::analysis::{round2, round3, GeometryReport};
use crate::errors::FacadeResult;
use crate::profile::DesignProfile;

/// Number of evaluation nodes up the module height
const NODE_COUNT: usize = 7;

/// Stress state at one elevation node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressNode {
    /// Node number, 1-based from the sill
    pub node: u32,

    /// Elevation above the sill (m)
    pub elevation: f64,

    /// Baseline stress with the elevation gradient applied
    pub baseline: f64,

    /// Stress after the curvature influence factor
    pub generated: f64,

    /// Stress after the per-node optimization factor
    pub optimized: f64,
}

/// Structural verification metrics for one profile.
///
/// ## JSON Example
///
/// ```json
/// {
///   "windPressure": 0.558,
///   "deadLoad": 0.233,
///   "stabilityIndex": 96.56,
///   "stressDistribution": [
///     { "node": 1, "elevation": 0.0, "baseline": 0.605, "generated": 0.611, "optimized": 0.562 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuralReport {
    /// Simplified dynamic wind pressure (kN/m²)
    pub wind_pressure: f64,

    /// Dead load from frame weight (kN-equivalent)
    pub dead_load: f64,

    /// 0-100 agreement score between generated and optimized stress curves
    pub stability_index: f64,

    /// Stress records at seven evenly spaced elevations
    pub stress_distribution: Vec<StressNode>,
}

/// Run the simplified structural verification routine.
pub fn run_structural_verification(
    profile: &DesignProfile,
    geometry: &GeometryReport,
) -> FacadeResult<StructuralReport> {
    profile.validate()?;

    let exposure_factor = 0.5 + profile.module_height / 12.0;
    let wind_pressure = 0.613 * profile.wind_speed.powi(2) * exposure_factor / 1000.0;
    let dead_load = geometry.frame_weight * 0.0098;

    let baseline_stress = (wind_pressure.powi(2) + dead_load.powi(2)).sqrt();
    let curvature_influence = geometry.dynamic_coefficients.curvature_influence;

    let mut stress_distribution = Vec::with_capacity(NODE_COUNT);
    for idx in 0..NODE_COUNT {
        let elevation = profile.module_height * idx as f64 / (NODE_COUNT - 1) as f64;
        let gradient_factor = 1.0 + (idx as f64 / (NODE_COUNT - 1) as f64) * 0.32;
        let generated = baseline_stress * gradient_factor * (1.0 + curvature_influence / 400.0);
        let optimized = generated * (0.92 - idx as f64 * 0.015);

        stress_distribution.push(StressNode {
            node: idx as u32 + 1,
            elevation: round2(elevation),
            baseline: round3(baseline_stress * gradient_factor),
            generated: round3(generated),
            optimized: round3(optimized),
        });
    }

    let mean_divergence = stress_distribution
        .iter()
        .map(|node| (node.generated - node.optimized).abs())
        .sum::<f64>()
        / stress_distribution.len() as f64;
    let stability_index = round2(100.0 - mean_divergence * 38.0).clamp(0.0, 100.0);

    Ok(StructuralReport {
        wind_pressure: round3(wind_pressure),
        dead_load: round3(dead_load),
        stability_index,
        stress_distribution,
    })
}
