//! # Unit Geometry Generator
//!
//! Derives the geometric metrics for one profile: projected area, envelope
//! volume, frame weight, a schematic control-point path, and the dynamic
//! coefficients consumed by the structural and correction stages.
//!
//! The control points describe a Bezier-like path from the module origin to
//! its opposite corner. They are a shape descriptor for the dashboard, not a
//! structural quantity.

use serde::{Deserialize, Serialize};

use crate::analysis::{round2, round3};
use crate::errors::FacadeResult;
use crate::profile::DesignProfile;

/// Fraction of envelope volume assumed occupied by framing
const FRAME_FILL_FACTOR: f64 = 0.85;

/// Coupling coefficients derived from curvature, tilt, and section ratios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicCoefficients {
    /// Curvature factor scaled for display, higher = tighter curve
    pub curvature_influence: f64,

    /// Signed tilt response, degrees-derived
    pub tilt_response: f64,

    /// Mullion spacing relative to module width
    pub mullion_coupling: f64,

    /// Panel thickness relative to module depth
    pub thickness_ratio: f64,
}

/// Geometry metrics for one profile.
///
/// ## JSON Example
///
/// ```json
/// {
///   "projectedArea": 4.313,
///   "envelopeVolume": 1.035,
///   "frameWeight": 23.75,
///   "controlPoints": [[0.0, 0.0], [0.5, 0.621], [0.8125, 1.8975], [1.25, 3.45]],
///   "pathWeights": [0.223, 0.077, 0.689, 0.011],
///   "dynamicCoefficients": {
///     "curvatureInfluence": 4.29,
///     "tiltResponse": 2.75,
///     "mullionCoupling": 1.136,
///     "thicknessRatio": 0.088
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometryReport {
    /// Elevation area, width x height (m²)
    pub projected_area: f64,

    /// Envelope volume, area x depth (m³)
    pub envelope_volume: f64,

    /// Estimated frame weight (kg-equivalent)
    pub frame_weight: f64,

    /// Schematic shape path from (0,0) to (width, height)
    pub control_points: [[f64; 2]; 4],

    /// Relative emphasis across four sub-metrics; sums to 1.0 (± rounding)
    pub path_weights: [f64; 4],

    /// Coupling coefficients consumed by downstream stages
    pub dynamic_coefficients: DynamicCoefficients,
}

/// Construct key geometry metrics for a profile.
pub fn generate_unit_geometry(profile: &DesignProfile) -> FacadeResult<GeometryReport> {
    profile.validate()?;

    let area = profile.module_width * profile.module_height;
    let envelope_volume = area * profile.module_depth;
    let curvature_factor = 1.0 / profile.curvature_radius.max(1.0);
    let tilt_rad = profile.tilt_angle.to_radians();

    let frame_weight = round2(envelope_volume * profile.material.density() * FRAME_FILL_FACTOR);

    let control_points = [
        [0.0, 0.0],
        [profile.module_width * 0.4, profile.module_height * 0.18],
        [profile.module_width * 0.65, profile.module_height * 0.55],
        [profile.module_width, profile.module_height],
    ];

    let path_weights_raw = [
        area,
        envelope_volume * (1.0 + curvature_factor * 12.0),
        frame_weight * (0.5 + tilt_rad.abs()),
        profile.panel_thickness * 10.0,
    ];
    let raw_sum: f64 = path_weights_raw.iter().sum();
    let path_weights = path_weights_raw.map(|w| round3(w / raw_sum));

    let dynamic_coefficients = DynamicCoefficients {
        curvature_influence: round2(curvature_factor * 120.0),
        tilt_response: round2(tilt_rad.sin() * 45.0),
        mullion_coupling: round3(profile.mullion_spacing / profile.module_width),
        thickness_ratio: round3(profile.panel_thickness / profile.module_depth),
    };

    Ok(GeometryReport {
        projected_area: round3(area),
        envelope_volume: round3(envelope_volume),
        frame_weight,
        control_points,
        path_weights,
        dynamic_coefficients,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::build_profiles;

    #[test]
    fn test_reference_area_volume_weight() {
        let profile = build_profiles().remove(0);
        let report = generate_unit_geometry(&profile).unwrap();

        // DX-01: 1.25 x 3.45 = 4.3125 m², x 0.24 = 1.035 m³
        assert!((report.projected_area - 4.3125).abs() <= 0.0005);
        assert!((report.envelope_volume - 1.035).abs() < 1e-9);
        // 1.035 x 27.0 x 0.85 = 23.75325 -> 23.75
        assert!((report.frame_weight - 23.75).abs() < 1e-9);
    }

    #[test]
    fn test_path_weights_sum_to_one() {
        for profile in build_profiles() {
            let report = generate_unit_geometry(&profile).unwrap();
            let sum: f64 = report.path_weights.iter().sum();
            assert!(
                (sum - 1.0).abs() < 0.005,
                "path weights for {} sum to {}",
                profile.id,
                sum
            );
        }
    }

    #[test]
    fn test_control_points_span_module() {
        let profile = build_profiles().remove(0);
        let report = generate_unit_geometry(&profile).unwrap();

        assert_eq!(report.control_points[0], [0.0, 0.0]);
        assert_eq!(
            report.control_points[3],
            [profile.module_width, profile.module_height]
        );
        // Interior points stay inside the module envelope
        for point in &report.control_points[1..3] {
            assert!(point[0] > 0.0 && point[0] < profile.module_width);
            assert!(point[1] > 0.0 && point[1] < profile.module_height);
        }
    }

    #[test]
    fn test_flat_panel_has_small_curvature_influence() {
        let mut profile = build_profiles().remove(0);
        profile.curvature_radius = 60.0;
        let flat = generate_unit_geometry(&profile).unwrap();

        profile.curvature_radius = 8.0;
        let curved = generate_unit_geometry(&profile).unwrap();

        assert!(
            flat.dynamic_coefficients.curvature_influence
                < curved.dynamic_coefficients.curvature_influence
        );
        // 1/8 * 120 = 15.0
        assert!((curved.dynamic_coefficients.curvature_influence - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_tilt_gives_signed_response() {
        let mut profile = build_profiles().remove(0);
        profile.tilt_angle = -3.5;
        let report = generate_unit_geometry(&profile).unwrap();
        assert!(report.dynamic_coefficients.tilt_response < 0.0);
    }

    #[test]
    fn test_unknown_material_uses_default_density() {
        let mut profile = build_profiles().remove(0);
        profile.material = crate::materials::Material::Other("titanium".to_string());
        let report = generate_unit_geometry(&profile).unwrap();
        // 1.035 x 30.0 x 0.85 = 26.3925 -> 26.39
        assert!((report.frame_weight - 26.39).abs() < 1e-9);
    }

    #[test]
    fn test_determinism() {
        let profile = build_profiles().remove(2);
        let a = generate_unit_geometry(&profile).unwrap();
        let b = generate_unit_geometry(&profile).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let profile = build_profiles().remove(1);
        let report = generate_unit_geometry(&profile).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("projectedArea"));
        assert!(json.contains("dynamicCoefficients"));

        let roundtrip: GeometryReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, roundtrip);
    }
}
