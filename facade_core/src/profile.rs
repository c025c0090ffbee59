//! # Design Profiles
//!
//! [`DesignProfile`] is the sole persistent entity of the engine: a named set
//! of curtain-wall unit design parameters. Profiles arrive either from the
//! persisted dataset snapshot (typed JSON) or from a dashboard form (loosely
//! typed values), and feed every analysis stage.
//!
//! ## Example
//!
//! ```rust
//! use facade_core::profile::build_profiles;
//!
//! let profiles = build_profiles();
//! assert_eq!(profiles[0].id, "DX-01");
//! assert!(profiles[0].validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{FacadeError, FacadeResult};
use crate::materials::Material;

/// Parametric description of one curtain-wall unit profile.
///
/// All dimensions are in meters, angles in degrees, wind speed in m/s,
/// thermal gradient in °C. Field names match the persisted snapshot layout.
///
/// ## JSON Example
///
/// ```json
/// {
///   "id": "DX-01",
///   "name": "Hyperbolic East Atrium",
///   "module_width": 1.25,
///   "module_height": 3.45,
///   "module_depth": 0.24,
///   "curvature_radius": 28.0,
///   "tilt_angle": 3.5,
///   "mullion_spacing": 1.42,
///   "panel_thickness": 0.021,
///   "wind_speed": 34.0,
///   "thermal_gradient": 16.0,
///   "material": "aluminum"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignProfile {
    /// Identifier, unique per dataset (e.g., "DX-01")
    pub id: String,

    /// Display name (e.g., "Hyperbolic East Atrium")
    pub name: String,

    /// Module width in meters
    pub module_width: f64,

    /// Module height in meters
    pub module_height: f64,

    /// Module depth in meters
    pub module_depth: f64,

    /// Curvature radius in meters; larger = flatter
    pub curvature_radius: f64,

    /// Tilt angle in degrees, may be negative
    pub tilt_angle: f64,

    /// Mullion spacing in meters
    pub mullion_spacing: f64,

    /// Panel thickness in meters
    pub panel_thickness: f64,

    /// Design wind speed in m/s (UI convention: 20-60)
    pub wind_speed: f64,

    /// Thermal gradient across the unit in °C (UI convention: 0-30)
    pub thermal_gradient: f64,

    /// Frame material
    pub material: Material,
}

/// Numeric profile fields accepted from loose form input, in declaration order
const NUMERIC_FIELDS: [&str; 9] = [
    "module_width",
    "module_height",
    "module_depth",
    "curvature_radius",
    "tilt_angle",
    "mullion_spacing",
    "panel_thickness",
    "wind_speed",
    "thermal_gradient",
];

impl DesignProfile {
    /// Validate the profile parameters.
    ///
    /// Rejects non-positive values for every field used as a dimension or
    /// denominator downstream, and non-finite values for the environment
    /// inputs. Stage functions call this on entry.
    pub fn validate(&self) -> FacadeResult<()> {
        let positive_fields = [
            ("module_width", self.module_width),
            ("module_height", self.module_height),
            ("module_depth", self.module_depth),
            ("curvature_radius", self.curvature_radius),
            ("mullion_spacing", self.mullion_spacing),
            ("panel_thickness", self.panel_thickness),
        ];
        for (field, value) in positive_fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(FacadeError::invalid_input(
                    field,
                    value.to_string(),
                    "Value must be a positive number",
                ));
            }
        }

        let finite_fields = [
            ("tilt_angle", self.tilt_angle),
            ("wind_speed", self.wind_speed),
            ("thermal_gradient", self.thermal_gradient),
        ];
        for (field, value) in finite_fields {
            if !value.is_finite() {
                return Err(FacadeError::invalid_input(
                    field,
                    value.to_string(),
                    "Value must be a finite number",
                ));
            }
        }

        Ok(())
    }

    /// Build a profile from loosely typed form values.
    ///
    /// Dashboard forms deliver numbers that may arrive as JSON numbers or as
    /// numeric strings. This constructor coerces both and fails with a clear
    /// invalid-field error on anything else, instead of letting NaN leak into
    /// the formulas.
    ///
    /// # Example
    ///
    /// ```rust
    /// use facade_core::profile::DesignProfile;
    /// use serde_json::json;
    ///
    /// let profile = DesignProfile::from_form_value(&json!({
    ///     "id": "DX-10",
    ///     "name": "South Canopy",
    ///     "module_width": "1.3",
    ///     "module_height": 3.1,
    ///     "module_depth": 0.25,
    ///     "curvature_radius": 30,
    ///     "tilt_angle": 2.5,
    ///     "mullion_spacing": 1.4,
    ///     "panel_thickness": 0.02,
    ///     "wind_speed": 36,
    ///     "thermal_gradient": 14,
    ///     "material": "glass"
    /// })).unwrap();
    /// assert_eq!(profile.module_width, 1.3);
    /// ```
    pub fn from_form_value(value: &Value) -> FacadeResult<Self> {
        let fields = value.as_object().ok_or_else(|| FacadeError::SerializationError {
            reason: "Profile form payload must be a JSON object".to_string(),
        })?;

        let text_field = |field: &str| -> FacadeResult<String> {
            let raw = fields.get(field).ok_or_else(|| FacadeError::missing_field(field))?;
            raw.as_str().map(str::to_string).ok_or_else(|| {
                FacadeError::invalid_input(field, raw.to_string(), "Expected a string")
            })
        };

        let mut numbers = [0.0_f64; NUMERIC_FIELDS.len()];
        for (slot, field) in numbers.iter_mut().zip(NUMERIC_FIELDS) {
            let raw = fields.get(field).ok_or_else(|| FacadeError::missing_field(field))?;
            *slot = coerce_f64(field, raw)?;
        }
        let [module_width, module_height, module_depth, curvature_radius, tilt_angle, mullion_spacing, panel_thickness, wind_speed, thermal_gradient] =
            numbers;

        let profile = DesignProfile {
            id: text_field("id")?,
            name: text_field("name")?,
            module_width,
            module_height,
            module_depth,
            curvature_radius,
            tilt_angle,
            mullion_spacing,
            panel_thickness,
            wind_speed,
            thermal_gradient,
            material: Material::from(text_field("material")?),
        };

        profile.validate()?;
        Ok(profile)
    }
}

/// Coerce a loose form value to f64. Accepts JSON numbers and numeric strings.
fn coerce_f64(field: &str, value: &Value) -> FacadeResult<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| {
        FacadeError::invalid_input(field, value.to_string(), "Expected a numeric value")
    })
}

/// Return the reference sample profiles used across the application.
pub fn build_profiles() -> Vec<DesignProfile> {
    vec![
        DesignProfile {
            id: "DX-01".to_string(),
            name: "Hyperbolic East Atrium".to_string(),
            module_width: 1.25,
            module_height: 3.45,
            module_depth: 0.24,
            curvature_radius: 28.0,
            tilt_angle: 3.5,
            mullion_spacing: 1.42,
            panel_thickness: 0.021,
            wind_speed: 34.0,
            thermal_gradient: 16.0,
            material: Material::Aluminum,
        },
        DesignProfile {
            id: "DX-02".to_string(),
            name: "North Tower Ribbon".to_string(),
            module_width: 1.1,
            module_height: 3.0,
            module_depth: 0.22,
            curvature_radius: 45.0,
            tilt_angle: 2.0,
            mullion_spacing: 1.5,
            panel_thickness: 0.019,
            wind_speed: 38.0,
            thermal_gradient: 12.0,
            material: Material::Glass,
        },
        DesignProfile {
            id: "DX-03".to_string(),
            name: "Skywalk Link Gallery".to_string(),
            module_width: 1.35,
            module_height: 3.8,
            module_depth: 0.27,
            curvature_radius: 24.0,
            tilt_angle: 5.2,
            mullion_spacing: 1.32,
            panel_thickness: 0.024,
            wind_speed: 42.0,
            thermal_gradient: 18.0,
            material: Material::Steel,
        },
    ]
}
