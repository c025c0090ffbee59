//! # Frame Materials
//!
//! Material classification for curtain-wall frame members and the density
//! scalars used by the geometry stage's frame-weight estimate.
//!
//! Materials arrive from forms and persisted datasets as plain strings, so
//! the enum round-trips through `String`: known names map to their variant,
//! anything else is carried as [`Material::Other`] and priced at the default
//! density instead of failing the whole analysis.
//!
//! ## Example
//!
//! ```rust
//! use facade_core::materials::Material;
//!
//! let material = Material::from("aluminum".to_string());
//! assert_eq!(material, Material::Aluminum);
//! assert_eq!(material.density(), 27.0);
//!
//! // Unrecognized names fall back to the default density
//! let exotic = Material::from("titanium".to_string());
//! assert_eq!(exotic.density(), 30.0);
//! ```

use serde::{Deserialize, Serialize};

/// Density used for materials outside the known set (kN/m³-equivalent)
pub const DEFAULT_DENSITY: f64 = 30.0;

/// Frame material for a curtain-wall unit.
///
/// Serializes as a lowercase string (`"aluminum"`, `"glass"`, `"steel"`),
/// matching the persisted profile layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Material {
    /// Extruded aluminum framing
    Aluminum,
    /// Structural glass fins
    Glass,
    /// Steel mullion framing
    Steel,
    /// Unrecognized material name, analyzed with the default density
    Other(String),
}

impl Material {
    /// Density scalar used in the frame-weight estimate (kN/m³-equivalent)
    pub fn density(&self) -> f64 {
        match self {
            Material::Aluminum => 27.0,
            Material::Glass => 25.0,
            Material::Steel => 78.5,
            Material::Other(_) => DEFAULT_DENSITY,
        }
    }

    /// The serialized string form of this material
    pub fn as_str(&self) -> &str {
        match self {
            Material::Aluminum => "aluminum",
            Material::Glass => "glass",
            Material::Steel => "steel",
            Material::Other(name) => name,
        }
    }
}

impl From<String> for Material {
    fn from(value: String) -> Self {
        match value.as_str() {
            "aluminum" => Material::Aluminum,
            "glass" => Material::Glass,
            "steel" => Material::Steel,
            _ => Material::Other(value),
        }
    }
}

impl From<Material> for String {
    fn from(material: Material) -> Self {
        material.as_str().to_string()
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_densities() {
        assert_eq!(Material::Aluminum.density(), 27.0);
        assert_eq!(Material::Glass.density(), 25.0);
        assert_eq!(Material::Steel.density(), 78.5);
    }

    #[test]
    fn test_unknown_material_uses_default_density() {
        let material = Material::from("carbon-fiber".to_string());
        assert_eq!(material, Material::Other("carbon-fiber".to_string()));
        assert_eq!(material.density(), DEFAULT_DENSITY);
    }

    #[test]
    fn test_string_roundtrip() {
        for name in ["aluminum", "glass", "steel", "bronze"] {
            let material = Material::from(name.to_string());
            assert_eq!(material.as_str(), name);
        }
    }

    #[test]
    fn test_serde_as_plain_string() {
        let json = serde_json::to_string(&Material::Steel).unwrap();
        assert_eq!(json, "\"steel\"");

        let parsed: Material = serde_json::from_str("\"glass\"").unwrap();
        assert_eq!(parsed, Material::Glass);

        // Unknown strings deserialize rather than erroring
        let parsed: Material = serde_json::from_str("\"timber\"").unwrap();
        assert_eq!(parsed, Material::Other("timber".to_string()));
    }
}
