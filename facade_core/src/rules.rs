//! # Conformance Rule Set
//!
//! Target/min/max/weight bounds for the ruled design parameters, used by the
//! integrity analyzer to score how closely a profile tracks the reference
//! envelope. The table is static configuration: initialized once, read-only
//! for the life of the process.
//!
//! Wind speed and thermal gradient are environment inputs rather than design
//! choices, so they carry no rule.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::profile::DesignProfile;

/// The design parameters governed by a conformance rule.
///
/// `ALL` fixes the iteration order so indicator maps and penalty sums are
/// deterministic across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuledField {
    ModuleWidth,
    ModuleHeight,
    ModuleDepth,
    CurvatureRadius,
    TiltAngle,
    MullionSpacing,
    PanelThickness,
}

impl RuledField {
    /// All ruled fields, in scoring order
    pub const ALL: [RuledField; 7] = [
        RuledField::ModuleWidth,
        RuledField::ModuleHeight,
        RuledField::ModuleDepth,
        RuledField::CurvatureRadius,
        RuledField::TiltAngle,
        RuledField::MullionSpacing,
        RuledField::PanelThickness,
    ];

    /// Snake_case key matching the profile field name
    pub fn key(&self) -> &'static str {
        match self {
            RuledField::ModuleWidth => "module_width",
            RuledField::ModuleHeight => "module_height",
            RuledField::ModuleDepth => "module_depth",
            RuledField::CurvatureRadius => "curvature_radius",
            RuledField::TiltAngle => "tilt_angle",
            RuledField::MullionSpacing => "mullion_spacing",
            RuledField::PanelThickness => "panel_thickness",
        }
    }

    /// Read this field's value from a profile
    pub fn value(&self, profile: &DesignProfile) -> f64 {
        match self {
            RuledField::ModuleWidth => profile.module_width,
            RuledField::ModuleHeight => profile.module_height,
            RuledField::ModuleDepth => profile.module_depth,
            RuledField::CurvatureRadius => profile.curvature_radius,
            RuledField::TiltAngle => profile.tilt_angle,
            RuledField::MullionSpacing => profile.mullion_spacing,
            RuledField::PanelThickness => profile.panel_thickness,
        }
    }
}

/// Target band and scoring weight for one ruled parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterRule {
    /// Preferred value for the parameter
    pub target: f64,
    /// Lower bound of the acceptable band
    pub min: f64,
    /// Upper bound of the acceptable band
    pub max: f64,
    /// Relative weight in the penalty sum
    pub weight: f64,
}

/// Process-wide rule table, initialized once
pub static RULE_SET: Lazy<HashMap<RuledField, ParameterRule>> = Lazy::new(|| {
    let mut rules = HashMap::new();
    rules.insert(
        RuledField::ModuleWidth,
        ParameterRule { target: 1.2, min: 0.8, max: 1.8, weight: 1.0 },
    );
    rules.insert(
        RuledField::ModuleHeight,
        ParameterRule { target: 3.2, min: 2.4, max: 4.2, weight: 1.2 },
    );
    rules.insert(
        RuledField::ModuleDepth,
        ParameterRule { target: 0.26, min: 0.18, max: 0.35, weight: 0.9 },
    );
    rules.insert(
        RuledField::CurvatureRadius,
        ParameterRule { target: 36.0, min: 8.0, max: 60.0, weight: 1.1 },
    );
    rules.insert(
        RuledField::TiltAngle,
        ParameterRule { target: 4.5, min: -3.0, max: 9.0, weight: 0.8 },
    );
    rules.insert(
        RuledField::MullionSpacing,
        ParameterRule { target: 1.5, min: 1.0, max: 2.2, weight: 0.7 },
    );
    rules.insert(
        RuledField::PanelThickness,
        ParameterRule { target: 0.022, min: 0.016, max: 0.032, weight: 0.9 },
    );
    rules
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_ruled_field_has_a_rule() {
        for field in RuledField::ALL {
            assert!(RULE_SET.contains_key(&field), "no rule for {:?}", field);
        }
        assert_eq!(RULE_SET.len(), RuledField::ALL.len());
    }

    #[test]
    fn test_rule_bands_are_ordered() {
        for field in RuledField::ALL {
            let rule = RULE_SET[&field];
            assert!(rule.min < rule.max);
            assert!(rule.min <= rule.target && rule.target <= rule.max);
            assert!(rule.weight > 0.0);
        }
    }

    #[test]
    fn test_field_keys_match_profile_names() {
        assert_eq!(RuledField::ModuleWidth.key(), "module_width");
        assert_eq!(RuledField::PanelThickness.key(), "panel_thickness");
    }

    #[test]
    fn test_value_reads_profile_field() {
        let profile = crate::profile::build_profiles().remove(0);
        assert_eq!(RuledField::ModuleWidth.value(&profile), profile.module_width);
        assert_eq!(RuledField::TiltAngle.value(&profile), profile.tilt_angle);
    }
}
