//! # Facade Analytics CLI
//!
//! Terminal front-end for the facade analytics pipeline. Prompts for the key
//! design parameters (defaulting to the DX-01 reference scenario), runs all
//! five analysis stages, and prints a report plus the JSON dataset payload.

use std::io::{self, BufRead, Write};

use facade_core::analysis::{
    analyze_parameter_integrity, build_data_association, compute_error_correction,
    generate_unit_geometry, run_structural_verification,
};
use facade_core::dataset::build_dataset;
use facade_core::profile::build_profiles;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() {
    println!("Facade Analytics CLI - Curtain Wall Unit Metrics");
    println!("================================================");
    println!();

    let mut profile = build_profiles().remove(0);
    println!("Base scenario: {} ({})", profile.name, profile.id);
    println!();

    profile.module_width = prompt_f64("Module width (m) [1.25]: ", profile.module_width);
    profile.module_height = prompt_f64("Module height (m) [3.45]: ", profile.module_height);
    profile.curvature_radius =
        prompt_f64("Curvature radius (m) [28.0]: ", profile.curvature_radius);
    profile.tilt_angle = prompt_f64("Tilt angle (deg) [3.5]: ", profile.tilt_angle);
    profile.wind_speed = prompt_f64("Wind speed (m/s) [34.0]: ", profile.wind_speed);
    profile.thermal_gradient =
        prompt_f64("Thermal gradient (C) [16.0]: ", profile.thermal_gradient);

    println!();
    println!("Running analysis pipeline...");
    println!();

    let report = analyze_parameter_integrity(&profile)
        .and_then(|integrity| {
            let geometry = generate_unit_geometry(&profile)?;
            let structural = run_structural_verification(&profile, &geometry)?;
            let corrections = compute_error_correction(&profile, &geometry)?;
            let association = build_data_association(&profile, &corrections)?;
            Ok((integrity, geometry, structural, corrections, association))
        });

    match report {
        Ok((integrity, geometry, structural, corrections, association)) => {
            println!("═══════════════════════════════════════");
            println!("  FACADE UNIT ANALYSIS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Integrity:");
            println!("  Completeness: {:.1}", integrity.completeness_score);
            println!("  Rule match:   {:.1} {}",
                integrity.rule_match_score,
                status_icon(integrity.rule_match_score > 72.0)
            );
            println!("  {}", integrity.notes);
            println!();
            println!("Geometry:");
            println!("  Area:   {:.3} m²", geometry.projected_area);
            println!("  Volume: {:.3} m³", geometry.envelope_volume);
            println!("  Frame:  {:.2} kg ({})", geometry.frame_weight, profile.material);
            println!();
            println!("Structural:");
            println!("  Wind pressure: {:.3} kN/m²", structural.wind_pressure);
            println!("  Dead load:     {:.3} kN", structural.dead_load);
            println!("  Stability:     {:.1}/100 {}",
                structural.stability_index,
                status_icon(structural.stability_index >= 50.0)
            );
            println!();
            println!("Correction:");
            println!("  Residual deviation:   {:.3} mm", corrections.residual_deviation);
            println!("  Assembly suitability: {:.1}/100 {}",
                corrections.assembly_suitability,
                status_icon(corrections.assembly_suitability >= 50.0)
            );
            println!();
            println!("Association:");
            for entry in &association.correlations {
                println!("  {:<14} correlation {:.3}", entry.stage, entry.correlation);
            }
            println!();
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for dashboard/API use):");
            match build_dataset(Some(&[profile])) {
                Ok(dataset) => {
                    if let Ok(json) = serde_json::to_string_pretty(&dataset) {
                        println!("{}", json);
                    }
                }
                Err(e) => eprintln!("Error building dataset: {}", e),
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[LOW]" }
}
