//! # Installation Parameters
//!
//! The eight site measurements a purchase list is computed from. A value of
//! [`InstallationParameters`] is built once per request (from the GUI form, CLI
//! flags, or a JSON file) and never mutated by the calculators.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "panel_count": 13,
//!   "panel_width_m": 1.14,
//!   "mounting_rail_length_m": 4.2,
//!   "structure_arch_count": 5,
//!   "solar_cable_diameter_mm": 6.0,
//!   "casing_to_panel_distance_m": 10.0,
//!   "fuse_rating_a": 15.0,
//!   "grounding_system_count": 2
//! }
//! ```
//!
//! Missing fields fall back to the defaults, so `{"panel_count": 20}` is a
//! complete parameter file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{CalcError, CalcResult};
use crate::rails::PANEL_GAP_M;

/// Upper bound for the panel, arch and grounding counts.
pub const MAX_COUNT: u32 = 100_000;

/// Upper bound for every length, diameter and rating, in its own unit.
pub const MAX_MEASURE: f64 = 100_000.0;

/// Upper bound for whole stock rails along one row.
pub const MAX_RAILS_PER_ROW: f64 = 1_000_000.0;

/// Site parameters for one purchase-list computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallationParameters {
    /// Number of solar panels (at least 1)
    pub panel_count: u32,

    /// Width of a single panel along the rail, in meters
    pub panel_width_m: f64,

    /// Length of one stock mounting rail, in meters
    pub mounting_rail_length_m: f64,

    /// Number of support arches in the structure
    pub structure_arch_count: u32,

    /// Solar cable cross-section diameter in mm. Only used in item labels.
    pub solar_cable_diameter_mm: f64,

    /// Cable run from the pump house to the panel array, in meters
    pub casing_to_panel_distance_m: f64,

    /// Fuse rating in amperes. Shown on reports, not used in quantities.
    pub fuse_rating_a: f64,

    /// Number of independent grounding systems
    pub grounding_system_count: u32,
}

impl Default for InstallationParameters {
    fn default() -> Self {
        InstallationParameters {
            panel_count: 13,
            panel_width_m: 1.14,
            mounting_rail_length_m: 4.2,
            structure_arch_count: 5,
            solar_cable_diameter_mm: 6.0,
            casing_to_panel_distance_m: 10.0,
            fuse_rating_a: 15.0,
            grounding_system_count: 2,
        }
    }
}

impl InstallationParameters {
    /// Validate bounds before the values reach the calculators.
    ///
    /// A zero rail length would otherwise turn the rail plan into NaN/inf.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pv_core::params::InstallationParameters;
    ///
    /// let mut params = InstallationParameters::default();
    /// assert!(params.validate().is_ok());
    ///
    /// params.mounting_rail_length_m = 0.0;
    /// assert!(params.validate().is_err());
    /// ```
    pub fn validate(&self) -> CalcResult<()> {
        let result = self.check_bounds();
        if let Err(ref e) = result {
            warn!(error = %e, "rejected installation parameters");
        }
        result
    }

    fn check_bounds(&self) -> CalcResult<()> {
        if self.panel_count < 1 {
            return Err(CalcError::invalid_parameter(
                "panel_count",
                self.panel_count.to_string(),
                "At least one panel is required",
            ));
        }
        require_at_most("panel_count", self.panel_count)?;
        require_at_most("structure_arch_count", self.structure_arch_count)?;
        require_at_most("grounding_system_count", self.grounding_system_count)?;

        require_positive("panel_width_m", self.panel_width_m, "Panel width must be positive")?;
        require_positive(
            "mounting_rail_length_m",
            self.mounting_rail_length_m,
            "Rail length must be positive",
        )?;
        require_positive(
            "solar_cable_diameter_mm",
            self.solar_cable_diameter_mm,
            "Cable diameter must be positive",
        )?;
        if !self.casing_to_panel_distance_m.is_finite() || self.casing_to_panel_distance_m < 0.0 {
            return Err(CalcError::invalid_parameter(
                "casing_to_panel_distance_m",
                self.casing_to_panel_distance_m.to_string(),
                "Distance cannot be negative",
            ));
        }
        if self.casing_to_panel_distance_m > MAX_MEASURE {
            return Err(CalcError::invalid_parameter(
                "casing_to_panel_distance_m",
                self.casing_to_panel_distance_m.to_string(),
                format!("Distance cannot exceed {}", MAX_MEASURE),
            ));
        }
        require_positive("fuse_rating_a", self.fuse_rating_a, "Fuse rating must be positive")?;

        // Whole rails per row feed the u32 rail count
        let panels = f64::from(self.panel_count);
        let run_m = panels * self.panel_width_m + (panels + 1.0) * PANEL_GAP_M;
        if run_m / self.mounting_rail_length_m > MAX_RAILS_PER_ROW {
            return Err(CalcError::invalid_parameter(
                "mounting_rail_length_m",
                self.mounting_rail_length_m.to_string(),
                format!("Rail is too short for a {} m row", run_m),
            ));
        }
        Ok(())
    }
}

fn require_at_most(field: &str, value: u32) -> CalcResult<()> {
    if value > MAX_COUNT {
        return Err(CalcError::invalid_parameter(
            field,
            value.to_string(),
            format!("Count cannot exceed {}", MAX_COUNT),
        ));
    }
    Ok(())
}

fn require_positive(field: &str, value: f64, reason: &str) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_parameter(field, value.to_string(), reason));
    }
    if value > MAX_MEASURE {
        return Err(CalcError::invalid_parameter(
            field,
            value.to_string(),
            format!("Value cannot exceed {}", MAX_MEASURE),
        ));
    }
    Ok(())
}

/// Read parameters from a JSON file without validating them. Fields absent
/// from the file keep their defaults.
///
/// Use this when more values are layered on top before the final
/// [`InstallationParameters::validate`], as the CLI does with its flags.
pub fn read_parameters(path: &Path) -> CalcResult<InstallationParameters> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })
}

/// Load parameters from a JSON file. Fields absent from the file keep their
/// defaults. The result is validated.
pub fn load_parameters(path: &Path) -> CalcResult<InstallationParameters> {
    let params = read_parameters(path)?;
    params.validate()?;
    Ok(params)
}
