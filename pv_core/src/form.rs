//! # Parameter Form
//!
//! Text-level model of the input form shared by the GUI and the interactive
//! CLI. Widgets edit strings; [`ParameterForm::to_parameters`] turns them into
//! an immutable [`InstallationParameters`] once per request.
//!
//! ## Example
//!
//! ```rust
//! use pv_core::form::{FieldId, ParameterForm};
//!
//! let mut form = ParameterForm::new();
//! form.set(FieldId::PanelCount, "20");
//! let params = form.to_parameters().unwrap();
//! assert_eq!(params.panel_count, 20);
//!
//! form.set(FieldId::MountingRailLength, "abc");
//! assert!(form.to_parameters().is_err());
//! ```

use crate::bom::format_decimal;
use crate::errors::{CalcError, CalcResult};
use crate::params::InstallationParameters;

/// One input field of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    PanelCount,
    PanelWidth,
    MountingRailLength,
    StructureArchCount,
    SolarCableDiameter,
    CasingToPanelDistance,
    FuseRating,
    GroundingSystemCount,
}

impl FieldId {
    /// Fields in form order
    pub const ALL: [FieldId; 8] = [
        FieldId::PanelCount,
        FieldId::PanelWidth,
        FieldId::MountingRailLength,
        FieldId::StructureArchCount,
        FieldId::SolarCableDiameter,
        FieldId::CasingToPanelDistance,
        FieldId::FuseRating,
        FieldId::GroundingSystemCount,
    ];

    /// Prompt shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::PanelCount => "Number of solar panels",
            FieldId::PanelWidth => "Width of each panel",
            FieldId::MountingRailLength => "Mounting rail length",
            FieldId::StructureArchCount => "Number of structure arches",
            FieldId::SolarCableDiameter => "Solar cable diameter",
            FieldId::CasingToPanelDistance => "Distance from pump house to panels",
            FieldId::FuseRating => "Fuse rating",
            FieldId::GroundingSystemCount => "Grounding systems",
        }
    }

    /// Unit suffix, empty for plain counts
    pub fn unit(&self) -> &'static str {
        match self {
            FieldId::PanelWidth | FieldId::MountingRailLength | FieldId::CasingToPanelDistance => "m",
            FieldId::SolarCableDiameter => "mm",
            FieldId::FuseRating => "A",
            FieldId::PanelCount | FieldId::StructureArchCount | FieldId::GroundingSystemCount => "",
        }
    }

    /// Field name in [`InstallationParameters`] (and its JSON form)
    pub fn key(&self) -> &'static str {
        match self {
            FieldId::PanelCount => "panel_count",
            FieldId::PanelWidth => "panel_width_m",
            FieldId::MountingRailLength => "mounting_rail_length_m",
            FieldId::StructureArchCount => "structure_arch_count",
            FieldId::SolarCableDiameter => "solar_cable_diameter_mm",
            FieldId::CasingToPanelDistance => "casing_to_panel_distance_m",
            FieldId::FuseRating => "fuse_rating_a",
            FieldId::GroundingSystemCount => "grounding_system_count",
        }
    }

    /// Whether the field only accepts whole numbers
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            FieldId::PanelCount | FieldId::StructureArchCount | FieldId::GroundingSystemCount
        )
    }

    /// Default value as the form shows it
    pub fn default_text(&self) -> String {
        text_for(&InstallationParameters::default(), *self)
    }

    fn index(&self) -> usize {
        match self {
            FieldId::PanelCount => 0,
            FieldId::PanelWidth => 1,
            FieldId::MountingRailLength => 2,
            FieldId::StructureArchCount => 3,
            FieldId::SolarCableDiameter => 4,
            FieldId::CasingToPanelDistance => 5,
            FieldId::FuseRating => 6,
            FieldId::GroundingSystemCount => 7,
        }
    }
}

fn text_for(params: &InstallationParameters, field: FieldId) -> String {
    match field {
        FieldId::PanelCount => params.panel_count.to_string(),
        FieldId::PanelWidth => format_decimal(params.panel_width_m),
        FieldId::MountingRailLength => format_decimal(params.mounting_rail_length_m),
        FieldId::StructureArchCount => params.structure_arch_count.to_string(),
        FieldId::SolarCableDiameter => format_decimal(params.solar_cable_diameter_mm),
        FieldId::CasingToPanelDistance => format_decimal(params.casing_to_panel_distance_m),
        FieldId::FuseRating => format_decimal(params.fuse_rating_a),
        FieldId::GroundingSystemCount => params.grounding_system_count.to_string(),
    }
}

/// Current text of every form field.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterForm {
    values: [String; 8],
}

impl Default for ParameterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterForm {
    /// Form pre-filled with the default parameters
    pub fn new() -> Self {
        Self::from_parameters(&InstallationParameters::default())
    }

    /// Form pre-filled from existing parameters
    pub fn from_parameters(params: &InstallationParameters) -> Self {
        ParameterForm {
            values: FieldId::ALL.map(|field| text_for(params, field)),
        }
    }

    /// Current text of a field
    pub fn value(&self, field: FieldId) -> &str {
        &self.values[field.index()]
    }

    /// Replace the text of a field
    pub fn set(&mut self, field: FieldId, text: impl Into<String>) {
        self.values[field.index()] = text.into();
    }

    /// Restore every field to its default
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Parse and validate the form into parameters.
    ///
    /// Integer fields must be non-negative whole numbers. Real fields accept a
    /// comma as decimal separator. The first failing field is reported.
    pub fn to_parameters(&self) -> CalcResult<InstallationParameters> {
        let params = InstallationParameters {
            panel_count: self.parse_count(FieldId::PanelCount)?,
            panel_width_m: self.parse_real(FieldId::PanelWidth)?,
            mounting_rail_length_m: self.parse_real(FieldId::MountingRailLength)?,
            structure_arch_count: self.parse_count(FieldId::StructureArchCount)?,
            solar_cable_diameter_mm: self.parse_real(FieldId::SolarCableDiameter)?,
            casing_to_panel_distance_m: self.parse_real(FieldId::CasingToPanelDistance)?,
            fuse_rating_a: self.parse_real(FieldId::FuseRating)?,
            grounding_system_count: self.parse_count(FieldId::GroundingSystemCount)?,
        };
        params.validate()?;
        Ok(params)
    }

    fn parse_count(&self, field: FieldId) -> CalcResult<u32> {
        let text = self.value(field).trim();
        text.parse::<u32>().map_err(|_| {
            CalcError::invalid_parameter(field.key(), text, "Expected a non-negative whole number")
        })
    }

    fn parse_real(&self, field: FieldId) -> CalcResult<f64> {
        let text = self.value(field).trim();
        let value = text
            .replace(',', ".")
            .parse::<f64>()
            .map_err(|_| CalcError::invalid_parameter(field.key(), text, "Expected a number"))?;
        if !value.is_finite() {
            return Err(CalcError::invalid_parameter(field.key(), text, "Expected a finite number"));
        }
        Ok(value)
    }
}
