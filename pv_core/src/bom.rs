//! # Bill of Materials
//!
//! Turns [`InstallationParameters`] into the ordered purchase list for a
//! pumping installation: panels and structure, solar wiring, DC protection,
//! grounding, signage, the pump circuit and the conduit run to the pump house.
//!
//! Lines are stored as `(ItemCode, Quantity)` pairs. Display labels are only
//! produced by [`BillOfMaterials::rows`], since a few of them embed the solar
//! cable diameter.
//!
//! ## Example
//!
//! ```rust
//! use pv_core::bom::{generate_bom, ItemCode, Quantity};
//! use pv_core::params::InstallationParameters;
//!
//! let bom = generate_bom(&InstallationParameters::default());
//! assert_eq!(bom.len(), 47);
//! assert_eq!(bom.get(ItemCode::MountingRails), Some(Quantity::Count(8)));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::CalcResult;
use crate::params::InstallationParameters;
use crate::rails::{compute_rail_plan, RailResult};

/// Slack added to every cable run for terminations, in meters
pub const CABLE_SLACK_M: f64 = 3.0;

/// Green ground cable bought per installation (5 m run + 2 m slack)
pub const GROUND_CABLE_M: f64 = 5.0 + 2.0;

/// Spacing between metal conduit clamps, in meters
const METAL_CLAMP_SPACING_M: f64 = 0.5;

/// Extra eye-terminal leads beyond one per panel
const SPARE_SHORT_LEADS: u32 = 3;

// ============================================================================
// Quantities
// ============================================================================

/// Amount of one purchase-list line.
///
/// Serializes as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    /// Whole units (pieces, bags, meters already rounded)
    Count(u32),
    /// Unrounded length in meters
    Length(f64),
}

impl Quantity {
    /// Numeric value, whatever the kind
    pub fn value(&self) -> f64 {
        match *self {
            Quantity::Count(n) => f64::from(n),
            Quantity::Length(m) => m,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Quantity::Count(n) => write!(f, "{}", n),
            Quantity::Length(m) => f.write_str(&format_decimal(m)),
        }
    }
}

/// Format a real number with at most two decimals and no trailing zeros.
///
/// ```rust
/// use pv_core::bom::format_decimal;
///
/// assert_eq!(format_decimal(6.0), "6");
/// assert_eq!(format_decimal(2.5), "2.5");
/// assert_eq!(format_decimal(13.126), "13.13");
/// ```
pub fn format_decimal(value: f64) -> String {
    let text = format!("{:.2}", value);
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Round half to even, the rounding the purchase list has always used
/// (6.5 becomes 6, 7.5 becomes 8).
fn round_count(value: f64) -> u32 {
    value.round_ties_even() as u32
}

// ============================================================================
// Item Codes
// ============================================================================

/// Stable identifier for every line of the purchase list, in list order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCode {
    SolarPanels,
    MountingRails,
    IntermediateClamps,
    EndClamps,
    LBrackets,
    Mc4ConnectorPairs,
    BlackSolarCable,
    RedSolarCable,
    PlasticTies,
    SolarCableGlands,
    OutdoorPanelBoard,
    FuseHolders,
    DcFuses,
    GroundRodClamp,
    CopperGroundBar,
    InspectionChamber,
    GreenGroundCable,
    CorrugatedConduit,
    MetalCadyClamps,
    FlexConduitTerminal,
    EyeTerminalLeads,
    ShortHexScrews,
    HydrocalBag,
    LogoSignage,
    PvBoardSignage,
    ChamberSignage,
    BoardSignage,
    PanelSignage,
    IrrigationPump,
    RvkCable,
    ConcentricClampTies,
    LentilScrewsSetA,
    RvkCableGlands,
    ModularPanelBoard,
    BipolarBreaker,
    DifferentialBreaker,
    OmegaChannel,
    EmtConduit,
    EmtElbows,
    EmtCouplings,
    PvcPipeCuts,
    ConcreteBag,
    DistributionBox,
    EmtTerminals,
    GromixFitting,
    CaddyClamps,
    LentilScrewsSetB,
}

impl ItemCode {
    /// Every item, in purchase-list order
    pub const ALL: [ItemCode; 47] = [
        ItemCode::SolarPanels,
        ItemCode::MountingRails,
        ItemCode::IntermediateClamps,
        ItemCode::EndClamps,
        ItemCode::LBrackets,
        ItemCode::Mc4ConnectorPairs,
        ItemCode::BlackSolarCable,
        ItemCode::RedSolarCable,
        ItemCode::PlasticTies,
        ItemCode::SolarCableGlands,
        ItemCode::OutdoorPanelBoard,
        ItemCode::FuseHolders,
        ItemCode::DcFuses,
        ItemCode::GroundRodClamp,
        ItemCode::CopperGroundBar,
        ItemCode::InspectionChamber,
        ItemCode::GreenGroundCable,
        ItemCode::CorrugatedConduit,
        ItemCode::MetalCadyClamps,
        ItemCode::FlexConduitTerminal,
        ItemCode::EyeTerminalLeads,
        ItemCode::ShortHexScrews,
        ItemCode::HydrocalBag,
        ItemCode::LogoSignage,
        ItemCode::PvBoardSignage,
        ItemCode::ChamberSignage,
        ItemCode::BoardSignage,
        ItemCode::PanelSignage,
        ItemCode::IrrigationPump,
        ItemCode::RvkCable,
        ItemCode::ConcentricClampTies,
        ItemCode::LentilScrewsSetA,
        ItemCode::RvkCableGlands,
        ItemCode::ModularPanelBoard,
        ItemCode::BipolarBreaker,
        ItemCode::DifferentialBreaker,
        ItemCode::OmegaChannel,
        ItemCode::EmtConduit,
        ItemCode::EmtElbows,
        ItemCode::EmtCouplings,
        ItemCode::PvcPipeCuts,
        ItemCode::ConcreteBag,
        ItemCode::DistributionBox,
        ItemCode::EmtTerminals,
        ItemCode::GromixFitting,
        ItemCode::CaddyClamps,
        ItemCode::LentilScrewsSetB,
    ];

    /// Label template; `{d}` stands for the solar cable diameter in mm.
    pub fn template(&self) -> &'static str {
        match self {
            ItemCode::SolarPanels => "Solar panels",
            ItemCode::MountingRails => "Mounting rails (4.2 m)",
            ItemCode::IntermediateClamps => "Intermediate clamps",
            ItemCode::EndClamps => "End clamps",
            ItemCode::LBrackets => "L-brackets",
            ItemCode::Mc4ConnectorPairs => "MC4 connector pairs",
            ItemCode::BlackSolarCable => "Black solar cable ø{d} (m)",
            ItemCode::RedSolarCable => "Red solar cable ø{d} (m)",
            ItemCode::PlasticTies => "Plastic ties ~15cm",
            ItemCode::SolarCableGlands => "Cable glands for solar cable N°{d}",
            ItemCode::OutdoorPanelBoard => "Outdoor 5-circuit panel board",
            ItemCode::FuseHolders => "Fuse holders",
            ItemCode::DcFuses => "15A DC fuses",
            ItemCode::GroundRodClamp => "Ground-rod clamp",
            ItemCode::CopperGroundBar => "1.5 m copper ground bar",
            ItemCode::InspectionChamber => "160mm inspection chamber",
            ItemCode::GreenGroundCable => "Green ground cable ø{d} (m)",
            ItemCode::CorrugatedConduit => "20mm corrugated metal conduit (m)",
            ItemCode::MetalCadyClamps => "20mm metal cady clamps",
            ItemCode::FlexConduitTerminal => "20mm flexible conduit terminal",
            ItemCode::EyeTerminalLeads => "20cm cable with eye terminal",
            ItemCode::ShortHexScrews => "Short hex lentil-head screws",
            ItemCode::HydrocalBag => "Small bag of hydrocal",
            ItemCode::LogoSignage => "Large logo signage",
            ItemCode::PvBoardSignage => "PV panel-board signage",
            ItemCode::ChamberSignage => "Inspection-chamber signage",
            ItemCode::BoardSignage => "Panel-board signage",
            ItemCode::PanelSignage => "Per-panel signage",
            ItemCode::IrrigationPump => "Irrigation pump",
            ItemCode::RvkCable => "RVK 4×2.5 cable (m)",
            ItemCode::ConcentricClampTies => "Small tie for concentric clamp",
            ItemCode::LentilScrewsSetA => "Lentil-head screws (set A)",
            ItemCode::RvkCableGlands => "Cable glands for RVK cord",
            ItemCode::ModularPanelBoard => "12-module panel board",
            ItemCode::BipolarBreaker => "20A bipolar breaker",
            ItemCode::DifferentialBreaker => "25A differential breaker",
            ItemCode::OmegaChannel => "Omega metal channel (3m)",
            ItemCode::EmtConduit => "EMT 25mm conduit (m)",
            ItemCode::EmtElbows => "EMT 25mm elbows",
            ItemCode::EmtCouplings => "EMT 25mm couplings",
            ItemCode::PvcPipeCuts => "90mm PVC pipe cut to 30cm",
            ItemCode::ConcreteBag => "Bag of water/aggregate/cement",
            ItemCode::DistributionBox => "Metal distribution box 100×100mm",
            ItemCode::EmtTerminals => "EMT 25mm terminals",
            ItemCode::GromixFitting => "Gromix fitting",
            ItemCode::CaddyClamps => "25mm Caddy-type clamps",
            ItemCode::LentilScrewsSetB => "Lentil-head screws (set B)",
        }
    }

    /// Display label with the cable diameter filled in
    pub fn label(&self, cable_diameter_mm: f64) -> String {
        let template = self.template();
        if template.contains("{d}") {
            template.replace("{d}", &format_decimal(cable_diameter_mm))
        } else {
            template.to_string()
        }
    }
}

// ============================================================================
// Bill of Materials
// ============================================================================

/// One computed line: what to buy and how much.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BomLine {
    pub code: ItemCode,
    pub quantity: Quantity,
}

/// A line with its label rendered, ready for a table or report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BomRow {
    pub code: ItemCode,
    pub label: String,
    pub quantity: Quantity,
}

/// The complete purchase list, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillOfMaterials {
    /// Cable diameter used when labels are rendered
    pub cable_diameter_mm: f64,

    /// Rail plan the structural lines were derived from
    pub rails: RailResult,

    /// Lines in purchase-list order
    pub lines: Vec<BomLine>,
}

impl BillOfMaterials {
    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True if the list has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate over the lines in order
    pub fn iter(&self) -> impl Iterator<Item = &BomLine> {
        self.lines.iter()
    }

    /// Quantity for an item, if present
    pub fn get(&self, code: ItemCode) -> Option<Quantity> {
        self.lines
            .iter()
            .find(|line| line.code == code)
            .map(|line| line.quantity)
    }

    /// Render labels and return `(code, label, quantity)` rows in order
    pub fn rows(&self) -> Vec<BomRow> {
        self.lines
            .iter()
            .map(|line| BomRow {
                code: line.code,
                label: line.code.label(self.cable_diameter_mm),
                quantity: line.quantity,
            })
            .collect()
    }
}

/// Compute the purchase list for a set of parameters.
///
/// Pure and total. Counts saturate at `u32::MAX` instead of overflowing, which
/// only happens outside the bounds [`InstallationParameters::validate`]
/// enforces. Use [`build_purchase_list`] when the parameters come straight
/// from a user.
pub fn generate_bom(params: &InstallationParameters) -> BillOfMaterials {
    let rails = compute_rail_plan(
        params.panel_count,
        params.panel_width_m,
        params.mounting_rail_length_m,
    );
    let run_m = rails.total_rail_run_m;
    let distance_m = params.casing_to_panel_distance_m;

    let solar_cable_m = run_m + distance_m + CABLE_SLACK_M;
    let short_leads = params.panel_count.saturating_add(SPARE_SHORT_LEADS);
    let hex_screws = short_leads.saturating_mul(2);
    let metal_clamp_raw = GROUND_CABLE_M / METAL_CLAMP_SPACING_M;
    let conduit_m = distance_m + CABLE_SLACK_M;
    let conduit_sections = round_count(conduit_m / 2.0);

    let panels = params.panel_count;
    let grounding = params.grounding_system_count;
    let ground_cable = GROUND_CABLE_M as u32;

    use ItemCode::*;
    use Quantity::{Count, Length};

    let lines: Vec<BomLine> = [
        (SolarPanels, Count(panels)),
        (MountingRails, Count(rails.rail_count)),
        (IntermediateClamps, Count(panels.saturating_mul(2).saturating_sub(2))),
        (EndClamps, Count(4)),
        (LBrackets, Count(params.structure_arch_count.saturating_mul(2))),
        (Mc4ConnectorPairs, Count(2)),
        (BlackSolarCable, Count(round_count(solar_cable_m))),
        (RedSolarCable, Count(round_count(solar_cable_m - run_m))),
        (PlasticTies, Count(round_count(run_m))),
        (SolarCableGlands, Count(2)),
        (OutdoorPanelBoard, Count(1)),
        (FuseHolders, Count(2)),
        (DcFuses, Count(2)),
        (GroundRodClamp, Count(grounding)),
        (CopperGroundBar, Count(grounding)),
        (InspectionChamber, Count(grounding)),
        (GreenGroundCable, Count(ground_cable)),
        (CorrugatedConduit, Count(ground_cable)),
        (MetalCadyClamps, Count((metal_clamp_raw * 0.5).trunc() as u32)),
        (FlexConduitTerminal, Count(grounding.saturating_mul(2))),
        (EyeTerminalLeads, Count(short_leads)),
        (ShortHexScrews, Count(hex_screws)),
        (HydrocalBag, Count(grounding)),
        (LogoSignage, Count(1)),
        (PvBoardSignage, Count(1)),
        (ChamberSignage, Count(grounding)),
        (BoardSignage, Count(1)),
        (PanelSignage, Count(panels)),
        (IrrigationPump, Count(1)),
        (RvkCable, Count(7)),
        (ConcentricClampTies, Count(6)),
        (LentilScrewsSetA, Count(6)),
        (RvkCableGlands, Count(2)),
        (ModularPanelBoard, Count(1)),
        (BipolarBreaker, Count(1)),
        (DifferentialBreaker, Count(1)),
        (OmegaChannel, Count(1)),
        (EmtConduit, Length(conduit_m)),
        (EmtElbows, Count(6)),
        (EmtCouplings, Count(conduit_sections.saturating_add(1))),
        (PvcPipeCuts, Count(conduit_sections.saturating_add(2))),
        (ConcreteBag, Count(round_count(conduit_m / 2.0 * 0.1))),
        (DistributionBox, Count(1)),
        (EmtTerminals, Count(2)),
        (GromixFitting, Count(1)),
        (CaddyClamps, Count(4)),
        (LentilScrewsSetB, Count(4)),
    ]
    .into_iter()
    .map(|(code, quantity)| BomLine { code, quantity })
    .collect();

    debug!(
        lines = lines.len(),
        rail_count = rails.rail_count,
        solar_cable_m,
        "generated bill of materials"
    );

    BillOfMaterials {
        cable_diameter_mm: params.solar_cable_diameter_mm,
        rails,
        lines,
    }
}

/// Validate the parameters, then compute the purchase list.
///
/// # Example
///
/// ```rust
/// use pv_core::bom::build_purchase_list;
/// use pv_core::params::InstallationParameters;
///
/// let bad = InstallationParameters {
///     mounting_rail_length_m: 0.0,
///     ..Default::default()
/// };
/// let err = build_purchase_list(&bad).unwrap_err();
/// assert_eq!(err.error_code(), "INVALID_PARAMETER");
/// ```
pub fn build_purchase_list(params: &InstallationParameters) -> CalcResult<BillOfMaterials> {
    params.validate()?;
    Ok(generate_bom(params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{MAX_COUNT, MAX_MEASURE};

    fn count(bom: &BillOfMaterials, code: ItemCode) -> u32 {
        match bom.get(code) {
            Some(Quantity::Count(n)) => n,
            other => panic!("{:?} is not a count: {:?}", code, other),
        }
    }

    #[test]
    fn test_default_list_has_47_lines_in_order() {
        let bom = generate_bom(&InstallationParameters::default());
        assert_eq!(bom.len(), 47);
        let codes: Vec<ItemCode> = bom.iter().map(|l| l.code).collect();
        assert_eq!(codes, ItemCode::ALL.to_vec());
    }

    #[test]
    fn test_default_quantities() {
        crate::logging::init_test();
        let bom = generate_bom(&InstallationParameters::default());

        assert_eq!(count(&bom, ItemCode::SolarPanels), 13);
        assert_eq!(count(&bom, ItemCode::MountingRails), 8);
        assert_eq!(count(&bom, ItemCode::IntermediateClamps), 24);
        assert_eq!(count(&bom, ItemCode::EndClamps), 4);
        assert_eq!(count(&bom, ItemCode::LBrackets), 10);
        // 15.17 + 10 + 3 = 28.17
        assert_eq!(count(&bom, ItemCode::BlackSolarCable), 28);
        assert_eq!(count(&bom, ItemCode::RedSolarCable), 13);
        assert_eq!(count(&bom, ItemCode::PlasticTies), 15);
        assert_eq!(count(&bom, ItemCode::GroundRodClamp), 2);
        assert_eq!(count(&bom, ItemCode::FlexConduitTerminal), 4);
        assert_eq!(count(&bom, ItemCode::EyeTerminalLeads), 16);
        assert_eq!(count(&bom, ItemCode::ShortHexScrews), 32);
        assert_eq!(count(&bom, ItemCode::PanelSignage), 13);
        assert_eq!(bom.get(ItemCode::EmtConduit), Some(Quantity::Length(13.0)));
        // 13 / 2 = 6.5 rounds to 6
        assert_eq!(count(&bom, ItemCode::EmtCouplings), 7);
        assert_eq!(count(&bom, ItemCode::PvcPipeCuts), 8);
        // 0.65 rounds to 1
        assert_eq!(count(&bom, ItemCode::ConcreteBag), 1);
        assert_eq!(count(&bom, ItemCode::LentilScrewsSetA), 6);
        assert_eq!(count(&bom, ItemCode::LentilScrewsSetB), 4);
    }

    #[test]
    fn test_generation_is_pure() {
        let params = InstallationParameters::default();
        let first = generate_bom(&params);
        let second = generate_bom(&params);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first.rows()).unwrap(),
            serde_json::to_string(&second.rows()).unwrap()
        );
    }

    #[test]
    fn test_single_panel_has_no_intermediate_clamps() {
        let params = InstallationParameters {
            panel_count: 1,
            ..Default::default()
        };
        let bom = generate_bom(&params);
        assert_eq!(count(&bom, ItemCode::IntermediateClamps), 0);
    }

    #[test]
    fn test_metal_clamps_are_constant() {
        // 7 m / 0.5 m = 14 clamp points, halved and truncated
        for panels in [1, 5, 13, 40] {
            for distance in [0.0, 10.0, 57.3] {
                for grounding in [0, 2, 9] {
                    let params = InstallationParameters {
                        panel_count: panels,
                        casing_to_panel_distance_m: distance,
                        grounding_system_count: grounding,
                        ..Default::default()
                    };
                    let bom = generate_bom(&params);
                    assert_eq!(count(&bom, ItemCode::MetalCadyClamps), 7);
                    assert_eq!(count(&bom, ItemCode::GreenGroundCable), 7);
                    assert_eq!(count(&bom, ItemCode::CorrugatedConduit), 7);
                }
            }
        }
    }

    #[test]
    fn test_half_rounds_to_even() {
        // (11 + 3) / 2 = 7 exactly, (12 + 3) / 2 = 7.5 -> 8, (10 + 3) / 2 = 6.5 -> 6
        let with_distance = |d: f64| {
            generate_bom(&InstallationParameters {
                casing_to_panel_distance_m: d,
                ..Default::default()
            })
        };
        assert_eq!(count(&with_distance(11.0), ItemCode::EmtCouplings), 8);
        assert_eq!(count(&with_distance(12.0), ItemCode::EmtCouplings), 9);
        assert_eq!(count(&with_distance(10.0), ItemCode::EmtCouplings), 7);
        assert_eq!(count(&with_distance(2.5), ItemCode::ConcreteBag), 0);
    }

    #[test]
    fn test_fractional_distance_keeps_conduit_length() {
        let bom = generate_bom(&InstallationParameters {
            casing_to_panel_distance_m: 12.25,
            ..Default::default()
        });
        assert_eq!(bom.get(ItemCode::EmtConduit), Some(Quantity::Length(15.25)));
        assert_eq!(bom.get(ItemCode::EmtConduit).unwrap().to_string(), "15.25");
    }

    #[test]
    fn test_labels_embed_cable_diameter() {
        let bom = generate_bom(&InstallationParameters {
            solar_cable_diameter_mm: 4.0,
            ..Default::default()
        });
        let rows = bom.rows();
        assert_eq!(rows[6].label, "Black solar cable ø4 (m)");
        assert_eq!(rows[7].label, "Red solar cable ø4 (m)");
        assert_eq!(rows[9].label, "Cable glands for solar cable N°4");
        assert_eq!(rows[16].label, "Green ground cable ø4 (m)");

        let rows = generate_bom(&InstallationParameters {
            solar_cable_diameter_mm: 2.5,
            ..Default::default()
        })
        .rows();
        assert_eq!(rows[6].label, "Black solar cable ø2.5 (m)");
    }

    #[test]
    fn test_both_lentil_screw_rows_are_kept() {
        let rows = generate_bom(&InstallationParameters::default()).rows();
        let lentil: Vec<&BomRow> = rows
            .iter()
            .filter(|r| r.label.starts_with("Lentil-head screws"))
            .collect();
        assert_eq!(lentil.len(), 2);
        assert_eq!(lentil[0].quantity, Quantity::Count(6));
        assert_eq!(lentil[1].quantity, Quantity::Count(4));
        assert_eq!(rows.last().map(|r| r.code), Some(ItemCode::LentilScrewsSetB));
    }

    #[test]
    fn test_labels_are_unique() {
        let rows = generate_bom(&InstallationParameters::default()).rows();
        let mut labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), 47);
    }

    #[test]
    fn test_build_purchase_list_validates() {
        let params = InstallationParameters {
            mounting_rail_length_m: -1.0,
            ..Default::default()
        };
        let err = build_purchase_list(&params).unwrap_err();
        assert_eq!(err.field(), Some("mounting_rail_length_m"));

        assert!(build_purchase_list(&InstallationParameters::default()).is_ok());
    }

    #[test]
    fn test_huge_inputs_rejected_before_generation() {
        let arches = InstallationParameters {
            structure_arch_count: 3_000_000_000,
            ..Default::default()
        };
        assert_eq!(
            build_purchase_list(&arches).unwrap_err().field(),
            Some("structure_arch_count")
        );

        let distance = InstallationParameters {
            casing_to_panel_distance_m: 1e10,
            ..Default::default()
        };
        assert_eq!(
            build_purchase_list(&distance).unwrap_err().field(),
            Some("casing_to_panel_distance_m")
        );
    }

    #[test]
    fn test_unvalidated_extremes_saturate() {
        let params = InstallationParameters {
            panel_count: u32::MAX,
            structure_arch_count: u32::MAX,
            grounding_system_count: u32::MAX,
            casing_to_panel_distance_m: 1e12,
            ..Default::default()
        };
        let bom = generate_bom(&params);
        assert_eq!(bom.len(), 47);
        assert_eq!(bom.get(ItemCode::LBrackets), Some(Quantity::Count(u32::MAX)));
        assert_eq!(bom.get(ItemCode::ShortHexScrews), Some(Quantity::Count(u32::MAX)));
        assert_eq!(bom.get(ItemCode::PvcPipeCuts), Some(Quantity::Count(u32::MAX)));
        assert_eq!(bom.get(ItemCode::FlexConduitTerminal), Some(Quantity::Count(u32::MAX)));
    }

    #[test]
    fn test_largest_valid_installation_generates() {
        let params = InstallationParameters {
            panel_count: MAX_COUNT,
            structure_arch_count: MAX_COUNT,
            grounding_system_count: MAX_COUNT,
            casing_to_panel_distance_m: MAX_MEASURE,
            ..Default::default()
        };
        let bom = build_purchase_list(&params).unwrap();
        assert_eq!(bom.get(ItemCode::ShortHexScrews), Some(Quantity::Count(200_006)));
        // 100_003 / 2 = 50_001.5 rounds to 50_002 sections
        assert_eq!(bom.get(ItemCode::EmtCouplings), Some(Quantity::Count(50_003)));
    }

    #[test]
    fn test_quantity_json_is_plain_number() {
        assert_eq!(serde_json::to_string(&Quantity::Count(8)).unwrap(), "8");
        assert_eq!(serde_json::to_string(&Quantity::Length(13.5)).unwrap(), "13.5");

        let bom = generate_bom(&InstallationParameters::default());
        let json = serde_json::to_string(&bom).unwrap();
        let roundtrip: BillOfMaterials = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.len(), 47);
        assert_eq!(roundtrip.get(ItemCode::MountingRails), Some(Quantity::Count(8)));
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(13.0), "13");
        assert_eq!(format_decimal(0.0), "0");
        assert_eq!(format_decimal(15.25), "15.25");
        assert_eq!(format_decimal(1.10), "1.1");
    }
}
