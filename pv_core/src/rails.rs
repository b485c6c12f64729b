//! # Mounting Rail Plan
//!
//! Works out how many stock rails a row of panels needs. Panels sit on two
//! parallel rail rows, with a 25 mm gap before each panel and after the last.
//!
//! ## Example
//!
//! ```rust
//! use pv_core::rails::compute_rail_plan;
//!
//! // 13 panels of 1.14 m on 4.2 m rails
//! let plan = compute_rail_plan(13, 1.14, 4.2);
//! assert_eq!(plan.rail_count, 8);
//! assert!((plan.total_rail_run_m - 15.17).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Gap left between panels (and at both ends of the row), in meters
pub const PANEL_GAP_M: f64 = 0.025;

/// Number of parallel rail rows under every panel row
pub const RAIL_ROWS: u32 = 2;

/// Output of the rail calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RailResult {
    /// Stock rails to buy
    pub rail_count: u32,

    /// Linear run of one rail row in meters, unrounded
    pub total_rail_run_m: f64,
}

/// Compute the rail count and run length for a panel row.
///
/// The last partial rail is covered by one extra rail when the leftover is
/// under a quarter of a stock rail, otherwise by two. An exact fit leaves a
/// zero remainder and still takes one extra rail.
///
/// `rail_length_m` must be positive; callers validate through
/// [`InstallationParameters::validate`](crate::params::InstallationParameters::validate).
pub fn compute_rail_plan(panel_count: u32, panel_width_m: f64, rail_length_m: f64) -> RailResult {
    let panels = f64::from(panel_count);
    let raw_run = panels * panel_width_m + (panels + 1.0) * PANEL_GAP_M;

    let remainder = raw_run % rail_length_m;
    let extra_rails = if remainder * 2.0 < rail_length_m / 2.0 { 1 } else { 2 };
    let full_rails = (raw_run / rail_length_m).floor() as u32;
    let rail_count = full_rails.saturating_mul(RAIL_ROWS).saturating_add(extra_rails);

    debug!(
        raw_run_m = raw_run,
        remainder_m = remainder,
        full_rails,
        extra_rails,
        rail_count,
        "computed rail plan"
    );

    RailResult {
        rail_count,
        total_rail_run_m: raw_run,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_installation() {
        // raw = 13 * 1.14 + 14 * 0.025 = 15.17
        // 15.17 mod 4.2 = 2.57, 5.14 >= 2.1 -> two extra rails
        // floor(15.17 / 4.2) = 3 -> 3 * 2 + 2 = 8
        let plan = compute_rail_plan(13, 1.14, 4.2);
        assert_eq!(plan.rail_count, 8);
        assert!((plan.total_rail_run_m - 15.17).abs() < 1e-9);
    }

    #[test]
    fn test_run_formula_is_exact() {
        for n in 1..=40u32 {
            for &w in &[0.5, 1.0, 1.14, 1.3, 2.2] {
                let plan = compute_rail_plan(n, w, 4.2);
                let expected = f64::from(n) * w + f64::from(n + 1) * 0.025;
                assert_eq!(plan.total_rail_run_m, expected);
            }
        }
    }

    #[test]
    fn test_small_remainder_takes_one_extra_rail() {
        // raw = 4 * 1.0 + 5 * 0.025 = 4.125 on 4.0 m rails
        // remainder 0.125, 0.25 < 2.0 -> one extra rail
        let plan = compute_rail_plan(4, 1.0, 4.0);
        assert_eq!(plan.rail_count, 3);
    }

    #[test]
    fn test_exact_fit_still_adds_one_rail() {
        let run = compute_rail_plan(6, 1.14, 4.2).total_rail_run_m;

        // Rail exactly as long as the run: remainder 0, one full rail per row
        let plan = compute_rail_plan(6, 1.14, run);
        assert_eq!(plan.rail_count, 3);

        // Two rails per row exactly
        let plan = compute_rail_plan(6, 1.14, run / 2.0);
        assert_eq!(plan.rail_count, 5);
    }

    #[test]
    fn test_typical_rows_need_at_least_two_rails() {
        for n in 1..=60u32 {
            for &w in &[1.14, 1.7, 2.3] {
                let plan = compute_rail_plan(n, w, 4.2);
                assert!(plan.rail_count >= 2, "n={} w={} -> {}", n, w, plan.rail_count);
            }
        }
    }

    #[test]
    fn test_tiny_row_takes_single_rail() {
        // raw = 0.1 + 0.05 = 0.15, below a quarter rail
        let plan = compute_rail_plan(1, 0.1, 4.2);
        assert_eq!(plan.rail_count, 1);
    }

    #[test]
    fn test_rail_count_saturates() {
        let plan = compute_rail_plan(u32::MAX, 1000.0, 1e-6);
        assert_eq!(plan.rail_count, u32::MAX);
    }

    #[test]
    fn test_serialization() {
        let plan = compute_rail_plan(13, 1.14, 4.2);
        let json = serde_json::to_string(&plan).unwrap();
        let roundtrip: RailResult = serde_json::from_str(&json).unwrap();
        assert_eq!(plan, roundtrip);
    }
}
