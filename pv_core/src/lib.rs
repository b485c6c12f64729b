//! # pv_core - Purchase List Engine for Off-Grid PV Pumping
//!
//! `pv_core` is the computational heart of Cubica. From eight site
//! measurements it works out the mounting rail plan and the full purchase
//! list (47 lines) for a solar-powered irrigation pump, and renders that list
//! as a text table or a PDF report.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions from parameters to purchase list
//! - **JSON-First**: Parameters, lists and errors implement Serialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Separated I/O**: Computing, rendering and writing are separate steps
//!
//! ## Quick Start
//!
//! ```rust
//! use pv_core::bom::build_purchase_list;
//! use pv_core::params::InstallationParameters;
//! use pv_core::table::render_text_table;
//!
//! let params = InstallationParameters::default();
//! let bom = build_purchase_list(&params).unwrap();
//! println!("{}", render_text_table(&bom));
//! ```
//!
//! ## Modules
//!
//! - [`params`] - Installation parameters, defaults and validation
//! - [`form`] - Text form model used by the GUI and interactive CLI
//! - [`rails`] - Mounting rail calculator
//! - [`bom`] - Purchase list generator
//! - [`table`] - Plain-text table rendering
//! - [`pdf`] - PDF rendering via Typst
//! - [`export`] - Atomic PDF file output
//! - [`errors`] - Structured error types
//! - [`logging`] - Tracing subscriber setup

pub mod bom;
pub mod errors;
pub mod export;
pub mod form;
pub mod logging;
pub mod params;
pub mod pdf;
pub mod rails;
pub mod table;

// Re-export commonly used types at crate root for convenience
pub use bom::{build_purchase_list, generate_bom, BillOfMaterials, BomLine, BomRow, ItemCode, Quantity};
pub use errors::{CalcError, CalcResult};
pub use export::{export_purchase_list, write_pdf, DEFAULT_PDF_FILE_NAME};
pub use params::InstallationParameters;
pub use rails::{compute_rail_plan, RailResult};
