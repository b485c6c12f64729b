//! UI module for the Cubica GUI
//!
//! # Panel Structure
//! - `toolbar` - Title row and Generate / Reset / Export PDF buttons
//! - `input_panel` - Left panel: the eight installation parameters
//! - `results_panel` - Right panel: purchase list table or validation error
//! - `status_bar` - Bottom status messages

pub mod input_panel;
pub mod results_panel;
pub mod status_bar;
pub mod toolbar;
