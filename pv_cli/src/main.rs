//! # Cubica CLI
//!
//! Command-line front end for the purchase-list engine. Parameters come from
//! defaults, an optional JSON file (`--params`), individual flags, or
//! interactive prompts, in increasing order of precedence.
//!
//! ```text
//! cubica --panels 20 --distance 35 --pdf lista.pdf
//! cubica --params site.json --json
//! cubica --interactive
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing::debug;

use pv_core::bom::{build_purchase_list, BillOfMaterials, BomRow};
use pv_core::errors::{CalcError, CalcResult};
use pv_core::export::{write_pdf, DEFAULT_PDF_FILE_NAME};
use pv_core::form::{FieldId, ParameterForm};
use pv_core::params::{read_parameters, InstallationParameters};
use pv_core::pdf::render_bom_pdf;
use pv_core::rails::RailResult;
use pv_core::table::render_text_table;

#[derive(Parser, Debug)]
#[command(
    name = "cubica",
    version,
    about = "Purchase list for an off-grid PV irrigation pump"
)]
struct Cli {
    #[arg(long, value_name = "FILE", help = "JSON file with installation parameters")]
    params: Option<PathBuf>,

    #[arg(long, help = "Number of solar panels [default: 13]")]
    panels: Option<u32>,

    #[arg(long, value_name = "M", help = "Width of each panel in meters [default: 1.14]")]
    panel_width: Option<f64>,

    #[arg(long, value_name = "M", help = "Mounting rail length in meters [default: 4.2]")]
    rail_length: Option<f64>,

    #[arg(long, help = "Number of structure arches [default: 5]")]
    arches: Option<u32>,

    #[arg(long, value_name = "MM", help = "Solar cable diameter in mm [default: 6]")]
    cable_diameter: Option<f64>,

    #[arg(long, value_name = "M", help = "Distance from pump house to panels in meters [default: 10]")]
    distance: Option<f64>,

    #[arg(long, value_name = "A", help = "Fuse rating in amperes [default: 15]")]
    fuse_rating: Option<f64>,

    #[arg(long, help = "Number of grounding systems [default: 2]")]
    grounding: Option<u32>,

    #[arg(short, long, help = "Prompt for every parameter")]
    interactive: bool,

    #[arg(long, help = "Output machine-readable JSON")]
    json: bool,

    #[arg(
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = DEFAULT_PDF_FILE_NAME,
        help = "Also export the list as PDF"
    )]
    pdf: Option<PathBuf>,
}

impl Cli {
    /// Resolve defaults, file and flags into one set of parameters.
    ///
    /// Not validated here, so a flag can still correct a bad file value.
    fn base_parameters(&self) -> CalcResult<InstallationParameters> {
        let mut params = match &self.params {
            Some(path) => read_parameters(path)?,
            None => InstallationParameters::default(),
        };

        if let Some(v) = self.panels {
            params.panel_count = v;
        }
        if let Some(v) = self.panel_width {
            params.panel_width_m = v;
        }
        if let Some(v) = self.rail_length {
            params.mounting_rail_length_m = v;
        }
        if let Some(v) = self.arches {
            params.structure_arch_count = v;
        }
        if let Some(v) = self.cable_diameter {
            params.solar_cable_diameter_mm = v;
        }
        if let Some(v) = self.distance {
            params.casing_to_panel_distance_m = v;
        }
        if let Some(v) = self.fuse_rating {
            params.fuse_rating_a = v;
        }
        if let Some(v) = self.grounding {
            params.grounding_system_count = v;
        }

        Ok(params)
    }
}

/// JSON document printed with `--json`
#[derive(Serialize)]
struct JsonReport<'a> {
    parameters: &'a InstallationParameters,
    rails: RailResult,
    items: Vec<BomRow>,
}

/// Ask for one field, keeping `current` on an empty line
fn prompt_field(field: FieldId, current: &str, input: &mut impl BufRead, out: &mut impl Write) -> String {
    let unit = field.unit();
    let shown = if unit.is_empty() {
        write!(out, "{} [{}]: ", field.label(), current)
    } else {
        write!(out, "{} ({}) [{}]: ", field.label(), unit, current)
    };
    if shown.and_then(|_| out.flush()).is_err() {
        return current.to_string();
    }

    let mut line = String::new();
    if input.read_line(&mut line).is_err() {
        return current.to_string();
    }

    let trimmed = line.trim();
    if trimmed.is_empty() {
        current.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Prompt for every field on `out`, reading answers from `input`
fn prompt_parameters(
    start: &InstallationParameters,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> CalcResult<InstallationParameters> {
    let mut form = ParameterForm::from_parameters(start);
    for field in FieldId::ALL {
        let value = prompt_field(field, form.value(field), input, out);
        form.set(field, value);
    }
    let _ = writeln!(out);
    form.to_parameters()
}

fn print_table(bom: &BillOfMaterials) {
    println!("═══════════════════════════════════════");
    println!("  PURCHASE LIST - PV IRRIGATION PUMP");
    println!("═══════════════════════════════════════");
    println!();
    print!("{}", render_text_table(bom));
    println!();
    println!(
        "Rails: {} for a {:.2} m run",
        bom.rails.rail_count, bom.rails.total_rail_run_m
    );
}

fn run(cli: &Cli) -> CalcResult<()> {
    let mut params = cli.base_parameters()?;
    if cli.interactive {
        let mut input = io::stdin().lock();
        // Keep stdout a clean JSON document
        params = if cli.json {
            prompt_parameters(&params, &mut input, &mut io::stderr())?
        } else {
            prompt_parameters(&params, &mut input, &mut io::stdout())?
        };
    }
    debug!(?params, "resolved parameters");

    let bom = build_purchase_list(&params)?;

    if cli.json {
        let report = JsonReport {
            parameters: &params,
            rails: bom.rails,
            items: bom.rows(),
        };
        let json = serde_json::to_string_pretty(&report).map_err(|e| CalcError::SerializationError {
            reason: e.to_string(),
        })?;
        println!("{}", json);
    } else {
        print_table(&bom);
    }

    if let Some(path) = &cli.pdf {
        let bytes = render_bom_pdf(&bom, &params)?;
        write_pdf(&bytes, path)?;
        if !cli.json {
            println!();
            println!("PDF written to {}", path.display());
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    pv_core::logging::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}
