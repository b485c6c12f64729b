//! # PDF Generation Module
//!
//! Renders a purchase list to PDF using Typst.
//!
//! ## Architecture
//!
//! - The Typst template is embedded as a string constant
//! - Data is injected via string replacement before compilation
//! - Output is raw PDF bytes (`Vec<u8>`); writing them out is
//!   [`export`](crate::export)'s job
//!
//! ## Example
//!
//! ```rust,no_run
//! use pv_core::bom::generate_bom;
//! use pv_core::params::InstallationParameters;
//! use pv_core::pdf::render_bom_pdf;
//!
//! let params = InstallationParameters::default();
//! let bom = generate_bom(&params);
//! let pdf_bytes = render_bom_pdf(&bom, &params).unwrap();
//! std::fs::write("purchase_list.pdf", pdf_bytes).unwrap();
//! ```

use chrono::{Datelike, Utc};
use typst::diag::{FileError, FileResult};
use typst::foundations::{Bytes, Datetime};
use typst::syntax::{FileId, Source};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, LibraryExt, World};
use typst_pdf::PdfOptions;

use crate::bom::{format_decimal, BillOfMaterials};
use crate::errors::{CalcError, CalcResult};
use crate::params::InstallationParameters;
use crate::table::{ITEM_HEADER, QUANTITY_HEADER};

/// Title printed at the top of the report
pub const REPORT_TITLE: &str = "Purchase List for PV Installation";

// ============================================================================
// Typst World Implementation
// ============================================================================

/// A minimal Typst world for compiling documents without external files.
struct PdfWorld {
    /// The main source document
    main: Source,
    /// Font book
    book: LazyHash<FontBook>,
    /// Available fonts
    fonts: Vec<Font>,
    /// Library (standard functions)
    library: LazyHash<Library>,
}

impl PdfWorld {
    fn new(source: String) -> Self {
        let fonts = Self::load_fonts();
        let book = FontBook::from_fonts(&fonts);

        PdfWorld {
            main: Source::detached(source),
            book: LazyHash::new(book),
            fonts,
            library: LazyHash::new(Library::default()),
        }
    }

    /// Fonts bundled with typst-assets, so output does not depend on the host
    fn load_fonts() -> Vec<Font> {
        typst_assets::fonts()
            .flat_map(|font_bytes| Font::iter(Bytes::new(font_bytes.to_vec())))
            .collect()
    }
}

impl World for PdfWorld {
    fn library(&self) -> &LazyHash<Library> {
        &self.library
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &self.book
    }

    fn main(&self) -> FileId {
        self.main.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.main.id() {
            Ok(self.main.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        self.fonts.get(index).cloned()
    }

    fn today(&self, _offset: Option<i64>) -> Option<Datetime> {
        let now = Utc::now();
        Datetime::from_ymd(now.year(), now.month() as u8, now.day() as u8)
    }
}

// ============================================================================
// PDF Template
// ============================================================================

/// Typst template for the purchase list.
///
/// Table styling: light-blue bold header, 0.5pt grey grid, left-aligned
/// cells, 300pt / 100pt columns. The header row repeats on every page.
const BOM_TEMPLATE: &str = r##"
#set page(
  paper: "a4",
  margin: (top: 2cm, bottom: 2cm, left: 2cm, right: 2cm),
  footer: context [
    #line(length: 100%, stroke: 0.5pt + gray)
    #v(4pt)
    #grid(
      columns: (1fr, 1fr),
      align(left)[#text(size: 8pt, fill: gray)[Generated {{DATE}}]],
      align(right)[#text(size: 8pt, fill: gray)[Page #counter(page).display()]],
    )
  ]
)

#set text(size: 10pt)

#align(center)[
  #text(size: 18pt, weight: "bold")[{{TITLE}}]
]

#v(8pt)

#table(
  columns: (auto, auto, auto, auto),
  stroke: none,
  inset: 3pt,
  align: left,
  text(size: 8pt, fill: gray)[Panels], text(size: 8pt)[{{PANELS}} × {{PANEL_WIDTH}} m],
  text(size: 8pt, fill: gray)[Rail length], text(size: 8pt)[{{RAIL_LENGTH}} m],
  text(size: 8pt, fill: gray)[Structure arches], text(size: 8pt)[{{ARCHES}}],
  text(size: 8pt, fill: gray)[Solar cable], text(size: 8pt)[{{CABLE}} mm],
  text(size: 8pt, fill: gray)[House to panels], text(size: 8pt)[{{DISTANCE}} m],
  text(size: 8pt, fill: gray)[Fuse rating], text(size: 8pt)[{{FUSE}} A],
  text(size: 8pt, fill: gray)[Grounding systems], text(size: 8pt)[{{GROUNDING}}],
  text(size: 8pt, fill: gray)[Rails], text(size: 8pt)[{{RAIL_COUNT}} ({{RAIL_RUN}} m run)],
)

#v(8pt)

#table(
  columns: (300pt, 100pt),
  inset: 5pt,
  stroke: 0.5pt + gray,
  align: left,
  fill: (x, y) => if y == 0 { rgb("#add8e6") },
  table.header(
    text(weight: "bold")[{{ITEM_HEADER}}],
    text(weight: "bold")[{{QUANTITY_HEADER}}],
  ),
{{ROWS}}
)
"##;

// ============================================================================
// PDF Rendering
// ============================================================================

/// Render a purchase list to PDF.
///
/// # Arguments
///
/// * `bom` - The computed purchase list
/// * `params` - The parameters it was computed from (printed as a summary)
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - PDF file as bytes
/// * `Err(CalcError::RenderFailed)` - If Typst compilation or PDF output fails
pub fn render_bom_pdf(bom: &BillOfMaterials, params: &InstallationParameters) -> CalcResult<Vec<u8>> {
    let source = build_source(bom, params, &Utc::now().format("%Y-%m-%d").to_string());
    compile_pdf(source)
}

/// Fill the template with the list and parameter summary
fn build_source(bom: &BillOfMaterials, params: &InstallationParameters, date: &str) -> String {
    BOM_TEMPLATE
        .replace("{{TITLE}}", REPORT_TITLE)
        .replace("{{DATE}}", date)
        .replace("{{PANELS}}", &params.panel_count.to_string())
        .replace("{{PANEL_WIDTH}}", &format_decimal(params.panel_width_m))
        .replace("{{RAIL_LENGTH}}", &format_decimal(params.mounting_rail_length_m))
        .replace("{{ARCHES}}", &params.structure_arch_count.to_string())
        .replace("{{CABLE}}", &format_decimal(params.solar_cable_diameter_mm))
        .replace("{{DISTANCE}}", &format_decimal(params.casing_to_panel_distance_m))
        .replace("{{FUSE}}", &format_decimal(params.fuse_rating_a))
        .replace("{{GROUNDING}}", &params.grounding_system_count.to_string())
        .replace("{{RAIL_COUNT}}", &bom.rails.rail_count.to_string())
        .replace("{{RAIL_RUN}}", &format_decimal(bom.rails.total_rail_run_m))
        .replace("{{ITEM_HEADER}}", ITEM_HEADER)
        .replace("{{QUANTITY_HEADER}}", QUANTITY_HEADER)
        .replace("{{ROWS}}", &build_rows(bom))
}

/// One `label, quantity` cell pair per line, as Typst string literals
fn build_rows(bom: &BillOfMaterials) -> String {
    bom.rows()
        .iter()
        .map(|row| {
            format!(
                "  {}, {},",
                typst_string(&row.label),
                typst_string(&row.quantity.to_string())
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Quote text as a Typst string literal so markup characters (`~`, `*`, `#`)
/// in labels print verbatim
fn typst_string(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Compile Typst source and emit PDF bytes
fn compile_pdf(source: String) -> CalcResult<Vec<u8>> {
    let world = PdfWorld::new(source);
    let warned = typst::compile(&world);

    let document = warned.output.map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::render_failed("typst compile", error_msgs.join("; "))
    })?;

    typst_pdf::pdf(&document, &PdfOptions::default()).map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::render_failed("pdf output", error_msgs.join("; "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bom::generate_bom;

    #[test]
    fn test_pdf_generation() {
        let params = InstallationParameters::default();
        let bom = generate_bom(&params);
        let pdf = render_bom_pdf(&bom, &params);

        // Should succeed
        assert!(pdf.is_ok(), "PDF generation failed: {:?}", pdf.err());

        let pdf_bytes = pdf.unwrap();
        // PDF should start with %PDF
        assert!(pdf_bytes.starts_with(b"%PDF"), "Output is not a valid PDF");
        // Should be a reasonable size (at least 1KB)
        assert!(pdf_bytes.len() > 1000, "PDF seems too small");
    }

    #[test]
    fn test_large_installation_spans_pages() {
        let params = InstallationParameters {
            panel_count: 250,
            grounding_system_count: 12,
            casing_to_panel_distance_m: 140.5,
            ..Default::default()
        };
        let bom = generate_bom(&params);
        let pdf = render_bom_pdf(&bom, &params).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
    }

    #[test]
    fn test_source_contains_every_row() {
        let params = InstallationParameters::default();
        let bom = generate_bom(&params);
        let source = build_source(&bom, &params, "2025-01-01");

        assert!(source.contains(REPORT_TITLE));
        assert!(source.contains("Generated 2025-01-01"));
        assert!(source.contains("columns: (300pt, 100pt)"));
        assert!(source.contains("\"Plastic ties ~15cm\", \"15\","));
        assert!(source.contains("\"Lentil-head screws (set A)\", \"6\","));
        assert!(source.contains("\"Lentil-head screws (set B)\", \"4\","));
        assert!(!source.contains("{{"));
    }

    #[test]
    fn test_typst_string_escaping() {
        assert_eq!(typst_string("plain"), "\"plain\"");
        assert_eq!(typst_string("a \"b\""), "\"a \\\"b\\\"\"");
        assert_eq!(typst_string("back\\slash"), "\"back\\\\slash\"");
    }
}
