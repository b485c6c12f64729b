//! Plain-text rendering of a purchase list as an "Item" / "Quantity" table.

use crate::bom::BillOfMaterials;

/// Header of the label column
pub const ITEM_HEADER: &str = "Item";

/// Header of the quantity column
pub const QUANTITY_HEADER: &str = "Quantity";

/// Render the list as a fixed-width two-column table, one row per line.
///
/// ```rust
/// use pv_core::bom::generate_bom;
/// use pv_core::params::InstallationParameters;
/// use pv_core::table::render_text_table;
///
/// let table = render_text_table(&generate_bom(&InstallationParameters::default()));
/// assert!(table.lines().next().unwrap().starts_with("Item"));
/// ```
pub fn render_text_table(bom: &BillOfMaterials) -> String {
    let rows: Vec<(String, String)> = bom
        .rows()
        .into_iter()
        .map(|row| (row.label, row.quantity.to_string()))
        .collect();

    let label_width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .chain(std::iter::once(ITEM_HEADER.len()))
        .max()
        .unwrap_or(0);
    let quantity_width = rows
        .iter()
        .map(|(_, quantity)| quantity.len())
        .chain(std::iter::once(QUANTITY_HEADER.len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!(
        "{:<lw$}  {:>qw$}\n",
        ITEM_HEADER,
        QUANTITY_HEADER,
        lw = label_width,
        qw = quantity_width
    ));
    out.push_str(&format!(
        "{}  {}\n",
        "-".repeat(label_width),
        "-".repeat(quantity_width)
    ));
    for (label, quantity) in rows {
        out.push_str(&format!(
            "{:<lw$}  {:>qw$}\n",
            label,
            quantity,
            lw = label_width,
            qw = quantity_width
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bom::generate_bom;
    use crate::params::InstallationParameters;

    #[test]
    fn test_table_has_header_rule_and_one_row_per_line() {
        let bom = generate_bom(&InstallationParameters::default());
        let table = render_text_table(&bom);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 2 + 47);
        assert!(lines[0].starts_with("Item"));
        assert!(lines[0].ends_with("Quantity"));
        assert!(lines[1].starts_with("----"));
        assert!(lines[2].starts_with("Solar panels"));
        assert!(lines[2].ends_with("13"));
        assert!(lines[48].starts_with("Lentil-head screws (set B)"));
        assert!(lines[48].ends_with('4'));
    }

    #[test]
    fn test_columns_are_aligned() {
        let bom = generate_bom(&InstallationParameters::default());
        let table = render_text_table(&bom);
        let widths: Vec<usize> = table.lines().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
    }

    #[test]
    fn test_fractional_length_is_trimmed() {
        let bom = generate_bom(&InstallationParameters {
            casing_to_panel_distance_m: 4.5,
            ..Default::default()
        });
        let table = render_text_table(&bom);
        let conduit = table
            .lines()
            .find(|l| l.starts_with("EMT 25mm conduit (m)"))
            .unwrap();
        assert!(conduit.ends_with("7.5"));
    }
}
