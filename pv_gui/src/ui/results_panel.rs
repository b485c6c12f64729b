//! Results Panel (Right)
//!
//! Shows the validation error, the purchase list table, or a hint when
//! nothing has been generated yet.

use iced::font::Weight;
use iced::widget::{column, container, row, scrollable, text, Column, Space};
use iced::{Color, Element, Font, Length};

use pv_core::bom::BillOfMaterials;
use pv_core::table::{ITEM_HEADER, QUANTITY_HEADER};

use crate::{App, Message};

const ITEM_COLUMN_WIDTH: f32 = 300.0;
const QUANTITY_COLUMN_WIDTH: f32 = 100.0;

/// Render the results panel based on the last computation
pub fn view_results_panel(app: &App) -> Element<'_, Message> {
    let content: Column<'_, Message> = if let Some(ref error) = app.error_message {
        column![
            text("Error").size(14),
            Space::new().height(8),
            text(error).size(12).color([0.8, 0.2, 0.2]),
        ]
    } else if let Some((_, ref bom)) = app.computed {
        view_table(bom)
    } else {
        column![
            text("Purchase List").size(14),
            Space::new().height(8),
            text("Press 'Generate list' to compute the materials.").size(11).color([0.5, 0.5, 0.5]),
        ]
    };

    container(scrollable(content.padding(8)))
        .width(Length::FillPortion(60))
        .style(container::bordered_box)
        .padding(5)
        .into()
}

/// Two-column "Item" / "Quantity" table
fn view_table(bom: &BillOfMaterials) -> Column<'static, Message> {
    let bold = Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    };

    let header = container(
        row![
            text(ITEM_HEADER).size(12).font(bold).width(Length::Fixed(ITEM_COLUMN_WIDTH)),
            text(QUANTITY_HEADER).size(12).font(bold).width(Length::Fixed(QUANTITY_COLUMN_WIDTH)),
        ]
        .padding(4),
    )
    .style(|_theme: &iced::Theme| container::Style {
        background: Some(Color::from_rgb8(0xAD, 0xD8, 0xE6).into()),
        text_color: Some(Color::BLACK),
        ..container::Style::default()
    });

    let mut table = column![
        text(format!("Purchase List ({} items)", bom.len())).size(14),
        Space::new().height(8),
        header,
    ]
    .spacing(0);

    for item in bom.rows() {
        table = table.push(
            row![
                text(item.label).size(11).width(Length::Fixed(ITEM_COLUMN_WIDTH)),
                text(item.quantity.to_string()).size(11).width(Length::Fixed(QUANTITY_COLUMN_WIDTH)),
            ]
            .padding(4),
        );
    }

    table
        .push(Space::new().height(12))
        .push(
            text(format!(
                "Rails: {} for a {:.2} m run",
                bom.rails.rail_count, bom.rails.total_rail_run_m
            ))
            .size(10)
            .color([0.5, 0.5, 0.5]),
        )
}
