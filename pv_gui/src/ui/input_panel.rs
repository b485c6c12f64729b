//! Input Panel (Left)
//!
//! One labeled text input per installation parameter, in form order.

use iced::widget::{column, container, row, scrollable, text, text_input, Column, Space};
use iced::{Alignment, Element, Length};

use pv_core::form::{FieldId, ParameterForm};

use crate::Message;

/// Render the parameter form
pub fn view_input_panel(form: &ParameterForm) -> Element<'_, Message> {
    let mut fields: Column<'_, Message> = column![
        text("Installation Parameters").size(14),
        Space::new().height(8),
    ]
    .spacing(6);

    for field in FieldId::ALL {
        fields = fields.push(labeled_input(field, form.value(field)));
    }

    fields = fields
        .push(Space::new().height(20))
        .push(text("Edit the values, then press 'Generate list'.").size(11).color([0.5, 0.5, 0.5]))
        .push(text("Counts must be whole numbers.").size(11).color([0.5, 0.5, 0.5]));

    container(scrollable(fields.padding(8)))
        .width(Length::FillPortion(40))
        .style(container::bordered_box)
        .padding(5)
        .into()
}

/// Helper to create a labeled text input for one field
fn labeled_input(field: FieldId, value: &str) -> Element<'_, Message> {
    let label = if field.unit().is_empty() {
        format!("{}:", field.label())
    } else {
        format!("{} ({}):", field.label(), field.unit())
    };

    row![
        text(label).size(11).width(Length::Fixed(230.0)),
        text_input(&field.default_text(), value)
            .on_input(move |s| Message::FieldChanged(field, s))
            .on_submit(Message::Generate)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}
