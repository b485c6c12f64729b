//! Toolbar component
//!
//! Contains the list actions: Generate, Reset and Export PDF.

use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Render the application header with title
pub fn view_header(window_title: &str) -> Element<'static, Message> {
    row![
        text("Cubica").size(28),
        Space::new().width(Length::Fill),
        text(window_title.to_string()).size(14),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Render the toolbar. "Export PDF" is highlighted once a list exists.
pub fn view_toolbar(has_result: bool) -> Element<'static, Message> {
    let export_style = if has_result { button::primary } else { button::secondary };

    row![
        button(text("Generate list").size(11))
            .on_press(Message::Generate)
            .padding(Padding::from([4, 8]))
            .style(button::primary),
        button(text("Reset").size(11))
            .on_press(Message::ResetForm)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
        Space::new().width(Length::Fill),
        button(text("Export PDF").size(11))
            .on_press(Message::ExportPdf)
            .padding(Padding::from([4, 8]))
            .style(export_style),
    ]
    .spacing(4)
    .padding(Padding::from([4, 0]))
    .align_y(Alignment::Center)
    .into()
}
