//! Status Bar (Bottom)
//!
//! Displays:
//! - Last exported PDF path
//! - Status messages

use std::path::PathBuf;

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(last_export: &'a Option<PathBuf>, status: &'a str) -> Element<'a, Message> {
    let file_info = match last_export {
        Some(path) => format!("Last export: {}", path.display()),
        None => "Not exported".to_string(),
    };

    row![
        text(file_info).size(10),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
