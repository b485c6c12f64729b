//! # Cubica GUI Application
//!
//! Desktop form for the purchase-list engine. Built with Iced.
//!
//! The form holds text only; every "Generate" or "Export PDF" press parses it
//! into a fresh [`InstallationParameters`] snapshot and recomputes the list.

mod ui;

use std::path::PathBuf;

use iced::widget::{column, container, row, rule};
use iced::{Element, Length, Padding, Task};
use tracing::{error, info};

use pv_core::bom::{build_purchase_list, BillOfMaterials};
use pv_core::errors::CalcResult;
use pv_core::export::{write_pdf, DEFAULT_PDF_FILE_NAME};
use pv_core::form::{FieldId, ParameterForm};
use pv_core::params::InstallationParameters;
use pv_core::pdf::render_bom_pdf;

pub fn main() -> iced::Result {
    pv_core::logging::init();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .window_size((1100.0, 760.0))
        .run()
}

/// Messages produced by the widgets
#[derive(Debug, Clone)]
pub enum Message {
    /// A form field was edited
    FieldChanged(FieldId, String),
    /// Compute the list from the current form
    Generate,
    /// Restore every field to its default
    ResetForm,
    /// Compute, pick a destination and write the PDF
    ExportPdf,
}

/// Application state
pub struct App {
    /// Text in the form fields
    pub form: ParameterForm,
    /// Parameters and list from the last successful computation
    pub computed: Option<(InstallationParameters, BillOfMaterials)>,
    /// Validation or export error to show in the results panel
    pub error_message: Option<String>,
    /// Last written PDF
    pub last_export: Option<PathBuf>,
    /// Status bar text
    pub status: String,
}

impl App {
    fn new() -> Self {
        App {
            form: ParameterForm::new(),
            computed: None,
            error_message: None,
            last_export: None,
            status: "Ready".to_string(),
        }
    }

    fn title(&self) -> String {
        "Cubica - PV Irrigation Pump Purchase List".to_string()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FieldChanged(field, value) => {
                self.form.set(field, value);
                self.status = "Modified - press Generate to update the list".to_string();
            }
            Message::Generate => {
                if self.generate().is_ok() {
                    self.status = "List generated".to_string();
                }
            }
            Message::ResetForm => {
                self.form.reset();
                self.computed = None;
                self.error_message = None;
                self.status = "Form reset to defaults".to_string();
            }
            Message::ExportPdf => self.export_pdf(),
        }
        Task::none()
    }

    /// Parse the form and recompute. Errors are shown in the results panel.
    fn generate(&mut self) -> CalcResult<()> {
        let result = self
            .form
            .to_parameters()
            .and_then(|params| build_purchase_list(&params).map(|bom| (params, bom)));

        match result {
            Ok(computed) => {
                self.computed = Some(computed);
                self.error_message = None;
                Ok(())
            }
            Err(e) => {
                self.computed = None;
                self.error_message = Some(e.to_string());
                self.status = "Invalid parameters".to_string();
                Err(e)
            }
        }
    }

    fn export_pdf(&mut self) {
        if self.generate().is_err() {
            return;
        }
        let Some((params, bom)) = &self.computed else {
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .set_title("Export purchase list")
            .set_file_name(DEFAULT_PDF_FILE_NAME)
            .add_filter("PDF", &["pdf"])
            .save_file()
        else {
            self.status = "Export cancelled".to_string();
            return;
        };

        match render_bom_pdf(bom, params).and_then(|bytes| write_pdf(&bytes, &path)) {
            Ok(()) => {
                info!(path = %path.display(), "exported purchase list");
                self.status = format!("Exported PDF to {}", path.display());
                self.last_export = Some(path);
            }
            Err(e) => {
                error!(error = %e, "PDF export failed");
                self.status = "Export failed".to_string();
                self.error_message = Some(e.to_string());
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let header = ui::toolbar::view_header(&self.title());
        let toolbar = ui::toolbar::view_toolbar(self.computed.is_some());

        let panels = row![
            ui::input_panel::view_input_panel(&self.form),
            ui::results_panel::view_results_panel(self),
        ]
        .spacing(10)
        .height(Length::Fill);

        let status = ui::status_bar::view_status_bar(&self.last_export, &self.status);

        container(
            column![
                header,
                toolbar,
                rule::horizontal(1),
                panels,
                rule::horizontal(1),
                status,
            ]
            .spacing(6),
        )
        .padding(Padding::from([8, 12]))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}
