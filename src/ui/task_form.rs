use chrono::NaiveDate;
use egui::{Color32, RichText, Ui};
use thiserror::Error;

use crate::model::{ColorPalette, Task};
use crate::ui::theme;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Title is required")]
    MissingTitle,
    #[error("Start date is required")]
    MissingStartDate,
    #[error("End date is required")]
    MissingEndDate,
    #[error("'{value}' is not a valid {field} date (expected YYYY-MM-DD)")]
    InvalidDate { field: &'static str, value: String },
}

/// Editable state of the "add task" form.
#[derive(Debug, Clone)]
pub struct TaskForm {
    pub title: String,
    pub start: String,
    pub end: String,
    pub color: Color32,
    /// Set once the user picks a color by hand; otherwise the palette decides.
    pub color_overridden: bool,
    default_color: Color32,
    pub error: Option<FormError>,
}

impl TaskForm {
    pub fn new(initial_color: Color32, default_color: Color32) -> Self {
        Self {
            title: String::new(),
            start: String::new(),
            end: String::new(),
            color: initial_color,
            color_overridden: false,
            default_color,
            error: None,
        }
    }

    /// Build a task from the current fields and clear the form.
    ///
    /// With a palette, the task takes the palette's next color unless the
    /// user chose one. Only required fields are checked; an end date before
    /// the start date is accepted.
    pub fn submit(&mut self, mut palette: Option<&mut ColorPalette>) -> Result<Task, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::MissingTitle);
        }
        let start = parse_required(&self.start, "start", FormError::MissingStartDate)?;
        let end = parse_required(&self.end, "end", FormError::MissingEndDate)?;

        let color = match palette.as_deref_mut() {
            Some(p) if !self.color_overridden => p.next_color(),
            _ => self.color,
        };
        let task = Task::new(title, start, end, color);

        self.title.clear();
        self.start.clear();
        self.end.clear();
        self.color_overridden = false;
        self.color = palette.map(|p| p.peek()).unwrap_or(self.default_color);
        self.error = None;
        Ok(task)
    }
}

fn parse_required(
    value: &str,
    field: &'static str,
    missing: FormError,
) -> Result<NaiveDate, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(missing);
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| FormError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Render the form in the side panel. Returns the new task on submit.
pub fn show_task_form(
    form: &mut TaskForm,
    palette: Option<&mut ColorPalette>,
    ui: &mut Ui,
) -> Option<Task> {
    let mut submitted = None;

    ui.add_space(4.0);
    ui.label(
        RichText::new("予定を追加")
            .strong()
            .size(18.0)
            .color(theme::TEXT_PRIMARY),
    );
    ui.add_space(8.0);

    let today = chrono::Local::now().date_naive();

    field_label(ui, "タイトル");
    ui.add_sized(
        [ui.available_width(), 24.0],
        egui::TextEdit::singleline(&mut form.title).hint_text("Task title..."),
    );
    ui.add_space(4.0);

    field_label(ui, "開始日");
    date_field(ui, &mut form.start, "form_dp_start", today);
    ui.add_space(4.0);

    field_label(ui, "終了日");
    date_field(ui, &mut form.end, "form_dp_end", today);
    ui.add_space(4.0);

    field_label(ui, "色");
    ui.horizontal(|ui| {
        if ui.color_edit_button_srgba(&mut form.color).changed() {
            form.color_overridden = true;
        }
        let [r, g, b, _] = form.color.to_array();
        ui.label(
            RichText::new(format!("#{:02X}{:02X}{:02X}", r, g, b))
                .monospace()
                .color(theme::TEXT_DIM),
        );
    });
    ui.add_space(10.0);

    let add_btn = egui::Button::new(RichText::new("追加").color(Color32::WHITE))
        .fill(theme::ACCENT)
        .rounding(egui::Rounding::same(5.0));
    if ui.add_sized([ui.available_width(), 30.0], add_btn).clicked() {
        match form.submit(palette) {
            Ok(task) => submitted = Some(task),
            Err(e) => form.error = Some(e),
        }
    }

    if let Some(err) = &form.error {
        ui.add_space(4.0);
        ui.label(RichText::new(err.to_string()).color(theme::TEXT_ERROR).size(11.0));
    }

    submitted
}

fn field_label(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).size(12.0).color(theme::TEXT_SECONDARY));
}

/// Text entry with a calendar button next to it. The picker writes back
/// into the text so an empty field stays empty until the user picks.
fn date_field(ui: &mut Ui, value: &mut String, salt: &str, fallback: NaiveDate) {
    ui.horizontal(|ui| {
        ui.add_sized(
            [120.0, 24.0],
            egui::TextEdit::singleline(value).hint_text("YYYY-MM-DD"),
        );
        let mut picked = NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).unwrap_or(fallback);
        let response = ui.add(egui_extras::DatePickerButton::new(&mut picked).id_salt(salt));
        if response.changed() {
            *value = picked.format(DATE_FORMAT).to_string();
        }
    });
}
