use crate::app::ScheduleApp;
use egui::{menu, RichText, Ui};
use egui_phosphor::regular as icons;

/// Render the top bar: title, year selector and view options.
pub fn show_toolbar(app: &mut ScheduleApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.label(RichText::new("年間スケジュール管理").strong().size(16.0));
        ui.add_space(16.0);

        if ui
            .button(RichText::new(icons::CARET_LEFT).size(14.0))
            .on_hover_text("Previous year")
            .clicked()
        {
            app.previous_year();
        }
        ui.label(RichText::new(format!("{}年", app.axis.year())).strong().size(14.0));
        if ui
            .button(RichText::new(icons::CARET_RIGHT).size(14.0))
            .on_hover_text("Next year")
            .clicked()
        {
            app.next_year();
        }
        if ui
            .button(format!("{} This year", icons::CALENDAR))
            .clicked()
        {
            app.go_to_current_year();
        }

        ui.add_space(16.0);
        ui.menu_button("  View  ", |ui| {
            if ui
                .checkbox(&mut app.settings.clamp_to_year, "Clamp bars to the year")
                .changed()
            {
                app.settings.save_to_default();
            }
            if ui
                .checkbox(&mut app.settings.cycle_colors, "Cycle task colors")
                .changed()
            {
                app.reset_form_color();
                app.settings.save_to_default();
            }
        });
    });
}
