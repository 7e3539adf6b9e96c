//! Popover form renderer for `ProfileEntryUI`.

use super::{ProfileEntryAction, ProfileEntryUI};

/// Image extensions accepted by the photo picker dialog
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

impl ProfileEntryUI {
    /// Render the popover contents: header, subtitle, form grid, submit.
    pub(super) fn render_form(&mut self, ui: &mut egui::Ui) -> ProfileEntryAction {
        let mut action = ProfileEntryAction::None;

        ui.horizontal(|ui| {
            ui.strong("Add Profile");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                if ui.small_button("Close").clicked() {
                    self.close_and_reset();
                    egui::Popup::close_all(ui.ctx());
                    action = ProfileEntryAction::Dismissed;
                }
            });
        });
        ui.label(
            egui::RichText::new("Provide the person's details and upload a profile photo.")
                .small()
                .weak(),
        );
        ui.add_space(8.0);

        egui::Grid::new("profile_entry_form")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                ui.label("Name:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.temp_name)
                        .hint_text("e.g. Andrea Martinez"),
                );
                ui.end_row();

                ui.label("Relation:");
                ui.add(egui::TextEdit::singleline(&mut self.temp_relation).hint_text("e.g. Friend"));
                ui.end_row();

                ui.label("Image:");
                ui.horizontal(|ui| {
                    if ui.button("Browse\u{2026}").clicked()
                        && let Some(path) = rfd::FileDialog::new()
                            .set_title("Select profile photo")
                            .add_filter("Images", IMAGE_EXTENSIONS)
                            .pick_file()
                    {
                        self.select_image(path.file_name().and_then(|n| n.to_str()));
                    }
                    if !self.temp_image_name.is_empty() && ui.small_button("Clear").clicked() {
                        self.select_image(None);
                    }
                });
                ui.end_row();
            });

        if !self.temp_image_name.is_empty() {
            ui.label(
                egui::RichText::new(format!("Selected: {}", self.temp_image_name))
                    .small()
                    .weak(),
            );
        }
        ui.add_space(8.0);

        if ui
            .add_enabled(self.submit_enabled(), egui::Button::new("Submit"))
            .clicked()
            && let Some(draft) = self.submit()
        {
            egui::Popup::close_all(ui.ctx());
            action = ProfileEntryAction::Submitted(draft);
        }

        action
    }
}
