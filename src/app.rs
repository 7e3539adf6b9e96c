//! Application shell hosting the profile entry widget.
//!
//! The shell is the widget's containing page: it mounts the trigger in the
//! page header and decides what to do with submitted drafts. Here that is
//! just logging and listing them; a real deployment would hand the draft to
//! a persistence or upload collaborator instead.

use eframe::egui;
use profile_board_ui::{ProfileDraft, ProfileEntryAction, ProfileEntryUI};

pub struct ProfileBoardApp {
    /// Profile entry popover widget
    profile_entry: ProfileEntryUI,
    /// Drafts submitted this session (host-side state, not the widget's)
    submitted: Vec<ProfileDraft>,
}

impl ProfileBoardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            profile_entry: ProfileEntryUI::new(),
            submitted: Vec::new(),
        }
    }

    fn handle_entry_action(&mut self, action: ProfileEntryAction) {
        match action {
            ProfileEntryAction::None => {}
            ProfileEntryAction::Submitted(draft) => {
                log::info!(
                    "New profile submitted: {} ({}), photo {}",
                    draft.name,
                    draft.relation,
                    draft.image_name
                );
                self.submitted.push(draft);
            }
            ProfileEntryAction::Dismissed => {
                log::debug!("Profile entry dismissed");
            }
        }
    }
}

impl eframe::App for ProfileBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut action = ProfileEntryAction::None;
            ui.horizontal(|ui| {
                ui.heading("Profiles");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    action = self.profile_entry.show(ui);
                });
            });
            self.handle_entry_action(action);

            ui.separator();

            if self.submitted.is_empty() {
                ui.label(egui::RichText::new("No profiles yet.").weak());
            } else {
                for draft in &self.submitted {
                    ui.label(format!(
                        "{} ({}), photo: {}",
                        draft.name, draft.relation, draft.image_name
                    ));
                }
            }
        });
    }
}
