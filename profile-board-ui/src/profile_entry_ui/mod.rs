//! Profile entry popover UI using egui
//!
//! Provides a trigger button that opens a popover form for adding a profile
//! (name, relation, photo file name).
//!
//! ## Sub-module layout
//!
//! | File | Contents |
//! |------|----------|
//! | `mod.rs` (this file) | Type definitions, state machine, public entry point (`show`) |
//! | `form_view.rs` | Popover form renderer (header, fields, image picker, submit) |
//!
//! The widget performs no I/O beyond the native file picker and carries no
//! state outside its own instance. A completed submission is reported to the
//! caller as [`ProfileEntryAction::Submitted`]; what to do with the draft
//! (persist, upload, ignore) is entirely the host's decision.

mod form_view;

use serde::{Deserialize, Serialize};

/// A completed profile entry, snapshotted from the form at submission time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
    /// Person's display name
    pub name: String,
    /// Relation to the user (e.g. "Friend")
    pub relation: String,
    /// Display name of the selected photo file (never its contents)
    pub image_name: String,
}

/// Actions that can be triggered from the profile entry popover
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileEntryAction {
    /// No action
    None,
    /// Form was submitted with a complete draft; popover has closed and reset
    Submitted(ProfileDraft),
    /// Popover was dismissed (overlay click, Escape, or Close); form was reset
    Dismissed,
}

/// Profile entry popover UI state
pub struct ProfileEntryUI {
    /// Whether the popover is visible
    pub open: bool,

    // Temporary form fields
    pub(super) temp_name: String,
    pub(super) temp_relation: String,
    pub(super) temp_image_name: String,
}

impl ProfileEntryUI {
    // =========================================================================
    // Lifecycle & State Management
    // =========================================================================

    /// Create a new profile entry UI, closed with empty fields
    pub fn new() -> Self {
        Self {
            open: false,
            temp_name: String::new(),
            temp_relation: String::new(),
            temp_image_name: String::new(),
        }
    }

    /// Toggle the popover from the trigger.
    ///
    /// Opening leaves the form fields untouched. Closing goes through
    /// [`close_and_reset`](Self::close_and_reset): while the popover is open
    /// the trigger sits under the dismiss overlay, so a toggle-close is an
    /// overlay dismissal and must reset the form like any other close path.
    pub fn toggle(&mut self) {
        if self.open {
            self.close_and_reset();
        } else {
            self.open = true;
            log::info!("Profile entry popover opened");
        }
    }

    /// Close the popover and reset all form fields to defaults.
    ///
    /// Single close path shared by overlay dismissal, the Close control,
    /// trigger toggle, and submission.
    pub fn close_and_reset(&mut self) {
        self.open = false;
        self.clear_form();
    }

    /// Clear form fields
    pub(super) fn clear_form(&mut self) {
        self.temp_name.clear();
        self.temp_relation.clear();
        self.temp_image_name.clear();
    }

    // =========================================================================
    // Field Edit Operations
    // =========================================================================

    /// Replace the name field verbatim (no trimming)
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.temp_name = name.into();
    }

    /// Replace the relation field verbatim (no trimming)
    pub fn set_relation(&mut self, relation: impl Into<String>) {
        self.temp_relation = relation.into();
    }

    /// Record the selected photo's display name, or clear it with `None`.
    ///
    /// Only the file name is retained; file contents are never read.
    pub fn select_image(&mut self, file_name: Option<&str>) {
        self.temp_image_name = file_name.unwrap_or_default().to_string();
    }

    /// Current name field value
    pub fn name(&self) -> &str {
        &self.temp_name
    }

    /// Current relation field value
    pub fn relation(&self) -> &str {
        &self.temp_relation
    }

    /// Display name of the currently selected photo, empty if none
    pub fn image_name(&self) -> &str {
        &self.temp_image_name
    }

    /// Whether the Submit control is enabled: all three fields non-empty
    pub fn submit_enabled(&self) -> bool {
        !self.temp_name.is_empty()
            && !self.temp_relation.is_empty()
            && !self.temp_image_name.is_empty()
    }

    /// Submit the form.
    ///
    /// Returns the completed draft and closes+resets the popover when the
    /// form is complete; returns `None` with no state change otherwise (the
    /// rendered Submit control is disabled in that case, so this guard only
    /// matters for programmatic callers).
    pub fn submit(&mut self) -> Option<ProfileDraft> {
        if !self.submit_enabled() {
            return None;
        }
        let draft = ProfileDraft {
            name: self.temp_name.clone(),
            relation: self.temp_relation.clone(),
            image_name: self.temp_image_name.clone(),
        };
        self.close_and_reset();
        log::info!("Profile entry submitted: {}", draft.name);
        Some(draft)
    }

    // =========================================================================
    // Public UI Entry Point
    // =========================================================================

    /// Render the trigger button and, while open, the popover form.
    ///
    /// Returns the action triggered this frame. The popover closes on a
    /// click outside it (or Escape); that edge is observed here and routed
    /// through [`close_and_reset`](Self::close_and_reset) so every dismissal
    /// path shares the one reset implementation.
    pub fn show(&mut self, ui: &mut egui::Ui) -> ProfileEntryAction {
        let mut action = ProfileEntryAction::None;

        let trigger = ui.button("Add Profile");
        let inner = egui::Popup::from_toggle_button_response(&trigger)
            .close_behavior(egui::PopupCloseBehavior::CloseOnClickOutside)
            .show(|ui| {
                ui.set_min_width(300.0);
                action = self.render_form(ui);
            });

        // Close/Submit inside the form already went through close_and_reset
        // and requested the popup close; only reconcile on no-action frames.
        let rendered = inner.is_some();
        if matches!(action, ProfileEntryAction::None) {
            if self.open && !rendered {
                // Popup memory closed without an explicit control:
                // overlay click or Escape.
                self.close_and_reset();
                action = ProfileEntryAction::Dismissed;
            } else {
                if !self.open && rendered {
                    log::info!("Profile entry popover opened");
                }
                self.open = rendered;
            }
        }

        action
    }
}

impl Default for ProfileEntryUI {
    fn default() -> Self {
        Self::new()
    }
}
