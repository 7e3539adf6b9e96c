//! Profile entry UI for profile-board.
//!
//! This crate provides an egui-based popover widget for collecting a new
//! profile (name, relation, photo file name). It is designed to be decoupled
//! from the host application: the widget owns no data beyond its transient
//! form state and communicates through the [`ProfileEntryAction`] value
//! returned from [`ProfileEntryUI::show`] each frame.

// Profile entry popover widget
pub mod profile_entry_ui;
pub use profile_entry_ui::{ProfileDraft, ProfileEntryAction, ProfileEntryUI};
