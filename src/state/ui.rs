//! Local header chrome state.
//!
//! DESIGN
//! ======
//! Keeps transient presentation flags out of auth state so the header
//! can toggle its menu without touching session data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the header: dark mode and the mobile menu flag.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub mobile_menu_open: bool,
}
