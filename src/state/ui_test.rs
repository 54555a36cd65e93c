use super::*;

#[test]
fn default_chrome_state_is_closed_and_light() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.mobile_menu_open);
}
