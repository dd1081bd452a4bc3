#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state: which authentication screen is visible.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub screen: Screen,
}

/// Screens of the authentication flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Login,
    Register,
    ForgotPassword,
}
