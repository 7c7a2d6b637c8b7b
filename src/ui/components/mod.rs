mod alert;
mod empty_message;
mod help;

/// Small prebuilt widgets shared by the screens.
pub struct UiComponent;
