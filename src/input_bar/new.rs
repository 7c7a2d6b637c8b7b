use super::InputBar;

impl InputBar {
    pub fn new() -> Self {
        Self::default()
    }
}
