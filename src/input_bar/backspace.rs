use super::InputBar;

impl InputBar {
    pub fn backspace(&mut self) {
        self.input.pop();
    }
}
