use super::InputBar;

impl InputBar {
    pub fn handle_input(&mut self, ch: char) {
        if !ch.is_control() {
            self.input.push(ch);
        }
    }
}
