use color_eyre::Result;
use ratatui::DefaultTerminal;

use crate::{event::Event, log_error};

use super::App;

impl App {
    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let mut needs_redraw = true;

        while self.running {
            if needs_redraw {
                terminal.draw(|frame| frame.render_widget(&mut self, frame.area()))?;
                needs_redraw = false;
            }

            match self.events.next().await {
                Ok(Event::Tick) => needs_redraw = self.tick(),
                Ok(Event::Crossterm(event)) => {
                    match event {
                        crossterm::event::Event::Key(key_event)
                            if key_event.kind == crossterm::event::KeyEventKind::Press =>
                        {
                            self.handle_key_events(key_event)?;
                        }
                        _ => {}
                    }
                    needs_redraw = true;
                }
                Ok(Event::App(app_event)) => {
                    self.handle_app_event(app_event);
                    needs_redraw = true;
                }
                Err(e) => log_error!("Event error: {}", e),
            }
        }
        Ok(())
    }
}
