//! Main application loop.

use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tracing::{debug, info};

use crate::application::services::FrameTicker;
use crate::domain::SpinTick;
use crate::domain::ports::ClockPort;
use crate::infrastructure::config::AppConfig;
use crate::presentation::theme::Theme;
use crate::presentation::ui::{WheelKeyResult, WheelScreen, WheelScreenState};

pub struct App {
    screen: WheelScreenState,
    ticker: FrameTicker,
    exiting: bool,
}

impl App {
    #[must_use]
    pub fn new(clock: Arc<dyn ClockPort>, config: &AppConfig) -> Self {
        let theme = Theme::new(&config.theme.accent_color);

        Self {
            screen: WheelScreenState::new(clock, theme, config.ui.show_key_hints),
            ticker: FrameTicker::new(config.ui.frame_interval()),
            exiting: false,
        }
    }

    /// # Errors
    /// Returns error if drawing or reading terminal events fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.run_event_loop(terminal).await?;
        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();

        terminal.draw(|frame| self.render(frame))?;

        while !self.exiting {
            let terminal_event = terminal_events.next();

            tokio::select! {
                _ = self.ticker.next_frame() => {
                    self.on_frame();
                    terminal.draw(|frame| self.render(frame))?;
                }

                event = terminal_event => {
                    match event {
                        Some(Ok(event)) => self.handle_terminal_event(event),
                        Some(Err(e)) => return Err(e.into()),
                        None => {
                            debug!("Terminal event stream closed");
                            self.exiting = true;
                        }
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Resize(width, height) => debug!(width, height, "Terminal resized"),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match self.screen.handle_key(key) {
            WheelKeyResult::Quit => {
                info!("Quit requested");
                self.exiting = true;
            }
            WheelKeyResult::SpinStarted => self.ticker.arm(),
            WheelKeyResult::Consumed | WheelKeyResult::Ignored => {}
        }
    }

    fn on_frame(&mut self) {
        match self.screen.tick() {
            SpinTick::Frame { .. } => {}
            SpinTick::Finished { .. } | SpinTick::Idle => self.ticker.disarm(),
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        frame.render_stateful_widget(WheelScreen::new(), frame.area(), &mut self.screen);
    }
}
