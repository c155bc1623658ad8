//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, error, info, warn};

use crate::application::services::{WordListEvent, WordListService};
use crate::domain::ports::VocabularySourcePort;
use crate::infrastructure::config::AppConfig;
use crate::presentation::events::EventResult;
use crate::presentation::ui::{WordListKeyResult, WordListScreen, WordListScreenState};

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(33);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

pub struct App {
    state: AppState,
    screen: WordListScreenState,
    word_list: WordListService,
}

impl App {
    #[must_use]
    pub fn new(source: Arc<dyn VocabularySourcePort>, config: &AppConfig) -> Self {
        Self {
            state: AppState::Running,
            screen: WordListScreenState::new(&config.ui),
            word_list: WordListService::new(source),
        }
    }

    /// # Errors
    /// Returns an error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut model_events = self.word_list.subscribe();

        match self.word_list.fetch_vocabulary().await {
            Ok(count) => info!(count, "Vocabulary loaded"),
            Err(e) => {
                error!(error = %e, "Vocabulary fetch failed");
                self.screen.set_load_error(e.to_string());
            }
        }

        self.run_event_loop(terminal, &mut model_events).await?;

        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        model_events: &mut mpsc::UnboundedReceiver<WordListEvent>,
    ) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut animation_interval = interval(ANIMATION_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            tokio::select! {
                biased;

                Some(event) = model_events.recv() => {
                    self.handle_model_event(event);
                    terminal.draw(|frame| self.render(frame))?;
                }

                Some(Ok(event)) = terminal_events.next() => {
                    if self.handle_terminal_event(event) == EventResult::Exit {
                        self.state = AppState::Exiting;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = animation_interval.tick() => {
                    if self.screen.tick(ANIMATION_TICK_RATE) {
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) => self.handle_key(key),
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        match self.screen.handle_key(key) {
            WordListKeyResult::Quit => return EventResult::Exit,
            WordListKeyResult::ToggleMemorize(index) => {
                if self.word_list.toggle_memorized(index).is_none() {
                    warn!(index, "Toggle requested for a row that no longer exists");
                }
            }
            WordListKeyResult::CategorySelected(index) => {
                if let Some(category) = self.screen.sidebar_category(index) {
                    info!(category = %category, "Wordbook selected");
                }
            }
            WordListKeyResult::Consumed => {}
        }

        EventResult::Continue
    }

    /// Applies a model change to the screen. The screen never mutates the
    /// collection itself; every row update arrives through this channel.
    fn handle_model_event(&mut self, event: WordListEvent) {
        match event {
            WordListEvent::Loaded { count } => {
                debug!(count, "Applying loaded vocabulary to the screen");
                self.screen.set_rows(self.word_list.vocabularies().to_vec());
            }
            WordListEvent::MemorizeChanged { index, memorized } => {
                self.screen.set_row_memorized(index, memorized);
            }
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        frame.render_stateful_widget(WordListScreen::new(), frame.area(), &mut self.screen);
    }
}
