//! Main Application
//!
//! The App struct manages the TUI lifecycle as a thin display client:
//! - Event loop (keyboard, resize, background results)
//! - Conductor for the question/answer round-trip
//! - TerminalSurface for rendering
//!
//! Backend calls never run on the event loop. The health probe and each
//! query run on spawned tasks and report back over a channel, so the
//! loading indicator keeps animating while the service thinks.

use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::Terminal;
use tokio::sync::mpsc;

use mailchat_core::{
    BackendError, Conductor, ConductorConfig, HealthOutcome, HttpQaBackend, PendingQuestion,
    QaBackend, QueryResponse, SurfaceEvent,
};

use crate::display::TerminalSurface;
use crate::widgets::TextBlock;

/// Input box height (lines)
const INPUT_HEIGHT: u16 = 2;

/// Lines scrolled per PageUp/PageDown
const PAGE_LINES: usize = 5;

/// Results delivered from background tasks
#[derive(Debug)]
pub enum BackgroundResult {
    /// The startup health probe finished
    Health(HealthOutcome),
    /// The in-flight query finished
    Answer(Result<QueryResponse, BackendError>),
}

/// Main application state
pub struct App<B: QaBackend = HttpQaBackend> {
    /// Is the app still running?
    running: bool,
    /// The session controller, which owns the surface
    conductor: Conductor<B, TerminalSurface>,
    /// Question waiting for its answer
    pending: Option<PendingQuestion>,
    /// Sender handed to background tasks
    results_tx: mpsc::Sender<BackgroundResult>,
    /// Results from background tasks
    results_rx: mpsc::Receiver<BackgroundResult>,
}

impl App<HttpQaBackend> {
    /// Create an App talking to the HTTP service described by `config`
    pub fn new(config: ConductorConfig) -> anyhow::Result<Self> {
        let backend = HttpQaBackend::from_config(&config)?;
        Ok(Self::with_backend(backend, config))
    }
}

impl<B: QaBackend + 'static> App<B> {
    /// Create an App around any backend
    pub fn with_backend(backend: B, config: ConductorConfig) -> Self {
        let (results_tx, results_rx) = mpsc::channel(8);
        Self {
            running: true,
            conductor: Conductor::new(backend, config, TerminalSurface::new()),
            pending: None,
            results_tx,
            results_rx,
        }
    }

    /// The session controller
    pub fn conductor(&self) -> &Conductor<B, TerminalSurface> {
        &self.conductor
    }

    /// Whether the event loop should keep going
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut event_stream = EventStream::new();
        let mut frame_tick = tokio::time::interval(Duration::from_millis(100));

        self.spawn_health_probe();
        self.render(terminal)?;

        while self.running {
            tokio::select! {
                biased;

                // Terminal events - highest priority
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                            self.handle_key(key);
                        }
                        Some(Ok(_)) => {}
                        Some(Err(e)) => {
                            tracing::error!(error = %e, "Terminal event stream failed");
                            self.running = false;
                        }
                        None => self.running = false,
                    }
                }

                Some(result) = self.results_rx.recv() => {
                    self.handle_result(result).await;
                }

                _ = frame_tick.tick() => {
                    self.conductor.surface_mut().tick();
                }
            }

            self.render(terminal)?;
        }

        Ok(())
    }

    /// Run the startup health probe off the event loop
    pub fn spawn_health_probe(&self) {
        let backend = self.conductor.backend();
        let tx = self.results_tx.clone();
        tokio::spawn(async move {
            let outcome = backend.health_check().await;
            let _ = tx.send(BackgroundResult::Health(outcome)).await;
        });
    }

    /// Apply a result from a background task
    pub async fn handle_result(&mut self, result: BackgroundResult) {
        match result {
            BackgroundResult::Health(outcome) => {
                self.conductor
                    .handle_event(SurfaceEvent::HealthCheckComplete { outcome })
                    .await;
            }
            BackgroundResult::Answer(answer) => match self.pending.take() {
                Some(pending) => {
                    self.conductor.complete_round_trip(pending, answer);
                }
                None => tracing::warn!("Received an answer with no question in flight"),
            },
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            // Quit
            KeyCode::Esc => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }

            // Submit
            KeyCode::Enter => {
                if self.conductor.surface().trigger_enabled() {
                    self.submit();
                }
            }

            // Typing
            KeyCode::Char(c) => self.conductor.surface_mut().push_char(c),
            KeyCode::Backspace => self.conductor.surface_mut().pop_char(),

            // Conversation scrolling
            KeyCode::PageUp => self.conductor.surface_mut().scroll.scroll_up(PAGE_LINES),
            KeyCode::PageDown => self.conductor.surface_mut().scroll.scroll_down(PAGE_LINES),

            _ => {}
        }
    }

    /// Start a round-trip for the current input and query in the background
    fn submit(&mut self) {
        let input = self.conductor.surface().input().to_string();
        let Some(pending) = self.conductor.begin_round_trip(&input) else {
            return;
        };

        let backend = self.conductor.backend();
        let request = pending.request().clone();
        let tx = self.results_tx.clone();
        tokio::spawn(async move {
            let answer = backend.query(&request).await;
            let _ = tx.send(BackgroundResult::Answer(answer)).await;
        });

        self.pending = Some(pending);
    }

    /// Wait for the next background result and apply it
    pub async fn process_next_result(&mut self) -> bool {
        match self.results_rx.recv().await {
            Some(result) => {
                self.handle_result(result).await;
                true
            }
            None => false,
        }
    }

    /// Render the UI
    fn render(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let surface = self.conductor.surface_mut();
        let lines = surface.conversation_lines();
        let (input_text, input_style) = surface.input_line();
        let (status_text, _) = surface.status();
        let status = format!(" {status_text} | Enter to ask | Esc to quit | PgUp/PgDn scroll");
        let status_style = surface.status_style();

        terminal.draw(|frame| {
            let [conversation, input, status_bar] = Layout::vertical([
                Constraint::Min(1),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Length(1),
            ])
            .areas(frame.area());

            frame.render_stateful_widget(TextBlock::new(&lines), conversation, &mut surface.scroll);

            let buf = frame.buffer_mut();
            let separator = "-".repeat(input.width as usize);
            buf.set_string(input.x, input.y, &separator, Style::default().fg(Color::DarkGray));
            let visible = visible_tail(&input_text, input.width as usize);
            buf.set_string(input.x, input.y + 1, visible, input_style);
            buf.set_string(status_bar.x, status_bar.y, &status, status_style);
        })?;

        Ok(())
    }
}

/// The last `width` characters of `text`, so the end of a long line and
/// its cursor stay on screen
fn visible_tail(text: &str, width: usize) -> &str {
    let skip = text.chars().count().saturating_sub(width);
    match text.char_indices().nth(skip) {
        Some((start, _)) => &text[start..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_tail_keeps_end_of_long_input() {
        assert_eq!(visible_tail("You: how much on Swiggy_", 10), "on Swiggy_");
    }

    #[test]
    fn test_visible_tail_short_input_unchanged() {
        assert_eq!(visible_tail("You: hi_", 20), "You: hi_");
        assert_eq!(visible_tail("You: ₹202_", 5), "₹202_");
        assert_eq!(visible_tail("", 5), "");
    }
}
