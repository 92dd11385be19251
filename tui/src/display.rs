//! Terminal Surface
//!
//! The TUI's implementation of the Conductor's [`Surface`] contract. It
//! keeps the nodes the Conductor asked for, the status banner and the
//! input line, and turns them into styled lines for rendering.
//!
//! # Design Philosophy
//!
//! The TUI is a "thin client" - it just renders what the Conductor tells it
//! to. Nothing here decides whether a question may be sent or what the
//! history contains.

use ratatui::style::{Modifier, Style};

use mailchat_core::{NodeHandle, RenderedEntry, Sender, Surface};

use crate::theme::{ASSISTANT_MAGENTA, DIM_GRAY, ERROR_RED, SOURCE_BLUE, SUCCESS_GREEN, USER_GREEN};
use crate::widgets::TextBlockState;

/// Status text shown until the health probe answers
pub const STATUS_CONNECTING: &str = "Connecting to Email Assistant...";

/// Header line above a bot answer's citations
pub const SOURCES_HEADER: &str = "📎 Sources:";

/// Surface state for the terminal
#[derive(Debug)]
pub struct TerminalSurface {
    /// Rendered nodes in display order
    nodes: Vec<(NodeHandle, RenderedEntry)>,
    /// Next handle to hand out
    next_handle: u64,
    /// Status banner text
    status: String,
    /// Whether the status banner is an error
    status_error: bool,
    /// Text input buffer
    input: String,
    /// Whether typing is accepted
    input_enabled: bool,
    /// Whether Enter submits
    trigger_enabled: bool,
    /// Whether the input line has focus
    input_focused: bool,
    /// Scroll state of the conversation
    pub scroll: TextBlockState,
    /// Animation frame for the loading indicator
    frame: usize,
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            next_handle: 0,
            status: STATUS_CONNECTING.to_string(),
            status_error: false,
            input: String::new(),
            input_enabled: true,
            trigger_enabled: false,
            input_focused: true,
            scroll: TextBlockState::default(),
            frame: 0,
        }
    }
}

impl TerminalSurface {
    /// Create an empty surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes in display order
    pub fn nodes(&self) -> impl Iterator<Item = &RenderedEntry> {
        self.nodes.iter().map(|(_, entry)| entry)
    }

    /// Status banner text and whether it is an error
    pub fn status(&self) -> (&str, bool) {
        (&self.status, self.status_error)
    }

    /// Current input text
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether Enter should submit
    pub fn trigger_enabled(&self) -> bool {
        self.trigger_enabled
    }

    /// Whether the input accepts typing
    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Type a character, if input is enabled
    pub fn push_char(&mut self, c: char) {
        if self.input_enabled {
            self.input.push(c);
        }
    }

    /// Delete the last character, if input is enabled
    pub fn pop_char(&mut self) {
        if self.input_enabled {
            self.input.pop();
        }
    }

    /// Advance the loading animation
    pub fn tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    /// Conversation as unwrapped styled lines
    pub fn conversation_lines(&self) -> Vec<(String, Style)> {
        let mut lines = Vec::new();

        for (_, entry) in &self.nodes {
            match entry.sender {
                Sender::User => {
                    lines.push((format!("You: {}", entry.text), Style::default().fg(USER_GREEN)));
                }
                Sender::Bot if entry.loading => {
                    let dots = "●".repeat(self.frame / 3 % 3 + 1);
                    lines.push((
                        format!("Assistant: {dots}"),
                        Style::default().fg(ASSISTANT_MAGENTA).add_modifier(Modifier::DIM),
                    ));
                }
                Sender::Bot => {
                    lines.push((
                        format!("Assistant: {}", entry.text),
                        Style::default().fg(ASSISTANT_MAGENTA),
                    ));
                    if !entry.sources.is_empty() {
                        lines.push((SOURCES_HEADER.to_string(), Style::default().fg(SOURCE_BLUE)));
                        for source in &entry.sources {
                            lines.push((
                                format!("  {}", source.subject),
                                Style::default().add_modifier(Modifier::BOLD),
                            ));
                            lines.push((
                                format!("  From: {} • {}", source.from, source.date),
                                Style::default().fg(DIM_GRAY),
                            ));
                        }
                    }
                }
            }
            lines.push((String::new(), Style::default()));
        }

        lines
    }

    /// Input line as displayed
    pub fn input_line(&self) -> (String, Style) {
        if !self.input_enabled {
            return ("You: (waiting for answer)".to_string(), Style::default().fg(DIM_GRAY));
        }
        let cursor = if self.input_focused { "_" } else { "" };
        (format!("You: {}{cursor}", self.input), Style::default().fg(USER_GREEN))
    }

    /// Status banner style
    pub fn status_style(&self) -> Style {
        if self.status_error {
            Style::default().fg(ERROR_RED)
        } else if self.trigger_enabled || !self.input_enabled {
            Style::default().fg(SUCCESS_GREEN)
        } else {
            Style::default().fg(DIM_GRAY)
        }
    }
}

impl Surface for TerminalSurface {
    fn append_entry(&mut self, entry: &RenderedEntry) -> NodeHandle {
        self.next_handle += 1;
        let handle = NodeHandle(self.next_handle);
        self.nodes.push((handle, entry.clone()));
        handle
    }

    fn remove_entry(&mut self, handle: NodeHandle) {
        self.nodes.retain(|(h, _)| *h != handle);
    }

    fn set_status(&mut self, text: &str, is_error: bool) {
        self.status = text.to_string();
        self.status_error = is_error;
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
        if !enabled {
            self.input_focused = false;
        }
    }

    fn set_trigger_enabled(&mut self, enabled: bool) {
        self.trigger_enabled = enabled;
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }

    fn focus_input(&mut self) {
        self.input_focused = true;
    }

    fn read_input(&self) -> String {
        self.input.clone()
    }

    fn scroll_to_latest(&mut self) {
        self.scroll.scroll_to_bottom();
    }
}
