//! Presentation Surface
//!
//! The contract the Conductor renders through. A surface is a dumb view:
//! a scrollable list of entries, a status banner, a text input and a
//! submit trigger. It holds no business logic and never decides what to
//! show on its own.

use crate::messages::{MessageId, Sender, SourceCitation};

/// Maximum number of citations a rendered bot entry exposes
pub const MAX_RENDERED_SOURCES: usize = 3;

/// Opaque handle to a node a surface created for an entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeHandle(pub u64);

/// An entry as it should appear on screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedEntry {
    /// ID of the entry this node represents
    pub id: MessageId,
    /// Who produced the entry
    pub sender: Sender,
    /// Display text (empty for the loading placeholder)
    pub text: String,
    /// At most [`MAX_RENDERED_SOURCES`] citations, in original order
    pub sources: Vec<SourceCitation>,
    /// Whether to draw the loading indicator instead of text
    pub loading: bool,
}

/// A UI that can show a chat session
pub trait Surface {
    /// Append a node for an entry, returning a handle to it
    fn append_entry(&mut self, entry: &RenderedEntry) -> NodeHandle;

    /// Remove a previously appended node
    fn remove_entry(&mut self, handle: NodeHandle);

    /// Update the status banner
    fn set_status(&mut self, text: &str, is_error: bool);

    /// Enable or disable the text input
    fn set_input_enabled(&mut self, enabled: bool);

    /// Enable or disable the submit trigger
    fn set_trigger_enabled(&mut self, enabled: bool);

    /// Empty the text input
    fn clear_input(&mut self);

    /// Move focus to the text input
    fn focus_input(&mut self);

    /// Current contents of the text input
    fn read_input(&self) -> String;

    /// Scroll so the newest entry is visible
    fn scroll_to_latest(&mut self);
}
