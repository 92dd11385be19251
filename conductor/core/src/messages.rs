//! Chat Messages
//!
//! The entries that make up a chat history and the citation metadata the
//! question-answering service attaches to its answers.
//!
//! # Design Philosophy
//!
//! Entries are plain values. Once appended to the
//! [`MessageStore`](crate::store::MessageStore) they are never edited; the
//! only mutation the history ever sees is the removal of the transient
//! loading placeholder.

use serde::{Deserialize, Serialize};

/// Message identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub String);

impl MessageId {
    /// Generate a new unique message ID
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let id = COUNTER.fetch_add(1, Ordering::SeqCst);
        Self(format!("msg_{id}"))
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Who produced an entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    /// The person asking questions
    User,
    /// The question-answering service (or the local fallback)
    Bot,
}

/// A document the service cited when answering
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCitation {
    /// Subject line of the cited email
    pub subject: String,
    /// Originator of the cited email
    pub from: String,
    /// Display date, already formatted by the service
    pub date: String,
    /// Short excerpt of the cited document, when the service sends one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

impl SourceCitation {
    /// Create a citation without a snippet
    pub fn new(
        subject: impl Into<String>,
        from: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            from: from.into(),
            date: date.into(),
            snippet: None,
        }
    }
}

/// One entry in the chat history
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    /// Unique entry ID
    pub id: MessageId,
    /// Who produced this entry
    pub sender: Sender,
    /// Display text
    pub text: String,
    /// Citations backing a bot answer (empty for user entries)
    pub sources: Vec<SourceCitation>,
    /// Whether this is the loading placeholder
    pub transient: bool,
}

impl ChatEntry {
    /// A question typed by the user
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            sender: Sender::User,
            text: text.into(),
            sources: Vec::new(),
            transient: false,
        }
    }

    /// An answer from the service
    pub fn bot(text: impl Into<String>, sources: Vec<SourceCitation>) -> Self {
        Self {
            id: MessageId::new(),
            sender: Sender::Bot,
            text: text.into(),
            sources,
            transient: false,
        }
    }

    /// The loading placeholder shown while a question is in flight
    pub fn loading() -> Self {
        Self {
            id: MessageId::new(),
            sender: Sender::Bot,
            text: String::new(),
            sources: Vec::new(),
            transient: true,
        }
    }
}
