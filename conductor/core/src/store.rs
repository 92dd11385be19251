//! Message Store
//!
//! Append-only chat history. Insertion order is display order. The only
//! entry that may ever leave the store is the transient loading
//! placeholder.

use crate::messages::{ChatEntry, MessageId};

/// Ordered chat history
#[derive(Clone, Debug, Default)]
pub struct MessageStore {
    entries: Vec<ChatEntry>,
}

impl MessageStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry to the end of the history
    pub fn append(&mut self, entry: ChatEntry) {
        tracing::trace!(id = %entry.id, sender = ?entry.sender, "Appending entry");
        self.entries.push(entry);
    }

    /// Remove the entry with the given ID
    ///
    /// Returns the removed entry, or `None` when no entry has that ID.
    pub fn remove(&mut self, id: &MessageId) -> Option<ChatEntry> {
        let idx = self.entries.iter().position(|e| &e.id == id)?;
        Some(self.entries.remove(idx))
    }

    /// All entries in display order
    pub fn all(&self) -> &[ChatEntry] {
        &self.entries
    }

    /// Get entry by ID
    pub fn get(&self, id: &MessageId) -> Option<&ChatEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of loading placeholders currently present
    pub fn transient_count(&self) -> usize {
        self.entries.iter().filter(|e| e.transient).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Sender;

    #[test]
    fn test_append_keeps_order() {
        let mut store = MessageStore::new();
        store.append(ChatEntry::user("first"));
        store.append(ChatEntry::bot("second", Vec::new()));
        store.append(ChatEntry::user("third"));

        let texts: Vec<_> = store.all().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut store = MessageStore::new();
        store.append(ChatEntry::user("question"));
        let loading = ChatEntry::loading();
        let loading_id = loading.id.clone();
        store.append(loading);
        assert_eq!(store.transient_count(), 1);

        let removed = store.remove(&loading_id).unwrap();
        assert!(removed.transient);
        assert_eq!(store.len(), 1);

        assert!(store.remove(&loading_id).is_none());
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].sender, Sender::User);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut store = MessageStore::new();
        store.append(ChatEntry::user("question"));
        assert!(store.remove(&MessageId::new()).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get() {
        let mut store = MessageStore::new();
        let entry = ChatEntry::user("hello");
        let id = entry.id.clone();
        store.append(entry);
        assert_eq!(store.get(&id).unwrap().text, "hello");
        assert!(!store.is_empty());
    }
}
