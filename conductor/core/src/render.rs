//! Render Adapter
//!
//! Projects message store mutations onto a [`Surface`]: one node appended
//! per appended entry, one node removed per removed entry. The only state
//! kept here is which node belongs to which entry.

use std::collections::HashMap;

use crate::messages::{ChatEntry, MessageId, Sender};
use crate::surface::{NodeHandle, RenderedEntry, Surface, MAX_RENDERED_SOURCES};

impl RenderedEntry {
    /// Build the on-screen view of an entry
    ///
    /// User entries never show sources; bot entries show the first
    /// [`MAX_RENDERED_SOURCES`].
    pub fn from_entry(entry: &ChatEntry) -> Self {
        let sources = match entry.sender {
            Sender::Bot => entry
                .sources
                .iter()
                .take(MAX_RENDERED_SOURCES)
                .cloned()
                .collect(),
            Sender::User => Vec::new(),
        };

        Self {
            id: entry.id.clone(),
            sender: entry.sender,
            text: entry.text.clone(),
            sources,
            loading: entry.transient,
        }
    }
}

/// Keeps a surface in step with the message store
#[derive(Debug, Default)]
pub struct RenderAdapter {
    nodes: HashMap<MessageId, NodeHandle>,
}

impl RenderAdapter {
    /// Create an adapter with no rendered nodes
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a freshly appended entry and scroll to it
    pub fn entry_appended<S: Surface + ?Sized>(&mut self, surface: &mut S, entry: &ChatEntry) {
        let handle = surface.append_entry(&RenderedEntry::from_entry(entry));
        self.nodes.insert(entry.id.clone(), handle);
        surface.scroll_to_latest();
    }

    /// Drop the node for a removed entry; unknown IDs are ignored
    pub fn entry_removed<S: Surface + ?Sized>(&mut self, surface: &mut S, id: &MessageId) {
        if let Some(handle) = self.nodes.remove(id) {
            surface.remove_entry(handle);
        }
    }

    /// Number of nodes currently on the surface
    pub fn rendered_count(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::messages::SourceCitation;

    #[derive(Default)]
    struct RecordingSurface {
        nodes: Vec<(NodeHandle, RenderedEntry)>,
        next: u64,
        scrolls: usize,
        removals: usize,
    }

    impl Surface for RecordingSurface {
        fn append_entry(&mut self, entry: &RenderedEntry) -> NodeHandle {
            self.next += 1;
            let handle = NodeHandle(self.next);
            self.nodes.push((handle, entry.clone()));
            handle
        }
        fn remove_entry(&mut self, handle: NodeHandle) {
            self.removals += 1;
            self.nodes.retain(|(h, _)| *h != handle);
        }
        fn set_status(&mut self, _text: &str, _is_error: bool) {}
        fn set_input_enabled(&mut self, _enabled: bool) {}
        fn set_trigger_enabled(&mut self, _enabled: bool) {}
        fn clear_input(&mut self) {}
        fn focus_input(&mut self) {}
        fn read_input(&self) -> String {
            String::new()
        }
        fn scroll_to_latest(&mut self) {
            self.scrolls += 1;
        }
    }

    fn citations(n: usize) -> Vec<SourceCitation> {
        (0..n)
            .map(|i| SourceCitation::new(format!("Subject {i}"), "a@b.com", "2024-01-01"))
            .collect()
    }

    #[test]
    fn test_bot_sources_truncated_in_order() {
        let entry = ChatEntry::bot("answer", citations(5));
        let view = RenderedEntry::from_entry(&entry);
        let subjects: Vec<_> = view.sources.iter().map(|s| s.subject.as_str()).collect();
        assert_eq!(subjects, vec!["Subject 0", "Subject 1", "Subject 2"]);
        // The stored entry keeps everything
        assert_eq!(entry.sources.len(), 5);
    }

    #[test]
    fn test_user_entries_never_show_sources() {
        let mut entry = ChatEntry::user("question");
        entry.sources = citations(2);
        assert!(RenderedEntry::from_entry(&entry).sources.is_empty());
    }

    #[test]
    fn test_append_scrolls_and_remove_drops_node() {
        let mut surface = RecordingSurface::default();
        let mut adapter = RenderAdapter::new();

        let user = ChatEntry::user("question");
        let loading = ChatEntry::loading();
        adapter.entry_appended(&mut surface, &user);
        adapter.entry_appended(&mut surface, &loading);
        assert_eq!(surface.scrolls, 2);
        assert_eq!(surface.nodes.len(), 2);
        assert!(surface.nodes[1].1.loading);

        adapter.entry_removed(&mut surface, &loading.id);
        adapter.entry_removed(&mut surface, &loading.id);
        assert_eq!(surface.removals, 1);
        assert_eq!(surface.nodes.len(), 1);
        assert_eq!(adapter.rendered_count(), 1);
    }
}
