//! The notes sidebar: user-captured snippets persisted as a JSON array of
//! markup strings. Every mutation rewrites the full list so the stored
//! representation always matches what is rendered.

use std::sync::Arc;

use serde_json::json;
use tracing::warn;

use crate::storage::KeyValueStore;

pub const NOTES_KEY: &str = "savedNotes";
pub const SIDEBAR_STATE_KEY: &str = "noteSidebarState";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Note {
    pub html: String,
}

#[derive(Clone)]
pub struct NotesStore {
    store: Arc<dyn KeyValueStore>,
}

impl NotesStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Oldest first, newest appended last. A missing or corrupt entry reads as
    /// an empty list.
    pub fn load_all(&self) -> Vec<Note> {
        let raw = match self.store.get(NOTES_KEY) {
            Some(raw) => raw,
            None => return Vec::new(),
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(items) => items.into_iter().map(|html| Note { html }).collect(),
            Err(err) => {
                warn!(%err, "discarding unreadable saved notes");
                Vec::new()
            }
        }
    }

    /// Append a note built from plain selected text and rewrite the list.
    pub fn add(&self, notes: &mut Vec<Note>, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }
        notes.push(Note {
            html: format!("<p>{}</p>", escape_html(trimmed)),
        });
        self.save(notes);
    }

    /// Append already-formatted markup captured from the chat window.
    pub fn add_markup(&self, notes: &mut Vec<Note>, html: &str) {
        if html.trim().is_empty() {
            return;
        }
        notes.push(Note {
            html: html.to_string(),
        });
        self.save(notes);
    }

    /// Remove the note at `index` and rewrite the list.
    pub fn delete(&self, notes: &mut Vec<Note>, index: usize) {
        if index < notes.len() {
            notes.remove(index);
            self.save(notes);
        }
    }

    fn save(&self, notes: &[Note]) {
        let payload = json!(notes.iter().map(|n| n.html.as_str()).collect::<Vec<_>>());
        if let Err(err) = self.store.set(NOTES_KEY, &payload.to_string()) {
            warn!(%err, "failed to persist notes");
        }
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.store
            .get(SIDEBAR_STATE_KEY)
            .map(|state| state == "collapsed")
            .unwrap_or(false)
    }

    pub fn set_sidebar_collapsed(&self, collapsed: bool) {
        let state = if collapsed { "collapsed" } else { "expanded" };
        if let Err(err) = self.store.set(SIDEBAR_STATE_KEY, state) {
            warn!(%err, "failed to persist sidebar state");
        }
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn fresh_store() -> (NotesStore, Arc<MemoryStore>) {
        let backing = Arc::new(MemoryStore::new());
        (NotesStore::new(backing.clone()), backing)
    }

    #[test]
    fn added_note_survives_a_reload() {
        let (store, backing) = fresh_store();
        let mut notes = store.load_all();
        store.add(&mut notes, "cláusula abusiva no artigo 5");

        // A new store over the same backing simulates a page reload.
        let reloaded = NotesStore::new(backing).load_all();
        assert_eq!(reloaded.len(), 1);
        assert!(reloaded.last().unwrap().html.contains("cláusula abusiva"));
    }

    #[test]
    fn delete_removes_exactly_the_targeted_note() {
        let (store, backing) = fresh_store();
        let mut notes = Vec::new();
        store.add(&mut notes, "primeira");
        store.add(&mut notes, "segunda");
        store.add(&mut notes, "terceira");

        store.delete(&mut notes, 1);
        assert_eq!(notes.len(), 2);
        assert!(notes[0].html.contains("primeira"));
        assert!(notes[1].html.contains("terceira"));

        let reloaded = NotesStore::new(backing).load_all();
        assert_eq!(reloaded.len(), 2);
    }

    #[test]
    fn order_is_insertion_order() {
        let (store, _backing) = fresh_store();
        let mut notes = Vec::new();
        store.add(&mut notes, "a");
        store.add(&mut notes, "b");
        let reloaded = store.load_all();
        assert!(reloaded[0].html.contains("a"));
        assert!(reloaded.last().unwrap().html.contains("b"));
    }

    #[test]
    fn blank_text_is_not_saved() {
        let (store, _backing) = fresh_store();
        let mut notes = Vec::new();
        store.add(&mut notes, "   ");
        assert!(notes.is_empty());
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn note_text_is_escaped() {
        let (store, _backing) = fresh_store();
        let mut notes = Vec::new();
        store.add(&mut notes, "<script>alert(1)</script>");
        assert!(!notes[0].html.contains("<script>"));
        assert!(notes[0].html.contains("&lt;script&gt;"));
    }

    #[test]
    fn corrupt_payload_reads_as_empty() {
        let backing = Arc::new(MemoryStore::new());
        backing.set(NOTES_KEY, "not json").unwrap();
        assert!(NotesStore::new(backing).load_all().is_empty());
    }

    #[test]
    fn sidebar_state_roundtrip() {
        let (store, _backing) = fresh_store();
        assert!(!store.sidebar_collapsed());
        store.set_sidebar_collapsed(true);
        assert!(store.sidebar_collapsed());
        store.set_sidebar_collapsed(false);
        assert!(!store.sidebar_collapsed());
    }
}
