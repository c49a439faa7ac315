//! Ordered in-memory display list for the chat window.
//!
//! Messages are appended in call order and never reordered. A loading entry is
//! pushed right before each transport call and removed exactly once before the
//! reply (or error message) is appended.

use crate::types::{ChatMessage, Role};

pub type MessageId = u64;

#[derive(Clone, Debug, Default)]
pub struct MessageLog {
    next_id: MessageId,
    entries: Vec<ChatMessage>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, role: Role, content: impl Into<String>, is_markup: bool) -> MessageId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(ChatMessage {
            id,
            role,
            content: content.into(),
            is_markup,
        });
        id
    }

    pub fn push_loading(&mut self) -> MessageId {
        self.push(Role::Loading, "", false)
    }

    /// Remove the entry with `id`. Returns false when it is already gone,
    /// which is fine: a cleared log drops pending loading ids.
    pub fn remove(&mut self, id: MessageId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|msg| msg.id != id);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[ChatMessage] {
        &self.entries
    }
}
