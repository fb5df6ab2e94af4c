//! Chat assistant conversation log

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::view::{CHAT_FAILED, THINKING};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
    /// Failure bubble shown in place of a reply
    Error,
    /// Placeholder while a reply is outstanding
    Typing,
}

/// A chat bubble
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChatEntry {
    pub id: String,
    pub role: ChatRole,
    pub text: String,
    pub timestamp: String,
    /// Set on typing placeholders: the request they stand in for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending: Option<String>,
}

impl ChatEntry {
    fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            text: text.into(),
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
            pending: None,
        }
    }
}

/// Handle for an outstanding reply
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingReply {
    pub id: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatLog {
    entries: Vec<ChatEntry>,
    /// Bumped whenever the log should scroll to the bottom
    scroll_ticks: u64,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn scroll_ticks(&self) -> u64 {
        self.scroll_ticks
    }

    pub fn is_waiting(&self) -> bool {
        self.entries.iter().any(|e| e.role == ChatRole::Typing)
    }

    /// Append the user's bubble and a typing placeholder.
    ///
    /// Whitespace-only input is ignored and returns `None`.
    pub fn submit(&mut self, input: &str) -> Option<PendingReply> {
        let message = input.trim();
        if message.is_empty() {
            return None;
        }

        self.entries.push(ChatEntry::new(ChatRole::User, message));

        let pending = PendingReply {
            id: Uuid::new_v4().to_string(),
            message: message.to_string(),
        };
        let mut typing = ChatEntry::new(ChatRole::Typing, THINKING);
        typing.pending = Some(pending.id.clone());
        self.entries.push(typing);
        self.scroll_ticks += 1;

        Some(pending)
    }

    /// Replace the pending placeholder with exactly one reply or failure bubble.
    pub fn resolve<E>(&mut self, pending: &PendingReply, reply: Result<String, E>) {
        self.entries
            .retain(|e| e.pending.as_deref() != Some(pending.id.as_str()));

        let entry = match reply {
            Ok(text) => ChatEntry::new(ChatRole::Assistant, text),
            Err(_) => ChatEntry::new(ChatRole::Error, CHAT_FAILED),
        };
        self.entries.push(entry);
        self.scroll_ticks += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles(log: &ChatLog) -> Vec<ChatRole> {
        log.entries().iter().map(|e| e.role).collect()
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut log = ChatLog::new();
        assert!(log.submit("").is_none());
        assert!(log.submit("   \t").is_none());
        assert!(log.entries().is_empty());
        assert_eq!(log.scroll_ticks(), 0);
    }

    #[test]
    fn test_submit_trims_and_adds_placeholder() {
        let mut log = ChatLog::new();
        let pending = log.submit("  hello ").unwrap();
        assert_eq!(pending.message, "hello");
        assert_eq!(roles(&log), vec![ChatRole::User, ChatRole::Typing]);
        assert_eq!(log.entries()[0].text, "hello");
        assert!(log.is_waiting());
    }

    #[test]
    fn test_resolve_success_replaces_placeholder() {
        let mut log = ChatLog::new();
        let pending = log.submit("hello").unwrap();
        log.resolve::<()>(&pending, Ok("How can I help with farming today?".to_string()));

        assert_eq!(roles(&log), vec![ChatRole::User, ChatRole::Assistant]);
        assert!(!log.is_waiting());
        assert_eq!(log.scroll_ticks(), 2);
    }

    #[test]
    fn test_resolve_failure_shows_single_error() {
        let mut log = ChatLog::new();
        let pending = log.submit("hello").unwrap();
        log.resolve::<&str>(&pending, Err("offline"));

        assert_eq!(roles(&log), vec![ChatRole::User, ChatRole::Error]);
        assert_eq!(log.entries()[1].text, CHAT_FAILED);
    }

    #[test]
    fn test_overlapping_sends_keep_their_own_placeholder() {
        let mut log = ChatLog::new();
        let first = log.submit("one").unwrap();
        let second = log.submit("two").unwrap();

        log.resolve::<()>(&second, Ok("reply two".to_string()));
        assert!(log.is_waiting());
        assert_eq!(
            log.entries().iter().filter(|e| e.role == ChatRole::Typing).count(),
            1
        );

        log.resolve::<()>(&first, Ok("reply one".to_string()));
        assert!(!log.is_waiting());
        assert_eq!(
            roles(&log),
            vec![
                ChatRole::User,
                ChatRole::User,
                ChatRole::Assistant,
                ChatRole::Assistant
            ]
        );
    }
}
