//! Pending `/upload` prompts: the admin's next message in the chat is taken as the voice note.

use dashmap::DashMap;

#[derive(Debug, Default)]
pub struct UploadSessions {
    /// (chat_id, user_id) → mood the upload will be tagged with.
    pending: DashMap<(i64, i64), String>,
}

impl UploadSessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts waiting for an upload; a newer `/upload` replaces the pending mood.
    pub fn begin(&self, chat_id: i64, user_id: i64, mood: String) {
        self.pending.insert((chat_id, user_id), mood);
    }

    /// Ends the session, returning its mood if one was pending.
    pub fn take(&self, chat_id: i64, user_id: i64) -> Option<String> {
        self.pending.remove(&(chat_id, user_id)).map(|(_, mood)| mood)
    }

    #[cfg(test)]
    fn is_pending(&self, chat_id: i64, user_id: i64) -> bool {
        self.pending.contains_key(&(chat_id, user_id))
    }
}
