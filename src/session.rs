//! Presentation-side chat state
//!
//! Owns the visible transcript and UI flags and drives the responder once
//! per user turn. Rendering itself lives in whatever front end consumes
//! this state.

use crate::config::UiConfig;
use crate::knowledge::TestInfo;
use crate::logging;
use crate::message::{BotResponse, ChatMessage};
use crate::responder::Responder;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SendOutcome {
    /// Blank input, or a reply is still pending.
    Ignored,
    Replied,
    /// The responder failed; the transcript holds only the user message.
    Failed,
}

/// Serializable view of the session for a front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub id: String,
    pub messages: Vec<ChatMessage>,
    pub is_loading: bool,
    pub is_dark_mode: bool,
    pub is_sidebar_open: bool,
    pub is_info_open: bool,
}

/// Holds the loading flag up for the duration of one responder call.
/// Clears it on drop, so a cancelled send does not leave the session stuck.
struct LoadingGuard<'a> {
    flag: &'a mut bool,
}

impl<'a> LoadingGuard<'a> {
    fn set(flag: &'a mut bool) -> Self {
        *flag = true;
        Self { flag }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        *self.flag = false;
    }
}

pub struct ChatSession {
    id: String,
    responder: Arc<dyn Responder>,
    catalog: Vec<TestInfo>,
    messages: Vec<ChatMessage>,
    is_loading: bool,
    is_dark_mode: bool,
    is_sidebar_open: bool,
    is_info_open: bool,
}

impl ChatSession {
    pub fn new(
        responder: Arc<dyn Responder>,
        catalog: Vec<TestInfo>,
        ui: &UiConfig,
        viewport_width: u32,
    ) -> Self {
        let id = Uuid::new_v4().to_string();
        logging::log_conversation(Some(&id), "Session started");

        Self {
            id,
            responder,
            catalog,
            messages: Vec::new(),
            is_loading: false,
            is_dark_mode: ui.dark_mode,
            is_sidebar_open: viewport_width >= ui.sidebar_breakpoint,
            is_info_open: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_dark_mode(&self) -> bool {
        self.is_dark_mode
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.is_sidebar_open
    }

    pub fn is_info_open(&self) -> bool {
        self.is_info_open
    }

    /// Catalog entries for the sidebar shortcuts and welcome chips.
    pub fn quick_links(&self) -> &[TestInfo] {
        &self.catalog
    }

    /// Send one user turn and wait for the reply.
    pub async fn send_message(&mut self, text: &str) -> SendOutcome {
        let text = text.trim();
        if text.is_empty() || self.is_loading {
            return SendOutcome::Ignored;
        }

        self.push_user(text);

        let responder = Arc::clone(&self.responder);
        let result = {
            let _loading = LoadingGuard::set(&mut self.is_loading);
            responder.respond(text).await
        };

        match result {
            Ok(response) => {
                self.push_bot(response);
                SendOutcome::Replied
            }
            Err(e) => {
                logging::log_error(Some(&self.id), &format!("Responder failed: {}", e));
                SendOutcome::Failed
            }
        }
    }

    fn push_user(&mut self, text: &str) {
        let message = ChatMessage::user(text);
        logging::log_conversation(
            Some(&self.id),
            &format!("Appended {} message (transcript={})", message.role.as_str(), self.messages.len() + 1),
        );
        self.messages.push(message);
    }

    fn push_bot(&mut self, response: BotResponse) {
        let kind = response
            .attachment
            .as_ref()
            .map(|a| a.kind())
            .unwrap_or("none");
        let message = ChatMessage::bot(response);
        logging::log_conversation(
            Some(&self.id),
            &format!(
                "Appended {} message (attachment={}, transcript={})",
                message.role.as_str(),
                kind,
                self.messages.len() + 1
            ),
        );
        self.messages.push(message);
    }

    pub fn toggle_theme(&mut self) {
        self.is_dark_mode = !self.is_dark_mode;
    }

    pub fn toggle_sidebar(&mut self) {
        self.is_sidebar_open = !self.is_sidebar_open;
    }

    pub fn close_sidebar(&mut self) {
        self.is_sidebar_open = false;
    }

    pub fn open_info(&mut self) {
        self.is_info_open = true;
    }

    pub fn close_info(&mut self) {
        self.is_info_open = false;
    }

    pub fn clear(&mut self) {
        self.messages.clear();
        logging::log_conversation(Some(&self.id), "Transcript cleared");
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id.clone(),
            messages: self.messages.clone(),
            is_loading: self.is_loading,
            is_dark_mode: self.is_dark_mode,
            is_sidebar_open: self.is_sidebar_open,
            is_info_open: self.is_info_open,
        }
    }
}
