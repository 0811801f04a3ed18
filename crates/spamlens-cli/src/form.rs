//! Submission form
//!
//! Holds the text box and the recent-messages list. A submit goes
//! `Idle -> Submitting -> Idle`; the list is re-fetched after a successful
//! submit and never updated optimistically.

use anyhow::Result;
use async_trait::async_trait;

use crate::api::MessageResponse;

/// How many messages the form shows
pub const RECENT_LIMIT: usize = 20;

/// Backend operations the form needs
#[async_trait]
pub trait MessageApi: Send + Sync {
    async fn post_message(&self, text: &str) -> Result<MessageResponse>;
    async fn get_messages(&self) -> Result<Vec<MessageResponse>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
}

/// Result of a submit attempt that did not fail
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Text box was empty; nothing was sent
    Skipped,
    /// Message was stored. `refresh_error` is set when the list could
    /// not be re-fetched afterwards; the form keeps the previous list.
    Stored {
        message: MessageResponse,
        refresh_error: Option<String>,
    },
}

#[derive(Debug)]
pub struct SubmitForm {
    text: String,
    state: FormState,
    messages: Vec<MessageResponse>,
}

impl Default for SubmitForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmitForm {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            state: FormState::Idle,
            messages: Vec::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Most recent messages, newest first
    pub fn messages(&self) -> &[MessageResponse] {
        &self.messages
    }

    /// Re-fetch the list, keeping only the newest `RECENT_LIMIT`
    pub async fn load(&mut self, api: &dyn MessageApi) -> Result<()> {
        let mut messages = api.get_messages().await?;
        messages.truncate(RECENT_LIMIT);
        self.messages = messages;
        Ok(())
    }

    /// Send the current text.
    ///
    /// On failure the text is kept so it can be retried. Once the POST
    /// succeeds the submit counts as done, even if the re-fetch fails.
    pub async fn submit(&mut self, api: &dyn MessageApi) -> Result<Submission> {
        if self.text.is_empty() {
            return Ok(Submission::Skipped);
        }

        self.state = FormState::Submitting;
        let result = api.post_message(&self.text).await;
        self.state = FormState::Idle;

        let message = result?;
        self.text.clear();
        let refresh_error = self.load(api).await.err().map(|e| format!("{:#}", e));

        Ok(Submission::Stored {
            message,
            refresh_error,
        })
    }
}
