//! Telegram Bot API notifier
//!
//! `POST {api}/bot{token}/sendMessage` with a JSON body. The Bot API answers
//! `{"ok": true, ...}` on success and `{"ok": false, "description": ...}`
//! otherwise.

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::json;

use crate::core::ports::Notifier;
use crate::error::RelayError;

/// Envelope of every Bot API reply
#[derive(Debug, Deserialize)]
struct BotReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Sends plain-text messages to one chat
#[derive(Debug, Clone)]
pub struct TelegramNotifier {
    client: Client,
    api_url: String,
    token: String,
    chat_id: String,
}

impl TelegramNotifier {
    /// Create a notifier posting to `chat_id` through `api_url`
    #[must_use]
    pub fn new(
        api_url: impl Into<String>,
        token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into(),
            token: token.into(),
            chat_id: chat_id.into(),
        }
    }

    /// Chat the notifier delivers to
    #[must_use]
    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_url.trim_end_matches('/'), self.token)
    }

    fn send(&self, text: &str) -> Result<(), RelayError> {
        // The token is part of the URL, so reqwest errors are stripped of it.
        let response = self
            .client
            .post(self.send_message_url())
            .json(&json!({ "chat_id": self.chat_id, "text": text }))
            .send()
            .map_err(|e| RelayError::Delivery(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| RelayError::Delivery(e.without_url().to_string()))?;

        match serde_json::from_str::<BotReply>(&body) {
            Ok(reply) if reply.ok && status.is_success() => Ok(()),
            Ok(reply) => Err(RelayError::Delivery(
                reply.description.unwrap_or_else(|| format!("status {status}")),
            )),
            Err(_) => Err(RelayError::Delivery(format!("status {status}: unexpected reply"))),
        }
    }
}

impl Notifier for TelegramNotifier {
    fn notify(&self, text: &str) -> Result<(), RelayError> {
        match self.send(text) {
            Ok(()) => {
                log::debug!("Message \"{text}\" sent");
                Ok(())
            },
            Err(e) => {
                log::error!("{e}");
                Err(e)
            },
        }
    }
}
