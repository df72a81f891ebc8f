//! Telegram delivery.

use log::{error, info};
use teloxide::prelude::*;
use teloxide::types::ChatId;

/// Sends plain-text lines to one fixed chat.
///
/// Delivery failures are logged and swallowed: a dead Telegram session must
/// not change the watch loop's control flow.
#[derive(Clone)]
pub struct TelegramClient {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramClient {
    pub fn new(token: &str, chat_id: i64) -> Self {
        Self {
            bot: Bot::new(token.to_string()),
            chat_id: ChatId(chat_id),
        }
    }

    pub async fn send(&self, text: &str) {
        match self.bot.send_message(self.chat_id, text.to_string()).await {
            Ok(_) => info!("Telegram message sent: {text}"),
            Err(err) => error!("Telegram message not sent: {err}"),
        }
    }
}
