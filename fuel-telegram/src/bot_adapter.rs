//! Wraps teloxide::Bot and implements [`fuel_core::Bot`]. Also carries the Telegram-only calls
//! made at startup (getMe, setWebhook).

use anyhow::Result as AnyResult;
use async_trait::async_trait;
use fuel_core::{Bot as CoreBot, BotError, Chat, Result};
use reqwest::Url;
use teloxide::{prelude::*, types::ChatId};
use tracing::{error, info, instrument};

use crate::config::TelegramConfig;

/// Thin wrapper around teloxide::Bot that implements fuel-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Builds the teloxide Bot from config, pointing it at TELEGRAM_API_URL when set.
    pub fn from_config(config: &TelegramConfig) -> AnyResult<Self> {
        let bot = teloxide::Bot::new(config.bot_token.clone());
        let bot = match config.api_url()? {
            Some(url) => bot.set_api_url(url),
            None => bot,
        };
        Ok(Self::new(bot))
    }

    /// Registers the webhook URL with Telegram. Repeating it with the same URL is harmless.
    #[instrument(skip(self, url))]
    pub async fn set_webhook(&self, url: Url) -> Result<()> {
        self.bot
            .set_webhook(url)
            .await
            .map_err(|e| BotError::Transport(e.to_string()))?;
        Ok(())
    }

    /// Returns the bot's username via getMe.
    pub async fn username(&self) -> Result<Option<String>> {
        let me = self
            .bot
            .get_me()
            .await
            .map_err(|e| BotError::Transport(e.to_string()))?;
        Ok(me.user.username.clone())
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| {
                error!(chat_id = chat.id, error = %e, "sendMessage failed");
                BotError::Transport(e.to_string())
            })?;
        info!(chat_id = chat.id, reply_len = text.len(), "Reply sent");
        Ok(())
    }
}
