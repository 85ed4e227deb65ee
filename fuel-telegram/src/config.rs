//! Webhook service config, loaded from env: BOT_TOKEN and APP_URL (required), PORT, BIND_ADDR,
//! TELEGRAM_API_URL (or TELOXIDE_API_URL), LOG_FILE (optional).

use anyhow::{Context, Result};
use reqwest::Url;
use std::env;
use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

/// Bot token doubles as the webhook path secret.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    /// Public base URL of this service, without trailing `/`.
    pub app_url: String,
    pub bind_addr: String,
    pub port: u16,
    pub telegram_api_url: Option<String>,
    pub log_file: Option<String>,
}

impl TelegramConfig {
    /// Loads from env. BOT_TOKEN and APP_URL are required; a malformed PORT is an error.
    pub fn from_env() -> Result<Self> {
        Self::load(None, None)
    }

    /// Like [`from_env`](Self::from_env), but `token` / `app_url` (e.g. from the command line)
    /// take precedence over BOT_TOKEN / APP_URL.
    pub fn load(token: Option<String>, app_url: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let app_url = match app_url {
            Some(u) => u,
            None => env::var("APP_URL").map_err(|_| anyhow::anyhow!("APP_URL not set"))?,
        };
        let port = match env::var("PORT") {
            Ok(p) => p
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {}", p))?,
            Err(_) => DEFAULT_PORT,
        };
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").ok();

        let mut config = Self::new(bot_token, app_url);
        config.bind_addr = bind_addr;
        config.port = port;
        config.telegram_api_url = telegram_api_url;
        config.log_file = log_file;
        Ok(config)
    }

    /// Builds config with the given token and public URL; other fields default.
    pub fn new(bot_token: impl Into<String>, app_url: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            app_url: app_url.into().trim_end_matches('/').to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            port: DEFAULT_PORT,
            telegram_api_url: None,
            log_file: None,
        }
    }

    /// `{app_url}/webhook/{bot_token}`: the URL registered with Telegram.
    pub fn webhook_url(&self) -> Result<Url> {
        let raw = format!("{}/webhook/{}", self.app_url, self.bot_token);
        Url::parse(&raw).with_context(|| format!("Invalid webhook URL built from APP_URL: {}", self.app_url))
    }

    /// Address the HTTP server binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .bind_addr
            .parse()
            .with_context(|| format!("BIND_ADDR is not an IP address: {}", self.bind_addr))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Bot API base URL override, if configured and valid.
    pub fn api_url(&self) -> Result<Option<Url>> {
        self.telegram_api_url
            .as_deref()
            .map(|u| Url::parse(u).with_context(|| format!("Invalid TELEGRAM_API_URL: {}", u)))
            .transpose()
    }
}
