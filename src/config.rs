//! Configuration for homework_bot_rust.
//!
//! Everything comes from the environment (optionally seeded from a `.env`
//! file). The three credentials are required; the rest has defaults.

use anyhow::{anyhow, Context, Result};
use std::env;
use std::time::Duration;

/// Review-status endpoint used when `HOMEWORK_ENDPOINT` is not set.
pub const DEFAULT_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

#[derive(Debug, Clone)]
pub struct Config {
    // Credentials
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: i64,

    // Polling
    pub endpoint: String,
    pub poll_interval: Duration,
    pub request_timeout: Duration,

    // Logging
    pub log_file: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let practicum_token = require("PRACTICUM_TOKEN")?;
        let telegram_token = require("TELEGRAM_TOKEN")?;
        let telegram_chat_id = require("TELEGRAM_CHAT_ID")?
            .parse::<i64>()
            .context("TELEGRAM_CHAT_ID must be a numeric Telegram chat id")?;

        let endpoint =
            env::var("HOMEWORK_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let poll_interval = Duration::from_secs(parse_u64("POLL_INTERVAL_SECS", 600)?);
        let request_timeout = Duration::from_secs(parse_u64("REQUEST_TIMEOUT_SECS", 30)?);
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "homework_bot.log".to_string());

        if poll_interval.is_zero() {
            return Err(anyhow!("POLL_INTERVAL_SECS must be > 0"));
        }

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint,
            poll_interval,
            request_timeout,
            log_file,
        })
    }
}

fn require(key: &str) -> Result<String> {
    let val = env::var(key).map_err(|_| anyhow!("{key} must be set"))?;
    if val.trim().is_empty() {
        return Err(anyhow!("{key} must not be empty"));
    }
    Ok(val)
}

fn parse_u64(key: &str, default: u64) -> Result<u64> {
    let raw = env::var(key).unwrap_or_else(|_| default.to_string());
    raw.parse::<u64>()
        .with_context(|| format!("Invalid {key}: {raw} (expected integer seconds)"))
}
