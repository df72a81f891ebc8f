//! Live-endpoint tests for the homework watcher.
//!
//! These talk to the real Practicum API and a real Telegram bot; run them
//! with `cargo test -- --ignored` and live credentials in the environment.

use std::time::Duration;

use homework_bot_rust::config::DEFAULT_ENDPOINT;
use homework_bot_rust::verdict::check_response;
use homework_bot_rust::{PracticumClient, TelegramClient};

#[tokio::test]
#[ignore] // Requires network + PRACTICUM_TOKEN
async fn test_homework_statuses_fetch() {
    let token = std::env::var("PRACTICUM_TOKEN").expect("PRACTICUM_TOKEN must be set");
    let client = PracticumClient::new(
        DEFAULT_ENDPOINT.to_string(),
        token,
        Duration::from_secs(30),
    );

    match client.homework_statuses(0).await {
        Ok(payload) => {
            let homeworks = check_response(&payload).expect("payload should validate");
            println!("Fetched {} homework entries", homeworks.len());
        }
        Err(e) => {
            // Log but don't fail - API may be unavailable
            println!("Warning: Could not fetch homework statuses: {}", e);
        }
    }
}

#[tokio::test]
#[ignore] // Requires network + a live bot
async fn test_telegram_send() {
    let token = std::env::var("TELEGRAM_TOKEN").expect("TELEGRAM_TOKEN must be set");
    let chat_id = std::env::var("TELEGRAM_CHAT_ID")
        .expect("TELEGRAM_CHAT_ID must be set")
        .parse::<i64>()
        .expect("TELEGRAM_CHAT_ID must be numeric");

    let client = TelegramClient::new(&token, chat_id);
    client.send("homework_bot integration check").await;
}
