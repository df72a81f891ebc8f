//! homework_bot_rust - Review-status watcher that relays homework verdicts
//! to Telegram.

pub mod config;
pub mod error;
pub mod logging;
pub mod practicum_client;
pub mod telegram_client;
pub mod verdict;
pub mod watcher;

pub use config::Config;
pub use error::WatchError;
pub use practicum_client::PracticumClient;
pub use telegram_client::TelegramClient;
pub use watcher::{WatchState, Watcher};
