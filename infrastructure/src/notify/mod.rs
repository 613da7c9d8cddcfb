//! Notification adapters

mod stdout;
mod telegram;

pub use stdout::StdoutNotifier;
pub use telegram::{TELEGRAM_MAX_CHARS, TelegramNotifier};
