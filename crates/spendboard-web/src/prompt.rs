//! Blocking browser dialogs behind the core `Prompt` trait

use leptos::prelude::window;
use spendboard_core::Prompt;

pub struct BrowserPrompt;

impl Prompt for BrowserPrompt {
    fn confirm(&self, message: &str) -> bool {
        window().confirm_with_message(message).unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Err(e) = window().alert_with_message(message) {
            leptos::logging::warn!("alert failed: {:?}", e);
        }
    }
}
