//! Application subscriptions.
//!
//! | Subscription  | Interval   | Condition     | Purpose                    |
//! |---------------|------------|---------------|----------------------------|
//! | Keyboard      | Continuous | Always        | Global keyboard shortcuts  |
//! | Toast Dismiss | 5 seconds  | Toast visible | Auto-dismiss notifications |

use std::time::Duration;

use iced::Subscription;
use iced::keyboard;
use iced::time;

use crate::message::{Message, ToastMessage};
use crate::state::AppState;

const TOAST_LIFETIME: Duration = Duration::from_secs(5);

/// Create all application subscriptions.
pub fn create_subscription(state: &AppState) -> Subscription<Message> {
    Subscription::batch([keyboard_subscription(), toast_subscription(state)])
}

/// Key presses for shortcuts.
fn keyboard_subscription() -> Subscription<Message> {
    keyboard::listen().map(|event| match event {
        keyboard::Event::KeyPressed { key, modifiers, .. } => Message::KeyPressed(key, modifiers),
        _ => Message::Noop,
    })
}

/// Expire the visible toast after 5 seconds.
///
/// Keyed on the toast id, so replacing the toast restarts the countdown.
fn toast_subscription(state: &AppState) -> Subscription<Message> {
    match &state.toast {
        Some(toast) => time::every(TOAST_LIFETIME)
            .with(toast.id)
            .map(|(id, _)| Message::Toast(ToastMessage::Expired(id))),
        None => Subscription::none(),
    }
}
