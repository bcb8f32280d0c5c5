//! Reusable UI components.

mod modal;
mod toast;

pub use iced_fonts::LUCIDE_FONT_BYTES;
pub use modal::modal;
pub use toast::{ToastLevel, ToastState, with_toast};
