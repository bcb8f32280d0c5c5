//! Message handler architecture.
//!
//! Each handler implements [`MessageHandler`] for one message type and owns
//! the logic for that feature. `App::update()` only dispatches:
//!
//! ```ignore
//! pub fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Quiz(msg) => QuizHandler.handle(&mut self.state, msg),
//!         Message::Add(msg) => AddHandler.handle(&mut self.state, msg),
//!         // ...
//!     }
//! }
//! ```
//!
//! Handlers never touch the store while it is closed after a load failure.

mod editor;
mod keyboard;
mod quiz;
mod study;

use iced::Task;
use vocab_core::StoreError;

use crate::component::ToastState;
use crate::error::GuiError;
use crate::message::Message;
use crate::state::AppState;

pub use editor::{AddHandler, DeleteHandler};
pub use keyboard::shortcut;
pub use quiz::QuizHandler;
pub use study::StudyHandler;

/// Trait for handling messages in the Iced architecture.
///
/// # Type Parameters
///
/// * `M` - The message type this handler processes
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a follow-up task.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}

/// Show a failed write as an error toast.
fn report_save_failure(state: &mut AppState, err: &StoreError) {
    tracing::warn!("Change rolled back: {}", err);
    let error = GuiError::store_save(err);
    let message = match error.suggestion() {
        Some(hint) => format!("{} {}", error.user_message(), hint),
        None => error.user_message(),
    };
    state.show_toast(ToastState::error(message));
}
