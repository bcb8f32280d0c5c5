//! Message hierarchy for the Elm-style architecture.
//!
//! All user interactions and events flow through these message types.

mod editor;
mod quiz;
mod study;

use iced::keyboard;

pub use editor::{AddMessage, DeleteMessage};
pub use quiz::QuizMessage;
pub use study::StudyMessage;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Panels
    // =========================================================================
    /// Word list and reveal toggles
    Study(StudyMessage),

    /// Random quiz
    Quiz(QuizMessage),

    // =========================================================================
    // Dialogs
    // =========================================================================
    /// Add Word dialog
    Add(AddMessage),

    /// Delete Word dialog
    Delete(DeleteMessage),

    // =========================================================================
    // Global events
    // =========================================================================
    /// Keyboard event
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    /// Toast notifications
    Toast(ToastMessage),

    /// Exit the application
    Quit,

    /// No operation - used for ignored events
    Noop,
}

/// Toast notification events.
#[derive(Debug, Clone)]
pub enum ToastMessage {
    /// Close button.
    Dismiss,

    /// The timer for the toast with this id ran out.
    Expired(u64),
}
