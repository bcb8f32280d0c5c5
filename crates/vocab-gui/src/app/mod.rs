//! Main application module for Vocabulary Studio.
//!
//! The architecture follows the Elm pattern: State → Message → Update → View.
//!
//! - **All state changes happen in `update()`** - Views are pure functions
//! - **Handlers own feature logic** - `update()` only dispatches

mod subscription;

use iced::{Element, Subscription, Task, Theme, keyboard};
use vocab_core::FileStorage;

use crate::component::with_toast;
use crate::handler::{
    AddHandler, DeleteHandler, MessageHandler, QuizHandler, StudyHandler, shortcut,
};
use crate::message::{Message, ToastMessage};
use crate::state::{AppState, Settings};
use crate::theme::app_theme;
use crate::view::dialog::view_dialog;
use crate::view::{view_home, view_load_error, word_count};

// =============================================================================
// APPLICATION
// =============================================================================

/// Main application struct.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create the application from settings already read by `main`.
    ///
    /// Called once at startup by the iced runtime.
    pub fn new(settings: Settings) -> (Self, Task<Message>) {
        let path = settings.data_file();
        tracing::info!("Using vocabulary file {}", path.display());

        let state = AppState::open(settings, Box::new(FileStorage::new(path)));
        (Self::with_state(state), Task::none())
    }

    /// Wrap already-built state.
    pub fn with_state(state: AppState) -> Self {
        Self { state }
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Panels and dialogs
            // =================================================================
            Message::Study(msg) => StudyHandler.handle(&mut self.state, msg),

            Message::Quiz(msg) => QuizHandler.handle(&mut self.state, msg),

            Message::Add(msg) => AddHandler.handle(&mut self.state, msg),

            Message::Delete(msg) => DeleteHandler.handle(&mut self.state, msg),

            // =================================================================
            // Global events
            // =================================================================
            Message::KeyPressed(key, modifiers) => self.handle_key_press(key, modifiers),

            Message::Toast(ToastMessage::Dismiss) => {
                self.state.toast = None;
                Task::none()
            }

            Message::Toast(ToastMessage::Expired(id)) => {
                // A newer toast has its own timer.
                if self.state.toast.as_ref().is_some_and(|toast| toast.id == id) {
                    self.state.toast = None;
                }
                Task::none()
            }

            Message::Quit => {
                tracing::info!("Exiting");
                iced::exit()
            }

            Message::Noop => Task::none(),
        }
    }

    /// Handle keyboard shortcuts.
    fn handle_key_press(
        &mut self,
        key: keyboard::Key,
        modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        match shortcut(&self.state, key, modifiers) {
            Some(message) => self.update(message),
            None => Task::none(),
        }
    }

    /// Render the main window.
    pub fn view(&self) -> Element<'_, Message> {
        if let Some(error) = &self.state.load_error {
            return view_load_error(error);
        }

        let base = view_home(&self.state);

        let content = match &self.state.dialog {
            Some(dialog) => view_dialog(base, dialog),
            None => base,
        };

        match &self.state.toast {
            Some(toast) => with_toast(content, toast),
            None => content,
        }
    }

    /// Window title with the current word count.
    pub fn title(&self) -> String {
        if self.state.is_ready() {
            format!("Vocabulary Studio ({})", word_count(self.state.entry_count()))
        } else {
            "Vocabulary Studio".to_string()
        }
    }

    /// Get the theme.
    pub fn theme(&self) -> Theme {
        app_theme()
    }

    /// Subscribe to runtime events.
    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_subscription(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ToastState;
    use crate::state::testing::{apple, state_with};

    #[test]
    fn test_title_shows_count() {
        let app = App::with_state(state_with(vec![apple()]));
        assert_eq!(app.title(), "Vocabulary Studio (1 word)");
    }

    #[test]
    fn test_replaced_toast_outlives_old_timer() {
        let mut app = App::with_state(state_with(vec![apple()]));
        app.state.show_toast(ToastState::info("first"));
        let first = app.state.toast.as_ref().unwrap().id;
        app.state.show_toast(ToastState::info("second"));
        let second = app.state.toast.as_ref().unwrap().id;
        assert_ne!(first, second);

        let _ = app.update(Message::Toast(ToastMessage::Expired(first)));
        assert_eq!(app.state.toast.as_ref().unwrap().message, "second");

        let _ = app.update(Message::Toast(ToastMessage::Expired(second)));
        assert!(app.state.toast.is_none());
    }
}
