//! Keyboard shortcuts.
//!
//! Handles:
//! - Cmd/Ctrl+N (Add Word)
//! - Escape (close dialog, then quiz)
//! - Space (reveal quiz answer)
//! - Enter / Right arrow (next quiz word)

use iced::keyboard;
use iced::keyboard::key::Named;

use crate::message::{AddMessage, DeleteMessage, Message, QuizMessage};
use crate::state::{ActiveDialog, AppState};

/// Map a key press to the message it triggers in the current state.
#[allow(clippy::needless_pass_by_value)]
pub fn shortcut(
    state: &AppState,
    key: keyboard::Key,
    modifiers: keyboard::Modifiers,
) -> Option<Message> {
    if !state.is_ready() {
        return None;
    }

    let in_quiz = state.view.is_quiz();

    match key.as_ref() {
        keyboard::Key::Named(Named::Escape) => match &state.dialog {
            Some(ActiveDialog::Add(_)) => Some(Message::Add(AddMessage::Cancel)),
            Some(ActiveDialog::Delete(_)) => Some(Message::Delete(DeleteMessage::Cancel)),
            None if in_quiz => Some(Message::Quiz(QuizMessage::Close)),
            None => None,
        },

        keyboard::Key::Character("n") if modifiers.command() => state
            .dialog
            .is_none()
            .then_some(Message::Add(AddMessage::Open)),

        // Dialog text fields own the remaining keys.
        _ if state.dialog.is_some() => None,

        keyboard::Key::Named(Named::Space) if in_quiz => Some(Message::Quiz(QuizMessage::Reveal)),

        keyboard::Key::Named(Named::Enter | Named::ArrowRight) if in_quiz => {
            Some(Message::Quiz(QuizMessage::Next))
        }

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::{MessageHandler, QuizHandler};
    use crate::state::testing::{apple, state_with};
    use vocab_core::AddEntryForm;

    fn named(key: Named) -> keyboard::Key {
        keyboard::Key::Named(key)
    }

    #[test]
    fn test_escape_closes_dialog_before_quiz() {
        let mut state = state_with(vec![apple()]);
        let _ = QuizHandler.handle(&mut state, QuizMessage::Start);
        state.dialog = Some(ActiveDialog::Add(AddEntryForm::new()));

        let msg = shortcut(&state, named(Named::Escape), keyboard::Modifiers::default());
        assert!(matches!(msg, Some(Message::Add(AddMessage::Cancel))));

        state.dialog = None;
        let msg = shortcut(&state, named(Named::Escape), keyboard::Modifiers::default());
        assert!(matches!(msg, Some(Message::Quiz(QuizMessage::Close))));
    }

    #[test]
    fn test_quiz_keys_only_in_quiz() {
        let mut state = state_with(vec![apple()]);

        assert!(shortcut(&state, named(Named::Space), keyboard::Modifiers::default()).is_none());

        let _ = QuizHandler.handle(&mut state, QuizMessage::Start);

        assert!(matches!(
            shortcut(&state, named(Named::Space), keyboard::Modifiers::default()),
            Some(Message::Quiz(QuizMessage::Reveal))
        ));
        assert!(matches!(
            shortcut(&state, named(Named::ArrowRight), keyboard::Modifiers::default()),
            Some(Message::Quiz(QuizMessage::Next))
        ));
    }

    #[test]
    fn test_command_n_opens_add() {
        let state = state_with(Vec::new());

        let msg = shortcut(
            &state,
            keyboard::Key::Character("n".into()),
            keyboard::Modifiers::COMMAND,
        );

        assert!(matches!(msg, Some(Message::Add(AddMessage::Open))));
    }
}
