//! Study list handler.

use iced::Task;

use super::MessageHandler;
use crate::message::{Message, StudyMessage};
use crate::state::{AppState, ViewState};

/// Handler for study list messages.
pub struct StudyHandler;

impl MessageHandler<StudyMessage> for StudyHandler {
    fn handle(&self, state: &mut AppState, msg: StudyMessage) -> Task<Message> {
        match msg {
            StudyMessage::Open => {
                state.view = ViewState::Study;
                state.refresh_study_list();
            }

            StudyMessage::Toggle(word) => {
                if state.study.toggle(&word).is_none() {
                    tracing::debug!("Ignored toggle for unlisted word '{}'", word);
                }
            }
        }
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::QuizHandler;
    use crate::message::QuizMessage;
    use crate::state::testing::{apple, cat, state_with};

    #[test]
    fn test_toggle_is_per_item() {
        let mut state = state_with(vec![apple(), cat()]);

        let _ = StudyHandler.handle(&mut state, StudyMessage::Toggle("cat".into()));

        assert!(state.study.is_revealed("cat"));
        assert!(!state.study.is_revealed("apple"));
    }

    #[test]
    fn test_open_resets_toggles_and_leaves_quiz() {
        let mut state = state_with(vec![apple(), cat()]);
        let _ = StudyHandler.handle(&mut state, StudyMessage::Toggle("cat".into()));
        let _ = QuizHandler.handle(&mut state, QuizMessage::Start);

        let _ = StudyHandler.handle(&mut state, StudyMessage::Open);

        assert!(state.quiz().is_none());
        assert_eq!(state.study.revealed_count(), 0);
    }
}
