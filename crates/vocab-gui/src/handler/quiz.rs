//! Quiz panel handler.

use iced::Task;
use vocab_core::{QuizError, QuizSession, QuizState};

use super::MessageHandler;
use crate::component::ToastState;
use crate::message::{Message, QuizMessage};
use crate::state::{AppState, ViewState};

/// Handler for quiz messages.
pub struct QuizHandler;

impl MessageHandler<QuizMessage> for QuizHandler {
    fn handle(&self, state: &mut AppState, msg: QuizMessage) -> Task<Message> {
        match msg {
            QuizMessage::Start => {
                let Some(store) = &state.store else {
                    return Task::none();
                };
                match QuizSession::start(store.all()) {
                    Ok(session) => {
                        tracing::info!("Quiz started with {} words", session.len());
                        state.view = ViewState::Quiz(session);
                    }
                    Err(err) => {
                        state.show_toast(ToastState::warning(err.user_message()));
                    }
                }
            }

            QuizMessage::Reveal => {
                let rejected = match &mut state.view {
                    ViewState::Quiz(session) => session.reveal().err(),
                    ViewState::Study => None,
                };
                if let Some(err) = rejected {
                    state.show_toast(ToastState::info(err.user_message()));
                }
            }

            QuizMessage::Next => {
                if let ViewState::Quiz(session) = &mut state.view {
                    match session.advance() {
                        Ok(QuizState::Finished) => {
                            tracing::info!("Quiz finished");
                            state.show_toast(ToastState::info(QuizError::Finished.user_message()));
                        }
                        Ok(QuizState::Active { .. }) => {}
                        Err(err) => {
                            state.show_toast(ToastState::info(err.user_message()));
                        }
                    }
                }
            }

            QuizMessage::Close => {
                state.view = ViewState::Study;
            }
        }
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ToastLevel;
    use crate::state::testing::{apple, cat, state_with};
    use vocab_core::Entry;

    fn quiz(state: &mut AppState, msg: QuizMessage) {
        let _ = QuizHandler.handle(state, msg);
    }

    #[test]
    fn test_start_on_empty_store_warns() {
        let mut state = state_with(Vec::new());

        quiz(&mut state, QuizMessage::Start);

        assert!(state.quiz().is_none());
        let toast = state.toast.as_ref().unwrap();
        assert_eq!(toast.level, ToastLevel::Warning);
        assert_eq!(toast.message, QuizError::EmptyCollection.user_message());
    }

    #[test]
    fn test_single_word_quiz() {
        let mut state = state_with(vec![apple()]);

        quiz(&mut state, QuizMessage::Start);
        assert_eq!(state.quiz().unwrap().current_question(), Ok("apple"));

        quiz(&mut state, QuizMessage::Reveal);
        assert_eq!(state.quiz().unwrap().revealed_answer().unwrap().meaning, "a fruit");

        quiz(&mut state, QuizMessage::Next);
        assert!(state.quiz().unwrap().is_finished());
        assert_eq!(
            state.toast.as_ref().unwrap().message,
            "All words have been asked."
        );
    }

    #[test]
    fn test_reveal_after_finish_reports_notice() {
        let mut state = state_with(vec![apple()]);
        quiz(&mut state, QuizMessage::Start);
        quiz(&mut state, QuizMessage::Next);
        state.toast = None;

        quiz(&mut state, QuizMessage::Reveal);

        assert_eq!(state.toast.as_ref().unwrap().level, ToastLevel::Info);
    }

    #[test]
    fn test_store_changes_do_not_touch_running_quiz() {
        let mut state = state_with(vec![apple(), cat()]);
        quiz(&mut state, QuizMessage::Start);

        if let Some(store) = &mut state.store {
            store.delete("apple").unwrap();
            store
                .upsert(Entry::new("dog", "an animal", "The dog barks."))
                .unwrap();
        }

        let session = state.quiz().unwrap();
        assert_eq!(session.len(), 2);
        assert!(session.sequence().iter().any(|entry| entry.word == "apple"));
    }

    #[test]
    fn test_close_returns_to_list() {
        let mut state = state_with(vec![apple()]);
        quiz(&mut state, QuizMessage::Start);

        quiz(&mut state, QuizMessage::Close);

        assert!(state.quiz().is_none());
    }
}
