//! Add Word and Delete Word dialog handlers.
//!
//! Handles:
//! - Opening and cancelling both dialogs
//! - Field edits and inline validation for Add
//! - Selection and confirmation for Delete

use iced::Task;
use vocab_core::{AddEntryForm, DeleteEntryForm, EditorError, Upsert};

use super::{MessageHandler, report_save_failure};
use crate::component::ToastState;
use crate::message::{AddMessage, DeleteMessage, Message};
use crate::state::{ActiveDialog, AppState};

// =============================================================================
// ADD
// =============================================================================

/// Handler for the Add Word dialog.
pub struct AddHandler;

impl MessageHandler<AddMessage> for AddHandler {
    fn handle(&self, state: &mut AppState, msg: AddMessage) -> Task<Message> {
        match msg {
            AddMessage::Open => {
                if state.is_ready() {
                    state.dialog = Some(ActiveDialog::Add(AddEntryForm::new()));
                }
            }

            AddMessage::FieldChanged(field, value) => {
                if let Some(ActiveDialog::Add(form)) = &mut state.dialog {
                    form.set_field(field, value);
                }
            }

            AddMessage::Submit => submit(state),

            AddMessage::Cancel => {
                if matches!(state.dialog, Some(ActiveDialog::Add(_))) {
                    state.dialog = None;
                }
            }
        }
        Task::none()
    }
}

fn submit(state: &mut AppState) {
    let (Some(ActiveDialog::Add(form)), Some(store)) = (&mut state.dialog, &mut state.store)
    else {
        return;
    };

    match form.submit(store) {
        Ok((entry, outcome)) => {
            state.dialog = None;
            state.refresh_study_list();
            let message = match outcome {
                Upsert::Inserted => format!("Added \"{}\"", entry.word),
                Upsert::Replaced(_) => format!("Updated \"{}\"", entry.word),
            };
            state.show_toast(ToastState::success(message));
        }
        // Shown inline; the form keeps the error.
        Err(EditorError::Validation(_)) => {}
        Err(EditorError::Store(err)) => report_save_failure(state, &err),
        Err(err @ EditorError::NothingSelected) => {
            state.show_toast(ToastState::warning(err.user_message()));
        }
    }
}

// =============================================================================
// DELETE
// =============================================================================

/// Handler for the Delete Word dialog.
pub struct DeleteHandler;

impl MessageHandler<DeleteMessage> for DeleteHandler {
    fn handle(&self, state: &mut AppState, msg: DeleteMessage) -> Task<Message> {
        match msg {
            DeleteMessage::Open => {
                let Some(store) = &state.store else {
                    return Task::none();
                };
                if store.is_empty() {
                    state.show_toast(ToastState::info("There are no words to delete."));
                } else {
                    state.dialog = Some(ActiveDialog::Delete(DeleteEntryForm::new(store.words())));
                }
            }

            DeleteMessage::Selected(word) => {
                if let Some(ActiveDialog::Delete(form)) = &mut state.dialog {
                    form.select(word);
                }
            }

            DeleteMessage::Confirm => confirm_delete(state),

            DeleteMessage::Cancel => {
                if matches!(state.dialog, Some(ActiveDialog::Delete(_))) {
                    state.dialog = None;
                }
            }
        }
        Task::none()
    }
}

fn confirm_delete(state: &mut AppState) {
    let (Some(ActiveDialog::Delete(form)), Some(store)) = (&state.dialog, &mut state.store) else {
        return;
    };

    match form.confirm(store) {
        Ok(removed) => {
            state.dialog = None;
            state.refresh_study_list();
            state.show_toast(ToastState::success(format!(
                "Word deleted: \"{}\"",
                removed.word
            )));
        }
        Err(err @ EditorError::NothingSelected) => {
            state.show_toast(ToastState::warning(err.user_message()));
        }
        Err(EditorError::Store(err)) if err.is_not_found() => {
            state.dialog = None;
            state.refresh_study_list();
            state.show_toast(ToastState::warning(err.user_message()));
        }
        Err(EditorError::Store(err)) => report_save_failure(state, &err),
        Err(EditorError::Validation(_)) => {}
    }
}
