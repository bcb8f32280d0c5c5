//! Delete Word dialog.

use iced::widget::{button, column, pick_list, text};
use iced::{Element, Length};
use vocab_core::DeleteEntryForm;

use crate::component::modal;
use crate::message::{DeleteMessage, Message};
use crate::theme::{SPACING_MD, SPACING_SM, text_muted};

/// Render the Delete Word dialog over `base`.
pub fn view_delete_dialog<'a>(
    base: Element<'a, Message>,
    title: &'a str,
    form: &'a DeleteEntryForm,
) -> Element<'a, Message> {
    let picker = pick_list(
        form.words(),
        form.selected().map(str::to_string),
        |word: String| Message::Delete(DeleteMessage::Selected(word)),
    )
    .placeholder("Select a word")
    .width(Length::Fill)
    .padding(SPACING_SM);

    let content = column![
        text("Choose the word to remove. This cannot be undone.")
            .size(14)
            .style(text_muted),
        picker,
    ]
    .spacing(SPACING_MD);

    let cancel = button(text("Cancel").size(14))
        .on_press(Message::Delete(DeleteMessage::Cancel))
        .padding([SPACING_SM, SPACING_MD])
        .style(button::secondary);

    let confirm = button(text("Delete").size(14))
        .on_press(Message::Delete(DeleteMessage::Confirm))
        .padding([SPACING_SM, SPACING_MD])
        .style(button::danger);

    modal(
        base,
        title,
        content.into(),
        Message::Delete(DeleteMessage::Cancel),
        vec![cancel.into(), confirm.into()],
    )
}
