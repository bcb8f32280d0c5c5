//! Add Word dialog.

use iced::widget::{button, column, text, text_input};
use iced::{Element, Theme};
use vocab_core::{AddEntryForm, EntryField};

use crate::component::modal;
use crate::message::{AddMessage, Message};
use crate::theme::{SPACING_MD, SPACING_SM, SPACING_XS};

/// Render the Add Word dialog over `base`.
pub fn view_add_dialog<'a>(
    base: Element<'a, Message>,
    title: &'a str,
    form: &'a AddEntryForm,
) -> Element<'a, Message> {
    let mut content = column![].spacing(SPACING_MD);

    for field in EntryField::ALL {
        content = content.push(view_field(form, field));
    }

    if let Some(err) = &form.error {
        content = content.push(
            text(err.user_message())
                .size(13)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().danger.base.color),
                }),
        );
    }

    let cancel = button(text("Cancel").size(14))
        .on_press(Message::Add(AddMessage::Cancel))
        .padding([SPACING_SM, SPACING_MD])
        .style(button::secondary);

    let save = button(text("Add").size(14))
        .on_press(Message::Add(AddMessage::Submit))
        .padding([SPACING_SM, SPACING_MD])
        .style(button::primary);

    modal(
        base,
        title,
        content.into(),
        Message::Add(AddMessage::Cancel),
        vec![cancel.into(), save.into()],
    )
}

fn view_field(form: &AddEntryForm, field: EntryField) -> Element<'_, Message> {
    let invalid = form.is_invalid(field);

    let input = text_input(placeholder(field), form.draft.field(field))
        .on_input(move |value| Message::Add(AddMessage::FieldChanged(field, value)))
        .on_submit(Message::Add(AddMessage::Submit))
        .padding(SPACING_SM)
        .style(move |theme: &Theme, status| {
            let mut style = text_input::default(theme, status);
            if invalid {
                style.border.color = theme.extended_palette().danger.base.color;
            }
            style
        });

    column![text(field.label()).size(13), input]
        .spacing(SPACING_XS)
        .into()
}

fn placeholder(field: EntryField) -> &'static str {
    match field {
        EntryField::Word => "e.g. apple",
        EntryField::Meaning => "e.g. a fruit",
        EntryField::Example => "e.g. I ate an apple.",
    }
}
