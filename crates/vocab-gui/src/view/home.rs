//! Main window: action bar plus either the study list or the quiz panel.

use iced::widget::{Column, Space, Text, button, column, container, row, scrollable, space, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;
use vocab_core::StudyItem;

use crate::message::{AddMessage, DeleteMessage, Message, QuizMessage, StudyMessage};
use crate::state::{AppState, ViewState};
use crate::theme::{SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, card, text_muted};
use crate::view::view_quiz;

type ButtonStyle = fn(&Theme, button::Status) -> button::Style;

/// Render the main window content.
pub fn view_home(state: &AppState) -> Element<'_, Message> {
    let count = state.entry_count();
    let header = row![
        text("Vocabulary").size(24),
        space::horizontal(),
        text(word_count(count)).size(14).style(text_muted),
    ]
    .align_y(Alignment::Center);

    let actions = row![
        action_button(
            lucide::plus(),
            "Add Word",
            Message::Add(AddMessage::Open),
            button::primary,
        ),
        action_button(
            lucide::book_open(),
            "Study",
            Message::Study(StudyMessage::Open),
            button::secondary,
        ),
        action_button(
            lucide::play(),
            "Random Quiz",
            Message::Quiz(QuizMessage::Start),
            button::secondary,
        ),
        action_button(
            lucide::trash(),
            "Delete Word",
            Message::Delete(DeleteMessage::Open),
            button::danger,
        ),
    ]
    .spacing(SPACING_SM);

    let body = match &state.view {
        ViewState::Study => view_study_list(state),
        ViewState::Quiz(session) => view_quiz(session),
    };

    column![header, actions, body]
        .spacing(SPACING_MD)
        .padding(SPACING_LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// "1 word", "3 words".
pub fn word_count(count: usize) -> String {
    if count == 1 {
        "1 word".to_string()
    } else {
        format!("{} words", count)
    }
}

fn action_button<'a>(
    icon: Text<'a>,
    label: &'a str,
    on_press: Message,
    style: ButtonStyle,
) -> Element<'a, Message> {
    button(
        row![icon.size(14), Space::new().width(SPACING_SM), text(label).size(14)]
            .align_y(Alignment::Center),
    )
    .on_press(on_press)
    .padding([SPACING_SM, SPACING_MD])
    .style(style)
    .into()
}

// =============================================================================
// STUDY LIST
// =============================================================================

fn view_study_list(state: &AppState) -> Element<'_, Message> {
    if state.study.is_empty() {
        return container(
            column![
                lucide::list().size(32).style(text_muted),
                text("No words yet").size(18),
                text("Use Add Word to create your first entry.")
                    .size(14)
                    .style(text_muted),
            ]
            .spacing(SPACING_SM)
            .align_x(Alignment::Center),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into();
    }

    let shown = state.study.revealed_count();
    let summary = text(if shown == 0 {
        "Click Show answer to check a word.".to_string()
    } else {
        format!("{} of {} answers shown", shown, state.study.len())
    })
    .size(13)
    .style(text_muted);

    let show_examples = state.settings.display.show_examples_in_list;
    let rows = state
        .study
        .items()
        .iter()
        .map(|item| view_study_item(item, show_examples));

    column![
        summary,
        scrollable(Column::with_children(rows).spacing(SPACING_SM)).height(Length::Fill),
    ]
    .spacing(SPACING_SM)
    .into()
}

fn view_study_item(item: &StudyItem, show_examples: bool) -> Element<'_, Message> {
    let (icon, label) = if item.revealed {
        (lucide::eye_off(), "Hide answer")
    } else {
        (lucide::eye(), "Show answer")
    };

    let toggle = button(
        row![icon.size(12), Space::new().width(SPACING_XS), text(label).size(12)]
            .align_y(Alignment::Center),
    )
    .on_press(Message::Study(StudyMessage::Toggle(item.entry.word.clone())))
    .padding([SPACING_XS, SPACING_SM])
    .style(button::secondary);

    let mut body = column![
        row![text(&item.entry.word).size(18), space::horizontal(), toggle]
            .align_y(Alignment::Center),
    ]
    .spacing(SPACING_XS);

    if item.revealed {
        body = body.push(text(item.entry.meaning()).size(14));
        if show_examples {
            body = body.push(text(item.entry.example()).size(13).style(text_muted));
        }
    }

    container(body)
        .padding(SPACING_MD)
        .width(Length::Fill)
        .style(card)
        .into()
}
