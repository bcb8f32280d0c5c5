//! Quiz panel.

use iced::widget::{Space, button, column, container, row, space, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;
use vocab_core::{QuizError, QuizSession};

use crate::message::{Message, QuizMessage};
use crate::theme::{QUIZ_CARD_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM, card, text_muted};

/// Render the quiz panel for a running or finished session.
pub fn view_quiz(session: &QuizSession) -> Element<'_, Message> {
    let close_button = button(text("Close").size(14))
        .on_press(Message::Quiz(QuizMessage::Close))
        .padding([SPACING_SM, SPACING_MD])
        .style(button::secondary);

    let content = match session.progress() {
        None => column![
            lucide::circle_check().size(40),
            text(QuizError::Finished.user_message()).size(20),
            text(format!("{} words reviewed.", session.len()))
                .size(14)
                .style(text_muted),
            Space::new().height(SPACING_SM),
            close_button,
        ]
        .spacing(SPACING_SM)
        .align_x(Alignment::Center),

        Some((number, total)) => {
            let progress = text(format!(
                "Question {} of {} ({} left)",
                number,
                total,
                session.remaining()
            ))
                .size(13)
                .style(text_muted);

            let word = text(session.current_question().unwrap_or_default()).size(32);

            let answer: Element<'_, Message> = match session.revealed_answer() {
                Some(details) => column![
                    text(&details.meaning).size(18),
                    text(&details.example).size(14).style(text_muted),
                ]
                .spacing(SPACING_SM)
                .align_x(Alignment::Center)
                .into(),
                None => button(text("Show answer").size(14))
                    .on_press(Message::Quiz(QuizMessage::Reveal))
                    .padding([SPACING_SM, SPACING_MD])
                    .style(button::secondary)
                    .into(),
            };

            let next_button = button(
                row![
                    text("Next").size(14),
                    Space::new().width(SPACING_SM),
                    lucide::arrow_right().size(14),
                ]
                .align_y(Alignment::Center),
            )
            .on_press(Message::Quiz(QuizMessage::Next))
            .padding([SPACING_SM, SPACING_MD])
            .style(button::primary);

            column![
                progress,
                word,
                answer,
                Space::new().height(SPACING_SM),
                row![close_button, space::horizontal(), next_button].align_y(Alignment::Center),
            ]
            .spacing(SPACING_MD)
            .align_x(Alignment::Center)
        }
    };

    container(
        container(content)
            .padding(SPACING_LG)
            .max_width(QUIZ_CARD_WIDTH)
            .style(card),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}
