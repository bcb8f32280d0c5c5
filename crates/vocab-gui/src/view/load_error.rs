//! Blocking screen shown when the vocabulary file cannot be read.
//!
//! Nothing else is reachable from here, so the damaged file is never
//! overwritten.

use iced::widget::{Space, button, column, container, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use crate::error::GuiError;
use crate::message::Message;
use crate::theme::{SPACING_LG, SPACING_MD, SPACING_SM, text_muted};

/// Render the load error screen.
pub fn view_load_error(error: &GuiError) -> Element<'_, Message> {
    let icon = lucide::triangle_alert()
        .size(48)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().danger.base.color),
        });

    let mut content = column![
        icon,
        Space::new().height(SPACING_MD),
        text(error.title()).size(20),
        text(error.user_message()).size(14),
    ]
    .spacing(SPACING_SM)
    .align_x(Alignment::Center)
    .padding(SPACING_LG);

    if let GuiError::StoreLoad { location, .. } = error {
        content = content.push(text(location).size(12).style(text_muted));
    }

    if let Some(suggestion) = error.suggestion() {
        content = content.push(text(suggestion).size(13).style(text_muted));
    }

    content = content.push(Space::new().height(SPACING_LG)).push(
        button(text("Quit").size(14))
            .on_press(Message::Quit)
            .padding([SPACING_SM, SPACING_LG])
            .style(button::danger),
    );

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
