//! Transient status line shown after store and quiz actions.
//!
//! Dismissed by its close button or by the periodic tick in
//! [`subscription`](crate::app::App::subscription).

use iced::widget::{Text, button, container, row, stack, text};
use iced::{Alignment, Color, Element, Length, Theme};
use iced_fonts::lucide;

use crate::message::{Message, ToastMessage};
use crate::theme::{SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, toast_surface};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastState {
    pub message: String,
    pub level: ToastLevel,
    /// Stamped by [`AppState::show_toast`](crate::state::AppState::show_toast);
    /// the dismiss timer is keyed on it.
    pub id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastLevel {
    fn icon(self) -> Text<'static> {
        match self {
            Self::Success => lucide::circle_check(),
            Self::Info => lucide::info(),
            Self::Warning => lucide::triangle_alert(),
            Self::Error => lucide::circle_x(),
        }
    }

    pub fn color(self, theme: &Theme) -> Color {
        let palette = theme.extended_palette();
        let pair = match self {
            Self::Success => palette.success.base,
            Self::Info => palette.primary.base,
            Self::Warning => palette.warning.base,
            Self::Error => palette.danger.base,
        };
        pair.color
    }
}

impl ToastState {
    pub fn success(message: impl Into<String>) -> Self {
        Self::at(ToastLevel::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::at(ToastLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::at(ToastLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::at(ToastLevel::Error, message)
    }

    fn at(level: ToastLevel, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level,
            id: 0,
        }
    }
}

fn view_toast(toast: &ToastState) -> Element<'_, Message> {
    let level = toast.level;
    let icon = level
        .icon()
        .size(18)
        .style(move |theme: &Theme| text::Style {
            color: Some(level.color(theme)),
        });

    let close = button(lucide::x().size(14))
        .on_press(Message::Toast(ToastMessage::Dismiss))
        .padding(SPACING_XS)
        .style(button::text);

    container(
        row![icon, text(&toast.message).size(14), close]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center),
    )
    .padding([SPACING_SM, SPACING_MD])
    .style(toast_surface)
    .into()
}

/// Pin `toast` to the bottom-right corner, above `content` and any dialog.
pub fn with_toast<'a>(content: Element<'a, Message>, toast: &'a ToastState) -> Element<'a, Message> {
    let corner = container(view_toast(toast))
        .align_right(Length::Fill)
        .align_bottom(Length::Fill)
        .padding(SPACING_LG);

    stack![content, corner].into()
}
