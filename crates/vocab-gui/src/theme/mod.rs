//! Theme and layout constants.

mod spacing;

pub use spacing::{
    BORDER_RADIUS_LG, BORDER_RADIUS_MD, MODAL_WIDTH_MD, QUIZ_CARD_WIDTH, SPACING_LG, SPACING_MD,
    SPACING_SM, SPACING_XS,
};

use iced::widget::{container, text};
use iced::{Border, Color, Shadow, Theme, Vector};

/// Application theme.
pub fn app_theme() -> Theme {
    Theme::Light
}

/// Card surface used for list rows and the quiz panel.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: outline(palette.background.strong.color, BORDER_RADIUS_MD),
        ..Default::default()
    }
}

/// Floating surfaces: dialogs and toasts. `lift` scales the drop shadow.
fn floating(theme: &Theme, lift: f32) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.base.color.into()),
        border: outline(palette.background.strong.color, BORDER_RADIUS_LG),
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.1 + 0.05 * lift),
            offset: Vector::new(0.0, lift * 2.0),
            blur_radius: lift * 8.0,
        },
        ..Default::default()
    }
}

pub fn dialog_surface(theme: &Theme) -> container::Style {
    floating(theme, 3.0)
}

pub fn toast_surface(theme: &Theme) -> container::Style {
    floating(theme, 1.0)
}

/// Dims everything under an open dialog.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.45).into()),
        ..Default::default()
    }
}

/// Muted secondary text.
pub fn text_muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().background.strong.text),
    }
}

fn outline(color: Color, radius: f32) -> Border {
    Border {
        color,
        width: 1.0,
        radius: radius.into(),
    }
}
