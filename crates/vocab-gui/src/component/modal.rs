//! Dialog layered over the main window.

use iced::widget::{Row, Space, button, center, column, container, opaque, row, space, stack, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use crate::theme::{
    MODAL_WIDTH_MD, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, backdrop, dialog_surface,
};

/// Show `body` in a centered dialog above `base`.
///
/// The backdrop swallows clicks; the dialog is left through `on_close` or
/// one of the `actions`, which are right-aligned in the footer.
pub fn modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    title: &'a str,
    body: Element<'a, M>,
    on_close: M,
    actions: Vec<Element<'a, M>>,
) -> Element<'a, M> {
    let close = button(lucide::x().size(18))
        .on_press(on_close)
        .padding([SPACING_XS, SPACING_SM])
        .style(button::text);

    let footer = Row::with_children(actions).spacing(SPACING_SM);

    let dialog = container(
        column![
            row![text(title).size(18), space::horizontal(), close].align_y(Alignment::Center),
            body,
            row![space::horizontal(), footer],
        ]
        .spacing(SPACING_LG),
    )
    .width(Length::Fixed(MODAL_WIDTH_MD))
    .padding(SPACING_LG)
    .style(dialog_surface);

    let shade = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(backdrop);

    stack![base, opaque(shade), center(dialog).padding(SPACING_MD)].into()
}
