//! Modal dialog views.

mod add;
mod delete;

use iced::Element;

use crate::message::Message;
use crate::state::ActiveDialog;

pub use add::view_add_dialog;
pub use delete::view_delete_dialog;

/// Layer the open dialog over `base`.
pub fn view_dialog<'a>(
    base: Element<'a, Message>,
    dialog: &'a ActiveDialog,
) -> Element<'a, Message> {
    let title = dialog.title();
    match dialog {
        ActiveDialog::Add(form) => view_add_dialog(base, title, form),
        ActiveDialog::Delete(form) => view_delete_dialog(base, title, form),
    }
}
