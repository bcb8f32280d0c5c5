//! View layer. Views are pure functions of [`AppState`](crate::state::AppState).

pub mod dialog;
mod home;
mod load_error;
mod quiz;

pub use home::{view_home, word_count};
pub use load_error::view_load_error;
pub use quiz::view_quiz;
