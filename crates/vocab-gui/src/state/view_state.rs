//! Main panel state.

use vocab_core::QuizSession;

/// Which panel fills the main window.
#[derive(Debug, Clone, Default)]
pub enum ViewState {
    /// Word list with per-item reveal toggles.
    #[default]
    Study,

    /// Quiz panel; the session holds its own frozen snapshot.
    Quiz(QuizSession),
}

impl ViewState {
    pub fn is_quiz(&self) -> bool {
        matches!(self, Self::Quiz(_))
    }
}
