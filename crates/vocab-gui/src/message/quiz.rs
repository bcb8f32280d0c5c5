//! Quiz panel messages.

/// Quiz panel messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizMessage {
    /// Random Quiz button: start a fresh shuffled session
    Start,

    /// Show the answer for the current word
    Reveal,

    /// Move to the next word
    Next,

    /// Leave the quiz and return to the list
    Close,
}
