//! Study list messages.

/// Study list messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudyMessage {
    /// Study button: show the list with every answer hidden
    Open,

    /// Show or hide one word's answer
    Toggle(String),
}
