//! Errors raised while reading or writing a `.voc` file.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::CURRENT_SCHEMA_VERSION;

/// What was being done to the file when the OS refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAccess {
    Read,
    CreateDir,
    Write,
    Sync,
}

impl fmt::Display for FileAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Read => "read",
            Self::CreateDir => "create the folder for",
            Self::Write => "write",
            Self::Sync => "flush",
        })
    }
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("cannot {access} {}", path.display())]
    Io {
        access: FileAccess,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Header is missing, truncated or carries the wrong magic.
    #[error("{} is not a vocabulary file: {reason}", path.display())]
    InvalidFormat { path: PathBuf, reason: String },

    #[error("{} uses schema v{found}, this build reads up to v{CURRENT_SCHEMA_VERSION}", path.display())]
    NewerSchema { path: PathBuf, found: u32 },

    /// Words are the collection key, so a repeat means the file was edited by hand
    /// or written by something else.
    #[error("{} lists \"{word}\" more than once", path.display())]
    DuplicateWord { path: PathBuf, word: String },

    #[error("could not encode the collection")]
    Encode(#[source] rkyv::rancor::Error),

    #[error("payload of {} failed validation", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: rkyv::rancor::Error,
    },

    /// The temp file was written but could not take the place of the old one.
    #[error("could not replace {} with {}", target_path.display(), temp_path.display())]
    Replace {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PersistenceError {
    /// Sentence suitable for a dialog or toast.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io { access, path, .. } => {
                format!("Could not {access} your vocabulary at {}.", path.display())
            }
            Self::InvalidFormat { path, .. } | Self::Decode { path, .. } => {
                format!("{} is damaged and could not be read.", path.display())
            }
            Self::DuplicateWord { path, word } => format!(
                "{} contains the word \"{word}\" twice and could not be read.",
                path.display()
            ),
            Self::NewerSchema { path, .. } => format!(
                "{} was saved by a newer Vocabulary Studio.",
                path.display()
            ),
            Self::Encode(_) => "Your vocabulary could not be prepared for saving.".to_string(),
            Self::Replace { target_path, .. } => {
                format!("Could not finish saving to {}.", target_path.display())
            }
        }
    }

    pub fn suggestion(&self) -> Option<String> {
        let hint = match self {
            Self::Io {
                access: FileAccess::Read,
                ..
            } => "Check the file's read permissions.",
            Self::Io { .. } | Self::Replace { .. } => {
                "Check free disk space and write permissions for the data folder."
            }
            Self::InvalidFormat { .. } | Self::Decode { .. } | Self::DuplicateWord { .. } => {
                "The file was not modified. Restore a backup, or move the file away to start over."
            }
            Self::NewerSchema { .. } => "Update Vocabulary Studio to open this file.",
            Self::Encode(_) => return None,
        };
        Some(hint.to_string())
    }

    /// The file exists and was read, but its contents are unusable.
    pub fn is_corruption(&self) -> bool {
        matches!(
            self,
            Self::InvalidFormat { .. }
                | Self::NewerSchema { .. }
                | Self::DuplicateWord { .. }
                | Self::Decode { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PersistenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_failure_hints_at_permissions() {
        let err = PersistenceError::Io {
            access: FileAccess::Read,
            path: PathBuf::from("vocabulary.voc"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };

        assert_eq!(err.to_string(), "cannot read vocabulary.voc");
        assert!(!err.is_corruption());
        assert!(err.suggestion().unwrap().contains("read permissions"));
    }

    #[test]
    fn test_duplicate_word_is_corruption() {
        let err = PersistenceError::DuplicateWord {
            path: PathBuf::from("vocabulary.voc"),
            word: "apple".to_string(),
        };

        assert!(err.is_corruption());
        assert!(err.user_message().contains("\"apple\""));
    }
}
