//! Randomized, non-repeating quiz over a frozen snapshot of the store.
//!
//! A session shuffles its entries once at start, then walks the shuffled
//! sequence forward one question at a time. The position never decreases and
//! the sequence never changes; starting again discards the old session.

use rand::Rng;
use rand::seq::SliceRandom;
use vocab_model::{Entry, EntryDetails};

use crate::error::QuizError;

/// Observable state of a [`QuizSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    /// A question is being asked.
    Active { position: usize, revealed: bool },
    /// Every question has been asked.
    Finished,
}

impl QuizState {
    /// Whether the session is exhausted.
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished)
    }
}

/// One quiz run.
#[derive(Debug, Clone)]
pub struct QuizSession {
    sequence: Vec<Entry>,
    position: usize,
    revealed: bool,
}

impl QuizSession {
    /// Start a session using the thread-local RNG.
    pub fn start(entries: impl IntoIterator<Item = Entry>) -> Result<Self, QuizError> {
        Self::start_with_rng(entries, &mut rand::thread_rng())
    }

    /// Start a session with a caller-supplied RNG.
    ///
    /// Every permutation of `entries` is equally likely. An empty input is
    /// [`QuizError::EmptyCollection`].
    pub fn start_with_rng<R>(
        entries: impl IntoIterator<Item = Entry>,
        rng: &mut R,
    ) -> Result<Self, QuizError>
    where
        R: Rng + ?Sized,
    {
        let mut sequence: Vec<Entry> = entries.into_iter().collect();
        if sequence.is_empty() {
            return Err(QuizError::EmptyCollection);
        }

        sequence.shuffle(rng);
        tracing::debug!("Started quiz with {} questions", sequence.len());

        Ok(Self {
            sequence,
            position: 0,
            revealed: false,
        })
    }

    /// Current state.
    pub fn state(&self) -> QuizState {
        if self.is_finished() {
            QuizState::Finished
        } else {
            QuizState::Active {
                position: self.position,
                revealed: self.revealed,
            }
        }
    }

    /// Whether every question has been asked.
    pub fn is_finished(&self) -> bool {
        self.position >= self.sequence.len()
    }

    /// The word being asked, without its details.
    pub fn current_question(&self) -> Result<&str, QuizError> {
        self.current().map(|entry| entry.word.as_str())
    }

    /// Show the answer for the current question.
    ///
    /// Revealing twice returns the same details.
    pub fn reveal(&mut self) -> Result<&EntryDetails, QuizError> {
        if self.is_finished() {
            return Err(QuizError::Finished);
        }
        self.revealed = true;
        Ok(&self.sequence[self.position].details)
    }

    /// Whether the current answer has been shown.
    pub fn is_revealed(&self) -> bool {
        !self.is_finished() && self.revealed
    }

    /// Details of the current question if already revealed.
    pub fn revealed_answer(&self) -> Option<&EntryDetails> {
        if self.is_revealed() {
            self.current().ok().map(|entry| &entry.details)
        } else {
            None
        }
    }

    /// Move to the next question.
    ///
    /// Advancing past the last question finishes the session; advancing a
    /// finished session is an error.
    pub fn advance(&mut self) -> Result<QuizState, QuizError> {
        if self.is_finished() {
            return Err(QuizError::Finished);
        }

        self.position += 1;
        self.revealed = false;

        if self.is_finished() {
            tracing::debug!("Quiz finished after {} questions", self.sequence.len());
        }
        Ok(self.state())
    }

    /// `(question number, total)`, 1-based, while active.
    pub fn progress(&self) -> Option<(usize, usize)> {
        (!self.is_finished()).then(|| (self.position + 1, self.sequence.len()))
    }

    /// Questions not yet asked, including the current one.
    pub fn remaining(&self) -> usize {
        self.sequence.len().saturating_sub(self.position)
    }

    /// The shuffled sequence.
    pub fn sequence(&self) -> &[Entry] {
        &self.sequence
    }

    /// Number of questions in the session.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Always false; an empty session cannot be started.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    fn current(&self) -> Result<&Entry, QuizError> {
        self.sequence.get(self.position).ok_or(QuizError::Finished)
    }
}
