use thiserror::Error;

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

/// Tick interval while typing, in milliseconds.
pub const TYPE_MS: u32 = 150;

/// Tick interval while deleting.
pub const DELETE_MS: u32 = 75;

/// Hold time on a fully typed phrase.
pub const PAUSE_FULL_MS: u32 = 2000;

/// Hold time on the empty string before the next phrase starts.
pub const PAUSE_EMPTY_MS: u32 = 500;

/// Configuration failure for the typewriter.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypewriterError {
    /// The phrase list was empty; the cycle has nothing to type.
    #[error("typewriter phrase list is empty")]
    NoPhrases,
}

/// Position in the type / pause / delete / pause cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    PausedAtFull,
    Deleting,
    PausedAtEmpty,
}

/// The typewriter cycle over a fixed phrase list.
///
/// Each [`tick`](Typewriter::tick) advances the machine one step and
/// returns the delay before the next tick — the caller owns the timer and
/// schedules exactly one successor per tick. The displayed text is always
/// a prefix of the current phrase, and the phrase index wraps so the cycle
/// never terminates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase_index: usize,
    displayed: String,
    phase: Phase,
}

impl Typewriter {
    /// Build a cycle over `phrases`, starting empty on the first phrase.
    ///
    /// # Errors
    ///
    /// Returns [`TypewriterError::NoPhrases`] when the list is empty. A
    /// list containing empty strings is fine: the machine passes through
    /// them without stalling.
    pub fn new(phrases: Vec<String>) -> Result<Self, TypewriterError> {
        if phrases.is_empty() {
            return Err(TypewriterError::NoPhrases);
        }
        Ok(Self {
            phrases,
            phrase_index: 0,
            displayed: String::new(),
            phase: Phase::Typing,
        })
    }

    /// Advance one step. Returns the delay until the next tick, in ms.
    pub fn tick(&mut self) -> u32 {
        match self.phase {
            Phase::Typing => {
                let phrase = &self.phrases[self.phrase_index];
                if let Some(next) = phrase[self.displayed.len()..].chars().next() {
                    self.displayed.push(next);
                }
                if self.displayed.len() == phrase.len() {
                    self.phase = Phase::PausedAtFull;
                    PAUSE_FULL_MS
                } else {
                    TYPE_MS
                }
            }
            Phase::PausedAtFull => {
                self.phase = Phase::Deleting;
                DELETE_MS
            }
            Phase::Deleting => {
                self.displayed.pop();
                if self.displayed.is_empty() {
                    self.phase = Phase::PausedAtEmpty;
                    PAUSE_EMPTY_MS
                } else {
                    DELETE_MS
                }
            }
            Phase::PausedAtEmpty => {
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                self.phase = Phase::Typing;
                TYPE_MS
            }
        }
    }

    /// The currently displayed prefix of the current phrase.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.displayed
    }

    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }
}
