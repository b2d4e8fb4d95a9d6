/*!
 * Cursor Position
 */

use crate::core::errors::{ListError, ListResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    #[default]
    NotStarted,
    At(usize),
    Finished,
}

/// Position of a forward-only cursor over a sequence of known length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    state: State,
}

impl Position {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance within `len` elements; sticks at `Finished` once past the end
    pub fn advance(&mut self, len: usize) -> bool {
        let next = match self.state {
            State::NotStarted => 0,
            State::At(index) => index + 1,
            State::Finished => return false,
        };

        if next < len {
            self.state = State::At(next);
            true
        } else {
            self.state = State::Finished;
            false
        }
    }

    /// Index of the current element
    pub fn index(&self) -> ListResult<usize> {
        match self.state {
            State::NotStarted => Err(ListError::invalid_operation(
                "enumeration has not started",
            )),
            State::At(index) => Ok(index),
            State::Finished => Err(ListError::invalid_operation("enumeration has finished")),
        }
    }

    #[inline]
    pub fn reset(&mut self) {
        self.state = State::NotStarted;
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.state == State::Finished
    }
}
