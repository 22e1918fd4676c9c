use super::{DateTime, ValidationError};

/// An inclusive interval of instants during which a price applies.
///
/// The start never comes after the end. Both bounds belong to the window, so a
/// window whose start equals its end contains exactly one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValidityWindow {
    start: DateTime,
    end: DateTime,
}

impl ValidityWindow {
    /// Creates a new window, rejecting `start > end`
    pub fn new(start: DateTime, end: DateTime) -> Result<Self, ValidationError> {
        if start > end {
            Err(ValidationError::InvertedWindow { start, end })
        } else {
            Ok(Self { start, end })
        }
    }

    /// The first instant of the window
    pub fn start(&self) -> DateTime {
        self.start
    }

    /// The last instant of the window
    pub fn end(&self) -> DateTime {
        self.end
    }

    /// Whether `at` lies within the window, bounds included
    pub fn contains(&self, at: DateTime) -> bool {
        self.start <= at && at <= self.end
    }
}
