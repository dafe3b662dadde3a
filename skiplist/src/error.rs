use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SkipListError {
    /// The maximum level must be at least 1.
    InvalidMaxLevel,
}

impl fmt::Display for SkipListError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SkipListError::InvalidMaxLevel => f.write_str("max level must be positive"),
        }
    }
}

impl Error for SkipListError {}
