use std::fmt;

use crate::scoring::Attribute;

/// Contract violations raised by the scoring core.
///
/// None of these come from user input: the prompt and deck layers only hand
/// the core well-formed values, so hitting one of these is a caller bug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// An attribute identifier outside the six-member catalog
    UnknownAttribute(String),
    /// Both chosen attributes are the same
    DuplicateAttributeSelection(Attribute),
    /// A derived attribute was read before the card's metrics were computed
    MetricsNotComputed,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::UnknownAttribute(id) => {
                write!(f, "Unknown attribute '{}' (expected 1-6 or an attribute key)", id)
            }
            GameError::DuplicateAttributeSelection(attr) => {
                write!(f, "Attribute '{}' selected twice; pick two different attributes", attr.name())
            }
            GameError::MetricsNotComputed => {
                write!(f, "Derived metrics read before they were computed")
            }
        }
    }
}

impl std::error::Error for GameError {}
