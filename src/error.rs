use thiserror::Error;

/// Reasons a bottle or board description is rejected before solving.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A bottle description did not have exactly one entry per slot.
    #[error("bottle {bottle} has {len} slots (expected 4)")]
    WrongLength { bottle: usize, len: usize },

    /// An empty slot sits below a filled one.
    #[error("bottle {bottle} has an empty slot below a filled one")]
    Gap { bottle: usize },

    #[error("bottle {bottle} contains {slot:?}, which is not a color")]
    InvalidSlot { bottle: usize, slot: char },

    #[error("board has no bottles")]
    Empty,

    /// The declared number of bottles does not match what was supplied.
    #[error("expected {expected} bottles, found {found}")]
    BottleCount { expected: usize, found: usize },
}
