use thiserror::Error;

/// Misuse of a [`Position`](crate::Position).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PositionError {
    /// The position is the end sentinel, it refers to no element.
    #[error("position is past the end of the tree")]
    End,
    /// The element the position referred to has been removed.
    #[error("position refers to a removed element")]
    Stale,
}
