use thiserror::Error;

/// Errors surfaced at the booking boundary.
///
/// Both conditions are recoverable: an invalid menu choice stops the flow
/// before any quote is attempted, and a missing policy downgrades to a
/// warning plus a zero quote (see [`crate::booking::BookingContext`]).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// The transport menu choice was outside the offered 1..=3 range.
    #[error("invalid transport choice: {0}")]
    InvalidTransport(u32),

    /// A quote was requested before any transport had been selected.
    #[error("no cost policy selected")]
    NoPolicySelected,
}
