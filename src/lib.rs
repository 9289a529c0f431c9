//! Primitive operations over bounded integer sequences.
//!
//! This crate provides four stateless operations on fixed-length sequences
//! of `i32`:
//!
//! - [`sum`]: wrapping sum of a sequence (with a [`checked_sum`] companion)
//! - [`reverse_in_place`]: in-place reversal
//! - [`copy_into`]: prefix transfer between two sequences
//! - [`max`]: largest element, with an out-of-band validity flag
//!
//! A sequence is passed as an optional borrowed slice plus an explicit
//! element count; the operations touch only the first `len` elements and
//! never allocate or retain a reference beyond the call.
//!
//! # Input contract
//!
//! - `None` with `len == 0` is a valid empty sequence.
//! - `None` with `len > 0` is invalid input.
//! - `Some(slice)` with `slice.len() < len` is invalid input; a longer
//!   borrow is accepted and the tail is ignored.
//!
//! The mutating operations report invalid input through [`SeqError`]. The
//! reductions keep in-band signaling: [`sum`] returns 0 and [`max`] returns
//! [`MAX_SENTINEL`] together with its validity flag.
//!
//! # Example
//! ```
//! use seqops::{copy_into, max, reverse_in_place, sum};
//!
//! let data = [3, -1, 7, 2];
//! assert_eq!(sum(Some(&data[..]), 4), 11);
//!
//! let mut valid = false;
//! assert_eq!(max(Some(&data[..]), 4, Some(&mut valid)), 7);
//! assert!(valid);
//!
//! let mut buf = [0i32; 4];
//! copy_into(Some(&mut buf[..]), Some(&data[..]), 4).unwrap();
//! reverse_in_place(Some(&mut buf[..]), 4).unwrap();
//! assert_eq!(buf, [2, 7, -1, 3]);
//! ```
//!
//! # Concurrency
//!
//! Every operation is synchronous, non-blocking, and O(`len`). Calls on
//! disjoint or shared read-only data are freely concurrent; exclusive access
//! for the mutating operations is already enforced by the `&mut` borrow.

mod bounds;
mod ops;
mod reduce;

// ============================================================================
// Mutating operations
// ============================================================================
pub use ops::{copy_into, reverse_in_place};

// ============================================================================
// Reductions
// ============================================================================
pub use reduce::{checked_sum, max, sum};

// ============================================================================
// Constants
// ============================================================================

/// Sentinel returned by [`max`] when no maximum exists.
///
/// Equal to `i32::MIN` and therefore in-band: a valid sequence whose largest
/// element is `i32::MIN` returns the same value with the validity flag set.
pub const MAX_SENTINEL: i32 = i32::MIN;

// ============================================================================
// Error types
// ============================================================================

/// Errors reported by the mutating sequence operations.
#[derive(Debug, thiserror::Error)]
pub enum SeqError {
    /// A required sequence reference was absent for a nonzero length.
    #[error("absent sequence reference for length {len}")]
    AbsentInput { len: usize },

    /// The borrowed sequence holds fewer elements than requested.
    #[error("sequence too short: {have} elements, {need} requested")]
    ShortInput { have: usize, need: usize },
}

/// Result type for sequence operations.
pub type Result<T> = std::result::Result<T, SeqError>;
