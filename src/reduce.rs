//! Reductions over a sequence prefix: wrapping sum, checked sum, and maximum.

use crate::bounds::checked_prefix;
use crate::MAX_SENTINEL;

/// Sum of the first `len` elements, wrapping on overflow.
///
/// Two's-complement wraparound is part of the contract; a plain `+` would
/// panic under debug assertions and make the result profile-dependent. See
/// [`checked_sum`] for the overflow-detecting companion.
///
/// Invalid input (absent reference with `len > 0`, or a borrow shorter than
/// `len`) yields the in-band sentinel 0. Callers that must distinguish that
/// from a true zero sum validate their inputs beforehand.
///
/// # Example
/// ```
/// assert_eq!(seqops::sum(Some(&[1, 2, 3, 4][..]), 4), 10);
/// assert_eq!(seqops::sum(None, 0), 0);
/// ```
pub fn sum(seq: Option<&[i32]>, len: usize) -> i32 {
    let Ok(seq) = checked_prefix(seq, len) else {
        return 0;
    };
    seq.iter().fold(0i32, |acc, &x| acc.wrapping_add(x))
}

/// Overflow-checked companion to [`sum`].
///
/// Returns `None` when the accumulation leaves the `i32` range, or when the
/// input is invalid; `Some(0)` for the empty sequence.
///
/// # Example
/// ```
/// assert_eq!(seqops::checked_sum(Some(&[1, 2, 3][..]), 3), Some(6));
/// assert_eq!(seqops::checked_sum(Some(&[i32::MAX, 1][..]), 2), None);
/// ```
pub fn checked_sum(seq: Option<&[i32]>, len: usize) -> Option<i32> {
    let seq = checked_prefix(seq, len).ok()?;
    seq.iter().try_fold(0i32, |acc, &x| acc.checked_add(x))
}

/// Maximum of the first `len` elements.
///
/// The running maximum starts at the first element and is replaced only on a
/// strictly greater candidate, so duplicates keep the earliest occurrence.
///
/// Returns [`MAX_SENTINEL`] when the input is invalid or `len == 0`. Because
/// the sentinel is in-band (`i32::MIN` is a legal maximum), the optional
/// `valid` slot carries the out-of-band outcome: it is set to `false` before
/// any validation and flipped to `true` only once a maximum has been
/// computed, so every early return leaves the conservative failure value in
/// place.
///
/// # Example
/// ```
/// let mut valid = false;
/// assert_eq!(seqops::max(Some(&[3, -1, 7, 2][..]), 4, Some(&mut valid)), 7);
/// assert!(valid);
///
/// assert_eq!(seqops::max(None, 0, None), seqops::MAX_SENTINEL);
/// ```
pub fn max(seq: Option<&[i32]>, len: usize, mut valid: Option<&mut bool>) -> i32 {
    if let Some(flag) = valid.as_deref_mut() {
        *flag = false;
    }

    let Ok(seq) = checked_prefix(seq, len) else {
        return MAX_SENTINEL;
    };
    let Some((&first, rest)) = seq.split_first() else {
        return MAX_SENTINEL;
    };

    let mut best = first;
    for &x in rest {
        if x > best {
            best = x;
        }
    }

    if let Some(flag) = valid.as_deref_mut() {
        *flag = true;
    }
    best
}
