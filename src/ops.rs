//! Mutating sequence operations: in-place reversal and prefix copy.

use crate::bounds::{checked_prefix, checked_prefix_mut};
use crate::Result;

#[inline]
fn trace_enabled() -> bool {
    matches!(std::env::var("SEQOPS_TRACE"), Ok(ref v) if v == "1")
}

/// Reverse the first `len` elements of `seq` in place.
///
/// Two cursors converge from the ends of the prefix; the trailing cursor
/// steps back before the comparison, so lengths 0 and 1 fall out of the loop
/// without a dedicated bounds check. O(1) auxiliary space.
///
/// # Errors
/// Returns an error if `seq` is absent while `len > 0`, or the borrow holds
/// fewer than `len` elements. The sequence is untouched on error.
///
/// # Example
/// ```
/// let mut buf = [1, 2, 3, 4, 5];
/// seqops::reverse_in_place(Some(&mut buf[..]), 5).unwrap();
/// assert_eq!(buf, [5, 4, 3, 2, 1]);
/// ```
pub fn reverse_in_place(seq: Option<&mut [i32]>, len: usize) -> Result<()> {
    let seq = checked_prefix_mut(seq, len)?;

    if trace_enabled() {
        eprintln!("reverse_in_place: len={} swaps={}", len, len / 2);
    }

    let mut left = 0;
    let mut right = len;
    while left < right {
        right -= 1;
        if left >= right {
            break;
        }
        seq.swap(left, right);
        left += 1;
    }

    Ok(())
}

/// Copy the first `len` elements of `src` into `dest`, ascending order.
///
/// The destination prefix is fully overwritten. Overlapping transfers cannot
/// arise: `dest` and `src` are distinct borrows for the duration of the
/// call.
///
/// # Errors
/// Returns an error if either reference is absent while `len > 0`, or either
/// borrow holds fewer than `len` elements. No element is written on error.
///
/// # Example
/// ```
/// let mut dst = [0i32; 3];
/// seqops::copy_into(Some(&mut dst[..]), Some(&[7, 8, 9][..]), 3).unwrap();
/// assert_eq!(dst, [7, 8, 9]);
/// ```
pub fn copy_into(dest: Option<&mut [i32]>, src: Option<&[i32]>, len: usize) -> Result<()> {
    let dest = checked_prefix_mut(dest, len)?;
    let src = checked_prefix(src, len)?;

    if trace_enabled() {
        eprintln!("copy_into: contiguous transfer len={}", len);
    }

    dest.copy_from_slice(src);
    Ok(())
}
