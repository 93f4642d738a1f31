//! Byte range extraction, with an erasing variant for sensitive material.
//!
//! These are best-effort helpers: an invalid range yields `None` rather than
//! a failure. A range is invalid when `count` is zero or `start + count`
//! runs past the end of `source`.

use zeroize::{Zeroize, Zeroizing};

fn checked_range(len: usize, start: usize, count: usize) -> Option<std::ops::Range<usize>> {
    if count == 0 {
        return None;
    }
    let end = start.checked_add(count)?;
    (end <= len).then_some(start..end)
}

/// Copies `count` bytes of `source` starting at `start`.
pub fn extract(source: &[u8], start: usize, count: usize) -> Option<Vec<u8>> {
    let range = checked_range(source.len(), start, count)?;
    Some(source[range].to_vec())
}

/// Copies `count` bytes of `source` starting at `start`, then overwrites that
/// range of `source` with zeroes.
///
/// Used to move keys and IVs out of a buffer that will be reused or freed.
/// The returned copy is itself wiped when dropped.
pub fn extract_and_erase(
    source: &mut [u8],
    start: usize,
    count: usize,
) -> Option<Zeroizing<Vec<u8>>> {
    let range = checked_range(source.len(), start, count)?;
    let copy = Zeroizing::new(source[range.clone()].to_vec());
    source[range].zeroize();
    Some(copy)
}
