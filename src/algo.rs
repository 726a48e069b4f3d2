//! Sorting in natural order.
//!
//! These are thin adapters that hand [`compare_bytes`] to the standard
//! library's sort primitives:
//!
//! - [`sort_strings`]: in-place, stable (`slice::sort_by`, driftsort).
//! - [`sort_strings_unstable`]: in-place, unstable (`slice::sort_unstable_by`, ipnsort).
//! - [`natsort`]: index-based and stable, for collections behind [`KeyAccessor`].
//!
//! Stability matters here more than for byte-wise sorting, because distinct
//! strings such as `"a01"` and `"a1"` or `"x 1"` and `"x1"` compare equal.

use crate::cmp::compare_bytes;
use crate::core::KeyAccessor;

/// Sorts a mutable slice of strings in place, in natural order.
///
/// The sort is stable: items that compare equal keep their input order.
///
/// # Examples
///
/// ```
/// use natcmp::sort_strings;
///
/// let mut data = vec!["a1/11", "a1/2", "a1/100", "a1/1"];
/// sort_strings(&mut data);
///
/// assert_eq!(data, vec!["a1/1", "a1/2", "a1/11", "a1/100"]);
/// ```
pub fn sort_strings<T: AsRef<[u8]>>(items: &mut [T]) {
    items.sort_by(|a, b| compare_bytes(a.as_ref(), b.as_ref()));
}

/// Sorts a mutable slice of strings in place, in natural order, without
/// preserving the relative order of equal items.
///
/// ```
/// use natcmp::sort_strings_unstable;
///
/// let mut data = vec!["pic10".to_string(), "pic9".to_string()];
/// sort_strings_unstable(&mut data);
///
/// assert_eq!(data, vec!["pic9", "pic10"]);
/// ```
pub fn sort_strings_unstable<T: AsRef<[u8]>>(items: &mut [T]) {
    items.sort_unstable_by(|a, b| compare_bytes(a.as_ref(), b.as_ref()));
}

/// Performs an index-based natural sort on the provided collection.
///
/// The collection is not modified. The returned vector holds the indices
/// that order it, so `provider.get_key(indices[i])` is never greater than
/// `provider.get_key(indices[i + 1])`. Equal keys keep ascending index order.
///
/// # Examples
///
/// ```
/// use natcmp::natsort;
///
/// let data = vec!["file10", "file2", "file1"];
/// let indices = natsort(&data);
///
/// assert_eq!(indices, vec![2, 1, 0]);
/// ```
pub fn natsort<T: KeyAccessor + ?Sized>(provider: &T) -> Vec<usize> {
    let len = provider.len();
    if len == 0 {
        return vec![];
    }

    let mut indices: Vec<usize> = (0..len).collect();
    indices.sort_by(|&a, &b| compare_bytes(provider.get_key(a), provider.get_key(b)));
    indices
}
