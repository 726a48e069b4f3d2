//! A wrapper that gives any byte-like value a natural `Ord`.

use crate::cmp::compare_bytes;
use std::cmp::Ordering;
use std::ops::Deref;

/// Orders the wrapped value in natural order.
///
/// Useful where an `Ord` key is required rather than a comparator, such as
/// `BTreeMap`, `BinaryHeap` or `sort_by_key`.
///
/// `Natural` does not implement `Hash`: values with different bytes can be
/// equal (`"a01"` and `"a1"`), so no hash consistent with `Eq` would be
/// cheaper than normalizing the string.
///
/// ```
/// use natcmp::Natural;
/// use std::collections::BTreeSet;
///
/// let set: BTreeSet<_> = ["v10", "v9", "v1"].into_iter().map(Natural).collect();
/// let ordered: Vec<&str> = set.into_iter().map(Natural::into_inner).collect();
///
/// assert_eq!(ordered, vec!["v1", "v9", "v10"]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Natural<T>(pub T);

impl<T> Natural<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Natural<T> {
    fn from(value: T) -> Self {
        Natural(value)
    }
}

impl<T> Deref for Natural<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: AsRef<[u8]>> PartialEq for Natural<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: AsRef<[u8]>> Eq for Natural<T> {}

impl<T: AsRef<[u8]>> PartialOrd for Natural<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: AsRef<[u8]>> Ord for Natural<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_bytes(self.0.as_ref(), other.0.as_ref())
    }
}
