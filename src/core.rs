//! Core traits for natcmp.
//!
//! This module defines [`KeyAccessor`], the trait users implement to sort
//! their own collections in natural order without copying keys.

use std::collections::VecDeque;

/// A trait for accessing key data from a collection without copying.
///
/// This trait allows [`natsort`](crate::natsort) to order any collection whose
/// elements can be viewed as byte slices (e.g. `Vec<String>`, `Vec<Vec<u8>>`,
/// or a flat buffer with an offsets table).
///
/// # Examples
///
/// Implementing for a custom struct:
///
/// ```
/// use natcmp::core::KeyAccessor;
///
/// struct Releases {
///     tags: Vec<String>,
/// }
///
/// impl KeyAccessor for Releases {
///     fn get_key(&self, index: usize) -> &[u8] {
///         self.tags[index].as_bytes()
///     }
///
///     fn len(&self) -> usize {
///         self.tags.len()
///     }
/// }
///
/// let releases = Releases {
///     tags: vec!["v1.10".into(), "v1.9".into()],
/// };
/// assert_eq!(natcmp::natsort(&releases), vec![1, 0]);
/// ```
pub trait KeyAccessor {
    /// Returns a byte slice representing the key at the given index.
    fn get_key(&self, index: usize) -> &[u8];

    /// Returns the number of items in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Blanket implementation for indexable slices of byte-ref types.
impl<T: AsRef<[u8]>> KeyAccessor for [T] {
    fn get_key(&self, index: usize) -> &[u8] {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// Explicit Vec impl to improve ergonomics (avoiding .as_slice()).
impl<T: AsRef<[u8]>> KeyAccessor for Vec<T> {
    fn get_key(&self, index: usize) -> &[u8] {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: AsRef<[u8]>> KeyAccessor for VecDeque<T> {
    fn get_key(&self, index: usize) -> &[u8] {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }
}
