//! # natcmp
//!
//! `natcmp` compares and sorts strings in *natural order*: runs of decimal digits
//! embedded in a string compare by numeric value rather than byte by byte, and
//! whitespace is ignored.
//!
//! ```text
//! byte order:     a1  a10  a100  a2
//! natural order:  a1  a2   a10   a100
//! ```
//!
//! ## Rules
//!
//! - **Digit runs** compare as unsigned integers of any length. Leading zeros are
//!   padding, so `"a01" == "a1"` and `"a001" < "a2"`.
//! - **Decimal fractions**: a digit run directly after `<digits>.` that starts with
//!   a zero compares digit by digit from the left, so
//!   `1.001 < 1.002 < 1.010 < 1.02 < 1.1 < 1.3`.
//! - **Whitespace** (`' '`, `\t`, `\n`, `\v`, `\r`, NEL, NBSP) is skipped on both sides.
//! - Everything else compares by raw byte value, and a string that runs out first is
//!   the smaller one.
//!
//! Classification works on bytes, not Unicode scalar values. Non-ASCII bytes other
//! than NEL (0x85) and NBSP (0xA0) are ordinary characters.
//!
//! ## Usage
//!
//! ### Comparing
//!
//! ```rust
//! use natcmp::compare;
//! use std::cmp::Ordering;
//!
//! assert_eq!(compare("a2", "a10"), Ordering::Less);
//! assert_eq!(compare("a1", "a\t1"), Ordering::Equal);
//! ```
//!
//! ### Sorting
//!
//! ```rust
//! use natcmp::sort_strings;
//!
//! let mut data = vec!["100.001.010.123", "001.001.010.123", "001.002.010.123"];
//! sort_strings(&mut data);
//!
//! assert_eq!(data, vec!["001.001.010.123", "001.002.010.123", "100.001.010.123"]);
//! ```
//!
//! ### Custom Types
//!
//! To sort collections that do not hold `AsRef<[u8]>` items directly, implement
//! [`KeyAccessor`] and use the index-based [`natsort`].
//!
//! ```rust
//! use natcmp::{natsort, KeyAccessor};
//!
//! struct Unit {
//!     name: String,
//! }
//!
//! struct Units(Vec<Unit>);
//!
//! impl KeyAccessor for Units {
//!     fn get_key(&self, index: usize) -> &[u8] {
//!         self.0[index].name.as_bytes()
//!     }
//!
//!     fn len(&self) -> usize {
//!         self.0.len()
//!     }
//! }
//!
//! let units = Units(vec![
//!     Unit { name: "mysql/10".to_string() },
//!     Unit { name: "mysql/2".to_string() },
//! ]);
//!
//! assert_eq!(natsort(&units), vec![1, 0]);
//! ```
//!
//! ### As an `Ord` key
//!
//! [`Natural`] wraps a value so natural order drives `BTreeMap`, `BinaryHeap`,
//! `sort_by_key` and friends.
//!
//! ## Performance Characteristics
//!
//! - **Compare**: O(n) in the length of the shorter common prefix plus the digit
//!   runs scanned. No allocation.
//! - **Sort**: O(N log N) comparisons via the standard library sorts.

pub mod algo;
pub mod cmp;
pub mod core;
pub mod natural;
pub use algo::{natsort, sort_strings, sort_strings_unstable};
pub use cmp::{compare, compare_bytes};
pub use crate::core::KeyAccessor;
pub use natural::Natural;

pub mod prelude {
    pub use crate::algo::{natsort, sort_strings, sort_strings_unstable};
    pub use crate::cmp::{compare, compare_bytes};
    pub use crate::core::KeyAccessor;
    pub use crate::natural::Natural;
}
