//! The natural order comparator.
//!
//! Two cursors walk the operands in lock step. Whitespace is skipped on
//! both sides, non-digit bytes compare by raw value, and when both cursors
//! sit on a digit the two digit runs are compared as a unit:
//!
//! - **Magnitude**: leading zeros are padding; the run with more significant
//!   digits is larger, and equal-length runs are decided by the first digit
//!   that differs (the *bias*).
//! - **Fractional**: directly after a decimal point (`<digits>.`), a run that
//!   starts with `'0'` on either side is compared digit by digit from the left,
//!   so `1.010 < 1.02 < 1.1`. Trailing zeros are padding here.
//!
//! Digit runs are never parsed into integers, so arbitrarily long runs
//! compare without overflow.

use std::cmp::Ordering;

/// Value read past the end of an operand. Lower than every printable byte.
const SENTINEL: u8 = 0;

/// Classification of a single byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// `'0'..='9'`.
    Digit,
    /// `' '`, `\t`, `\n`, `\v`, `\r`, NEL (0x85) and NBSP (0xA0).
    Space,
    /// Everything else, including `.` and the end-of-input sentinel.
    Other,
}

impl CharClass {
    #[inline(always)]
    pub fn of(c: u8) -> Self {
        if is_digit(c) {
            CharClass::Digit
        } else if is_space(c) {
            CharClass::Space
        } else {
            CharClass::Other
        }
    }
}

#[inline(always)]
pub fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

/// Latin-1 subset of whitespace. Form feed is deliberately not included.
#[inline(always)]
pub fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | 0x0B | b'\r' | 0x85 | 0xA0)
}

#[inline(always)]
fn byte_at(s: &[u8], i: usize) -> u8 {
    s.get(i).copied().unwrap_or(SENTINEL)
}

#[inline(always)]
fn skip_spaces(s: &[u8], mut i: usize) -> usize {
    while i < s.len() && is_space(s[i]) {
        i += 1;
    }
    i
}

/// End (exclusive) of the digit run starting at `start`.
#[inline(always)]
fn digit_run_end(s: &[u8], start: usize) -> usize {
    start + s[start..].iter().take_while(|&&c| is_digit(c)).count()
}

fn strip_leading_zeros(run: &[u8]) -> &[u8] {
    let zeros = run.iter().take_while(|&&c| c == b'0').count();
    &run[zeros..]
}

/// Compares two digit runs as unsigned integers.
///
/// The longer significant run wins outright; for equal lengths the first
/// differing digit decides.
fn compare_magnitude(a: &[u8], b: &[u8]) -> Ordering {
    let a = strip_leading_zeros(a);
    let b = strip_leading_zeros(b);

    if a.len() != b.len() {
        return a.len().cmp(&b.len());
    }

    let mut bias = Ordering::Equal;
    for (da, db) in a.iter().zip(b) {
        if bias == Ordering::Equal {
            bias = da.cmp(db);
        }
    }
    bias
}

/// Compares two digit runs as the digits after a decimal point.
///
/// The first differing digit decides. If one run is a prefix of the other,
/// the longer one is greater only when its extra digits are not all zero.
fn compare_fractional(a: &[u8], b: &[u8]) -> Ordering {
    let shared = a.len().min(b.len());

    match a[..shared].cmp(&b[..shared]) {
        Ordering::Equal => {}
        other => return other,
    }

    let significant = |tail: &[u8]| tail.iter().any(|&c| c != b'0');
    significant(&a[shared..]).cmp(&significant(&b[shared..]))
}

/// Compares two byte strings in natural order.
///
/// This is the slice form of [`compare`].
///
/// ```
/// use natcmp::compare_bytes;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_bytes(b"img12.png", b"img10.png"), Ordering::Greater);
/// ```
pub fn compare_bytes(a: &[u8], b: &[u8]) -> Ordering {
    let mut ai = 0;
    let mut bi = 0;

    // Token context shared by both operands. Every token consumed so far
    // compared equal, so both sides always agree on it.
    let mut after_digits = false;
    let mut after_point = false;

    loop {
        ai = skip_spaces(a, ai);
        bi = skip_spaces(b, bi);

        let ca = byte_at(a, ai);
        let cb = byte_at(b, bi);

        if is_digit(ca) && is_digit(cb) {
            let a_end = digit_run_end(a, ai);
            let b_end = digit_run_end(b, bi);
            let run_a = &a[ai..a_end];
            let run_b = &b[bi..b_end];

            let zero_led = ca == b'0' || cb == b'0';
            let ord = if after_point && zero_led {
                compare_fractional(run_a, run_b)
            } else {
                compare_magnitude(run_a, run_b)
            };
            if ord != Ordering::Equal {
                return ord;
            }

            ai = a_end;
            bi = b_end;
            after_digits = true;
            after_point = false;
            continue;
        }

        match ca.cmp(&cb) {
            Ordering::Equal => {}
            other => return other,
        }

        if ai >= a.len() && bi >= b.len() {
            return Ordering::Equal;
        }

        after_point = ca == b'.' && after_digits;
        after_digits = false;
        ai += 1;
        bi += 1;
    }
}

/// Compares two strings in natural order.
///
/// Embedded runs of decimal digits compare by numeric value and whitespace
/// is ignored, so `"a2" < "a10"` and `"a 1" == "a1"`.
///
/// ```
/// use natcmp::compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare("a2", "a10"), Ordering::Less);
/// assert_eq!(compare("a 1", "a1"), Ordering::Equal);
/// assert_eq!(compare("1.02", "1.1"), Ordering::Less);
/// ```
#[inline]
pub fn compare(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> Ordering {
    compare_bytes(a.as_ref(), b.as_ref())
}
