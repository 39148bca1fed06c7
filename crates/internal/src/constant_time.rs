//! Constant-time operations to prevent timing attacks
//!
//! Everything in this module funnels into [`constant_time_bytes_eq`], which
//! folds the XOR of every byte pair into a single accumulator and reduces
//! that accumulator to one bit with a shift-or chain. At equal lengths the
//! instruction trace depends only on the length, never on the contents.

use core::hint::black_box;
use subtle::Choice;

/// Constant-time equality of two byte slices.
///
/// Returns `1` when `a` and `b` have the same length and identical
/// contents, `0` otherwise. No other value is ever returned.
///
/// Lengths are treated as public: slices of different lengths return `0`
/// immediately. At equal lengths every byte of both slices is read exactly
/// once and the loop never exits early.
///
/// ```
/// use cteq_internal::constant_time_bytes_eq;
///
/// assert_eq!(constant_time_bytes_eq(b"tag", b"tag"), 1);
/// assert_eq!(constant_time_bytes_eq(b"tag", b"taG"), 0);
/// assert_eq!(constant_time_bytes_eq(b"", b""), 1);
/// ```
#[inline(never)]
#[must_use]
pub fn constant_time_bytes_eq(a: &[u8], b: &[u8]) -> u8 {
    if a.len() != b.len() {
        return 0;
    }

    let mut mismatch = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        mismatch |= x ^ y;
    }

    collapse(mismatch)
}

/// Constant-time equality of two fixed-size byte arrays.
///
/// Same result encoding as [`constant_time_bytes_eq`]. Both lengths are
/// fixed by the type, so there is no length check at all.
#[inline(never)]
#[must_use]
pub fn constant_time_bytes_eq_n<const N: usize>(a: &[u8; N], b: &[u8; N]) -> u8 {
    let mut mismatch = 0u8;
    for i in 0..N {
        mismatch |= a[i] ^ b[i];
    }

    collapse(mismatch)
}

/// Reduce the mismatch accumulator to `1` (zero) or `0` (non-zero).
///
/// Any set bit is smeared down to bit 0, then bit 0 is inverted.
#[inline(always)]
fn collapse(mismatch: u8) -> u8 {
    // The optimizer must not see that only `mismatch == 0` matters here.
    let mut m = black_box(mismatch);
    m |= m >> 4;
    m |= m >> 2;
    m |= m >> 1;
    (m & 1) ^ 1
}

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
/// This function runs in constant time regardless of the input values.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    ct_eq_choice(a, b).into()
}

/// Constant-time equality check that returns a Choice (0 or 1)
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    Choice::from(constant_time_bytes_eq(a.as_ref(), b.as_ref()))
}

/// Trait for types that can be compared in constant time
pub trait ConstantTimeEquals {
    /// Compare two values in constant time
    fn ct_equals(&self, other: &Self) -> bool;
}

/// Implement ConstantTimeEquals for all types that implement AsRef<[u8]>
impl<T: AsRef<[u8]> + ?Sized> ConstantTimeEquals for T {
    fn ct_equals(&self, other: &Self) -> bool {
        ct_eq(self.as_ref(), other.as_ref())
    }
}
