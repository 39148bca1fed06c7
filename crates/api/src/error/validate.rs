//! Validation utilities for verification code paths

use super::{Error, Result, VerifyResult};
use cteq_internal::constant_time_bytes_eq;

/// Validate a length
///
/// Lengths are public, so this check may branch freely. Use it before
/// [`bytes_equal`] when a malformed input should be reported separately
/// from a failed comparison.
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate authentication
#[inline(always)]
pub fn authentication(is_valid: bool, context: &'static str) -> VerifyResult {
    if !is_valid {
        return Err(Error::authentication(context));
    }
    Ok(())
}

/// Verify that `actual` matches `expected` in constant time.
///
/// Both a content mismatch and a length mismatch produce
/// [`Error::AuthenticationFailed`]; the error never says which byte
/// differed.
///
/// ```
/// use cteq_api::validate;
///
/// let derived = [0x42u8; 32];
/// assert!(validate::bytes_equal("HKDF", &derived, &[0x42; 32]).is_ok());
/// assert!(validate::bytes_equal("HKDF", &derived, &[0x41; 32]).is_err());
/// ```
pub fn bytes_equal(context: &'static str, actual: &[u8], expected: &[u8]) -> VerifyResult {
    authentication(constant_time_bytes_eq(actual, expected) == 1, context)
}
