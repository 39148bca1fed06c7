// Facade, api and subtle interplay

use cteq::prelude::*;
use cteq_api::error::VerifyResult;
use subtle::{ConditionallySelectable, ConstantTimeEq};

/// Stand-in for a KDF `verify`: derive, then compare against the expected key.
fn verify_derived_key(material: &[u8], expected_key: &[u8]) -> VerifyResult {
    let derived: Vec<u8> = material.iter().map(|b| b.rotate_left(3) ^ 0x5c).collect();
    validate::bytes_equal("derived key", &derived, expected_key).with_context("HKDF verify")
}

#[test]
fn test_constant_time_compare() {
    let a = [1u8, 2, 3, 4];
    let b = [1u8, 2, 3, 4];
    let c = [1u8, 2, 3, 5];

    assert!(ct_eq(a, b));
    assert!(!ct_eq(a, c));
    assert!(!ct_eq(&a[..], &a[..3]));
    assert!(a.ct_equals(&b));
}

#[test]
fn test_facade_reexports_match_internal() {
    let tag = b"0123456789abcdef";
    assert_eq!(
        cteq::constant_time_bytes_eq(tag, tag),
        cteq_internal::constant_time_bytes_eq(tag, tag)
    );
    assert_eq!(cteq::internal::constant_time_bytes_eq_n(tag, tag), 1);
}

#[test]
fn test_choice_composes_with_subtle() {
    let key = [0x11u8; 16];
    let good = [0x11u8; 16];
    let bad = [0x12u8; 16];

    let hit = ct_eq_choice(key, good);
    let miss = ct_eq_choice(key, bad);
    assert_eq!(u8::conditional_select(&0xaa, &0xbb, hit), 0xbb);
    assert_eq!(u8::conditional_select(&0xaa, &0xbb, miss), 0xaa);

    // Same verdict as subtle's own slice comparison
    assert_eq!(hit.unwrap_u8(), key[..].ct_eq(&good[..]).unwrap_u8());
    assert_eq!(miss.unwrap_u8(), key[..].ct_eq(&bad[..]).unwrap_u8());
}

#[test]
fn test_kdf_style_verification() {
    let material = b"input keying material";
    let expected: Vec<u8> = material.iter().map(|b| b.rotate_left(3) ^ 0x5c).collect();

    assert_eq!(verify_derived_key(material, &expected), Ok(()));

    let mut wrong = expected.clone();
    wrong[0] ^= 0x01;
    let err = verify_derived_key(material, &wrong).unwrap_err();
    assert_eq!(err, Error::authentication("HKDF verify"));
    assert_eq!(err.to_string(), "Authentication failed: HKDF verify");

    let err = verify_derived_key(material, &expected[1..]).unwrap_err();
    assert!(matches!(err, Error::AuthenticationFailed { .. }));
}

#[test]
fn test_length_precheck_then_compare() {
    fn check_tag(received: &[u8], expected: &[u8; 16]) -> Result<()> {
        validate::length("MAC tag", received.len(), expected.len())?;
        validate::bytes_equal("MAC tag", received, expected)
    }

    let expected = [0x42u8; 16];
    assert!(check_tag(&[0x42; 16], &expected).is_ok());
    assert_eq!(
        check_tag(&[0x42; 8], &expected),
        Err(Error::InvalidLength {
            context: "MAC tag",
            expected: 16,
            actual: 8,
        })
    );
    assert_eq!(
        check_tag(&[0x43; 16], &expected),
        Err(Error::authentication("MAC tag"))
    );
}
