use satchel_crypto::{
    CryptoError, UserKey, decode_field, encode_field, encoded_len,
};

#[test]
fn encode_decode_roundtrip() {
    let key = UserKey::generate();

    let ciphertext = encode_field(&key, "Math Homework", 255).unwrap();
    let plaintext = decode_field(&key, &ciphertext).unwrap();

    assert_eq!(plaintext, "Math Homework");
}

#[test]
fn roundtrip_preserves_unicode() {
    let key = UserKey::generate();

    let ciphertext = encode_field(&key, "Verifica di matematica — §2 ∑", 255).unwrap();
    let plaintext = decode_field(&key, &ciphertext).unwrap();

    assert_eq!(plaintext, "Verifica di matematica — §2 ∑");
}

#[test]
fn empty_plaintext_roundtrips() {
    let key = UserKey::generate();

    let ciphertext = encode_field(&key, "", 255).unwrap();
    assert_eq!(decode_field(&key, &ciphertext).unwrap(), "");
}

#[test]
fn wrong_key_fails_to_decode() {
    let k1 = UserKey::generate();
    let k2 = UserKey::generate();

    let ciphertext = encode_field(&k1, "private note title", 255).unwrap();
    let result = decode_field(&k2, &ciphertext);

    assert!(matches!(result, Err(CryptoError::DecryptionFailed)));
}

#[test]
fn same_plaintext_encodes_differently() {
    let key = UserKey::generate();

    let c1 = encode_field(&key, "History essay", 255).unwrap();
    let c2 = encode_field(&key, "History essay", 255).unwrap();

    // Fresh nonce every call
    assert_ne!(c1, c2);
    assert_eq!(decode_field(&key, &c1).unwrap(), "History essay");
    assert_eq!(decode_field(&key, &c2).unwrap(), "History essay");
}

#[test]
fn oversized_ciphertext_rejected() {
    let key = UserKey::generate();
    let plaintext = "a".repeat(300);

    let result = encode_field(&key, &plaintext, 255);

    assert!(matches!(
        result,
        Err(CryptoError::LengthExceeded { max: 255, .. })
    ));
}

#[test]
fn plaintext_at_naive_limit_still_rejected() {
    // A title of exactly the column length in plaintext characters does
    // not fit once nonce, tag and base64 expansion are added: checking
    // plaintext length alone would let this through to be truncated by
    // the database.
    let key = UserKey::generate();
    let max = 255;
    let plaintext = "a".repeat(max);

    assert!(encoded_len(max) > max);
    let result = encode_field(&key, &plaintext, max);
    assert!(matches!(result, Err(CryptoError::LengthExceeded { .. })));
}

#[test]
fn boundary_plaintext_fits_exactly() {
    // Largest plaintext whose encoded form fits a 255-char column:
    // encoded_len(n) <= 255 ⇔ n <= 161 for the 28-byte overhead.
    let key = UserKey::generate();
    let mut fit = 0;
    while encoded_len(fit + 1) <= 255 {
        fit += 1;
    }

    let ok = encode_field(&key, &"a".repeat(fit), 255).unwrap();
    assert!(ok.len() <= 255);

    let too_long = encode_field(&key, &"a".repeat(fit + 1), 255);
    assert!(matches!(too_long, Err(CryptoError::LengthExceeded { .. })));
}

#[test]
fn empty_ciphertext_rejected_as_invalid_input() {
    let key = UserKey::generate();
    let result = decode_field(&key, "");
    assert!(matches!(result, Err(CryptoError::InvalidInput(_))));
}

#[test]
fn garbage_ciphertext_rejected() {
    let key = UserKey::generate();
    let result = decode_field(&key, "%%% definitely not base64 %%%");
    assert!(matches!(result, Err(CryptoError::InvalidInput(_))));
}

#[test]
fn column_truncated_ciphertext_rejected() {
    // Simulates the silent-truncation failure mode this crate exists to
    // prevent: a ciphertext cut off at a column boundary must fail
    // loudly, not decrypt to garbage.
    let key = UserKey::generate();
    let full = encode_field(&key, &"b".repeat(100), 1024).unwrap();
    let truncated = &full[..full.len() / 2];

    let result = decode_field(&key, truncated);
    assert!(result.is_err());
}

#[test]
fn tampered_ciphertext_fails() {
    let key = UserKey::generate();
    let ciphertext = encode_field(&key, "grade context", 255).unwrap();

    // Flip one character inside the base64 body
    let mut bytes = ciphertext.into_bytes();
    let mid = bytes.len() / 2;
    bytes[mid] = if bytes[mid] == b'A' { b'B' } else { b'A' };
    let tampered = String::from_utf8(bytes).unwrap();

    let result = decode_field(&key, &tampered);
    assert!(result.is_err());
}

// Property-based tests
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn encode_decode_always_roundtrips(plaintext in "\\PC{0,120}") {
            let key = UserKey::generate();
            let ciphertext = encode_field(&key, &plaintext, usize::MAX).unwrap();
            prop_assert_eq!(decode_field(&key, &ciphertext).unwrap(), plaintext);
        }

        #[test]
        fn length_check_is_exact(len in 0usize..200) {
            let key = UserKey::generate();
            let plaintext = "x".repeat(len);
            let expected = encoded_len(len);

            // One character short of the actual output must be rejected
            let rejected = matches!(
                encode_field(&key, &plaintext, expected - 1),
                Err(CryptoError::LengthExceeded { .. })
            );
            prop_assert!(rejected);
            // The exact output length must be accepted
            prop_assert!(encode_field(&key, &plaintext, expected).is_ok());
        }
    }
}
