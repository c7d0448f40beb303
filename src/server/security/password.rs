//! Password hashing with PBKDF2-HMAC-SHA256.
//!
//! Hashes are stored as a single string carrying the scheme, iteration count,
//! salt, and derived key, so the verify path needs nothing but the stored
//! value: `pbkdf2-sha256$<iterations>$<salt b64>$<hash b64>`.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use pbkdf2::pbkdf2_hmac;
use rand::Rng;
use sha2::Sha256;

const SCHEME: &str = "pbkdf2-sha256";
const ITERATIONS: u32 = 100_000;
const SALT_LEN: usize = 16;
const OUTPUT_LEN: usize = 32;

/// Hashes a password with a fresh random salt.
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill(&mut salt);

    let mut out = [0u8; OUTPUT_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), &salt, ITERATIONS, &mut out);

    format!(
        "{SCHEME}${ITERATIONS}${}${}",
        URL_SAFE_NO_PAD.encode(salt),
        URL_SAFE_NO_PAD.encode(out)
    )
}

/// Verifies a password against a stored hash string.
///
/// Derives with the iteration count and salt recorded in the stored value and
/// compares in constant time. Any malformed stored value verifies as false
/// rather than erroring.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let mut parts = stored.split('$');

    let (Some(scheme), Some(iterations), Some(salt), Some(expected)) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    if parts.next().is_some() || scheme != SCHEME {
        return false;
    }

    let Ok(iterations) = iterations.parse::<u32>() else {
        return false;
    };
    if iterations == 0 {
        return false;
    }
    let (Ok(salt), Ok(expected)) = (
        URL_SAFE_NO_PAD.decode(salt),
        URL_SAFE_NO_PAD.decode(expected),
    ) else {
        return false;
    };
    if expected.len() != OUTPUT_LEN {
        return false;
    }

    let mut out = [0u8; OUTPUT_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), &salt, iterations, &mut out);

    subtle::ConstantTimeEq::ct_eq(&out[..], expected.as_slice()).into()
}
