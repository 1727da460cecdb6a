use sha2::{Digest, Sha256};

/// Compare `candidate` with the configured admin secret.
///
/// Both sides are hashed to equal-length digests and compared without
/// short-circuiting. An unset or empty secret never matches.
pub fn verify_password(candidate: &str, secret: Option<&str>) -> bool {
    let secret = match secret {
        Some(s) if !s.is_empty() => s,
        _ => return false,
    };

    let expected = Sha256::digest(secret.as_bytes());
    let actual = Sha256::digest(candidate.as_bytes());
    expected
        .iter()
        .zip(actual.iter())
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}
