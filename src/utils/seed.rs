use md5::Md5;
use sha2::{Digest, Sha256, Sha512};

use super::charset::Flags;

// Booleans render the way the first implementation printed them so that
// fingerprints stay compatible.
fn flag(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// MD5 over the input, the length and the three flags, as lowercase hex.
pub fn fingerprint(input: &str, length: i64, flags: &Flags) -> String {
    let canonical = format!(
        "{}{}{}{}{}",
        input,
        length,
        flag(flags.no_symbols),
        flag(flags.digits_only),
        flag(flags.letters_only)
    );
    hex::encode(Md5::digest(canonical.as_bytes()))
}

/// SHA-512 over the input, the length and the fingerprint, as lowercase hex.
pub fn intermediate(input: &str, length: i64, fingerprint: &str) -> String {
    let mut hasher = Sha512::new();
    hasher.update(input.as_bytes());
    hasher.update(length.to_string().as_bytes());
    hasher.update(fingerprint.as_bytes());
    hex::encode(hasher.finalize())
}

/// SHA-256 of the intermediate hex digest, read as a big-endian integer and
/// reduced modulo 2^32. Only the trailing four bytes survive the reduction.
pub fn reduce(intermediate: &str) -> u32 {
    let digest = Sha256::digest(intermediate.as_bytes());
    let tail = &digest[digest.len() - 4..];
    u32::from_be_bytes([tail[0], tail[1], tail[2], tail[3]])
}

pub fn derive(input: &str, length: i64, flags: &Flags) -> u32 {
    let fingerprint = fingerprint(input, length, flags);
    reduce(&intermediate(input, length, &fingerprint))
}
