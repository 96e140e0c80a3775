//! Hex digests for checksum sidecars.

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

/// Compute the SHA-256 hash of a byte slice, returning a lowercase hex string.
pub fn sha256_bytes(data: &[u8]) -> String {
    hex_digest::<Sha256>(data)
}

/// Compute the SHA-512 hash of a byte slice, returning a lowercase hex string.
pub fn sha512_bytes(data: &[u8]) -> String {
    hex_digest::<Sha512>(data)
}

/// Compute the SHA-1 hash of a byte slice, returning a lowercase hex string.
pub fn sha1_bytes(data: &[u8]) -> String {
    hex_digest::<Sha1>(data)
}

/// Compute the MD5 hash of a byte slice, returning a lowercase hex string.
pub fn md5_bytes(data: &[u8]) -> String {
    hex_digest::<Md5>(data)
}

fn hex_digest<D: Digest>(data: &[u8]) -> String {
    let digest = D::digest(data);
    digest.iter().map(|b| format!("{b:02x}")).collect()
}
