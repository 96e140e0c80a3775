//! Checksum sidecar files (`.md5`, `.sha1`, `.sha256`, `.sha512`) uploaded
//! next to every published file.

use jarship_util::hash;

/// Digest algorithms Maven repositories expect sidecars for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl ChecksumAlgorithm {
    pub const ALL: [ChecksumAlgorithm; 4] = [Self::Md5, Self::Sha1, Self::Sha256, Self::Sha512];

    /// File extension appended to the checksummed file's name.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }

    pub fn hex(self, data: &[u8]) -> String {
        match self {
            Self::Md5 => hash::md5_bytes(data),
            Self::Sha1 => hash::sha1_bytes(data),
            Self::Sha256 => hash::sha256_bytes(data),
            Self::Sha512 => hash::sha512_bytes(data),
        }
    }
}

/// A sidecar ready to upload: its file name and hex contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sidecar {
    pub file_name: String,
    pub content: String,
}

/// Compute every sidecar for `file_name` with contents `data`.
pub fn sidecars(file_name: &str, data: &[u8]) -> Vec<Sidecar> {
    ChecksumAlgorithm::ALL
        .iter()
        .map(|algo| Sidecar {
            file_name: format!("{file_name}.{}", algo.extension()),
            content: algo.hex(data),
        })
        .collect()
}
