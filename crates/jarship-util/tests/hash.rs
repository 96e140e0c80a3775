use jarship_util::hash::{md5_bytes, sha1_bytes, sha256_bytes, sha512_bytes};

#[test]
fn test_sha256_bytes_empty() {
    let hash = sha256_bytes(b"");
    assert_eq!(
        hash,
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn test_sha256_bytes_hello() {
    let hash = sha256_bytes(b"hello");
    assert_eq!(
        hash,
        "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
    );
}

#[test]
fn test_sha1_bytes_hello_world() {
    assert_eq!(
        sha1_bytes(b"hello world"),
        "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed"
    );
}

#[test]
fn test_md5_bytes_hello_world() {
    assert_eq!(md5_bytes(b"hello world"), "5eb63bbbe01eeed093cb22bb8f5acdc3");
}

#[test]
fn test_sha512_bytes_length() {
    assert_eq!(sha512_bytes(b"jarship").len(), 128);
}
