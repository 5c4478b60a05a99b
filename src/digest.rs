//! Content digests for `[[...]]` spans
//!
//! The text captured between `[[` and `]]` is replaced by a deterministic
//! 128-bit fingerprint of its UTF-8 bytes, rendered as 32 lowercase hex
//! characters. The same text always produces the same placeholder, which makes
//! the transform usable for anonymizing identifiers in published documents.
//!
//! # Algorithm
//!
//! 1. Hash the captured bytes with MD5
//! 2. Encode all 16 digest bytes as lowercase hexadecimal
//!
//! # Example
//!
//! ```
//! use markdown_html_converter::digest::ContentHasher;
//!
//! let hasher = ContentHasher::new();
//! assert_eq!(hasher.digest(b"Hello"), "8b1a9953c4611296a827abf8c47804d7");
//! ```

/// Length of a rendered digest in hex characters
pub const DIGEST_HEX_LEN: usize = 32;

/// Content hasher producing lowercase hex MD5 digests
#[derive(Debug, Clone, Copy)]
pub struct ContentHasher;

impl ContentHasher {
    /// Create a new content hasher
    pub fn new() -> Self {
        Self
    }

    /// Hash `bytes` and return the 32-character lowercase hex digest
    pub fn digest(&self, bytes: &[u8]) -> String {
        let digest = md5::compute(bytes);
        hex::encode(digest.0)
    }
}

impl Default for ContentHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_digest() {
        let hasher = ContentHasher::new();
        assert_eq!(hasher.digest(b"Hello"), "8b1a9953c4611296a827abf8c47804d7");
    }

    #[test]
    fn test_empty_content() {
        let hasher = ContentHasher::new();
        assert_eq!(hasher.digest(b""), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_digest_uniqueness() {
        let hasher = ContentHasher::new();
        assert_ne!(hasher.digest(b"content 1"), hasher.digest(b"content 2"));
    }

    #[test]
    fn test_unicode_content_hashes_utf8_bytes() {
        let hasher = ContentHasher::new();
        let text = "Hello 世界";
        assert_eq!(hasher.digest(text.as_bytes()).len(), DIGEST_HEX_LEN);
        assert_ne!(hasher.digest(text.as_bytes()), hasher.digest(b"Hello"));
    }

    proptest! {
        #[test]
        fn prop_digest_is_32_lowercase_hex(bytes in prop::collection::vec(any::<u8>(), 0..2048)) {
            let digest = ContentHasher::new().digest(&bytes);

            prop_assert_eq!(digest.len(), DIGEST_HEX_LEN);
            prop_assert!(digest.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }

        #[test]
        fn prop_digest_is_deterministic(bytes in prop::collection::vec(any::<u8>(), 0..1024)) {
            let first = ContentHasher::new().digest(&bytes);
            let second = ContentHasher::default().digest(&bytes);
            prop_assert_eq!(first, second);
        }
    }
}
