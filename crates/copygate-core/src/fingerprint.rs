//! Content fingerprinting.
//!
//! A fingerprint is a fast equality pre-filter, never a similarity measure:
//! two articles that share their opening sample collide here and are handed
//! to the similarity scorer for a real verdict. Articles that differ only in
//! a later paragraph still collide and stay candidates for full scoring.

use xxhash_rust::xxh64::xxh64;

/// Number of characters digested from the start of the text.
const SAMPLE_CHARS: usize = 1000;

/// Digest the leading sample of `plain_text` into a fixed-length hex string.
///
/// Deterministic: identical samples always produce identical fingerprints.
/// Shorter texts are digested whole.
pub fn fingerprint(plain_text: &str) -> String {
    format!("{:016x}", xxh64(sample(plain_text).as_bytes(), 0))
}

/// Rolling-checksum digest over the same sample.
///
/// Weaker than [`fingerprint`] but trivially infallible; the degraded
/// analysis path uses it so every result carries a usable fingerprint.
pub fn rolling_checksum(plain_text: &str) -> String {
    let mut hash: i32 = 0;
    for ch in sample(plain_text).chars() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(ch as i32);
    }
    format!("{:x}", hash as u32)
}

/// First [`SAMPLE_CHARS`] characters of `text`, on a char boundary.
fn sample(text: &str) -> &str {
    match text.char_indices().nth(SAMPLE_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        let text = "The quick brown fox jumps over the lazy dog.";
        assert_eq!(fingerprint(text), fingerprint(text));
        assert_eq!(rolling_checksum(text), rolling_checksum(text));
    }

    #[test]
    fn fixed_length_hex() {
        for text in ["", "a", "some longer piece of content"] {
            let fp = fingerprint(text);
            assert_eq!(fp.len(), 16);
            assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn differing_prefixes_differ() {
        assert_ne!(fingerprint("alpha content"), fingerprint("beta content"));
    }

    #[test]
    fn late_changes_do_not_affect_fingerprint() {
        // Only the first 1000 chars participate; a divergent tail collides.
        let prefix = "x".repeat(1000);
        let a = format!("{prefix} first ending");
        let b = format!("{prefix} second ending");
        assert_eq!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn sample_respects_char_boundaries() {
        // Multi-byte chars around the cut point must not split.
        let text = "é".repeat(1500);
        let fp = fingerprint(&text);
        assert_eq!(fp.len(), 16);
    }

    #[test]
    fn checksum_handles_empty_input() {
        assert_eq!(rolling_checksum(""), "0");
    }
}
