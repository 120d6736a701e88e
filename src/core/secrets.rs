//! Secret material generation.
//!
//! All randomness enters through the [`SecretSource`] trait so tests can
//! substitute a deterministic source and assert exact output content.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::core::constants::{CLIENT_ID_MAX, CLIENT_ID_MIN};

/// Source of random bytes for secret derivation.
///
/// `fill_bytes` is the single primitive; every derived token is a pure
/// encoding of bytes drawn from it.
pub trait SecretSource {
    /// Fill `dest` with random bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]);

    /// URL-safe token over `n` random bytes (unpadded base64url).
    fn token_urlsafe(&mut self, n: usize) -> String {
        let mut buf = vec![0u8; n];
        self.fill_bytes(&mut buf);
        URL_SAFE_NO_PAD.encode(&buf)
    }

    /// Hex token over `n` random bytes (2n lowercase hex digits).
    fn token_hex(&mut self, n: usize) -> String {
        let mut buf = vec![0u8; n];
        self.fill_bytes(&mut buf);
        buf.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// Standard base64 key over `n` random bytes (padded).
    fn base64_key(&mut self, n: usize) -> String {
        let mut buf = vec![0u8; n];
        self.fill_bytes(&mut buf);
        STANDARD.encode(&buf)
    }

    /// Numeric client identifier within the fixed range.
    fn client_id(&mut self) -> u32 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        let span = u64::from(CLIENT_ID_MAX - CLIENT_ID_MIN) + 1;
        CLIENT_ID_MIN + (u64::from_le_bytes(buf) % span) as u32
    }
}

/// OS-backed randomness source used in production.
#[derive(Debug, Default)]
pub struct OsSecretSource;

impl SecretSource for OsSecretSource {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        OsRng.fill_bytes(dest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Repeats a fixed byte; good enough to pin encodings.
    struct FixedSource(u8);

    impl SecretSource for FixedSource {
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(self.0);
        }
    }

    #[test]
    fn test_token_urlsafe_length_and_alphabet() {
        let token = OsSecretSource.token_urlsafe(32);
        // 32 bytes -> 43 unpadded base64url chars
        assert_eq!(token.len(), 43);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_token_hex_length_and_alphabet() {
        let token = OsSecretSource.token_hex(32);
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_base64_key_is_padded_standard_base64() {
        let key = FixedSource(0).base64_key(32);
        assert_eq!(key, "A".repeat(43) + "=");
    }

    #[test]
    fn test_client_id_within_range() {
        for _ in 0..100 {
            let id = OsSecretSource.client_id();
            assert!((CLIENT_ID_MIN..=CLIENT_ID_MAX).contains(&id));
        }
    }

    #[test]
    fn test_fixed_source_is_deterministic() {
        let mut a = FixedSource(7);
        let mut b = FixedSource(7);
        assert_eq!(a.token_urlsafe(16), b.token_urlsafe(16));
        assert_eq!(a.client_id(), b.client_id());
    }

    #[test]
    fn test_os_source_does_not_repeat() {
        let mut source = OsSecretSource;
        assert_ne!(source.token_urlsafe(32), source.token_urlsafe(32));
    }
}
