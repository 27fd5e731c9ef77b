use rand::RngCore;

/// Scheme expected in the `Authorization` header: `Token <key>`.
const TOKEN_PREFIX: &str = "Token ";

/// Key length in hex characters (32 random bytes).
pub const KEY_LEN: usize = 64;

/// Generates an opaque credential key: 256 bits from the OS RNG, hex-encoded.
/// The space is large enough that collisions are negligible; the storage
/// layer's unique index backstops them anyway.
pub fn generate_key() -> String {
    let mut bytes = [0u8; 32];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Extracts the key from an `Authorization` header value. `None` for a
/// missing prefix or an empty key.
pub fn parse_auth_header(header: &str) -> Option<&str> {
    let key = header.strip_prefix(TOKEN_PREFIX)?.trim();
    if key.is_empty() {
        return None;
    }
    Some(key)
}
