//! Derivación de claves de cache
//!
//! Clave final: `prefix + "-" + sha1_hex(content_key)`. El hash solo sirve
//! para acortar y distinguir claves, no tiene fines de seguridad.

use sha1::{Digest, Sha1};

/// SHA-1 de `input` en hexadecimal (40 caracteres, minúsculas)
pub fn sha1_hash(input: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// Generar clave de cache con prefijo
pub fn cache_key(prefix: &str, content_key: &str) -> String {
    format!("{}-{}", prefix, sha1_hash(content_key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha1_known_vectors() {
        assert_eq!(sha1_hash(""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
        assert_eq!(sha1_hash("abc"), "a9993e364706816aba3e25717850c26c9cd0d89d");
    }

    #[test]
    fn test_sha1_is_deterministic_and_fixed_length() {
        let long_input = "SELECT * FROM users WHERE name LIKE '%a%' ".repeat(500);

        for input in ["", "a", "getusers", long_input.as_str()] {
            let first = sha1_hash(input);
            let second = sha1_hash(input);
            assert_eq!(first, second);
            assert_eq!(first.len(), 40);
            assert!(first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_users_listing_key() {
        let key = cache_key("getusers", "someUniqueIdentifiersLikeSQLQUERY");
        assert_eq!(key, "getusers-6a36325e67aab534e87a801613ddb37c5e745822");
    }

    #[test]
    fn test_cache_key_shape() {
        let key = cache_key("orders", "page=2");
        assert_eq!(key, format!("orders-{}", sha1_hash("page=2")));
        assert_ne!(cache_key("orders", "page=2"), cache_key("orders", "page=3"));
        assert_ne!(cache_key("orders", "page=2"), cache_key("invoices", "page=2"));
    }
}
