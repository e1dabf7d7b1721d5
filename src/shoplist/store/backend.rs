use crate::error::{Result, ShoplistError};

/// Abstract interface for raw key-value storage.
///
/// This trait handles the "how" of persistence (filesystem vs memory), while
/// [`ItemStore`](super::ItemStore) handles the "what": the item collection,
/// the theme preference and their invariants.
///
/// Values are opaque strings. Every method takes `&self`; implementations use
/// interior mutability where they need it, since the store is only ever driven
/// by a single thread.
pub trait StorageBackend {
    /// Read the value stored under `key`.
    /// Returns Ok(None) if nothing is stored there.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    /// MUST be atomic so readers never observe a partial value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value under `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Keys double as file names for [`FsBackend`](super::fs_backend::FsBackend),
/// so they are restricted to a portable character set.
pub fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));
    if valid {
        Ok(())
    } else {
        Err(ShoplistError::Store(format!("Invalid storage key: {:?}", key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_keys() {
        assert!(validate_key("list").is_ok());
        assert!(validate_key("list.corrupt").is_ok());
        assert!(validate_key("theme_v2-x").is_ok());
    }

    #[test]
    fn rejects_path_like_keys() {
        assert!(validate_key("").is_err());
        assert!(validate_key("../list").is_err());
        assert!(validate_key(".hidden").is_err());
        assert!(validate_key("a/b").is_err());
        assert!(validate_key("with space").is_err());
    }
}
