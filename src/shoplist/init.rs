use crate::api::ShoplistApi;
use crate::commands::ShoplistPaths;
use crate::config::ShoplistConfig;
use crate::error::{Result, ShoplistError};
use crate::store::fs_backend::FsBackend;
use crate::store::ItemStore;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Env var overriding the data directory.
pub const DATA_DIR_ENV: &str = "SHOPLIST_DATA";

pub struct ShoplistContext {
    pub api: ShoplistApi<FsBackend>,
    pub config: ShoplistConfig,
}

/// Picks the data directory: an explicit path wins, then `SHOPLIST_DATA`, then
/// the platform data directory.
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "shoplist", "shoplist")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ShoplistError::Config("Could not determine data directory".to_string()))
}

/// Wires the file-backed store and loads client config.
///
/// A malformed `config.json` falls back to defaults with a warning rather than
/// blocking access to the list.
pub fn initialize(data_dir: Option<PathBuf>) -> Result<ShoplistContext> {
    let data_dir = resolve_data_dir(data_dir)?;
    let paths = ShoplistPaths::new(&data_dir);
    debug!(data_dir = %data_dir.display(), "initializing");

    let config = ShoplistConfig::load(&paths.data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config");
        ShoplistConfig::default()
    });

    let store = ItemStore::new(FsBackend::new(paths.store_dir()));
    let api = ShoplistApi::new(store, paths);
    Ok(ShoplistContext { api, config })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_dir_wins() {
        let temp = TempDir::new().unwrap();
        let dir = resolve_data_dir(Some(temp.path().to_path_buf())).unwrap();
        assert_eq!(dir, temp.path());
    }

    #[test]
    fn store_lives_under_data_dir() {
        let temp = TempDir::new().unwrap();
        let ctx = initialize(Some(temp.path().to_path_buf())).unwrap();
        ctx.api.add_item("Milk", None).unwrap();
        assert!(temp.path().join("store").join("list").exists());
        assert_eq!(ctx.api.paths().data_dir, temp.path());
    }

    #[test]
    fn malformed_config_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.json"), "{{").unwrap();
        let ctx = initialize(Some(temp.path().to_path_buf())).unwrap();
        assert_eq!(ctx.config, ShoplistConfig::default());
    }
}
