/**
 * Loading of images and models from the asset directory.
 *
 * Paths passed to the loaders are relative to [`assets_dir`].
 */
pub mod mesh;
pub mod texture;

use std::path::PathBuf;

use anyhow::Context;

/// Environment variable that overrides the asset directory.
pub const ASSETS_ENV: &str = "FLOW_DEMOS_ASSETS";

/// `$FLOW_DEMOS_ASSETS` if set, else `./assets` if it exists, else the copy
/// the build script placed next to the build output.
pub fn assets_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(ASSETS_ENV) {
        return PathBuf::from(dir);
    }
    let local = PathBuf::from("./assets");
    if local.is_dir() {
        return local;
    }
    PathBuf::from(env!("FLOW_DEMOS_BUNDLED_ASSETS"))
}

pub async fn load_string(file_name: &str) -> anyhow::Result<String> {
    let path = assets_dir().join(file_name);
    tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Unable to read {}", path.display()))
}

pub async fn load_binary(file_name: &str) -> anyhow::Result<Vec<u8>> {
    let path = assets_dir().join(file_name);
    tokio::fs::read(&path)
        .await
        .with_context(|| format!("Unable to read {}", path.display()))
}
