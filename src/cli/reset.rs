//! `--reset-theme` command.

use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::adapters::FileStore;
use crate::engine::THEME_STORAGE_KEY;
use crate::startup::Config;
use crate::traits::KeyValueStore;

/// Remove the saved theme from the preferences file.
pub fn handle_reset_theme_command(config: &Config) -> Result<()> {
    let path = config
        .preferences_path()
        .ok_or_else(|| eyre!("Could not determine the preferences directory"))?;
    let mut store = FileStore::at(path);
    reset_theme(&mut store)?;
    println!("Theme preference cleared; following the terminal appearance.");
    Ok(())
}

/// Remove the theme key from `store`.
pub fn reset_theme(store: &mut dyn KeyValueStore) -> Result<()> {
    store.remove(THEME_STORAGE_KEY)?;
    tracing::info!("Theme preference cleared from command line");
    Ok(())
}
