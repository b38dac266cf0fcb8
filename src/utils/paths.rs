use anyhow::{Context, Result};
use std::path::PathBuf;

/// Environment variable overriding the application directory
pub const HOME_ENV: &str = "AITOOL_HOME";

/// Get the main application directory ($AITOOL_HOME or ~/.aitool-genericopenai)
pub fn get_app_dir() -> Result<PathBuf> {
    let path = match std::env::var_os(HOME_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => {
            let home = std::env::var("HOME")
                .or_else(|_| std::env::var("USERPROFILE"))
                .context("Failed to determine home directory")?;
            PathBuf::from(home).join(".aitool-genericopenai")
        }
    };

    std::fs::create_dir_all(&path).context("Failed to create application directory")?;

    Ok(path)
}

/// Get the config file path (<app dir>/config.json)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.json"))
}

/// Get the default database path (<app dir>/aitool.db)
pub fn get_default_db_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("aitool.db"))
}
