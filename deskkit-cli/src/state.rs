use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Per-user settings directory. Record files never live here; they stay in
/// the working directory.
pub fn deskkit_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".deskkit"))
}

pub fn ensure_deskkit_home() -> Result<PathBuf> {
    let dir = deskkit_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
