use anyhow::{Context, Result, bail};
use deskkit_tools::DEFAULT_LENGTH;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::state::{deskkit_home, ensure_deskkit_home};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub password: PasswordSection,
    #[serde(default)]
    pub display: DisplaySection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordSection {
    /// Used when `deskkit password` gets no --length.
    #[serde(default = "default_password_length")]
    pub default_length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySection {
    /// Clear the terminal before redrawing the menu loops.
    #[serde(default = "default_clear_screen")]
    pub clear_screen: bool,
}

fn default_password_length() -> usize {
    DEFAULT_LENGTH
}

fn default_clear_screen() -> bool {
    true
}

impl Default for PasswordSection {
    fn default() -> Self {
        Self {
            default_length: default_password_length(),
        }
    }
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            clear_screen: default_clear_screen(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(deskkit_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s).with_context(|| format!("parse {}", p.display()))
}

/// `load_config`, but a broken file only costs a warning.
pub fn load_config_or_default() -> Config {
    or_default(load_config())
}

fn or_default(loaded: Result<Config>) -> Config {
    loaded.unwrap_or_else(|e| {
        log::warn!("{e:#}; using default settings");
        Config::default()
    })
}

fn parse_config(s: &str) -> Result<Config> {
    let cfg: Config = toml::from_str(s)?;
    if cfg.password.default_length == 0 {
        bail!("[password].default_length must be at least 1");
    }
    Ok(cfg)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = ensure_deskkit_home()?.join("config.toml");
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}

pub fn show_config() -> Result<()> {
    let p = config_path()?;
    let cfg = load_config()?;
    let source = if p.exists() { "file" } else { "defaults" };
    println!("# {} ({})\n", p.display(), source);
    print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
    Ok(())
}
