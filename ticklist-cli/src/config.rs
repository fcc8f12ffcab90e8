use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use ticklist_core::SystemClock;

use crate::state::{default_tasks_path, ensure_ticklist_home, ticklist_home};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageSection,
    #[serde(default)]
    pub clock: ClockSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSection {
    /// Where tasks live. Defaults to ~/.ticklist/tasks.json
    pub tasks_file: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockSection {
    /// IANA zone used for "today" and creation stamps. Defaults to system local time.
    pub timezone: Option<String>,
}

impl Config {
    /// `--file` wins over the config file, which wins over the default.
    pub fn tasks_path(&self, flag: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(p) = flag {
            return Ok(p);
        }
        match &self.storage.tasks_file {
            Some(p) => Ok(PathBuf::from(p)),
            None => default_tasks_path(),
        }
    }

    pub fn system_clock(&self) -> Result<SystemClock> {
        match self.clock.timezone.as_deref().map(str::trim) {
            Some(tz) if !tz.is_empty() => SystemClock::with_timezone(tz),
            _ => Ok(SystemClock::new()),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ticklist_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    read_config(&config_path()?)
}

pub fn read_config(p: &Path) -> Result<Config> {
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn write_config(p: &Path, cfg: &Config) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    ensure_ticklist_home()?;
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    write_config(&p, &Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}

pub fn show_config(flag: Option<PathBuf>) -> Result<()> {
    let p = config_path()?;
    let cfg = load_config()?;
    println!("Config file: {}", p.display());
    println!("Tasks file:  {}", cfg.tasks_path(flag)?.display());
    println!(
        "Timezone:    {}",
        cfg.clock.timezone.as_deref().unwrap_or("system local")
    );
    Ok(())
}
