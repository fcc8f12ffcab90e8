use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub const TASKS_FILE: &str = "tasks.json";

pub fn ticklist_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".ticklist"))
}

pub fn ensure_ticklist_home() -> Result<PathBuf> {
    let dir = ticklist_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn default_tasks_path() -> Result<PathBuf> {
    Ok(ticklist_home()?.join(TASKS_FILE))
}
