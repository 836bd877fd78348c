use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub statement: StatementSection,
    pub report: ReportSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementSection {
    /// Default CSV path used when --csv is not passed
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSection {
    /// Default number of rows for the top-transactions listing
    pub top_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            statement: StatementSection {
                path: "extrato.csv".to_string(),
            },
            report: ReportSection { top_limit: 10 },
        }
    }
}

pub fn extrato_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".extrato"))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(extrato_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).context("parse config.toml")
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let dir = extrato_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    let p = config_path()?;
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
