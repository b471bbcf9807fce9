use anyhow::{Context, Result};
use chrono_tz::Tz;
use ghiso_core::{parse_timezone, DEFAULT_TIMEZONE};
use ghiso_intent::{AmountMode, IntentParser, ParserOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::ensure_ghiso_home;

pub const DEFAULT_PERFORMED_BY: &str = "Minh Đan";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// IANA zone used to decide what "today" is
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Household member recorded on new transactions
    #[serde(default = "default_performed_by")]
    pub performed_by: String,
    #[serde(default)]
    pub amount_mode: AmountMode,
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

fn default_performed_by() -> String {
    DEFAULT_PERFORMED_BY.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            performed_by: default_performed_by(),
            amount_mode: AmountMode::default(),
        }
    }
}

impl Config {
    pub fn tz(&self) -> Result<Tz> {
        parse_timezone(&self.timezone).with_context(|| format!("timezone in config: {}", self.timezone))
    }

    pub fn parser(&self) -> IntentParser {
        IntentParser::new(ParserOptions {
            amount_mode: self.amount_mode,
        })
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_ghiso_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(p: &Path) -> Result<Config> {
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config(cfg: &Config) -> Result<()> {
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
