use anyhow::{Context, Result};
use pluxee_ingest::ParserConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk config file. Everything is optional; missing keys fall back to the
/// Pluxee defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,
}

pub fn pluxee_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".pluxee"))
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(pluxee_home()?.join("config.toml"))
}

/// Load `path`, or the default location when `None`. A missing file yields
/// the default config.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let p = match path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    if !p.exists() {
        tracing::debug!(path = %p.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config(cfg: &Config, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn init_config(path: Option<&Path>) -> Result<()> {
    let p = match path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default(), &p)?;
    println!("Wrote {}", p.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config(Some(dir.path().join("nope.toml").as_path())).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("config.toml");
        let mut cfg = Config::default();
        cfg.parser.strip_transaction_id = true;
        cfg.parser.columns.amount = 4;
        save_config(&cfg, &path).unwrap();
        assert_eq!(load_config(Some(path.as_path())).unwrap(), cfg);
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[parser]\ndecimal_separator = \".\"\n").unwrap();
        let cfg = load_config(Some(path.as_path())).unwrap();
        assert_eq!(cfg.parser.decimal_separator, '.');
        assert_eq!(cfg.parser.date_format, "%d-%m-%Y");
        assert_eq!(cfg.parser.columns.date, 0);
    }

    #[test]
    fn test_partial_columns_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[parser.columns]\namount = 4\n").unwrap();
        let cfg = load_config(Some(path.as_path())).unwrap();
        assert_eq!(cfg.parser.columns.amount, 4);
        assert_eq!(cfg.parser.columns.date, 0);
        assert_eq!(cfg.parser.columns.description, 1);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[parser\n").unwrap();
        assert!(load_config(Some(path.as_path())).is_err());
    }

    #[test]
    fn test_init_does_not_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[parser]\nstrip_transaction_id = true\n").unwrap();
        init_config(Some(path.as_path())).unwrap();
        assert!(load_config(Some(path.as_path())).unwrap().parser.strip_transaction_id);
    }
}
