use crate::spectral::policy::PolicyVariant;
use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub policy: PolicyVariant,
    pub color_seed: u64,
    pub show_circles: bool,
    pub transparent_background: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            policy: PolicyVariant::Mirror,
            color_seed: 7,
            show_circles: true,
            transparent_background: false,
        }
    }
}

impl Config {
    pub fn load_or_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("ignoring malformed {}: {e}", path.display());
            Self::default()
        }))
    }

    fn default_path() -> Option<PathBuf> {
        resolve_config_path(Path::new("config/default.toml"))
    }
}

fn resolve_config_path(rel: &Path) -> Option<PathBuf> {
    if let Ok(exe) = std::env::current_exe() {
        let mut cur = exe.parent();
        for _ in 0..6 {
            let Some(dir) = cur else { break };
            let p = dir.join(rel);
            if p.exists() {
                return Some(p);
            }
            cur = dir.parent();
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        let p = cwd.join(rel);
        if p.exists() {
            return Some(p);
        }
    }

    None
}
