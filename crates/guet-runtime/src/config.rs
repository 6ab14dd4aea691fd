use anyhow::Result;
use guet_engine::ReportPalette;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. GUET_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.guet (fallback for systems without XDG)
pub fn resolve_data_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("GUET_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("guet"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".guet"));
    }

    anyhow::bail!("Could not determine data path: no HOME directory or XDG data directory found")
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Report markup colors, overridable per deployment. The hors slot exists
/// precisely because the office never confirmed that color.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PaletteSettings {
    pub crown: String,
    pub noire: String,
    pub surveillance: String,
    pub hors: String,
    pub png: String,
}

impl Default for PaletteSettings {
    fn default() -> Self {
        let palette = ReportPalette::default();
        Self {
            crown: palette.crown,
            noire: palette.noire,
            surveillance: palette.surveillance,
            hors: palette.hors,
            png: palette.png,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub page_size: usize,
    pub palette: PaletteSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: guet_engine::DEFAULT_PAGE_SIZE,
            palette: PaletteSettings::default(),
        }
    }
}

impl Settings {
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn palette(&self) -> ReportPalette {
        ReportPalette {
            crown: self.palette.crown.clone(),
            noire: self.palette.noire.clone(),
            surveillance: self.palette.surveillance.clone(),
            hors: self.palette.hors.clone(),
            png: self.palette.png.clone(),
        }
    }
}
