use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}
fn default_goal() -> u32 {
    33
}
fn default_alt_goal() -> u32 {
    100
}
fn default_hijri_offset() -> i32 {
    0
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    #[serde(default = "default_model")]
    pub model: String,
    /// API key for the Gemini service. The GEMINI_API_KEY environment
    /// variable takes precedence; a missing key is not fatal — requests
    /// fail and the screens show their placeholders.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Override the service endpoint (self-hosted proxies, tests).
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key: None,
            base_url: None,
        }
    }
}

impl AiConfig {
    /// Resolved key: environment first, then the config file.
    pub fn resolved_api_key(&self) -> String {
        std::env::var("GEMINI_API_KEY")
            .ok()
            .or_else(|| self.api_key.clone())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DhikrConfig {
    /// Primary tasbih goal preset.
    #[serde(default = "default_goal")]
    pub goal: u32,
    /// Alternate preset the goal key toggles to.
    #[serde(default = "default_alt_goal")]
    pub alt_goal: u32,
    /// Ring the terminal bell on each tap (best-effort).
    #[serde(default = "default_true")]
    pub bell: bool,
}

impl Default for DhikrConfig {
    fn default() -> Self {
        Self {
            goal: default_goal(),
            alt_goal: default_alt_goal(),
            bell: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Days to add/subtract from Hijri date for local moon sighting.
    /// 0 = default (Saudi), -1 = one day behind, +1 = one day ahead
    #[serde(default = "default_hijri_offset")]
    pub hijri_offset: i32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            hijri_offset: default_hijri_offset(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub dhikr: DhikrConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "nur").context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing config")?;
        std::fs::write(&path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.dhikr.goal, 33);
        assert_eq!(config.dhikr.alt_goal, 100);
        assert!(config.dhikr.bell);
        assert_eq!(config.display.hijri_offset, 0);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "[dhikr]\ngoal = 99\nbell = false").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.dhikr.goal, 99);
        assert!(!config.dhikr.bell);
        // untouched sections keep their defaults
        assert_eq!(config.dhikr.alt_goal, 100);
        assert_eq!(config.ai.model, "gemini-3-flash-preview");
    }

    #[test]
    fn garbage_file_is_an_error_not_a_panic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not = [valid").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }
}
