//! Configuration file loading and parsing
//!
//! Loads configuration from `~/.config/bookdash/config.toml`

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::integrate::favicon::{DEFAULT_ICON_URL, DEFAULT_SERVICE_TEMPLATE};
use crate::integrate::IconService;

/// Main configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// General settings
    pub general: GeneralConfig,
    /// Favicon service settings
    pub icons: IconsConfig,
    /// UI display settings
    pub ui: UiConfig,
}

/// General application settings
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable mouse support (drag and drop)
    pub mouse_enabled: bool,
    /// Directory holding the bookmark collection
    pub data_dir: Option<PathBuf>,
    /// Command used to open a bookmark, `{url}` is replaced by the address
    pub open_command: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            data_dir: None,
            open_command: None,
        }
    }
}

/// Favicon service settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IconsConfig {
    /// Service URL, `{domain}` is replaced by the bookmark's hostname
    pub service_template: String,
    /// Icon used when no hostname can be derived, and for imports without one
    pub default_icon_url: String,
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            service_template: DEFAULT_SERVICE_TEMPLATE.to_string(),
            default_icon_url: DEFAULT_ICON_URL.to_string(),
        }
    }
}

impl IconsConfig {
    pub fn service(&self) -> IconService {
        IconService::new(&self.service_template, &self.default_icon_url)
    }
}

/// UI display settings
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Tile width in columns
    pub tile_width: u16,
    /// Tile height in rows
    pub tile_height: u16,
    /// Show the URL under each tile title
    pub show_urls: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tile_width: 16,
            tile_height: 5,
            show_urls: false,
        }
    }
}

impl UiConfig {
    /// Tile size clamped to something that can hold a glyph and a title
    pub fn tile_size(&self) -> (u16, u16) {
        (self.tile_width.max(8), self.tile_height.max(3))
    }
}

impl ConfigFile {
    /// Get the config directory path (~/.config/bookdash)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("bookdash"))
    }

    /// Get the config file path (~/.config/bookdash/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Load configuration from file
    ///
    /// Returns default config if file doesn't exist or can't be parsed
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_or_default(&path),
            _ => Self::default(),
        }
    }

    /// Load `path`, logging and falling back to defaults on failure
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => {
                log::info!("config: loaded {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("config: failed to load {} ({}), using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ConfigFile = toml::from_str(&content)?;
        Ok(config)
    }
}
