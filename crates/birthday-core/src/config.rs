//! Page configuration.
//!
//! A JSON file can override any part of the defaults:
//!
//! ```json
//! {
//!   "audio": { "src": "/songs.mp3", "autoplay": true },
//!   "celebration": { "duration_secs": 10 },
//!   "content": { "recipient": "Pretty!" }
//! }
//! ```
//!
//! Missing tables and fields fall back to their defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::confetti::DEFAULT_PARTICLES;
use crate::content::PageContent;
use crate::error::{PageError, PageResult};
use crate::visibility::DEFAULT_THRESHOLD;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub src: String,
    /// Try to start playback on load
    pub autoplay: bool,
    #[serde(rename = "loop")]
    pub looped: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            src: "/songs.mp3".to_string(),
            autoplay: true,
            looped: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CelebrationConfig {
    /// Show the overlay when the page loads
    pub on_load: bool,
    pub duration_secs: u64,
    pub particles: usize,
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            on_load: true,
            duration_secs: 10,
            particles: DEFAULT_PARTICLES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Coverage a section needs to become active
    pub threshold: f64,
    /// Scroll-idle time after which the viewport counts as settled
    pub settle_ms: u64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            settle_ms: 150,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub audio: AudioConfig,
    pub celebration: CelebrationConfig,
    pub navigation: NavigationConfig,
    pub content: PageContent,
}

impl PageConfig {
    /// `<config dir>/birthday/page.json`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("birthday")
            .join("page.json")
    }

    /// Read and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> PageResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: PageConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded page config");
        Ok(config)
    }

    /// Load `path` if it exists, otherwise use defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> PageResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "No page config, using defaults");
            Ok(Self::default())
        }
    }

    /// Write the config as pretty JSON, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> PageResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> PageResult<()> {
        let threshold = self.navigation.threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(PageError::InvalidConfig(format!(
                "navigation.threshold must be in (0, 1], got {threshold}"
            )));
        }
        if self.celebration.duration_secs == 0 {
            return Err(PageError::InvalidConfig(
                "celebration.duration_secs must be positive".to_string(),
            ));
        }
        if self.audio.src.trim().is_empty() {
            return Err(PageError::InvalidConfig("audio.src is empty".to_string()));
        }
        Ok(())
    }

    pub fn celebration_duration(&self) -> Duration {
        Duration::from_secs(self.celebration.duration_secs)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.navigation.settle_ms)
    }
}
