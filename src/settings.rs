//! Presentation settings
//!
//! Gameplay is fixed by `consts`; these only change how a round is shown and
//! driven. Loaded from JSON on native and from URL query parameters on web.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    /// Number of animated wave lines along the surface
    pub fn wave_layers(&self) -> usize {
        match self {
            QualityPreset::Low => 1,
            QualityPreset::Medium => 2,
            QualityPreset::High => 3,
        }
    }

    /// Segments per wave line
    pub fn wave_points(&self) -> usize {
        match self {
            QualityPreset::Low => 25,
            QualityPreset::Medium => 50,
            QualityPreset::High => 80,
        }
    }

    /// Segments in a fish body outline
    pub fn body_segments(&self) -> usize {
        match self {
            QualityPreset::Low => 10,
            QualityPreset::Medium => 20,
            QualityPreset::High => 32,
        }
    }
}

impl FromStr for QualityPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(QualityPreset::Low),
            "medium" | "med" => Ok(QualityPreset::Medium),
            "high" => Ok(QualityPreset::High),
            other => Err(format!("unknown quality preset '{other}'")),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,
    /// Show the "Size: 1.25x" HUD line
    pub show_size: bool,
    /// Start with the autopilot playing
    pub idle_mode: bool,
    /// Fixed round seed (random per round when unset)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            show_size: true,
            idle_mode: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Environment variable holding a JSON settings object (native only)
    pub const ENV_VAR: &'static str = "FISH_FRENZY_SETTINGS";

    /// Parse settings from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Apply `key=value` pairs from a URL query string (`?quality=low&idle`)
    ///
    /// Unknown keys and unparsable values are logged and skipped.
    pub fn apply_query(&mut self, query: &str) {
        for pair in query.trim_start_matches('?').split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "quality" => match value.parse() {
                    Ok(preset) => self.quality = preset,
                    Err(e) => log::warn!("Ignoring quality: {}", e),
                },
                "seed" => match value.parse() {
                    Ok(seed) => self.seed = Some(seed),
                    Err(e) => log::warn!("Ignoring seed '{}': {}", value, e),
                },
                "idle" => self.idle_mode = value != "0" && value != "false",
                "size" => self.show_size = value != "0" && value != "false",
                _ => log::warn!("Unknown setting '{}'", key),
            }
        }
    }

    /// Load settings from the page URL (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let mut settings = Self::default();
        if let Some(search) = web_sys::window().and_then(|w| w.location().search().ok()) {
            settings.apply_query(&search);
        }
        log::info!("Using {} quality", settings.quality.as_str());
        settings
    }

    /// Load settings from `FISH_FRENZY_SETTINGS` (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::env::var(Self::ENV_VAR) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", Self::ENV_VAR);
                    settings
                }
                Err(e) => {
                    log::warn!("Bad {} ({}), using defaults", Self::ENV_VAR, e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
