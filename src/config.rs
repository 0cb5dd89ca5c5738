//! User settings, persisted as JSON in the OS config directory.

use std::path::{Path, PathBuf};

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::model::drag::DEFAULT_RESIZE_EDGE_PX;
use crate::model::palette::parse_hex_color;
use crate::model::task::DEFAULT_TASK_COLOR;

/// Color pre-selected in the form when palette cycling is off.
pub const DEFAULT_FORM_COLOR: &str = "#0EA5E9";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Year shown at startup. `None` means the current year.
    pub reference_year: Option<i32>,
    /// Width of the grab zone at each bar edge that starts a resize.
    pub resize_edge_px: f32,
    /// Clamp bars to the visible year and hide tasks outside it.
    pub clamp_to_year: bool,
    /// Hex color used by the form when `cycle_colors` is off.
    pub default_color: String,
    /// Give each new task the next palette color.
    pub cycle_colors: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            reference_year: None,
            resize_edge_px: DEFAULT_RESIZE_EDGE_PX,
            clamp_to_year: true,
            default_color: DEFAULT_FORM_COLOR.into(),
            cycle_colors: true,
        }
    }
}

impl AppSettings {
    /// Load from the default location, falling back to defaults on any error.
    pub fn load_or_default() -> Self {
        let path = settings_path();
        match Self::load(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                if path.exists() {
                    log::warn!("Ignoring settings file {}: {}", path.display(), e);
                }
                Self::default()
            }
        }
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let json = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str::<Self>(json)
            .map(Self::sanitized)
            .map_err(|e| e.to_string())
    }

    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| e.to_string())?;
        }
        std::fs::write(path, json).map_err(|e| e.to_string())
    }

    /// Write to the default location; failures are only logged.
    pub fn save_to_default(&self) {
        let path = settings_path();
        if let Err(e) = self.save(&path) {
            log::warn!("Failed to save settings to {}: {}", path.display(), e);
        }
    }

    /// The form color, or the built-in default if the hex string is bad.
    pub fn default_color(&self) -> Color32 {
        parse_hex_color(&self.default_color).unwrap_or_else(|e| {
            log::warn!("Bad default_color in settings: {}", e);
            DEFAULT_TASK_COLOR
        })
    }

    fn sanitized(mut self) -> Self {
        if !self.resize_edge_px.is_finite() || self.resize_edge_px < 0.0 {
            self.resize_edge_px = DEFAULT_RESIZE_EDGE_PX;
        }
        self
    }
}

pub fn settings_path() -> PathBuf {
    match directories::ProjectDirs::from("", "", "AnnualSchedule") {
        Some(dirs) => dirs.config_dir().join("settings.json"),
        None => PathBuf::from(".").join("settings.json"),
    }
}
