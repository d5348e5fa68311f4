//! Styling and sizing options for the window chrome, loadable from JSON.

use std::path::Path;

use egui::{Color32, Vec2, vec2};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::menu::{MenuConfig, MenuError};
use crate::resize::DEFAULT_RESIZE_MARGIN;
use crate::widget::TitleBarStyle;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid menu: {0}")]
    Menu(#[from] MenuError),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    // colors are rgba 0-255
    pub background_color: [u8; 4],
    pub content_background_color: [u8; 4],
    pub corner_radius: u8,
    pub padding: f32,
    pub min_size: [f32; 2],
    pub resize_margin: f32,
    pub title_bar: TitleBarConfig,
    pub sidebar: SidebarConfig,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            background_color: [240, 240, 240, 255],
            content_background_color: [255, 255, 255, 255],
            corner_radius: 20,
            padding: 0.0,
            min_size: [300.0, 200.0],
            resize_margin: DEFAULT_RESIZE_MARGIN,
            title_bar: TitleBarConfig::default(),
            sidebar: SidebarConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleBarConfig {
    pub background_color: [u8; 4],
    pub text_color: [u8; 4],
    pub height: f32,
    pub icon_size: f32,
    pub style: TitleBarStyle,
}

impl Default for TitleBarConfig {
    fn default() -> Self {
        Self {
            background_color: [240, 100, 20, 255],
            text_color: [255, 255, 255, 255],
            height: 36.0,
            icon_size: 20.0,
            style: TitleBarStyle::All,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    pub width: f32,
    pub background_color: [u8; 4],
    pub text_color: [u8; 4],
    pub selected_color: [u8; 4],
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            width: 200.0,
            background_color: [240, 240, 240, 255],
            text_color: [60, 60, 60, 255],
            selected_color: [52, 152, 219, 255],
        }
    }
}

pub fn color(rgba: [u8; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3])
}

impl ChromeConfig {
    /// Minimum size with window dimensions never below zero.
    pub fn min_size(&self) -> Vec2 {
        vec2(self.min_size[0].max(0.0), self.min_size[1].max(0.0))
    }

    pub fn with_min_size(mut self, width: f32, height: f32) -> Self {
        self.min_size = [width, height];
        self
    }

    pub fn with_corner_radius(mut self, radius: u8) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;
        log::debug!("loaded chrome config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

pub fn load_menu_config(path: &Path) -> Result<MenuConfig, ConfigError> {
    let json = std::fs::read_to_string(path)?;
    Ok(MenuConfig::from_json(&json)?)
}
