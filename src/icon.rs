//! Icons given as SVG path data, rendered through the `egui_extras` SVG loader.
//!
//! Call [`egui_extras::install_image_loaders`] once at startup or the icons
//! show as loading spinners.

use std::hash::{DefaultHasher, Hash, Hasher};

use egui::{Color32, Image, Vec2};
use serde::{Deserialize, Serialize};

/// Side length of the coordinate system icon paths are authored in.
pub const ICON_VIEWBOX: f32 = 24.0;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SvgIcon {
    path: String,
}

impl SvgIcon {
    pub fn new(path_data: impl Into<String>) -> Self {
        Self {
            path: path_data.into(),
        }
    }

    pub fn path_data(&self) -> &str {
        &self.path
    }

    /// Standalone SVG document with the path filled in `fill`.
    pub fn to_svg(&self, fill: Color32) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {v} {v}\" width=\"{v}\" height=\"{v}\">\
             <path fill=\"{color}\" fill-opacity=\"{alpha:.3}\" d=\"{d}\"/></svg>",
            v = ICON_VIEWBOX,
            color = hex_rgb(fill),
            alpha = fill.a() as f32 / 255.0,
            d = escape_attr(&self.path),
        )
    }

    /// Unique per path and color so the loader cache never mixes tints.
    pub fn uri(&self, fill: Color32) -> String {
        let mut hasher = DefaultHasher::new();
        self.path.hash(&mut hasher);
        fill.to_array().hash(&mut hasher);
        format!("bytes://icon-{:016x}.svg", hasher.finish())
    }

    pub fn image(&self, fill: Color32, size: Vec2) -> Image<'static> {
        Image::from_bytes(self.uri(fill), self.to_svg(fill).into_bytes()).fit_to_exact_size(size)
    }
}

fn hex_rgb(c: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
