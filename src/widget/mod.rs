//! egui widgets that make up the window chrome.

mod round_window;
mod sidebar;
mod title_bar;

pub use round_window::{RoundWindow, RoundWindowResponse};
pub use sidebar::{SidebarEntry, SidebarNavigation, SidebarResponse};
pub use title_bar::{TitleBar, TitleBarResponse, TitleBarStyle, WindowAction, WindowControlButtons};

use egui::{Color32, CornerRadius};

/// Corner radius with only the listed corners rounded.
pub(crate) fn corners(radius: u8, nw: bool, ne: bool, sw: bool, se: bool) -> CornerRadius {
    let r = |on: bool| if on { radius } else { 0 };
    CornerRadius {
        nw: r(nw),
        ne: r(ne),
        sw: r(sw),
        se: r(se),
    }
}

/// Same color with its alpha scaled by `factor`.
pub(crate) fn faded(c: Color32, factor: f32) -> Color32 {
    let a = (c.a() as f32 * factor.clamp(0.0, 1.0)).round() as u8;
    Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), a)
}
