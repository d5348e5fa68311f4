//! Moving a borderless window by dragging its title bar.

use egui::{Pos2, Vec2};

use crate::window::WindowHandle;

#[derive(Clone, Debug, Default)]
pub struct WindowDragHandler {
    /// Pointer offset from the window's top-left corner at press time.
    grab_offset: Option<Vec2>,
}

impl WindowDragHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.grab_offset.is_some()
    }

    /// Starts a move with the pointer at `local_pos` inside the window.
    pub fn on_press(&mut self, local_pos: Pos2) {
        self.grab_offset = Some(local_pos.to_vec2());
    }

    /// Moves the window so the grabbed point follows `screen_pos`.
    pub fn on_drag(&mut self, screen_pos: Pos2, window: &mut impl WindowHandle) {
        let Some(offset) = self.grab_offset else {
            return;
        };
        if window.is_maximized() {
            return;
        }
        let bounds = window.bounds();
        let target = screen_pos - offset;
        if target != bounds.position() {
            window.set_bounds(bounds.with_position(target));
        }
    }

    /// A double click toggles between maximized and restored.
    pub fn on_click(&mut self, click_count: u32, window: &mut impl WindowHandle) {
        if click_count == 2 {
            self.grab_offset = None;
            window.toggle_maximized();
        }
    }

    pub fn on_release(&mut self) {
        self.grab_offset = None;
    }
}
