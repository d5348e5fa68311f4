//! Window geometry and the host window abstraction the chrome widgets drive.

use egui::{Pos2, Rect, Vec2, ViewportCommand, pos2, vec2};
use serde::{Deserialize, Serialize};

/// Position and size of a top-level window in screen points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl WindowBounds {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.min.x, rect.min.y, rect.width(), rect.height())
    }

    pub fn to_rect(self) -> Rect {
        Rect::from_min_size(self.position(), self.size())
    }

    pub fn position(&self) -> Pos2 {
        pos2(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        vec2(self.width, self.height)
    }

    /// Returns the same bounds moved so the top-left corner sits at `pos`.
    pub fn with_position(self, pos: Pos2) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            ..self
        }
    }

    /// Grows width and height up to `min` without moving the top-left corner.
    pub fn clamp_to_min(self, min: Vec2) -> Self {
        Self {
            width: self.width.max(min.x),
            height: self.height.max(min.y),
            ..self
        }
    }
}

/// What the chrome needs from the native window it decorates.
///
/// Implemented by [`ViewportWindow`] for eframe viewports; tests use an
/// in-memory window.
pub trait WindowHandle {
    fn bounds(&self) -> WindowBounds;
    fn set_bounds(&mut self, bounds: WindowBounds);
    fn is_maximized(&self) -> bool;
    fn set_maximized(&mut self, maximized: bool);
    fn minimize(&mut self);
    fn close(&mut self);
    /// Minimum inner size the window may be resized to.
    fn min_size(&self) -> Vec2;

    fn toggle_maximized(&mut self) {
        let maximized = self.is_maximized();
        self.set_maximized(!maximized);
    }
}

/// [`WindowHandle`] backed by the current egui viewport.
///
/// Reads come from `ViewportInfo`, writes are queued as viewport commands and
/// take effect on the next frame.
pub struct ViewportWindow<'a> {
    ctx: &'a egui::Context,
    min_size: Vec2,
}

impl<'a> ViewportWindow<'a> {
    pub fn new(ctx: &'a egui::Context, min_size: Vec2) -> Self {
        Self { ctx, min_size }
    }

    /// Converts a position local to the window into screen coordinates.
    pub fn to_screen(&self, local: Pos2) -> Pos2 {
        self.bounds().position() + local.to_vec2()
    }
}

impl WindowHandle for ViewportWindow<'_> {
    fn bounds(&self) -> WindowBounds {
        self.ctx.input(|i| {
            let viewport = i.viewport();
            let outer = viewport.outer_rect;
            let inner = viewport.inner_rect.or(outer);
            match (outer, inner) {
                (Some(outer), Some(inner)) => {
                    WindowBounds::new(outer.min.x, outer.min.y, inner.width(), inner.height())
                }
                _ => WindowBounds::default(),
            }
        })
    }

    fn set_bounds(&mut self, bounds: WindowBounds) {
        let bounds = bounds.clamp_to_min(self.min_size);
        self.ctx
            .send_viewport_cmd(ViewportCommand::OuterPosition(bounds.position()));
        self.ctx
            .send_viewport_cmd(ViewportCommand::InnerSize(bounds.size()));
    }

    fn is_maximized(&self) -> bool {
        self.ctx
            .input(|i| i.viewport().maximized)
            .unwrap_or(false)
    }

    fn set_maximized(&mut self, maximized: bool) {
        log::debug!("set_maximized({maximized})");
        self.ctx
            .send_viewport_cmd(ViewportCommand::Maximized(maximized));
    }

    fn minimize(&mut self) {
        self.ctx.send_viewport_cmd(ViewportCommand::Minimized(true));
    }

    fn close(&mut self) {
        self.ctx.send_viewport_cmd(ViewportCommand::Close);
    }

    fn min_size(&self) -> Vec2 {
        self.min_size
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Moved,
    Pressed,
    Dragged,
    Released,
}

/// Primary-button pointer event with both coordinate spaces resolved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub screen_pos: Pos2,
    pub local_pos: Pos2,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, local_pos: Pos2, window_origin: Pos2) -> Self {
        Self {
            kind,
            screen_pos: window_origin + local_pos.to_vec2(),
            local_pos,
        }
    }

    /// Collapses this frame's primary-button input into at most one event.
    ///
    /// Any change of pointer position while the button is held is a drag,
    /// however slow the motion.
    pub fn from_input(input: &egui::InputState, window_origin: Pos2) -> Option<Self> {
        let pointer = &input.pointer;
        if pointer.primary_pressed() {
            let pos = pointer.press_origin().or(pointer.interact_pos())?;
            return Some(Self::new(PointerEventKind::Pressed, pos, window_origin));
        }
        if pointer.primary_released() {
            let pos = pointer.interact_pos()?;
            return Some(Self::new(PointerEventKind::Released, pos, window_origin));
        }
        let pos = pointer.latest_pos()?;
        if pointer.primary_down() {
            if pointer.delta() != Vec2::ZERO {
                return Some(Self::new(PointerEventKind::Dragged, pos, window_origin));
            }
            return None;
        }
        Some(Self::new(PointerEventKind::Moved, pos, window_origin))
    }
}


#[cfg(test)]
mod tests {
    use super::testing::FakeWindow;
    use super::*;

    #[test]
    fn test_bounds_rect_conversion() {
        let bounds = WindowBounds::new(10.0, 20.0, 300.0, 200.0);
        let rect = bounds.to_rect();
        assert_eq!(rect.min, pos2(10.0, 20.0));
        assert_eq!(rect.max, pos2(310.0, 220.0));
        assert_eq!(WindowBounds::from_rect(rect), bounds);
    }

    #[test]
    fn test_clamp_to_min_keeps_position() {
        let bounds = WindowBounds::new(5.0, 6.0, 50.0, 500.0).clamp_to_min(vec2(200.0, 100.0));
        assert_eq!(bounds, WindowBounds::new(5.0, 6.0, 200.0, 500.0));
    }

    #[test]
    fn test_with_position() {
        let bounds = WindowBounds::new(0.0, 0.0, 640.0, 480.0).with_position(pos2(30.0, 40.0));
        assert_eq!(bounds, WindowBounds::new(30.0, 40.0, 640.0, 480.0));
    }

    #[test]
    fn test_pointer_event_screen_pos() {
        let ev = PointerEvent::new(PointerEventKind::Pressed, pos2(12.0, 8.0), pos2(100.0, 200.0));
        assert_eq!(ev.screen_pos, pos2(112.0, 208.0));
        assert_eq!(ev.local_pos, pos2(12.0, 8.0));
    }

    #[test]
    fn test_toggle_maximized() {
        let mut window = FakeWindow::default();
        window.toggle_maximized();
        assert!(window.maximized);
        window.toggle_maximized();
        assert!(!window.maximized);
    }

    const ORIGIN: Pos2 = pos2(1000.0, 500.0);

    fn button(pos: Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    /// Runs one frame and returns the event it collapses to.
    fn frame(ctx: &egui::Context, time: f64, events: Vec<egui::Event>) -> Option<PointerEvent> {
        let input = egui::RawInput {
            time: Some(time),
            events,
            ..Default::default()
        };
        let mut out = None;
        let _ = ctx.run(input, |ctx| {
            out = ctx.input(|i| PointerEvent::from_input(i, ORIGIN));
        });
        out
    }

    fn kind(event: Option<PointerEvent>) -> Option<PointerEventKind> {
        event.map(|e| e.kind)
    }

    #[test]
    fn test_from_input_hover_is_moved() {
        let ctx = egui::Context::default();
        let ev = frame(&ctx, 0.0, vec![egui::Event::PointerMoved(pos2(20.0, 30.0))]).unwrap();
        assert_eq!(ev.kind, PointerEventKind::Moved);
        assert_eq!(ev.local_pos, pos2(20.0, 30.0));
        assert_eq!(ev.screen_pos, pos2(1020.0, 530.0));
    }

    #[test]
    fn test_from_input_press_uses_press_origin() {
        let ctx = egui::Context::default();
        frame(&ctx, 0.0, vec![egui::Event::PointerMoved(pos2(100.0, 100.0))]);
        let ev = frame(&ctx, 0.5, vec![button(pos2(100.0, 100.0), true)]).unwrap();
        assert_eq!(ev.kind, PointerEventKind::Pressed);
        assert_eq!(ev.local_pos, pos2(100.0, 100.0));
        assert_eq!(ev.screen_pos, pos2(1100.0, 600.0));
    }

    #[test]
    fn test_from_input_held_still_is_silent() {
        let ctx = egui::Context::default();
        frame(&ctx, 0.0, vec![egui::Event::PointerMoved(pos2(100.0, 100.0))]);
        frame(&ctx, 0.5, vec![button(pos2(100.0, 100.0), true)]);
        assert_eq!(frame(&ctx, 1.0, vec![]), None);
    }

    #[test]
    fn test_from_input_slow_drag_after_pause() {
        let ctx = egui::Context::default();
        frame(&ctx, 0.0, vec![egui::Event::PointerMoved(pos2(100.0, 100.0))]);
        assert_eq!(
            kind(frame(&ctx, 0.5, vec![button(pos2(100.0, 100.0), true)])),
            Some(PointerEventKind::Pressed)
        );

        let ev = frame(&ctx, 1.5, vec![egui::Event::PointerMoved(pos2(140.0, 100.0))]).unwrap();
        assert_eq!(ev.kind, PointerEventKind::Dragged);
        assert_eq!(ev.local_pos, pos2(140.0, 100.0));

        let ev = frame(&ctx, 2.5, vec![egui::Event::PointerMoved(pos2(180.0, 100.0))]).unwrap();
        assert_eq!(ev.kind, PointerEventKind::Dragged);
        assert_eq!(ev.local_pos, pos2(180.0, 100.0));

        let ev = frame(&ctx, 3.5, vec![button(pos2(180.0, 100.0), false)]).unwrap();
        assert_eq!(ev.kind, PointerEventKind::Released);
        assert_eq!(ev.local_pos, pos2(180.0, 100.0));

        assert_eq!(
            kind(frame(&ctx, 4.0, vec![egui::Event::PointerMoved(pos2(190.0, 100.0))])),
            Some(PointerEventKind::Moved)
        );
    }
}
