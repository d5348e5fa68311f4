//! Edge and corner resizing for borderless windows.
//!
//! [`EdgeResizeController::hit_test`] maps a pointer position to the margin
//! band it falls in. A press on a band opens a [`DragSession`] that snapshots
//! the window bounds; every later drag is applied to that snapshot rather than
//! to the previous frame's result, so the outcome depends only on the current
//! pointer position.

use egui::{CursorIcon, Pos2, Vec2, vec2};

use crate::window::{PointerEvent, PointerEventKind, WindowBounds, WindowHandle};

/// Width of the band along each window edge that starts a resize.
pub const DEFAULT_RESIZE_MARGIN: f32 = 5.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResizeEdge {
    #[default]
    None,
    North,
    East,
    South,
    West,
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
}

impl ResizeEdge {
    pub const fn is_none(self) -> bool {
        matches!(self, ResizeEdge::None)
    }

    pub const fn moves_left(self) -> bool {
        matches!(
            self,
            ResizeEdge::West | ResizeEdge::SouthWest | ResizeEdge::NorthWest
        )
    }

    pub const fn moves_right(self) -> bool {
        matches!(
            self,
            ResizeEdge::East | ResizeEdge::SouthEast | ResizeEdge::NorthEast
        )
    }

    pub const fn moves_top(self) -> bool {
        matches!(
            self,
            ResizeEdge::North | ResizeEdge::NorthEast | ResizeEdge::NorthWest
        )
    }

    pub const fn moves_bottom(self) -> bool {
        matches!(
            self,
            ResizeEdge::South | ResizeEdge::SouthEast | ResizeEdge::SouthWest
        )
    }

    pub const fn cursor_icon(self) -> CursorIcon {
        match self {
            ResizeEdge::None => CursorIcon::Default,
            ResizeEdge::North => CursorIcon::ResizeNorth,
            ResizeEdge::East => CursorIcon::ResizeEast,
            ResizeEdge::South => CursorIcon::ResizeSouth,
            ResizeEdge::West => CursorIcon::ResizeWest,
            ResizeEdge::NorthEast => CursorIcon::ResizeNorthEast,
            ResizeEdge::SouthEast => CursorIcon::ResizeSouthEast,
            ResizeEdge::SouthWest => CursorIcon::ResizeSouthWest,
            ResizeEdge::NorthWest => CursorIcon::ResizeNorthWest,
        }
    }
}

/// State captured when a resize starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub edge: ResizeEdge,
    pub anchor_screen_pos: Pos2,
    pub anchor_bounds: WindowBounds,
}

#[derive(Clone, Debug)]
pub struct EdgeResizeController {
    min_size: Vec2,
    margin: f32,
    maximized: bool,
    hovered: ResizeEdge,
    session: Option<DragSession>,
}

impl Default for EdgeResizeController {
    fn default() -> Self {
        Self::new(vec2(300.0, 200.0))
    }
}

impl EdgeResizeController {
    pub fn new(min_size: Vec2) -> Self {
        Self {
            min_size: vec2(min_size.x.max(0.0), min_size.y.max(0.0)),
            margin: DEFAULT_RESIZE_MARGIN,
            maximized: false,
            hovered: ResizeEdge::None,
            session: None,
        }
    }

    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin.max(0.0);
        self
    }

    pub fn set_margin(&mut self, margin: f32) {
        self.margin = margin.max(0.0);
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    pub fn min_size(&self) -> Vec2 {
        self.min_size
    }

    pub fn set_min_size(&mut self, min_size: Vec2) {
        self.min_size = vec2(min_size.x.max(0.0), min_size.y.max(0.0));
    }

    /// Finds the margin band containing `(x, y)`; corners win over edges.
    pub fn hit_test(x: f32, y: f32, width: f32, height: f32, margin: f32) -> ResizeEdge {
        let width = width.max(0.0);
        let height = height.max(0.0);
        let margin = margin.max(0.0);
        if !(0.0..=width).contains(&x) || !(0.0..=height).contains(&y) {
            return ResizeEdge::None;
        }

        let north = y < margin;
        let east = x > width - margin;
        let south = y > height - margin;
        let west = x < margin;

        match (north, east, south, west) {
            (true, true, _, _) => ResizeEdge::NorthEast,
            (_, true, true, _) => ResizeEdge::SouthEast,
            (_, _, true, true) => ResizeEdge::SouthWest,
            (true, _, _, true) => ResizeEdge::NorthWest,
            (true, _, _, _) => ResizeEdge::North,
            (_, true, _, _) => ResizeEdge::East,
            (_, _, true, _) => ResizeEdge::South,
            (_, _, _, true) => ResizeEdge::West,
            _ => ResizeEdge::None,
        }
    }

    pub fn is_resizing(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn hovered_edge(&self) -> ResizeEdge {
        self.hovered
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    /// Records the host's maximize state. Maximizing ends any resize in progress.
    pub fn set_maximized(&mut self, maximized: bool) {
        if maximized && self.session.take().is_some() {
            log::debug!("resize cancelled by maximize");
        }
        if maximized {
            self.hovered = ResizeEdge::None;
        }
        self.maximized = maximized;
    }

    /// Updates the hovered edge from a pointer move. Ignored mid-drag.
    pub fn on_hover(&mut self, local: Pos2, region: Vec2) -> ResizeEdge {
        if self.session.is_some() {
            return self.hovered;
        }
        self.hovered = if self.maximized {
            ResizeEdge::None
        } else {
            Self::hit_test(local.x, local.y, region.x, region.y, self.margin)
        };
        self.hovered
    }

    pub fn on_press(&mut self, screen_pos: Pos2, current_bounds: WindowBounds, edge: ResizeEdge) {
        if edge.is_none() || self.maximized {
            return;
        }
        log::debug!("resize start: {edge:?} from {current_bounds:?}");
        self.session = Some(DragSession {
            edge,
            anchor_screen_pos: screen_pos,
            anchor_bounds: current_bounds,
        });
    }

    /// Bounds for the pointer at `screen_pos`, or `current_bounds` when idle.
    pub fn on_drag(&self, screen_pos: Pos2, current_bounds: WindowBounds) -> WindowBounds {
        let Some(session) = self.session.filter(|_| !self.maximized) else {
            return current_bounds;
        };
        let delta = screen_pos - session.anchor_screen_pos;
        let anchor = session.anchor_bounds;
        let edge = session.edge;
        let mut bounds = anchor;

        if edge.moves_right() {
            bounds.width = (anchor.width + delta.x).max(self.min_size.x);
        } else if edge.moves_left() {
            let width = anchor.width - delta.x;
            if width < self.min_size.x {
                bounds.width = self.min_size.x;
                bounds.x = anchor.x + anchor.width - self.min_size.x;
            } else {
                bounds.width = width;
                bounds.x = anchor.x + delta.x;
            }
        }

        if edge.moves_bottom() {
            bounds.height = (anchor.height + delta.y).max(self.min_size.y);
        } else if edge.moves_top() {
            let height = anchor.height - delta.y;
            if height < self.min_size.y {
                bounds.height = self.min_size.y;
                bounds.y = anchor.y + anchor.height - self.min_size.y;
            } else {
                bounds.height = height;
                bounds.y = anchor.y + delta.y;
            }
        }

        bounds
    }

    pub fn on_release(&mut self) {
        if let Some(session) = self.session.take() {
            log::debug!("resize end: {:?}", session.edge);
        }
        self.hovered = ResizeEdge::None;
    }

    /// Cursor to show for the edge being hovered or dragged.
    pub fn cursor(&self) -> CursorIcon {
        match self.session {
            Some(session) => session.edge.cursor_icon(),
            None => self.hovered.cursor_icon(),
        }
    }

    fn apply_drag(&self, screen_pos: Pos2, window: &mut impl WindowHandle) {
        let current = window.bounds();
        let next = self.on_drag(screen_pos, current);
        if next != current {
            window.set_bounds(next);
        }
    }

    /// Feeds one pointer event through the state machine and applies the
    /// result to `window`. Returns `true` when the event belonged to a resize.
    pub fn handle(
        &mut self,
        event: &PointerEvent,
        window: &mut impl WindowHandle,
        region: Vec2,
    ) -> bool {
        self.set_maximized(window.is_maximized());
        match event.kind {
            PointerEventKind::Moved => {
                self.on_hover(event.local_pos, region);
                false
            }
            PointerEventKind::Pressed => {
                let edge = self.on_hover(event.local_pos, region);
                self.on_press(event.screen_pos, window.bounds(), edge);
                self.is_resizing()
            }
            PointerEventKind::Dragged => {
                if !self.is_resizing() {
                    return false;
                }
                self.apply_drag(event.screen_pos, window);
                true
            }
            PointerEventKind::Released => {
                let was_resizing = self.is_resizing();
                if was_resizing {
                    // the release position is the final one
                    self.apply_drag(event.screen_pos, window);
                }
                self.on_release();
                was_resizing
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::testing::FakeWindow;
    use egui::pos2;

    const W: f32 = 400.0;
    const H: f32 = 300.0;
    const M: f32 = 5.0;

    fn controller() -> EdgeResizeController {
        EdgeResizeController::new(vec2(200.0, 200.0))
    }

    #[test]
    fn test_hit_test_corners_win_over_edges() {
        assert_eq!(EdgeResizeController::hit_test(W - 1.0, 1.0, W, H, M), ResizeEdge::NorthEast);
        assert_eq!(EdgeResizeController::hit_test(W - 1.0, H - 1.0, W, H, M), ResizeEdge::SouthEast);
        assert_eq!(EdgeResizeController::hit_test(1.0, H - 1.0, W, H, M), ResizeEdge::SouthWest);
        assert_eq!(EdgeResizeController::hit_test(1.0, 1.0, W, H, M), ResizeEdge::NorthWest);
    }

    #[test]
    fn test_hit_test_corner_squares_are_corners() {
        for i in 0..10 {
            for j in 0..10 {
                let dx = i as f32 * 0.5;
                let dy = j as f32 * 0.5;
                let cases = [
                    (W - dx, dy, ResizeEdge::NorthEast),
                    (W - dx, H - dy, ResizeEdge::SouthEast),
                    (dx, H - dy, ResizeEdge::SouthWest),
                    (dx, dy, ResizeEdge::NorthWest),
                ];
                for (x, y, edge) in cases {
                    assert_eq!(
                        EdgeResizeController::hit_test(x, y, W, H, M),
                        edge,
                        "({x}, {y}) lies in two bands"
                    );
                }
            }
        }
    }

    #[test]
    fn test_hit_test_single_edges() {
        assert_eq!(EdgeResizeController::hit_test(200.0, 2.0, W, H, M), ResizeEdge::North);
        assert_eq!(EdgeResizeController::hit_test(398.0, 150.0, W, H, M), ResizeEdge::East);
        assert_eq!(EdgeResizeController::hit_test(200.0, 298.0, W, H, M), ResizeEdge::South);
        assert_eq!(EdgeResizeController::hit_test(2.0, 150.0, W, H, M), ResizeEdge::West);
    }

    #[test]
    fn test_hit_test_interior_is_none() {
        // Sample a grid of interior points
        let mut x = M + 0.5;
        while x < W - M {
            let mut y = M + 0.5;
            while y < H - M {
                assert_eq!(
                    EdgeResizeController::hit_test(x, y, W, H, M),
                    ResizeEdge::None,
                    "({x}, {y}) should be interior"
                );
                y += 7.3;
            }
            x += 11.1;
        }
    }

    #[test]
    fn test_hit_test_outside_region_is_none() {
        assert_eq!(EdgeResizeController::hit_test(-1.0, 1.0, W, H, M), ResizeEdge::None);
        assert_eq!(EdgeResizeController::hit_test(W + 1.0, 150.0, W, H, M), ResizeEdge::None);
        assert_eq!(EdgeResizeController::hit_test(10.0, H + 3.0, W, H, M), ResizeEdge::None);
    }

    #[test]
    fn test_hit_test_degenerate_inputs_are_clamped() {
        // Negative margin behaves as zero: nothing is a band
        assert_eq!(EdgeResizeController::hit_test(0.0, 0.0, W, H, -4.0), ResizeEdge::None);
        // Negative size collapses to a point
        assert_eq!(EdgeResizeController::hit_test(0.0, 0.0, -10.0, -10.0, M), ResizeEdge::NorthEast);
    }

    #[test]
    fn test_cursor_icons() {
        assert_eq!(ResizeEdge::None.cursor_icon(), CursorIcon::Default);
        assert_eq!(ResizeEdge::NorthEast.cursor_icon(), CursorIcon::ResizeNorthEast);
        assert_eq!(ResizeEdge::West.cursor_icon(), CursorIcon::ResizeWest);
    }

    #[test]
    fn test_hover_sets_cursor_and_reverts() {
        let mut c = controller();
        c.on_hover(pos2(1.0, 150.0), vec2(W, H));
        assert_eq!(c.cursor(), CursorIcon::ResizeWest);
        c.on_hover(pos2(200.0, 150.0), vec2(W, H));
        assert_eq!(c.cursor(), CursorIcon::Default);
    }

    #[test]
    fn test_press_on_none_is_noop() {
        let mut c = controller();
        c.on_press(pos2(10.0, 10.0), WindowBounds::new(0.0, 0.0, W, H), ResizeEdge::None);
        assert!(!c.is_resizing());
    }

    #[test]
    fn test_press_while_maximized_is_noop() {
        let mut c = controller();
        c.set_maximized(true);
        c.on_press(pos2(10.0, 10.0), WindowBounds::new(0.0, 0.0, W, H), ResizeEdge::East);
        assert!(!c.is_resizing());
    }

    #[test]
    fn test_drag_without_session_returns_current() {
        let c = controller();
        let current = WindowBounds::new(1.0, 2.0, 300.0, 250.0);
        assert_eq!(c.on_drag(pos2(999.0, 999.0), current), current);
    }

    #[test]
    fn test_south_east_scenario() {
        let mut c = controller();
        let start = WindowBounds::new(100.0, 100.0, 400.0, 300.0);
        c.on_press(pos2(500.0, 400.0), start, ResizeEdge::SouthEast);

        let b = c.on_drag(pos2(450.0, 380.0), start);
        assert_eq!(b, WindowBounds::new(100.0, 100.0, 350.0, 280.0));

        let b = c.on_drag(pos2(0.0, 0.0), b);
        assert_eq!(b, WindowBounds::new(100.0, 100.0, 200.0, 200.0));
    }

    #[test]
    fn test_west_keeps_right_edge_fixed() {
        let mut c = controller();
        let start = WindowBounds::new(100.0, 100.0, 400.0, 300.0);
        c.on_press(pos2(100.0, 200.0), start, ResizeEdge::West);

        let b = c.on_drag(pos2(50.0, 200.0), start);
        assert_eq!(b, WindowBounds::new(50.0, 100.0, 450.0, 300.0));

        // Past the minimum: x pinned so the right edge stays at 500
        let b = c.on_drag(pos2(450.0, 200.0), b);
        assert_eq!(b, WindowBounds::new(300.0, 100.0, 200.0, 300.0));
        assert_eq!(b.x + b.width, 500.0);
    }

    #[test]
    fn test_north_west_corner_applies_both_axes() {
        let mut c = controller();
        let start = WindowBounds::new(100.0, 100.0, 400.0, 300.0);
        c.on_press(pos2(100.0, 100.0), start, ResizeEdge::NorthWest);

        let b = c.on_drag(pos2(80.0, 130.0), start);
        assert_eq!(b, WindowBounds::new(80.0, 130.0, 420.0, 270.0));

        let b = c.on_drag(pos2(90.0, 900.0), b);
        assert_eq!(b.height, 200.0);
        assert_eq!(b.y, 200.0);
        assert_eq!(b.width, 410.0);
    }

    #[test]
    fn test_north_east_moves_only_top() {
        let mut c = controller();
        let start = WindowBounds::new(0.0, 50.0, 300.0, 300.0);
        c.on_press(pos2(300.0, 50.0), start, ResizeEdge::NorthEast);
        let b = c.on_drag(pos2(320.0, 40.0), start);
        assert_eq!(b, WindowBounds::new(0.0, 40.0, 320.0, 310.0));
    }

    #[test]
    fn test_single_axis_edges_leave_other_axis_alone() {
        let mut c = controller();
        let start = WindowBounds::new(10.0, 10.0, 300.0, 300.0);
        c.on_press(pos2(310.0, 100.0), start, ResizeEdge::East);
        let b = c.on_drag(pos2(350.0, 500.0), start);
        assert_eq!(b, WindowBounds::new(10.0, 10.0, 340.0, 300.0));
        c.on_release();

        c.on_press(pos2(100.0, 310.0), start, ResizeEdge::South);
        let b = c.on_drag(pos2(900.0, 330.0), start);
        assert_eq!(b, WindowBounds::new(10.0, 10.0, 300.0, 320.0));
    }

    #[test]
    fn test_minimums_hold_over_any_drag_sequence() {
        let edges = [
            ResizeEdge::North,
            ResizeEdge::East,
            ResizeEdge::South,
            ResizeEdge::West,
            ResizeEdge::NorthEast,
            ResizeEdge::SouthEast,
            ResizeEdge::SouthWest,
            ResizeEdge::NorthWest,
        ];
        let points = [
            pos2(-5000.0, 3.0),
            pos2(5000.0, -5000.0),
            pos2(0.0, 0.0),
            pos2(250.0, 251.0),
            pos2(-1.0, 9000.0),
        ];
        for edge in edges {
            let mut c = controller();
            let mut bounds = WindowBounds::new(100.0, 100.0, 400.0, 300.0);
            c.on_press(pos2(300.0, 250.0), bounds, edge);
            for p in points {
                bounds = c.on_drag(p, bounds);
                assert!(bounds.width >= 200.0, "{edge:?} width {}", bounds.width);
                assert!(bounds.height >= 200.0, "{edge:?} height {}", bounds.height);
            }
        }
    }

    #[test]
    fn test_result_depends_only_on_final_position() {
        let start = WindowBounds::new(100.0, 100.0, 400.0, 300.0);

        let mut a = controller();
        a.on_press(pos2(100.0, 100.0), start, ResizeEdge::NorthWest);
        let direct = a.on_drag(pos2(60.0, 70.0), start);

        let mut b = controller();
        b.on_press(pos2(100.0, 100.0), start, ResizeEdge::NorthWest);
        let mut bounds = start;
        for p in [pos2(500.0, 500.0), pos2(-300.0, 20.0), pos2(99.0, 101.0), pos2(60.0, 70.0)] {
            bounds = b.on_drag(p, bounds);
        }

        assert_eq!(direct, bounds);
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut c = controller();
        c.on_release();
        c.on_press(pos2(0.0, 0.0), WindowBounds::new(0.0, 0.0, W, H), ResizeEdge::South);
        assert!(c.is_resizing());
        c.on_release();
        c.on_release();
        assert!(!c.is_resizing());
        assert_eq!(c.cursor(), CursorIcon::Default);
    }

    #[test]
    fn test_maximize_forces_idle() {
        let mut c = controller();
        let start = WindowBounds::new(0.0, 0.0, W, H);
        c.on_press(pos2(W, H), start, ResizeEdge::SouthEast);
        c.set_maximized(true);
        assert!(!c.is_resizing());
        assert_eq!(c.on_drag(pos2(W + 50.0, H + 50.0), start), start);
    }

    #[test]
    fn test_cursor_tracks_drag_edge_not_hover() {
        let mut c = controller();
        c.on_hover(pos2(W - 1.0, 150.0), vec2(W, H));
        c.on_press(pos2(W, 150.0), WindowBounds::new(0.0, 0.0, W, H), ResizeEdge::East);
        // Pointer leaves the band mid-drag
        c.on_hover(pos2(200.0, 150.0), vec2(W, H));
        assert_eq!(c.cursor(), CursorIcon::ResizeEast);
    }

    #[test]
    fn test_handle_applies_bounds_to_window() {
        let origin = pos2(100.0, 100.0);
        let mut window = FakeWindow::new(
            WindowBounds::new(origin.x, origin.y, W, H),
            vec2(200.0, 200.0),
        );
        let mut c = controller();
        let region = vec2(W, H);

        let press = PointerEvent::new(PointerEventKind::Pressed, pos2(W - 1.0, H - 1.0), origin);
        assert!(c.handle(&press, &mut window, region));

        let drag = PointerEvent::new(PointerEventKind::Dragged, pos2(W + 49.0, H + 19.0), origin);
        assert!(c.handle(&drag, &mut window, region));
        assert_eq!(window.bounds, WindowBounds::new(100.0, 100.0, 450.0, 320.0));

        let release = PointerEvent::new(PointerEventKind::Released, pos2(W + 49.0, H + 19.0), origin);
        assert!(c.handle(&release, &mut window, region));
        assert!(!c.is_resizing());
        assert_eq!(window.bounds, WindowBounds::new(100.0, 100.0, 450.0, 320.0));
    }

    #[test]
    fn test_handle_release_applies_final_position() {
        let origin = pos2(100.0, 100.0);
        let mut window = FakeWindow::new(
            WindowBounds::new(origin.x, origin.y, W, H),
            vec2(200.0, 200.0),
        );
        let mut c = controller();
        let region = vec2(W, H);

        let press = PointerEvent::new(PointerEventKind::Pressed, pos2(1.0, 150.0), origin);
        assert!(c.handle(&press, &mut window, region));
        // no drag event reached the controller before the button came up
        let release = PointerEvent::new(PointerEventKind::Released, pos2(-29.0, 150.0), origin);
        assert!(c.handle(&release, &mut window, region));
        assert_eq!(window.bounds, WindowBounds::new(70.0, 100.0, 430.0, 300.0));

        // a release with nothing in progress leaves the window alone
        let stray = PointerEvent::new(PointerEventKind::Released, pos2(-80.0, 150.0), origin);
        assert!(!c.handle(&stray, &mut window, region));
        assert_eq!(window.bounds, WindowBounds::new(70.0, 100.0, 430.0, 300.0));
    }

    #[test]
    fn test_slow_resize_through_egui_input() {
        let ctx = egui::Context::default();
        let mut window = FakeWindow::new(WindowBounds::new(1000.0, 500.0, W, H), vec2(200.0, 200.0));
        let mut c = controller();
        let region = vec2(W, H);

        let mut step = |window: &mut FakeWindow, time: f64, events: Vec<egui::Event>| {
            let input = egui::RawInput {
                time: Some(time),
                events,
                ..Default::default()
            };
            let origin = window.bounds.position();
            let mut event = None;
            let _ = ctx.run(input, |ctx| {
                event = ctx.input(|i| PointerEvent::from_input(i, origin));
            });
            if let Some(event) = event {
                c.handle(&event, window, region);
            }
        };
        let button = |x: f32, y: f32, pressed: bool| egui::Event::PointerButton {
            pos: pos2(x, y),
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        };

        step(&mut window, 0.0, vec![egui::Event::PointerMoved(pos2(398.0, 298.0))]);
        step(&mut window, 0.5, vec![button(398.0, 298.0, true)]);
        // each move comes after a pause, so the pointer has no velocity
        step(&mut window, 1.5, vec![egui::Event::PointerMoved(pos2(438.0, 298.0))]);
        assert_eq!(window.bounds, WindowBounds::new(1000.0, 500.0, 440.0, 300.0));
        step(&mut window, 2.5, vec![egui::Event::PointerMoved(pos2(478.0, 318.0))]);
        assert_eq!(window.bounds, WindowBounds::new(1000.0, 500.0, 480.0, 320.0));
        step(
            &mut window,
            3.5,
            vec![egui::Event::PointerMoved(pos2(500.0, 330.0)), button(500.0, 330.0, false)],
        );
        assert_eq!(window.bounds, WindowBounds::new(1000.0, 500.0, 502.0, 332.0));
        assert!(!c.is_resizing());
    }

    #[test]
    fn test_handle_ignores_interior_press_and_maximized_window() {
        let mut window = FakeWindow::new(WindowBounds::new(0.0, 0.0, W, H), vec2(200.0, 200.0));
        let mut c = controller();
        let region = vec2(W, H);

        let interior = PointerEvent::new(PointerEventKind::Pressed, pos2(200.0, 150.0), Pos2::ZERO);
        assert!(!c.handle(&interior, &mut window, region));

        window.maximized = true;
        let edge = PointerEvent::new(PointerEventKind::Pressed, pos2(1.0, 150.0), Pos2::ZERO);
        assert!(!c.handle(&edge, &mut window, region));
        assert_eq!(window.bounds, WindowBounds::new(0.0, 0.0, W, H));
    }
}
