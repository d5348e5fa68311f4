use egui::{Color32, Rect, Sense, Stroke, UiBuilder, pos2, vec2};

use super::corners;
use super::sidebar::{SidebarNavigation, SidebarResponse};
use super::title_bar::{TitleBar, WindowAction};
use crate::config::{ChromeConfig, color};
use crate::resize::{EdgeResizeController, ResizeEdge};
use crate::window::{PointerEvent, ViewportWindow, WindowHandle};

const GRIP_SIZE: f32 = 12.0;

/// Everything that happened in the chrome this frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoundWindowResponse {
    pub title_action: Option<WindowAction>,
    pub sidebar: SidebarResponse,
    /// A border or grip resize consumed the pointer.
    pub resizing: bool,
}

/// Borderless window with rounded corners.
///
/// Owns an optional [`TitleBar`] (top) and [`SidebarNavigation`] (left) and
/// lays the caller's content out in the remaining space. Resizing works from
/// every edge and from the grip in the bottom-right corner.
pub struct RoundWindow {
    config: ChromeConfig,
    title_bar: Option<TitleBar>,
    sidebar: Option<SidebarNavigation>,
    resize: EdgeResizeController,
}

impl RoundWindow {
    pub fn new(config: ChromeConfig) -> Self {
        let resize = EdgeResizeController::new(config.min_size()).with_margin(config.resize_margin);
        Self {
            config,
            title_bar: None,
            sidebar: None,
            resize,
        }
    }

    /// Native window settings for a chrome-less transparent window.
    pub fn viewport_builder(title: &str, config: &ChromeConfig) -> egui::ViewportBuilder {
        egui::ViewportBuilder::default()
            .with_title(title)
            .with_decorations(false)
            .with_transparent(true)
            .with_resizable(true)
            .with_min_inner_size(config.min_size())
    }

    pub fn config(&self) -> &ChromeConfig {
        &self.config
    }

    /// Replaces the styling; title bar and sidebar pick up their sections.
    pub fn set_config(&mut self, config: ChromeConfig) {
        self.resize.set_min_size(config.min_size());
        self.resize.set_margin(config.resize_margin);
        if let Some(title_bar) = &mut self.title_bar {
            title_bar.set_config(config.title_bar.clone());
        }
        if let Some(sidebar) = &mut self.sidebar {
            sidebar.set_config(config.sidebar.clone());
        }
        self.config = config;
    }

    pub fn set_background_color(&mut self, rgba: [u8; 4]) {
        self.config.background_color = rgba;
    }

    pub fn set_content_background_color(&mut self, rgba: [u8; 4]) {
        self.config.content_background_color = rgba;
    }

    pub fn set_title_bar(&mut self, title_bar: TitleBar) {
        self.title_bar = Some(title_bar);
    }

    pub fn title_bar_mut(&mut self) -> Option<&mut TitleBar> {
        self.title_bar.as_mut()
    }

    pub fn set_sidebar(&mut self, sidebar: SidebarNavigation) {
        self.sidebar = Some(sidebar);
    }

    pub fn sidebar(&self) -> Option<&SidebarNavigation> {
        self.sidebar.as_ref()
    }

    pub fn sidebar_mut(&mut self) -> Option<&mut SidebarNavigation> {
        self.sidebar.as_mut()
    }

    pub fn resize_controller(&self) -> &EdgeResizeController {
        &self.resize
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        add_contents: impl FnOnce(&mut egui::Ui),
    ) -> RoundWindowResponse {
        self.show_with_right_sidebar(ctx, None, |_| {}, add_contents)
    }

    /// Like [`RoundWindow::show`] with an extra panel of `right_width` on the
    /// right of the content area.
    pub fn show_with_right_sidebar(
        &mut self,
        ctx: &egui::Context,
        right_width: Option<f32>,
        add_right: impl FnOnce(&mut egui::Ui),
        add_contents: impl FnOnce(&mut egui::Ui),
    ) -> RoundWindowResponse {
        let mut window = ViewportWindow::new(ctx, self.config.min_size());
        let mut response = RoundWindowResponse::default();

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let maximized = window.is_maximized();
                let radius = if maximized { 0 } else { self.config.corner_radius };

                self.resize.set_maximized(maximized);
                let origin = window.bounds().position();
                if let Some(mut event) = ctx.input(|i| PointerEvent::from_input(i, origin)) {
                    event.local_pos -= rect.min.to_vec2();
                    response.resizing = self.resize.handle(&event, &mut window, rect.size());
                }

                ui.painter()
                    .rect_filled(rect, radius, color(self.config.background_color));
                ui.spacing_mut().item_spacing = egui::Vec2::ZERO;

                let inner = rect.shrink(self.config.padding.max(0.0));
                let has_title = self.title_bar.is_some();
                let has_sidebar = self.sidebar.is_some();
                let has_right = right_width.is_some();

                ui.scope_builder(UiBuilder::new().max_rect(inner), |ui| {
                    if let Some(title_bar) = &mut self.title_bar {
                        title_bar.set_drag_enabled(!self.resize.is_resizing());
                        response.title_action = title_bar.show(ui, &mut window, radius).action;
                    }

                    let body = ui.available_rect_before_wrap();
                    let mut content = body;

                    if let Some(sidebar) = &mut self.sidebar {
                        let width = sidebar.width().min(body.width());
                        let side = Rect::from_min_size(body.min, vec2(width, body.height()));
                        ui.painter().rect_filled(
                            side,
                            corners(radius, !has_title, false, true, false),
                            color(self.config.sidebar.background_color),
                        );
                        response.sidebar = ui
                            .scope_builder(UiBuilder::new().max_rect(side), |ui| {
                                ui.set_clip_rect(side);
                                sidebar.show(ui)
                            })
                            .inner;
                        content.min.x = side.max.x;
                    }

                    if let Some(width) = right_width {
                        let width = width.clamp(0.0, content.width());
                        let right = Rect::from_min_max(pos2(content.max.x - width, content.min.y), content.max);
                        ui.scope_builder(UiBuilder::new().max_rect(right), |ui| {
                            ui.set_clip_rect(right);
                            add_right(ui);
                        });
                        content.max.x = right.min.x;
                    }

                    ui.painter().rect_filled(
                        content,
                        corners(
                            radius,
                            !has_title && !has_sidebar,
                            !has_title && !has_right,
                            !has_sidebar,
                            !has_right,
                        ),
                        color(self.config.content_background_color),
                    );
                    ui.scope_builder(UiBuilder::new().max_rect(content), |ui| {
                        ui.set_clip_rect(content);
                        add_contents(ui);
                    });
                });

                if !maximized {
                    response.resizing |= self.resize_grip(ui, rect, &window);
                }
            });

        if self.resize.cursor() != egui::CursorIcon::Default {
            ctx.set_cursor_icon(self.resize.cursor());
        }
        response
    }

    /// Bottom-right handle that starts a south-east resize.
    fn resize_grip(&mut self, ui: &mut egui::Ui, rect: Rect, window: &impl WindowHandle) -> bool {
        let inset = (self.config.corner_radius as f32 / 3.0).max(2.0);
        let grip = Rect::from_min_size(
            rect.max - vec2(GRIP_SIZE + inset, GRIP_SIZE + inset),
            vec2(GRIP_SIZE, GRIP_SIZE),
        );
        let response = ui.interact(grip, ui.id().with("resize_grip"), Sense::drag());
        if response.hovered() || response.dragged() {
            ui.ctx()
                .set_cursor_icon(ResizeEdge::SouthEast.cursor_icon());
        }
        if response.drag_started()
            && !self.resize.is_resizing()
            && let Some(pos) = response.interact_pointer_pos()
        {
            let screen = window.bounds().position() + pos.to_vec2();
            self.resize
                .on_press(screen, window.bounds(), ResizeEdge::SouthEast);
        }

        let stroke = Stroke::new(1.5, Color32::from_gray(158));
        let painter = ui.painter();
        painter.line_segment([pos2(grip.min.x, grip.max.y), pos2(grip.max.x, grip.min.y)], stroke);
        painter.line_segment(
            [
                pos2(grip.center().x, grip.max.y),
                pos2(grip.max.x, grip.center().y),
            ],
            stroke,
        );
        self.resize.is_resizing()
    }
}
