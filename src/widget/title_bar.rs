use egui::{Align, Color32, Layout, RichText, Sense, UiBuilder, vec2};
use serde::{Deserialize, Serialize};

use super::corners;
use crate::config::{TitleBarConfig, color};
use crate::drag::WindowDragHandler;
use crate::icon::SvgIcon;
use crate::window::WindowHandle;

/// Which groups of title bar components are shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TitleBarStyle {
    /// Icon and title on the left, window buttons on the right.
    #[default]
    All,
    NoLeft,
    NoRight,
    NoAll,
}

impl TitleBarStyle {
    pub const fn show_left_components(self) -> bool {
        matches!(self, TitleBarStyle::All | TitleBarStyle::NoRight)
    }

    pub const fn show_right_components(self) -> bool {
        matches!(self, TitleBarStyle::All | TitleBarStyle::NoLeft)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowAction {
    Minimize,
    ToggleMaximize,
    Close,
}

impl WindowAction {
    pub fn apply(self, window: &mut impl WindowHandle) {
        log::debug!("window action {self:?}");
        match self {
            WindowAction::Minimize => window.minimize(),
            WindowAction::ToggleMaximize => window.toggle_maximized(),
            WindowAction::Close => window.close(),
        }
    }
}

/// Minimize, maximize/restore and close buttons.
#[derive(Clone, Debug)]
pub struct WindowControlButtons {
    minimize_visible: bool,
    maximize_visible: bool,
    close_visible: bool,
    size: f32,
}

impl Default for WindowControlButtons {
    fn default() -> Self {
        Self {
            minimize_visible: true,
            maximize_visible: true,
            close_visible: true,
            size: 16.0,
        }
    }
}

impl WindowControlButtons {
    pub fn set_minimize_button_visible(&mut self, visible: bool) {
        self.minimize_visible = visible;
    }

    pub fn set_maximize_button_visible(&mut self, visible: bool) {
        self.maximize_visible = visible;
    }

    pub fn set_close_button_visible(&mut self, visible: bool) {
        self.close_visible = visible;
    }

    /// Buttons in right-to-left order as laid out.
    pub fn visible_actions(&self) -> Vec<WindowAction> {
        let mut actions = Vec::with_capacity(3);
        if self.close_visible {
            actions.push(WindowAction::Close);
        }
        if self.maximize_visible {
            actions.push(WindowAction::ToggleMaximize);
        }
        if self.minimize_visible {
            actions.push(WindowAction::Minimize);
        }
        actions
    }

    /// Lays the buttons out right to left. Must be called in a
    /// right-to-left layout.
    pub fn ui(&self, ui: &mut egui::Ui, maximized: bool, text: Color32) -> Option<WindowAction> {
        let mut clicked = None;
        for action in self.visible_actions() {
            let (glyph, hover) = match action {
                WindowAction::Close => ("🗙", "Close"),
                WindowAction::ToggleMaximize if maximized => ("🗗", "Restore"),
                WindowAction::ToggleMaximize => ("🗖", "Maximize"),
                WindowAction::Minimize => ("🗕", "Minimize"),
            };
            let button = egui::Button::new(RichText::new(glyph).size(self.size).color(text))
                .frame(false)
                .min_size(vec2(self.size + 12.0, self.size + 8.0));
            if ui.add(button).on_hover_text(hover).clicked() {
                clicked = Some(action);
            }
        }
        clicked
    }
}

pub struct TitleBarResponse {
    pub action: Option<WindowAction>,
    /// The draggable middle region.
    pub drag_area: egui::Response,
}

/// Replacement for the native title bar.
///
/// The space between the title and the buttons moves the window when
/// dragged and toggles maximize on double click.
pub struct TitleBar {
    title: String,
    icon: Option<SvgIcon>,
    style: TitleBarStyle,
    icon_requested: bool,
    title_requested: bool,
    controls: WindowControlButtons,
    config: TitleBarConfig,
    drag: WindowDragHandler,
    drag_enabled: bool,
}

impl TitleBar {
    pub fn new(title: impl Into<String>) -> Self {
        Self::from_config(title, TitleBarConfig::default())
    }

    pub fn from_config(title: impl Into<String>, config: TitleBarConfig) -> Self {
        Self {
            title: title.into(),
            icon: None,
            style: config.style,
            icon_requested: true,
            title_requested: true,
            controls: WindowControlButtons::default(),
            config,
            drag: WindowDragHandler::new(),
            drag_enabled: true,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn style(&self) -> TitleBarStyle {
        self.style
    }

    pub fn set_style(&mut self, style: TitleBarStyle) {
        self.style = style;
    }

    pub fn config(&self) -> &TitleBarConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: TitleBarConfig) {
        self.style = config.style;
        self.config = config;
    }

    pub fn set_background(&mut self, rgba: [u8; 4]) {
        self.config.background_color = rgba;
    }

    pub fn set_text_color(&mut self, rgba: [u8; 4]) {
        self.config.text_color = rgba;
    }

    pub fn set_icon(&mut self, icon: Option<SvgIcon>) {
        self.icon = icon;
    }

    pub fn show_icon(&mut self, show: bool) {
        self.icon_requested = show;
    }

    pub fn show_title(&mut self, show: bool) {
        self.title_requested = show;
    }

    /// The icon shows only when one is set and the style allows the left side.
    pub fn is_icon_visible(&self) -> bool {
        self.icon_requested && self.icon.is_some() && self.style.show_left_components()
    }

    pub fn is_title_visible(&self) -> bool {
        self.title_requested && self.style.show_left_components()
    }

    pub fn controls_mut(&mut self) -> &mut WindowControlButtons {
        &mut self.controls
    }

    pub fn set_drag_enabled(&mut self, enabled: bool) {
        self.drag_enabled = enabled;
        if !enabled {
            self.drag.on_release();
        }
    }

    pub fn height(&self) -> f32 {
        self.config.height
    }

    /// Draws the bar across the top of `ui` and applies any button press or
    /// drag to `window`. `corner_radius` rounds the two top corners.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        window: &mut impl WindowHandle,
        corner_radius: u8,
    ) -> TitleBarResponse {
        let (rect, _) =
            ui.allocate_exact_size(vec2(ui.available_width(), self.config.height), Sense::hover());
        let text = color(self.config.text_color);
        ui.painter().rect_filled(
            rect,
            corners(corner_radius, true, true, false, false),
            color(self.config.background_color),
        );

        let maximized = window.is_maximized();
        let inner = rect.shrink2(vec2(8.0, 0.0));
        let mut action = None;
        let drag_area = ui
            .scope_builder(
                UiBuilder::new()
                    .max_rect(inner)
                    .layout(Layout::left_to_right(Align::Center)),
                |ui| {
                    if self.is_icon_visible()
                        && let Some(icon) = &self.icon
                    {
                        let size = vec2(self.config.icon_size, self.config.icon_size);
                        ui.add(icon.image(text, size));
                        ui.add_space(6.0);
                    }
                    if self.is_title_visible() {
                        ui.label(RichText::new(&self.title).color(text).strong());
                    }
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if self.style.show_right_components() {
                            action = self.controls.ui(ui, maximized, text);
                        }
                        let free = ui.available_rect_before_wrap();
                        ui.interact(free, ui.id().with("title_drag"), Sense::click_and_drag())
                    })
                    .inner
                },
            )
            .inner;

        if self.drag_enabled {
            self.handle_drag(&drag_area, window);
        }
        if let Some(action) = action {
            self.drag.on_release();
            action.apply(window);
        }

        TitleBarResponse { action, drag_area }
    }

    fn handle_drag(&mut self, response: &egui::Response, window: &mut impl WindowHandle) {
        if response.double_clicked() {
            self.drag.on_click(2, window);
            return;
        }
        if response.drag_started()
            && let Some(pos) = response.interact_pointer_pos()
        {
            self.drag.on_press(pos);
        }
        if response.dragged()
            && let Some(pos) = response.interact_pointer_pos()
        {
            let screen = window.bounds().position() + pos.to_vec2();
            self.drag.on_drag(screen, window);
        }
        if response.drag_stopped() {
            self.drag.on_release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::WindowBounds;
    use crate::window::testing::FakeWindow;

    #[test]
    fn test_style_components() {
        assert!(TitleBarStyle::All.show_left_components());
        assert!(TitleBarStyle::All.show_right_components());
        assert!(!TitleBarStyle::NoLeft.show_left_components());
        assert!(TitleBarStyle::NoLeft.show_right_components());
        assert!(TitleBarStyle::NoRight.show_left_components());
        assert!(!TitleBarStyle::NoRight.show_right_components());
        assert!(!TitleBarStyle::NoAll.show_left_components());
        assert!(!TitleBarStyle::NoAll.show_right_components());
    }

    #[test]
    fn test_window_actions() {
        let mut window = FakeWindow::default();
        WindowAction::ToggleMaximize.apply(&mut window);
        assert!(window.maximized);
        WindowAction::ToggleMaximize.apply(&mut window);
        assert!(!window.maximized);
        WindowAction::Minimize.apply(&mut window);
        assert!(window.minimized);
        WindowAction::Close.apply(&mut window);
        assert!(window.closed);
    }

    #[test]
    fn test_hidden_buttons() {
        let mut controls = WindowControlButtons::default();
        assert_eq!(controls.visible_actions().len(), 3);
        controls.set_maximize_button_visible(false);
        assert_eq!(
            controls.visible_actions(),
            vec![WindowAction::Close, WindowAction::Minimize]
        );
    }

    #[test]
    fn test_icon_visibility_follows_style() {
        let mut bar = TitleBar::new("Demo");
        assert!(!bar.is_icon_visible(), "no icon set yet");
        bar.set_icon(Some(SvgIcon::new("M0 0h24v24H0z")));
        assert!(bar.is_icon_visible());
        bar.set_style(TitleBarStyle::NoLeft);
        assert!(!bar.is_icon_visible());
        assert!(!bar.is_title_visible());
        bar.set_style(TitleBarStyle::All);
        bar.show_icon(false);
        assert!(!bar.is_icon_visible());
        assert!(bar.is_title_visible());
        bar.show_title(false);
        assert!(!bar.is_title_visible());
    }

    #[test]
    fn test_show_renders_without_panicking() {
        let ctx = egui::Context::default();
        let mut bar = TitleBar::new("Demo");
        let mut window = FakeWindow::new(
            WindowBounds::new(0.0, 0.0, 800.0, 600.0),
            vec2(300.0, 200.0),
        );
        let mut action = Some(WindowAction::Close);
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                action = bar.show(ui, &mut window, 10).action;
            });
        });
        assert_eq!(action, None);
        assert!(!window.closed);
    }
}
