use std::path::Path;

use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, pos2, vec2};

use super::faded;
use crate::config::{ConfigError, SidebarConfig, color, load_menu_config};
use crate::menu::{MenuConfig, MenuError, MenuItemBuilder, MenuNode, MenuTree};

const ROW_HEIGHT: f32 = 34.0;
const INDENT: f32 = 15.0;
const ICON_SIZE: f32 = 18.0;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SidebarEntry {
    Section(String),
    /// Id of a top-level menu item.
    Item(String),
}

/// What the user did in the sidebar this frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SidebarResponse {
    pub selected: Option<String>,
    pub toggled: Option<String>,
}

/// Collapsible navigation menu with section headings.
#[derive(Debug)]
pub struct SidebarNavigation {
    tree: MenuTree,
    entries: Vec<SidebarEntry>,
    config: SidebarConfig,
}

impl Default for SidebarNavigation {
    fn default() -> Self {
        Self::new(SidebarConfig::default())
    }
}

impl SidebarNavigation {
    pub fn new(config: SidebarConfig) -> Self {
        Self {
            tree: MenuTree::new(),
            entries: Vec::new(),
            config,
        }
    }

    pub fn from_config(menu: &MenuConfig, config: SidebarConfig) -> Result<Self, MenuError> {
        let mut sidebar = Self::new(config);
        for section in &menu.sections {
            sidebar.add_section(&section.title);
            for item in &section.items {
                sidebar.add_menu_item(item.into())?;
            }
        }
        Ok(sidebar)
    }

    pub fn load(path: &Path, config: SidebarConfig) -> Result<Self, ConfigError> {
        let menu = load_menu_config(path)?;
        Ok(Self::from_config(&menu, config)?)
    }

    pub fn width(&self) -> f32 {
        self.config.width
    }

    pub fn set_width(&mut self, width: f32) -> &mut Self {
        self.config.width = width.max(0.0);
        self
    }

    pub fn set_config(&mut self, config: SidebarConfig) {
        self.config = config;
    }

    pub fn set_background(&mut self, rgba: [u8; 4]) -> &mut Self {
        self.config.background_color = rgba;
        self
    }

    pub fn add_section(&mut self, title: impl Into<String>) -> &mut Self {
        self.entries.push(SidebarEntry::Section(title.into()));
        self
    }

    pub fn add_menu_item(&mut self, builder: MenuItemBuilder) -> Result<&mut Self, MenuError> {
        let id = builder.id().to_string();
        self.tree.add_item(builder)?;
        self.entries.push(SidebarEntry::Item(id));
        Ok(self)
    }

    pub fn add_selection_listener(&mut self, listener: impl FnMut(&str) + 'static) -> &mut Self {
        self.tree.add_selection_listener(listener);
        self
    }

    pub fn entries(&self) -> &[SidebarEntry] {
        &self.entries
    }

    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    /// Attaches an action to an item that is already in the menu.
    pub fn set_item_action(
        &mut self,
        id: &str,
        action: impl FnMut(&str) + 'static,
    ) -> Result<(), MenuError> {
        self.tree.set_action(id, action)
    }

    pub fn set_expanded(&mut self, id: &str, expanded: bool) -> Result<(), MenuError> {
        self.tree.set_expanded(id, expanded)
    }

    /// Opens every group above `id`.
    pub fn expand_path_to(&mut self, id: &str) -> Result<(), MenuError> {
        self.tree.expand_path_to(id)
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.tree.selected_id()
    }

    /// Same as clicking the leaf `id`: selects it and runs its action.
    pub fn activate_menu_item_by_id(&mut self, id: &str) -> bool {
        match self.tree.activate(id) {
            Ok(_) => true,
            Err(err) => {
                log::warn!("activate_menu_item_by_id: {err}");
                false
            }
        }
    }

    /// Returns `false` when `id` is unknown or is a group. Item actions
    /// don't run.
    pub fn select_menu_item_by_id(&mut self, id: &str) -> bool {
        match self.tree.select(id) {
            Ok(_) => true,
            Err(err) => {
                log::warn!("select_menu_item_by_id: {err}");
                false
            }
        }
    }

    /// A click on `id`: groups expand or collapse, leaves get selected.
    pub fn click(&mut self, id: &str) -> SidebarResponse {
        let mut response = SidebarResponse::default();
        let Some(node) = self.tree.find_by_id(id) else {
            return response;
        };
        if node.is_group() {
            if self.tree.toggle(id).is_ok() {
                response.toggled = Some(id.to_string());
            }
        } else if self.tree.activate(id).is_ok() {
            response.selected = Some(id.to_string());
        }
        response
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> SidebarResponse {
        let rect = ui.max_rect();
        ui.painter()
            .rect_filled(rect, 0.0, color(self.config.background_color));

        let mut clicked = None;
        egui::ScrollArea::vertical()
            .id_salt("sidebar_navigation_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(10.0);
                for entry in &self.entries {
                    match entry {
                        SidebarEntry::Section(title) => {
                            ui.add_space(10.0);
                            ui.horizontal(|ui| {
                                ui.add_space(10.0);
                                ui.label(
                                    egui::RichText::new(title)
                                        .small()
                                        .strong()
                                        .color(faded(color(self.config.text_color), 0.7)),
                                );
                            });
                            ui.add_space(5.0);
                        }
                        SidebarEntry::Item(id) => {
                            if let Some(node) = self.tree.find_by_id(id) {
                                self.node_ui(ui, node, 0, &mut clicked);
                            }
                        }
                    }
                }
            });

        match clicked {
            Some(id) => self.click(&id),
            None => SidebarResponse::default(),
        }
    }

    fn node_ui(&self, ui: &mut egui::Ui, node: &MenuNode, depth: usize, clicked: &mut Option<String>) {
        let (row, mut response) =
            ui.allocate_exact_size(vec2(ui.available_width(), ROW_HEIGHT), Sense::click());
        let row = row.shrink2(vec2(10.0, 1.0));
        let text = color(self.config.text_color);
        let accent = color(self.config.selected_color);

        let selected = self.tree.is_selected(node.id());
        let fg = if selected { Color32::WHITE } else { text };
        if selected {
            ui.painter().rect_filled(row, 6.0, accent);
        } else if response.hovered() {
            ui.painter().rect_filled(row, 6.0, faded(accent, 0.15));
        }

        let mut x = row.min.x + 5.0 + depth as f32 * INDENT;
        if let Some(icon) = &node.icon {
            let icon_rect = Rect::from_min_size(
                pos2(x, row.center().y - ICON_SIZE / 2.0),
                vec2(ICON_SIZE, ICON_SIZE),
            );
            icon.image(fg, icon_rect.size()).paint_at(ui, icon_rect);
            x += ICON_SIZE + 10.0;
        }
        ui.painter().text(
            pos2(x, row.center().y),
            Align2::LEFT_CENTER,
            &node.title,
            FontId::proportional(14.0),
            fg,
        );

        if node.is_group() {
            let tip = pos2(row.max.x - 12.0, row.center().y);
            ui.painter()
                .add(Shape::convex_polygon(arrow(tip, node.is_expanded()), fg, Stroke::NONE));
        }

        if let Some(tooltip) = &node.tooltip {
            response = response.on_hover_text(tooltip);
        }
        if response.clicked() {
            *clicked = Some(node.id().to_string());
        }

        if node.is_expanded() {
            for child in node.children() {
                self.node_ui(ui, child, depth + 1, clicked);
            }
        }
    }
}

/// Expand indicator centered on `center`: pointing right when collapsed,
/// down when expanded.
fn arrow(center: Pos2, expanded: bool) -> Vec<Pos2> {
    let h = 4.0;
    if expanded {
        vec![
            pos2(center.x - h, center.y - h / 2.0),
            pos2(center.x + h, center.y - h / 2.0),
            pos2(center.x, center.y + h / 2.0),
        ]
    } else {
        vec![
            pos2(center.x - h / 2.0, center.y - h),
            pos2(center.x + h / 2.0, center.y),
            pos2(center.x - h / 2.0, center.y + h),
        ]
    }
}
