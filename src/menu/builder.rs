use std::fmt;

use serde::{Deserialize, Serialize};

use super::{MenuAction, MenuNode};
use crate::icon::SvgIcon;

/// Fluent construction of a menu item and its sub-items.
#[derive(Default)]
pub struct MenuItemBuilder {
    id: String,
    title: Option<String>,
    icon: Option<SvgIcon>,
    tooltip: Option<String>,
    expanded: bool,
    action: Option<MenuAction>,
    sub_items: Vec<MenuItemBuilder>,
}

impl fmt::Debug for MenuItemBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItemBuilder")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("expanded", &self.expanded)
            .field("has_action", &self.action.is_some())
            .field("sub_items", &self.sub_items)
            .finish()
    }
}

impl MenuItemBuilder {
    pub fn create(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// A leaf at the top level, e.g. "Dashboard".
    pub fn standalone(id: impl Into<String>, title: impl Into<String>, svg_path: &str) -> Self {
        Self::create(id).with_title(title).with_svg_icon(svg_path)
    }

    /// A top-level group, shown expanded until the user collapses it.
    pub fn root(id: impl Into<String>, title: impl Into<String>, svg_path: &str) -> Self {
        Self::standalone(id, title, svg_path).with_expanded(true)
    }

    /// A sub-item, drawn without an icon.
    pub fn sub(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::create(id).with_title(title)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_svg_icon(mut self, svg_path: &str) -> Self {
        self.icon = (!svg_path.trim().is_empty()).then(|| SvgIcon::new(svg_path));
        self
    }

    pub fn with_icon(mut self, icon: SvgIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Initial expand state. Only groups keep it.
    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Runs with the item id whenever the user clicks this leaf.
    pub fn with_action(mut self, action: impl FnMut(&str) + 'static) -> Self {
        self.action = Some(Box::new(action));
        self
    }

    pub fn with_sub_item(mut self, sub_item: MenuItemBuilder) -> Self {
        self.sub_items.push(sub_item);
        self
    }

    /// The title falls back to the id when none was given. Actions are
    /// dropped; [`MenuTree::add_item`](super::MenuTree::add_item) keeps them.
    pub fn build(self) -> MenuNode {
        self.build_with_actions(&mut Vec::new())
    }

    pub(super) fn build_with_actions(self, actions: &mut Vec<(String, MenuAction)>) -> MenuNode {
        let title = self.title.unwrap_or_else(|| self.id.clone());
        if let Some(action) = self.action {
            actions.push((self.id.clone(), action));
        }
        let mut node = MenuNode::new(self.id, title);
        node.icon = self.icon;
        node.tooltip = self.tooltip;
        for sub in self.sub_items {
            node = node.with_child(sub.build_with_actions(actions));
        }
        node.expanded = self.expanded && node.is_group();
        node
    }
}

/// Sidebar layout as stored on disk.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuConfig {
    #[serde(default)]
    pub sections: Vec<SectionConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionConfig {
    pub title: String,
    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemConfig {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// SVG path data in a 24x24 box.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub expanded: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ItemConfig>,
}

impl From<&ItemConfig> for MenuItemBuilder {
    fn from(item: &ItemConfig) -> Self {
        let mut builder = MenuItemBuilder::create(&item.id);
        if let Some(title) = &item.title {
            builder = builder.with_title(title);
        }
        if let Some(icon) = &item.icon {
            builder = builder.with_svg_icon(icon);
        }
        if let Some(tooltip) = &item.tooltip {
            builder = builder.with_tooltip(tooltip);
        }
        for child in &item.children {
            builder = builder.with_sub_item(child.into());
        }
        builder.with_expanded(item.expanded)
    }
}

impl MenuConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
