//! Sidebar menu state: a forest of [`MenuNode`]s with single selection.
//!
//! Nodes with children are groups. Clicking a group expands or collapses it
//! and never selects it; clicking a leaf selects it. Selection lives in the
//! [`MenuTree`] rather than in the nodes so at most one node is ever selected.
//! Selecting a leaf does not expand its ancestors; use
//! [`MenuTree::expand_path_to`] for that.

mod builder;

pub use builder::{ItemConfig, MenuConfig, MenuItemBuilder, SectionConfig};

use std::collections::{HashMap, HashSet};
use std::fmt;

use thiserror::Error;

use crate::icon::SvgIcon;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    #[error("menu id `{0}` is already in use")]
    DuplicateId(String),

    /// The id is unknown, or names a group where a leaf is required.
    #[error("no menu item `{0}`")]
    NotFound(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuNode {
    id: String,
    pub title: String,
    pub icon: Option<SvgIcon>,
    pub tooltip: Option<String>,
    children: Vec<MenuNode>,
    expanded: bool,
}

impl MenuNode {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: None,
            tooltip: None,
            children: Vec::new(),
            expanded: false,
        }
    }

    pub fn with_icon(mut self, icon: SvgIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Appends a child. Id uniqueness is checked when the node joins a tree.
    pub fn with_child(mut self, child: MenuNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn children(&self) -> &[MenuNode] {
        &self.children
    }

    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }

    /// Leaves are the only nodes that can be selected.
    pub fn is_selectable(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    fn collect_ids<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(&self.id);
        for child in &self.children {
            child.collect_ids(out);
        }
    }

    fn find(&self, id: &str) -> Option<&MenuNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut MenuNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(id))
    }

    /// Ids from this node down to `id`, excluding `id` itself.
    fn ancestors_of(&self, id: &str, path: &mut Vec<String>) -> bool {
        if self.id == id {
            return true;
        }
        path.push(self.id.clone());
        if self.children.iter().any(|c| c.ancestors_of(id, path)) {
            return true;
        }
        path.pop();
        false
    }
}

type SelectionListener = Box<dyn FnMut(&str)>;

/// Callback attached to a single menu item, called with its id.
pub type MenuAction = Box<dyn FnMut(&str)>;

#[derive(Default)]
pub struct MenuTree {
    roots: Vec<MenuNode>,
    selected_id: Option<String>,
    listeners: Vec<SelectionListener>,
    actions: HashMap<String, MenuAction>,
}

impl fmt::Debug for MenuTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuTree")
            .field("roots", &self.roots)
            .field("selected_id", &self.selected_id)
            .field("listeners", &self.listeners.len())
            .field("actions", &self.actions.len())
            .finish()
    }
}

impl MenuTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roots(&self) -> &[MenuNode] {
        &self.roots
    }

    /// Total number of nodes at every depth.
    pub fn len(&self) -> usize {
        let mut ids = Vec::new();
        for root in &self.roots {
            root.collect_ids(&mut ids);
        }
        ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Depth-first, pre-order lookup.
    pub fn find_by_id(&self, id: &str) -> Option<&MenuNode> {
        self.roots.iter().find_map(|r| r.find(id))
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut MenuNode> {
        self.roots.iter_mut().find_map(|r| r.find_mut(id))
    }

    fn check_ids(&self, node: &MenuNode) -> Result<(), MenuError> {
        let mut ids = Vec::new();
        node.collect_ids(&mut ids);
        let mut seen = HashSet::with_capacity(ids.len());
        for id in ids {
            if !seen.insert(id) || self.contains(id) {
                return Err(MenuError::DuplicateId(id.to_string()));
            }
        }
        Ok(())
    }

    pub fn add_root(&mut self, node: MenuNode) -> Result<(), MenuError> {
        self.check_ids(&node)?;
        self.roots.push(node);
        Ok(())
    }

    pub fn add_child(&mut self, parent_id: &str, node: MenuNode) -> Result<(), MenuError> {
        if !self.contains(parent_id) {
            return Err(MenuError::NotFound(parent_id.to_string()));
        }
        self.check_ids(&node)?;
        let parent = self
            .find_mut(parent_id)
            .ok_or_else(|| MenuError::NotFound(parent_id.to_string()))?;
        parent.children.push(node);
        // A group can't stay selected
        if self.is_selected(parent_id) {
            self.selected_id = None;
        }
        Ok(())
    }

    /// Adds a root built from `builder`, keeping the actions set on it and
    /// its sub-items.
    pub fn add_item(&mut self, builder: MenuItemBuilder) -> Result<(), MenuError> {
        let mut actions = Vec::new();
        let node = builder.build_with_actions(&mut actions);
        self.add_root(node)?;
        self.actions.extend(actions);
        Ok(())
    }

    /// Attaches (or replaces) the action of `id`.
    pub fn set_action(
        &mut self,
        id: &str,
        action: impl FnMut(&str) + 'static,
    ) -> Result<(), MenuError> {
        if !self.contains(id) {
            return Err(MenuError::NotFound(id.to_string()));
        }
        self.actions.insert(id.to_string(), Box::new(action));
        Ok(())
    }

    pub fn has_action(&self, id: &str) -> bool {
        self.actions.contains_key(id)
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_id.as_deref() == Some(id)
    }

    pub fn selected(&self) -> Option<&MenuNode> {
        self.selected_id.as_deref().and_then(|id| self.find_by_id(id))
    }

    /// Called with the node id on every successful [`MenuTree::select`].
    pub fn add_selection_listener(&mut self, listener: impl FnMut(&str) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Selects the leaf `id` and returns the previously selected id.
    ///
    /// Listeners fire on every call, including reselection of the current id.
    pub fn select(&mut self, id: &str) -> Result<Option<String>, MenuError> {
        match self.find_by_id(id) {
            Some(node) if node.is_selectable() => {}
            _ => return Err(MenuError::NotFound(id.to_string())),
        }
        let previous = self.selected_id.replace(id.to_string());
        log::debug!("menu select `{id}` (previous {previous:?})");
        for listener in &mut self.listeners {
            listener(id);
        }
        Ok(previous)
    }

    /// What a click on the leaf `id` does: selects it, then runs its action.
    pub fn activate(&mut self, id: &str) -> Result<Option<String>, MenuError> {
        let previous = self.select(id)?;
        if let Some(action) = self.actions.get_mut(id) {
            action(id);
        }
        Ok(previous)
    }

    pub fn clear_selection(&mut self) -> Option<String> {
        self.selected_id.take()
    }

    /// Flips a group open or closed. Leaves are left alone.
    pub fn toggle(&mut self, id: &str) -> Result<(), MenuError> {
        let node = self
            .find_mut(id)
            .ok_or_else(|| MenuError::NotFound(id.to_string()))?;
        if node.is_group() {
            node.expanded = !node.expanded;
            log::debug!("menu toggle `{id}` -> expanded={}", node.expanded);
        }
        Ok(())
    }

    pub fn set_expanded(&mut self, id: &str, expanded: bool) -> Result<(), MenuError> {
        let node = self
            .find_mut(id)
            .ok_or_else(|| MenuError::NotFound(id.to_string()))?;
        if node.is_group() {
            node.expanded = expanded;
        }
        Ok(())
    }

    /// Expands every ancestor of `id` so it becomes visible.
    pub fn expand_path_to(&mut self, id: &str) -> Result<(), MenuError> {
        let mut path = Vec::new();
        let found = self.roots.iter().any(|r| {
            path.clear();
            r.ancestors_of(id, &mut path)
        });
        if !found {
            return Err(MenuError::NotFound(id.to_string()));
        }
        for ancestor in path {
            self.set_expanded(&ancestor, true)?;
        }
        Ok(())
    }
}
