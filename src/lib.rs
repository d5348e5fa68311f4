//! Window chrome for borderless `egui` applications.
//!
//! [`RoundWindow`] draws a frameless window with rounded corners, a custom
//! [`TitleBar`] and a [`SidebarNavigation`] menu. The window can be resized
//! from any edge or corner through [`EdgeResizeController`] and moved by
//! dragging the title bar.
//!
//! The controllers only talk to the host window through [`WindowHandle`], so
//! their logic runs without a native window; [`ViewportWindow`] is the
//! implementation backed by the current egui viewport.

pub mod config;
pub mod drag;
pub mod icon;
pub mod menu;
pub mod resize;
pub mod widget;
pub mod window;

pub use config::{ChromeConfig, ConfigError, SidebarConfig, TitleBarConfig};
pub use drag::WindowDragHandler;
pub use icon::SvgIcon;
pub use menu::{MenuAction, MenuConfig, MenuError, MenuItemBuilder, MenuNode, MenuTree};
pub use resize::{EdgeResizeController, ResizeEdge};
pub use widget::{
    RoundWindow, RoundWindowResponse, SidebarNavigation, TitleBar, TitleBarStyle, WindowAction,
};
pub use window::{PointerEvent, PointerEventKind, ViewportWindow, WindowBounds, WindowHandle};
