use chrono::{DateTime, Local};
use egui::{Id, RichText, ViewportClass, ViewportId};
use round_window::{
    ChromeConfig, ConfigError, MenuError, MenuItemBuilder, MenuNode, RoundWindow,
    SidebarNavigation, SvgIcon, TitleBar, WindowAction,
};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

const APP_ICON: &str = "M4 8h4V4H4v4zm6 12h4v-4h-4v4zm-6 0h4v-4H4v4zm0-6h4v-4H4v4zm6 0h4v-4h-4v4zm6-10v4h4V4h-4zm-6 4h4V4h-4v4zm6 6h4v-4h-4v4zm0 6h4v-4h-4v4z";
const DASHBOARD_ICON: &str = "M3 13h8V3H3v10zm0 8h8v-6H3v6zm10 0h8V11h-8v10zm0-18v6h8V3h-8z";
const USERS_ICON: &str = "M12 12c2.21 0 4-1.79 4-4s-1.79-4-4-4-4 1.79-4 4 1.79 4 4 4zm0 2c-2.67 0-8 1.34-8 4v2h16v-2c0-2.66-5.33-4-8-4z";
const SETTINGS_ICON: &str = "M19.14 12.94c.04-.3.06-.61.06-.94 0-.32-.02-.64-.07-.94l2.03-1.58a.49.49 0 0 0 .12-.61l-1.92-3.32a.488.488 0 0 0-.59-.22l-2.39.96c-.5-.38-1.03-.7-1.62-.94l-.36-2.54a.484.484 0 0 0-.48-.41h-3.84c-.24 0-.43.17-.47.41l-.36 2.54c-.59.24-1.13.57-1.62.94l-2.39-.96c-.22-.08-.47 0-.59.22L2.74 8.87c-.12.21-.08.47.12.61l2.03 1.58c-.05.3-.09.63-.09.94s.02.64.07.94l-2.03 1.58a.49.49 0 0 0-.12.61l1.92 3.32c.12.22.37.29.59.22l2.39-.96c.5.38 1.03.7 1.62.94l.36 2.54c.05.24.24.41.48.41h3.84c.24 0 .44-.17.47-.41l.36-2.54c.59-.24 1.13-.56 1.62-.94l2.39.96c.22.08.47 0 .59-.22l1.92-3.32c.12-.22.07-.47-.12-.61l-2.01-1.58zM12 15.6c-1.98 0-3.6-1.62-3.6-3.6s1.62-3.6 3.6-3.6 3.6 1.62 3.6 3.6-1.62 3.6-3.6 3.6z";
const HELP_ICON: &str = "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm1 17h-2v-2h2v2zm2.07-7.75l-.9.92C13.45 12.9 13 13.5 13 15h-2v-.5c0-1.1.45-2.1 1.17-2.83l1.24-1.26c.37-.36.59-.86.59-1.41 0-1.1-.9-2-2-2s-2 .9-2 2H8c0-2.21 1.79-4 4-4s4 1.79 4 4c0 .88-.36 1.68-.93 2.25z";

/// How many visits the navigation history keeps.
const HISTORY_LEN: usize = 10;

/// Work requested from inside the content area that needs the whole app.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PendingAction {
    OpenMenuLayout,
    OpenTheme,
    SaveTheme,
}

/// Where a menu item asked to go; drained after each frame.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Route {
    Page(String),
    Help,
}

type Routes = Rc<RefCell<Vec<Route>>>;

fn page_action(routes: &Routes) -> impl FnMut(&str) + 'static {
    let routes = Rc::clone(routes);
    move |id| routes.borrow_mut().push(Route::Page(id.to_string()))
}

fn help_action(routes: &Routes) -> impl FnMut(&str) + 'static {
    let routes = Rc::clone(routes);
    move |id| {
        let mut routes = routes.borrow_mut();
        routes.push(Route::Page(id.to_string()));
        routes.push(Route::Help);
    }
}

/// Gives every leaf without an action a page route, for layouts loaded
/// from disk.
fn route_leaves(sidebar: &mut SidebarNavigation, routes: &Routes) {
    fn leaves<'a>(nodes: &'a [MenuNode], out: &mut Vec<&'a str>) {
        for node in nodes {
            if node.is_selectable() {
                out.push(node.id());
            }
            leaves(node.children(), out);
        }
    }
    let mut ids = Vec::new();
    leaves(sidebar.tree().roots(), &mut ids);
    let ids: Vec<String> = ids
        .into_iter()
        .filter(|id| !sidebar.tree().has_action(id))
        .map(str::to_owned)
        .collect();
    for id in ids {
        if let Err(err) = sidebar.set_item_action(&id, page_action(routes)) {
            log::warn!("no route for `{id}`: {err}");
        }
    }
}

struct Visit {
    at: DateTime<Local>,
    id: String,
}

/// State drawn inside the content area, kept apart from the chrome so both
/// can be borrowed in the same frame.
#[derive(Default)]
struct Pages {
    current: Option<String>,
    history: Vec<Visit>,
    /// Error/status message to display
    status_message: Option<(String, std::time::Instant)>,
    test_dialog_open: bool,
    pending: Option<PendingAction>,
}

impl Pages {
    fn visit(&mut self, id: &str) {
        self.current = Some(id.to_string());
        self.history.push(Visit {
            at: Local::now(),
            id: id.to_string(),
        });
        if self.history.len() > HISTORY_LEN {
            let excess = self.history.len() - HISTORY_LEN;
            self.history.drain(..excess);
        }
    }

    /// Set a status message that will auto-clear after a few seconds
    fn set_status(&mut self, msg: String) {
        self.status_message = Some((msg, std::time::Instant::now()));
    }

    fn content_ui(&mut self, ui: &mut egui::Ui, title: &str) {
        egui::Frame::NONE.inner_margin(20.0).show(ui, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui
                        .button("Open menu layout…")
                        .on_hover_text("Replace the sidebar with a menu from a JSON file")
                        .clicked()
                    {
                        self.pending = Some(PendingAction::OpenMenuLayout);
                        ui.close_kind(egui::UiKind::Menu);
                    }
                    ui.separator();
                    if ui
                        .button("Open theme…")
                        .on_hover_text("Load colors and sizes from a JSON file")
                        .clicked()
                    {
                        self.pending = Some(PendingAction::OpenTheme);
                        ui.close_kind(egui::UiKind::Menu);
                    }
                    if ui
                        .button("Save theme…")
                        .on_hover_text("Write the current colors and sizes to a JSON file")
                        .clicked()
                    {
                        self.pending = Some(PendingAction::SaveTheme);
                        ui.close_kind(egui::UiKind::Menu);
                    }
                });
            });

            // Show status message if recent
            if let Some((msg, time)) = &self.status_message {
                if time.elapsed().as_secs() < 3 {
                    ui.label(msg);
                } else {
                    self.status_message = None;
                }
            }

            ui.add_space(10.0);
            ui.heading(title);
            ui.add_space(4.0);
            ui.label(page_description(self.current.as_deref()));
            ui.add_space(12.0);
            if ui.button("Test Button").clicked() {
                self.test_dialog_open = true;
            }

            if !self.history.is_empty() {
                ui.add_space(20.0);
                ui.label(RichText::new("Recent navigation").strong());
                for visit in self.history.iter().rev() {
                    ui.label(format!("{}  {}", visit.at.format("%H:%M:%S"), visit.id));
                }
            }
        });

        if self.test_dialog_open {
            let mut ok = false;
            let modal = egui::Modal::new(Id::new("test_dialog")).show(ui.ctx(), |ui| {
                ui.heading("Message");
                ui.label("Button clicked!");
                ui.add_space(8.0);
                ok = ui.button("OK").clicked();
            });
            if ok || modal.should_close() {
                self.test_dialog_open = false;
            }
        }
    }
}

fn page_description(id: Option<&str>) -> &'static str {
    match id {
        Some("dashboard") => "Overview of recent activity.",
        Some("users") => "Manage the people who can sign in.",
        Some("general") => "Language, startup and window behavior.",
        Some("security") => "Passwords and active sessions.",
        Some("help") => "Guides and contact details open in a separate window.",
        Some(_) => "This page has no content yet.",
        None => "Pick an item from the sidebar.",
    }
}

fn help_contents(ui: &mut egui::Ui) {
    egui::Frame::NONE.inner_margin(16.0).show(ui, |ui| {
        ui.heading("Help & Support");
        ui.add_space(8.0);
        ui.label("Drag the title bar to move a window and double-click it to maximize.");
        ui.label("Drag any border or the corner grip to resize.");
        ui.label("Groups in the sidebar expand and collapse when clicked.");
    });
}

fn demo_sidebar(config: &ChromeConfig, routes: &Routes) -> Result<SidebarNavigation, MenuError> {
    let mut sidebar = SidebarNavigation::new(config.sidebar.clone());
    sidebar
        .add_section("Navigation")
        .add_menu_item(
            MenuItemBuilder::standalone("dashboard", "Dashboard", DASHBOARD_ICON)
                .with_tooltip("Overview")
                .with_action(page_action(routes)),
        )?
        .add_menu_item(
            MenuItemBuilder::standalone("users", "Users", USERS_ICON)
                .with_action(page_action(routes)),
        )?
        .add_section("Settings")
        .add_menu_item(
            MenuItemBuilder::create("settings")
                .with_title("Settings")
                .with_svg_icon(SETTINGS_ICON)
                .with_sub_item(
                    MenuItemBuilder::sub("general", "General").with_action(page_action(routes)),
                )
                .with_sub_item(
                    MenuItemBuilder::sub("security", "Security").with_action(page_action(routes)),
                ),
        )?
        .add_menu_item(
            MenuItemBuilder::standalone("help", "Help", HELP_ICON).with_action(help_action(routes)),
        )?;
    log_selections(&mut sidebar);
    Ok(sidebar)
}

fn log_selections(sidebar: &mut SidebarNavigation) {
    sidebar.add_selection_listener(|id| log::info!("menu item selected: {id}"));
}

fn help_window(config: &ChromeConfig) -> RoundWindow {
    let mut help = RoundWindow::new(config.clone());
    let mut title_bar = TitleBar::from_config("Help & Support", config.title_bar.clone());
    title_bar.set_icon(Some(SvgIcon::new(HELP_ICON)));
    title_bar.controls_mut().set_minimize_button_visible(false);
    title_bar.controls_mut().set_maximize_button_visible(false);
    help.set_title_bar(title_bar);
    help
}

pub(crate) struct DemoApp {
    chrome: RoundWindow,
    help: RoundWindow,
    help_open: bool,
    pages: Pages,
    routes: Routes,
}

impl Default for DemoApp {
    fn default() -> Self {
        let config = Self::chrome_config();
        let mut chrome = RoundWindow::new(config.clone());
        let mut title_bar = TitleBar::from_config("Round Window Demo", config.title_bar.clone());
        title_bar.set_icon(Some(SvgIcon::new(APP_ICON)));
        chrome.set_title_bar(title_bar);
        let routes = Routes::default();
        match demo_sidebar(&config, &routes) {
            Ok(sidebar) => chrome.set_sidebar(sidebar),
            Err(err) => log::warn!("demo menu rejected: {err}"),
        }

        let mut app = Self {
            chrome,
            help: help_window(&config),
            help_open: false,
            pages: Pages::default(),
            routes,
        };
        app.navigate_to("dashboard");
        app
    }
}

impl DemoApp {
    pub(crate) fn chrome_config() -> ChromeConfig {
        let mut config = ChromeConfig::default().with_min_size(480.0, 320.0);
        config.title_bar.background_color = [52, 152, 219, 255];
        config.title_bar.text_color = [255, 255, 255, 255];
        config
    }

    /// Acts as if `id` was clicked in the sidebar.
    fn navigate_to(&mut self, id: &str) {
        if let Some(sidebar) = self.chrome.sidebar_mut() {
            sidebar.activate_menu_item_by_id(id);
        }
        self.follow_routes();
    }

    fn follow_routes(&mut self) {
        let routes: Vec<Route> = self.routes.borrow_mut().drain(..).collect();
        for route in routes {
            match route {
                Route::Page(id) => self.pages.visit(&id),
                Route::Help => self.help_open = true,
            }
        }
    }

    fn current_title(&self) -> String {
        self.pages
            .current
            .as_deref()
            .and_then(|id| self.chrome.sidebar()?.tree().find_by_id(id))
            .map(|node| node.title.clone())
            .unwrap_or_else(|| "Welcome".to_owned())
    }

    fn report(&mut self, context: &str, err: ConfigError) {
        log::warn!("{context}: {err}");
        self.pages.set_status(format!("{context}: {err}"));
    }

    fn load_menu_layout(&mut self, path: PathBuf) {
        let config = self.chrome.config().sidebar.clone();
        match SidebarNavigation::load(&path, config) {
            Ok(mut sidebar) => {
                route_leaves(&mut sidebar, &self.routes);
                log_selections(&mut sidebar);
                self.chrome.set_sidebar(sidebar);
                self.pages.current = None;
                self.pages
                    .set_status(format!("Loaded menu from {}", path.display()));
            }
            Err(err) => self.report("Menu load failed", err),
        }
    }

    fn load_theme(&mut self, path: PathBuf) {
        match ChromeConfig::load(&path) {
            Ok(config) => {
                self.help.set_config(config.clone());
                self.chrome.set_config(config);
                self.pages
                    .set_status(format!("Loaded theme from {}", path.display()));
            }
            Err(err) => self.report("Theme load failed", err),
        }
    }

    fn save_theme(&mut self, path: PathBuf) {
        match self.chrome.config().save(&path) {
            Ok(()) => self
                .pages
                .set_status(format!("Saved theme to {}", path.display())),
            Err(err) => self.report("Theme save failed", err),
        }
    }

    fn run_pending(&mut self, action: PendingAction) {
        match action {
            PendingAction::OpenMenuLayout => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Menu layout", &["json"])
                    .pick_file()
                {
                    self.load_menu_layout(path);
                }
            }
            PendingAction::OpenTheme => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Theme", &["json"])
                    .pick_file()
                {
                    self.load_theme(path);
                }
            }
            PendingAction::SaveTheme => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Theme", &["json"])
                    .set_file_name("theme.json")
                    .save_file()
                {
                    self.save_theme(path);
                }
            }
        }
    }

    fn help_ui(&mut self, ctx: &egui::Context) {
        if !self.help_open {
            return;
        }
        let builder = RoundWindow::viewport_builder("Help & Support", self.help.config())
            .with_inner_size([420.0, 300.0]);
        let help = &mut self.help;
        let mut open = true;
        ctx.show_viewport_immediate(
            ViewportId::from_hash_of("help_viewport"),
            builder,
            |ctx, class| {
                if class == ViewportClass::Embedded {
                    egui::Window::new("Help & Support")
                        .collapsible(false)
                        .resizable(false)
                        .open(&mut open)
                        .show(ctx, help_contents);
                    return;
                }
                let response = help.show(ctx, help_contents);
                if response.title_action == Some(WindowAction::Close)
                    || ctx.input(|i| i.viewport().close_requested())
                {
                    open = false;
                }
            },
        );
        self.help_open = open;
    }

    fn ui(&mut self, ctx: &egui::Context) {
        let title = self.current_title();
        let response = self
            .chrome
            .show(ctx, |ui| self.pages.content_ui(ui, &title));

        if let Some(action) = response.title_action {
            log::debug!("title bar action {action:?}");
        }
        if let Some(id) = &response.sidebar.toggled {
            log::debug!("menu group `{id}` toggled");
        }
        self.follow_routes();
        if let Some(action) = self.pages.pending.take() {
            self.run_pending(action);
        }
        self.help_ui(ctx);
    }
}

impl eframe::App for DemoApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        // Outside the rounded corners stays see-through
        egui::Rgba::TRANSPARENT.to_array()
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
