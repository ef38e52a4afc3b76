// SPDX-License-Identifier: LGPL-3.0-only
//! Contains the [BreadcrumbsAddressBar] widget: the address bar controller.
//!
//! The controller owns the current path and orchestrates the row layout and
//! the data provider. It is a two-state machine: breadcrumb view (default)
//! and edit view, with menus layered on breadcrumb view. Provider failures
//! never cross the widget boundary as errors; they surface through the
//! registered event callbacks and leave the bar at its last valid path.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use nalgebra::Vector2;

use crumbs_core::geometry::Rect;
use crumbs_core::input::{Key, MouseButton};
use crumbs_core::layout::{RowLayout, Scope};
use crumbs_core::update::Update;
use crumbs_core::widget::LayoutItem;
use crumbs_services::{DataProvider, Icon, ProviderError};

use crate::config::BarConfig;
use crate::crumb::CrumbButton;
use crate::line_edit::AddressEdit;
use crate::menu::{CrumbMenu, MenuEntry, RootMenu};
use crate::spacer::SwitchSpace;

/// Direction of the arrow glyph on the root button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrowDirection {
    /// Points at the overflow menu while crumbs are hidden.
    Left,
    /// Points at the crumb trail when everything fits.
    Right,
}

/// Which of the two views the bar currently shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    /// The crumb row (default).
    Breadcrumbs,
    /// The single-line text field.
    Edit,
}

/// Input events the host forwards into the controller.
///
/// Each user interaction the bar reacts to is one explicit variant, routed
/// through [BreadcrumbsAddressBar::handle_event].
#[derive(Clone, Debug, PartialEq)]
pub enum AddressBarEvent {
    /// Click on the trailing empty space.
    SwitchSpaceClicked(MouseButton),
    /// Click on the crumb at a logical index.
    CrumbClicked(usize),
    /// Key press inside the edit field.
    EditKey(Key),
    /// The edit field lost keyboard focus.
    EditFocusLost,
    /// A context menu opened on the edit field.
    EditContextMenuOpened,
    /// The context menu on the edit field closed.
    EditContextMenuClosed,
    /// A menu entry navigating to a path was activated.
    MenuEntrySelected(PathBuf),
    /// The host detected a device hotplug change.
    DevicesChanged,
}

/// A slot in the bar's row layout.
#[derive(Debug)]
pub enum BarItem {
    /// A path segment.
    Crumb(CrumbButton),
    /// The trailing click-to-edit filler.
    Switch(SwitchSpace),
}

impl BarItem {
    /// The crumb behind the slot, if it is one.
    pub fn as_crumb(&self) -> Option<&CrumbButton> {
        match self {
            BarItem::Crumb(crumb) => Some(crumb),
            BarItem::Switch(_) => None,
        }
    }
}

impl LayoutItem for BarItem {
    fn min_size(&self) -> Vector2<f32> {
        match self {
            BarItem::Crumb(w) => w.min_size(),
            BarItem::Switch(w) => w.min_size(),
        }
    }

    fn set_geometry(&mut self, rect: Rect) {
        match self {
            BarItem::Crumb(w) => w.set_geometry(rect),
            BarItem::Switch(w) => w.set_geometry(rect),
        }
    }

    fn geometry(&self) -> Rect {
        match self {
            BarItem::Crumb(w) => w.geometry(),
            BarItem::Switch(w) => w.geometry(),
        }
    }

    fn set_visible(&mut self, visible: bool) {
        match self {
            BarItem::Crumb(w) => w.set_visible(visible),
            BarItem::Switch(w) => w.set_visible(visible),
        }
    }

    fn is_visible(&self) -> bool {
        match self {
            BarItem::Crumb(w) => w.is_visible(),
            BarItem::Switch(w) => w.is_visible(),
        }
    }
}

/// Callback carrying a path, shared with the host.
pub type PathCallback = Arc<dyn Fn(&Path)>;

/// The breadcrumbs address bar.
pub struct BreadcrumbsAddressBar {
    provider: Box<dyn DataProvider>,
    layout: RowLayout<BarItem>,
    edit: AddressEdit,
    crumb_menu: CrumbMenu,
    root_menu: RootMenu,
    mode: ViewMode,
    path: PathBuf,
    path_icon: Option<Icon>,
    completion_enabled: bool,
    on_path_selected: Option<PathCallback>,
    on_path_error: Option<PathCallback>,
    on_listdir_error: Option<PathCallback>,
}

impl BreadcrumbsAddressBar {
    /// Create a bar over `provider` and navigate to the configured initial
    /// path (the provider's "current location" when empty).
    pub fn new(provider: Box<dyn DataProvider>, config: BarConfig) -> Self {
        let mut layout = RowLayout::new(config.minimal_space);
        layout.set_spacing(config.spacing);
        layout.set_space_widget(Some(BarItem::Switch(SwitchSpace::new())));

        let completion_enabled = match provider.init_completer() {
            Ok(()) => true,
            Err(err) => {
                log::warn!("completion not available: {err}");
                false
            }
        };

        let mut root_menu = RootMenu::default();
        match provider.get_places() {
            Ok(places) => root_menu.set_places(places),
            Err(ProviderError::NotSupported(_)) => {}
            Err(err) => log::warn!("places lookup failed: {err}"),
        }

        let mut bar = Self {
            provider,
            layout,
            edit: AddressEdit::new(),
            crumb_menu: CrumbMenu::default(),
            root_menu,
            mode: ViewMode::Breadcrumbs,
            path: PathBuf::new(),
            path_icon: None,
            completion_enabled,
            on_path_selected: None,
            on_path_error: None,
            on_listdir_error: None,
        };
        bar.refresh_devices();
        bar.set_path(config.initial_path.clone());
        bar
    }

    /// Register the callback fired after each successful navigation.
    pub fn with_on_path_selected(mut self, callback: impl Fn(&Path) + 'static) -> Self {
        self.on_path_selected = Some(Arc::new(callback));
        self
    }

    /// Register the callback fired when a path does not exist.
    pub fn with_on_path_error(mut self, callback: impl Fn(&Path) + 'static) -> Self {
        self.on_path_error = Some(Arc::new(callback));
        self
    }

    /// Register the callback fired when enumeration access is denied.
    pub fn with_on_listdir_error(mut self, callback: impl Fn(&Path) + 'static) -> Self {
        self.on_listdir_error = Some(Arc::new(callback));
        self
    }

    /// Navigate to `candidate`.
    ///
    /// The transactional core operation: the edit view is always left
    /// first, then the candidate is resolved through the provider. On
    /// failure the matching error callback fires with the attempted path
    /// and the bar keeps its previous path and crumbs. On success the crumb
    /// trail is rebuilt from scratch, root to leaf, and the path-selected
    /// callback fires with the canonical path.
    pub fn set_path(&mut self, candidate: impl AsRef<Path>) -> bool {
        let candidate = candidate.as_ref();
        self.cancel_edit();
        let path = match self.provider.check_path(candidate) {
            Ok(path) => path,
            Err(ProviderError::PermissionDenied(_)) => {
                if let Some(cb) = &self.on_listdir_error {
                    cb(candidate);
                }
                return false;
            }
            Err(err) => {
                log::debug!("rejected path {}: {err}", candidate.display());
                if let Some(cb) = &self.on_path_error {
                    cb(candidate);
                }
                return false;
            }
        };

        while self.layout.count() > 0 {
            self.layout.take_at(0);
        }
        self.path = path.clone();
        self.edit.set_text(path.display().to_string());

        // Leaf first, then each ancestor in front of it, so the stored
        // order ends up root to leaf. The walk stops at the fixed point
        // where a path has no parent left.
        self.insert_crumb(&path);
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.insert_crumb(ancestor);
        }

        self.path_icon = Some(self.provider.icon(&path));
        if let Some(cb) = &self.on_path_selected {
            cb(&path);
        }
        true
    }

    fn insert_crumb(&mut self, path: &Path) {
        let crumb = CrumbButton::new(path).with_icon(self.provider.icon(path));
        self.layout.insert_widget(0, BarItem::Crumb(crumb));
    }

    /// The current canonical path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The icon of the current path.
    pub fn path_icon(&self) -> Option<&Icon> {
        self.path_icon.as_ref()
    }

    /// The current view mode.
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// The edit field state.
    pub fn edit(&self) -> &AddressEdit {
        &self.edit
    }

    /// The row layout holding the crumbs.
    pub fn layout(&self) -> &RowLayout<BarItem> {
        &self.layout
    }

    /// Iterate over the crumbs in root-to-leaf order.
    pub fn crumbs(&self) -> impl Iterator<Item = &CrumbButton> {
        self.layout.widgets(Scope::All).filter_map(BarItem::as_crumb)
    }

    /// Route one input event through the state machine.
    pub fn handle_event(&mut self, event: AddressBarEvent) -> Update {
        match event {
            AddressBarEvent::SwitchSpaceClicked(MouseButton::Left) => {
                self.show_address_field();
                Update::DRAW | Update::FOCUS
            }
            AddressBarEvent::SwitchSpaceClicked(_) => Update::empty(),
            AddressBarEvent::CrumbClicked(index) => {
                let path = self
                    .layout
                    .item(index)
                    .and_then(BarItem::as_crumb)
                    .map(|crumb| crumb.path().to_path_buf());
                match path {
                    Some(path) => {
                        self.set_path(path);
                        Update::LAYOUT | Update::DRAW
                    }
                    None => Update::empty(),
                }
            }
            AddressBarEvent::EditKey(Key::Enter) => {
                let text = self.edit.text().to_string();
                self.set_path(text);
                Update::LAYOUT | Update::DRAW
            }
            AddressBarEvent::EditKey(Key::Escape) => {
                self.cancel_edit();
                Update::DRAW
            }
            AddressBarEvent::EditKey(Key::Other) => {
                if self.completion_enabled {
                    self.provider.set_completion_prefix(self.edit.text());
                }
                Update::empty()
            }
            AddressBarEvent::EditFocusLost => {
                self.edit.set_focus(false);
                // A context menu on the field steals focus; the revert
                // waits until the menu closes.
                if self.edit.context_menu_open() {
                    Update::empty()
                } else {
                    self.cancel_edit();
                    Update::DRAW
                }
            }
            AddressBarEvent::EditContextMenuOpened => {
                self.edit.set_context_menu_open(true);
                Update::empty()
            }
            AddressBarEvent::EditContextMenuClosed => {
                self.edit.set_context_menu_open(false);
                if self.edit.has_focus() {
                    Update::empty()
                } else {
                    self.cancel_edit();
                    Update::DRAW
                }
            }
            AddressBarEvent::MenuEntrySelected(path) => {
                self.crumb_menu.close();
                self.set_path(path);
                Update::LAYOUT | Update::DRAW
            }
            AddressBarEvent::DevicesChanged => {
                self.refresh_devices();
                Update::empty()
            }
        }
    }

    /// Hit-test a mouse press in breadcrumb view and route it.
    pub fn mouse_press(&mut self, point: Vector2<f32>, button: MouseButton) -> Update {
        if self.mode != ViewMode::Breadcrumbs {
            return Update::empty();
        }
        if let Some(BarItem::Switch(space)) = self.layout.space_widget() {
            if space.hit(point) {
                return self.handle_event(AddressBarEvent::SwitchSpaceClicked(button));
            }
        }
        if button == MouseButton::Left {
            for index in 0..self.layout.count() {
                let hit = self
                    .layout
                    .item(index)
                    .is_some_and(|item| item.is_visible() && item.geometry().contains(point));
                if hit {
                    return self.handle_event(AddressBarEvent::CrumbClicked(index));
                }
            }
        }
        Update::empty()
    }

    fn show_address_field(&mut self) {
        self.edit.set_text(self.path.display().to_string());
        self.edit.show_and_focus();
        self.mode = ViewMode::Edit;
    }

    /// Leave edit view, discarding any edits.
    pub fn cancel_edit(&mut self) {
        self.edit.set_text(self.path.display().to_string());
        self.edit.hide();
        self.mode = ViewMode::Breadcrumbs;
    }

    /// Replace the edit field's text, as the host does while the user
    /// types, and feed the completion model.
    pub fn edit_typed(&mut self, text: impl Into<String>) {
        self.edit.set_text(text);
        if self.completion_enabled {
            self.provider.set_completion_prefix(self.edit.text());
        }
    }

    /// The provider's current completion suggestions.
    pub fn completions(&self) -> Vec<String> {
        self.provider.completions()
    }

    /// Open the drop-down of the crumb at `index`, enumerating its
    /// children now. Entries are discarded again on close.
    pub fn open_crumb_menu(&mut self, index: usize) -> &[MenuEntry] {
        let path = self
            .layout
            .item(index)
            .and_then(BarItem::as_crumb)
            .map(|crumb| crumb.path().to_path_buf());
        let Some(path) = path else {
            return self.crumb_menu.entries();
        };
        let entries = match self.provider.list_dir(&path) {
            Ok(entries) => entries.into_iter().map(MenuEntry::from).collect(),
            Err(ProviderError::PermissionDenied(_)) => {
                if let Some(cb) = &self.on_listdir_error {
                    cb(&path);
                }
                Vec::new()
            }
            Err(err) => {
                log::warn!("listing {} failed: {err}", path.display());
                Vec::new()
            }
        };
        self.crumb_menu.open(entries);
        self.crumb_menu.entries()
    }

    /// Close the crumb drop-down, discarding its entries.
    pub fn close_crumb_menu(&mut self) {
        self.crumb_menu.close();
    }

    /// The crumb drop-down state.
    pub fn crumb_menu(&self) -> &CrumbMenu {
        &self.crumb_menu
    }

    /// Whether the overflow indicator should be shown.
    pub fn hidden_indicator_visible(&self) -> bool {
        self.layout.count_hidden() > 0
    }

    /// Arrow direction of the root button, flipping with the hidden count.
    pub fn root_arrow(&self) -> ArrowDirection {
        if self.layout.count_hidden() > 0 {
            ArrowDirection::Left
        } else {
            ArrowDirection::Right
        }
    }

    /// Entries for the overflow menu: one per hidden crumb, the crumb
    /// closest to the visible boundary first.
    pub fn hidden_menu_entries(&self) -> Vec<MenuEntry> {
        let mut entries: Vec<MenuEntry> = self
            .layout
            .widgets(Scope::Hidden)
            .filter_map(BarItem::as_crumb)
            .map(|crumb| MenuEntry {
                label: crumb.label().to_string(),
                path: crumb.path().to_path_buf(),
                icon: crumb.icon().cloned(),
            })
            .collect();
        entries.reverse();
        entries
    }

    /// The root menu with its places and devices sections.
    pub fn root_menu(&self) -> &RootMenu {
        &self.root_menu
    }

    /// Rebuild the devices section, the entry point for hotplug
    /// notifications forwarded by the host.
    pub fn refresh_devices(&mut self) {
        match self.provider.get_devices() {
            Ok(devices) => self
                .root_menu
                .set_devices(devices.into_iter().map(MenuEntry::from).collect()),
            Err(ProviderError::NotSupported(_)) => {}
            Err(err) => log::warn!("device enumeration failed: {err}"),
        }
    }

    /// Feed the result of the host's browse-for-folder dialog.
    pub fn browse_result(&mut self, chosen: Option<PathBuf>) -> bool {
        match chosen {
            Some(path) => self.set_path(path),
            None => false,
        }
    }

    /// Run one geometry pass over the bar's rectangle.
    pub fn set_geometry(&mut self, rect: Rect) -> Update {
        self.layout.set_geometry(rect)
    }

    /// Run deferred layout work queued by previous passes. Call once per
    /// event-loop turn.
    pub fn run_deferred(&mut self) -> Update {
        self.layout.run_deferred()
    }

    /// Lay out at `rect` until the hide/show negotiation settles, draining
    /// deferred work between passes the way an event loop would.
    pub fn relayout(&mut self, rect: Rect) {
        loop {
            let mut update = self.layout.set_geometry(rect);
            update |= self.layout.run_deferred();
            if !update.contains(Update::LAYOUT) && !self.layout.has_deferred() {
                break;
            }
        }
    }
}
