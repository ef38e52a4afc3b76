// SPDX-License-Identifier: LGPL-3.0-only
//! Left-aligned horizontal row layout that hides items the way the Windows
//! Explorer address bar does.
//!
//! The layout owns an ordered sequence of fixed-size items plus one trailing
//! flexible space filler. A `first_visible` cursor splits the sequence into a
//! hidden prefix and a visible suffix. On every geometry pass the width of
//! the filler is compared against a reserved minimal space; when the filler
//! is squeezed below it the left-most visible item is hidden, and when slack
//! returns the item next to the boundary is shown again. Showing is deferred
//! to the next event-loop turn so a pass never re-enters itself.

use nalgebra::Vector2;

use crate::geometry::{Margins, Rect};
use crate::tasks::DeferredQueue;
use crate::update::Update;
use crate::widget::LayoutItem;

/// Height of one row of controls, used by [RowLayout::minimum_size].
const ROW_HEIGHT: f32 = 24.0;

/// Which subset of items to iterate over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    /// Every item, hidden or not.
    All,
    /// Only the visible suffix.
    Visible,
    /// Only the hidden prefix.
    Hidden,
}

/// The trailing flexible slot of the row.
enum Filler<W> {
    /// A pure stretch spacer; only its laid-out width is tracked.
    Stretch { width: f32 },
    /// A real widget filling the trailing space.
    Widget(W),
}

impl<W: LayoutItem> Filler<W> {
    fn width(&self) -> f32 {
        match self {
            Filler::Stretch { width } => *width,
            Filler::Widget(w) => w.geometry().width,
        }
    }

    fn set_geometry(&mut self, rect: Rect) {
        match self {
            Filler::Stretch { width } => *width = rect.width,
            Filler::Widget(w) => w.set_geometry(rect),
        }
    }
}

/// Callback invoked when an item flips between shown and hidden, or is
/// removed from the layout.
pub type StateChangedFn<W> = Box<dyn Fn(&W, bool)>;

/// Left-aligned row layout with overflow hiding.
///
/// `minimal_space` controls how much trailing space is reserved before items
/// start being hidden: values in `[0.0, 1.0)` are a fraction of the content
/// width, values `>= 1.0` are absolute pixels.
pub struct RowLayout<W: LayoutItem> {
    items: Vec<W>,
    filler: Filler<W>,
    first_visible: usize,
    minimal_space: f32,
    spacing: f32,
    margins: Margins,
    state_changed: Option<StateChangedFn<W>>,
    deferred_show: DeferredQueue<usize>,
}

impl<W: LayoutItem> RowLayout<W> {
    /// Create an empty layout with a pure stretch filler.
    pub fn new(minimal_space: f32) -> Self {
        Self {
            items: Vec::new(),
            filler: Filler::Stretch { width: 0.0 },
            first_visible: 0,
            minimal_space,
            spacing: 0.0,
            margins: Margins::default(),
            state_changed: None,
            deferred_show: DeferredQueue::new(),
        }
    }

    /// Set the widget used to fill empty space to the right.
    ///
    /// Passing `None` installs a pure stretch spacer (the default).
    pub fn set_space_widget(&mut self, widget: Option<W>) {
        self.filler = match widget {
            Some(w) => Filler::Widget(w),
            None => Filler::Stretch { width: 0.0 },
        };
    }

    /// The widget used to fill free space, if one was installed.
    pub fn space_widget(&self) -> Option<&W> {
        match &self.filler {
            Filler::Widget(w) => Some(w),
            Filler::Stretch { .. } => None,
        }
    }

    /// The laid-out width of the trailing filler.
    pub fn space_width(&self) -> f32 {
        self.filler.width()
    }

    /// Append an item just before the filler. Its minimum size becomes its
    /// fixed size; items are never compressed.
    pub fn add_widget(&mut self, widget: W) {
        self.items.push(widget);
    }

    /// Insert an item at a logical index.
    pub fn insert_widget(&mut self, index: usize, widget: W) {
        self.items.insert(index, widget);
        for pending in self.deferred_show.drain() {
            self.deferred_show
                .push(if pending >= index { pending + 1 } else { pending });
        }
    }

    /// Remove and return the item at `index`.
    ///
    /// Passing an out-of-range index is a programming error. The
    /// state-changed callback fires with `visible = false` for the removed
    /// item regardless of its prior state.
    pub fn take_at(&mut self, index: usize) -> W {
        if index < self.first_visible {
            self.first_visible -= 1;
        }
        let item = self.items.remove(index);
        self.first_visible = self.first_visible.min(self.items.len());
        // Queued shows track the items they were scheduled for, not their
        // old slots.
        for pending in self.deferred_show.drain() {
            if pending == index {
                continue;
            }
            self.deferred_show
                .push(if pending > index { pending - 1 } else { pending });
        }
        if let Some(cb) = &self.state_changed {
            cb(&item, false);
        }
        item
    }

    /// Register the visibility-change callback.
    pub fn set_on_state_changed(&mut self, callback: impl Fn(&W, bool) + 'static) {
        self.state_changed = Some(Box::new(callback));
    }

    /// Perform a geometry pass over `rect`, the layout rectangle without
    /// margins applied.
    ///
    /// At most one item is hidden per pass and at most one show is
    /// scheduled per pass. A hide returns [Update::LAYOUT] so the host runs
    /// another pass immediately; a show only takes effect after
    /// [RowLayout::run_deferred] on the next event-loop turn. Hide uses
    /// `free_space < 0` and show uses `free_space > 0` strictly, so a
    /// zero-slack state is stable.
    pub fn set_geometry(&mut self, rect: Rect) -> Update {
        let content = rect.shrunk(self.margins);
        let mut x = content.x;
        for item in &mut self.items {
            if !item.is_visible() {
                continue;
            }
            let min = item.min_size();
            item.set_geometry(Rect::new(x, content.y, min.x, content.height));
            x += min.x + self.spacing;
        }
        self.filler
            .set_geometry(Rect::new(x, content.y, (content.right() - x).max(0.0), content.height));

        let mut min_sp = self.minimal_space;
        if min_sp < 1.0 {
            min_sp *= content.width;
        }
        let free_space = self.filler.width() - min_sp;
        if free_space < 0.0 && self.count_visible() > 1 {
            // Hide the left-most visible item; the resulting pass hides
            // more if space is still short.
            let item = &mut self.items[self.first_visible];
            item.set_visible(false);
            self.first_visible += 1;
            if let Some(cb) = &self.state_changed {
                cb(&self.items[self.first_visible - 1], false);
            }
            return Update::LAYOUT | Update::DRAW;
        } else if free_space > 0.0 && self.count_hidden() > 0 {
            let candidate = self.first_visible - 1;
            let needed = self.items[candidate].min_size().x + self.spacing;
            if needed <= free_space {
                // Shown on the next turn; showing inline would re-enter
                // this pass.
                self.deferred_show.push(candidate);
                self.first_visible -= 1;
                if let Some(cb) = &self.state_changed {
                    cb(&self.items[candidate], true);
                }
                return Update::DRAW;
            }
        }
        Update::empty()
    }

    /// Run the deferred show tasks queued by previous geometry passes.
    ///
    /// Call once per event-loop turn, before the next geometry pass.
    /// Returns [Update::LAYOUT] when an item became visible.
    pub fn run_deferred(&mut self) -> Update {
        let mut update = Update::empty();
        for index in self.deferred_show.drain() {
            if let Some(item) = self.items.get_mut(index) {
                item.set_visible(true);
                update |= Update::LAYOUT | Update::DRAW;
            }
        }
        update
    }

    /// Whether a show is queued for the next turn.
    pub fn has_deferred(&self) -> bool {
        !self.deferred_show.is_empty()
    }

    /// Count of items in the layout, without the filler.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Count of visible items.
    pub fn count_visible(&self) -> usize {
        self.items.len() - self.first_visible
    }

    /// Count of hidden items.
    pub fn count_hidden(&self) -> usize {
        self.first_visible
    }

    /// Iterate over the items of `scope` in left-to-right stored order.
    pub fn widgets(&self, scope: Scope) -> impl Iterator<Item = &W> {
        let (start, end) = match scope {
            Scope::All => (0, self.items.len()),
            Scope::Visible => (self.first_visible, self.items.len()),
            Scope::Hidden => (0, self.first_visible),
        };
        self.items[start..end].iter()
    }

    /// Access an item by logical index.
    pub fn item(&self, index: usize) -> Option<&W> {
        self.items.get(index)
    }

    /// Minimum size of the layout: margins plus one row of controls.
    /// Width is unconstrained since every item can be hidden.
    pub fn minimum_size(&self) -> Vector2<f32> {
        Vector2::new(
            self.margins.horizontal(),
            self.margins.vertical() + ROW_HEIGHT,
        )
    }

    /// Set the reserved trailing space: `[0.0, 1.0)` is a fraction of the
    /// content width, `>= 1.0` is absolute pixels.
    pub fn set_minimal_space(&mut self, value: f32) {
        self.minimal_space = value;
    }

    /// See [RowLayout::set_minimal_space].
    pub fn minimal_space(&self) -> f32 {
        self.minimal_space
    }

    /// Spacing between neighbouring items.
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Set the spacing between neighbouring items.
    pub fn set_spacing(&mut self, spacing: f32) {
        self.spacing = spacing;
    }

    /// Contents margins of the layout.
    pub fn margins(&self) -> Margins {
        self.margins
    }

    /// Set the contents margins of the layout.
    pub fn set_margins(&mut self, margins: Margins) {
        self.margins = margins;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Item {
        width: f32,
        visible: bool,
        geometry: Rect,
        tag: usize,
    }

    impl Item {
        fn new(tag: usize, width: f32) -> Self {
            Self {
                width,
                visible: true,
                geometry: Rect::default(),
                tag,
            }
        }
    }

    impl LayoutItem for Item {
        fn min_size(&self) -> Vector2<f32> {
            Vector2::new(self.width, ROW_HEIGHT)
        }

        fn set_geometry(&mut self, rect: Rect) {
            self.geometry = rect;
        }

        fn geometry(&self) -> Rect {
            self.geometry
        }

        fn set_visible(&mut self, visible: bool) {
            self.visible = visible;
        }

        fn is_visible(&self) -> bool {
            self.visible
        }
    }

    fn layout_with_items(minimal_space: f32, widths: &[f32]) -> RowLayout<Item> {
        let mut layout = RowLayout::new(minimal_space);
        for (tag, w) in widths.iter().enumerate() {
            layout.add_widget(Item::new(tag, *w));
        }
        layout
    }

    /// Run passes at `width` until the layout stops requesting another one,
    /// draining deferred shows between turns like an event loop would.
    fn settle(layout: &mut RowLayout<Item>, width: f32) {
        let rect = Rect::new(0.0, 0.0, width, ROW_HEIGHT);
        loop {
            let mut update = layout.set_geometry(rect);
            update |= layout.run_deferred();
            if !update.contains(Update::LAYOUT) && !layout.has_deferred() {
                break;
            }
        }
    }

    #[test]
    fn test_counts_always_add_up() {
        let mut layout = layout_with_items(10.0, &[50.0, 50.0, 50.0, 50.0]);
        for width in [300.0, 170.0, 120.0, 60.0, 90.0, 250.0, 40.0, 300.0] {
            settle(&mut layout, width);
            assert_eq!(
                layout.count_hidden() + layout.count_visible(),
                layout.count()
            );
        }
    }

    #[test]
    fn test_hides_one_item_per_pass() {
        let mut layout = layout_with_items(10.0, &[50.0, 50.0, 50.0]);
        let rect = Rect::new(0.0, 0.0, 80.0, ROW_HEIGHT);
        let update = layout.set_geometry(rect);
        assert!(update.contains(Update::LAYOUT));
        assert_eq!(layout.count_hidden(), 1);
        layout.set_geometry(rect);
        assert_eq!(layout.count_hidden(), 2);
    }

    #[test]
    fn test_zero_slack_is_stable() {
        // 2 items of 50 px in 110 px with 10 px absolute minimal space:
        // filler is exactly 10 px wide, free space is exactly zero.
        let mut layout = layout_with_items(10.0, &[50.0, 50.0]);
        settle(&mut layout, 110.0);
        let hidden = layout.count_hidden();
        let update = layout.set_geometry(Rect::new(0.0, 0.0, 110.0, ROW_HEIGHT));
        assert_eq!(update, Update::empty());
        assert_eq!(layout.count_hidden(), hidden);
        assert!(!layout.has_deferred());
    }

    #[test]
    fn test_monotonic_shrink() {
        let mut layout = layout_with_items(0.1, &[40.0, 40.0, 40.0, 40.0, 40.0]);
        let mut last_hidden = 0;
        for width in [250.0, 200.0, 160.0, 120.0, 80.0, 50.0] {
            settle(&mut layout, width);
            assert!(layout.count_hidden() >= last_hidden);
            last_hidden = layout.count_hidden();
        }
    }

    #[test]
    fn test_last_item_never_hides() {
        let mut layout = layout_with_items(10.0, &[50.0, 50.0, 50.0]);
        settle(&mut layout, 20.0);
        assert_eq!(layout.count_visible(), 1);
    }

    #[test]
    fn test_show_is_deferred_to_next_turn() {
        let mut layout = layout_with_items(10.0, &[50.0, 50.0]);
        let narrow = Rect::new(0.0, 0.0, 70.0, ROW_HEIGHT);
        let wide = Rect::new(0.0, 0.0, 300.0, ROW_HEIGHT);
        layout.set_geometry(narrow);
        assert_eq!(layout.count_hidden(), 1);

        let update = layout.set_geometry(wide);
        // Cursor moved already, widget itself is still hidden.
        assert_eq!(layout.count_hidden(), 0);
        assert!(!update.contains(Update::LAYOUT));
        assert!(!layout.item(0).unwrap().is_visible());

        assert!(layout.run_deferred().contains(Update::LAYOUT));
        assert!(layout.item(0).unwrap().is_visible());
    }

    #[test]
    fn test_show_requires_room_for_item_plus_spacing() {
        let mut layout = layout_with_items(10.0, &[50.0, 50.0]);
        layout.set_spacing(4.0);
        layout.set_geometry(Rect::new(0.0, 0.0, 70.0, ROW_HEIGHT));
        assert_eq!(layout.count_hidden(), 1);
        // 50 px item + 4 px spacing needs 54 px of free space; give 50.
        // Content 114 -> filler 114 - 54 = 60, free 60 - 10 = 50: stays put.
        layout.set_geometry(Rect::new(0.0, 0.0, 114.0, ROW_HEIGHT));
        assert_eq!(layout.count_hidden(), 1);
        assert!(!layout.has_deferred());
        // Four more pixels and it fits.
        layout.set_geometry(Rect::new(0.0, 0.0, 118.0, ROW_HEIGHT));
        assert_eq!(layout.count_hidden(), 0);
        assert!(layout.has_deferred());
    }

    #[test]
    fn test_fractional_minimal_space() {
        // 0.5 of 200 px reserves 100 px: only one 60 px item fits.
        let mut layout = layout_with_items(0.5, &[60.0, 60.0]);
        settle(&mut layout, 200.0);
        assert_eq!(layout.count_hidden(), 1);
    }

    #[test]
    fn test_take_at_adjusts_cursor_and_notifies() {
        let mut layout = layout_with_items(10.0, &[50.0, 50.0, 50.0]);
        let events: Rc<RefCell<Vec<(usize, bool)>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        layout.set_on_state_changed(move |item, shown| {
            sink.borrow_mut().push((item.tag, shown));
        });

        settle(&mut layout, 80.0);
        assert_eq!(layout.count_hidden(), 2);

        // Removing inside the hidden prefix decrements the cursor.
        let removed = layout.take_at(0);
        assert_eq!(removed.tag, 0);
        assert_eq!(layout.count_hidden(), 1);
        assert_eq!(layout.count(), 2);

        // Removal is reported as hidden even for a visible item.
        let removed = layout.take_at(1);
        assert_eq!(removed.tag, 2);
        assert_eq!(events.borrow().last(), Some(&(2, false)));
    }

    #[test]
    fn test_take_at_keeps_pending_show_on_its_item() {
        let mut layout = layout_with_items(10.0, &[50.0, 50.0, 50.0]);
        settle(&mut layout, 80.0);
        assert_eq!(layout.count_hidden(), 2);

        // Wide enough to schedule showing the item at index 1.
        layout.set_geometry(Rect::new(0.0, 0.0, 175.0, ROW_HEIGHT));
        assert!(layout.has_deferred());
        assert_eq!(layout.count_hidden(), 1);

        // Removing an item to its left shifts it to index 0; the queued
        // show must follow it there.
        let removed = layout.take_at(0);
        assert_eq!(removed.tag, 0);
        layout.run_deferred();
        assert_eq!(layout.count_hidden(), 0);
        assert!(layout.widgets(Scope::All).all(Item::is_visible));
    }

    #[test]
    fn test_take_at_drops_pending_show_of_removed_item() {
        let mut layout = layout_with_items(10.0, &[50.0, 50.0, 50.0]);
        settle(&mut layout, 80.0);
        layout.set_geometry(Rect::new(0.0, 0.0, 175.0, ROW_HEIGHT));
        assert!(layout.has_deferred());

        // The scheduled item itself goes away; nothing else may be shown.
        let removed = layout.take_at(1);
        assert_eq!(removed.tag, 1);
        assert!(layout.run_deferred().is_empty());
        assert_eq!(layout.count_hidden(), 1);
        assert!(!layout.item(0).unwrap().is_visible());
    }

    #[test]
    fn test_widgets_iteration_scopes() {
        let mut layout = layout_with_items(10.0, &[50.0, 50.0, 50.0]);
        settle(&mut layout, 80.0);
        let hidden: Vec<usize> = layout.widgets(Scope::Hidden).map(|i| i.tag).collect();
        let visible: Vec<usize> = layout.widgets(Scope::Visible).map(|i| i.tag).collect();
        let all: Vec<usize> = layout.widgets(Scope::All).map(|i| i.tag).collect();
        assert_eq!(hidden, vec![0, 1]);
        assert_eq!(visible, vec![2]);
        assert_eq!(all, vec![0, 1, 2]);
    }

    #[test]
    fn test_minimum_size_uses_margins() {
        let mut layout: RowLayout<Item> = RowLayout::new(0.1);
        layout.set_margins(Margins::new(4.0, 1.0, 2.0, 3.0));
        let min = layout.minimum_size();
        assert_eq!(min.x, 6.0);
        assert_eq!(min.y, ROW_HEIGHT + 4.0);
    }

    #[test]
    fn test_space_widget_receives_remaining_width() {
        let mut layout = layout_with_items(10.0, &[50.0]);
        layout.set_space_widget(Some(Item::new(99, 0.0)));
        layout.set_geometry(Rect::new(0.0, 0.0, 200.0, ROW_HEIGHT));
        let space = layout.space_widget().unwrap();
        assert_eq!(space.geometry().x, 50.0);
        assert_eq!(space.geometry().width, 150.0);
    }
}
