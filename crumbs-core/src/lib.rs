// SPDX-License-Identifier: LGPL-3.0-only
//! Core functionality for the crumbs address bar => See the `crumbs-widgets`
//! crate for more.

/// Contains rectangle and margin types used by the layout engine.
pub mod geometry;

/// Contains input event primitives shared by the widgets.
pub mod input;

/// Contains the [layout::RowLayout] adaptive left-aligned row layout.
pub mod layout;

/// Contains the [tasks::DeferredQueue] post-layout task queue.
pub mod tasks;

/// Contains the [update::Update] flags emitted by layout and widgets.
pub mod update;

/// Contains the [widget::LayoutItem] trait implemented by layout children.
pub mod widget;
