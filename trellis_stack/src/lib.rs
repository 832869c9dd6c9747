// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Stack: a retained scene of nodes stacked along one axis.
//!
//! [`StackLayout`] owns an ordered list of [`trellis_node::Node`]s and is the
//! only thing that ever assigns them a position or a size. It covers the three
//! per-frame jobs of a small retained-mode UI:
//!
//! - **Layout.** Each node is sized against the current constraint bounds and
//!   placed at `x = 0`, directly below the previous node plus a fixed spacing.
//! - **Paint.** Nodes paint in insertion order, each inside its own
//!   [`trellis_paint::SurfaceScope`] translated to the node's position, so no
//!   node can disturb the coordinate space of its siblings.
//! - **Routing.** Pointer events are hit-tested topmost-first (reverse insertion
//!   order) and handed to the first node whose bounds contain them; the first
//!   node that consumes the event ends routing.
//!
//! Layout is never stale: adding or removing a node, changing constraints, and
//! any consumed event re-run layout before returning.
//!
//! ## Where this fits
//!
//! Everything platform-shaped stays outside. A frame driver supplies constraint
//! bounds and a [`trellis_paint::Surface`] every tick and forwards pointer samples;
//! text measurement, randomness, and time come in through [`Services`].
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use trellis_node::{Circle, PointerEvent, Rectangle};
//! use trellis_paint::Recording;
//! use trellis_stack::{Services, StackLayout, StackParams};
//!
//! let params = StackParams::default()
//!     .with_max_size(Size::new(300.0, 1000.0))
//!     .with_spacing(10.0);
//! let mut stack = StackLayout::new(params, Services::headless());
//! let rect = stack.add(Rectangle::new(200.0, 100.0));
//! let circle = stack.add(Circle::new(50.0));
//!
//! assert_eq!(stack.position(rect), Some(Point::new(0.0, 0.0)));
//! assert_eq!(stack.position(circle), Some(Point::new(0.0, 110.0)));
//!
//! let mut rec = Recording::new();
//! stack.draw(&mut rec);
//! assert_eq!(rec.commands().len(), 2);
//!
//! assert!(stack.handle_pointer_event(&PointerEvent::down(Point::new(50.0, 160.0))));
//! ```
//!
//! ## API overview
//!
//! - [`StackLayout::add`] / [`StackLayout::remove`]: change the node set (re-layouts).
//! - [`StackLayout::set_constraints`] / [`StackLayout::set_spacing`] /
//!   [`StackLayout::set_params`]: change layout inputs (re-layouts on change).
//! - [`StackLayout::layout`] → [`Damage`]: recompute positions and sizes.
//! - [`StackLayout::draw`]: paint into a surface.
//! - [`StackLayout::handle_pointer_event`]: route a pointer sample, report consumption.
//! - [`StackLayout::hit_test_point`] and [`StackLayout::intersect_rect`]: read-only queries
//!   restricted by a [`QueryFilter`].
//! - [`StackLayout::take_damage`]: regions that changed since the last call.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod damage;
mod services;
mod stack;
mod types;
mod util;

pub use damage::Damage;
pub use services::Services;
pub use stack::{Hit, QueryFilter, StackLayout};
pub use types::{NodeFlags, NodeId, StackParams};
