// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Node: the unit a Trellis scene is made of.
//!
//! A node is anything implementing [`Node`]: it can size itself against a pair
//! of constraint bounds, paint itself into a [`trellis_paint::Surface`] in its
//! own local coordinate space, and optionally react to pointer input.
//!
//! Nodes do not know where they are. Position and size are owned by whatever
//! container lays them out (see `trellis_stack`), which hands the node its
//! laid-out size when it paints or handles an event. A node can therefore only
//! change its *intrinsic* data (color, radius, text, …); the container derives
//! the new geometry on its next layout pass.
//!
//! ## Built-in shapes
//!
//! - [`Rectangle`]: fixed intrinsic width and height; recolors itself when tapped.
//! - [`Circle`]: intrinsic radius; only accepts taps inside the disk, and grows or
//!   shrinks by [`Circle::RADIUS_STEP`] when tapped.
//! - [`Text`]: text measured through [`trellis_paint::TextMeasure`]; shows the tap
//!   time when tapped.
//!
//! ## Injected capabilities
//!
//! Anything nondeterministic a handler needs comes in through [`EventCx`], which
//! is backed by an [`Entropy`] source and a [`Clock`]. Tests use
//! [`SequenceEntropy`] and [`FixedClock`] to assert exact post-tap state.
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::{Point, Size};
//! use trellis_node::{Circle, EventCx, FixedClock, Node, PointerEvent, SequenceEntropy};
//!
//! let mut circle = Circle::new(50.0);
//! let mut entropy = SequenceEntropy::new([1]);
//! let clock = FixedClock::new(Duration::ZERO);
//! let mut cx = EventCx::new(&mut entropy, &clock);
//!
//! let size = Size::new(100.0, 100.0);
//! let down = PointerEvent::down(Point::new(50.0, 50.0));
//! assert!(circle.handle_pointer_event(&mut cx, Point::new(50.0, 50.0), size, &down));
//! assert_eq!(circle.radius(), 60.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod circle;
mod cx;
mod event;
mod node;
mod rectangle;
mod services;
mod text;

pub use circle::Circle;
pub use cx::{EventCx, LayoutCx};
pub use event::{PointerEvent, PointerEventKind};
pub use node::{Node, clamp_size};
pub use rectangle::Rectangle;
pub use services::{Clock, Entropy, FixedClock, SequenceEntropy};
#[cfg(feature = "std")]
pub use services::{RngEntropy, SystemClock};
pub use text::Text;
