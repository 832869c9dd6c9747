// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Paint: the drawing side of a Trellis scene.
//!
//! Nodes never rasterize anything themselves. They issue commands against a
//! [`Surface`], which a host backs with whatever renderer it owns (a GPU
//! canvas, a software rasterizer, a display list for tests).
//!
//! - [`Surface`]: primitive drawing operations plus a save/restore transform stack.
//! - [`SurfaceScope`]: RAII guard pairing [`Surface::save`] with [`Surface::restore`], so
//!   a transform applied for one node can never leak into its siblings, even when painting
//!   unwinds.
//! - [`Recording`]: an in-memory [`Surface`] that records [`DrawCommand`]s in world space.
//! - [`TextMeasure`]: the text measurement contract used for sizing, with a deterministic
//!   [`MonospaceMeasure`] implementation.
//! - [`Color`]: 8-bit sRGB color with alpha.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Rect, Vec2};
//! use trellis_paint::{Color, Recording, Surface, SurfaceScope};
//!
//! let mut rec = Recording::new();
//! {
//!     let mut scope = SurfaceScope::new(&mut rec);
//!     scope.translate(Vec2::new(0.0, 40.0));
//!     scope.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLACK);
//! }
//! assert_eq!(rec.depth(), 0);
//! assert_eq!(rec.commands()[0].world_bounds(), Rect::new(0.0, 40.0, 10.0, 50.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod color;
mod recording;
mod surface;
mod text;

pub use color::Color;
pub use recording::{DrawCommand, DrawOp, Recording};
pub use surface::{Surface, SurfaceScope};
pub use text::{MonospaceMeasure, TextMeasure, TextStyle};
