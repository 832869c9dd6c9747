// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contexts handed to nodes during layout and event handling.

use core::time::Duration;

use kurbo::Size;
use trellis_paint::TextMeasure;

use crate::{Clock, Entropy};

/// Capabilities available to [`Node::compute_size`](crate::Node::compute_size).
pub struct LayoutCx<'a> {
    measure: &'a dyn TextMeasure,
}

impl core::fmt::Debug for LayoutCx<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LayoutCx").finish_non_exhaustive()
    }
}

impl<'a> LayoutCx<'a> {
    /// A layout context measuring text with `measure`.
    pub fn new(measure: &'a dyn TextMeasure) -> Self {
        Self { measure }
    }

    /// Intrinsic size of `text` at `font_size`, wrapped at `max_width`.
    pub fn measure_text(&self, text: &str, font_size: f64, max_width: f64) -> Size {
        self.measure.measure(text, font_size, max_width)
    }
}

/// Capabilities available to [`Node::handle_pointer_event`](crate::Node::handle_pointer_event).
pub struct EventCx<'a> {
    entropy: &'a mut dyn Entropy,
    clock: &'a dyn Clock,
}

impl core::fmt::Debug for EventCx<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventCx").finish_non_exhaustive()
    }
}

impl<'a> EventCx<'a> {
    /// An event context drawing randomness from `entropy` and time from `clock`.
    pub fn new(entropy: &'a mut dyn Entropy, clock: &'a dyn Clock) -> Self {
        Self { entropy, clock }
    }

    /// The next 32 random bits.
    pub fn random_u32(&mut self) -> u32 {
        self.entropy.next_u32()
    }

    /// A fair coin flip.
    pub fn random_bool(&mut self) -> bool {
        self.entropy.next_bool()
    }

    /// Current wall-clock time since the Unix epoch.
    pub fn now(&self) -> Duration {
        self.clock.now()
    }
}
