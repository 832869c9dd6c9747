// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;

use trellis_node::{Clock, Entropy, FixedClock, SequenceEntropy};
use trellis_paint::{MonospaceMeasure, TextMeasure};

/// External capabilities a stack lends to its nodes.
///
/// - `measure` sizes text during layout.
/// - `entropy` and `clock` back the [`EventCx`](trellis_node::EventCx) handed to
///   event handlers.
pub struct Services {
    /// Text measurement used by layout.
    pub measure: Box<dyn TextMeasure>,
    /// Randomness for event handlers.
    pub entropy: Box<dyn Entropy>,
    /// Wall-clock time for event handlers.
    pub clock: Box<dyn Clock>,
}

impl core::fmt::Debug for Services {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}

impl Services {
    /// Bundle the given capabilities.
    pub fn new(
        measure: impl TextMeasure + 'static,
        entropy: impl Entropy + 'static,
        clock: impl Clock + 'static,
    ) -> Self {
        Self {
            measure: Box::new(measure),
            entropy: Box::new(entropy),
            clock: Box::new(clock),
        }
    }

    /// Fully deterministic services: monospace measurement, all-zero entropy,
    /// and a clock stopped at the epoch.
    pub fn headless() -> Self {
        Self::new(
            MonospaceMeasure::default(),
            SequenceEntropy::default(),
            FixedClock::default(),
        )
    }

    /// Monospace measurement, an OS-seeded RNG, and the system clock.
    #[cfg(feature = "std")]
    pub fn system() -> Self {
        Self::new(
            MonospaceMeasure::default(),
            trellis_node::RngEntropy::from_entropy(),
            trellis_node::SystemClock,
        )
    }
}
