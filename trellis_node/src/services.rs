// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Injectable sources of randomness and time.
//!
//! Event handlers never reach for a global RNG or the system clock. They go
//! through [`EventCx`](crate::EventCx), which is backed by the [`Entropy`] and
//! [`Clock`] the application supplied.

use alloc::vec::Vec;
use core::time::Duration;

/// A source of random bits.
pub trait Entropy {
    /// The next 32 random bits.
    fn next_u32(&mut self) -> u32;

    /// A fair coin flip, taken from the lowest bit of [`Entropy::next_u32`].
    fn next_bool(&mut self) -> bool {
        self.next_u32() & 1 == 1
    }
}

/// A source of wall-clock time.
pub trait Clock {
    /// Time elapsed since the Unix epoch.
    fn now(&self) -> Duration;
}

/// Replays a fixed list of values, cycling when it runs out.
///
/// An empty list yields `0` forever.
#[derive(Clone, Debug, Default)]
pub struct SequenceEntropy {
    values: Vec<u32>,
    cursor: usize,
}

impl SequenceEntropy {
    /// Replay `values` in order.
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            cursor: 0,
        }
    }
}

impl Entropy for SequenceEntropy {
    fn next_u32(&mut self) -> u32 {
        let Some(&value) = self.values.get(self.cursor) else {
            return 0;
        };
        self.cursor = (self.cursor + 1) % self.values.len();
        value
    }
}

/// A clock that always reports the same instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedClock {
    now: Duration,
}

impl FixedClock {
    /// A clock stopped at `now` past the Unix epoch.
    pub const fn new(now: Duration) -> Self {
        Self { now }
    }

    /// Move the clock to `now`.
    pub fn set(&mut self, now: Duration) {
        self.now = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Duration {
        self.now
    }
}

#[cfg(feature = "std")]
pub use self::system::{RngEntropy, SystemClock};

#[cfg(feature = "std")]
mod system {
    use core::time::Duration;
    use std::time::{SystemTime, UNIX_EPOCH};

    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    use super::{Clock, Entropy};

    /// [`Entropy`] backed by any [`rand`] generator.
    pub struct RngEntropy<R> {
        rng: R,
    }

    impl<R> core::fmt::Debug for RngEntropy<R> {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            f.debug_struct("RngEntropy").finish_non_exhaustive()
        }
    }

    impl<R: RngCore> RngEntropy<R> {
        /// Wrap an existing generator.
        pub const fn new(rng: R) -> Self {
            Self { rng }
        }
    }

    impl RngEntropy<StdRng> {
        /// A generator seeded from the operating system.
        pub fn from_entropy() -> Self {
            Self::new(StdRng::from_entropy())
        }

        /// A reproducible generator.
        pub fn seeded(seed: u64) -> Self {
            Self::new(StdRng::seed_from_u64(seed))
        }
    }

    impl<R: RngCore> Entropy for RngEntropy<R> {
        fn next_u32(&mut self) -> u32 {
            self.rng.next_u32()
        }
    }

    /// The operating system's wall clock.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> Duration {
            // A clock set before 1970 reports the epoch itself.
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
        }
    }
}
