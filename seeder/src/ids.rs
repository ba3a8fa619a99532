//! Trace and span identifier generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Length of a trace identifier in bytes.
pub const TRACE_ID_LEN: usize = 16;

/// Length of a span identifier in bytes.
pub const SPAN_ID_LEN: usize = 8;

/// Source of trace and span identifiers.
pub trait IdGenerator {
    /// Returns a new 16-byte trace identifier.
    fn new_trace_id(&mut self) -> [u8; TRACE_ID_LEN];

    /// Returns a new 8-byte span identifier.
    fn new_span_id(&mut self) -> [u8; SPAN_ID_LEN];
}

/// Generates identifiers from the thread-local OS-seeded RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn new_trace_id(&mut self) -> [u8; TRACE_ID_LEN] {
        rand::rng().random()
    }

    fn new_span_id(&mut self) -> [u8; SPAN_ID_LEN] {
        rand::rng().random()
    }
}

/// Generates a reproducible identifier sequence from a fixed seed.
#[derive(Debug, Clone)]
pub struct SeededIdGenerator {
    rng: StdRng,
}

impl SeededIdGenerator {
    /// Creates a generator seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl IdGenerator for SeededIdGenerator {
    fn new_trace_id(&mut self) -> [u8; TRACE_ID_LEN] {
        self.rng.random()
    }

    fn new_span_id(&mut self) -> [u8; SPAN_ID_LEN] {
        self.rng.random()
    }
}
