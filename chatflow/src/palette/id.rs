//! Node id generation.
//!
//! Ids are opaque strings derived from wall-clock milliseconds. A generator never hands
//! out the same id twice: within one millisecond it steps forward by one.

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of fresh node ids.
pub trait NodeIdGenerator {
    fn next_id(&mut self) -> String;
}

type Clock = Box<dyn FnMut() -> u64>;

/// Epoch-millisecond ids, strictly increasing per generator.
pub struct TimeIdGenerator {
    clock: Clock,
    last: Option<u64>,
}

impl Default for TimeIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeIdGenerator {
    /// Uses the system clock.
    pub fn new() -> Self {
        Self::with_clock(now_millis)
    }

    /// Uses `clock` for the millisecond reading (tests, replay).
    pub fn with_clock(clock: impl FnMut() -> u64 + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            last: None,
        }
    }
}

impl NodeIdGenerator for TimeIdGenerator {
    fn next_id(&mut self) -> String {
        let now = (self.clock)();
        let id = match self.last {
            Some(last) if now <= last => last + 1,
            _ => now,
        };
        self.last = Some(id);
        id.to_string()
    }
}

/// Milliseconds since the Unix epoch; 0 if the clock is before it.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
