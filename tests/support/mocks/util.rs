// tests/support/mocks/util.rs
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

use chrono::{DateTime, Duration, Utc};
use pressroom_core::application::ports::{time::Clock, util::IdGenerator};
use pressroom_core::domain::content::ContentId;
use uuid::Uuid;

/// Clock that advances one second per call, starting at [`super::fixed_now`].
#[derive(Default)]
pub struct SteppingClock {
    ticks: AtomicI64,
}

impl SteppingClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        super::fixed_now() + Duration::seconds(tick)
    }
}

/// Hands out ids 1, 2, 3... so generated ids sort in creation order.
#[derive(Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> ContentId {
        let value = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        ContentId::new(Uuid::from_u128(u128::from(value))).expect("sequential id is never nil")
    }
}
