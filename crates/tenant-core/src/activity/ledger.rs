use parking_lot::Mutex;
use std::collections::VecDeque;
use tenant_shared::constants::DEFAULT_ACTIVITY_CAPACITY;
use tracing::{error, info, warn};

use super::types::{ActivityEntry, ActivityKind, ActivityLevel};

/// Bounded, append-only activity ledger.
///
/// Holds the most recent `capacity` entries; appending to a full ledger evicts
/// the oldest one. Every entry is also emitted through `tracing`.
pub struct ActivityLog {
    capacity: usize,
    inner: Mutex<LedgerState>,
}

struct LedgerState {
    entries: VecDeque<ActivityEntry>,
    total_recorded: u64,
}

impl ActivityLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            inner: Mutex::new(LedgerState {
                entries: VecDeque::with_capacity(capacity.min(1024)),
                total_recorded: 0,
            }),
        }
    }

    /// Append an entry
    pub fn record(&self, entry: ActivityEntry) {
        let tenant = entry.tenant_id.as_deref().unwrap_or("-");
        match entry.level {
            ActivityLevel::Info => info!(kind = entry.kind.as_str(), tenant, "{}", entry.message),
            ActivityLevel::Warn => warn!(kind = entry.kind.as_str(), tenant, "{}", entry.message),
            ActivityLevel::Error => error!(kind = entry.kind.as_str(), tenant, "{}", entry.message),
        }

        let mut state = self.inner.lock();
        if state.entries.len() == self.capacity {
            state.entries.pop_front();
        }
        state.entries.push_back(entry);
        state.total_recorded += 1;
    }

    pub fn info(&self, kind: ActivityKind, message: impl Into<String>) {
        self.record(ActivityEntry::builder(kind).message(message).build());
    }

    pub fn warn(&self, kind: ActivityKind, message: impl Into<String>) {
        self.record(ActivityEntry::builder(kind).warn().message(message).build());
    }

    pub fn error(&self, kind: ActivityKind, message: impl Into<String>) {
        self.record(ActivityEntry::builder(kind).error().message(message).build());
    }

    /// Snapshot of retained entries, oldest first
    pub fn entries(&self) -> Vec<ActivityEntry> {
        self.inner.lock().entries.iter().cloned().collect()
    }

    pub fn latest(&self) -> Option<ActivityEntry> {
        self.inner.lock().entries.back().cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries ever appended, including evicted ones
    pub fn total_recorded(&self) -> u64 {
        self.inner.lock().total_recorded
    }

    pub fn evicted(&self) -> u64 {
        let state = self.inner.lock();
        state.total_recorded - state.entries.len() as u64
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVITY_CAPACITY)
    }
}
