// crates/infra/src/cache.rs
use std::sync::Mutex;
use std::time::{Duration, Instant};

use absence_days_ports::trip_source::{TripRowDto, TripSource};
use absence_days_shared_kernel::Result;
use tracing::debug;

/// Cached rows plus the instant they stop being trusted.
#[derive(Debug, Clone)]
struct CacheSlot {
    rows: Vec<TripRowDto>,
    expires_at: Instant,
}

/// Decorator bounding how often the wrapped source is re-fetched.
///
/// The slot carries an explicit expiry instant, and [`invalidate`] drops
/// it ahead of time. The cache is owned by whoever wires the source
/// together; nothing here is module state.
///
/// [`invalidate`]: CachedTripSource::invalidate
pub struct CachedTripSource<S> {
    inner: S,
    ttl: Duration,
    slot: Mutex<Option<CacheSlot>>,
}

impl<S: TripSource> CachedTripSource<S> {
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            slot: Mutex::new(None),
        }
    }

    /// Drops any cached rows; the next fetch goes to the wrapped source.
    pub fn invalidate(&self) {
        *self.slot.lock().expect("cache lock never poisoned") = None;
    }
}

impl<S: TripSource> TripSource for CachedTripSource<S> {
    fn fetch_rows(&self) -> Result<Vec<TripRowDto>> {
        let mut slot = self.slot.lock().expect("cache lock never poisoned");
        if let Some(cached) = slot.as_ref()
            && Instant::now() < cached.expires_at
        {
            return Ok(cached.rows.clone());
        }

        // Errors are not cached; the next call retries the source.
        let rows = self.inner.fetch_rows()?;
        debug!(rows = rows.len(), ttl_secs = self.ttl.as_secs(), "refreshed trip row cache");
        *slot = Some(CacheSlot {
            rows: rows.clone(),
            expires_at: Instant::now() + self.ttl,
        });
        Ok(rows)
    }
}
