use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use roster_types::{Clock, Record, RecordDraft, RecordId, SystemClock};

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::traits::RecordStore;

/// In-memory, HashMap-based record store.
///
/// Records and the id generator live behind a single `Mutex`, so every
/// operation (reads included) runs with exclusive access to the whole store.
/// Records are cloned on the way in and out. Data is lost when the store is
/// dropped.
pub struct InMemoryRecordStore {
    inner: Mutex<Inner>,
    clock: Arc<dyn Clock>,
    config: StoreConfig,
}

struct Inner {
    records: HashMap<RecordId, Record>,
    rng: StdRng,
}

impl Inner {
    fn new(config: &StoreConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            records: HashMap::new(),
            rng,
        }
    }

    /// Pick an identifier in `1..=id_space` that no live record uses.
    ///
    /// Draws at random up to `max_id_attempts` times, then falls back to a
    /// linear probe from a random starting point so a free id is always
    /// found while one exists.
    fn allocate_id(&mut self, config: &StoreConfig) -> StoreResult<RecordId> {
        let capacity = config.id_space;
        if self.records.len() as u64 >= capacity {
            return Err(StoreError::IdSpaceExhausted { capacity });
        }

        for _ in 0..config.max_id_attempts {
            let candidate = RecordId::new(self.rng.gen_range(1..=capacity));
            if !self.records.contains_key(&candidate) {
                return Ok(candidate);
            }
        }

        let start = self.rng.gen_range(0..capacity);
        tracing::debug!(capacity, start, "random id draws exhausted, probing");
        (0..capacity)
            .map(|offset| RecordId::new((start + offset) % capacity + 1))
            .find(|id| !self.records.contains_key(id))
            .ok_or(StoreError::IdSpaceExhausted { capacity })
    }
}

impl InMemoryRecordStore {
    /// Create a new empty store with default settings and the system clock.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create a new empty store with explicit settings.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            inner: Mutex::new(Inner::new(&config)),
            clock: Arc::new(SystemClock),
            config,
        }
    }

    /// Replace the time source.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// The settings this store was built with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Remove all records.
    pub fn clear(&self) -> StoreResult<()> {
        let mut inner = self.lock()?;
        let removed = inner.records.len();
        inner.records.clear();
        tracing::debug!(removed, "cleared record store");
        Ok(())
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn list(&self) -> StoreResult<Vec<Record>> {
        let inner = self.lock()?;
        let mut records: Vec<Record> = inner.records.values().cloned().collect();
        records.sort_by_key(|r| r.id);
        Ok(records)
    }

    fn get(&self, id: RecordId) -> StoreResult<Record> {
        let inner = self.lock()?;
        inner
            .records
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn create(&self, draft: RecordDraft) -> StoreResult<Record> {
        let mut inner = self.lock()?;
        let id = inner.allocate_id(&self.config)?;
        let record = Record::from_draft(id, draft, self.clock.now());
        inner.records.insert(id, record.clone());
        tracing::debug!(%id, username = %record.username, "created record");
        Ok(record)
    }

    fn update(&self, id: RecordId, draft: RecordDraft) -> StoreResult<Record> {
        let mut inner = self.lock()?;
        let record = inner
            .records
            .get_mut(&id)
            .ok_or(StoreError::NotFound(id))?;
        let now = self.clock.now_after(record.updated_at);
        record.apply(draft, now);
        tracing::debug!(%id, status = %record.status, "updated record");
        Ok(record.clone())
    }

    fn delete(&self, id: RecordId) -> StoreResult<()> {
        let mut inner = self.lock()?;
        match inner.records.remove(&id) {
            Some(_) => {
                tracing::debug!(%id, "deleted record");
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.lock()?.records.len())
    }
}

impl std::fmt::Debug for InMemoryRecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len().ok();
        f.debug_struct("InMemoryRecordStore")
            .field("record_count", &count)
            .field("id_space", &self.config.id_space)
            .finish()
    }
}
