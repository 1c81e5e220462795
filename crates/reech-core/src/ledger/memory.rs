use std::cell::Cell;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::ops::Bound;

use super::{KvEntry, PrivateDataStore, StateIterator, StateStore};
use crate::errors::{ReechError, Result};

/// In-memory ledger substrate
///
/// BTreeMap-backed so range scans come back in byte order like a real
/// substrate. Single-threaded: cursor bookkeeping uses `Cell`. Tracks
/// open cursors and committed writes so tests can assert release and
/// "nothing was written".
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    state: BTreeMap<String, Vec<u8>>,
    private: BTreeMap<String, BTreeMap<String, Vec<u8>>>,
    writes: usize,
    open_cursors: Cell<usize>,
    poisoned_key: Option<String>,
    fail_writes: bool,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful put/delete calls across both partitions
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Cursors opened and not yet closed
    pub fn open_cursors(&self) -> usize {
        self.open_cursors.get()
    }

    /// Keys of the world state, in order
    pub fn state_keys(&self) -> Vec<&str> {
        self.state.keys().map(String::as_str).collect()
    }

    /// Keys held in one private collection, in order
    pub fn private_keys(&self, collection: &str) -> Vec<&str> {
        self.private
            .get(collection)
            .map(|c| c.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Make any cursor that reaches `key` yield a store failure
    pub fn poison_scan_at(&mut self, key: impl Into<String>) {
        self.poisoned_key = Some(key.into());
    }

    /// Make every subsequent write fail
    pub fn fail_writes(&mut self) {
        self.fail_writes = true;
    }

    fn check_writable(&self, op: &str) -> Result<()> {
        if self.fail_writes {
            return Err(ReechError::store(op, "writes disabled"));
        }
        Ok(())
    }
}

impl StateStore for MemoryLedger {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.state.get(key).cloned())
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<()> {
        self.check_writable("put_state")?;
        self.state.insert(key.to_string(), value);
        self.writes += 1;
        Ok(())
    }

    fn delete_state(&mut self, key: &str) -> Result<()> {
        self.check_writable("delete_state")?;
        self.state.remove(key);
        self.writes += 1;
        Ok(())
    }

    fn state_by_range<'a>(
        &'a self,
        start: &str,
        end: &str,
    ) -> Result<Box<dyn StateIterator + 'a>> {
        // BTreeMap::range panics on an inverted range
        let range = (start < end).then(|| {
            self.state
                .range::<str, _>((Bound::Included(start), Bound::Excluded(end)))
        });
        self.open_cursors.set(self.open_cursors.get() + 1);
        Ok(Box::new(MemoryCursor {
            range,
            open_cursors: &self.open_cursors,
            poisoned_key: self.poisoned_key.as_deref(),
            closed: false,
        }))
    }
}

impl PrivateDataStore for MemoryLedger {
    fn get_private_data(&self, collection: &str, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self
            .private
            .get(collection)
            .and_then(|c| c.get(key))
            .cloned())
    }

    fn put_private_data(&mut self, collection: &str, key: &str, value: Vec<u8>) -> Result<()> {
        self.check_writable("put_private_data")?;
        self.private
            .entry(collection.to_string())
            .or_default()
            .insert(key.to_string(), value);
        self.writes += 1;
        Ok(())
    }

    fn delete_private_data(&mut self, collection: &str, key: &str) -> Result<()> {
        self.check_writable("delete_private_data")?;
        if let Some(c) = self.private.get_mut(collection) {
            c.remove(key);
        }
        self.writes += 1;
        Ok(())
    }
}

struct MemoryCursor<'a> {
    range: Option<btree_map::Range<'a, String, Vec<u8>>>,
    open_cursors: &'a Cell<usize>,
    poisoned_key: Option<&'a str>,
    closed: bool,
}

impl StateIterator for MemoryCursor<'_> {
    fn next_entry(&mut self) -> Option<Result<KvEntry>> {
        if self.closed {
            return None;
        }
        let (key, value) = self.range.as_mut()?.next()?;
        if self.poisoned_key == Some(key.as_str()) {
            return Some(Err(ReechError::store(
                "range_next",
                format!("cursor failed at {}", key),
            )));
        }
        Some(Ok(KvEntry {
            key: key.clone(),
            value: value.clone(),
        }))
    }

    fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            self.open_cursors.set(self.open_cursors.get() - 1);
        }
    }
}
