//! Ledger substrate interfaces
//!
//! The core never owns state. It reads and writes through these traits,
//! which a host binds to its committed, versioned key-value store for the
//! duration of one transaction. `MemoryLedger` is the in-process fake.

pub mod memory;

pub use memory::MemoryLedger;

use crate::errors::Result;

/// One `(key, value)` pair yielded by a range scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KvEntry {
    pub key: String,
    pub value: Vec<u8>,
}

/// Lazy, forward-only, finite cursor over a key range
///
/// Implementations must tolerate `close` being called more than once and
/// must yield nothing after it.
pub trait StateIterator {
    /// Next entry in key order, `None` once exhausted
    fn next_entry(&mut self) -> Option<Result<KvEntry>>;

    /// Release the cursor's substrate resources
    fn close(&mut self);
}

/// World state shared by all ledger members
pub trait StateStore {
    /// # Errors
    ///
    /// Returns `Store` if the substrate read fails.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// # Errors
    ///
    /// Returns `Store` if the substrate write fails.
    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<()>;

    /// # Errors
    ///
    /// Returns `Store` if the substrate delete fails.
    fn delete_state(&mut self, key: &str) -> Result<()>;

    /// Open a cursor over `[start, end)`
    ///
    /// # Errors
    ///
    /// Returns `Store` if the cursor cannot be opened.
    fn state_by_range<'a>(
        &'a self,
        start: &str,
        end: &str,
    ) -> Result<Box<dyn StateIterator + 'a>>;
}

/// Restricted collections visible to a subset of members
pub trait PrivateDataStore {
    /// # Errors
    ///
    /// Returns `Store` if the collection read fails.
    fn get_private_data(&self, collection: &str, key: &str) -> Result<Option<Vec<u8>>>;

    /// # Errors
    ///
    /// Returns `Store` if the collection write fails.
    fn put_private_data(&mut self, collection: &str, key: &str, value: Vec<u8>) -> Result<()>;

    /// # Errors
    ///
    /// Returns `Store` if the collection delete fails.
    fn delete_private_data(&mut self, collection: &str, key: &str) -> Result<()>;
}

/// Everything an invocation can touch
pub trait LedgerStub: StateStore + PrivateDataStore {}

impl<T: StateStore + PrivateDataStore + ?Sized> LedgerStub for T {}

/// Owns a cursor and closes it when dropped
///
/// Wrapping the cursor here is what makes release unconditional: an early
/// `?` return mid-scan drops the guard like any other exit path.
pub struct ScanGuard<'a> {
    inner: Box<dyn StateIterator + 'a>,
}

impl<'a> ScanGuard<'a> {
    pub fn new(inner: Box<dyn StateIterator + 'a>) -> Self {
        Self { inner }
    }
}

impl Iterator for ScanGuard<'_> {
    type Item = Result<KvEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next_entry()
    }
}

impl Drop for ScanGuard<'_> {
    fn drop(&mut self) {
        self.inner.close();
    }
}

/// Open a guarded scan over `[start, end)`
///
/// # Errors
///
/// Returns `Store` if the substrate cannot open the cursor.
pub fn scan<'a, S>(store: &'a S, start: &str, end: &str) -> Result<ScanGuard<'a>>
where
    S: StateStore + ?Sized,
{
    Ok(ScanGuard::new(store.state_by_range(start, end)?))
}
