//! SQLite ledger substrate
//!
//! Implements the core's `StateStore` and `PrivateDataStore` over a borrowed
//! connection. Bind it to a `rusqlite::Transaction` (which derefs to
//! `Connection`) to make one invocation atomic.

use std::collections::VecDeque;

use reech_core::errors::Result;
use reech_core::ledger::{KvEntry, PrivateDataStore, StateIterator, StateStore};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::trace;

use crate::errors::ledger_error;

/// Rows fetched per cursor page
pub const DEFAULT_PAGE_SIZE: usize = 64;

/// Ledger adapter over one SQLite connection
pub struct SqliteLedger<'c> {
    conn: &'c Connection,
    page_size: usize,
}

impl<'c> SqliteLedger<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self {
            conn,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the cursor page size (minimum 1)
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Write count for a world-state key; `None` if absent
    ///
    /// # Errors
    ///
    /// Returns `Store` if the query fails.
    pub fn version_of(&self, key: &str) -> Result<Option<i64>> {
        self.conn
            .query_row(
                "SELECT version FROM world_state WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| ledger_error("version_of", e))
    }

    /// Write count for a key in a private collection; `None` if absent
    ///
    /// # Errors
    ///
    /// Returns `Store` if the query fails.
    pub fn private_version_of(&self, collection: &str, key: &str) -> Result<Option<i64>> {
        self.conn
            .query_row(
                "SELECT version FROM private_data WHERE collection = ?1 AND key = ?2",
                [collection, key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| ledger_error("private_version_of", e))
    }
}

impl StateStore for SqliteLedger<'_> {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.conn
            .query_row(
                "SELECT value FROM world_state WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| ledger_error("get_state", e))
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO world_state (key, value, version, updated_at)
                 VALUES (?1, ?2, 1, ?3)
                 ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    version = world_state.version + 1,
                    updated_at = excluded.updated_at",
                params![key, value, chrono::Utc::now().timestamp()],
            )
            .map_err(|e| ledger_error("put_state", e))?;
        trace!(key, "put_state");
        Ok(())
    }

    fn delete_state(&mut self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM world_state WHERE key = ?1", [key])
            .map_err(|e| ledger_error("delete_state", e))?;
        trace!(key, "delete_state");
        Ok(())
    }

    fn state_by_range<'a>(
        &'a self,
        start: &str,
        end: &str,
    ) -> Result<Box<dyn StateIterator + 'a>> {
        Ok(Box::new(SqliteCursor {
            conn: self.conn,
            page_size: self.page_size,
            lower: Lower::Inclusive(start.to_string()),
            end: end.to_string(),
            buffer: VecDeque::new(),
            exhausted: start >= end,
        }))
    }
}

impl PrivateDataStore for SqliteLedger<'_> {
    fn get_private_data(&self, collection: &str, key: &str) -> Result<Option<Vec<u8>>> {
        self.conn
            .query_row(
                "SELECT value FROM private_data WHERE collection = ?1 AND key = ?2",
                [collection, key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| ledger_error("get_private_data", e))
    }

    fn put_private_data(&mut self, collection: &str, key: &str, value: Vec<u8>) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO private_data (collection, key, value, version, updated_at)
                 VALUES (?1, ?2, ?3, 1, ?4)
                 ON CONFLICT(collection, key) DO UPDATE SET
                    value = excluded.value,
                    version = private_data.version + 1,
                    updated_at = excluded.updated_at",
                params![collection, key, value, chrono::Utc::now().timestamp()],
            )
            .map_err(|e| ledger_error("put_private_data", e))?;
        trace!(collection, key, "put_private_data");
        Ok(())
    }

    fn delete_private_data(&mut self, collection: &str, key: &str) -> Result<()> {
        self.conn
            .execute(
                "DELETE FROM private_data WHERE collection = ?1 AND key = ?2",
                [collection, key],
            )
            .map_err(|e| ledger_error("delete_private_data", e))?;
        trace!(collection, key, "delete_private_data");
        Ok(())
    }
}

enum Lower {
    Inclusive(String),
    Exclusive(String),
}

/// Lazy keyset-paginated cursor over `[start, end)`
///
/// Holds no statement between pages, so nothing stays open on the
/// connection while the caller processes entries.
struct SqliteCursor<'a> {
    conn: &'a Connection,
    page_size: usize,
    lower: Lower,
    end: String,
    buffer: VecDeque<KvEntry>,
    exhausted: bool,
}

impl SqliteCursor<'_> {
    fn fetch_page(&mut self) -> Result<()> {
        let (sql, bound) = match &self.lower {
            Lower::Inclusive(k) => (
                "SELECT key, value FROM world_state
                 WHERE key >= ?1 AND key < ?2 ORDER BY key LIMIT ?3",
                k,
            ),
            Lower::Exclusive(k) => (
                "SELECT key, value FROM world_state
                 WHERE key > ?1 AND key < ?2 ORDER BY key LIMIT ?3",
                k,
            ),
        };
        let mut stmt = self
            .conn
            .prepare_cached(sql)
            .map_err(|e| ledger_error("range_page", e))?;
        let rows = stmt
            .query_map(params![bound, self.end, self.page_size as i64], |row| {
                Ok(KvEntry {
                    key: row.get(0)?,
                    value: row.get(1)?,
                })
            })
            .map_err(|e| ledger_error("range_page", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| ledger_error("range_page", e))?;

        if rows.len() < self.page_size {
            self.exhausted = true;
        }
        if let Some(last) = rows.last() {
            self.lower = Lower::Exclusive(last.key.clone());
        }
        self.buffer.extend(rows);
        Ok(())
    }
}

impl StateIterator for SqliteCursor<'_> {
    fn next_entry(&mut self) -> Option<Result<KvEntry>> {
        if self.buffer.is_empty() && !self.exhausted {
            if let Err(e) = self.fetch_page() {
                self.exhausted = true;
                return Some(Err(e));
            }
        }
        self.buffer.pop_front().map(Ok)
    }

    fn close(&mut self) {
        self.exhausted = true;
        self.buffer.clear();
    }
}
