//! Catch reporting over a date window
//!
//! A report is a single forward pass over the `CATCH_` range. Dates are
//! compared as strings, which orders correctly only because every stored
//! date was validated as zero-padded ISO-8601 on the way in.

use tracing::debug;

use crate::contract::{Contract, TxContext};
use crate::errors::Result;
use crate::keyspace::{range_for, EntityKind};
use crate::ledger::scan;
use crate::model::HarvestEvent;
use crate::policy::{require_role, Role};
use crate::rules::validation::require_iso_date;

/// Inclusive `[start, end]` date window
///
/// An inverted window is valid and matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateWindow {
    start: String,
    end: String,
}

impl DateWindow {
    /// # Errors
    ///
    /// Returns `Validation` on `startDate` or `endDate`.
    pub fn new(start: &str, end: &str) -> Result<Self> {
        require_iso_date("startDate", start)?;
        require_iso_date("endDate", end)?;
        Ok(Self {
            start: start.to_string(),
            end: end.to_string(),
        })
    }

    /// Byte-wise inclusive comparison
    ///
    /// ```
    /// use reech_core::report::DateWindow;
    ///
    /// let w = DateWindow::new("2025-08-09", "2025-08-10").unwrap();
    /// assert!(w.contains("2025-08-09"));
    /// assert!(w.contains("2025-08-10"));
    /// assert!(!w.contains("2025-08-11"));
    /// // a timestamp on the end day sorts after the bare end date
    /// assert!(!w.contains("2025-08-10T06:00:00Z"));
    /// ```
    pub fn contains(&self, date: &str) -> bool {
        self.start.as_str() <= date && date <= self.end.as_str()
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }
}

/// All catches dated inside `[start_date, end_date]`, in key order
///
/// Authorization is checked before the cursor is opened. Any store or decode
/// failure mid-scan aborts the whole report; the cursor is released on
/// every path.
///
/// # Errors
/// * `AuthorizationDenied` - Caller does not hold `authority`
/// * `Validation` - Either bound is not an ISO-8601 date
/// * `Store` - Cursor could not be opened or advanced
/// * `Serialization` - A stored catch does not decode
pub fn generate_report(
    contract: &Contract,
    ctx: &TxContext<'_>,
    start_date: &str,
    end_date: &str,
) -> Result<Vec<HarvestEvent>> {
    require_role(
        contract.policy(),
        ctx.identity,
        Role::Authority,
        "generate reports",
    )?;
    let window = DateWindow::new(start_date, end_date)?;

    let range = range_for(EntityKind::HarvestEvent);
    let mut scanned = 0usize;
    let mut matched = Vec::new();
    for entry in scan(&*ctx.stub, &range.start, &range.end)? {
        let entry = entry?;
        scanned += 1;
        let event: HarvestEvent = serde_json::from_slice(&entry.value)?;
        if window.contains(&event.date) {
            matched.push(event);
        }
    }

    debug!(scanned, matched = matched.len(), "report scan complete");
    Ok(matched)
}

/// Report payload: one JSON array, `[]` when nothing matched
///
/// # Errors
///
/// Returns `Serialization` if encoding fails.
pub fn report_payload(events: &[HarvestEvent]) -> Result<String> {
    Ok(serde_json::to_string(events)?)
}
