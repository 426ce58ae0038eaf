//! In-memory ordered collection of expense records.
//!
//! [`RowStore`] is the single source of truth for totals and persistence.
//! Views read it through [`RowStore::records`] and learn about changes by
//! registering a listener with [`RowStore::subscribe`].
use core::fmt;

use crate::{ExpenseRecord, LedgerError, Money, ResultLedger};

/// Change emitted after every successful mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreEvent {
    Added { index: usize },
    Edited { index: usize },
    Deleted { index: usize },
    Cleared,
    Replaced { len: usize },
}

type Listener = Box<dyn FnMut(&StoreEvent)>;

#[derive(Default)]
pub struct RowStore {
    records: Vec<ExpenseRecord>,
    revision: u64,
    listeners: Vec<Listener>,
}

impl RowStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record. The amount must be numeric and non-negative.
    pub fn add(&mut self, record: ExpenseRecord) -> ResultLedger<usize> {
        record.checked_amount()?;
        self.records.push(record);
        let index = self.records.len() - 1;
        self.notify(StoreEvent::Added { index });
        Ok(index)
    }

    /// Replaces the record at `index`, re-validating its amount.
    pub fn edit(&mut self, index: usize, record: ExpenseRecord) -> ResultLedger<()> {
        self.check_index(index)?;
        record.checked_amount()?;
        self.records[index] = record;
        self.notify(StoreEvent::Edited { index });
        Ok(())
    }

    /// Removes the record at `index`, keeping the order of the others.
    pub fn delete(&mut self, index: usize) -> ResultLedger<ExpenseRecord> {
        self.check_index(index)?;
        let removed = self.records.remove(index);
        self.notify(StoreEvent::Deleted { index });
        Ok(removed)
    }

    /// Drops every record. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.records.len();
        self.records.clear();
        self.notify(StoreEvent::Cleared);
        removed
    }

    /// Swaps the whole sequence, e.g. after loading a document.
    ///
    /// Records are taken as they are: loaded amounts are not re-validated.
    pub fn replace_all(&mut self, records: Vec<ExpenseRecord>) {
        self.records = records;
        let len = self.records.len();
        self.notify(StoreEvent::Replaced { len });
    }

    /// Sum of all numeric amounts. Unparsed amounts count as zero.
    #[must_use]
    pub fn total(&self) -> Money {
        self.records
            .iter()
            .filter_map(|record| record.amount.money())
            .sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ExpenseRecord> {
        self.records.get(index)
    }

    #[must_use]
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExpenseRecord> {
        self.records.iter()
    }

    /// Counter bumped on every successful mutation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Registers a callback invoked after every successful mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn check_index(&self, index: usize) -> ResultLedger<()> {
        if index >= self.records.len() {
            return Err(LedgerError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(())
    }

    fn notify(&mut self, event: StoreEvent) {
        self.revision += 1;
        tracing::debug!(?event, revision = self.revision, "store changed");
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}

impl fmt::Debug for RowStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowStore")
            .field("records", &self.records)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl FromIterator<ExpenseRecord> for RowStore {
    fn from_iter<I: IntoIterator<Item = ExpenseRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
            ..Self::default()
        }
    }
}
