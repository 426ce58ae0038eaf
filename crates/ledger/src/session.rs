//! Intent dispatcher: the only entry point a view needs.
//!
//! A view turns user gestures into [`Intent`]s and hands them to
//! [`Session::apply`]; the session mutates the [`RowStore`] or talks to the
//! filesystem and reports an [`Outcome`]. Failures never modify the store.
use std::path::{Path, PathBuf};

use crate::{ExpenseDraft, ExpenseRecord, ResultLedger, RowStore, persist};

/// A user request coming from the view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    AddRow(ExpenseDraft),
    EditRow(usize, ExpenseDraft),
    DeleteRow(usize),
    ClearAll,
    Save(PathBuf),
    Load(PathBuf),
}

/// What a successful intent did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Added { index: usize },
    Edited { index: usize },
    Deleted { index: usize },
    Cleared { removed: usize },
    Saved { path: PathBuf, rows: usize },
    Loaded { path: PathBuf, rows: usize },
}

#[derive(Debug, Default)]
pub struct Session {
    store: RowStore,
    path: Option<PathBuf>,
}

impl Session {
    /// Return a builder for `Session`.
    pub fn builder() -> SessionBuilder {
        SessionBuilder::default()
    }

    pub fn store(&self) -> &RowStore {
        &self.store
    }

    /// Mutable access, e.g. to register listeners.
    pub fn store_mut(&mut self) -> &mut RowStore {
        &mut self.store
    }

    /// Path of the last document saved or loaded.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn apply(&mut self, intent: Intent) -> ResultLedger<Outcome> {
        tracing::debug!(?intent, "applying intent");
        let result = self.dispatch(intent);
        match &result {
            Ok(outcome) => tracing::info!(?outcome, "intent applied"),
            Err(err) => tracing::warn!(%err, "intent rejected"),
        }
        result
    }

    fn dispatch(&mut self, intent: Intent) -> ResultLedger<Outcome> {
        match intent {
            Intent::AddRow(draft) => {
                let record = ExpenseRecord::from_draft(&draft)?;
                let index = self.store.add(record)?;
                Ok(Outcome::Added { index })
            }
            Intent::EditRow(index, draft) => {
                let record = ExpenseRecord::from_draft(&draft)?;
                self.store.edit(index, record)?;
                Ok(Outcome::Edited { index })
            }
            Intent::DeleteRow(index) => {
                self.store.delete(index)?;
                Ok(Outcome::Deleted { index })
            }
            Intent::ClearAll => {
                let removed = self.store.clear();
                Ok(Outcome::Cleared { removed })
            }
            Intent::Save(path) => {
                persist::save_to_path(&path, self.store.records())?;
                let rows = self.store.len();
                self.path = Some(path.clone());
                Ok(Outcome::Saved { path, rows })
            }
            Intent::Load(path) => {
                let records = persist::load_from_path(&path)?;
                let rows = records.len();
                self.store.replace_all(records);
                self.path = Some(path.clone());
                Ok(Outcome::Loaded { path, rows })
            }
        }
    }
}

/// The builder for `Session`
#[derive(Default)]
pub struct SessionBuilder {
    records: Vec<ExpenseRecord>,
    path: Option<PathBuf>,
}

impl SessionBuilder {
    /// Start from an existing list of records.
    pub fn records(mut self, records: Vec<ExpenseRecord>) -> SessionBuilder {
        self.records = records;
        self
    }

    /// Remember a document path (used as the default save target).
    pub fn path(mut self, path: impl Into<PathBuf>) -> SessionBuilder {
        self.path = Some(path.into());
        self
    }

    /// Construct `Session`
    pub fn build(self) -> Session {
        Session {
            store: self.records.into_iter().collect(),
            path: self.path,
        }
    }
}
