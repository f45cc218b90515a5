//! Insertion-ordered in-memory collection.
//!
//! The generic primitive behind every named collection. Operations are
//! individually atomic (one lock acquisition each) and enumeration order is
//! insertion order, which is what gives the join engine its stable
//! first-match tie-break.

use std::sync::RwLock;

use crate::error::{StoreError, StoreResult};

/// A named document collection.
#[derive(Debug)]
pub struct Collection<T> {
    name: &'static str,
    rows: RwLock<Vec<T>>,
}

impl<T: Clone> Collection<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            rows: RwLock::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Append a document.
    pub fn insert_one(&self, doc: T) -> StoreResult<()> {
        self.write()?.push(doc);
        Ok(())
    }

    /// Append `doc` unless a document matching `exists` is already present.
    ///
    /// The membership check and the append happen under one write lock, so
    /// concurrent calls with the same key insert at most once. Returns whether
    /// an insert happened.
    pub fn insert_one_if_absent<P>(&self, exists: P, doc: T) -> StoreResult<bool>
    where
        P: Fn(&T) -> bool,
    {
        let mut rows = self.write()?;
        if rows.iter().any(|row| exists(row)) {
            return Ok(false);
        }
        rows.push(doc);
        Ok(true)
    }

    /// First document matching the predicate, in insertion order.
    pub fn find_one<P>(&self, pred: P) -> StoreResult<Option<T>>
    where
        P: Fn(&T) -> bool,
    {
        Ok(self.read()?.iter().find(|row| pred(row)).cloned())
    }

    /// All documents matching the predicate, in insertion order.
    pub fn find<P>(&self, pred: P) -> StoreResult<Vec<T>>
    where
        P: Fn(&T) -> bool,
    {
        Ok(self
            .read()?
            .iter()
            .filter(|row| pred(row))
            .cloned()
            .collect())
    }

    /// Apply `update` to the first document matching `pred`.
    ///
    /// Returns whether a document was updated.
    pub fn update_one<P, U>(&self, pred: P, update: U) -> StoreResult<bool>
    where
        P: Fn(&T) -> bool,
        U: FnOnce(&mut T),
    {
        let mut rows = self.write()?;
        match rows.iter_mut().find(|row| pred(&**row)) {
            Some(row) => {
                update(row);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove every document matching the predicate; returns how many went.
    pub fn remove_where<P>(&self, pred: P) -> StoreResult<usize>
    where
        P: Fn(&T) -> bool,
    {
        let mut rows = self.write()?;
        let before = rows.len();
        rows.retain(|row| !pred(row));
        Ok(before - rows.len())
    }

    pub fn count(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, Vec<T>>> {
        self.rows
            .read()
            .map_err(|_| StoreError::unavailable(format!("collection '{}' lock poisoned", self.name)))
    }

    fn write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, Vec<T>>> {
        self.rows
            .write()
            .map_err(|_| StoreError::unavailable(format!("collection '{}' lock poisoned", self.name)))
    }
}
