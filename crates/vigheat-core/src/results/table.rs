// crates/vigheat-core/src/results/table.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VigError};
use crate::session::accuracy::Accuracy;

/// One scored case.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub text_len: usize,
    pub key_len: usize,
    pub key: String,
    pub ciphertext: String,
    pub accuracy: Accuracy,
}

/// Accuracy per (text length, key length). Keeps insertion order for export;
/// each pair may be recorded only once.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultTable {
    entries: Vec<ResultEntry>,
    index: BTreeMap<(usize, usize), usize>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from entries, rejecting duplicate pairs.
    pub fn from_entries<I: IntoIterator<Item = ResultEntry>>(entries: I) -> Result<Self> {
        let mut t = Self::new();
        for e in entries {
            t.insert(e)?;
        }
        Ok(t)
    }

    pub fn insert(&mut self, e: ResultEntry) -> Result<()> {
        let pair = (e.text_len, e.key_len);
        if self.index.contains_key(&pair) {
            return Err(VigError::Validation(format!(
                "duplicate result for text_len={} key_len={}",
                pair.0, pair.1
            )));
        }
        self.index.insert(pair, self.entries.len());
        self.entries.push(e);
        Ok(())
    }

    pub fn get(&self, text_len: usize, key_len: usize) -> Option<Accuracy> {
        self.index
            .get(&(text_len, key_len))
            .map(|&i| self.entries[i].accuracy)
    }

    /// Entries in the order they were recorded.
    pub fn entries(&self) -> &[ResultEntry] {
        &self.entries
    }

    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.index.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct text lengths, ascending.
    pub fn text_lengths(&self) -> Vec<usize> {
        let mut v: Vec<usize> = self.index.keys().map(|&(t, _)| t).collect();
        v.dedup();
        v
    }

    /// Distinct key lengths, ascending.
    pub fn key_lengths(&self) -> Vec<usize> {
        let mut v: Vec<usize> = self.index.keys().map(|&(_, k)| k).collect();
        v.sort_unstable();
        v.dedup();
        v
    }
}
