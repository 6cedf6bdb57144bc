/// Keyed occurrence counter used by every aggregate mapping.
///
/// Accumulation happens in a `HashMap`; ordering is only imposed when the
/// counter is read back through [`Counter::ranked`].
use compact_str::CompactString;
use serde::Serialize;
use std::collections::HashMap;

/// One row of a ranked counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountRow {
    pub key: CompactString,
    pub count: u64,
}

/// Mapping from a classification key to a count.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Counter {
    counts: HashMap<CompactString, u64>,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of `key`.
    pub fn increment(&mut self, key: impl Into<CompactString>) {
        *self.counts.entry(key.into()).or_insert(0) += 1;
    }

    /// Count recorded for `key`, or 0.
    pub fn get(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Largest single count, or 0 when empty.
    pub fn max(&self) -> u64 {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Rows sorted by count descending; equal counts are ordered by key ascending
    /// so the output is identical across runs.
    pub fn ranked(&self) -> Vec<CountRow> {
        let mut rows: Vec<CountRow> = self
            .counts
            .iter()
            .map(|(key, &count)| CountRow {
                key: key.clone(),
                count,
            })
            .collect();
        rows.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
        rows
    }
}
