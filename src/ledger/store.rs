//! Transaction Store
//!
//! Ordered collection of unspent, positive-point transactions. Extraction
//! always yields the oldest transaction; timestamp ties break by insertion
//! order so spend allocation is deterministic across runs.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::domain::{LedgerError, Transaction};

/// A transaction held by the store, together with its ordering key.
///
/// Entries compare by `(timestamp, seq)` ascending. `seq` is the insertion
/// sequence number; it is preserved when a partially consumed transaction is
/// put back, so the remainder keeps its place among equal-timestamp entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredTransaction {
    pub transaction: Transaction,
    seq: u64,
}

impl Ord for StoredTransaction {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.transaction.timestamp, self.seq).cmp(&(other.transaction.timestamp, other.seq))
    }
}

impl PartialOrd for StoredTransaction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority collection of positive-point transactions, oldest first.
///
/// # Invariants
/// - Every stored transaction has `points > 0`.
/// - Extraction order is `(timestamp, insertion sequence)` ascending.
#[derive(Debug, Default)]
pub struct TransactionStore {
    heap: BinaryHeap<Reverse<StoredTransaction>>,
    next_seq: u64,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a transaction, assigning it the next insertion sequence number.
    ///
    /// Callers must only insert transactions with `points > 0`.
    pub fn insert(&mut self, transaction: Transaction) {
        debug_assert!(
            transaction.points > 0,
            "store only holds positive-point transactions"
        );
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(StoredTransaction { transaction, seq }));
    }

    /// Put back a previously extracted entry under its original sequence
    /// number. Used when a spend consumes a transaction only partially.
    pub fn restore(&mut self, entry: StoredTransaction) {
        debug_assert!(
            entry.transaction.points > 0,
            "store only holds positive-point transactions"
        );
        self.heap.push(Reverse(entry));
    }

    /// Remove and return the oldest entry.
    pub fn extract_oldest(&mut self) -> Result<StoredTransaction, LedgerError> {
        match self.heap.pop() {
            Some(Reverse(entry)) => Ok(entry),
            None => Err(LedgerError::EmptyStore),
        }
    }

    /// Iterate over stored transactions in no particular order.
    /// Sufficient for balance computation; does not mutate.
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> + '_ {
        self.heap.iter().map(|Reverse(entry)| &entry.transaction)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn tx(payer: &str, points: i64, offset_minutes: i64) -> Transaction {
        let base = Utc.with_ymd_and_hms(2022, 10, 31, 12, 0, 0).unwrap();
        Transaction::new(payer, points, base + Duration::minutes(offset_minutes))
    }

    #[test]
    fn test_extract_oldest_first() {
        let mut store = TransactionStore::new();
        store.insert(tx("DANNON", 300, 10));
        store.insert(tx("UNILEVER", 200, -5));
        store.insert(tx("MILLER", 100, 0));

        assert_eq!(store.extract_oldest().unwrap().transaction.payer, "UNILEVER");
        assert_eq!(store.extract_oldest().unwrap().transaction.payer, "MILLER");
        assert_eq!(store.extract_oldest().unwrap().transaction.payer, "DANNON");
        assert!(store.is_empty());
    }

    #[test]
    fn test_equal_timestamps_break_by_insertion_order() {
        let mut store = TransactionStore::new();
        store.insert(tx("FIRST", 10, 0));
        store.insert(tx("SECOND", 20, 0));
        store.insert(tx("THIRD", 30, 0));

        assert_eq!(store.extract_oldest().unwrap().transaction.payer, "FIRST");
        assert_eq!(store.extract_oldest().unwrap().transaction.payer, "SECOND");
        assert_eq!(store.extract_oldest().unwrap().transaction.payer, "THIRD");
    }

    #[test]
    fn test_restore_keeps_position_among_equal_timestamps() {
        let mut store = TransactionStore::new();
        store.insert(tx("FIRST", 10, 0));
        store.insert(tx("SECOND", 20, 0));

        let mut entry = store.extract_oldest().unwrap();
        entry.transaction.points = 3;
        store.restore(entry);

        // The restored remainder still precedes the equal-timestamp entry.
        let oldest = store.extract_oldest().unwrap();
        assert_eq!(oldest.transaction.payer, "FIRST");
        assert_eq!(oldest.transaction.points, 3);
    }

    #[test]
    fn test_extract_from_empty_store() {
        let mut store = TransactionStore::new();
        assert_eq!(store.extract_oldest(), Err(LedgerError::EmptyStore));
    }

    #[test]
    fn test_iter_covers_all_entries() {
        let mut store = TransactionStore::new();
        store.insert(tx("A", 100, 0));
        store.insert(tx("B", 200, 1));
        store.insert(tx("A", 50, 2));

        let total: i64 = store.iter().map(|t| t.points).sum();
        assert_eq!(total, 350);
        assert_eq!(store.len(), 3);
    }
}
