//! User Account
//!
//! The ledger engine. A `UserAccount` owns one transaction store and one
//! pending-debit ledger, enforces the non-negative payer balance invariant on
//! ingestion, and allocates spends strictly oldest-first across payers.

use std::collections::BTreeMap;

use crate::domain::{LedgerError, PayerAmount, Transaction};

use super::pending::PendingDebits;
use super::store::{StoredTransaction, TransactionStore};

/// A single user's point ledger for one process lifetime.
///
/// Not safe for concurrent mutation; callers exposing an account to multiple
/// threads must serialize `add` and `spend` behind an exclusive lock.
#[derive(Debug, Default)]
pub struct UserAccount {
    store: TransactionStore,
    pending: PendingDebits,
}

impl UserAccount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a batch of transactions, one at a time, in the given order.
    ///
    /// The batch is not atomic: if an element fails, elements before it stay
    /// applied and the error is returned as-is.
    pub fn add(&mut self, transactions: Vec<Transaction>) -> Result<(), LedgerError> {
        for transaction in transactions {
            self.add_transaction(transaction)?;
        }
        Ok(())
    }

    /// Ingest a single transaction.
    ///
    /// Positive points go into the store. Negative points are recorded as a
    /// pending debit, to be netted lazily against the payer's oldest earning
    /// during a future spend; the debit is rejected with
    /// `LedgerError::InsufficientPoints` if it would drive the payer's
    /// balance below zero. Zero points are a no-op.
    fn add_transaction(&mut self, transaction: Transaction) -> Result<(), LedgerError> {
        if transaction.points == 0 {
            return Ok(());
        }

        if transaction.points > 0 {
            self.store.insert(transaction);
            return Ok(());
        }

        let requested = -transaction.points;
        let available = self.payer_balance(&transaction.payer);
        if requested > available {
            return Err(LedgerError::insufficient_points(requested, available));
        }
        self.pending.credit(&transaction.payer, requested);
        Ok(())
    }

    /// Current balance per payer: stored points minus pending debits.
    /// Payers whose net is zero are omitted.
    pub fn balance(&self) -> BTreeMap<String, i64> {
        let mut totals: BTreeMap<String, i64> = BTreeMap::new();
        for transaction in self.store.iter() {
            *totals.entry(transaction.payer.clone()).or_insert(0) += transaction.points;
        }
        for (payer, outstanding) in self.pending.entries() {
            *totals.entry(payer.to_string()).or_insert(0) -= outstanding;
        }
        totals.retain(|_, points| *points != 0);
        totals
    }

    /// Total points available across all payers.
    pub fn total_points(&self) -> i64 {
        self.balance().values().sum()
    }

    fn payer_balance(&self, payer: &str) -> i64 {
        let stored: i64 = self
            .store
            .iter()
            .filter(|transaction| transaction.payer == payer)
            .map(|transaction| transaction.points)
            .sum();
        stored - self.pending.amount_for(payer)
    }

    /// Extract the oldest stored transaction, first netting any pending debit
    /// recorded for its payer. Pending debits always resolve against the
    /// single oldest unresolved earning for the payer, never a newer one.
    /// The returned entry may have zero points left after netting.
    fn draw_next_spendable(&mut self) -> Result<StoredTransaction, LedgerError> {
        let mut entry = self.store.extract_oldest()?;
        let outstanding = self.pending.amount_for(&entry.transaction.payer);
        if outstanding > 0 {
            let netted = outstanding.min(entry.transaction.points);
            entry.transaction.points -= netted;
            self.pending.debit(&entry.transaction.payer, netted);
        }
        Ok(entry)
    }

    /// Spend `points`, drawing from the oldest transactions first regardless
    /// of payer. Returns the per-payer allocation as negative amounts summing
    /// to exactly `-points`.
    ///
    /// Fails with `LedgerError::InsufficientPoints` and no state change when
    /// fewer than `points` are available.
    pub fn spend(&mut self, points: i64) -> Result<BTreeMap<String, i64>, LedgerError> {
        let available = self.total_points();
        if available < points {
            return Err(LedgerError::insufficient_points(points, available));
        }

        let mut remaining = points;
        let mut allocations: Vec<PayerAmount> = Vec::new();
        while remaining > 0 && !self.store.is_empty() {
            let mut entry = self.draw_next_spendable()?;
            if entry.transaction.points == 0 {
                // Fully consumed by pending netting; nothing left to allocate.
                continue;
            }
            let spent = remaining.min(entry.transaction.points);
            remaining -= spent;
            allocations.push(PayerAmount::new(entry.transaction.payer.clone(), -spent));
            entry.transaction.points -= spent;
            if entry.transaction.points > 0 {
                self.store.restore(entry);
            }
        }

        Ok(spend_summary(&allocations))
    }
}

/// Aggregate raw spend allocations into a per-payer summary.
fn spend_summary(allocations: &[PayerAmount]) -> BTreeMap<String, i64> {
    let mut summary: BTreeMap<String, i64> = BTreeMap::new();
    for entry in allocations {
        *summary.entry(entry.payer.clone()).or_insert(0) += entry.points;
    }
    summary
}
