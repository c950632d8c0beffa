//! Pending-Debit Ledger
//!
//! Per-payer totals of points already debited through negative adjustment
//! transactions but not yet netted against a specific stored transaction.
//! Conceptually this is debt owed against the payer's oldest earnings.

use std::collections::HashMap;

/// Mapping payer -> outstanding pending debit.
///
/// # Invariants
/// - Every recorded total is > 0; a payer whose debt reaches zero is removed.
#[derive(Debug, Default)]
pub struct PendingDebits {
    by_payer: HashMap<String, i64>,
}

impl PendingDebits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `amount` more pending debit for `payer`.
    pub fn credit(&mut self, payer: &str, amount: i64) {
        debug_assert!(amount >= 0, "pending debit amounts are non-negative");
        if amount == 0 {
            return;
        }
        *self.by_payer.entry(payer.to_string()).or_insert(0) += amount;
    }

    /// Consume `amount` of `payer`'s pending debit after netting it against a
    /// stored transaction. `amount` must not exceed the outstanding total.
    pub fn debit(&mut self, payer: &str, amount: i64) {
        debug_assert!(amount >= 0, "pending debit amounts are non-negative");
        if amount == 0 {
            return;
        }
        debug_assert!(
            amount <= self.amount_for(payer),
            "cannot consume more pending debit than is outstanding for {payer}"
        );
        if let Some(outstanding) = self.by_payer.get_mut(payer) {
            *outstanding -= amount;
            if *outstanding <= 0 {
                self.by_payer.remove(payer);
            }
        }
    }

    /// Outstanding pending debit for `payer`; 0 if none.
    pub fn amount_for(&self, payer: &str) -> i64 {
        self.by_payer.get(payer).copied().unwrap_or(0)
    }

    /// Iterate over all payers with outstanding pending debits.
    pub fn entries(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.by_payer.iter().map(|(payer, total)| (payer.as_str(), *total))
    }

    pub fn is_empty(&self) -> bool {
        self.by_payer.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_accumulates() {
        let mut pending = PendingDebits::new();
        pending.credit("DANNON", 200);
        pending.credit("DANNON", 100);

        assert_eq!(pending.amount_for("DANNON"), 300);
    }

    #[test]
    fn test_debit_reduces_and_removes_at_zero() {
        let mut pending = PendingDebits::new();
        pending.credit("DANNON", 200);

        pending.debit("DANNON", 150);
        assert_eq!(pending.amount_for("DANNON"), 50);

        pending.debit("DANNON", 50);
        assert_eq!(pending.amount_for("DANNON"), 0);
        assert!(pending.is_empty());
    }

    #[test]
    fn test_amount_for_absent_payer_is_zero() {
        let pending = PendingDebits::new();
        assert_eq!(pending.amount_for("UNILEVER"), 0);
    }

    #[test]
    fn test_zero_credit_records_nothing() {
        let mut pending = PendingDebits::new();
        pending.credit("DANNON", 0);
        assert!(pending.is_empty());
    }

    #[test]
    fn test_entries() {
        let mut pending = PendingDebits::new();
        pending.credit("DANNON", 200);
        pending.credit("MILLER", 50);

        let mut entries: Vec<(&str, i64)> = pending.entries().collect();
        entries.sort();
        assert_eq!(entries, vec![("DANNON", 200), ("MILLER", 50)]);
    }
}
