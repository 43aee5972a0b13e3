use super::outcome::MapOutcome;
use super::payment::PaymentStatus;
use serde::{Deserialize, Serialize};

/// Payment state of one order as seen by the payment plugin.
///
/// Owned by the order aggregate. The mapper reads `payment_status` and the
/// stored identifiers; `apply` writes an outcome back.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct TransactionRecord {
    pub order_id: String,
    /// Gateway charge id.
    pub authorization_transaction_id: Option<String>,
    /// Gateway charge permission id.
    pub authorization_transaction_code: Option<String>,
    pub authorization_transaction_result: String,
    pub payment_status: PaymentStatus,
    /// Errors of the last operation. Empty iff it succeeded.
    pub errors: Vec<String>,
    pub refund_id: Option<String>,
    /// Set while an authorization is awaiting asynchronous completion.
    pub pending_note: Option<String>,
}

impl TransactionRecord {
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            ..Default::default()
        }
    }

    /// Commits a mapped outcome. Skipped outcomes leave the record untouched.
    pub fn apply(&mut self, outcome: &MapOutcome) {
        if outcome.is_skipped() {
            return;
        }

        self.payment_status = outcome.status;
        self.errors = outcome.errors.clone();
        if !outcome.result_text.is_empty() {
            self.authorization_transaction_result = outcome.result_text.clone();
        }
        if let Some(charge_id) = &outcome.charge_id {
            self.authorization_transaction_id = Some(charge_id.clone());
        }
        if let Some(permission_id) = &outcome.permission_id {
            self.authorization_transaction_code = Some(permission_id.clone());
        }
        if let Some(note) = &outcome.note {
            self.pending_note = Some(note.clone());
        }
        if self.payment_status != PaymentStatus::Pending {
            self.pending_note = None;
        }
    }
}
