use super::payment::PaymentStatus;

pub const SOFT_DECLINE_REASON: &str = "AmazonRejected";
pub const HARD_DECLINE_REASON: &str = "HardDeclined";

/// Why an operation did not reach its success state.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FailureKind {
    /// Recoverable rejection. The buyer may retry.
    SoftDecline,
    /// Permanent rejection. The buyer must pick another payment method.
    HardDecline,
    /// Unclassified rejection.
    AuthFailure,
    /// The gateway call itself failed.
    Transport,
}

impl FailureKind {
    pub fn from_reason_code(reason_code: &str) -> Self {
        match reason_code {
            SOFT_DECLINE_REASON => Self::SoftDecline,
            HARD_DECLINE_REASON => Self::HardDecline,
            _ => Self::AuthFailure,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OutcomeKind {
    Succeeded,
    /// Accepted by the gateway but not yet completed.
    PendingAsync,
    Failed(FailureKind),
    /// Invoked outside its status precondition. Nothing happened.
    Skipped,
}

/// Result of mapping one gateway reply.
#[derive(Debug, PartialEq, Clone)]
pub struct MapOutcome {
    pub status: PaymentStatus,
    pub result_text: String,
    pub errors: Vec<String>,
    pub kind: OutcomeKind,
    pub note: Option<String>,
    pub charge_id: Option<String>,
    pub permission_id: Option<String>,
    pub refund_id: Option<String>,
}

impl MapOutcome {
    pub(crate) fn new(status: PaymentStatus, kind: OutcomeKind) -> Self {
        Self {
            status,
            result_text: String::new(),
            errors: Vec::new(),
            kind,
            note: None,
            charge_id: None,
            permission_id: None,
            refund_id: None,
        }
    }

    pub(crate) fn failed(status: PaymentStatus, kind: FailureKind, message: String) -> Self {
        let mut outcome = Self::new(status, OutcomeKind::Failed(kind));
        outcome.errors.push(message);
        outcome
    }

    pub(crate) fn skipped(status: PaymentStatus) -> Self {
        Self::new(status, OutcomeKind::Skipped)
    }

    pub(crate) fn with_result_text(mut self, text: String) -> Self {
        self.result_text = text;
        self
    }

    pub fn is_skipped(&self) -> bool {
        self.kind == OutcomeKind::Skipped
    }

    pub fn failure(&self) -> Option<FailureKind> {
        match self.kind {
            OutcomeKind::Failed(kind) => Some(kind),
            _ => None,
        }
    }
}
