use crate::error::PaymentError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Local payment state of an order.
///
/// Transitions are driven by gateway responses. The ordering below is the usual
/// lifecycle but it is not enforced as a lattice.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Authorized,
    Paid,
    Voided,
    Refunded,
    PartiallyRefunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Authorized => "authorized",
            Self::Paid => "paid",
            Self::Voided => "voided",
            Self::Refunded => "refunded",
            Self::PartiallyRefunded => "partially_refunded",
        }
    }

    /// A charge can only be canceled before funds have moved.
    pub fn can_void(&self) -> bool {
        matches!(self, Self::Pending | Self::Authorized)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a successful authorization also captures the funds.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum TransactionMode {
    #[default]
    Authorize,
    AuthorizeAndCapture,
}

impl TransactionMode {
    pub fn captures_on_authorize(&self) -> bool {
        *self == Self::AuthorizeAndCapture
    }
}

impl FromStr for TransactionMode {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "authorize" | "authorize_only" => Ok(Self::Authorize),
            "authorize_and_capture" | "capture" => Ok(Self::AuthorizeAndCapture),
            other => Err(PaymentError::ConfigError(format!(
                "unknown transaction mode '{other}'"
            ))),
        }
    }
}

/// Where a charge originates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChargeSource {
    /// A buyer's checkout session, used for the first charge of an order.
    CheckoutSession(String),
    /// A standing charge permission, used for follow-up or recurring charges.
    ChargePermission(String),
}

/// Explicit per-call context supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ChargeContext {
    pub order_id: String,
    pub source: Option<ChargeSource>,
    pub amount: Option<Decimal>,
    pub currency: String,
    pub is_partial_refund: bool,
}

impl ChargeContext {
    pub fn new(order_id: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            source: None,
            amount: None,
            currency: currency.into(),
            is_partial_refund: false,
        }
    }

    pub fn with_source(mut self, source: ChargeSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn partial_refund(mut self, is_partial: bool) -> Self {
        self.is_partial_refund = is_partial;
        self
    }

    pub fn checkout_session_id(&self) -> Option<&str> {
        match &self.source {
            Some(ChargeSource::CheckoutSession(id)) => Some(id),
            _ => None,
        }
    }

    pub fn charge_permission_id(&self) -> Option<&str> {
        match &self.source {
            Some(ChargeSource::ChargePermission(id)) => Some(id),
            _ => None,
        }
    }
}
