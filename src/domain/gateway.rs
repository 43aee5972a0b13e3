use super::payment::ChargeContext;
use super::transaction::TransactionRecord;
use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

/// The gateway call issued for a lifecycle step.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GatewayOperation {
    Authorize,
    Capture,
    Refund,
    Void,
    /// Poll of an existing charge, used to settle the pending-async path.
    GetCharge,
}

impl GatewayOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Authorize => "authorize",
            Self::Capture => "capture",
            Self::Refund => "refund",
            Self::Void => "void",
            Self::GetCharge => "get_charge",
        }
    }
}

impl fmt::Display for GatewayOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of a single gateway call.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayRequest {
    pub operation: GatewayOperation,
    pub order_id: String,
    pub charge_id: Option<String>,
    pub charge_permission_id: Option<String>,
    pub checkout_session_id: Option<String>,
    pub amount: Option<Decimal>,
    pub currency: String,
    pub capture_now: bool,
}

impl GatewayRequest {
    /// Builds the request for `operation` from the caller's context and the
    /// identifiers already stored on the record.
    pub fn for_operation(
        operation: GatewayOperation,
        ctx: &ChargeContext,
        record: &TransactionRecord,
        capture_now: bool,
    ) -> Self {
        let charge_permission_id = ctx
            .charge_permission_id()
            .map(ToString::to_string)
            .or_else(|| record.authorization_transaction_code.clone());

        Self {
            operation,
            order_id: ctx.order_id.clone(),
            charge_id: record.authorization_transaction_id.clone(),
            charge_permission_id,
            checkout_session_id: ctx.checkout_session_id().map(ToString::to_string),
            amount: ctx.amount,
            currency: ctx.currency.clone(),
            capture_now,
        }
    }
}

/// What the gateway answered. Consumed exactly once per operation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GatewayResponse {
    pub success: bool,
    pub http_status: u16,
    pub state: String,
    pub reason_code: String,
    pub transaction_id: String,
    pub permission_id: String,
}

impl GatewayResponse {
    pub fn ok(http_status: u16, state: impl Into<String>) -> Self {
        Self {
            success: true,
            http_status,
            state: state.into(),
            ..Default::default()
        }
    }

    pub fn declined(state: impl Into<String>, reason_code: impl Into<String>) -> Self {
        Self {
            success: false,
            http_status: 400,
            state: state.into(),
            reason_code: reason_code.into(),
            ..Default::default()
        }
    }

    pub fn with_transaction_id(mut self, id: impl Into<String>) -> Self {
        self.transaction_id = id.into();
        self
    }

    pub fn with_permission_id(mut self, id: impl Into<String>) -> Self {
        self.permission_id = id.into();
        self
    }

    /// `state` followed by the reason code, which is left out when empty.
    pub fn result_text(&self) -> String {
        if self.reason_code.is_empty() {
            self.state.clone()
        } else {
            format!("{} {}", self.state, self.reason_code)
        }
    }
}

/// The gateway call itself failed; no response was produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("gateway timed out")]
    Timeout,
    #[error("malformed gateway response: {0}")]
    MalformedResponse(String),
    #[error("gateway returned HTTP {status}")]
    Rejected { status: u16 },
}

pub type GatewayReply = std::result::Result<GatewayResponse, TransportError>;
