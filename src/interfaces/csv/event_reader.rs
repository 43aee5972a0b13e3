use crate::domain::gateway::{GatewayReply, GatewayResponse, TransportError};
use crate::domain::payment::{ChargeContext, ChargeSource};
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Authorize,
    Capture,
    Refund,
    Void,
    Settle,
}

/// One recorded gateway exchange: the operation that was invoked and the
/// reply the gateway gave, or the transport failure in its place.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct GatewayEvent {
    pub operation: EventKind,
    pub order: String,
    pub success: Option<bool>,
    pub http_status: Option<u16>,
    pub state: Option<String>,
    pub reason_code: Option<String>,
    pub transaction_id: Option<String>,
    pub permission_id: Option<String>,
    pub partial: Option<bool>,
    pub transport_error: Option<String>,
    pub amount: Option<Decimal>,
}

impl GatewayEvent {
    pub fn reply(&self) -> GatewayReply {
        if let Some(message) = self.transport_error.as_deref().filter(|m| !m.is_empty()) {
            return Err(if message.eq_ignore_ascii_case("timeout") {
                TransportError::Timeout
            } else {
                TransportError::Network(message.to_string())
            });
        }

        let success = self.success.unwrap_or(false);
        let default_status = if success { 200 } else { 400 };
        Ok(GatewayResponse {
            success,
            http_status: self.http_status.unwrap_or(default_status),
            state: self.state.clone().unwrap_or_default(),
            reason_code: self.reason_code.clone().unwrap_or_default(),
            transaction_id: self.transaction_id.clone().unwrap_or_default(),
            permission_id: self.permission_id.clone().unwrap_or_default(),
        })
    }

    pub fn context(&self, currency: &str) -> ChargeContext {
        let mut ctx = ChargeContext::new(self.order.clone(), currency)
            .partial_refund(self.partial.unwrap_or(false));
        if let Some(amount) = self.amount {
            ctx = ctx.with_amount(amount);
        }
        // Follow-up charges reference the stored permission.
        if self.operation != EventKind::Authorize
            && let Some(permission) = self.permission_id.as_deref().filter(|p| !p.is_empty())
        {
            ctx = ctx.with_source(ChargeSource::ChargePermission(permission.to_string()));
        }
        ctx
    }
}

/// Reads gateway events from a CSV source.
///
/// Whitespace is trimmed and short rows are accepted; missing trailing
/// columns read as empty.
pub struct EventReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> EventReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes events, one `Result` per row.
    pub fn events(self) -> impl Iterator<Item = Result<GatewayEvent>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from).and_then(validate))
    }
}

fn validate(event: GatewayEvent) -> Result<GatewayEvent> {
    if event.order.is_empty() {
        return Err(PaymentError::ValidationError("event without order id".to_string()));
    }
    if let Some(amount) = event.amount
        && amount.is_sign_negative()
    {
        return Err(PaymentError::ValidationError(format!(
            "negative amount {amount} for order {}",
            event.order
        )));
    }
    Ok(event)
}
