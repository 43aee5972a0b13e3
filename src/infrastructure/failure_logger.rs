use crate::domain::gateway::{GatewayRequest, TransportError};
use crate::domain::messages::TRANSPORT_FAILED;
use crate::domain::ports::{FailureLogger, MessageResolver};

/// Emits failed gateway calls as `tracing` errors and renders the message
/// surfaced on the record.
pub struct TracingFailureLogger<R> {
    resolver: R,
}

impl<R: MessageResolver> TracingFailureLogger<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }
}

impl<R: MessageResolver> FailureLogger for TracingFailureLogger<R> {
    fn log_failure(&self, request: &GatewayRequest, error: &TransportError) -> String {
        tracing::error!(
            order = %request.order_id,
            operation = %request.operation,
            charge_id = request.charge_id.as_deref().unwrap_or(""),
            %error,
            "gateway call failed"
        );
        let operation = request.operation.to_string();
        let error = error.to_string();
        self.resolver.resolve(
            TRANSPORT_FAILED,
            &[operation.as_str(), request.order_id.as_str(), error.as_str()],
        )
    }
}
