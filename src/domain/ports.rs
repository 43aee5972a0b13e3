use super::gateway::{GatewayReply, GatewayRequest, TransportError};
use super::transaction::TransactionRecord;
use crate::error::Result;
use async_trait::async_trait;

/// One request-response exchange with the payment gateway.
#[async_trait]
pub trait GatewayClient: Send + Sync {
    async fn call(&self, request: &GatewayRequest) -> GatewayReply;
}

/// Renders user-facing text for a message key.
pub trait MessageResolver: Send + Sync {
    fn resolve(&self, key: &str, args: &[&str]) -> String;
}

/// Records a failed gateway call and returns the message to surface.
pub trait FailureLogger: Send + Sync {
    fn log_failure(&self, request: &GatewayRequest, error: &TransportError) -> String;
}

#[async_trait]
pub trait TransactionStore: Send + Sync {
    async fn store(&self, record: TransactionRecord) -> Result<()>;
    async fn get(&self, order_id: &str) -> Result<Option<TransactionRecord>>;
    async fn set_refund_id(&self, order_id: &str, refund_id: &str) -> Result<()>;
    async fn all(&self) -> Result<Vec<TransactionRecord>>;
}

pub type GatewayClientBox = Box<dyn GatewayClient>;
pub type MessageResolverBox = Box<dyn MessageResolver>;
pub type FailureLoggerBox = Box<dyn FailureLogger>;
pub type TransactionStoreBox = Box<dyn TransactionStore>;
pub type TransactionStoreFactory = Box<dyn Fn() -> TransactionStoreBox + Send + Sync>;
