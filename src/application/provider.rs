use crate::domain::outcome::MapOutcome;
use crate::domain::payment::ChargeContext;
use crate::error::Result;
use async_trait::async_trait;

/// The capability set every registered payment provider offers.
///
/// Each call maps exactly one gateway exchange. `Err` is reserved for
/// failures of the record store; gateway problems are reported in the
/// returned outcome.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn authorize(&self, ctx: &ChargeContext) -> Result<MapOutcome>;
    async fn capture(&self, ctx: &ChargeContext) -> Result<MapOutcome>;
    async fn refund(&self, ctx: &ChargeContext) -> Result<MapOutcome>;
    async fn void(&self, ctx: &ChargeContext) -> Result<MapOutcome>;
    async fn settle_pending(&self, ctx: &ChargeContext) -> Result<MapOutcome>;
}
