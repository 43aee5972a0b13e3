use super::provider::PaymentProvider;
use crate::domain::gateway::{GatewayOperation, GatewayRequest};
use crate::domain::mapper::TransactionMapper;
use crate::domain::outcome::{MapOutcome, OutcomeKind};
use crate::domain::payment::{ChargeContext, PaymentStatus};
use crate::domain::ports::{GatewayClientBox, TransactionStoreBox};
use crate::domain::transaction::TransactionRecord;
use crate::error::Result;
use async_trait::async_trait;
use tracing::{debug, info, warn};

/// Payment handler for one provider.
///
/// `PaymentProcessor` owns the gateway client and the record store. Each
/// operation loads the order's record, performs one gateway call, maps the
/// reply and awaits the write-back before returning, so operations on the same
/// order observe each other in call order.
pub struct PaymentProcessor {
    name: String,
    mapper: TransactionMapper,
    gateway: GatewayClientBox,
    store: TransactionStoreBox,
}

impl PaymentProcessor {
    /// Creates a new `PaymentProcessor`.
    ///
    /// # Arguments
    ///
    /// * `name` - Provider identifier used for registration and logs.
    /// * `mapper` - Maps gateway replies to payment transitions.
    /// * `gateway` - The gateway client.
    /// * `store` - The store for transaction records.
    pub fn new(
        name: impl Into<String>,
        mapper: TransactionMapper,
        gateway: GatewayClientBox,
        store: TransactionStoreBox,
    ) -> Self {
        Self {
            name: name.into(),
            mapper,
            gateway,
            store,
        }
    }

    /// Current record of an order, or a fresh `Pending` one.
    pub async fn record(&self, order_id: &str) -> Result<TransactionRecord> {
        Ok(self
            .store
            .get(order_id)
            .await?
            .unwrap_or_else(|| TransactionRecord::new(order_id)))
    }

    /// Consumes the processor and returns every stored record.
    pub async fn into_records(self) -> Result<Vec<TransactionRecord>> {
        self.store.all().await
    }

    fn request(
        &self,
        operation: GatewayOperation,
        ctx: &ChargeContext,
        record: &TransactionRecord,
    ) -> GatewayRequest {
        let capture_now =
            operation == GatewayOperation::Authorize && self.mapper.mode().captures_on_authorize();
        GatewayRequest::for_operation(operation, ctx, record, capture_now)
    }

    /// Writes the applied record, then the refund id through its own port
    /// call. The two writes are not atomic: when `set_refund_id` fails the
    /// stored record already carries the new status without the id, and the
    /// error is returned to the caller.
    async fn commit(&self, mut record: TransactionRecord, outcome: &MapOutcome) -> Result<()> {
        if outcome.is_skipped() {
            return Ok(());
        }

        record.apply(outcome);
        let order_id = record.order_id.clone();
        self.store.store(record).await?;

        if let Some(refund_id) = &outcome.refund_id {
            self.store.set_refund_id(&order_id, refund_id).await?;
        }
        Ok(())
    }

    fn trace(&self, operation: GatewayOperation, ctx: &ChargeContext, outcome: &MapOutcome) {
        match outcome.kind {
            OutcomeKind::Failed(kind) => warn!(
                provider = %self.name,
                order = %ctx.order_id,
                %operation,
                ?kind,
                status = %outcome.status,
                "gateway operation did not succeed"
            ),
            OutcomeKind::Skipped => debug!(
                provider = %self.name,
                order = %ctx.order_id,
                %operation,
                status = %outcome.status,
                "operation skipped, status precondition not met"
            ),
            OutcomeKind::PendingAsync => info!(
                provider = %self.name,
                order = %ctx.order_id,
                %operation,
                "charge accepted, awaiting asynchronous completion"
            ),
            OutcomeKind::Succeeded => info!(
                provider = %self.name,
                order = %ctx.order_id,
                %operation,
                status = %outcome.status,
                result = %outcome.result_text,
                "payment status updated"
            ),
        }
    }

    async fn run(
        &self,
        operation: GatewayOperation,
        ctx: &ChargeContext,
        precondition: fn(PaymentStatus) -> bool,
    ) -> Result<MapOutcome> {
        let record = self.record(&ctx.order_id).await?;
        if !precondition(record.payment_status) {
            let outcome = MapOutcome::skipped(record.payment_status);
            self.trace(operation, ctx, &outcome);
            return Ok(outcome);
        }

        let request = self.request(operation, ctx, &record);
        let reply = self.gateway.call(&request).await;
        let outcome = match operation {
            GatewayOperation::Authorize => self.mapper.authorize(&record, &request, reply),
            GatewayOperation::Capture => self.mapper.capture(&record, &request, reply),
            GatewayOperation::Refund => {
                self.mapper
                    .refund(&record, ctx.is_partial_refund, &request, reply)
            }
            GatewayOperation::Void => self.mapper.void(&record, &request, reply),
            GatewayOperation::GetCharge => self.mapper.settle_pending(&record, &request, reply),
        };

        self.trace(operation, ctx, &outcome);
        self.commit(record, &outcome).await?;
        Ok(outcome)
    }
}

fn any_status(_: PaymentStatus) -> bool {
    true
}

fn awaiting_settlement(status: PaymentStatus) -> bool {
    status == PaymentStatus::Pending
}

#[async_trait]
impl PaymentProvider for PaymentProcessor {
    fn name(&self) -> &str {
        &self.name
    }

    async fn authorize(&self, ctx: &ChargeContext) -> Result<MapOutcome> {
        self.run(GatewayOperation::Authorize, ctx, any_status).await
    }

    async fn capture(&self, ctx: &ChargeContext) -> Result<MapOutcome> {
        self.run(GatewayOperation::Capture, ctx, any_status).await
    }

    async fn refund(&self, ctx: &ChargeContext) -> Result<MapOutcome> {
        self.run(GatewayOperation::Refund, ctx, any_status).await
    }

    async fn void(&self, ctx: &ChargeContext) -> Result<MapOutcome> {
        self.run(GatewayOperation::Void, ctx, |status| status.can_void())
            .await
    }

    async fn settle_pending(&self, ctx: &ChargeContext) -> Result<MapOutcome> {
        self.run(GatewayOperation::GetCharge, ctx, awaiting_settlement)
            .await
    }
}
