use paymapper::application::provider::PaymentProvider;
use paymapper::application::registry::ProviderRegistry;
use paymapper::domain::gateway::GatewayResponse;
use paymapper::domain::payment::{ChargeContext, PaymentStatus, TransactionMode};
use paymapper::domain::ports::{TransactionStore, TransactionStoreBox};
use paymapper::domain::transaction::TransactionRecord;
use paymapper::infrastructure::in_memory::InMemoryTransactionStore;
use std::sync::Arc;

mod common;

#[tokio::test]
async fn test_store_as_trait_object() {
    let store: TransactionStoreBox = Box::new(InMemoryTransactionStore::new());

    let mut record = TransactionRecord::new("o-1");
    record.payment_status = PaymentStatus::Authorized;

    // Verify Send + Sync by spawning tasks
    let handle = tokio::spawn(async move {
        store.store(record).await.unwrap();
        store.set_refund_id("o-1", "R01-1").await.unwrap();
        store.get("o-1").await.unwrap().unwrap()
    });

    let retrieved = handle.await.unwrap();
    assert_eq!(retrieved.payment_status, PaymentStatus::Authorized);
    assert_eq!(retrieved.refund_id.as_deref(), Some("R01-1"));
}

#[tokio::test]
async fn test_provider_shared_across_tasks() {
    let (processor, gateway, store) = common::processor(TransactionMode::Authorize);
    let mut registry = ProviderRegistry::new();
    registry.register(Arc::new(processor));

    let provider: Arc<dyn PaymentProvider> = registry.resolve("AMAZON_PAY").unwrap();
    assert_eq!(provider.name(), "amazon_pay");

    gateway.push(Ok(GatewayResponse::ok(200, "Authorized").with_transaction_id("S01-1")));
    let task_provider = Arc::clone(&provider);
    let outcome = tokio::spawn(async move {
        task_provider
            .authorize(&ChargeContext::new("o-1", "USD"))
            .await
            .unwrap()
    })
    .await
    .unwrap();
    assert_eq!(outcome.status, PaymentStatus::Authorized);

    gateway.push(Ok(GatewayResponse::ok(200, "Captured")));
    provider.capture(&ChargeContext::new("o-1", "USD")).await.unwrap();

    let record = store.get("o-1").await.unwrap().unwrap();
    assert_eq!(record.payment_status, PaymentStatus::Paid);
    assert_eq!(record.authorization_transaction_id.as_deref(), Some("S01-1"));
}
