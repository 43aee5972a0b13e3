use crate::domain::ports::TransactionStore;
use crate::domain::transaction::TransactionRecord;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

/// A thread-safe in-memory store for transaction records, keyed by order id.
///
/// Clones share the same map, so a caller can keep a handle while a processor
/// owns a boxed copy.
#[derive(Default, Clone)]
pub struct InMemoryTransactionStore {
    records: Arc<RwLock<HashMap<String, TransactionRecord>>>,
    refund_writes: Arc<AtomicUsize>,
}

impl InMemoryTransactionStore {
    /// Creates a new, empty in-memory record store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set_refund_id` calls served so far.
    pub fn refund_writes(&self) -> usize {
        self.refund_writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TransactionStore for InMemoryTransactionStore {
    async fn store(&self, record: TransactionRecord) -> Result<()> {
        let mut records = self.records.write().await;
        records.insert(record.order_id.clone(), record);
        Ok(())
    }

    async fn get(&self, order_id: &str) -> Result<Option<TransactionRecord>> {
        let records = self.records.read().await;
        Ok(records.get(order_id).cloned())
    }

    async fn set_refund_id(&self, order_id: &str, refund_id: &str) -> Result<()> {
        let mut records = self.records.write().await;
        let record = records.get_mut(order_id).ok_or_else(|| {
            PaymentError::StorageError(format!("no transaction record for order {order_id}"))
        })?;
        record.refund_id = Some(refund_id.to_string());
        self.refund_writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn all(&self) -> Result<Vec<TransactionRecord>> {
        let records = self.records.read().await;
        let mut all: Vec<_> = records.values().cloned().collect();
        all.sort_by(|a, b| a.order_id.cmp(&b.order_id));
        Ok(all)
    }
}
