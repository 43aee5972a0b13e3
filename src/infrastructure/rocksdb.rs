use crate::domain::ports::TransactionStore;
use crate::domain::transaction::TransactionRecord;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, IteratorMode, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family for transaction records, keyed by order id.
pub const CF_TRANSACTIONS: &str = "transactions";

/// A persistent record store backed by RocksDB.
///
/// Records are stored as JSON under their order id. `Clone` shares the
/// underlying `Arc<DB>`.
#[derive(Clone)]
pub struct RocksDBStore {
    db: Arc<DB>,
}

impl RocksDBStore {
    /// Opens or creates a RocksDB instance at `path`, creating the
    /// transactions column family when missing.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_transactions = ColumnFamilyDescriptor::new(CF_TRANSACTIONS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_transactions])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn transactions(&self) -> Result<&ColumnFamily> {
        self.db.cf_handle(CF_TRANSACTIONS).ok_or_else(|| {
            PaymentError::StorageError("transactions column family not found".to_string())
        })
    }

    fn read(&self, order_id: &str) -> Result<Option<TransactionRecord>> {
        let cf = self.transactions()?;
        match self.db.get_cf(cf, order_id.as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    fn write(&self, record: &TransactionRecord) -> Result<()> {
        let cf = self.transactions()?;
        let value = serde_json::to_vec(record)?;
        self.db.put_cf(cf, record.order_id.as_bytes(), value)?;
        Ok(())
    }
}

#[async_trait]
impl TransactionStore for RocksDBStore {
    async fn store(&self, record: TransactionRecord) -> Result<()> {
        self.write(&record)
    }

    async fn get(&self, order_id: &str) -> Result<Option<TransactionRecord>> {
        self.read(order_id)
    }

    async fn set_refund_id(&self, order_id: &str, refund_id: &str) -> Result<()> {
        let mut record = self.read(order_id)?.ok_or_else(|| {
            PaymentError::StorageError(format!("no transaction record for order {order_id}"))
        })?;
        record.refund_id = Some(refund_id.to_string());
        self.write(&record)
    }

    async fn all(&self) -> Result<Vec<TransactionRecord>> {
        let cf = self.transactions()?;
        let mut records = Vec::new();
        // Keys iterate in byte order, which is order id order.
        for item in self.db.iterator_cf(cf, IteratorMode::Start) {
            let (_key, value) = item?;
            records.push(serde_json::from_slice(&value)?);
        }
        Ok(records)
    }
}
