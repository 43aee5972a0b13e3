use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaymentError>;

/// Failures outside the mapper itself.
///
/// Gateway-level failures never surface here: the mapper folds them into the
/// record's error list. Only storage, input and wiring problems propagate.
#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("Storage error: {0}")]
    StorageError(String),
    #[cfg(feature = "storage-rocksdb")]
    #[error("RocksDB error: {0}")]
    RocksDbError(#[from] rocksdb::Error),
    #[error("Unknown payment provider: {0}")]
    UnknownProvider(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}
