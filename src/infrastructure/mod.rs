//! Adapters for the domain ports.

pub mod failure_logger;
pub mod in_memory;
pub mod messages;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
pub mod scripted_gateway;
