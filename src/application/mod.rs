//! Application layer: per-provider payment handlers and their registry.
//!
//! `PaymentProcessor` drives one gateway exchange per call through the
//! transaction mapper and persists the outcome. `ProviderRegistry` selects a
//! handler by provider identifier.

pub mod processor;
pub mod provider;
pub mod registry;
