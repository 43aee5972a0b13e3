#![allow(dead_code)]

use paymapper::application::processor::PaymentProcessor;
use paymapper::domain::gateway::{GatewayOperation, GatewayRequest};
use paymapper::domain::mapper::TransactionMapper;
use paymapper::domain::payment::TransactionMode;
use paymapper::infrastructure::failure_logger::TracingFailureLogger;
use paymapper::infrastructure::in_memory::InMemoryTransactionStore;
use paymapper::infrastructure::messages::StaticMessageResolver;
use paymapper::infrastructure::scripted_gateway::ScriptedGateway;
use std::fs::File;
use std::io::{Error, Write};
use std::path::Path;
use tempfile::NamedTempFile;

pub const HEADER: &str = "operation, order, success, http_status, state, reason_code, transaction_id, permission_id, partial, transport_error, amount";

pub const SOFT_DECLINE_TEXT: &str =
    "Your payment was declined. Please try again or select another payment method.";
pub const HARD_DECLINE_TEXT: &str =
    "Your payment could not be processed. Please select another payment method.";

/// Writes `rows` below the event header into a temporary CSV file.
pub fn events_file(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file
}

/// Writes an authorize and a capture event for each of `orders` orders.
pub fn generate_events(path: &Path, orders: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    wtr.write_record(HEADER.split(", "))?;

    for i in 1..=orders {
        let order = format!("o-{i:06}");
        let charge = format!("S01-{i}");
        wtr.write_record([
            "authorize", order.as_str(), "true", "200", "Authorized", "", charge.as_str(), "P01-1", "", "", "10.00",
        ])?;
        wtr.write_record([
            "capture", order.as_str(), "true", "200", "Captured", "", "", "", "", "", "10.00",
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn mapper(mode: TransactionMode) -> TransactionMapper {
    TransactionMapper::new(
        mode,
        Box::new(StaticMessageResolver::new()),
        Box::new(TracingFailureLogger::new(StaticMessageResolver::new())),
    )
}

pub fn processor(mode: TransactionMode) -> (PaymentProcessor, ScriptedGateway, InMemoryTransactionStore) {
    let gateway = ScriptedGateway::new();
    let store = InMemoryTransactionStore::new();
    let processor = PaymentProcessor::new(
        "amazon_pay",
        mapper(mode),
        Box::new(gateway.clone()),
        Box::new(store.clone()),
    );
    (processor, gateway, store)
}

pub fn request(operation: GatewayOperation, order_id: &str) -> GatewayRequest {
    GatewayRequest {
        operation,
        order_id: order_id.to_string(),
        charge_id: None,
        charge_permission_id: None,
        checkout_session_id: None,
        amount: None,
        currency: "USD".to_string(),
        capture_now: false,
    }
}
