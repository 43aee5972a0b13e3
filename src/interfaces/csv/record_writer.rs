use crate::domain::payment::PaymentStatus;
use crate::domain::transaction::TransactionRecord;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

pub const ERROR_SEPARATOR: &str = "; ";

#[derive(Serialize)]
struct RecordRow<'a> {
    order: &'a str,
    status: PaymentStatus,
    charge_id: Option<&'a str>,
    charge_permission_id: Option<&'a str>,
    refund_id: Option<&'a str>,
    result: &'a str,
    errors: String,
}

impl<'a> From<&'a TransactionRecord> for RecordRow<'a> {
    fn from(record: &'a TransactionRecord) -> Self {
        Self {
            order: &record.order_id,
            status: record.payment_status,
            charge_id: record.authorization_transaction_id.as_deref(),
            charge_permission_id: record.authorization_transaction_code.as_deref(),
            refund_id: record.refund_id.as_deref(),
            result: &record.authorization_transaction_result,
            errors: record.errors.join(ERROR_SEPARATOR),
        }
    }
}

/// Writes transaction records as CSV, one row per order.
pub struct RecordWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_records(&mut self, records: impl IntoIterator<Item = TransactionRecord>) -> Result<()> {
        let mut wrote_any = false;
        for record in records {
            self.writer.serialize(RecordRow::from(&record))?;
            wrote_any = true;
        }
        if !wrote_any {
            self.writer.write_record([
                "order",
                "status",
                "charge_id",
                "charge_permission_id",
                "refund_id",
                "result",
                "errors",
            ])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
