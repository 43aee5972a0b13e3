use clap::Parser;
use miette::{IntoDiagnostic, Result};
use paymapper::application::processor::PaymentProcessor;
use paymapper::application::provider::PaymentProvider;
use paymapper::application::registry::ProviderRegistry;
use paymapper::config::{AppConfig, DEFAULT_PROVIDER};
use paymapper::domain::mapper::TransactionMapper;
use paymapper::domain::ports::{TransactionStore, TransactionStoreBox};
use paymapper::infrastructure::failure_logger::TracingFailureLogger;
use paymapper::infrastructure::in_memory::InMemoryTransactionStore;
use paymapper::infrastructure::messages::StaticMessageResolver;
use paymapper::infrastructure::scripted_gateway::ScriptedGateway;
use paymapper::interfaces::csv::event_reader::{EventKind, EventReader, GatewayEvent};
use paymapper::interfaces::csv::record_writer::RecordWriter;
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input CSV of recorded gateway events
    input: PathBuf,

    /// Payment provider to replay against
    #[arg(long)]
    provider: Option<String>,

    /// Transaction mode: authorize or authorize_and_capture
    #[arg(long)]
    mode: Option<String>,

    /// Currency used for charge requests
    #[arg(long)]
    currency: Option<String>,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long)]
    db_path: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

/// Splits one store into the handle owned by the processor and the handle
/// used to read the final state.
fn shared<S: TransactionStore + Clone + 'static>(store: S) -> (TransactionStoreBox, TransactionStoreBox) {
    (Box::new(store.clone()), Box::new(store))
}

fn open_store(db_path: Option<PathBuf>) -> Result<(TransactionStoreBox, TransactionStoreBox)> {
    match db_path {
        #[cfg(feature = "storage-rocksdb")]
        Some(path) => {
            let store = paymapper::infrastructure::rocksdb::RocksDBStore::open(path).into_diagnostic()?;
            Ok(shared(store))
        }
        #[cfg(not(feature = "storage-rocksdb"))]
        Some(path) => {
            tracing::warn!(
                path = %path.display(),
                "Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to in-memory storage."
            );
            Ok(shared(InMemoryTransactionStore::new()))
        }
        None => Ok(shared(InMemoryTransactionStore::new())),
    }
}

async fn dispatch(
    provider: &dyn PaymentProvider,
    event: &GatewayEvent,
    currency: &str,
) -> paymapper::error::Result<()> {
    let ctx = event.context(currency);
    match event.operation {
        EventKind::Authorize => provider.authorize(&ctx).await?,
        EventKind::Capture => provider.capture(&ctx).await?,
        EventKind::Refund => provider.refund(&ctx).await?,
        EventKind::Void => provider.void(&ctx).await?,
        EventKind::Settle => provider.settle_pending(&ctx).await?,
    };
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = AppConfig::from_env().into_diagnostic()?;
    if let Some(provider) = cli.provider {
        config.provider = provider;
    }
    if let Some(mode) = cli.mode {
        config.transaction_mode = mode.parse().into_diagnostic()?;
    }
    if let Some(currency) = cli.currency {
        config.currency = currency;
    }

    let (processor_store, output_store) = open_store(cli.db_path)?;
    let gateway = ScriptedGateway::new();
    let mapper = TransactionMapper::new(
        config.transaction_mode,
        Box::new(StaticMessageResolver::new()),
        Box::new(TracingFailureLogger::new(StaticMessageResolver::new())),
    );

    let mut registry = ProviderRegistry::new();
    registry.register(Arc::new(PaymentProcessor::new(
        DEFAULT_PROVIDER,
        mapper,
        Box::new(gateway.clone()),
        processor_store,
    )));
    let provider = registry.resolve(&config.provider).into_diagnostic()?;

    // Replay events
    let file = File::open(cli.input).into_diagnostic()?;
    for event in EventReader::new(file).events() {
        match event {
            Ok(event) => {
                gateway.push(event.reply());
                if let Err(e) = dispatch(&*provider, &event, &config.currency).await {
                    error!("Error processing event: {}", e);
                }
                let unused = gateway.discard_pending();
                if unused > 0 {
                    debug!(order = %event.order, "gateway was not called, reply dropped");
                }
            }
            Err(e) => {
                error!("Error reading event: {}", e);
            }
        }
    }

    // Output final state
    let records = output_store.all().await.into_diagnostic()?;
    let stdout = io::stdout();
    let mut writer = RecordWriter::new(stdout.lock());
    writer.write_records(records).into_diagnostic()?;

    Ok(())
}
