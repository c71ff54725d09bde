use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use walletkit::application::{NetworkBootstrap, ReconnectUseCase, SessionViewModel, WalletSession};
use walletkit::domain::{ConnectorRegistry, WalletProviderPort};
use walletkit::infrastructure::{
    AppConfig, CliArgs, FileSelectionStorage, HttpWalletProvider, InjectedConnector,
};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

struct SessionContext {
    session: Arc<WalletSession>,
    view_model: SessionViewModel,
    reconnect: ReconnectUseCase,
}

fn create_context(config: &AppConfig) -> SessionContext {
    let chain = config.chain.clone();

    let wallet_provider: Option<Arc<dyn WalletProviderPort>> =
        match HttpWalletProvider::new(&chain.rpc_url) {
            Ok(provider) => Some(Arc::new(provider)),
            Err(e) => {
                warn!(error = %e, "Wallet provider unavailable");
                None
            }
        };

    let connector = Arc::new(InjectedConnector::new(
        wallet_provider.clone(),
        chain.clone(),
    ));
    let registry = Arc::new(ConnectorRegistry::new().register(connector));
    let storage = Arc::new(FileSelectionStorage::new());
    let bootstrap = NetworkBootstrap::new(wallet_provider);

    let session = Arc::new(WalletSession::new(
        registry,
        storage.clone(),
        bootstrap,
        chain.clone(),
    ));
    let view_model = SessionViewModel::new(session.subscribe(), u32::from(chain.currency.decimals));
    let reconnect = ReconnectUseCase::new(storage, Arc::clone(&session));

    SessionContext {
        session,
        view_model,
        reconnect,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    let mut config = AppConfig::load(args.config.clone())?;
    config.merge_with_args(&args);

    init_logging(&config)?;

    info!(version = walletkit::VERSION, "Starting walletkit");

    let context = create_context(&config);

    if args.disconnect {
        context.session.logout().await;
    } else {
        context.reconnect.execute().await;

        if !context.session.is_connected() && args.connect {
            context.session.login(&config.connector).await;
        }
    }

    context.view_model.refresh().await;
    let view = context.view_model.view();

    println!(
        "chain id: {}",
        view.chain_id.map_or_else(String::new, |id| id.to_string())
    );
    println!(
        "account: {}",
        view.account.as_ref().map_or("", |a| a.as_str())
    );
    println!("balance: {}", view.balance);
    println!(
        "connected: {}",
        if view.is_connected { "yes" } else { "no" }
    );

    if let Some(message) = view.error_message {
        println!("{message}");
    }

    Ok(())
}
