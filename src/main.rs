use contract_ledger::config;
use contract_ledger::errors::Result;
use contract_ledger::http::{self, AppState};
use contract_ledger::store::{ContractStore, LicenseStore};
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables can also be set externally
    dotenv().ok();

    // 3. Load the application configuration
    let app_config = config::load()?;
    info!("Loaded application configuration");

    // 4. Construct the stores. The license store bootstraps its backing file
    //    on first use; the contracts file is expected to exist (seeded data).
    let contracts = Arc::new(ContractStore::new(
        app_config.store.contracts_path(),
        app_config.store.contracts_mirror_path(),
    ));
    let licenses = Arc::new(LicenseStore::new(app_config.store.licenses_path()));

    // 5. Serve
    let state = AppState {
        contracts,
        licenses,
        dashboard: app_config.dashboard.clone(),
    };
    let app = http::build_router(state);

    let listener = tokio::net::TcpListener::bind(&app_config.bind_addr).await?;
    info!(addr = %app_config.bind_addr, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}
