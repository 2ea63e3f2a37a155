use record_backend::{build_rocket, config::AppConfig, store::RecordStore};
use shuttle_runtime::CustomError;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // a host-provided subscriber wins if one is already installed
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[shuttle_runtime::main]
async fn rocket(
    #[shuttle_runtime::Secrets] secret_store: shuttle_runtime::SecretStore,
) -> shuttle_rocket::ShuttleRocket {
    init_tracing();
    info!("🚀 Starting record service");

    let config = AppConfig::from_secrets(&secret_store).map_err(CustomError::new)?;

    let store = RecordStore::connect(&config.database_url, config.max_connections)
        .await
        .map_err(CustomError::new)?;

    Ok(build_rocket(store).into())
}
