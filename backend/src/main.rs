//! Backend entry-point: loads settings, opens the store and serves `/v1`.

mod server;

use std::net::{Ipv4Addr, SocketAddr};

use color_eyre::eyre::WrapErr;
use mockable::DefaultEnv;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use todo_api::config::DatabaseSettings;
use todo_api::outbound::persistence::{DbPool, PoolConfig};

const PORT: u16 = 3000;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    if let Err(e) = dotenvy::dotenv() {
        warn!(error = %e, "no .env file loaded; using process environment");
    }

    let settings =
        DatabaseSettings::from_env(&DefaultEnv::new()).wrap_err("reading database settings")?;
    let url = settings
        .database_url()
        .wrap_err("building database URL")?;
    let pool = DbPool::new(PoolConfig::new(url))
        .await
        .wrap_err("creating connection pool")?;

    let bind_addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, PORT));
    let config = ServerConfig::new(bind_addr, pool);
    info!(addr = %config.bind_addr(), "starting HTTP server");
    create_server(config)
        .wrap_err_with(|| format!("binding {bind_addr}"))?
        .await
        .wrap_err("running HTTP server")
}
