use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use backend::config::ServerConfig;
use backend::middleware::{cors_middleware, RequestTrace, StructuredLogger, TraceSpan};
use backend::routes;
use backend::services::{spawn_idle_sweeper, SessionDirectory};
use backend::state::AppState;
use tracing::info;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let sessions = Arc::new(SessionDirectory::new(config.session_idle_ttl));
    let sweeper = spawn_idle_sweeper(Arc::clone(&sessions), config.session_sweep_interval);

    info!(
        host = %config.host,
        port = config.port,
        idle_ttl_secs = config.session_idle_ttl.as_secs(),
        sweep_interval_secs = config.session_sweep_interval.as_secs(),
        "Starting Durak backend"
    );

    let bind = (config.host.clone(), config.port);
    let data = web::Data::new(AppState::with_sessions(config, sessions));

    let result = HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&data.config.cors_allowed_origins))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind(bind)?
    .run()
    .await;

    sweeper.abort();
    result
}
