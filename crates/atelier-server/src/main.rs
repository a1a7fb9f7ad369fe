mod config;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use atelier_api::state::{AppState, AppStateInner};
use atelier_db::Database;
use atelier_mailer::{Notifier, SmtpNotifier};

use crate::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "atelier=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let config = AppConfig::load()?;

    if !config.mail.has_credentials() {
        warn!(
            "SMTP credentials not configured; outbound mail will fail until \
             ATELIER_SMTP_USER, ATELIER_SMTP_PASSWORD and ATELIER_ADMIN_EMAIL are set"
        );
    }

    // Init database
    let db = Database::open(&config.db_path)?;

    // Shared state
    let notifier: Arc<dyn Notifier> = Arc::new(SmtpNotifier::new(config.mail.clone()));
    let state: AppState = Arc::new(AppStateInner {
        db,
        notifier,
        admin_secret: config.admin_secret.clone(),
    });

    let app = atelier_api::router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Atelier server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
