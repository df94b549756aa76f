use anyhow::Result;
use moderation_core::application::{
    ports::{creators::CreatorDirectory, publishing::PublishSink, time::Clock},
    services::ApplicationServices,
};
use moderation_core::config::AppConfig;
use moderation_core::domain::article::{ContentStore, SummaryStore};
use moderation_core::infrastructure::{
    content::S3ContentStore,
    database,
    remote::{HttpCreatorDirectory, HttpPublishSink},
    repositories::PostgresSummaryStore,
    time::SystemClock,
};
use moderation_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let summary_store: Arc<dyn SummaryStore> = Arc::new(PostgresSummaryStore::new(pool));
    let content_store: Arc<dyn ContentStore> =
        Arc::new(S3ContentStore::new(config.content_store()));
    let creator_directory: Arc<dyn CreatorDirectory> =
        Arc::new(HttpCreatorDirectory::new(config.creator_service())?);
    let publish_sink: Arc<dyn PublishSink> =
        Arc::new(HttpPublishSink::new(config.publish_service())?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&summary_store),
        Arc::clone(&content_store),
        Arc::clone(&creator_directory),
        Arc::clone(&publish_sink),
        Arc::clone(&clock),
    ));

    let shutdown = CancellationToken::new();
    let state = HttpState {
        services: Arc::clone(&services),
        directory_timeout: config.directory_timeout(),
        shutdown: shutdown.clone(),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal(shutdown: CancellationToken) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
    shutdown.cancel();
}
