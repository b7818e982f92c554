use anyhow::Result;
use pressroom_core::application::{
    ports::{ClockPort, IdGeneratorPort, MarkdownRendererPort},
    services::ApplicationServices,
};
use pressroom_core::config::AppConfig;
use pressroom_core::domain::{
    category::CategoryRepository,
    content::{ContentReadRepository, ContentWriteRepository},
    user::UserRepository,
};
use pressroom_core::infrastructure::{
    database,
    render::PulldownMarkdownRenderer,
    repositories::{SqliteCategoryRepository, SqliteContentRepository, SqliteUserRepository},
    time::SystemClock,
    util::UuidIdGenerator,
};
use pressroom_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
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

    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let content_repo = Arc::new(SqliteContentRepository::new(Arc::clone(&pool)));
    let content_write_repo: Arc<dyn ContentWriteRepository> = Arc::clone(&content_repo) as _;
    let content_read_repo: Arc<dyn ContentReadRepository> = content_repo;
    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(SqliteCategoryRepository::new(Arc::clone(&pool)));
    let user_repo: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(Arc::clone(&pool)));

    let renderer: Arc<MarkdownRendererPort> = Arc::new(PulldownMarkdownRenderer);
    let ids: Arc<IdGeneratorPort> = Arc::new(UuidIdGenerator);
    let clock: Arc<ClockPort> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        content_write_repo,
        content_read_repo,
        category_repo,
        user_repo,
        renderer,
        ids,
        clock,
    ));

    let state = HttpState {
        services,
        articles_per_page: config.articles_per_page(),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    database::close_pool(&pool).await;
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

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
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
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
