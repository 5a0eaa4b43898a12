use anyhow::{Context, Result};
use campus_books::application::{
    ports::{
        ClockPort, PasswordHasherPort, PictureSelectorPort, SessionRevocationPort,
        TokenManagerPort,
    },
    services::{ApplicationServices, Ports, Repositories},
};
use campus_books::config::AppConfig;
use campus_books::infrastructure::{
    database,
    random::RandomPictureSelector,
    repositories::{
        PostgresBookReadRepository, PostgresBookWriteRepository, PostgresPostingRepository,
        PostgresUserRepository,
    },
    security::{
        Argon2PasswordHasher, BiscuitTokenManager, InMemorySessionRevocationStore,
        RedisSessionRevocationStore,
    },
    time::SystemClock,
};
use campus_books::presentation::http::{
    routes::{RouterOptions, build_router_with_options},
    state::HttpState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections())
        .await
        .context("connecting to the database")?;
    database::run_migrations(&pool)
        .await
        .context("applying migrations")?;

    let repos = Repositories {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        book_writes: Arc::new(PostgresBookWriteRepository::new(pool.clone())),
        book_reads: Arc::new(PostgresBookReadRepository::new(pool.clone())),
        postings: Arc::new(PostgresPostingRepository::new(pool.clone())),
    };

    let session_revocation_store: Arc<SessionRevocationPort> = match config.redis_url() {
        Some(url) => {
            tracing::info!("session revocations stored in redis");
            Arc::new(RedisSessionRevocationStore::from_url(
                url,
                Some(config.token_ttl()),
            )?)
        }
        None => {
            tracing::info!("session revocations kept in memory");
            Arc::new(InMemorySessionRevocationStore::new())
        }
    };

    let password_hasher: Arc<PasswordHasherPort> = Arc::new(Argon2PasswordHasher);
    let token_manager: Arc<TokenManagerPort> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let clock: Arc<ClockPort> = Arc::new(SystemClock);
    let pictures: Arc<PictureSelectorPort> = Arc::new(RandomPictureSelector);

    let services = Arc::new(ApplicationServices::new(
        repos,
        Ports {
            password_hasher,
            token_manager,
            session_revocation_store,
            clock,
            pictures,
        },
    ));

    let state = HttpState {
        services,
        db_pool: pool,
    };

    let app = build_router_with_options(
        state,
        RouterOptions {
            allowed_origins: config.allowed_origins().to_vec(),
            rate_limit: config.rate_limit_enabled(),
        },
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .with_context(|| format!("binding {}", config.listen_addr()))?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info,sqlx=warn"));

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
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
}
