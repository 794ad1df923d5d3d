use std::sync::Arc;

use actix_web::middleware::{from_fn, Logger};
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use school_api::api::openapi::configure_swagger_ui;
use school_api::api::routes::{self, AppState};
use school_api::application::SchoolService;
use school_api::config::{AppConfig, LoggingConfig};
use school_api::infrastructure::db::{migrations::run_migrations, pool::create_pool};
use school_api::infrastructure::repositories::SchoolRepositoryImpl;
use school_api::middleware::{catch_panics, log_requests};
use school_api::observability::AppMetrics;
use school_api::security::{cors_middleware, security_headers};
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("failed to load application configuration")?;
    init_tracing(&config.logging);
    config
        .validate()
        .context("invalid application configuration")?;

    let pool = create_pool(&config.database)
        .await
        .context("failed to create database pool")?;

    run_migrations(&pool)
        .await
        .context("database migrations failed")?;

    let school_repo = Arc::new(SchoolRepositoryImpl::new(pool.clone()));
    let state = AppState {
        school_service: Arc::new(SchoolService::new(school_repo)),
        security: config.security.clone(),
        metrics: Arc::new(AppMetrics::default()),
        db_pool: pool,
    };

    let bind_host = config.app.host.clone();
    let bind_port = config.app.port;
    let security_config = config.security.clone();

    info!(
        host = %bind_host,
        port = bind_port,
        environment = %config.app.environment,
        "starting school api"
    );

    HttpServer::new(move || {
        App::new()
            .wrap(from_fn(catch_panics))
            .wrap(security_headers())
            .wrap(cors_middleware(&security_config))
            .wrap(from_fn(log_requests))
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(configure_swagger_ui)
            .configure(routes::configure)
    })
    .bind((bind_host, bind_port))
    .context("failed to bind http listener")?
    .run()
    .await
    .context("http server stopped with an error")
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_new(&logging.level).unwrap_or_else(|_| EnvFilter::new("info"));
    let json_layer = logging.json_format.then(|| {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
    });
    let plain_layer = (!logging.json_format).then(fmt::layer);

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(plain_layer)
        .init();
}
