use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use tower_http::{normalize_path::NormalizePath, trace::TraceLayer};
use tracing::info;

use crate::config::{Config, DbCredentials};
use crate::db::{PgProductStore, ProductStore};
use crate::handlers;

/// Shared application state, cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
}

/// The inventory service: one store handle and the router bound to it.
pub struct App {
    service: NormalizePath<Router>,
}

impl App {
    /// Builds the store handle and registers every route.
    ///
    /// No connection is opened here; an unreachable database surfaces on the
    /// first query as a 500.
    pub fn initialize(config: &Config) -> anyhow::Result<Self> {
        let options = PgPoolOptions::new().max_connections(config.db_max_connections);
        let pool = match &config.db {
            DbCredentials::Url(url) => options
                .connect_lazy(url)
                .context("DATABASE_URL is not a valid Postgres URL")?,
            DbCredentials::Parts {
                user,
                password,
                name,
                host,
                port,
            } => options.connect_lazy_with(
                PgConnectOptions::new()
                    .host(host)
                    .port(*port)
                    .username(user)
                    .password(password)
                    .database(name),
            ),
        };
        info!("Database handle ready (connections open on first use).");

        let state = AppState {
            store: Arc::new(PgProductStore::new(pool)),
        };

        Ok(Self {
            service: build_service(state),
        })
    }

    /// Serves requests until the process is stopped. A bind failure is returned
    /// to the caller, which treats it as fatal.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        info!("Listening on http://{}", addr);

        let service = axum::ServiceExt::<axum::extract::Request>::into_make_service(self.service);
        axum::serve(listener, service).await?;
        Ok(())
    }
}

/// The router wrapped so that `/products/` is served as `/products`. The
/// trailing slash has to be trimmed before routing, so this wraps the router
/// instead of being one of its layers.
pub fn build_service(state: AppState) -> NormalizePath<Router> {
    NormalizePath::trim_trailing_slash(build_router(state))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))

        // ── Products CRUD ───────────────────────────────────────────────────
        .route("/products", get(handlers::products::list_products))
        .route("/product", post(handlers::products::create_product))
        .route(
            "/product/:id",
            get(handlers::products::get_product)
                .put(handlers::products::update_product)
                .delete(handlers::products::delete_product),
        )

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
