//! Application Startup
//!
//! Application building and server initialization.

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::application::services::{TodoService, TodoServiceImpl, TotoService, TotoServiceImpl};
use crate::config::{Settings, StorageBackend};
use crate::infrastructure::database;
use crate::infrastructure::repositories::{
    MemoryTodoRepository, MemoryTotoRepository, PgTodoRepository, PgTotoRepository,
};
use crate::presentation::http::{handlers, routes};
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub todos: Arc<dyn TodoService>,
    pub totos: Arc<dyn TotoService>,
    /// Present only for the PostgreSQL backend; used by readiness checks
    pub db: Option<PgPool>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// State backed by PostgreSQL gateways.
    pub fn postgres(pool: PgPool, settings: Settings) -> Self {
        Self {
            todos: Arc::new(TodoServiceImpl::new(Arc::new(PgTodoRepository::new(pool.clone())))),
            totos: Arc::new(TotoServiceImpl::new(Arc::new(PgTotoRepository::new(pool.clone())))),
            db: Some(pool),
            settings: Arc::new(settings),
        }
    }

    /// State backed by fresh in-memory gateways.
    pub fn in_memory(settings: Settings) -> Self {
        Self {
            todos: Arc::new(TodoServiceImpl::new(Arc::new(MemoryTodoRepository::new()))),
            totos: Arc::new(TotoServiceImpl::new(Arc::new(MemoryTotoRepository::new()))),
            db: None,
            settings: Arc::new(settings),
        }
    }
}

/// Build the full router, middleware included, for the given state.
pub fn build_router(state: AppState) -> Router {
    let cors_layer = cors::create_cors_layer(&state.settings.cors);

    routes::create_router(state)
        .layer(logging::create_trace_layer())
        .layer(cors_layer)
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        handlers::health::init_server_start();

        let state = match settings.database.backend {
            StorageBackend::Postgres => {
                let pool = database::create_pool(&settings.database).await?;
                tracing::info!("Database connection pool created");

                if settings.database.auto_create_schema {
                    database::ensure_schema(&pool).await?;
                    tracing::info!("Database schema ensured");
                }

                AppState::postgres(pool, settings.clone())
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage; data is lost on shutdown");
                AppState::in_memory(settings.clone())
            }
        };

        let router = build_router(state);

        // Bind to address
        let listener = TcpListener::bind(settings.server_addr()).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
