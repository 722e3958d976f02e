//! Application assembly and serving.

use crate::di::{build_app_module, AppModule, InfrastructureResolver};
use crate::startup::{print_banner, print_startup_info};
use std::future::Future;
use std::sync::Arc;
use stratus_config::AppConfig;
use stratus_core::{StratusError, StratusResult};
use stratus_repository::DatabasePool;
use stratus_rest::create_router;
use stratus_service::create_redis_pool;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

/// A fully wired server, ready to serve.
pub struct Application {
    config: AppConfig,
    module: Arc<AppModule>,
    listener: TcpListener,
}

impl Application {
    /// Connects to the dependencies, prepares the schema and binds the listener.
    pub async fn build(config: AppConfig) -> StratusResult<Self> {
        let db_pool = DatabasePool::new(&config.database).await?;

        let redis_pool = if config.redis.enabled {
            Some(create_redis_pool(&config.redis)?)
        } else {
            None
        };

        let module = build_app_module(&config, db_pool.into_inner(), redis_pool);
        module.database_pool().ensure_schema().await?;

        let addr = config.server.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| StratusError::internal(format!("Failed to bind {addr}: {e}")))?;

        Ok(Self {
            config,
            module,
            listener,
        })
    }

    /// Returns the port the listener is bound to.
    pub fn port(&self) -> StratusResult<u16> {
        self.listener
            .local_addr()
            .map(|addr| addr.port())
            .map_err(|e| StratusError::internal(format!("Failed to read local address: {e}")))
    }

    /// Serves until `shutdown` resolves, then drains and closes the pool.
    pub async fn run_until<F>(self, shutdown: F) -> StratusResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = create_router(self.module.as_ref(), &self.config.server);

        print_banner();
        print_startup_info(&self.config.server.host, self.port()?);

        let result = axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| StratusError::internal(format!("Server error: {e}")));

        self.module.database_pool().close().await;
        info!("Server shutdown complete");
        result
    }

    /// Serves until Ctrl+C or SIGTERM.
    pub async fn run(self) -> StratusResult<()> {
        self.run_until(shutdown_signal()).await
    }
}

impl std::fmt::Debug for Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Application")
            .field("addr", &self.listener.local_addr().ok())
            .finish_non_exhaustive()
    }
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
