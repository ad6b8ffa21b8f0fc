//! Server Implementation
//!
//! HTTP 服务器启动和管理

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;

use crate::core::{Config, Result, ServerError, ServerState};
use crate::routes::build_app;

/// HTTP Server
pub struct Server {
    config: Config,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// 校验配置，生成第一批店铺，然后开始监听
    ///
    /// 配置无效时在生成任何店铺之前返回 [`ServerError::Config`]。
    pub async fn run(&self) -> Result<()> {
        self.config.validate()?;

        let state = ServerState::initialize(&self.config);

        let app = build_app().with_state(state);
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(ServerError::Bind)?;

        tracing::info!("🚀 Dashboard server listening on {}", addr);

        // 收到关闭信号后开始计时，超时则强制退出
        let shutdown_started = Arc::new(Notify::new());
        let signal = {
            let shutdown_started = shutdown_started.clone();
            async move {
                shutdown_signal().await;
                shutdown_started.notify_one();
            }
        };
        let timeout = Duration::from_millis(self.config.shutdown_timeout_ms);
        let forced = async {
            shutdown_started.notified().await;
            tokio::time::sleep(timeout).await;
        };

        let serve = axum::serve(listener, app)
            .with_graceful_shutdown(signal)
            .into_future();

        tokio::select! {
            result = serve => result.map_err(|e| {
                ServerError::Internal(anyhow::anyhow!("Server error: {}", e))
            })?,
            _ = forced => tracing::warn!(?timeout, "Graceful shutdown timed out, forcing exit"),
        }

        tracing::info!("✅ Server shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down...");
}
