//! HTTP server assembly: configuration, shared state, routing and the run
//! loop with graceful shutdown.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use bazaar_core::{
    MemoryProductStore, MemoryUserStore, ProductStore, Result, SliceMode, UserStore,
};

use crate::handlers;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address.
    pub addr: SocketAddr,
    /// Enable CORS.
    pub cors: bool,
    /// How the `/states` pagination interprets `limit`.
    pub slice_mode: SliceMode,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:8080".parse().expect("valid default addr"),
            cors: true,
            slice_mode: SliceMode::default(),
        }
    }
}

impl ServerConfig {
    /// Creates a new server config builder.
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }
}

/// Builder for [`ServerConfig`].
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    addr: Option<SocketAddr>,
    cors: Option<bool>,
    slice_mode: Option<SliceMode>,
}

impl ServerConfigBuilder {
    /// Sets the listen address.
    pub fn addr(mut self, addr: SocketAddr) -> Self {
        self.addr = Some(addr);
        self
    }

    /// Sets whether CORS is enabled.
    pub fn cors(mut self, enabled: bool) -> Self {
        self.cors = Some(enabled);
        self
    }

    /// Sets the `/states` pagination behavior.
    pub fn slice_mode(mut self, mode: SliceMode) -> Self {
        self.slice_mode = Some(mode);
        self
    }

    /// Builds the server config.
    pub fn build(self) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            addr: self.addr.unwrap_or(defaults.addr),
            cors: self.cors.unwrap_or(defaults.cors),
            slice_mode: self.slice_mode.unwrap_or(defaults.slice_mode),
        }
    }
}

/// Shared application state: the injected stores plus configuration.
pub struct AppState {
    /// Product collection behind the store trait.
    pub products: Arc<dyn ProductStore>,
    /// User collection behind the store trait.
    pub users: Arc<dyn UserStore>,
    /// Server configuration.
    pub config: ServerConfig,
    /// Server start time.
    pub start_time: Instant,
}

impl AppState {
    /// Creates app state backed by fresh in-memory stores.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self::with_stores(
            config,
            Arc::new(MemoryProductStore::new()),
            Arc::new(MemoryUserStore::new()),
        )
    }

    /// Creates app state with injected stores.
    #[must_use]
    pub fn with_stores(
        config: ServerConfig,
        products: Arc<dyn ProductStore>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            products,
            users,
            config,
            start_time: Instant::now(),
        }
    }
}

/// Builds the router over the given state, without middleware layers.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        // Fixed segments
        .route("/", get(handlers::root))
        .route("/home", get(handlers::home))
        .route("/health", get(handlers::health))
        .route("/status", get(handlers::server_status))
        // Path parameters
        .route("/users/{userid}", get(handlers::get_user))
        .route("/users/str/{userid}", get(handlers::get_user_str))
        .route("/courses/{course_id}", get(handlers::get_course))
        .route("/files/{*filepath}", get(handlers::get_file_path))
        .route("/blog/{id}", get(handlers::get_blog))
        // Query parameters
        .route("/countries", get(handlers::get_countries))
        .route("/states", get(handlers::get_states))
        // Request bodies
        .route("/products", post(handlers::create_product))
        .route("/offers", post(handlers::create_offer))
        // The original API wrote this route with a trailing slash; axum
        // matches the two forms separately, so both are registered.
        .route("/offers/", post(handlers::create_offer))
        .route("/create_user", post(handlers::create_user))
        .route("/register_user", post(handlers::register_user))
        // Multipart form
        .route("/submit_form", post(handlers::submit_form))
        .with_state(state)
}

/// The HTTP server.
pub struct Server {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl Server {
    /// Creates a new server with the given configuration and fresh stores.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let state = Arc::new(AppState::new(config.clone()));
        Self { config, state }
    }

    /// Creates a new server with injected stores.
    #[must_use]
    pub fn with_stores(
        config: ServerConfig,
        products: Arc<dyn ProductStore>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        let state = Arc::new(AppState::with_stores(config.clone(), products, users));
        Self { config, state }
    }

    /// Creates the router with middleware layers applied.
    fn router(&self) -> Router {
        let mut router = app(self.state.clone()).layer(TraceLayer::new_for_http());

        if self.config.cors {
            router = router.layer(CorsLayer::permissive());
        }

        router
    }

    /// Runs the server until Ctrl+C or SIGTERM.
    ///
    /// # Errors
    ///
    /// Returns an error if the server cannot bind or serve.
    pub async fn run(self) -> Result<()> {
        let router = self.router();

        tracing::info!(addr = %self.config.addr, slice_mode = ?self.config.slice_mode, "Starting Bazaar server");
        eprintln!(
            "\n\x1b[32m✓\x1b[0m Server listening on http://{}",
            self.config.addr
        );
        eprintln!("  Press Ctrl+C to stop\n");

        let listener = tokio::net::TcpListener::bind(self.config.addr)
            .await
            .map_err(bazaar_core::Error::Io)?;

        let shutdown_signal = async {
            let ctrl_c = async {
                tokio::signal::ctrl_c()
                    .await
                    .expect("Failed to install Ctrl+C handler");
            };

            #[cfg(unix)]
            let terminate = async {
                tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                    .expect("Failed to install signal handler")
                    .recv()
                    .await;
            };

            #[cfg(not(unix))]
            let terminate = std::future::pending::<()>();

            tokio::select! {
                () = ctrl_c => {
                    eprintln!("\n\x1b[33m⚡\x1b[0m Received Ctrl+C, shutting down gracefully...");
                },
                () = terminate => {
                    eprintln!("\n\x1b[33m⚡\x1b[0m Received SIGTERM, shutting down gracefully...");
                },
            }
        };

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(|e| bazaar_core::Error::internal(e.to_string()))?;

        tracing::info!("Server shutdown complete");
        eprintln!("\x1b[32m✓\x1b[0m Server stopped");

        Ok(())
    }
}
