//! Startup and serving failures.

use std::net::SocketAddr;

use catalog::CatalogError;

/// Errors that stop the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment variable held an unparseable value.
    #[error("invalid {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },

    /// `[package.metadata.leptos]` or its env overrides could not be read.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),

    /// The embedded dashboard tables failed validation.
    #[error("catalog load failed: {0}")]
    Catalog(#[from] CatalogError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
