//! # Cali Homepage
//!
//! HTTP front end for Bigger Than Cali. Serves a home page listing every
//! country and one comparison page per country, each figure linked to its
//! source.
//!
//! ## Core Components
//!
//! - [`AppState`]: dataset, name index and icon, shared read-only by all handlers
//! - [`build_router`]: axum router mapping paths to pages
//! - [`render`]: pure HTML rendering functions
//! - [`ServerConfig`]: TOML + command-line configuration
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cali_homepage::{AppState, ServerConfig, build_router};
//!
//! let config = ServerConfig::default();
//! let state = Arc::new(AppState::new(config.load_dataset()?, &config.smaller_host_marker));
//! let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
//! axum::serve(listener, build_router(state)).await?;
//! ```

pub mod config;
pub mod error;
pub mod favicon;
pub mod format;
pub mod render;
pub mod router;
pub mod site;

pub use config::{Cli, ServerConfig};
pub use error::{ServerError, ServerResult};
pub use render::{render_comparison, render_home, render_not_found};
pub use router::{AppState, build_router};
pub use site::SiteMode;
