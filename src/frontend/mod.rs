//! Client side of the enrollment API.
//!
//! - [`config`] - Base URL configuration passed explicitly to the client
//! - [`client`] - Typed HTTP client over `reqwest`
//! - [`bootstrap`] - Builds the root [`App`] and mounts it in a host document
//! - [`app`] - Root component rendering API results

pub mod app;
pub mod bootstrap;
pub mod client;
pub mod config;

pub use app::{App, ViewError};
pub use bootstrap::{
    APP_MOUNT_POINT, BootstrapError, Document, TerminalDocument, initialize,
};
pub use client::{ApiClient, ClientError};
pub use config::{ClientConfig, DEFAULT_BASE_URL, configure_http_client};
