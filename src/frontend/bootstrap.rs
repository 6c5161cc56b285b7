//! Application bootstrap.
//!
//! Startup is three linear steps: build the root component, attach it to a
//! mount point of the host document, and hand it the client configuration.
//! Nothing is sent over the network until a view is rendered.

use std::io::{self, Write};
use thiserror::Error;

use super::app::App;
use super::client::{ApiClient, ClientError};
use super::config::ClientConfig;

/// Mount point the terminal host exposes.
pub const APP_MOUNT_POINT: &str = "#app";

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("mount point '{0}' not found")]
    MountPointNotFound(String),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Host document offering named mount points.
pub trait Document {
    /// Attaches to `mount_id`, returning its writer, or `None` if the
    /// document has no such mount point.
    fn mount(&mut self, mount_id: &str) -> Option<Box<dyn Write + Send>>;
}

/// Terminal document with a single [`APP_MOUNT_POINT`] bound to stdout.
#[derive(Debug, Default)]
pub struct TerminalDocument;

impl Document for TerminalDocument {
    fn mount(&mut self, mount_id: &str) -> Option<Box<dyn Write + Send>> {
        (mount_id == APP_MOUNT_POINT).then(|| Box::new(io::stdout()) as Box<dyn Write + Send>)
    }
}

/// Builds the root component and mounts it at `mount_id` of `host`.
///
/// # Errors
///
/// Returns [`BootstrapError::MountPointNotFound`] if `host` has no such mount point.
pub fn initialize<D: Document + ?Sized>(
    host: &mut D,
    mount_id: &str,
    config: ClientConfig,
) -> Result<App, BootstrapError> {
    let client = ApiClient::new(config)?;

    let out = host
        .mount(mount_id)
        .ok_or_else(|| BootstrapError::MountPointNotFound(mount_id.to_string()))?;

    tracing::debug!(
        "Mounted app at {} (base URL {})",
        mount_id,
        client.config().base_url()
    );

    Ok(App::new(client, out))
}
