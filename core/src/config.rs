//! Microfrontends configuration and declared port discovery.
//!
//! Ports are read from `apps/home/microfrontends.json`, resolved against an
//! explicit root directory:
//!
//! ```json
//! { "applications": { "docs": { "development": { "local": 3001 } } } }
//! ```
//!
//! Everything other than `applications[*].development.local` is ignored.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Number, Value};
use tokio::fs;
use tracing::{debug, warn};

use crate::domain::PortSet;
use crate::error::{Error, Result};

/// Location of the configuration file relative to the repository root.
pub const CONFIG_RELATIVE_PATH: &str = "apps/home/microfrontends.json";

/// The microfrontends document.
///
/// Kept as raw JSON: any shape is accepted, and only
/// `applications[*].development.local` is ever looked at.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct MicrofrontendsConfig {
    document: Value,
}

impl MicrofrontendsConfig {
    /// Collect the declared local development ports.
    ///
    /// Applications without a numeric `development.local` contribute
    /// nothing, whatever their shape.
    pub fn declared_ports(&self) -> PortSet {
        let mut ports = PortSet::new();

        let Some(applications) = self.document.get("applications").and_then(Value::as_object)
        else {
            return ports;
        };

        for (name, app) in applications {
            let local = app.get("development").and_then(|d| d.get("local"));

            match local {
                Some(Value::Number(number)) => {
                    if let Some(port) = port_from_number(name, number) {
                        debug!(app = %name, port = port, "Declared development port");
                        ports.insert(port);
                    }
                }
                Some(other) => {
                    debug!(app = %name, value = %other, "Skipping non-numeric development port");
                }
                None => {
                    debug!(app = %name, "No development port declared");
                }
            }
        }

        ports
    }
}

/// Accept integral values (including `3000.0`) inside the TCP port range.
fn port_from_number(app: &str, number: &Number) -> Option<u16> {
    let integral = number.as_u64().or_else(|| {
        number
            .as_f64()
            .filter(|f| f.is_finite() && f.fract() == 0.0 && *f >= 0.0)
            .map(|f| f as u64)
    });

    let port = integral
        .and_then(|n| u16::try_from(n).ok())
        .filter(|p| *p != 0);

    if port.is_none() {
        warn!(app = %app, value = %number, "Ignoring development port outside the TCP port range");
    }
    port
}

/// Where the microfrontends configuration is read from.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    path: PathBuf,
}

impl ConfigSource {
    /// The conventional location under a repository root.
    pub fn in_dir(root: impl AsRef<Path>) -> Self {
        Self {
            path: root.as_ref().join(CONFIG_RELATIVE_PATH),
        }
    }

    /// A config file at an arbitrary path (for testing).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the configuration.
    ///
    /// Only a missing, unreadable or non-JSON file is `ConfigUnreadable`.
    pub async fn load(&self) -> Result<MicrofrontendsConfig> {
        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| self.unreadable(e))?;

        serde_json::from_str(&content).map_err(|e| self.unreadable(e))
    }

    fn unreadable(&self, reason: impl std::fmt::Display) -> Error {
        Error::ConfigUnreadable {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }
}

/// Load the declared development ports, ascending and deduplicated.
pub async fn load_declared_ports(source: &ConfigSource) -> Result<PortSet> {
    let config = source.load().await?;
    Ok(config.declared_ports())
}
