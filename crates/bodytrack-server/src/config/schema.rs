use std::net::SocketAddr;

use bodytrack_core::error::{Result, TrackerError};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrackerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub cors: CorsSection,

    #[serde(default)]
    pub photos: PhotoSection,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            cors: CorsSection::default(),
            photos: PhotoSection::default(),
        }
    }
}

impl TrackerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(TrackerError::UnsupportedVersion);
        }
        self.server.validate()?;
        if !(1..=self.server.max_body_bytes).contains(&self.photos.max_data_url_bytes) {
            return Err(TrackerError::BadRequest(
                "photos.max_data_url_bytes must be between 1 and server.max_body_bytes".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Request body cap, applied to every route.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !(1024..=64 * 1024 * 1024).contains(&self.max_body_bytes) {
            return Err(TrackerError::BadRequest(
                "server.max_body_bytes must be between 1024 and 67108864".into(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            TrackerError::BadRequest(format!(
                "server.listen must be a valid SocketAddr ({}): {e}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:5000".into()
}
fn default_max_body_bytes() -> usize {
    8 * 1024 * 1024
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsSection {
    /// `"*"` or a comma-separated origin list.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: String,
}

impl Default for CorsSection {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

fn default_allowed_origins() -> String {
    "*".into()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhotoSection {
    #[serde(default = "default_max_data_url_bytes")]
    pub max_data_url_bytes: usize,
}

impl Default for PhotoSection {
    fn default() -> Self {
        Self {
            max_data_url_bytes: default_max_data_url_bytes(),
        }
    }
}

fn default_max_data_url_bytes() -> usize {
    5 * 1024 * 1024
}
