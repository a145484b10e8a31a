//! # Client Configuration
//!
//! The registry client is configured with an explicit, immutable [`ClientConfig`] which is
//! validated when it is built. It can be constructed directly or from the loosely typed
//! options object accepted by the registry tooling:
//!
//! ```json
//! { "host": "localhost", "port": 7575 }
//! ```
//!
//! `host` and `port` are required, there are no defaults for them.
use serde::Deserialize;
use std::{
    fmt,
    net::Ipv6Addr,
    path::{Path, PathBuf},
    time::Duration,
};

/// Deadline applied to each Metadata call when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Deadline applied to establishing the connection when none is configured.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required option 'host'")]
    MissingHost,
    #[error("Missing required option 'port'")]
    MissingPort,
    #[error("Host must not be empty")]
    EmptyHost,
    #[error("Host '{0}' is not a valid hostname or IP address")]
    InvalidHost(String),
    #[error("Port {0} is out of range, expected 1-65535")]
    InvalidPort(i64),
    #[error("Option '{0}' must be greater than zero")]
    ZeroTimeout(&'static str),
    #[error("Failed to read options file '{path}': '{source}'")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid options: '{0}'")]
    Json(#[from] serde_json::Error),
}

/// The registry server address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    host: String,
    port: u16,
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Result<Self, ConfigError> {
        let host = host.into();

        if host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }

        if port == 0 {
            return Err(ConfigError::InvalidPort(0));
        }

        let endpoint = Self { host, port };
        endpoint.check_authority()?;

        Ok(endpoint)
    }

    /// The rendered URI must parse back to exactly this host and port, with an empty path.
    fn check_authority(&self) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidHost(self.host.clone());
        let bare_host = self
            .host
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(&self.host);

        if bare_host.contains(':') && bare_host.parse::<Ipv6Addr>().is_err() {
            return Err(invalid());
        }

        let uri: http::Uri = self.uri().parse().map_err(|_| invalid())?;
        let parsed_host = uri
            .host()
            .map(|h| h.trim_start_matches('[').trim_end_matches(']'));

        if parsed_host != Some(bare_host) || uri.port_u16() != Some(self.port) || uri.path() != "/"
        {
            return Err(invalid());
        }

        Ok(())
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the plaintext HTTP/2 URI of the endpoint (e.g. `http://localhost:7575`).
    pub fn uri(&self) -> String {
        format!("http://{self}")
    }
}

/// Formats as `host:port`, IPv6 literals are bracketed.
impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') && !self.host.starts_with('[') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

/// Validated connection settings for a [`crate::MetadataClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    endpoint: Endpoint,
    timeout: Duration,
    connect_timeout: Duration,
    headers: Vec<(String, String)>,
}

impl ClientConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Result<Self, ConfigError> {
        Ok(Self::from_endpoint(Endpoint::new(host, port)?))
    }

    pub fn from_endpoint(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            headers: vec![],
        }
    }

    /// Parses an options object, see [`RegistryOptions`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        RegistryOptions::from_json(json)?.try_into()
    }

    /// Reads and parses an options file, see [`RegistryOptions`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        RegistryOptions::load(path)?.try_into()
    }

    /// Sets the deadline for a single Metadata call. It must be greater than zero.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ConfigError> {
        self.timeout = non_zero("timeout", timeout)?;
        Ok(self)
    }

    /// Sets the deadline for establishing the connection. It must be greater than zero.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Result<Self, ConfigError> {
        self.connect_timeout = non_zero("connect_timeout", timeout)?;
        Ok(self)
    }

    /// Adds a gRPC metadata header sent with every request.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

/// The loosely typed options object, as read from JSON.
///
/// Every field is optional at this stage so that several sources (a file, command line
/// flags) can be merged before validation with [`ClientConfig::try_from`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryOptions {
    pub host: Option<String>,
    pub port: Option<i64>,
    pub timeout_ms: Option<u64>,
    pub connect_timeout_ms: Option<u64>,
}

impl RegistryOptions {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Overwrites every field set in `other`.
    pub fn merge(mut self, other: RegistryOptions) -> Self {
        self.host = other.host.or(self.host);
        self.port = other.port.or(self.port);
        self.timeout_ms = other.timeout_ms.or(self.timeout_ms);
        self.connect_timeout_ms = other.connect_timeout_ms.or(self.connect_timeout_ms);
        self
    }
}

impl TryFrom<RegistryOptions> for ClientConfig {
    type Error = ConfigError;

    fn try_from(options: RegistryOptions) -> Result<Self, Self::Error> {
        let host = options.host.ok_or(ConfigError::MissingHost)?;
        let port = options.port.ok_or(ConfigError::MissingPort)?;
        let port = u16::try_from(port).map_err(|_| ConfigError::InvalidPort(port))?;

        let mut config = ClientConfig::new(host, port)?;

        if let Some(ms) = options.timeout_ms {
            config = config.with_timeout(Duration::from_millis(ms))?;
        }

        if let Some(ms) = options.connect_timeout_ms {
            config = config.with_connect_timeout(Duration::from_millis(ms))?;
        }

        Ok(config)
    }
}

fn non_zero(option: &'static str, timeout: Duration) -> Result<Duration, ConfigError> {
    if timeout.is_zero() {
        return Err(ConfigError::ZeroTimeout(option));
    }
    Ok(timeout)
}
