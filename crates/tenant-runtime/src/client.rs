//! Transport clients
//!
//! A [`Client`] holds immutable configuration and two lazily built HTTP
//! engines, one blocking and one async, both derived from the same
//! [`ClientConfig`]. [`AuthenticatedClient`] wraps a `Client` whose engines
//! also carry an `Authorization` header.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use tenant_runtime::{AuthenticatedClient, ClientConfig};
//!
//! let config = ClientConfig::new("https://api.example.com")
//!     .with_timeout(Duration::from_secs(10))
//!     .with_raise_on_unexpected_status(true);
//! let client = AuthenticatedClient::from_config(config, "secret-token");
//! assert_eq!(client.base_url(), "https://api.example.com");
//! ```

use crate::Result;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, COOKIE};
use reqwest::redirect::Policy;
use reqwest::Certificate;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

// =============================================================================
// Client Configuration
// =============================================================================

/// TLS certificate verification
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TlsVerify {
    /// Verify against the engine's built-in roots
    #[default]
    Enabled,
    /// Accept any certificate
    Disabled,
    /// Additionally trust the PEM certificates in this file
    TrustStore(PathBuf),
}

impl From<bool> for TlsVerify {
    fn from(verify: bool) -> Self {
        if verify {
            TlsVerify::Enabled
        } else {
            TlsVerify::Disabled
        }
    }
}

impl From<PathBuf> for TlsVerify {
    fn from(path: PathBuf) -> Self {
        TlsVerify::TrustStore(path)
    }
}

impl From<&Path> for TlsVerify {
    fn from(path: &Path) -> Self {
        TlsVerify::TrustStore(path.to_path_buf())
    }
}

/// Configuration shared by both engines of a client
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Absolute base URL, without trailing slash
    pub base_url: String,
    /// Headers sent on every request
    pub headers: BTreeMap<String, String>,
    /// Cookies sent on every request
    pub cookies: BTreeMap<String, String>,
    /// Per-request timeout; `None` keeps the engine default
    pub timeout: Option<Duration>,
    /// TLS certificate verification
    pub verify_ssl: TlsVerify,
    /// Follow redirects
    pub follow_redirects: bool,
    /// Fail with `UnexpectedStatus` on undocumented statuses
    pub raise_on_unexpected_status: bool,
}

impl ClientConfig {
    /// Create a config with defaults for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            headers: BTreeMap::new(),
            cookies: BTreeMap::new(),
            timeout: None,
            verify_ssl: TlsVerify::Enabled,
            follow_redirects: false,
            raise_on_unexpected_status: false,
        }
    }

    /// Add a default header, replacing any header of the same name
    ///
    /// Names compare case-insensitively; the latest spelling is kept.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_header(key.into(), value.into());
        self
    }

    /// Merge default headers; new values win
    pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in headers {
            self.set_header(key.into(), value.into());
        }
        self
    }

    fn set_header(&mut self, key: String, value: String) {
        self.headers
            .retain(|existing, _| !existing.eq_ignore_ascii_case(&key));
        self.headers.insert(key, value);
    }

    /// Add a default cookie
    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.insert(name.into(), value.into());
        self
    }

    /// Merge default cookies; new values win
    pub fn with_cookies<I, K, V>(mut self, cookies: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.cookies
            .extend(cookies.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set TLS verification from a flag or a trust-store path
    pub fn with_verify_ssl(mut self, verify: impl Into<TlsVerify>) -> Self {
        self.verify_ssl = verify.into();
        self
    }

    /// Set redirect following
    pub fn with_follow_redirects(mut self, follow: bool) -> Self {
        self.follow_redirects = follow;
        self
    }

    /// Set whether undocumented statuses fail
    pub fn with_raise_on_unexpected_status(mut self, raise: bool) -> Self {
        self.raise_on_unexpected_status = raise;
        self
    }

    /// Default headers for engine construction, cookies folded into one header
    fn default_headers(&self, authorization: Option<&Authorization>) -> Result<HeaderMap> {
        let mut map = HeaderMap::new();
        for (key, value) in &self.headers {
            map.insert(
                HeaderName::from_bytes(key.as_bytes())?,
                HeaderValue::from_str(value)?,
            );
        }
        if !self.cookies.is_empty() {
            let cookie = self
                .cookies
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("; ");
            map.insert(COOKIE, HeaderValue::from_str(&cookie)?);
        }
        if let Some(auth) = authorization {
            let mut value = HeaderValue::from_str(&auth.header_value())?;
            value.set_sensitive(true);
            map.insert(HeaderName::from_bytes(auth.header_name.as_bytes())?, value);
        }
        Ok(map)
    }

    fn trust_store(&self) -> Result<Option<Certificate>> {
        match &self.verify_ssl {
            TlsVerify::TrustStore(path) => {
                let pem = std::fs::read(path)?;
                Ok(Some(Certificate::from_pem(&pem)?))
            }
            _ => Ok(None),
        }
    }

    fn redirect_policy(&self) -> Policy {
        if self.follow_redirects {
            Policy::default()
        } else {
            Policy::none()
        }
    }
}

// =============================================================================
// Authorization
// =============================================================================

/// Credential injected into every request of an authenticated client
#[derive(Clone, PartialEq, Eq)]
pub struct Authorization {
    /// Header carrying the credential
    pub header_name: String,
    /// Scheme placed before the token; empty sends the bare token
    pub prefix: String,
    /// Bearer token
    pub token: String,
}

impl Authorization {
    /// `Authorization: Bearer <token>`
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            header_name: "Authorization".to_string(),
            prefix: "Bearer".to_string(),
            token: token.into(),
        }
    }

    /// Header value as sent on the wire
    pub fn header_value(&self) -> String {
        if self.prefix.is_empty() {
            self.token.clone()
        } else {
            format!("{} {}", self.prefix, self.token)
        }
    }
}

impl fmt::Debug for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authorization")
            .field("header_name", &self.header_name)
            .field("prefix", &self.prefix)
            .field("token", &"<redacted>")
            .finish()
    }
}

// =============================================================================
// Client
// =============================================================================

/// Access to configuration and engines, implemented by both client types
pub trait ApiClient {
    /// Client configuration
    fn config(&self) -> &ClientConfig;

    /// Blocking engine, built on first use
    fn sync_engine(&self) -> Result<&reqwest::blocking::Client>;

    /// Async engine, built on first use
    fn async_engine(&self) -> Result<&reqwest::Client>;
}

/// Unauthenticated transport client
///
/// Engines are released when the client is dropped. The blocking engine owns
/// an internal runtime and must not be dropped from within an async context.
#[derive(Debug, Clone)]
pub struct Client {
    config: ClientConfig,
    authorization: Option<Authorization>,
    sync_engine: OnceLock<reqwest::blocking::Client>,
    async_engine: OnceLock<reqwest::Client>,
}

impl Client {
    /// Create a client with default configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::from_config(ClientConfig::new(base_url))
    }

    /// Create a client from a configuration
    pub fn from_config(config: ClientConfig) -> Self {
        Self {
            config,
            authorization: None,
            sync_engine: OnceLock::new(),
            async_engine: OnceLock::new(),
        }
    }

    fn with_config(&self, config: ClientConfig) -> Self {
        Self {
            config,
            authorization: self.authorization.clone(),
            sync_engine: OnceLock::new(),
            async_engine: OnceLock::new(),
        }
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Whether undocumented statuses fail
    pub fn raise_on_unexpected_status(&self) -> bool {
        self.config.raise_on_unexpected_status
    }

    /// Copy with extra default headers
    pub fn with_headers<I, K, V>(&self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.with_config(self.config.clone().with_headers(headers))
    }

    /// Copy with extra default cookies
    pub fn with_cookies<I, K, V>(&self, cookies: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.with_config(self.config.clone().with_cookies(cookies))
    }

    /// Copy with a different timeout
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        self.with_config(self.config.clone().with_timeout(timeout))
    }

    /// Get the blocking engine, building it on first call
    pub fn get_sync_engine(&self) -> Result<&reqwest::blocking::Client> {
        if let Some(engine) = self.sync_engine.get() {
            return Ok(engine);
        }
        let engine = self.build_sync_engine()?;
        Ok(self.sync_engine.get_or_init(|| engine))
    }

    /// Get the async engine, building it on first call
    pub fn get_async_engine(&self) -> Result<&reqwest::Client> {
        if let Some(engine) = self.async_engine.get() {
            return Ok(engine);
        }
        let engine = self.build_async_engine()?;
        Ok(self.async_engine.get_or_init(|| engine))
    }

    /// Release both engines
    pub fn close(self) {
        drop(self);
    }

    fn build_sync_engine(&self) -> Result<reqwest::blocking::Client> {
        tracing::debug!("building blocking engine for {}", self.config.base_url);
        let mut builder = reqwest::blocking::Client::builder()
            .default_headers(self.config.default_headers(self.authorization.as_ref())?)
            .redirect(self.config.redirect_policy())
            .danger_accept_invalid_certs(self.config.verify_ssl == TlsVerify::Disabled);
        if let Some(timeout) = self.config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(cert) = self.config.trust_store()? {
            builder = builder.add_root_certificate(cert);
        }
        Ok(builder.build()?)
    }

    fn build_async_engine(&self) -> Result<reqwest::Client> {
        tracing::debug!("building async engine for {}", self.config.base_url);
        let mut builder = reqwest::Client::builder()
            .default_headers(self.config.default_headers(self.authorization.as_ref())?)
            .redirect(self.config.redirect_policy())
            .danger_accept_invalid_certs(self.config.verify_ssl == TlsVerify::Disabled);
        if let Some(timeout) = self.config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(cert) = self.config.trust_store()? {
            builder = builder.add_root_certificate(cert);
        }
        Ok(builder.build()?)
    }
}

impl ApiClient for Client {
    fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn sync_engine(&self) -> Result<&reqwest::blocking::Client> {
        self.get_sync_engine()
    }

    fn async_engine(&self) -> Result<&reqwest::Client> {
        self.get_async_engine()
    }
}

// =============================================================================
// Authenticated Client
// =============================================================================

/// Transport client that sends a credential on every request
///
/// Operations that require authentication take this type, so an anonymous
/// [`Client`] cannot be passed to them.
#[derive(Debug, Clone)]
pub struct AuthenticatedClient {
    inner: Client,
    authorization: Authorization,
}

impl AuthenticatedClient {
    /// Create a bearer-token client with default configuration
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::from_config(ClientConfig::new(base_url), token)
    }

    /// Create a bearer-token client from a configuration
    pub fn from_config(config: ClientConfig, token: impl Into<String>) -> Self {
        Self::with_authorization(config, Authorization::bearer(token))
    }

    /// Create a client with a fully specified credential
    pub fn with_authorization(config: ClientConfig, authorization: Authorization) -> Self {
        let mut inner = Client::from_config(config);
        inner.authorization = Some(authorization.clone());
        Self {
            inner,
            authorization,
        }
    }

    fn map_auth(&self, f: impl FnOnce(&mut Authorization)) -> Self {
        let mut authorization = self.authorization.clone();
        f(&mut authorization);
        Self::with_authorization(self.inner.config.clone(), authorization)
    }

    fn wrap(&self, inner: Client) -> Self {
        Self {
            inner,
            authorization: self.authorization.clone(),
        }
    }

    /// Get the token
    pub fn token(&self) -> &str {
        &self.authorization.token
    }

    /// Get the scheme placed before the token
    pub fn prefix(&self) -> &str {
        &self.authorization.prefix
    }

    /// Get the header name carrying the credential
    pub fn auth_header_name(&self) -> &str {
        &self.authorization.header_name
    }

    /// Copy with a different scheme (empty sends the bare token)
    pub fn with_prefix(&self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.map_auth(|auth| auth.prefix = prefix)
    }

    /// Copy with a different header name for the credential
    pub fn with_auth_header_name(&self, header_name: impl Into<String>) -> Self {
        let header_name = header_name.into();
        self.map_auth(|auth| auth.header_name = header_name)
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        self.inner.config()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.inner.base_url()
    }

    /// Whether undocumented statuses fail
    pub fn raise_on_unexpected_status(&self) -> bool {
        self.inner.raise_on_unexpected_status()
    }

    /// Copy with extra default headers
    pub fn with_headers<I, K, V>(&self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.wrap(self.inner.with_headers(headers))
    }

    /// Copy with extra default cookies
    pub fn with_cookies<I, K, V>(&self, cookies: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.wrap(self.inner.with_cookies(cookies))
    }

    /// Copy with a different timeout
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        self.wrap(self.inner.with_timeout(timeout))
    }

    /// Get the blocking engine, building it on first call
    pub fn get_sync_engine(&self) -> Result<&reqwest::blocking::Client> {
        self.inner.get_sync_engine()
    }

    /// Get the async engine, building it on first call
    pub fn get_async_engine(&self) -> Result<&reqwest::Client> {
        self.inner.get_async_engine()
    }

    /// Release both engines
    pub fn close(self) {
        self.inner.close();
    }
}

impl ApiClient for AuthenticatedClient {
    fn config(&self) -> &ClientConfig {
        self.inner.config()
    }

    fn sync_engine(&self) -> Result<&reqwest::blocking::Client> {
        self.inner.get_sync_engine()
    }

    fn async_engine(&self) -> Result<&reqwest::Client> {
        self.inner.get_async_engine()
    }
}

// =============================================================================
// Tests
// =============================================================================
