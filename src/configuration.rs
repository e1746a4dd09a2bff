//! Settings consulted on every request: credentials, host, debug output and
//! query-string formatting.
//!
//! A [`Configuration`] is plain data. Build one, wrap it in an `Arc` and hand it
//! to a [`Client`](crate::Client). There is also an opt-in process-wide default,
//! see [`Configuration::default_configuration`].

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, RwLock};

/// Base URL of the production Billingo v3 API.
pub const DEFAULT_HOST: &str = "https://api.billingo.hu/v3";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-API-KEY";

pub const DEFAULT_USER_AGENT: &str = concat!("billingo-rs/", env!("CARGO_PKG_VERSION"));

/// How boolean query parameters are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BooleanFormat {
    /// `1` / `0`
    #[default]
    Int,
    /// `true` / `false`
    String,
}

impl BooleanFormat {
    #[must_use]
    pub fn render(self, value: bool) -> &'static str {
        match (self, value) {
            (Self::Int, true) => "1",
            (Self::Int, false) => "0",
            (Self::String, true) => "true",
            (Self::String, false) => "false",
        }
    }
}

static DEFAULT_CONFIGURATION: LazyLock<RwLock<Configuration>> =
    LazyLock::new(|| RwLock::new(Configuration::default()));

#[derive(Clone)]
pub struct Configuration {
    api_keys: HashMap<String, String>,
    api_key_prefixes: HashMap<String, String>,
    access_token: Option<String>,
    username: Option<String>,
    password: Option<String>,
    host: String,
    user_agent: String,
    debug: bool,
    debug_file: Option<PathBuf>,
    temp_folder_path: PathBuf,
    boolean_format: BooleanFormat,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            api_keys: HashMap::new(),
            api_key_prefixes: HashMap::new(),
            access_token: None,
            username: None,
            password: None,
            host: DEFAULT_HOST.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            debug: false,
            debug_file: None,
            temp_folder_path: std::env::temp_dir(),
            boolean_format: BooleanFormat::default(),
        }
    }
}

impl Configuration {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A snapshot of the process-wide default configuration.
    ///
    /// The default is global mutable state shared by every thread. Code that needs
    /// different settings should build its own `Configuration` instead.
    #[must_use]
    pub fn default_configuration() -> Self {
        match DEFAULT_CONFIGURATION.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Replaces the process-wide default configuration.
    pub fn set_default_configuration(configuration: Self) {
        let mut guard = match DEFAULT_CONFIGURATION.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = configuration;
    }

    pub fn set_api_key(&mut self, header: impl Into<String>, key: impl Into<String>) -> &mut Self {
        self.api_keys.insert(header.into(), key.into());
        self
    }

    #[must_use]
    pub fn api_key(&self, header: &str) -> Option<&str> {
        self.api_keys.get(header).map(String::as_str)
    }

    /// Sets a prefix such as `Bearer` that is sent in front of the key for `header`.
    pub fn set_api_key_prefix(
        &mut self,
        header: impl Into<String>,
        prefix: impl Into<String>,
    ) -> &mut Self {
        self.api_key_prefixes.insert(header.into(), prefix.into());
        self
    }

    #[must_use]
    pub fn api_key_prefix(&self, header: &str) -> Option<&str> {
        self.api_key_prefixes.get(header).map(String::as_str)
    }

    /// The value sent in `header`: `"{prefix} {key}"` when a prefix is set, the bare
    /// key otherwise, `None` when there is no key.
    #[must_use]
    pub fn api_key_with_prefix(&self, header: &str) -> Option<String> {
        let key = self.api_key(header)?;
        Some(match self.api_key_prefix(header) {
            Some(prefix) => format!("{prefix} {key}"),
            None => key.to_string(),
        })
    }

    /// Every configured `(header, value)` pair, prefixes applied.
    pub fn api_key_headers(&self) -> impl Iterator<Item = (&str, String)> + '_ {
        self.api_keys.keys().filter_map(|header| {
            self.api_key_with_prefix(header)
                .map(|value| (header.as_str(), value))
        })
    }

    pub fn set_access_token(&mut self, token: impl Into<String>) -> &mut Self {
        self.access_token = Some(token.into());
        self
    }

    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn set_username(&mut self, username: impl Into<String>) -> &mut Self {
        self.username = Some(username.into());
        self
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn set_password(&mut self, password: impl Into<String>) -> &mut Self {
        self.password = Some(password.into());
        self
    }

    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn set_host(&mut self, host: impl Into<String>) -> &mut Self {
        self.host = host.into();
        self
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn set_user_agent(&mut self, user_agent: impl Into<String>) -> &mut Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn set_debug(&mut self, debug: bool) -> &mut Self {
        self.debug = debug;
        self
    }

    #[must_use]
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// When debug is on, request and response lines are appended to this file.
    pub fn set_debug_file(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.debug_file = Some(path.into());
        self
    }

    #[must_use]
    pub fn debug_file(&self) -> Option<&Path> {
        self.debug_file.as_deref()
    }

    pub fn set_temp_folder_path(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.temp_folder_path = path.into();
        self
    }

    #[must_use]
    pub fn temp_folder_path(&self) -> &Path {
        &self.temp_folder_path
    }

    pub fn set_boolean_format_for_query_string(&mut self, format: BooleanFormat) -> &mut Self {
        self.boolean_format = format;
        self
    }

    #[must_use]
    pub fn boolean_format_for_query_string(&self) -> BooleanFormat {
        self.boolean_format
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const REDACTED: &str = "<redacted>";

        let api_keys: HashMap<&str, &str> = self
            .api_keys
            .keys()
            .map(|header| (header.as_str(), REDACTED))
            .collect();

        f.debug_struct("Configuration")
            .field("api_keys", &api_keys)
            .field("api_key_prefixes", &self.api_key_prefixes)
            .field("access_token", &self.access_token.as_ref().map(|_| REDACTED))
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| REDACTED))
            .field("host", &self.host)
            .field("user_agent", &self.user_agent)
            .field("debug", &self.debug)
            .field("debug_file", &self.debug_file)
            .field("temp_folder_path", &self.temp_folder_path)
            .field("boolean_format", &self.boolean_format)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Configuration::new();
        assert_eq!(config.host(), "https://api.billingo.hu/v3");
        assert!(!config.debug());
        assert!(config.debug_file().is_none());
        assert!(config.access_token().is_none());
        assert!(config.username().is_none());
        assert!(config.password().is_none());
        assert!(config.user_agent().starts_with("billingo-rs/"));
        assert_eq!(config.temp_folder_path(), std::env::temp_dir());
        assert_eq!(config.boolean_format_for_query_string(), BooleanFormat::Int);
        assert_eq!(config.api_key(API_KEY_HEADER), None);
    }

    #[test]
    fn api_key_prefix_rules() {
        let mut config = Configuration::new();
        assert_eq!(config.api_key_with_prefix(API_KEY_HEADER), None);

        config.set_api_key(API_KEY_HEADER, "secret");
        assert_eq!(config.api_key_with_prefix(API_KEY_HEADER).as_deref(), Some("secret"));

        config.set_api_key_prefix(API_KEY_HEADER, "Token");
        assert_eq!(
            config.api_key_with_prefix(API_KEY_HEADER).as_deref(),
            Some("Token secret")
        );

        // A prefix on its own never produces a header.
        config.set_api_key_prefix("X-OTHER", "Token");
        assert_eq!(config.api_key_with_prefix("X-OTHER"), None);
        assert_eq!(config.api_key_headers().count(), 1);
    }

    #[test]
    fn setters_chain() {
        let mut config = Configuration::new();
        config
            .set_host("http://localhost:8080/v3")
            .set_debug(true)
            .set_username("user")
            .set_password("pass")
            .set_boolean_format_for_query_string(BooleanFormat::String);

        assert_eq!(config.host(), "http://localhost:8080/v3");
        assert!(config.debug());
        assert_eq!(config.username(), Some("user"));
        assert_eq!(config.password(), Some("pass"));
        assert_eq!(config.boolean_format_for_query_string(), BooleanFormat::String);
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let mut config = Configuration::new();
        config
            .set_api_key(API_KEY_HEADER, "super-secret-key")
            .set_access_token("super-secret-token")
            .set_password("super-secret-password");

        let output = format!("{config:?}");
        assert!(!output.contains("super-secret"));
        assert!(output.contains(API_KEY_HEADER));
    }

    #[test]
    fn boolean_formats() {
        assert_eq!(BooleanFormat::Int.render(true), "1");
        assert_eq!(BooleanFormat::Int.render(false), "0");
        assert_eq!(BooleanFormat::String.render(true), "true");
        assert_eq!(BooleanFormat::String.render(false), "false");
    }
}
