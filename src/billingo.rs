use std::str::FromStr;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use crate::api::{
    BankAccountApi, CurrencyApi, DocumentApi, DocumentBlockApi, DocumentExportApi,
    OrganizationApi, PartnerApi, ProductApi, SpendingApi, UtilApi,
};
use crate::client::{Client, DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT};
use crate::configuration::{API_KEY_HEADER, Configuration};
use crate::error::Result;
use crate::header_selector::HeaderSelector;

/// Settings a host application supplies when building a [`Billingo`] client.
#[derive(Clone)]
pub struct ClientOptions {
    pub api_key: Option<String>,
    /// Overrides the production host when set and non-empty.
    pub host: Option<String>,
    pub debug: bool,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            api_key: None,
            host: None,
            debug: false,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

impl std::fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientOptions")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("debug", &self.debug)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

impl ClientOptions {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::default().with_api_key(api_key)
    }

    /// Read options from the environment.
    ///
    /// | Variable | Meaning |
    /// |---|---|
    /// | `BILLINGO_API_KEY` | API key sent as `X-API-KEY` |
    /// | `BILLINGO_API_HOST` | base URL, defaults to production |
    /// | `BILLINGO_DEBUG` | `1`/`true` turns on request logging |
    /// | `BILLINGO_TIMEOUT` | request timeout in seconds |
    /// | `BILLINGO_CONNECT_TIMEOUT` | connect timeout in seconds |
    ///
    /// Unset variables keep their defaults. Values that fail to parse are
    /// logged and ignored.
    #[must_use]
    pub fn from_env() -> Self {
        let mut options = Self {
            api_key: env_var("BILLINGO_API_KEY"),
            host: env_var("BILLINGO_API_HOST"),
            ..Self::default()
        };
        if let Some(debug) = env_var("BILLINGO_DEBUG") {
            options.debug = matches!(debug.to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }
        if let Some(secs) = parse_env::<u64>("BILLINGO_TIMEOUT") {
            options.timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = parse_env::<u64>("BILLINGO_CONNECT_TIMEOUT") {
            options.connect_timeout = Duration::from_secs(secs);
        }
        options
    }

    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    fn configuration(&self) -> Configuration {
        let mut configuration = Configuration::new();
        if let Some(api_key) = &self.api_key {
            configuration.set_api_key(API_KEY_HEADER, api_key.as_str());
        }
        if let Some(host) = self.host.as_deref().filter(|h| !h.trim().is_empty()) {
            configuration.set_host(host);
        }
        configuration.set_debug(self.debug);
        configuration
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T: FromStr>(name: &str) -> Option<T> {
    let raw = env_var(name)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("ignoring {name}={raw:?}: not a valid number, using the default");
            None
        }
    }
}

/// Entry point to every Billingo resource.
///
/// One HTTP client and one [`Configuration`] are shared by all resource APIs.
/// Each API is built the first time its accessor is called and then reused.
///
/// ```no_run
/// # async fn run() -> billingo_rs::Result<()> {
/// use billingo_rs::{Billingo, ClientOptions};
/// use billingo_rs::partner::ListParameters;
///
/// let billingo = Billingo::new(ClientOptions::new("my-api-key"))?;
/// let partners = billingo.partner().list_partners(&ListParameters::default()).await?;
/// println!("{} partners", partners.total.unwrap_or_default());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Billingo {
    client: Client,
    partner: OnceLock<PartnerApi>,
    product: OnceLock<ProductApi>,
    document: OnceLock<DocumentApi>,
    document_block: OnceLock<DocumentBlockApi>,
    document_export: OnceLock<DocumentExportApi>,
    bank_account: OnceLock<BankAccountApi>,
    currency: OnceLock<CurrencyApi>,
    organization: OnceLock<OrganizationApi>,
    spending: OnceLock<SpendingApi>,
    util: OnceLock<UtilApi>,
}

impl Billingo {
    pub fn new(options: ClientOptions) -> Result<Self> {
        debug!(?options, "building Billingo client");
        let http = Client::http_client(options.timeout, options.connect_timeout)?;
        let client = Client::new(
            http,
            Arc::new(options.configuration()),
            HeaderSelector::new(),
        );
        Ok(Self::from_client(client))
    }

    /// Shorthand for `Billingo::new(ClientOptions::from_env())`.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientOptions::from_env())
    }

    /// Wrap an already configured [`Client`].
    #[must_use]
    pub fn from_client(client: Client) -> Self {
        Self {
            client,
            partner: OnceLock::new(),
            product: OnceLock::new(),
            document: OnceLock::new(),
            document_block: OnceLock::new(),
            document_export: OnceLock::new(),
            bank_account: OnceLock::new(),
            currency: OnceLock::new(),
            organization: OnceLock::new(),
            spending: OnceLock::new(),
            util: OnceLock::new(),
        }
    }

    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        self.client.configuration()
    }

    #[must_use]
    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn partner(&self) -> &PartnerApi {
        self.partner
            .get_or_init(|| PartnerApi::new(self.client.clone()))
    }

    pub fn product(&self) -> &ProductApi {
        self.product
            .get_or_init(|| ProductApi::new(self.client.clone()))
    }

    pub fn document(&self) -> &DocumentApi {
        self.document
            .get_or_init(|| DocumentApi::new(self.client.clone()))
    }

    pub fn document_block(&self) -> &DocumentBlockApi {
        self.document_block
            .get_or_init(|| DocumentBlockApi::new(self.client.clone()))
    }

    pub fn document_export(&self) -> &DocumentExportApi {
        self.document_export
            .get_or_init(|| DocumentExportApi::new(self.client.clone()))
    }

    pub fn bank_account(&self) -> &BankAccountApi {
        self.bank_account
            .get_or_init(|| BankAccountApi::new(self.client.clone()))
    }

    pub fn currency(&self) -> &CurrencyApi {
        self.currency
            .get_or_init(|| CurrencyApi::new(self.client.clone()))
    }

    pub fn organization(&self) -> &OrganizationApi {
        self.organization
            .get_or_init(|| OrganizationApi::new(self.client.clone()))
    }

    pub fn spending(&self) -> &SpendingApi {
        self.spending
            .get_or_init(|| SpendingApi::new(self.client.clone()))
    }

    pub fn util(&self) -> &UtilApi {
        self.util.get_or_init(|| UtilApi::new(self.client.clone()))
    }
}
