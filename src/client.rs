use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, RequestBuilder, StatusCode, header};
use serde::{Serialize, de::DeserializeOwned};
use tokio::io::AsyncWriteExt;
use tracing_error::SpanTrace;

use crate::configuration::Configuration;
use crate::endpoints::BillingoEndpoint;
use crate::error::{Error, Result};
use crate::header_selector::{HeaderSelector, header_value};
use crate::utils::query;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

const JSON: &str = "application/json";

/// Executes requests against the Billingo API.
///
/// A `Client` is cheap to clone: the underlying connection pool and the
/// configuration are shared between clones, so every resource API holds its own
/// copy.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    configuration: Arc<Configuration>,
    header_selector: HeaderSelector,
}

impl Client {
    #[must_use]
    pub fn new(
        http: reqwest::Client,
        configuration: Arc<Configuration>,
        header_selector: HeaderSelector,
    ) -> Self {
        Self {
            http,
            configuration,
            header_selector,
        }
    }

    /// Builds the HTTP client every request goes through. Both timeouts apply to
    /// each call, exceeding either surfaces as [`Error::Request`].
    pub fn http_client(timeout: Duration, connect_timeout: Duration) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(Error::Request)
    }

    /// A client using `configuration` with the default timeouts.
    pub fn from_configuration(configuration: Configuration) -> Result<Self> {
        Ok(Self::new(
            Self::http_client(DEFAULT_TIMEOUT, DEFAULT_CONNECT_TIMEOUT)?,
            Arc::new(configuration),
            HeaderSelector::new(),
        ))
    }

    /// A client using a snapshot of the process-wide default configuration.
    pub fn from_default_configuration() -> Result<Self> {
        Self::from_configuration(Configuration::default_configuration())
    }

    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    #[must_use]
    pub fn header_selector(&self) -> HeaderSelector {
        self.header_selector
    }

    /// Build a request with content negotiation, authentication and user agent applied.
    fn build_request(
        &self,
        method: Method,
        endpoint: &BillingoEndpoint,
        accept: &[&str],
    ) -> Result<RequestBuilder> {
        let url = endpoint.to_url(self.configuration.host())?;
        let headers = self
            .header_selector
            .select_headers(accept, "", false)
            .to_header_map()?;

        let mut request = self
            .http
            .request(method, url)
            .headers(headers)
            .header(header::USER_AGENT, header_value(self.configuration.user_agent())?);

        for (name, value) in self.configuration.api_key_headers() {
            let name = header::HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::InvalidHeader(e.to_string()))?;
            request = request.header(name, header_value(&value)?);
        }

        if let Some(token) = self.configuration.access_token() {
            request = request.bearer_auth(token);
        } else if let Some(username) = self.configuration.username() {
            request = request.basic_auth(username, self.configuration.password());
        }

        Ok(request)
    }

    /// Perform a `GET` request, encoding `query` with the configured boolean format.
    #[instrument(skip(self, query))]
    pub async fn get<R, Q>(&self, endpoint: BillingoEndpoint, query: &Q) -> Result<R>
    where
        R: DeserializeOwned,
        Q: Serialize + fmt::Debug + ?Sized,
    {
        let pairs = query::encode(query, self.configuration.boolean_format_for_query_string())?;
        trace!(?query, %endpoint, "making GET request");
        let request = self
            .build_request(Method::GET, &endpoint, &[JSON])?
            .query(&pairs);
        let body = self.execute(Method::GET, &endpoint, request, None).await?;
        Self::deserialize(&body)
    }

    /// Perform a `POST` request. Action endpoints take an optional body.
    #[instrument(skip(self, data))]
    pub async fn post<R, B>(&self, endpoint: BillingoEndpoint, data: Option<&B>) -> Result<R>
    where
        R: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.build_request(Method::POST, &endpoint, &[JSON])?;
        let (request, json) = Self::with_json_body(request, data)?;
        trace!(json = ?json, %endpoint, "making POST request");
        let body = self
            .execute(Method::POST, &endpoint, request, json.as_deref())
            .await?;
        Self::deserialize(&body)
    }

    /// Perform a `PUT` request.
    #[instrument(skip(self, data))]
    pub async fn put<R, B>(&self, endpoint: BillingoEndpoint, data: &B) -> Result<R>
    where
        R: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.build_request(Method::PUT, &endpoint, &[JSON])?;
        let (request, json) = Self::with_json_body(request, Some(data))?;
        trace!(json = ?json, %endpoint, "making PUT request");
        let body = self
            .execute(Method::PUT, &endpoint, request, json.as_deref())
            .await?;
        Self::deserialize(&body)
    }

    /// Perform a `DELETE` request. Empty bodies deserialize into `()`.
    #[instrument(skip(self))]
    pub async fn delete<R: DeserializeOwned>(&self, endpoint: BillingoEndpoint) -> Result<R> {
        trace!(%endpoint, "making DELETE request");
        let request = self.build_request(Method::DELETE, &endpoint, &[JSON])?;
        let body = self.execute(Method::DELETE, &endpoint, request, None).await?;
        Self::deserialize(&body)
    }

    /// Perform a `GET` request for a binary payload such as a PDF or an export file.
    #[instrument(skip(self))]
    pub async fn download(&self, endpoint: BillingoEndpoint, accept: &str) -> Result<Vec<u8>> {
        trace!(%endpoint, accept, "making download request");
        let request = self.build_request(Method::GET, &endpoint, &[accept])?;
        self.execute(Method::GET, &endpoint, request, None).await
    }

    fn with_json_body<B: Serialize + ?Sized>(
        request: RequestBuilder,
        data: Option<&B>,
    ) -> Result<(RequestBuilder, Option<String>)> {
        match data {
            Some(data) => {
                let json = serde_json::to_string(data).map_err(Error::Serialization)?;
                Ok((request.body(json.clone()), Some(json)))
            }
            None => Ok((request, None)),
        }
    }

    /// Sends the request and returns the raw body of a successful response.
    async fn execute(
        &self,
        method: Method,
        endpoint: &BillingoEndpoint,
        request: RequestBuilder,
        json: Option<&str>,
    ) -> Result<Vec<u8>> {
        if self.configuration.debug() {
            self.debug_log(&format!(
                "request: {method} {endpoint} body={}",
                json.unwrap_or("")
            ))
            .await?;
        }

        let response = request.send().await.map_err(|e| {
            error!(%endpoint, "request failed: {e}");
            Error::Request(e)
        })?;

        let status = response.status();
        let url = response.url().to_string();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        debug!(
            "Response from {}: status={}, size={} bytes",
            url,
            status,
            body.len()
        );
        if self.configuration.debug() {
            self.debug_log(&format!(
                "response: {status} {url} body={}",
                String::from_utf8_lossy(&body)
            ))
            .await?;
        }

        if !status.is_success() {
            let response_body = String::from_utf8_lossy(&body).into_owned();
            error!(%url, %status, "API returned an error: {response_body}");
            return Err(Error::Api {
                status_code: status,
                url,
                response_body,
                headers,
                span_trace: SpanTrace::capture(),
            });
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(Vec::new());
        }
        Ok(body)
    }

    fn deserialize<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
        let result = if body.iter().all(u8::is_ascii_whitespace) {
            serde_json::from_value(serde_json::Value::Null)
        } else {
            serde_json::from_slice(body)
        };

        result.map_err(|e| {
            let text = String::from_utf8_lossy(body).into_owned();
            error!(
                "Failed to deserialize {} response: {}, near column {}",
                std::any::type_name::<T>(),
                e,
                e.column()
            );
            Error::DeserializationError(e, Some(text))
        })
    }

    /// Emits a debug line and appends it to the debug file when one is configured.
    async fn debug_log(&self, line: &str) -> Result<()> {
        debug!("{line}");
        let Some(path) = self.configuration.debug_file() else {
            return Ok(());
        };

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await?;
        file.write_all(format!("{line}\n").as_bytes()).await?;
        Ok(())
    }
}
