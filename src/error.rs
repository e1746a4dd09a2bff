use miette::Diagnostic;
use reqwest::{StatusCode, header::HeaderMap};
use serde::Deserialize;
use thiserror::Error;
use tracing_error::SpanTrace;

/// One field-level complaint from a `422 Unprocessable Entity` response.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

/// The JSON bodies Billingo sends alongside non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ApiErrorBody {
    /// `{"message": "...", "errors": [{"field": "...", "message": "..."}]}`
    Validation {
        message: String,
        #[serde(default)]
        errors: Vec<ValidationError>,
    },
    /// `{"error": {"message": "..."}}`
    Client { error: ClientErrorMessage },
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientErrorMessage {
    pub message: String,
}

impl ApiErrorBody {
    /// The top-level message regardless of the body shape.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. } => message,
            Self::Client { error } => &error.message,
        }
    }

    /// Field errors, only present on validation responses.
    #[must_use]
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Validation { errors, .. } => errors,
            Self::Client { .. } => &[],
        }
    }
}

/// Errors that can occur when interacting with the Billingo API.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// A required identifier or string was rejected before any request was made.
    #[error("invalid value for `{parameter}`: {reason}")]
    #[diagnostic(
        code(billingo_rs::invalid_argument),
        help("Identifiers must be non-negative and required strings non-empty")
    )]
    InvalidArgument {
        parameter: &'static str,
        reason: String,
    },

    #[error("`{value}` is not a valid {enum_name} value")]
    #[diagnostic(
        code(billingo_rs::invalid_enum_value),
        help("Use one of the values returned by `{enum_name}::allowable_values()`")
    )]
    InvalidEnumValue {
        enum_name: &'static str,
        value: String,
    },

    #[error("{model} has no field named `{field}`")]
    #[diagnostic(
        code(billingo_rs::unknown_field),
        help("Check the field list in `{model}::FIELDS`")
    )]
    UnknownField { model: &'static str, field: String },

    #[error("endpoint could not be parsed as a URL")]
    #[diagnostic(
        code(billingo_rs::invalid_endpoint),
        help("Check that the configured host is an absolute URL such as https://api.billingo.hu/v3")
    )]
    InvalidEndpoint,

    #[error("invalid header value: {0}")]
    #[diagnostic(
        code(billingo_rs::invalid_header),
        help("Header values must be visible ASCII; check the API key, token and user agent")
    )]
    InvalidHeader(String),

    #[error("error making request: {0:?}")]
    #[diagnostic(
        code(billingo_rs::request_error),
        help("Check your network connection and Billingo API availability")
    )]
    Request(#[source] reqwest::Error),

    /// Any non-2xx response. The raw body is kept so callers can inspect it, see
    /// [`Error::api_error_body`].
    #[error("API responded with {status_code} for {url}: {response_body}")]
    #[diagnostic(
        code(billingo_rs::api_error),
        help("Inspect the response body for the reason reported by Billingo")
    )]
    Api {
        status_code: StatusCode,
        url: String,
        response_body: String,
        headers: HeaderMap,
        span_trace: SpanTrace,
    },

    #[error("error encoding request: {0}")]
    #[diagnostic(
        code(billingo_rs::serialization_error),
        help("A request model contains a value the API does not accept")
    )]
    Serialization(#[source] serde_json::Error),

    #[error("error decoding response: {0:?}")]
    #[diagnostic(
        code(billingo_rs::deserialization_error),
        help("The API returned data in an unexpected format")
    )]
    DeserializationError(#[source] serde_json::Error, Option<String>),

    #[error("I/O error: {0}")]
    #[diagnostic(
        code(billingo_rs::io_error),
        help("Check that the debug file and temp folder are writable")
    )]
    Io(#[source] std::io::Error),
}

impl Error {
    /// The HTTP status of an API error, `None` for anything that never got a response.
    #[must_use]
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    #[must_use]
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Api { response_body, .. } => Some(response_body),
            Self::DeserializationError(_, body) => body.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn response_headers(&self) -> Option<&HeaderMap> {
        match self {
            Self::Api { headers, .. } => Some(headers),
            _ => None,
        }
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Api { url, .. } => Some(url),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(StatusCode::NOT_FOUND)
    }

    /// The span trace captured when an API error was created.
    #[must_use]
    pub fn span_trace(&self) -> Option<&SpanTrace> {
        match self {
            Self::Api { span_trace, .. } => Some(span_trace),
            _ => None,
        }
    }

    /// Best-effort parse of the error body Billingo attached to a failed response.
    #[must_use]
    pub fn api_error_body(&self) -> Option<ApiErrorBody> {
        match self {
            Self::Api { response_body, .. } => serde_json::from_str(response_body).ok(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Request(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::DeserializationError(e, None)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Type alias for results from this crate.
///
/// This is already a Miette diagnostic result due to the implementation of
/// the Diagnostic trait for the Error type.
pub type Result<O> = std::result::Result<O, Error>;
