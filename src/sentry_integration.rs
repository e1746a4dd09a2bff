//! Sentry integration for billingo-rs errors.
//!
//! Only available with the `sentry` feature:
//!
//! ```toml
//! [dependencies]
//! billingo-rs = { version = "0.1", features = ["sentry"] }
//! ```
//!
//! Errors raised inside an instrumented span carry a span trace when the
//! subscriber has `tracing_error::ErrorLayer` installed.

use std::collections::BTreeMap;

use sentry_core::{Breadcrumb, protocol::Value};

use crate::error::Error;

const MAX_BODY_PREVIEW: usize = 500;

/// Convert a billingo-rs Error into a Sentry breadcrumb.
impl<'a> From<&'a Error> for Breadcrumb {
    fn from(error: &'a Error) -> Self {
        let (category, message, data) = match error {
            Error::Request(source) => {
                let mut data = BTreeMap::new();
                data.insert("timeout".to_string(), Value::from(source.is_timeout()));
                data.insert("connect".to_string(), Value::from(source.is_connect()));
                (
                    "http.request",
                    format!("HTTP request error: {source}"),
                    data,
                )
            }

            Error::Api {
                status_code, url, ..
            } => {
                let mut data = BTreeMap::new();
                data.insert("url".to_string(), Value::from(url.clone()));
                data.insert("status_code".to_string(), Value::from(status_code.as_u16()));
                if let Some(body) = error.api_error_body() {
                    data.insert("message".to_string(), Value::from(body.message()));
                    let fields: Vec<Value> = body
                        .validation_errors()
                        .iter()
                        .map(|e| Value::from(e.field.clone()))
                        .collect();
                    if !fields.is_empty() {
                        data.insert("fields".to_string(), Value::from(fields));
                    }
                }
                (
                    "billingo.api",
                    format!("Billingo API error: {status_code}"),
                    data,
                )
            }

            Error::DeserializationError(source, _) => (
                "http.response",
                format!("Failed to deserialize response: {source}"),
                BTreeMap::new(),
            ),

            Error::Serialization(source) => (
                "billingo.validation",
                format!("Failed to serialize request: {source}"),
                BTreeMap::new(),
            ),

            Error::InvalidArgument { parameter, reason } => {
                let mut data = BTreeMap::new();
                data.insert("parameter".to_string(), Value::from(*parameter));
                (
                    "billingo.validation",
                    format!("Invalid argument `{parameter}`: {reason}"),
                    data,
                )
            }

            Error::InvalidEnumValue { enum_name, value } => {
                let mut data = BTreeMap::new();
                data.insert("enum".to_string(), Value::from(*enum_name));
                data.insert("value".to_string(), Value::from(value.clone()));
                (
                    "billingo.validation",
                    format!("Invalid {enum_name} value"),
                    data,
                )
            }

            Error::UnknownField { model, field } => (
                "billingo.validation",
                format!("{model} has no field `{field}`"),
                BTreeMap::new(),
            ),

            Error::InvalidEndpoint => (
                "billingo.config",
                "Invalid endpoint URL".to_string(),
                BTreeMap::new(),
            ),

            Error::InvalidHeader(reason) => (
                "billingo.config",
                format!("Invalid header value: {reason}"),
                BTreeMap::new(),
            ),

            Error::Io(source) => ("billingo.io", format!("I/O error: {source}"), BTreeMap::new()),
        };

        Breadcrumb {
            ty: "error".to_string(),
            category: Some(category.to_string()),
            message: Some(message),
            data,
            level: sentry_core::Level::Error,
            ..Default::default()
        }
    }
}

/// Convert a billingo-rs Error into Sentry context data.
///
/// # Example
///
/// ```ignore
/// use sentry::configure_scope;
/// use billingo_rs::sentry_integration::error_to_sentry_context;
///
/// if let Err(e) = billingo.partner().get_partner(42).await {
///     configure_scope(|scope| {
///         for (key, value) in error_to_sentry_context(&e) {
///             scope.set_extra(&key, value);
///         }
///     });
/// }
/// ```
pub fn error_to_sentry_context(error: &Error) -> BTreeMap<String, Value> {
    let mut context = BTreeMap::new();

    if let Some(span_trace) = error.span_trace() {
        context.insert(
            "billingo.span_trace".to_string(),
            Value::from(format!("{span_trace}")),
        );
    }

    if let Some(url) = error.url() {
        context.insert("billingo.url".to_string(), Value::from(url.to_string()));
    }

    if let Some(status) = error.status_code() {
        context.insert(
            "billingo.status_code".to_string(),
            Value::from(status.as_u16()),
        );
    }

    if let Some(body) = error.response_body() {
        let preview: String = body.chars().take(MAX_BODY_PREVIEW).collect();
        let preview = if preview.len() < body.len() {
            format!("{preview}...")
        } else {
            preview
        };
        context.insert("billingo.response_body".to_string(), Value::from(preview));
    }

    if let Some(body) = error.api_error_body() {
        context.insert(
            "billingo.message".to_string(),
            Value::from(body.message().to_string()),
        );
    }

    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::{StatusCode, header::HeaderMap};
    use tracing_error::SpanTrace;

    fn validation_error() -> Error {
        Error::Api {
            status_code: StatusCode::UNPROCESSABLE_ENTITY,
            url: "https://api.billingo.hu/v3/partners".to_string(),
            response_body: r#"{"message":"The given data was invalid.","errors":[{"field":"name","message":"required"}]}"#.to_string(),
            headers: HeaderMap::new(),
            span_trace: SpanTrace::capture(),
        }
    }

    #[test]
    fn api_error_breadcrumb() {
        let crumb = Breadcrumb::from(&validation_error());
        assert_eq!(crumb.category.as_deref(), Some("billingo.api"));
        assert_eq!(crumb.data.get("status_code"), Some(&Value::from(422u16)));
        assert_eq!(
            crumb.data.get("message"),
            Some(&Value::from("The given data was invalid."))
        );
    }

    #[test]
    fn context_contains_http_details() {
        let context = error_to_sentry_context(&validation_error());
        assert_eq!(
            context.get("billingo.url"),
            Some(&Value::from("https://api.billingo.hu/v3/partners"))
        );
        assert!(context.contains_key("billingo.response_body"));
        assert!(context.contains_key("billingo.span_trace"));
    }

    #[test]
    fn validation_breadcrumb_names_parameter() {
        let error = Error::InvalidArgument {
            parameter: "id",
            reason: "must not be negative".to_string(),
        };
        let crumb = Breadcrumb::from(&error);
        assert_eq!(crumb.category.as_deref(), Some("billingo.validation"));
        assert_eq!(crumb.data.get("parameter"), Some(&Value::from("id")));
    }
}
