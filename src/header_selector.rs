use reqwest::header::{self, HeaderMap, HeaderValue};

use crate::error::{Error, Result};

const JSON: &str = "application/json";

/// Computes the `Accept` and `Content-Type` headers for a request.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeaderSelector;

/// Output of [`HeaderSelector::select_headers`]. `None` means the header is not sent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectedHeaders {
    pub accept: Option<String>,
    pub content_type: Option<String>,
}

impl HeaderSelector {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// `Accept` is the given media types joined with `", "` in order, or absent when
    /// there are none. `Content-Type` is absent for multipart bodies, since the
    /// boundary is chosen by the encoder, and falls back to JSON when empty.
    #[must_use]
    pub fn select_headers(
        &self,
        accept: &[&str],
        content_type: &str,
        is_multipart: bool,
    ) -> SelectedHeaders {
        let accept = (!accept.is_empty()).then(|| accept.join(", "));

        let content_type = if is_multipart {
            None
        } else if content_type.is_empty() {
            Some(JSON.to_string())
        } else {
            Some(content_type.to_string())
        };

        SelectedHeaders {
            accept,
            content_type,
        }
    }
}

impl SelectedHeaders {
    pub fn to_header_map(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        if let Some(accept) = &self.accept {
            headers.insert(header::ACCEPT, header_value(accept)?);
        }
        if let Some(content_type) = &self.content_type {
            headers.insert(header::CONTENT_TYPE, header_value(content_type)?);
        }
        Ok(headers)
    }
}

pub(crate) fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| Error::InvalidHeader(e.to_string()))
}
