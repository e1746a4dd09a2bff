//! Resource clients, one per group of Billingo endpoints.
//!
//! Every client owns a clone of the shared [`Client`](crate::Client). Identifiers
//! and required path strings are validated before any request is made.

use crate::error::{Error, Result};

pub mod bank_account;
pub mod currency;
pub mod document;
pub mod document_block;
pub mod document_export;
pub mod organization;
pub mod partner;
pub mod product;
pub mod spending;
pub mod util;

pub use bank_account::BankAccountApi;
pub use currency::CurrencyApi;
pub use document::DocumentApi;
pub use document_block::DocumentBlockApi;
pub use document_export::DocumentExportApi;
pub use organization::OrganizationApi;
pub use partner::PartnerApi;
pub use product::ProductApi;
pub use spending::SpendingApi;
pub use util::UtilApi;

/// Rejects negative identifiers.
pub(crate) fn require_id(parameter: &'static str, id: i64) -> Result<i64> {
    if id < 0 {
        return Err(Error::InvalidArgument {
            parameter,
            reason: format!("must be greater than or equal to 0, got {id}"),
        });
    }
    Ok(id)
}

/// Rejects empty (or whitespace-only) path strings.
pub(crate) fn require_non_empty(parameter: &'static str, value: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(Error::InvalidArgument {
            parameter,
            reason: "must not be empty".to_string(),
        });
    }
    Ok(value.to_string())
}
