use std::fmt;
use url::Url;

use crate::error::{Error, Result};

/// A typed representation of Billingo API endpoints.
///
/// Paths are relative to the configured host, so the same endpoint can be
/// resolved against production or a mock server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillingoEndpoint {
    BankAccounts,
    BankAccount(i64),

    Currencies,

    DocumentBlocks,

    Documents,
    Document(i64),
    DocumentByVendor(String),
    DocumentCancel(i64),
    DocumentCopy(i64),
    DocumentFromProforma(i64),
    DocumentDownload(i64),
    DocumentOnlineSzamla(i64),
    DocumentPayments(i64),
    DocumentPublicUrl(i64),
    DocumentSend(i64),

    DocumentExports,
    DocumentExportPoll(String),
    DocumentExportDownload(String),

    Organization,

    Partners,
    Partner(i64),

    Products,
    Product(i64),

    Spendings,
    Spending(i64),

    CheckTaxNumber(String),
    ServerTime,
    ConvertLegacyId(i64),
}

impl BillingoEndpoint {
    /// Path segments below the host. Values are percent-encoded by [`Url`].
    #[must_use]
    pub fn segments(&self) -> Vec<String> {
        fn with_id(resource: &str, id: i64) -> Vec<String> {
            vec![resource.to_string(), id.to_string()]
        }
        fn document_action(id: i64, action: &str) -> Vec<String> {
            vec!["documents".to_string(), id.to_string(), action.to_string()]
        }

        match self {
            Self::BankAccounts => vec!["bank-accounts".to_string()],
            Self::BankAccount(id) => with_id("bank-accounts", *id),
            Self::Currencies => vec!["currencies".to_string()],
            Self::DocumentBlocks => vec!["document-blocks".to_string()],
            Self::Documents => vec!["documents".to_string()],
            Self::Document(id) => with_id("documents", *id),
            Self::DocumentByVendor(vendor_id) => vec![
                "documents".to_string(),
                "vendor".to_string(),
                vendor_id.clone(),
            ],
            Self::DocumentCancel(id) => document_action(*id, "cancel"),
            Self::DocumentCopy(id) => document_action(*id, "copy"),
            Self::DocumentFromProforma(id) => document_action(*id, "create-from-proforma"),
            Self::DocumentDownload(id) => document_action(*id, "download"),
            Self::DocumentOnlineSzamla(id) => document_action(*id, "online-szamla"),
            Self::DocumentPayments(id) => document_action(*id, "payments"),
            Self::DocumentPublicUrl(id) => document_action(*id, "public-url"),
            Self::DocumentSend(id) => document_action(*id, "send"),
            Self::DocumentExports => vec!["document-export".to_string()],
            Self::DocumentExportPoll(id) => {
                vec!["document-export".to_string(), id.clone(), "poll".to_string()]
            }
            Self::DocumentExportDownload(id) => vec![
                "document-export".to_string(),
                id.clone(),
                "download".to_string(),
            ],
            Self::Organization => vec!["organization".to_string()],
            Self::Partners => vec!["partners".to_string()],
            Self::Partner(id) => with_id("partners", *id),
            Self::Products => vec!["products".to_string()],
            Self::Product(id) => with_id("products", *id),
            Self::Spendings => vec!["spendings".to_string()],
            Self::Spending(id) => with_id("spendings", *id),
            Self::CheckTaxNumber(tax_number) => vec![
                "utils".to_string(),
                "check-tax-number".to_string(),
                tax_number.clone(),
            ],
            Self::ServerTime => vec!["utils".to_string(), "time".to_string()],
            Self::ConvertLegacyId(id) => vec![
                "utils".to_string(),
                "convert-legacy-id".to_string(),
                id.to_string(),
            ],
        }
    }

    /// Resolves the endpoint against `host`, e.g. `https://api.billingo.hu/v3`.
    pub fn to_url(&self, host: &str) -> Result<Url> {
        let mut url = Url::parse(host).map_err(|_| Error::InvalidEndpoint)?;
        url.path_segments_mut()
            .map_err(|()| Error::InvalidEndpoint)?
            .pop_if_empty()
            .extend(self.segments());
        Ok(url)
    }
}

impl fmt::Display for BillingoEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.segments().join("/"))
    }
}
