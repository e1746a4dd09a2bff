use crate::api::{require_id, require_non_empty};
use crate::client::Client;
use crate::configuration::Configuration;
use crate::endpoints::BillingoEndpoint;
use crate::entities::util::{Id, ServerTime, TaxNumber};
use crate::error::Result;

/// API handler for Util endpoints
#[derive(Clone, Debug)]
pub struct UtilApi {
    client: Client,
}

impl UtilApi {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        self.client.configuration()
    }

    /// Validate a Hungarian tax number
    #[instrument(skip(self))]
    pub async fn check_tax_number(&self, tax_number: &str) -> Result<TaxNumber> {
        let tax_number = require_non_empty("tax_number", tax_number)?;
        self.client
            .get(BillingoEndpoint::CheckTaxNumber(tax_number), &())
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_server_time(&self) -> Result<ServerTime> {
        self.client.get(BillingoEndpoint::ServerTime, &()).await
    }

    /// Resolve a legacy (API v2) identifier to its v3 id
    #[instrument(skip(self))]
    pub async fn get_id(&self, legacy_id: i64) -> Result<Id> {
        let legacy_id = require_id("legacy_id", legacy_id)?;
        self.client
            .get(BillingoEndpoint::ConvertLegacyId(legacy_id), &())
            .await
    }
}
