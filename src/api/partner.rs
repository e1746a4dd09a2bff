use crate::api::require_id;
use crate::client::Client;
use crate::configuration::Configuration;
use crate::endpoints::BillingoEndpoint;
use crate::entities::PartnerList;
use crate::entities::partner::{ListParameters, Partner};
use crate::error::Result;

/// API handler for Partner endpoints
#[derive(Clone, Debug)]
pub struct PartnerApi {
    client: Client,
}

impl PartnerApi {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        self.client.configuration()
    }

    /// List partners, one page at a time
    #[instrument(skip(self))]
    pub async fn list_partners(&self, parameters: &ListParameters) -> Result<PartnerList> {
        self.client.get(BillingoEndpoint::Partners, parameters).await
    }

    /// Create a partner; the returned partner carries the assigned id
    #[instrument(skip(self, partner))]
    pub async fn create_partner(&self, partner: &Partner) -> Result<Partner> {
        self.client
            .post(BillingoEndpoint::Partners, Some(partner))
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_partner(&self, id: i64) -> Result<Partner> {
        let id = require_id("id", id)?;
        self.client.get(BillingoEndpoint::Partner(id), &()).await
    }

    /// Replace a partner
    #[instrument(skip(self, partner))]
    pub async fn update_partner(&self, id: i64, partner: &Partner) -> Result<Partner> {
        let id = require_id("id", id)?;
        self.client.put(BillingoEndpoint::Partner(id), partner).await
    }

    #[instrument(skip(self))]
    pub async fn delete_partner(&self, id: i64) -> Result<()> {
        let id = require_id("id", id)?;
        self.client
            .delete::<serde::de::IgnoredAny>(BillingoEndpoint::Partner(id))
            .await?;
        Ok(())
    }
}
