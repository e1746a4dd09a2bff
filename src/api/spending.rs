use crate::api::require_id;
use crate::client::Client;
use crate::configuration::Configuration;
use crate::endpoints::BillingoEndpoint;
use crate::entities::SpendingList;
use crate::entities::spending::{ListParameters, Spending, SpendingSave};
use crate::error::Result;

/// API handler for Spending endpoints
#[derive(Clone, Debug)]
pub struct SpendingApi {
    client: Client,
}

impl SpendingApi {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        self.client.configuration()
    }

    #[instrument(skip(self))]
    pub async fn list_spendings(&self, parameters: &ListParameters) -> Result<SpendingList> {
        self.client.get(BillingoEndpoint::Spendings, parameters).await
    }

    /// Record an expense
    #[instrument(skip(self, spending))]
    pub async fn create_spending(&self, spending: &SpendingSave) -> Result<Spending> {
        self.client
            .post(BillingoEndpoint::Spendings, Some(spending))
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_spending(&self, id: i64) -> Result<Spending> {
        let id = require_id("id", id)?;
        self.client.get(BillingoEndpoint::Spending(id), &()).await
    }

    #[instrument(skip(self, spending))]
    pub async fn update_spending(&self, id: i64, spending: &SpendingSave) -> Result<Spending> {
        let id = require_id("id", id)?;
        self.client.put(BillingoEndpoint::Spending(id), spending).await
    }

    #[instrument(skip(self))]
    pub async fn delete_spending(&self, id: i64) -> Result<()> {
        let id = require_id("id", id)?;
        self.client
            .delete::<serde::de::IgnoredAny>(BillingoEndpoint::Spending(id))
            .await?;
        Ok(())
    }
}
