use crate::api::require_id;
use crate::client::Client;
use crate::configuration::Configuration;
use crate::endpoints::BillingoEndpoint;
use crate::entities::BankAccountList;
use crate::entities::bank_account::{BankAccount, ListParameters};
use crate::error::Result;

/// API handler for Bank account endpoints
#[derive(Clone, Debug)]
pub struct BankAccountApi {
    client: Client,
}

impl BankAccountApi {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        self.client.configuration()
    }

    /// List the organization's bank accounts
    #[instrument(skip(self))]
    pub async fn list_bank_accounts(&self, parameters: &ListParameters) -> Result<BankAccountList> {
        self.client.get(BillingoEndpoint::BankAccounts, parameters).await
    }

    /// Register a bank account
    #[instrument(skip(self, bank_account))]
    pub async fn create_bank_account(&self, bank_account: &BankAccount) -> Result<BankAccount> {
        self.client
            .post(BillingoEndpoint::BankAccounts, Some(bank_account))
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_bank_account(&self, id: i64) -> Result<BankAccount> {
        let id = require_id("id", id)?;
        self.client.get(BillingoEndpoint::BankAccount(id), &()).await
    }

    /// Replace a bank account
    #[instrument(skip(self, bank_account))]
    pub async fn update_bank_account(&self, id: i64, bank_account: &BankAccount) -> Result<BankAccount> {
        let id = require_id("id", id)?;
        self.client.put(BillingoEndpoint::BankAccount(id), bank_account).await
    }

    #[instrument(skip(self))]
    pub async fn delete_bank_account(&self, id: i64) -> Result<()> {
        let id = require_id("id", id)?;
        self.client
            .delete::<serde::de::IgnoredAny>(BillingoEndpoint::BankAccount(id))
            .await?;
        Ok(())
    }
}
