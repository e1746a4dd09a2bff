use time::Date;

use crate::client::Client;
use crate::configuration::Configuration;
use crate::endpoints::BillingoEndpoint;
use crate::entities::currency::{ConversionRate, ConversionRateQuery, Currency};
use crate::error::Result;

/// API handler for Currency endpoints
#[derive(Clone, Debug)]
pub struct CurrencyApi {
    client: Client,
}

impl CurrencyApi {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        self.client.configuration()
    }

    /// Exchange rate from `from` to `to`, for `date` or today when `None`.
    ///
    /// An [`Unknown`](Currency::Unknown) currency is rejected while the query is
    /// encoded, before anything is sent.
    #[instrument(skip(self))]
    pub async fn get_conversion_rate(
        &self,
        from: Currency,
        to: Currency,
        date: Option<Date>,
    ) -> Result<ConversionRate> {
        let query = ConversionRateQuery { from, to, date };
        self.client.get(BillingoEndpoint::Currencies, &query).await
    }
}
