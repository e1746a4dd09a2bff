use serde::{Deserialize, Serialize};
use time::Date;

use super::impl_model;
use crate::utils::date_format::billingo_date_format_option;

string_enum! {
    /// ISO 4217 currency codes accepted by Billingo.
    pub enum Currency {
        Aed => "AED",
        Aud => "AUD",
        Bgn => "BGN",
        Brl => "BRL",
        Cad => "CAD",
        Chf => "CHF",
        Cny => "CNY",
        Czk => "CZK",
        Dkk => "DKK",
        Eur => "EUR",
        Gbp => "GBP",
        Hkd => "HKD",
        Hrk => "HRK",
        Huf => "HUF",
        Idr => "IDR",
        Ils => "ILS",
        Inr => "INR",
        Isk => "ISK",
        Jpy => "JPY",
        Krw => "KRW",
        Mxn => "MXN",
        Myr => "MYR",
        Nok => "NOK",
        Nzd => "NZD",
        Php => "PHP",
        Pln => "PLN",
        Ron => "RON",
        Rsd => "RSD",
        Rub => "RUB",
        Sek => "SEK",
        Sgd => "SGD",
        Thb => "THB",
        Try => "TRY",
        Uah => "UAH",
        Usd => "USD",
        Zar => "ZAR",
    }
}

/// Exchange rate between two currencies on a given day.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ConversionRate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_currency: Option<Currency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_currency: Option<Currency>,
    // The API spells this field "conversation".
    #[serde(
        rename = "conversation_rate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub conversion_rate: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "billingo_date_format_option"
    )]
    pub date: Option<Date>,
}

impl_model!(
    ConversionRate,
    ["from_currency", "to_currency", "conversation_rate", "date"]
);

/// Query for `GET /currencies`.
#[derive(Clone, Debug, Serialize)]
pub(crate) struct ConversionRateQuery {
    pub from: Currency,
    pub to: Currency,
    #[serde(skip_serializing_if = "Option::is_none", with = "billingo_date_format_option")]
    pub date: Option<Date>,
}
