use serde::{Deserialize, Serialize};

use super::currency::Currency;
use super::impl_model;

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BankAccount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number_iban: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub need_qr: Option<bool>,
}

impl_model!(
    BankAccount,
    [
        "id",
        "name",
        "account_number",
        "account_number_iban",
        "swift",
        "currency",
        "need_qr",
    ]
);

impl BankAccount {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        account_number: impl Into<String>,
        currency: Currency,
    ) -> Self {
        Self {
            name: Some(name.into()),
            account_number: Some(account_number.into()),
            currency: Some(currency),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_iban(mut self, iban: impl Into<String>) -> Self {
        self.account_number_iban = Some(iban.into());
        self
    }

    #[must_use]
    pub fn with_swift(mut self, swift: impl Into<String>) -> Self {
        self.swift = Some(swift.into());
        self
    }
}

/// Parameters for listing bank accounts
#[derive(Debug, Serialize, Default, Clone)]
pub struct ListParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl ListParameters {
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn bank_account_builder() {
        let account = BankAccount::new("Main account", "12345678-12345678-12345678", Currency::Huf)
            .with_iban("HU42123456781234567812345678")
            .with_swift("GIBAHUHB");

        assert_eq!(
            serde_json::to_value(&account).unwrap(),
            json!({
                "name": "Main account",
                "account_number": "12345678-12345678-12345678",
                "account_number_iban": "HU42123456781234567812345678",
                "swift": "GIBAHUHB",
                "currency": "HUF"
            })
        );
    }
}
