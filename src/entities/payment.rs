use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;

use super::impl_model;
use crate::utils::date_format::billingo_date_format_option;

string_enum! {
    /// How a document is (to be) paid.
    pub enum PaymentMethod {
        Aruhitel => "aruhitel",
        Bankcard => "bankcard",
        Barion => "barion",
        Barter => "barter",
        Cash => "cash",
        CashOnDelivery => "cash_on_delivery",
        Coupon => "coupon",
        Ebay => "ebay",
        EloreUtalas => "elore_utalas",
        EpKartya => "ep_kartya",
        Kompenzacio => "kompenzacio",
        Levonas => "levonas",
        OnlineBankcard => "online_bankcard",
        Other => "other",
        Paylike => "paylike",
        Payoneer => "payoneer",
        Paypal => "paypal",
        PaypalUtolag => "paypal_utolag",
        Payu => "payu",
        PickPackPont => "pick_pack_pont",
        PostaiCsekk => "postai_csekk",
        Postautalvany => "postautalvany",
        Skrill => "skrill",
        SzepCard => "szep_card",
        Transferwise => "transferwise",
        Upwork => "upwork",
        Utalvany => "utalvany",
        Valto => "valto",
        WireTransfer => "wire_transfer",
    }
}

string_enum! {
    pub enum PaymentStatus {
        Expired => "expired",
        None => "none",
        Outstanding => "outstanding",
        Paid => "paid",
        PartiallyPaid => "partially_paid",
    }
}

/// One recorded payment against a document.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PaymentHistory {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "billingo_date_format_option"
    )]
    pub date: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voucher_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_rate: Option<f64>,
}

impl_model!(
    PaymentHistory,
    ["date", "price", "payment_method", "voucher_number", "conversion_rate"]
);

impl PaymentHistory {
    #[must_use]
    pub fn new(date: Date, price: Decimal, payment_method: PaymentMethod) -> Self {
        Self {
            date: Some(date),
            price: Some(price),
            payment_method: Some(payment_method),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde_json::json;
    use time::macros::date;

    use super::*;

    #[test]
    fn payment_history_serializes_set_fields_only() {
        let payment = PaymentHistory::new(date!(2024 - 01 - 15), dec!(75000), PaymentMethod::Cash);
        let value = serde_json::to_value(&payment).unwrap();
        assert_eq!(
            value,
            json!({ "date": "2024-01-15", "price": 75000.0, "payment_method": "cash" })
        );
    }

    #[test]
    fn payment_method_literals() {
        assert_eq!(PaymentMethod::WireTransfer.as_str(), "wire_transfer");
        assert_eq!(PaymentMethod::SzepCard.as_str(), "szep_card");
        for method in ["cash", "bankcard", "barion", "paypal", "szep_card", "wire_transfer"] {
            assert!(PaymentMethod::allowable_values().contains(&method));
        }
    }

    #[test]
    fn payment_status_from_server() {
        let status: PaymentStatus = serde_json::from_value(json!("partially_paid")).unwrap();
        assert_eq!(status, PaymentStatus::PartiallyPaid);
    }
}
