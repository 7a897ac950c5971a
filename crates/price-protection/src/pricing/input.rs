use super::domain::{DealType, PricingInput, UnknownDealType};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Largest per-license price the calculator accepts.
pub const MAX_INCUMBENT_PRICE: Decimal = dec!(1000000000000);

/// Raw calculator state as a form or request collects it. Every field may be
/// missing while the user is still typing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteForm {
    #[serde(default)]
    pub partner: Option<String>,
    #[serde(default, deserialize_with = "deserialize_amount_text")]
    pub incumbent_price: Option<String>,
    #[serde(default)]
    pub contract_date: Option<String>,
    #[serde(default)]
    pub deal_type: Option<String>,
}

/// Field that keeps a form from being priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteField {
    Partner,
    IncumbentPrice,
    ContractDate,
    DealType,
}

impl QuoteField {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Partner => "Partner",
            Self::IncumbentPrice => "Incumbent Price",
            Self::ContractDate => "Original Contract Date",
            Self::DealType => "Deal Type",
        }
    }
}

/// Why a form is not yet computable. This is a prompt for the user, not a
/// failure of the calculation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputGap {
    #[error("select a partner")]
    MissingPartner,
    #[error("enter the incumbent price")]
    MissingIncumbentPrice,
    #[error("incumbent price '{0}' must be a positive amount no greater than 1000000000000")]
    InvalidIncumbentPrice(String),
    #[error("enter the original contract date")]
    MissingContractDate,
    #[error("contract date '{0}' must be formatted YYYY-MM-DD")]
    InvalidContractDate(String),
    #[error(transparent)]
    UnknownDealType(#[from] UnknownDealType),
}

impl InputGap {
    pub fn field(&self) -> QuoteField {
        match self {
            InputGap::MissingPartner => QuoteField::Partner,
            InputGap::MissingIncumbentPrice | InputGap::InvalidIncumbentPrice(_) => {
                QuoteField::IncumbentPrice
            }
            InputGap::MissingContractDate | InputGap::InvalidContractDate(_) => {
                QuoteField::ContractDate
            }
            InputGap::UnknownDealType(_) => QuoteField::DealType,
        }
    }
}

impl QuoteForm {
    pub fn new(
        partner: impl Into<String>,
        incumbent_price: impl Into<String>,
        contract_date: impl Into<String>,
        deal_type: DealType,
    ) -> Self {
        Self {
            partner: Some(partner.into()),
            incumbent_price: Some(incumbent_price.into()),
            contract_date: Some(contract_date.into()),
            deal_type: Some(deal_type.as_str().to_string()),
        }
    }

    /// Checks fields in form order and reports the first gap.
    ///
    /// The partner name is taken verbatim; only an empty name counts as missing.
    pub fn validate(&self) -> Result<PricingInput, InputGap> {
        let partner_name = match self.partner.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => return Err(InputGap::MissingPartner),
        };

        let incumbent_price = match non_blank(self.incumbent_price.as_deref()) {
            Some(raw) => parse_incumbent_price(raw)
                .ok_or_else(|| InputGap::InvalidIncumbentPrice(raw.to_string()))?,
            None => return Err(InputGap::MissingIncumbentPrice),
        };

        let contract_date = match non_blank(self.contract_date.as_deref()) {
            Some(raw) => parse_contract_date(raw)
                .ok_or_else(|| InputGap::InvalidContractDate(raw.to_string()))?,
            None => return Err(InputGap::MissingContractDate),
        };

        let deal_type = match non_blank(self.deal_type.as_deref()) {
            Some(raw) => raw.parse::<DealType>()?,
            None => DealType::default(),
        };

        Ok(PricingInput {
            partner_name,
            incumbent_price,
            contract_date,
            deal_type,
        })
    }
}

/// Accepts the price as either a JSON string or a bare number.
fn deserialize_amount_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

/// Parses a plain decimal amount; anything non-numeric, zero, negative, or
/// above [`MAX_INCUMBENT_PRICE`] is rejected.
pub fn parse_incumbent_price(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim()).ok().filter(|price| {
        price.is_sign_positive() && !price.is_zero() && *price <= MAX_INCUMBENT_PRICE
    })
}

pub fn parse_contract_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}
