use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Partner program level that drives which protection schedule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Enterprise,
    Growth,
    Territory,
    Authorized,
}

impl Tier {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Enterprise,
            Self::Growth,
            Self::Territory,
            Self::Authorized,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Enterprise => "Enterprise Partner",
            Self::Growth => "Growth Partner",
            Self::Territory => "Territory Partner",
            Self::Authorized => "Authorized Partner",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum DealType {
    #[default]
    NewLogo,
    CrossSell,
    Renewal,
}

impl DealType {
    pub const fn ordered() -> [Self; 3] {
        [Self::NewLogo, Self::CrossSell, Self::Renewal]
    }

    /// Identifier used on the wire and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NewLogo => "new-logo",
            Self::CrossSell => "cross-sell",
            Self::Renewal => "renewal",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NewLogo => "New Logo",
            Self::CrossSell => "Cross-Sell",
            Self::Renewal => "Renewal and Expansion",
        }
    }
}

impl fmt::Display for DealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized deal type '{0}' (expected new-logo, cross-sell, or renewal)")]
pub struct UnknownDealType(pub String);

impl FromStr for DealType {
    type Err = UnknownDealType;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|deal_type| deal_type.as_str() == raw)
            .ok_or_else(|| UnknownDealType(raw.to_string()))
    }
}

/// The only protection levels the policy can grant.
///
/// Keeping this closed means there is no "no protection" outcome to fall back to
/// when a tier is not recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProtectionRate {
    Fifteen,
    Twenty,
    TwentyFive,
}

impl ProtectionRate {
    pub const fn whole_percent(self) -> u8 {
        match self {
            Self::Fifteen => 15,
            Self::Twenty => 20,
            Self::TwentyFive => 25,
        }
    }

    pub fn percent(self) -> Decimal {
        Decimal::from(self.whole_percent())
    }

    /// Multiplier applied to the incumbent price, e.g. `0.25`.
    pub fn fraction(self) -> Decimal {
        match self {
            Self::Fifteen => dec!(0.15),
            Self::Twenty => dec!(0.20),
            Self::TwentyFive => dec!(0.25),
        }
    }
}

impl fmt::Display for ProtectionRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.whole_percent())
    }
}

/// Validated calculator input. Build one from raw form state with
/// [`QuoteForm::validate`](super::QuoteForm::validate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingInput {
    pub partner_name: String,
    pub incumbent_price: Decimal,
    pub contract_date: NaiveDate,
    pub deal_type: DealType,
}

/// Outcome of applying the protection policy to a single deal.
///
/// Amounts keep the full precision of the multiplication; rounding to cents is
/// a display concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingResult {
    pub incumbent_price: Decimal,
    pub discount_rate_percent: Decimal,
    pub discount_amount: Decimal,
    pub non_incumbent_price: Decimal,
    pub deal_type: DealType,
    pub is_legacy: bool,
    pub partner_tier: Tier,
    pub partner_name: String,
}
