use super::currency::{format_percent, format_usd};
use super::positioning::PositioningLanguage;
use crate::pricing::directory::PartnerDirectory;
use crate::pricing::domain::{DealType, PricingResult, ProtectionRate, Tier};
use crate::pricing::engine::evaluate;
use crate::pricing::input::{InputGap, QuoteField, QuoteForm};
use crate::pricing::rules::protection_rate;
use serde::Serialize;

pub const FLOOR_PRICE_DISCLAIMER: &str = "Price protection sets the floor price we won't quote \
     under; it's not the customer price. Resellers set their own margins, and many choose to \
     price well below their protection level.";

pub const LEGACY_NOTICE: &str = "Legacy deal (before Feb 9, 2026)";

pub const LEGACY_FOOTNOTE: &str = "Legacy deals are contracts that began before February 9, 2026";

/// Display-ready rendering of a [`PricingResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingSummaryView {
    pub partner_name: String,
    pub partner_tier: Tier,
    pub tier_label: &'static str,
    pub deal_type: DealType,
    pub deal_type_label: &'static str,
    pub incumbent_price: String,
    pub protection_rate: String,
    pub discount_amount: String,
    pub non_incumbent_price: String,
    pub is_legacy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy_notice: Option<&'static str>,
    pub positioning: PositioningLanguage,
}

impl PricingSummaryView {
    pub fn from_result(result: &PricingResult) -> Self {
        Self {
            partner_name: result.partner_name.clone(),
            partner_tier: result.partner_tier,
            tier_label: result.partner_tier.label(),
            deal_type: result.deal_type,
            deal_type_label: result.deal_type.label(),
            incumbent_price: format_usd(result.incumbent_price),
            protection_rate: format_percent(result.discount_rate_percent),
            discount_amount: format_usd(result.discount_amount),
            non_incumbent_price: format_usd(result.non_incumbent_price),
            is_legacy: result.is_legacy,
            legacy_notice: result.is_legacy.then_some(LEGACY_NOTICE),
            positioning: PositioningLanguage::for_result(result),
        }
    }
}

/// Response to a quote request: either a priced deal or a prompt for the
/// field still needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QuoteOutcomeView {
    Computed {
        result: PricingResult,
        summary: PricingSummaryView,
    },
    Incomplete {
        missing: QuoteField,
        message: String,
    },
}

impl QuoteOutcomeView {
    pub fn from_form(form: &QuoteForm) -> Self {
        let priced = form.validate().and_then(|input| {
            evaluate(&input).ok_or_else(|| {
                InputGap::InvalidIncumbentPrice(input.incumbent_price.to_string())
            })
        });

        match priced {
            Ok(result) => {
                let summary = PricingSummaryView::from_result(&result);
                Self::Computed { result, summary }
            }
            Err(gap) => Self::Incomplete {
                missing: gap.field(),
                message: format!("Fill in all fields to calculate pricing: {gap}"),
            },
        }
    }

    pub fn result(&self) -> Option<&PricingResult> {
        match self {
            Self::Computed { result, .. } => Some(result),
            Self::Incomplete { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierRuleView {
    pub tier: Tier,
    pub heading: String,
    pub partners: Vec<&'static str>,
    pub rules: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingRulesReference {
    pub tiers: Vec<TierRuleView>,
    pub footnote: &'static str,
}

impl PricingRulesReference {
    /// Builds the reference card from the live schedule so the two cannot drift.
    pub fn standard() -> Self {
        let directory = PartnerDirectory::standard();
        let tiers = Tier::ordered()
            .into_iter()
            .map(|tier| {
                let partners = directory.partners_in(tier);
                let coverage = if partners.is_empty() {
                    "All others".to_string()
                } else {
                    partners.join(", ")
                };
                TierRuleView {
                    tier,
                    heading: format!("{}s ({coverage})", tier.label()),
                    partners,
                    rules: tier_rule_lines(tier),
                }
            })
            .collect();

        Self {
            tiers,
            footnote: LEGACY_FOOTNOTE,
        }
    }
}

fn tier_rule_lines(tier: Tier) -> Vec<String> {
    let new_business = protection_rate(tier, DealType::NewLogo, false);
    let renewal = protection_rate(tier, DealType::Renewal, false);
    let legacy = protection_rate(tier, DealType::NewLogo, true);

    let uniform = DealType::ordered().into_iter().all(|deal_type| {
        protection_rate(tier, deal_type, false) == new_business
            && protection_rate(tier, deal_type, true) == new_business
    });

    if uniform {
        return vec![rule_line("All deal types", new_business)];
    }

    vec![
        rule_line("New Logo/Cross-Sell", new_business),
        rule_line("Renewals and Expansions", renewal),
        rule_line("Legacy Deals", legacy),
    ]
}

fn rule_line(scope: &str, rate: ProtectionRate) -> String {
    format!("{scope}: {rate} price protection")
}
