use super::currency::{format_percent, format_usd};
use crate::pricing::domain::PricingResult;
use serde::Serialize;

/// Talk tracks for the two conversations a protected deal triggers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositioningLanguage {
    /// Guidance when another partner asks us for a quote.
    pub pricing_inquiry: String,
    pub incumbent_framing: String,
    pub non_incumbent_framing: String,
}

impl PositioningLanguage {
    pub fn for_result(result: &PricingResult) -> Self {
        let floor = format_usd(result.non_incumbent_price);
        let incumbent = format_usd(result.incumbent_price);
        let rate = format_percent(result.discount_rate_percent);

        Self {
            pricing_inquiry: format!(
                "Quote no lower than {floor} per license ({rate} price protection applied)."
            ),
            incumbent_framing: format!(
                "You're priced at {incumbent} with {rate} protection, so you're covered up to \
                 about {floor}. Even if the district comes to us directly, we won't go under \
                 your protected level. And of course, if anything ever feels off-track in the \
                 account, we'll connect with you so we're aligned on the right next steps."
            ),
            non_incumbent_framing: format!(
                "We have an existing partner relationship with this account. To maintain \
                 fairness across our partner ecosystem, the floor price we can offer is \
                 {floor} per license. This ensures we're supporting all our partners \
                 equitably while giving you a competitive opportunity to earn the business."
            ),
        }
    }
}
