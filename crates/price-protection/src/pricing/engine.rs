use super::directory::PartnerDirectory;
use super::domain::{PricingInput, PricingResult, Tier};
use super::input::QuoteForm;
use super::rules::{is_legacy, protection_rate};

/// Tier for `partner_name`, falling back to authorized for unlisted partners.
pub fn resolve_tier(partner_name: &str) -> Tier {
    PartnerDirectory::standard().resolve(partner_name)
}

/// Applies the protection policy to a validated input.
///
/// Returns `None` when the floor price does not fit in a [`Decimal`]; forms
/// validated through [`QuoteForm::validate`] stay well below that bound.
///
/// [`Decimal`]: rust_decimal::Decimal
pub fn evaluate(input: &PricingInput) -> Option<PricingResult> {
    let partner_tier = resolve_tier(&input.partner_name);
    let legacy = is_legacy(input.contract_date);
    let rate = protection_rate(partner_tier, input.deal_type, legacy);

    let discount_amount = input.incumbent_price.checked_mul(rate.fraction())?;
    // Protection raises the floor above the incumbent's price.
    let non_incumbent_price = input.incumbent_price.checked_add(discount_amount)?;

    Some(PricingResult {
        incumbent_price: input.incumbent_price,
        discount_rate_percent: rate.percent(),
        discount_amount,
        non_incumbent_price,
        deal_type: input.deal_type,
        is_legacy: legacy,
        partner_tier,
        partner_name: input.partner_name.clone(),
    })
}

/// Prices a raw form, or returns `None` while it is incomplete or invalid.
pub fn calculate(form: &QuoteForm) -> Option<PricingResult> {
    form.validate().ok().and_then(|input| evaluate(&input))
}
