use super::common::*;
use rust_decimal_macros::dec;

use crate::pricing::directory::{PartnerDirectory, OTHER_AUTHORIZED_PARTNER};
use crate::pricing::domain::{DealType, Tier};
use crate::pricing::input::QuoteForm;
use crate::pricing::rules::LEGACY_CUTOFF;
use crate::pricing::{calculate, evaluate, resolve_tier, MAX_INCUMBENT_PRICE};
use rust_decimal::Decimal;

#[test]
fn enterprise_new_logo_after_cutoff_gets_twenty_five_percent() {
    let result = priced(input(
        "CDW",
        DealType::NewLogo,
        dec!(1000),
        date(2026, 6, 1),
    ));

    assert_eq!(result.partner_tier, Tier::Enterprise);
    assert!(!result.is_legacy);
    assert_eq!(result.discount_rate_percent, dec!(25));
    assert_eq!(result.discount_amount, dec!(250));
    assert_eq!(result.non_incumbent_price, dec!(1250));
}

#[test]
fn territory_legacy_renewal_falls_back_to_fifteen_percent() {
    let result = priced(input(
        "Connection",
        DealType::Renewal,
        dec!(2000),
        date(2025, 1, 1),
    ));

    assert_eq!(result.partner_tier, Tier::Territory);
    assert!(result.is_legacy);
    assert_eq!(result.discount_rate_percent, dec!(15));
    assert_eq!(result.non_incumbent_price, dec!(2300));
}

#[test]
fn unlisted_partner_is_authorized_at_fifteen_percent() {
    let result = priced(input(
        "Acme Unlisted",
        DealType::CrossSell,
        dec!(500),
        date(2026, 8, 1),
    ));

    assert_eq!(result.partner_tier, Tier::Authorized);
    assert_eq!(result.discount_rate_percent, dec!(15));
    assert_eq!(result.non_incumbent_price, dec!(575));
}

#[test]
fn growth_renewal_after_cutoff_gets_twenty_percent() {
    let result = priced(input(
        "Trafera",
        DealType::Renewal,
        dec!(1200),
        date(2026, 3, 1),
    ));

    assert_eq!(result.partner_tier, Tier::Growth);
    assert!(!result.is_legacy);
    assert_eq!(result.discount_rate_percent, dec!(20));
    assert_eq!(result.non_incumbent_price, dec!(1440));
}

#[test]
fn contract_on_cutoff_day_uses_current_schedule() {
    let result = priced(input("SHI", DealType::NewLogo, dec!(100), LEGACY_CUTOFF));
    assert!(!result.is_legacy);
    assert_eq!(result.discount_rate_percent, dec!(25));

    let day_before = LEGACY_CUTOFF.pred_opt().expect("previous day exists");
    let result = priced(input("SHI", DealType::NewLogo, dec!(100), day_before));
    assert!(result.is_legacy);
    assert_eq!(result.discount_rate_percent, dec!(15));
}

#[test]
fn authorized_rate_ignores_deal_type_and_date() {
    for deal_type in DealType::ordered() {
        for contract_date in [date(2020, 1, 1), LEGACY_CUTOFF, date(2030, 12, 31)] {
            let result = priced(input(
                OTHER_AUTHORIZED_PARTNER,
                deal_type,
                dec!(80),
                contract_date,
            ));
            assert_eq!(result.partner_tier, Tier::Authorized);
            assert_eq!(result.discount_rate_percent, dec!(15));
        }
    }
}

#[test]
fn every_directory_partner_resolves_to_its_tier() {
    let directory = PartnerDirectory::standard();
    for tier in [Tier::Enterprise, Tier::Growth, Tier::Territory] {
        let partners = directory.partners_in(tier);
        assert!(!partners.is_empty(), "{tier:?} has no partners");
        for partner in partners {
            assert_eq!(resolve_tier(partner), tier, "{partner}");
        }
    }
    assert_eq!(resolve_tier("Acme Unlisted"), Tier::Authorized);
}

#[test]
fn floor_price_is_incumbent_times_one_plus_rate() {
    let prices = [dec!(0.01), dec!(19.99), dec!(333.33), dec!(1234567.891)];
    for partner in ["CDW", "Bluum", "TIG", "Acme Unlisted"] {
        for deal_type in DealType::ordered() {
            for price in prices {
                let result = priced(input(partner, deal_type, price, date(2026, 5, 1)));
                let rate = result.discount_rate_percent / dec!(100);
                assert_eq!(result.non_incumbent_price, price * (dec!(1) + rate));
                assert_eq!(result.discount_amount, price * rate);
                assert!(result.non_incumbent_price > result.incumbent_price);
            }
        }
    }
}

#[test]
fn results_keep_full_precision() {
    let result = priced(input(
        "Connection",
        DealType::NewLogo,
        dec!(333.33),
        date(2026, 5, 1),
    ));
    assert_eq!(result.discount_amount, dec!(66.666));
    assert_eq!(result.non_incumbent_price, dec!(399.996));
}

#[test]
fn repeated_evaluation_is_identical() {
    let form = QuoteForm::new("Howard", "742.10", "2026-04-15", DealType::CrossSell);
    let first = calculate(&form).expect("form is complete");
    let second = calculate(&form).expect("form is complete");
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serializes"),
        serde_json::to_string(&second).expect("serializes")
    );
}

#[test]
fn incomplete_or_invalid_forms_yield_no_result() {
    let complete = QuoteForm::new("CDW", "1000", "2026-06-01", DealType::NewLogo);
    assert!(calculate(&complete).is_some());

    let mut no_partner = complete.clone();
    no_partner.partner = None;
    assert!(calculate(&no_partner).is_none());

    let mut no_price = complete.clone();
    no_price.incumbent_price = Some(String::new());
    assert!(calculate(&no_price).is_none());

    let mut no_date = complete.clone();
    no_date.contract_date = None;
    assert!(calculate(&no_date).is_none());

    for price in ["0", "-10", "ten dollars"] {
        let mut bad_price = complete.clone();
        bad_price.incumbent_price = Some(price.to_string());
        assert!(calculate(&bad_price).is_none(), "{price}");
    }
}

#[test]
fn missing_deal_type_prices_as_new_logo() {
    let form = QuoteForm {
        partner: Some("CDW".to_string()),
        incumbent_price: Some("1000".to_string()),
        contract_date: Some("2026-06-01".to_string()),
        deal_type: None,
    };
    let result = calculate(&form).expect("deal type defaults");
    assert_eq!(result.deal_type, DealType::NewLogo);
    assert_eq!(result.discount_rate_percent, dec!(25));
}

#[test]
fn oversized_prices_yield_no_result() {
    let form = QuoteForm::new(
        "CDW",
        "79228162514264337593543950335",
        "2026-06-01",
        DealType::NewLogo,
    );
    assert!(calculate(&form).is_none());

    let overflowing = input("CDW", DealType::NewLogo, Decimal::MAX, date(2026, 6, 1));
    assert!(evaluate(&overflowing).is_none());
}

#[test]
fn ceiling_price_still_prices() {
    let form = QuoteForm::new(
        "CDW",
        MAX_INCUMBENT_PRICE.to_string(),
        "2026-06-01",
        DealType::NewLogo,
    );
    let result = calculate(&form).expect("ceiling is accepted");
    assert_eq!(result.non_incumbent_price, dec!(1250000000000));
}
