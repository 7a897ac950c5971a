use super::domain::{DealType, ProtectionRate, Tier};
use chrono::NaiveDate;

/// Contracts signed before this date keep the legacy 15% schedule.
pub const LEGACY_CUTOFF: NaiveDate = match NaiveDate::from_ymd_opt(2026, 2, 9) {
    Some(date) => date,
    None => panic!("legacy cutoff must be a valid calendar date"),
};

pub fn is_legacy(contract_date: NaiveDate) -> bool {
    contract_date < LEGACY_CUTOFF
}

/// Protection schedule. Authorized partners always get 15%; everyone else drops
/// to 15% on legacy contracts and otherwise depends on the deal type.
pub fn protection_rate(tier: Tier, deal_type: DealType, legacy: bool) -> ProtectionRate {
    match tier {
        Tier::Authorized => ProtectionRate::Fifteen,
        _ if legacy => ProtectionRate::Fifteen,
        Tier::Enterprise | Tier::Growth => match deal_type {
            DealType::NewLogo | DealType::CrossSell => ProtectionRate::TwentyFive,
            DealType::Renewal => ProtectionRate::Twenty,
        },
        Tier::Territory => match deal_type {
            DealType::NewLogo | DealType::CrossSell => ProtectionRate::Twenty,
            DealType::Renewal => ProtectionRate::Fifteen,
        },
    }
}
