//! Currency strings, talk tracks, and reference cards built from engine output.

mod currency;
mod positioning;
pub mod views;

pub use currency::{format_percent, format_usd};
pub use positioning::PositioningLanguage;
pub use views::{PricingRulesReference, PricingSummaryView, QuoteOutcomeView, TierRuleView};
