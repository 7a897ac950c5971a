//! Partner price protection: tier lookup, legacy cutoff, and the floor price a
//! non-incumbent partner may be quoted.
//!
//! [`calculate`] is the entry point for raw form state; it yields `None` until
//! the partner, incumbent price, and contract date are all present and valid.
//! [`evaluate`] prices an already validated [`PricingInput`].

pub mod directory;
pub mod domain;
mod engine;
pub mod input;
pub mod presentation;
pub mod router;
pub mod rules;

#[cfg(test)]
mod tests;

pub use directory::{PartnerDirectory, PartnerEntry, OTHER_AUTHORIZED_PARTNER};
pub use domain::{DealType, PricingInput, PricingResult, ProtectionRate, Tier, UnknownDealType};
pub use engine::{calculate, evaluate, resolve_tier};
pub use input::{InputGap, QuoteField, QuoteForm, MAX_INCUMBENT_PRICE};
pub use router::pricing_router;
pub use rules::{is_legacy, protection_rate, LEGACY_CUTOFF};
