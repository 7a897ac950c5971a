use super::domain::Tier;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Menu entry for partners that are not individually contracted.
pub const OTHER_AUTHORIZED_PARTNER: &str = "Other (Authorized)";

const TIERED_PARTNERS: [(&str, Tier); 18] = [
    ("CDW", Tier::Enterprise),
    ("Trafera", Tier::Growth),
    ("Bluum", Tier::Growth),
    ("SHI", Tier::Growth),
    ("Howard", Tier::Growth),
    ("BorderLAN", Tier::Growth),
    ("OETC", Tier::Growth),
    ("UDT", Tier::Growth),
    ("Connection", Tier::Territory),
    ("Fortnet Security", Tier::Territory),
    ("Journey Ed", Tier::Territory),
    ("Logisoft", Tier::Territory),
    ("Stryke Security Inc", Tier::Territory),
    ("STS Education", Tier::Territory),
    ("TIG", Tier::Territory),
    ("Twotrees Technologies", Tier::Territory),
    ("Whalley Computer Associates Inc", Tier::Territory),
    ("WIRED! Technology Partners", Tier::Territory),
];

const SELECTABLE_PARTNERS: [&str; 19] = [
    "Bluum",
    "BorderLAN",
    "CDW",
    "Connection",
    "Fortnet Security",
    "Howard",
    "Journey Ed",
    "Logisoft",
    "OETC",
    "SHI",
    "Stryke Security Inc",
    "STS Education",
    "TIG",
    "Trafera",
    "Twotrees Technologies",
    "UDT",
    "Whalley Computer Associates Inc",
    "WIRED! Technology Partners",
    OTHER_AUTHORIZED_PARTNER,
];

/// Contracted partners and their program tier.
///
/// Lookups are exact: names must match the canonical spelling used in
/// [`PartnerDirectory::selectable_partners`]. Anyone not listed is an
/// authorized partner.
#[derive(Debug)]
pub struct PartnerDirectory {
    tiers: BTreeMap<&'static str, Tier>,
}

impl PartnerDirectory {
    pub fn standard() -> &'static Self {
        static DIRECTORY: OnceLock<PartnerDirectory> = OnceLock::new();
        DIRECTORY.get_or_init(|| Self {
            tiers: TIERED_PARTNERS.into_iter().collect(),
        })
    }

    /// Tier explicitly assigned to `partner_name`, if any.
    pub fn tier_of(&self, partner_name: &str) -> Option<Tier> {
        self.tiers.get(partner_name).copied()
    }

    pub fn resolve(&self, partner_name: &str) -> Tier {
        self.tier_of(partner_name).unwrap_or(Tier::Authorized)
    }

    /// Partners contracted at `tier`, in policy order.
    pub fn partners_in(&self, tier: Tier) -> Vec<&'static str> {
        TIERED_PARTNERS
            .iter()
            .filter(|(_, assigned)| *assigned == tier)
            .map(|(name, _)| *name)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn selectable_partners(&self) -> &'static [&'static str] {
        &SELECTABLE_PARTNERS
    }

    pub fn selectable_entries(&self) -> Vec<PartnerEntry> {
        SELECTABLE_PARTNERS
            .iter()
            .map(|&name| {
                let tier = self.resolve(name);
                PartnerEntry {
                    name,
                    tier,
                    tier_label: tier.label(),
                }
            })
            .collect()
    }
}

/// Row in the partner picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartnerEntry {
    pub name: &'static str,
    pub tier: Tier,
    pub tier_label: &'static str,
}
