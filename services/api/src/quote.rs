use clap::Args;
use price_protection::error::AppError;
use price_protection::pricing::presentation::views::FLOOR_PRICE_DISCLAIMER;
use price_protection::pricing::presentation::{
    PricingRulesReference, PricingSummaryView, QuoteOutcomeView,
};
use price_protection::pricing::{PartnerDirectory, QuoteForm};

#[derive(Args, Debug, Default)]
pub(crate) struct QuoteArgs {
    /// Partner name exactly as listed by `partners`
    #[arg(long)]
    pub(crate) partner: Option<String>,
    /// Incumbent price per license
    #[arg(long)]
    pub(crate) incumbent_price: Option<String>,
    /// Original contract date (YYYY-MM-DD)
    #[arg(long)]
    pub(crate) contract_date: Option<String>,
    /// new-logo, cross-sell, or renewal (defaults to new-logo)
    #[arg(long)]
    pub(crate) deal_type: Option<String>,
    /// Print the outcome as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

impl QuoteArgs {
    fn form(&self) -> QuoteForm {
        QuoteForm {
            partner: self.partner.clone(),
            incumbent_price: self.incumbent_price.clone(),
            contract_date: self.contract_date.clone(),
            deal_type: self.deal_type.clone(),
        }
    }
}

pub(crate) fn run_quote(args: QuoteArgs) -> Result<(), AppError> {
    let outcome = QuoteOutcomeView::from_form(&args.form());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print!("{}", render_outcome(&outcome));
    }

    Ok(())
}

pub(crate) fn run_partners() {
    print!("{}", render_partners());
}

pub(crate) fn run_rules() {
    print!("{}", render_rules(&PricingRulesReference::standard()));
}

pub(crate) fn render_outcome(outcome: &QuoteOutcomeView) -> String {
    match outcome {
        QuoteOutcomeView::Computed { summary, .. } => render_summary(summary),
        QuoteOutcomeView::Incomplete { missing, message } => {
            format!("{message}\nMissing field: {}\n", missing.label())
        }
    }
}

fn render_summary(summary: &PricingSummaryView) -> String {
    let mut lines = vec![
        "Pricing calculation".to_string(),
        format!("- Partner: {}", summary.partner_name),
        format!("- Partner tier: {}", summary.tier_label),
        format!("- Deal type: {}", summary.deal_type_label),
        format!("- Incumbent price: {}", summary.incumbent_price),
        format!("- Price protection: {}", summary.protection_rate),
        format!("- Discount amount: {}", summary.discount_amount),
        format!("- Non-incumbent price: {}", summary.non_incumbent_price),
    ];
    if let Some(notice) = summary.legacy_notice {
        lines.push(format!("! {notice}"));
    }

    let positioning = &summary.positioning;
    lines.extend([
        String::new(),
        "Partner positioning language".to_string(),
        "If another (non-incumbent) partner asks for pricing:".to_string(),
        format!("  {}", positioning.pricing_inquiry),
        "Incumbent partner framing:".to_string(),
        format!("  \"{}\"", positioning.incumbent_framing),
        "Non-incumbent partner framing:".to_string(),
        format!("  \"{}\"", positioning.non_incumbent_framing),
        String::new(),
        format!("Note: {FLOOR_PRICE_DISCLAIMER}"),
    ]);
    finish(lines)
}

pub(crate) fn render_partners() -> String {
    let entries = PartnerDirectory::standard().selectable_entries();
    let lines = std::iter::once("Partners".to_string())
        .chain(
            entries
                .iter()
                .map(|entry| format!("- {} ({})", entry.name, entry.tier_label)),
        )
        .collect();
    finish(lines)
}

pub(crate) fn render_rules(reference: &PricingRulesReference) -> String {
    let mut lines = vec!["Partner pricing rules".to_string()];
    for tier in &reference.tiers {
        lines.push(String::new());
        lines.push(tier.heading.clone());
        lines.extend(tier.rules.iter().map(|rule| format!("  - {rule}")));
    }
    lines.push(String::new());
    lines.push(format!("* {}", reference.footnote));
    finish(lines)
}

fn finish(lines: Vec<String>) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}
