use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::debug;

use super::directory::PartnerDirectory;
use super::input::QuoteForm;
use super::presentation::{PricingRulesReference, QuoteOutcomeView};

/// Router builder exposing the calculator, partner picker, and rules card.
pub fn pricing_router() -> Router {
    Router::new()
        .route("/api/v1/pricing/quote", post(quote_handler))
        .route("/api/v1/pricing/partners", get(partners_handler))
        .route("/api/v1/pricing/rules", get(rules_handler))
}

/// Incomplete forms are an expected state, so both outcomes answer `200 OK`.
pub(crate) async fn quote_handler(Json(form): Json<QuoteForm>) -> Response {
    let outcome = QuoteOutcomeView::from_form(&form);
    match &outcome {
        QuoteOutcomeView::Computed { result, .. } => debug!(
            partner = %result.partner_name,
            tier = ?result.partner_tier,
            deal_type = %result.deal_type,
            legacy = result.is_legacy,
            rate = %result.discount_rate_percent,
            "price protection computed"
        ),
        QuoteOutcomeView::Incomplete { missing, .. } => {
            debug!(?missing, "quote form incomplete")
        }
    }
    (StatusCode::OK, Json(outcome)).into_response()
}

pub(crate) async fn partners_handler() -> Response {
    let partners = PartnerDirectory::standard().selectable_entries();
    (StatusCode::OK, Json(partners)).into_response()
}

pub(crate) async fn rules_handler() -> Response {
    (StatusCode::OK, Json(PricingRulesReference::standard())).into_response()
}
