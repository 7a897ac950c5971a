use axum::body::{to_bytes, Body};
use axum::response::Response;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::pricing::domain::{DealType, PricingInput, PricingResult};
use crate::pricing::evaluate;

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn input(
    partner: &str,
    deal_type: DealType,
    incumbent_price: Decimal,
    contract_date: NaiveDate,
) -> PricingInput {
    PricingInput {
        partner_name: partner.to_string(),
        incumbent_price,
        contract_date,
        deal_type,
    }
}

pub(super) fn priced(input: PricingInput) -> PricingResult {
    evaluate(&input).expect("floor price fits")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body: Body = response.into_body();
    let bytes = to_bytes(body, 1024 * 1024).await.expect("body bytes");
    serde_json::from_slice(&bytes).expect("json body")
}
