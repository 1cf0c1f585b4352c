use serde::{Deserialize, Serialize};

use crate::fees::county_table::{
    county_or_default, registration_base_fee, EV_ANNUAL_FEE, INSPECTION_FEE_NEW,
    INSPECTION_FEE_USED, INSURANCE_VERIFICATION_FEE, PROCESSING_FEE, SALES_TAX_RATE,
};
use crate::vehicle::VehicleInput;

/// TTL(Title/Tax/License) 수수료 내역.
/// 모든 항목은 음수가 될 수 없으며 `total_ttl`은 나머지 다섯 항목의 합이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TtlResult {
    /// 판매세 [USD]
    pub sales_tax: f64,
    /// 타이틀 수수료 (카운티 타이틀 + 지역 수수료) [USD]
    pub title_fee: f64,
    /// 등록 수수료 합계 (기본료 + 처리 + 보험확인 + 검사) [USD]
    pub registration_fees: f64,
    /// 항상 0. 실제 처리 수수료는 registration_fees에 합산된다.
    pub processing_fees: f64,
    /// 전기차 연간 수수료 [USD]
    pub ev_fee: f64,
    /// 배출가스 검사 수수료 [USD]
    pub emissions: f64,
    /// TTL 총액 [USD]
    pub total_ttl: f64,
}

/// TTL 수수료를 계산한다.
///
/// 과세 기준액은 구매가에서 트레이드인 가치를 뺀 값이며 0 미만으로 내려가지 않는다.
/// 카운티 조회 실패는 기본 항목으로 폴백하므로 이 함수는 실패하지 않는다.
pub fn calculate_ttl(input: &VehicleInput) -> TtlResult {
    let county = county_or_default(&input.county);

    let taxable_amount = (input.purchase_price - input.trade_in_value).max(0.0);
    let sales_tax = taxable_amount * SALES_TAX_RATE;

    let title_fee = county.title_fee + county.local_fees;

    let inspection_fee = if input.is_new_vehicle {
        INSPECTION_FEE_NEW
    } else {
        INSPECTION_FEE_USED
    };
    let registration_fees = registration_base_fee(input.vehicle_weight)
        + PROCESSING_FEE
        + INSURANCE_VERIFICATION_FEE
        + inspection_fee;

    let ev_fee = if input.is_electric { EV_ANNUAL_FEE } else { 0.0 };
    let emissions = county.emissions_fee;

    let total_ttl = sales_tax + title_fee + registration_fees + ev_fee + emissions;

    TtlResult {
        sales_tax,
        title_fee,
        registration_fees,
        processing_fees: 0.0,
        ev_fee,
        emissions,
        total_ttl,
    }
}
