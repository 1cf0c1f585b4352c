use serde::{Deserialize, Serialize};

use crate::financing::amortization::monthly_payment_for;
use crate::vehicle::{
    VehicleInput, DEFAULT_ELECTRICITY_RATE, DEFAULT_GAS_PRICE, DEFAULT_MILES_PER_YEAR, DEFAULT_MPG,
};

/// 연간 정비비 증가율 (7% 복리).
pub const MAINTENANCE_GROWTH_RATE: f64 = 0.07;
/// 전기차 평균 효율 [mi/kWh].
pub const EV_MILES_PER_KWH: f64 = 3.5;
/// 대출 기간 미설정 시 보유 기간 기본값 [년].
pub const DEFAULT_OWNERSHIP_YEARS: u32 = 5;

/// 총 보유 비용 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TcoResult {
    /// 보유 기간 전체 총 비용 [USD]
    pub total_cost_of_ownership: f64,
    /// 연 환산 비용 [USD/년]
    pub annual_cost: f64,
    /// 보유 기간 정비비 합계 [USD]
    pub maintenance_cost: f64,
    /// 보유 기간 연료/전기 비용 합계 [USD]
    pub fuel_cost: f64,
}

/// 대출 기간으로부터 보유 연수를 구한다. 기간이 0이면 기본 5년.
pub fn ownership_years(loan_term_months: u32) -> u32 {
    if loan_term_months == 0 {
        DEFAULT_OWNERSHIP_YEARS
    } else {
        loan_term_months.div_ceil(12)
    }
}

/// 연간 연료/전기 비용 [USD/년]. 입력이 비어 있으면 문서화된 평균값으로 대체한다.
fn annual_fuel_cost(input: &VehicleInput) -> f64 {
    let miles = if input.miles_per_year > 0.0 {
        input.miles_per_year
    } else {
        DEFAULT_MILES_PER_YEAR
    };
    if input.is_electric {
        let rate = if input.electricity_rate > 0.0 {
            input.electricity_rate
        } else {
            DEFAULT_ELECTRICITY_RATE
        };
        miles / EV_MILES_PER_KWH * rate
    } else {
        let mpg = if input.mpg > 0.0 { input.mpg } else { DEFAULT_MPG };
        let gas = if input.gas_price > 0.0 {
            input.gas_price
        } else {
            DEFAULT_GAS_PRICE
        };
        miles / mpg * gas
    }
}

/// 총 보유 비용을 계산한다.
///
/// 정비비는 해마다 7% 복리로 늘고, 금융 비용은 원금(구매가-선납금)을 넘는
/// 납부 총액, 즉 총 이자다. TTL은 여기에 포함하지 않는다.
pub fn calculate_tco(input: &VehicleInput) -> TcoResult {
    let years = ownership_years(input.loan_term_months);

    let mut maintenance_cost = 0.0;
    for year in 1..=years {
        maintenance_cost +=
            input.maintenance_cost_per_year * (1.0 + MAINTENANCE_GROWTH_RATE).powi(year as i32 - 1);
    }

    let fuel_cost = annual_fuel_cost(input) * years as f64;

    let principal = input.purchase_price - input.down_payment;
    let monthly = monthly_payment_for(principal, input.interest_rate, input.loan_term_months);
    let financing_cost = input.loan_term_months as f64 * monthly - principal;

    let total_cost_of_ownership =
        input.purchase_price + maintenance_cost + fuel_cost + financing_cost;

    TcoResult {
        total_cost_of_ownership,
        annual_cost: total_cost_of_ownership / years as f64,
        maintenance_cost,
        fuel_cost,
    }
}
