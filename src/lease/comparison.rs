use serde::{Deserialize, Serialize};

use crate::financing::amortization::{monthly_payment_for, remaining_balance};
use crate::vehicle::{PaymentFrequency, VehicleInput, DEFAULT_LEASE_TERM};

/// 추정 모드에서 사용하는 잔존가치 비율 (36개월 기준선 가정).
pub const ESTIMATED_RESIDUAL_RATIO: f64 = 0.55;
/// APR → 머니 팩터 표준 환산 제수.
pub const MONEY_FACTOR_DIVISOR: f64 = 2400.0;
/// 현금흐름 우위 판정 임계값: 리스 납부액이 구매 납부액의 80% 미만.
const CASH_FLOW_RATIO: f64 = 0.8;

/// 리스-구매 비교 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseComparisonResult {
    /// 월 리스 납부액 [USD]
    pub monthly_lease_payment: f64,
    /// 리스 총 비용 [USD] = 납부액 × 기간 + 리스 선납금
    pub total_lease_cost: f64,
    /// 리스 만기 매수 옵션 가격 [USD] (잔존가치 그대로)
    pub purchase_option: f64,
    /// 권고 문구. 분기 우선순위가 고정된 결정 트리로 생성된다.
    pub lease_vs_buy: String,
}

/// 주기 이율 기반 원리금 균등상환 공식 (주기 무관 일반형).
fn payment_at_rate(principal: f64, period_rate: f64, periods: f64) -> f64 {
    if periods <= 0.0 {
        return 0.0;
    }
    if period_rate == 0.0 {
        return principal / periods;
    }
    let factor = (1.0 + period_rate).powf(periods);
    principal * period_rate * factor / (factor - 1.0)
}

/// 구매 측 월 환산 납부액.
///
/// 격주 주기는 월 이율의 절반으로 2배 주기 상환한 값(반감된 납부액)을 구한 뒤
/// 월 환산으로 2배 되돌리는 근사를 쓴다. 엄밀한 격주 재상환 계산이 아니며,
/// 의도된 단순화이므로 수정하지 않는다. weekly는 월 납부 경로를 따른다.
fn buy_monthly_payment(input: &VehicleInput, principal: f64) -> f64 {
    match input.payment_frequency {
        PaymentFrequency::Biweekly => {
            let half_rate = input.interest_rate / 100.0 / 12.0 / 2.0;
            let halved = payment_at_rate(
                principal,
                half_rate,
                (input.loan_term_months as f64) * 2.0,
            );
            halved * 2.0
        }
        _ => monthly_payment_for(principal, input.interest_rate, input.loan_term_months),
    }
}

/// 리스와 구매를 비교한다.
///
/// 추정 모드(`lease_mode == false`)는 잔존가치를 구매가의 55%로, 머니 팩터를
/// APR/2400으로 추정한다. 명시 모드는 입력값을 그대로 쓴다.
/// 리스 만기 시점의 구매 측 차량 가치는 잔존가치로 대용한다 (감가 곡선 아님).
pub fn calculate_lease_comparison(input: &VehicleInput) -> LeaseComparisonResult {
    let lease_term = if input.lease_term == 0 {
        DEFAULT_LEASE_TERM
    } else {
        input.lease_term
    };
    let term = lease_term as f64;

    let (residual_value, money_factor) = if input.lease_mode {
        (input.residual_value, input.money_factor)
    } else {
        (
            input.purchase_price * ESTIMATED_RESIDUAL_RATIO,
            input.interest_rate / MONEY_FACTOR_DIVISOR,
        )
    };

    let capitalized_cost = input.purchase_price - input.lease_down_payment;
    let depreciation = capitalized_cost - residual_value;
    let rent_charge = (capitalized_cost + residual_value) * money_factor * term;
    let monthly_lease_payment = (depreciation + rent_charge) / term;
    let total_lease_cost = monthly_lease_payment * term + input.lease_down_payment;

    let buy_principal = input.purchase_price - input.down_payment;
    let buy_monthly = buy_monthly_payment(input, buy_principal);
    let balance_at_lease_end = remaining_balance(
        buy_principal,
        input.interest_rate,
        input.loan_term_months,
        lease_term,
    );
    let buy_equity = residual_value - balance_at_lease_end;
    let buy_net_cost = input.down_payment + buy_monthly * term - buy_equity;

    // 손익분기 월: 구매 월 납부액이 리스 이하이면 리스 우위가 누적되지 않으므로 0.
    let break_even_month = if buy_monthly <= monthly_lease_payment {
        0.0
    } else {
        ((input.down_payment - input.lease_down_payment) / (buy_monthly - monthly_lease_payment))
            .ceil()
    };

    let lease_vs_buy = recommend(
        break_even_month,
        term,
        monthly_lease_payment,
        buy_monthly,
        buy_net_cost,
        total_lease_cost,
    );

    LeaseComparisonResult {
        monthly_lease_payment,
        total_lease_cost,
        purchase_option: residual_value,
        lease_vs_buy,
    }
}

/// 권고 문구 결정 트리. 분기 순서가 계약이므로 순서를 바꾸지 않는다.
fn recommend(
    break_even_month: f64,
    lease_term: f64,
    lease_payment: f64,
    buy_payment: f64,
    buy_net_cost: f64,
    lease_total_cost: f64,
) -> String {
    if break_even_month > lease_term {
        let savings = buy_net_cost - lease_total_cost;
        format!(
            "Leasing is the stronger option here: buying would not break even within the \
             {:.0}-month lease, leaving about ${:.0} in savings after crediting the equity \
             a buyer would build.",
            lease_term, savings
        )
    } else if lease_payment < buy_payment * CASH_FLOW_RATIO {
        format!(
            "Leasing frees up monthly cash flow: about ${:.2}/month versus ${:.2}/month to \
             buy. If a lower payment matters most, lease.",
            lease_payment, buy_payment
        )
    } else if buy_net_cost < lease_total_cost {
        let savings = lease_total_cost - buy_net_cost;
        format!(
            "Buying wins over this window: about ${:.0} cheaper than leasing once the equity \
             built by month {:.0} is counted.",
            savings, lease_term
        )
    } else {
        "Lease and buy come out close here. Consider your priorities: flexibility and a lower \
         payment favor leasing, while long-term ownership and equity favor buying."
            .to_string()
    }
}
