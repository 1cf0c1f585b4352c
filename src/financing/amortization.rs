use serde::{Deserialize, Serialize};

/// 고정금리 원리금 균등상환 대출의 납부액 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResult {
    /// 대출 원금 [USD] = 구매가 - 선납금 + TTL
    pub loan_amount: f64,
    /// 월 납부액 [USD]
    pub monthly_payment: f64,
    /// 격주 납부액 [USD] = 월 납부액 / 2 (근사치, 재상환 계산 아님)
    pub biweekly_payment: f64,
    /// 총 이자 [USD]
    pub total_interest: f64,
    /// 총 상환액 [USD] = 월 납부액 × 기간
    pub total_financed: f64,
}

impl PaymentResult {
    /// 대출이 성립하지 않는 경우(원금 ≤ 0, 기간 ≤ 0)의 결과. 오류가 아니다.
    pub fn zero() -> Self {
        Self {
            loan_amount: 0.0,
            monthly_payment: 0.0,
            biweekly_payment: 0.0,
            total_interest: 0.0,
            total_financed: 0.0,
        }
    }
}

/// 원리금 균등상환 월 납부액 공식.
/// rate가 0이면 원금/기간의 단순 분할이 된다. 기간 ≤ 0이면 0.
pub fn monthly_payment_for(principal: f64, annual_rate_pct: f64, term_months: u32) -> f64 {
    if term_months == 0 {
        return 0.0;
    }
    let n = term_months as f64;
    if annual_rate_pct == 0.0 {
        return principal / n;
    }
    let r = annual_rate_pct / 100.0 / 12.0;
    let factor = (1.0 + r).powf(n);
    principal * r * factor / (factor - 1.0)
}

/// 납부액과 총 비용을 계산한다.
///
/// `ttl_amount`는 수수료를 대출에 합산(finance)하는 경우의 TTL 총액이다.
/// 원금 ≤ 0 또는 기간 ≤ 0이면 0으로 채운 결과를 돌려준다 (완납 시나리오).
pub fn calculate_payment(
    purchase_price: f64,
    down_payment: f64,
    ttl_amount: f64,
    interest_rate: f64,
    term_months: u32,
) -> PaymentResult {
    let loan_amount = purchase_price - down_payment + ttl_amount;
    if loan_amount <= 0.0 || term_months == 0 {
        return PaymentResult::zero();
    }

    let n = term_months as f64;
    let (monthly_payment, total_financed, total_interest) = if interest_rate == 0.0 {
        (loan_amount / n, loan_amount, 0.0)
    } else {
        let monthly = monthly_payment_for(loan_amount, interest_rate, term_months);
        let financed = monthly * n;
        (monthly, financed, financed - loan_amount)
    };

    PaymentResult {
        loan_amount,
        monthly_payment,
        biweekly_payment: monthly_payment / 2.0,
        total_interest,
        total_financed,
    }
}

/// `after_months` 납부 후 잔여 원금. 표준 잔액 공식, 0 밑으로 내려가지 않는다.
pub fn remaining_balance(
    principal: f64,
    annual_rate_pct: f64,
    term_months: u32,
    after_months: u32,
) -> f64 {
    if principal <= 0.0 || term_months == 0 {
        return 0.0;
    }
    let k = after_months.min(term_months) as f64;
    if annual_rate_pct == 0.0 {
        let paid = principal / term_months as f64 * k;
        return (principal - paid).max(0.0);
    }
    let r = annual_rate_pct / 100.0 / 12.0;
    let payment = monthly_payment_for(principal, annual_rate_pct, term_months);
    let grown = (1.0 + r).powf(k);
    (principal * grown - payment * ((grown - 1.0) / r)).max(0.0)
}

/// 상환 스케줄 한 행.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    /// 회차 (1부터)
    pub month: u32,
    /// 이자 납부분 [USD]
    pub interest: f64,
    /// 원금 납부분 [USD]
    pub principal: f64,
    /// 납부 후 잔액 [USD]
    pub balance: f64,
}

/// 월별 상환 스케줄을 생성한다. 마지막 회차의 잔액은 0으로 수렴한다.
pub fn amortization_schedule(
    principal: f64,
    annual_rate_pct: f64,
    term_months: u32,
) -> Vec<ScheduleEntry> {
    if principal <= 0.0 || term_months == 0 {
        return Vec::new();
    }
    let payment = monthly_payment_for(principal, annual_rate_pct, term_months);
    let r = annual_rate_pct / 100.0 / 12.0;
    let mut balance = principal;
    let mut schedule = Vec::with_capacity(term_months as usize);
    for month in 1..=term_months {
        let interest = balance * r;
        let principal_part = (payment - interest).min(balance);
        balance = (balance - principal_part).max(0.0);
        schedule.push(ScheduleEntry {
            month,
            interest,
            principal: principal_part,
            balance,
        });
    }
    schedule
}
