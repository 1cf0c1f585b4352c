use vehicle_cost_toolbox::financing::amortization::{
    amortization_schedule, calculate_payment, monthly_payment_for, remaining_balance,
};

#[test]
fn zero_rate_is_simple_division() {
    let result = calculate_payment(20000.0, 2000.0, 1000.0, 0.0, 48);
    assert!((result.loan_amount - 19000.0).abs() < 1e-9);
    assert!((result.monthly_payment - 19000.0 / 48.0).abs() < 1e-9);
    assert_eq!(result.total_interest, 0.0);
    assert!((result.total_financed - 19000.0).abs() < 1e-9);
}

#[test]
fn down_payment_exceeding_price_yields_zero_result() {
    let result = calculate_payment(30000.0, 40000.0, 0.0, 5.0, 60);
    assert_eq!(result.loan_amount, 0.0);
    assert_eq!(result.monthly_payment, 0.0);
    assert_eq!(result.biweekly_payment, 0.0);
    assert_eq!(result.total_interest, 0.0);
    assert_eq!(result.total_financed, 0.0);
}

#[test]
fn zero_term_yields_zero_result() {
    let result = calculate_payment(30000.0, 0.0, 0.0, 5.0, 0);
    assert_eq!(result.monthly_payment, 0.0);
    assert_eq!(result.total_financed, 0.0);
}

#[test]
fn financed_minus_interest_equals_loan() {
    for (price, down, ttl, rate, term) in [
        (30000.0, 5000.0, 1693.75, 6.5, 60),
        (52000.0, 0.0, 3500.0, 9.9, 84),
        (15000.0, 1500.0, 900.0, 3.25, 36),
    ] {
        let result = calculate_payment(price, down, ttl, rate, term);
        assert!(
            (result.total_financed - result.total_interest - result.loan_amount).abs() < 1e-6,
            "loan={} financed={} interest={}",
            result.loan_amount,
            result.total_financed,
            result.total_interest
        );
    }
}

#[test]
fn biweekly_is_half_of_monthly() {
    let result = calculate_payment(30000.0, 5000.0, 1693.75, 6.5, 60);
    assert!((result.biweekly_payment - result.monthly_payment / 2.0).abs() < 1e-9);
}

/// 대출 26,693.75, 6.5% APR, 60개월 → 월 납부 약 $523.
/// 하드코딩 오라클 대신 잔액을 월 단위로 굴려서 0으로 수렴하는지 검증한다.
#[test]
fn dallas_example_payment_amortizes_to_zero() {
    let result = calculate_payment(30000.0, 5000.0, 1693.75, 6.5, 60);
    assert!((result.loan_amount - 26693.75).abs() < 1e-9);
    assert!(
        result.monthly_payment > 522.0 && result.monthly_payment < 524.0,
        "monthly={}",
        result.monthly_payment
    );

    let r = 6.5 / 100.0 / 12.0;
    let mut balance = result.loan_amount;
    for _ in 0..60 {
        balance = balance * (1.0 + r) - result.monthly_payment;
    }
    assert!(balance.abs() < 1e-6, "final balance={balance}");
}

#[test]
fn remaining_balance_matches_schedule() {
    let principal = 26693.75;
    let rate = 6.5;
    let term = 60;
    let schedule = amortization_schedule(principal, rate, term);
    assert_eq!(schedule.len(), 60);

    for checkpoint in [1usize, 12, 36, 59] {
        let expected = remaining_balance(principal, rate, term, checkpoint as u32);
        let actual = schedule[checkpoint - 1].balance;
        assert!(
            (expected - actual).abs() < 1e-6,
            "month {checkpoint}: formula={expected} schedule={actual}"
        );
    }

    let last = schedule.last().expect("non-empty schedule");
    assert!(last.balance.abs() < 1e-6);
    assert!(remaining_balance(principal, rate, term, term).abs() < 1e-6);
}

#[test]
fn schedule_principal_sums_to_loan() {
    let principal = 19000.0;
    let schedule = amortization_schedule(principal, 4.5, 48);
    let paid: f64 = schedule.iter().map(|e| e.principal).sum();
    assert!((paid - principal).abs() < 1e-6);
}

#[test]
fn remaining_balance_is_monotonic() {
    let principal = 30000.0;
    assert!((remaining_balance(principal, 7.0, 60, 0) - principal).abs() < 1e-9);
    let mut prev = principal;
    for month in 1..=60 {
        let balance = remaining_balance(principal, 7.0, 60, month);
        assert!(balance <= prev + 1e-9, "month {month}: {balance} > {prev}");
        prev = balance;
    }
}

#[test]
fn helper_matches_calculate_payment() {
    let result = calculate_payment(28000.0, 3000.0, 1200.0, 5.75, 72);
    let helper = monthly_payment_for(result.loan_amount, 5.75, 72);
    assert!((result.monthly_payment - helper).abs() < 1e-9);
}
