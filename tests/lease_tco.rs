use vehicle_cost_toolbox::{
    financing::amortization::monthly_payment_for,
    lease::comparison::calculate_lease_comparison,
    ownership::tco::{calculate_tco, ownership_years},
    vehicle::VehicleInput,
};

fn buyer_input() -> VehicleInput {
    VehicleInput {
        purchase_price: 30000.0,
        down_payment: 0.0,
        interest_rate: 0.0,
        loan_term_months: 60,
        lease_term: 36,
        lease_down_payment: 0.0,
        ..VehicleInput::default()
    }
}

#[test]
fn estimation_mode_uses_residual_ratio_and_money_factor() {
    let mut input = buyer_input();
    input.interest_rate = 6.0;
    input.lease_down_payment = 2000.0;
    input.lease_mode = false;
    let result = calculate_lease_comparison(&input);

    // 잔존가치 55%, 머니팩터 APR/2400
    let residual = 30000.0 * 0.55;
    let money_factor = 6.0 / 2400.0;
    let cap = 30000.0 - 2000.0;
    let expected = ((cap - residual) + (cap + residual) * money_factor * 36.0) / 36.0;

    assert!((result.purchase_option - residual).abs() < 1e-9);
    assert!(
        (result.monthly_lease_payment - expected).abs() < 1e-9,
        "payment={}",
        result.monthly_lease_payment
    );
    assert!((result.total_lease_cost - (expected * 36.0 + 2000.0)).abs() < 1e-9);
}

#[test]
fn explicit_mode_uses_caller_values() {
    let mut input = buyer_input();
    input.lease_mode = true;
    input.residual_value = 18000.0;
    input.money_factor = 0.0021;
    let result = calculate_lease_comparison(&input);

    let expected = ((30000.0 - 18000.0) + (30000.0 + 18000.0) * 0.0021 * 36.0) / 36.0;
    assert!((result.monthly_lease_payment - expected).abs() < 1e-9);
    assert!((result.purchase_option - 18000.0).abs() < 1e-9);
}

/// 구매와 리스의 월 납부액이 정확히 같으면 손익분기 월은 0이고,
/// 리스 우위 분기(장기 손익분기)로는 절대 떨어지지 않는다.
#[test]
fn equal_payments_never_hit_break_even_branch() {
    let mut input = buyer_input();
    // 무이자 60개월: 구매 월 500. 잔존 12000이면 리스도 월 500.
    input.lease_mode = true;
    input.residual_value = 12000.0;
    input.money_factor = 0.0;
    let result = calculate_lease_comparison(&input);

    assert!((result.monthly_lease_payment - 500.0).abs() < 1e-9);
    assert!(!result.lease_vs_buy.starts_with("Leasing is the stronger option"));
    // 무이자 대칭 시나리오에서는 양쪽 총비용도 같아져 중립 분기로 떨어진다.
    assert!(result.lease_vs_buy.contains("priorities"), "{}", result.lease_vs_buy);
}

#[test]
fn long_break_even_recommends_leasing() {
    let mut input = buyer_input();
    input.down_payment = 10000.0; // 구매 선납금이 커서 손익분기가 멀다
    input.lease_mode = true;
    input.residual_value = 19200.0; // 리스 월 300 vs 구매 월 333.33
    input.money_factor = 0.0;
    let result = calculate_lease_comparison(&input);
    assert!(
        result.lease_vs_buy.starts_with("Leasing is the stronger option"),
        "{}",
        result.lease_vs_buy
    );
}

#[test]
fn much_cheaper_lease_recommends_cash_flow() {
    let mut input = buyer_input();
    input.lease_mode = true;
    input.residual_value = 21000.0; // 리스 월 250, 구매 월 500의 80% 미만
    input.money_factor = 0.0;
    let result = calculate_lease_comparison(&input);
    assert!((result.monthly_lease_payment - 250.0).abs() < 1e-9);
    assert!(result.lease_vs_buy.contains("cash flow"), "{}", result.lease_vs_buy);
}

#[test]
fn cheaper_equity_adjusted_buy_recommends_buying() {
    let mut input = buyer_input();
    input.lease_mode = true;
    input.residual_value = 13440.0;
    input.money_factor = 0.001; // 렌트차지만큼 리스가 비싸진다
    let result = calculate_lease_comparison(&input);
    assert!(result.lease_vs_buy.starts_with("Buying wins"), "{}", result.lease_vs_buy);
}

#[test]
fn repeated_calls_are_identical() {
    let input = buyer_input();
    let a = calculate_lease_comparison(&input);
    let b = calculate_lease_comparison(&input);
    assert_eq!(a, b);
}

#[test]
fn ownership_years_rounds_up() {
    assert_eq!(ownership_years(12), 1);
    assert_eq!(ownership_years(13), 2);
    assert_eq!(ownership_years(60), 5);
    assert_eq!(ownership_years(84), 7);
    assert_eq!(ownership_years(0), 5);
}

#[test]
fn maintenance_compounds_seven_percent_yearly() {
    let mut input = buyer_input();
    input.maintenance_cost_per_year = 500.0;
    let tco = calculate_tco(&input);

    let mut expected = 0.0;
    for year in 0..5 {
        expected += 500.0 * 1.07f64.powi(year);
    }
    assert!((tco.maintenance_cost - expected).abs() < 1e-9, "maintenance={}", tco.maintenance_cost);
}

#[test]
fn gas_fuel_cost_uses_mpg_and_price() {
    let input = buyer_input(); // 기본값: 12000 mi, 25 mpg, $3.00
    let tco = calculate_tco(&input);
    assert!((tco.fuel_cost - 12000.0 / 25.0 * 3.0 * 5.0).abs() < 1e-9);
}

#[test]
fn electric_fuel_cost_uses_efficiency_and_rate() {
    let mut input = buyer_input();
    input.is_electric = true; // 기본값: 12000 mi, $0.13/kWh, 3.5 mi/kWh
    let tco = calculate_tco(&input);
    assert!((tco.fuel_cost - 12000.0 / 3.5 * 0.13 * 5.0).abs() < 1e-9);
}

#[test]
fn financing_cost_is_total_interest() {
    let mut input = buyer_input();
    input.interest_rate = 6.5;
    input.down_payment = 2000.0;
    let tco = calculate_tco(&input);

    let principal = 28000.0;
    let monthly = monthly_payment_for(principal, 6.5, 60);
    let financing = 60.0 * monthly - principal;
    let rest = input.purchase_price + tco.maintenance_cost + tco.fuel_cost;
    assert!(
        (tco.total_cost_of_ownership - rest - financing).abs() < 1e-6,
        "total={} rest={} financing={}",
        tco.total_cost_of_ownership,
        rest,
        financing
    );
}

#[test]
fn zero_rate_has_no_financing_cost() {
    let input = buyer_input();
    let tco = calculate_tco(&input);
    let rest = input.purchase_price + tco.maintenance_cost + tco.fuel_cost;
    assert!((tco.total_cost_of_ownership - rest).abs() < 1e-9);
}

#[test]
fn annual_cost_divides_by_ownership_years() {
    let mut input = buyer_input();
    input.interest_rate = 4.0;
    input.loan_term_months = 48;
    let tco = calculate_tco(&input);
    assert!((tco.annual_cost - tco.total_cost_of_ownership / 4.0).abs() < 1e-9);
}
