use vehicle_cost_toolbox::{
    vehicle::{
        normalize_vehicle_input, PaymentFrequency, VehicleInput, VehicleInputDraft,
        DEFAULT_INTEREST_RATE, DEFAULT_LEASE_TERM, DEFAULT_LOAN_TERM_MONTHS,
        DEFAULT_PURCHASE_PRICE, DEFAULT_ZIP_CODE,
    },
    worksheet::{run_full_calculation, CalcError},
};

#[test]
fn empty_draft_gets_documented_defaults() {
    let input = normalize_vehicle_input(&VehicleInputDraft::default());
    assert_eq!(input.purchase_price, DEFAULT_PURCHASE_PRICE);
    assert_eq!(input.trade_in_value, 0.0);
    assert_eq!(input.vehicle_weight, 4000.0);
    assert!(!input.is_electric);
    assert!(input.is_new_vehicle);
    assert_eq!(input.county, "Dallas");
    assert_eq!(input.loan_term_months, DEFAULT_LOAN_TERM_MONTHS);
    assert_eq!(input.interest_rate, DEFAULT_INTEREST_RATE);
    assert_eq!(input.down_payment, 0.0);
    assert_eq!(input.payment_frequency, PaymentFrequency::Monthly);
    assert_eq!(input.zip_code, DEFAULT_ZIP_CODE);
    assert_eq!(input.loan_start_date.format("%Y-%m-%d").to_string(), "2024-01-01");
    assert_eq!(input.lease_mileage, 0.0);
    assert_eq!(input.residual_value, 0.0);
    assert_eq!(input.money_factor, 0.0);
    assert!(!input.lease_mode);
    assert_eq!(input.lease_term, DEFAULT_LEASE_TERM);
    assert_eq!(input.credit_score, 700);
    assert_eq!(input.maintenance_cost_per_year, 500.0);
    assert_eq!(input.mpg, 25.0);
    assert_eq!(input.miles_per_year, 12000.0);
    assert_eq!(input.gas_price, 3.0);
    assert_eq!(input.electricity_rate, 0.13);
}

#[test]
fn out_of_range_values_are_replaced() {
    let draft = VehicleInputDraft {
        purchase_price: Some(-5.0),
        trade_in_value: Some(f64::NAN),
        vehicle_weight: Some(0.0),
        loan_term_months: Some(6),
        interest_rate: Some(150.0),
        zip_code: Some("12ab5".to_string()),
        loan_start_date: Some("not-a-date".to_string()),
        payment_frequency: Some("fortnightly".to_string()),
        lease_term: Some(6),
        credit_score: Some(200),
        mpg: Some(-3.0),
        ..VehicleInputDraft::default()
    };
    let input = normalize_vehicle_input(&draft);
    assert_eq!(input.purchase_price, DEFAULT_PURCHASE_PRICE);
    assert_eq!(input.trade_in_value, 0.0);
    assert_eq!(input.vehicle_weight, 4000.0);
    assert_eq!(input.loan_term_months, DEFAULT_LOAN_TERM_MONTHS);
    assert_eq!(input.interest_rate, DEFAULT_INTEREST_RATE);
    assert_eq!(input.zip_code, DEFAULT_ZIP_CODE);
    assert_eq!(input.loan_start_date.format("%Y-%m-%d").to_string(), "2024-01-01");
    assert_eq!(input.payment_frequency, PaymentFrequency::Monthly);
    assert_eq!(input.lease_term, DEFAULT_LEASE_TERM);
    assert_eq!(input.credit_score, 700);
    assert_eq!(input.mpg, 25.0);
}

#[test]
fn valid_values_pass_through_unchanged() {
    let draft = VehicleInputDraft {
        purchase_price: Some(42000.0),
        trade_in_value: Some(8000.0),
        county: Some("Travis".to_string()),
        loan_term_months: Some(84),
        interest_rate: Some(0.0),
        payment_frequency: Some("biweekly".to_string()),
        zip_code: Some("78701".to_string()),
        loan_start_date: Some("2025-03-15".to_string()),
        lease_term: Some(24),
        ..VehicleInputDraft::default()
    };
    let input = normalize_vehicle_input(&draft);
    assert_eq!(input.purchase_price, 42000.0);
    assert_eq!(input.trade_in_value, 8000.0);
    assert_eq!(input.county, "Travis");
    assert_eq!(input.loan_term_months, 84);
    assert_eq!(input.interest_rate, 0.0);
    assert_eq!(input.payment_frequency, PaymentFrequency::Biweekly);
    assert_eq!(input.zip_code, "78701");
    assert_eq!(input.loan_start_date.format("%Y-%m-%d").to_string(), "2025-03-15");
    assert_eq!(input.lease_term, 24);
}

#[test]
fn normalization_is_idempotent() {
    let drafts = [
        VehicleInputDraft::default(),
        VehicleInputDraft {
            purchase_price: Some(25500.5),
            county: Some("Unknown Place".to_string()),
            loan_term_months: Some(99),
            mpg: Some(31.0),
            ..VehicleInputDraft::default()
        },
        VehicleInputDraft {
            purchase_price: Some(-1.0),
            interest_rate: Some(f64::INFINITY),
            zip_code: Some("7".to_string()),
            ..VehicleInputDraft::default()
        },
    ];
    for draft in drafts {
        let once = normalize_vehicle_input(&draft);
        let twice = normalize_vehicle_input(&VehicleInputDraft::from(&once));
        assert_eq!(once, twice);
    }
}

#[test]
fn draft_parses_camel_case_json() {
    let json = r#"{
        "purchasePrice": 27500,
        "tradeInValue": 3000,
        "isElectric": true,
        "county": "Harris",
        "loanTermMonths": 48,
        "paymentFrequency": "weekly",
        "loanStartDate": "2024-06-01"
    }"#;
    let draft: VehicleInputDraft = serde_json::from_str(json).expect("parse draft");
    let input = normalize_vehicle_input(&draft);
    assert_eq!(input.purchase_price, 27500.0);
    assert_eq!(input.trade_in_value, 3000.0);
    assert!(input.is_electric);
    assert_eq!(input.county, "Harris");
    assert_eq!(input.loan_term_months, 48);
    assert_eq!(input.payment_frequency, PaymentFrequency::Weekly);
}

#[test]
fn normalized_input_round_trips_through_json() {
    let input = VehicleInput::default();
    let json = serde_json::to_string(&input).expect("serialize");
    let back: VehicleInput = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(input, back);
    // 외부 스토어 호환: camelCase 키와 ISO 날짜 문자열
    assert!(json.contains("\"purchasePrice\""));
    assert!(json.contains("\"2024-01-01\""));
}

#[test]
fn full_calculation_requires_purchase_price() {
    let missing = VehicleInputDraft::default();
    assert!(matches!(
        run_full_calculation(&missing),
        Err(CalcError::MissingPurchasePrice)
    ));

    let zero = VehicleInputDraft {
        purchase_price: Some(0.0),
        ..VehicleInputDraft::default()
    };
    assert!(matches!(
        run_full_calculation(&zero),
        Err(CalcError::MissingPurchasePrice)
    ));

    let ok = VehicleInputDraft {
        purchase_price: Some(30000.0),
        trade_in_value: Some(5000.0),
        down_payment: Some(5000.0),
        county: Some("Dallas".to_string()),
        ..VehicleInputDraft::default()
    };
    let (input, results) = run_full_calculation(&ok).expect("calculates");
    assert_eq!(input.county, "Dallas");

    let ttl = results.ttl.expect("ttl present");
    assert!((ttl.total_ttl - 1693.75).abs() < 1e-9);
    let payment = results.payment.expect("payment present");
    assert!((payment.loan_amount - 26693.75).abs() < 1e-9);
    assert!(results.lease_comparison.is_some());
    assert!(results.tco.is_some());
}
