//! 차량 입력 모델과 정규화 규칙.
//!
//! 계산기는 모든 수치 필드가 유한한 값으로 채워져 있다고 가정한다.
//! 그 보장은 이 모듈의 `normalize_vehicle_input` 단일 지점에서 제공한다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 기본 구매가 [USD]
pub const DEFAULT_PURCHASE_PRICE: f64 = 30000.0;
/// 기본 트레이드인 가치 [USD]
pub const DEFAULT_TRADE_IN_VALUE: f64 = 0.0;
/// 기본 차량 중량 [lb]
pub const DEFAULT_VEHICLE_WEIGHT: f64 = 4000.0;
/// 기본 카운티
pub const DEFAULT_COUNTY_NAME: &str = "Dallas";
/// 기본 대출 기간 [개월] (허용 범위 12~84)
pub const DEFAULT_LOAN_TERM_MONTHS: u32 = 60;
/// 기본 연이율 [%] (허용 범위 0~100)
pub const DEFAULT_INTEREST_RATE: f64 = 6.5;
/// 기본 선납금 [USD]
pub const DEFAULT_DOWN_PAYMENT: f64 = 0.0;
/// 기본 우편번호 (Dallas)
pub const DEFAULT_ZIP_CODE: &str = "75201";
/// 기본 리스 기간 [개월] (허용 범위 12~60)
pub const DEFAULT_LEASE_TERM: u32 = 36;
/// 기본 신용 점수 (허용 범위 300~850)
pub const DEFAULT_CREDIT_SCORE: u32 = 700;
/// 기본 연간 정비비 [USD/년]
pub const DEFAULT_MAINTENANCE_PER_YEAR: f64 = 500.0;
/// 기본 연비 [mi/gal]
pub const DEFAULT_MPG: f64 = 25.0;
/// 기본 연간 주행거리 [mi/년]
pub const DEFAULT_MILES_PER_YEAR: f64 = 12000.0;
/// 기본 휘발유 단가 [USD/gal]
pub const DEFAULT_GAS_PRICE: f64 = 3.0;
/// 기본 전기 단가 [USD/kWh]
pub const DEFAULT_ELECTRICITY_RATE: f64 = 0.13;

/// 납부 주기.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentFrequency {
    Monthly,
    Biweekly,
    Weekly,
}

impl PaymentFrequency {
    /// 문자열을 파싱한다. 미지의 값은 None.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "monthly" => Some(Self::Monthly),
            "biweekly" => Some(Self::Biweekly),
            "weekly" => Some(Self::Weekly),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Biweekly => "biweekly",
            Self::Weekly => "weekly",
        }
    }
}

/// 정규화가 완료된 차량 입력. 모든 필드가 유한한 값으로 채워져 있다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleInput {
    /// 구매가 [USD]
    pub purchase_price: f64,
    /// 트레이드인 가치 [USD]
    pub trade_in_value: f64,
    /// 차량 중량 [lb]
    pub vehicle_weight: f64,
    pub is_electric: bool,
    pub is_new_vehicle: bool,
    /// 카운티 이름 (대소문자 구분, 미등록 시 테이블이 기본값으로 폴백)
    pub county: String,
    /// 대출 기간 [개월]
    pub loan_term_months: u32,
    /// 연이율 APR [%]
    pub interest_rate: f64,
    /// 선납금 [USD]
    pub down_payment: f64,
    pub payment_frequency: PaymentFrequency,
    /// 우편번호 (5자리)
    pub zip_code: String,
    /// 대출 개시일 (ISO YYYY-MM-DD)
    pub loan_start_date: NaiveDate,
    /// 리스 연간 주행 한도 [mi]
    pub lease_mileage: f64,
    /// 리스 만기 인수가 [USD]
    pub lease_buyout: f64,
    /// 잔존 가치 [USD] (명시 모드에서만 사용)
    pub residual_value: f64,
    /// 머니 팩터 (명시 모드에서만 사용)
    pub money_factor: f64,
    /// true면 잔존가치/머니팩터를 입력값 그대로 사용
    pub lease_mode: bool,
    /// 리스 기간 [개월]
    pub lease_term: u32,
    /// 리스 선납금 [USD]
    pub lease_down_payment: f64,
    pub credit_score: u32,
    /// 리베이트 [USD]
    pub rebate_amount: f64,
    /// 월 보험료 [USD]
    pub insurance_monthly: f64,
    /// 연간 정비비 [USD/년]
    pub maintenance_cost_per_year: f64,
    /// 연비 [mi/gal]
    pub mpg: f64,
    /// 연간 주행거리 [mi]
    pub miles_per_year: f64,
    /// 휘발유 단가 [USD/gal]
    pub gas_price: f64,
    /// 전기 단가 [USD/kWh]
    pub electricity_rate: f64,
}

impl Default for VehicleInput {
    fn default() -> Self {
        normalize_vehicle_input(&VehicleInputDraft::default())
    }
}

/// 호출자가 건네는 부분 입력. 모든 필드가 선택이다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VehicleInputDraft {
    pub purchase_price: Option<f64>,
    pub trade_in_value: Option<f64>,
    pub vehicle_weight: Option<f64>,
    pub is_electric: Option<bool>,
    pub is_new_vehicle: Option<bool>,
    pub county: Option<String>,
    pub loan_term_months: Option<u32>,
    pub interest_rate: Option<f64>,
    pub down_payment: Option<f64>,
    pub payment_frequency: Option<String>,
    pub zip_code: Option<String>,
    pub loan_start_date: Option<String>,
    pub lease_mileage: Option<f64>,
    pub lease_buyout: Option<f64>,
    pub residual_value: Option<f64>,
    pub money_factor: Option<f64>,
    pub lease_mode: Option<bool>,
    pub lease_term: Option<u32>,
    pub lease_down_payment: Option<f64>,
    pub credit_score: Option<u32>,
    pub rebate_amount: Option<f64>,
    pub insurance_monthly: Option<f64>,
    pub maintenance_cost_per_year: Option<f64>,
    pub mpg: Option<f64>,
    pub miles_per_year: Option<f64>,
    pub gas_price: Option<f64>,
    pub electricity_rate: Option<f64>,
}

impl From<&VehicleInput> for VehicleInputDraft {
    fn from(input: &VehicleInput) -> Self {
        Self {
            purchase_price: Some(input.purchase_price),
            trade_in_value: Some(input.trade_in_value),
            vehicle_weight: Some(input.vehicle_weight),
            is_electric: Some(input.is_electric),
            is_new_vehicle: Some(input.is_new_vehicle),
            county: Some(input.county.clone()),
            loan_term_months: Some(input.loan_term_months),
            interest_rate: Some(input.interest_rate),
            down_payment: Some(input.down_payment),
            payment_frequency: Some(input.payment_frequency.as_str().to_string()),
            zip_code: Some(input.zip_code.clone()),
            loan_start_date: Some(input.loan_start_date.format("%Y-%m-%d").to_string()),
            lease_mileage: Some(input.lease_mileage),
            lease_buyout: Some(input.lease_buyout),
            residual_value: Some(input.residual_value),
            money_factor: Some(input.money_factor),
            lease_mode: Some(input.lease_mode),
            lease_term: Some(input.lease_term),
            lease_down_payment: Some(input.lease_down_payment),
            credit_score: Some(input.credit_score),
            rebate_amount: Some(input.rebate_amount),
            insurance_monthly: Some(input.insurance_monthly),
            maintenance_cost_per_year: Some(input.maintenance_cost_per_year),
            mpg: Some(input.mpg),
            miles_per_year: Some(input.miles_per_year),
            gas_price: Some(input.gas_price),
            electricity_rate: Some(input.electricity_rate),
        }
    }
}

/// 양수(>0)가 아니면 기본값으로 대체한다.
fn positive_or(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => default,
    }
}

/// 음수가 아니면(≥0) 그대로, 아니면 기본값으로 대체한다.
fn non_negative_or(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => v,
        _ => default,
    }
}

/// 허용 범위를 벗어난 정수 필드를 기본값으로 대체한다.
fn in_range_or(value: Option<u32>, min: u32, max: u32, default: u32) -> u32 {
    match value {
        Some(v) if (min..=max).contains(&v) => v,
        _ => default,
    }
}

fn normalize_zip(value: Option<&str>) -> String {
    match value {
        Some(z) if z.len() == 5 && z.bytes().all(|b| b.is_ascii_digit()) => z.to_string(),
        _ => DEFAULT_ZIP_CODE.to_string(),
    }
}

/// 고정 플레이스홀더 날짜. 환경 의존적 비결정성을 피하기 위해 "오늘"을 쓰지 않는다.
pub fn default_loan_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

fn normalize_date(value: Option<&str>) -> NaiveDate {
    value
        .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
        .unwrap_or_else(default_loan_start_date)
}

/// 부분 입력을 완전한 `VehicleInput`으로 정규화한다.
///
/// 필드마다 한 분기씩: 미설정/비유한/범위 밖 값은 문서화된 기본값으로 대체한다.
/// 멱등성: 이미 완전한 입력을 다시 정규화해도 값이 변하지 않는다.
pub fn normalize_vehicle_input(draft: &VehicleInputDraft) -> VehicleInput {
    VehicleInput {
        purchase_price: positive_or(draft.purchase_price, DEFAULT_PURCHASE_PRICE),
        trade_in_value: non_negative_or(draft.trade_in_value, DEFAULT_TRADE_IN_VALUE),
        vehicle_weight: positive_or(draft.vehicle_weight, DEFAULT_VEHICLE_WEIGHT),
        is_electric: draft.is_electric.unwrap_or(false),
        is_new_vehicle: draft.is_new_vehicle.unwrap_or(true),
        county: match draft.county.as_deref() {
            Some(c) if !c.trim().is_empty() => c.to_string(),
            _ => DEFAULT_COUNTY_NAME.to_string(),
        },
        loan_term_months: in_range_or(draft.loan_term_months, 12, 84, DEFAULT_LOAN_TERM_MONTHS),
        interest_rate: match draft.interest_rate {
            Some(r) if r.is_finite() && (0.0..=100.0).contains(&r) => r,
            _ => DEFAULT_INTEREST_RATE,
        },
        down_payment: non_negative_or(draft.down_payment, DEFAULT_DOWN_PAYMENT),
        payment_frequency: draft
            .payment_frequency
            .as_deref()
            .and_then(PaymentFrequency::parse)
            .unwrap_or(PaymentFrequency::Monthly),
        zip_code: normalize_zip(draft.zip_code.as_deref()),
        loan_start_date: normalize_date(draft.loan_start_date.as_deref()),
        lease_mileage: non_negative_or(draft.lease_mileage, 0.0),
        lease_buyout: non_negative_or(draft.lease_buyout, 0.0),
        residual_value: non_negative_or(draft.residual_value, 0.0),
        money_factor: non_negative_or(draft.money_factor, 0.0),
        lease_mode: draft.lease_mode.unwrap_or(false),
        lease_term: in_range_or(draft.lease_term, 12, 60, DEFAULT_LEASE_TERM),
        lease_down_payment: non_negative_or(draft.lease_down_payment, 0.0),
        credit_score: in_range_or(draft.credit_score, 300, 850, DEFAULT_CREDIT_SCORE),
        rebate_amount: non_negative_or(draft.rebate_amount, 0.0),
        insurance_monthly: non_negative_or(draft.insurance_monthly, 0.0),
        maintenance_cost_per_year: non_negative_or(
            draft.maintenance_cost_per_year,
            DEFAULT_MAINTENANCE_PER_YEAR,
        ),
        mpg: positive_or(draft.mpg, DEFAULT_MPG),
        miles_per_year: positive_or(draft.miles_per_year, DEFAULT_MILES_PER_YEAR),
        gas_price: positive_or(draft.gas_price, DEFAULT_GAS_PRICE),
        electricity_rate: positive_or(draft.electricity_rate, DEFAULT_ELECTRICITY_RATE),
    }
}
