//! 계산기 전체를 한 번에 돌리는 오케스트레이션 계층.
//!
//! 흐름: 부분 입력 → 필수값 가드 → 정규화 → TTL → 납부액(TTL 총액 사용)
//! → 리스 비교 → TCO. 각 계산기는 독립 호출이 가능하므로 결과 필드는 선택이다.

use serde::{Deserialize, Serialize};

use crate::fees::ttl::{calculate_ttl, TtlResult};
use crate::financing::amortization::{calculate_payment, PaymentResult};
use crate::lease::comparison::{calculate_lease_comparison, LeaseComparisonResult};
use crate::ownership::tco::{calculate_tco, TcoResult};
use crate::vehicle::{normalize_vehicle_input, VehicleInput, VehicleInputDraft};

/// 계산 요청 시 발생 가능한 오류.
#[derive(Debug)]
pub enum CalcError {
    /// 구매가 누락 또는 0 이하. 계산을 명시적으로 요청한 경우에만 표면화된다.
    MissingPurchasePrice,
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalcError::MissingPurchasePrice => {
                write!(f, "구매가가 없거나 0입니다. 구매가를 입력하세요.")
            }
        }
    }
}

impl std::error::Error for CalcError {}

/// 네 계산기의 결과 묶음. 스냅샷으로 저장/공유된다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResults {
    pub ttl: Option<TtlResult>,
    pub payment: Option<PaymentResult>,
    pub lease_comparison: Option<LeaseComparisonResult>,
    pub tco: Option<TcoResult>,
}

/// 정규화된 입력으로 네 계산기를 모두 실행한다.
pub fn calculate_all(input: &VehicleInput) -> CalculationResults {
    let ttl = calculate_ttl(input);
    let payment = calculate_payment(
        input.purchase_price,
        input.down_payment,
        ttl.total_ttl,
        input.interest_rate,
        input.loan_term_months,
    );
    let lease_comparison = calculate_lease_comparison(input);
    let tco = calculate_tco(input);

    CalculationResults {
        ttl: Some(ttl),
        payment: Some(payment),
        lease_comparison: Some(lease_comparison),
        tco: Some(tco),
    }
}

/// 부분 입력으로 전체 계산을 실행한다.
///
/// 유일한 치명적 가드: 원시 입력의 구매가가 비어 있거나 0 이하면 오류.
/// 정규화는 빈 필드를 채우는 일이므로 이 검사는 정규화 전에 수행한다.
pub fn run_full_calculation(
    draft: &VehicleInputDraft,
) -> Result<(VehicleInput, CalculationResults), CalcError> {
    match draft.purchase_price {
        Some(price) if price.is_finite() && price > 0.0 => {}
        _ => return Err(CalcError::MissingPurchasePrice),
    }
    let input = normalize_vehicle_input(draft);
    let results = calculate_all(&input);
    Ok((input, results))
}
