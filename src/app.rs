use std::path::Path;

use crate::config::Config;
use crate::i18n::{self, Translator};
use crate::store::CalculationStore;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 저장/공유 스토어 오류
    Store(crate::store::StoreError),
    /// 계산 요청 오류 (구매가 누락 등)
    Calc(crate::worksheet::CalcError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Store(e) => write!(f, "저장소 오류: {e}"),
            AppError::Calc(e) => write!(f, "계산 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<crate::store::StoreError> for AppError {
    fn from(value: crate::store::StoreError) -> Self {
        AppError::Store(value)
    }
}

impl From<crate::worksheet::CalcError> for AppError {
    fn from(value: crate::worksheet::CalcError) -> Self {
        AppError::Calc(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
///
/// 계산 오류(구매가 누락)는 메뉴를 끝내지 않고 표시만 하고 계속한다.
pub fn run(
    config: &mut Config,
    config_path: &Path,
    store: &mut CalculationStore,
    tr: &Translator,
) -> Result<(), AppError> {
    loop {
        let outcome = match ui_cli::main_menu(tr)? {
            MenuChoice::TtlFees => ui_cli::handle_ttl_fees(tr, config),
            MenuChoice::LoanPayment => ui_cli::handle_loan_payment(tr, config),
            MenuChoice::LeaseVsBuy => ui_cli::handle_lease_vs_buy(tr, config),
            MenuChoice::CostOfOwnership => ui_cli::handle_cost_of_ownership(tr, config),
            MenuChoice::FullQuote => ui_cli::handle_full_quote(tr, config, store),
            MenuChoice::Saved => ui_cli::handle_saved(tr, store),
            MenuChoice::Settings => {
                let res = ui_cli::handle_settings(tr, config);
                config.save(config_path)?;
                res
            }
            MenuChoice::Exit => {
                config.save(config_path)?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        };
        match outcome {
            Err(AppError::Calc(e)) => println!("{}: {e}", tr.t(i18n::keys::ERROR_PREFIX)),
            other => other?,
        }
    }
    Ok(())
}
