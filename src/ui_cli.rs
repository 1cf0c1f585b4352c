use std::io::{self, Write};

use chrono::Months;

use crate::app::AppError;
use crate::config::Config;
use crate::fees::county_table::county_or_default;
use crate::fees::ttl::{calculate_ttl, TtlResult};
use crate::financing::amortization::{amortization_schedule, calculate_payment, PaymentResult};
use crate::i18n::{keys, Translator};
use crate::lease::comparison::{calculate_lease_comparison, LeaseComparisonResult};
use crate::money::format_usd;
use crate::ownership::tco::{calculate_tco, TcoResult};
use crate::store::CalculationStore;
use crate::vehicle::{normalize_vehicle_input, VehicleInput, VehicleInputDraft};
use crate::worksheet::{run_full_calculation, CalculationResults};

/// 상환 스케줄 미리보기 줄 수.
const SCHEDULE_PREVIEW_MONTHS: usize = 12;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    TtlFees,
    LoanPayment,
    LeaseVsBuy,
    CostOfOwnership,
    FullQuote,
    Saved,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_TTL_FEES));
    println!("{}", tr.t(keys::MAIN_MENU_LOAN_PAYMENT));
    println!("{}", tr.t(keys::MAIN_MENU_LEASE_VS_BUY));
    println!("{}", tr.t(keys::MAIN_MENU_COST_OF_OWNERSHIP));
    println!("{}", tr.t(keys::MAIN_MENU_FULL_QUOTE));
    println!("{}", tr.t(keys::MAIN_MENU_SAVED));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::TtlFees),
            "2" => return Ok(MenuChoice::LoanPayment),
            "3" => return Ok(MenuChoice::LeaseVsBuy),
            "4" => return Ok(MenuChoice::CostOfOwnership),
            "5" => return Ok(MenuChoice::FullQuote),
            "6" => return Ok(MenuChoice::Saved),
            "7" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// TTL 수수료 메뉴를 처리한다.
pub fn handle_ttl_fees(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::TTL_HEADING));
    println!("{}", tr.t(keys::NOTE_BLANK_DEFAULT));
    let draft = VehicleInputDraft {
        purchase_price: Some(read_f64(tr, tr.t(keys::PROMPT_PURCHASE_PRICE))?),
        trade_in_value: read_opt_f64(tr, tr.t(keys::PROMPT_TRADE_IN))?,
        county: read_opt_line(tr.t(keys::PROMPT_COUNTY))?,
        vehicle_weight: read_opt_f64(tr, tr.t(keys::PROMPT_WEIGHT))?,
        is_electric: Some(read_bool(tr.t(keys::PROMPT_IS_ELECTRIC))?),
        is_new_vehicle: Some(read_bool(tr.t(keys::PROMPT_IS_NEW))?),
        ..VehicleInputDraft::default()
    };
    let input = normalize_vehicle_input(&draft);
    let ttl = calculate_ttl(&input);
    print_ttl(tr, &input, &ttl);
    Ok(())
}

/// 대출 납부액 메뉴를 처리한다.
pub fn handle_loan_payment(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PAYMENT_HEADING));
    let purchase_price = read_f64(tr, tr.t(keys::PROMPT_PURCHASE_PRICE))?;
    let down_payment = read_opt_f64(tr, tr.t(keys::PROMPT_DOWN_PAYMENT))?.unwrap_or(0.0);
    let ttl_amount = read_opt_f64(tr, tr.t(keys::PROMPT_TTL_AMOUNT))?.unwrap_or(0.0);
    let interest_rate = read_f64(tr, tr.t(keys::PROMPT_APR))?;
    let term_months = read_u32(tr, tr.t(keys::PROMPT_TERM_MONTHS))?;

    let payment = calculate_payment(
        purchase_price,
        down_payment,
        ttl_amount,
        interest_rate,
        term_months,
    );
    print_payment(tr, &payment);

    if payment.loan_amount > 0.0 {
        print_schedule_preview(tr, payment.loan_amount, interest_rate, term_months);
    }
    Ok(())
}

/// 리스 vs 구매 메뉴를 처리한다.
pub fn handle_lease_vs_buy(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::LEASE_HEADING));
    println!("{}", tr.t(keys::NOTE_BLANK_DEFAULT));
    let lease_mode = read_bool(tr.t(keys::PROMPT_LEASE_MODE))?;
    let (residual_value, money_factor) = if lease_mode {
        (
            Some(read_f64(tr, tr.t(keys::PROMPT_RESIDUAL_VALUE))?),
            Some(read_f64(tr, tr.t(keys::PROMPT_MONEY_FACTOR))?),
        )
    } else {
        (None, None)
    };
    let draft = VehicleInputDraft {
        purchase_price: Some(read_f64(tr, tr.t(keys::PROMPT_PURCHASE_PRICE))?),
        down_payment: read_opt_f64(tr, tr.t(keys::PROMPT_DOWN_PAYMENT))?,
        interest_rate: read_opt_f64(tr, tr.t(keys::PROMPT_APR))?,
        loan_term_months: read_opt_u32(tr, tr.t(keys::PROMPT_TERM_MONTHS))?,
        payment_frequency: read_opt_frequency(tr.t(keys::PROMPT_FREQUENCY))?,
        lease_mode: Some(lease_mode),
        residual_value,
        money_factor,
        lease_term: read_opt_u32(tr, tr.t(keys::PROMPT_LEASE_TERM))?,
        lease_down_payment: read_opt_f64(tr, tr.t(keys::PROMPT_LEASE_DOWN))?,
        ..VehicleInputDraft::default()
    };
    let input = normalize_vehicle_input(&draft);
    let comparison = calculate_lease_comparison(&input);
    print_lease(tr, &comparison);
    Ok(())
}

/// 총 보유 비용 메뉴를 처리한다.
pub fn handle_cost_of_ownership(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::TCO_HEADING));
    println!("{}", tr.t(keys::NOTE_BLANK_DEFAULT));
    let is_electric = read_bool(tr.t(keys::PROMPT_IS_ELECTRIC))?;
    let a = &cfg.assumptions;
    let draft = VehicleInputDraft {
        purchase_price: Some(read_f64(tr, tr.t(keys::PROMPT_PURCHASE_PRICE))?),
        down_payment: read_opt_f64(tr, tr.t(keys::PROMPT_DOWN_PAYMENT))?,
        interest_rate: read_opt_f64(tr, tr.t(keys::PROMPT_APR))?,
        loan_term_months: read_opt_u32(tr, tr.t(keys::PROMPT_TERM_MONTHS))?,
        is_electric: Some(is_electric),
        maintenance_cost_per_year: Some(
            read_opt_f64(tr, tr.t(keys::PROMPT_MAINTENANCE))?.unwrap_or(a.maintenance_per_year),
        ),
        miles_per_year: Some(
            read_opt_f64(tr, tr.t(keys::PROMPT_MILES_PER_YEAR))?.unwrap_or(a.miles_per_year),
        ),
        mpg: if is_electric {
            None
        } else {
            read_opt_f64(tr, tr.t(keys::PROMPT_MPG))?
        },
        gas_price: if is_electric {
            None
        } else {
            Some(read_opt_f64(tr, tr.t(keys::PROMPT_GAS_PRICE))?.unwrap_or(a.gas_price_per_gallon))
        },
        electricity_rate: if is_electric {
            Some(
                read_opt_f64(tr, tr.t(keys::PROMPT_ELECTRICITY_RATE))?
                    .unwrap_or(a.electricity_rate_per_kwh),
            )
        } else {
            None
        },
        ..VehicleInputDraft::default()
    };
    let input = normalize_vehicle_input(&draft);
    let tco = calculate_tco(&input);
    print_tco(tr, &tco);
    Ok(())
}

/// 전체 계산 메뉴를 처리한다. 결과 저장과 공유 코드 발급까지 잇는다.
pub fn handle_full_quote(
    tr: &Translator,
    cfg: &Config,
    store: &mut CalculationStore,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::QUOTE_HEADING));
    println!("{}", tr.t(keys::NOTE_BLANK_DEFAULT));
    let is_electric = read_bool(tr.t(keys::PROMPT_IS_ELECTRIC))?;
    let a = &cfg.assumptions;
    let draft = VehicleInputDraft {
        purchase_price: read_opt_f64(tr, tr.t(keys::PROMPT_PURCHASE_PRICE))?,
        trade_in_value: read_opt_f64(tr, tr.t(keys::PROMPT_TRADE_IN))?,
        county: read_opt_line(tr.t(keys::PROMPT_COUNTY))?,
        vehicle_weight: read_opt_f64(tr, tr.t(keys::PROMPT_WEIGHT))?,
        is_electric: Some(is_electric),
        is_new_vehicle: Some(read_bool(tr.t(keys::PROMPT_IS_NEW))?),
        down_payment: read_opt_f64(tr, tr.t(keys::PROMPT_DOWN_PAYMENT))?,
        interest_rate: read_opt_f64(tr, tr.t(keys::PROMPT_APR))?,
        loan_term_months: read_opt_u32(tr, tr.t(keys::PROMPT_TERM_MONTHS))?,
        payment_frequency: read_opt_frequency(tr.t(keys::PROMPT_FREQUENCY))?,
        loan_start_date: read_opt_line(tr.t(keys::PROMPT_START_DATE))?,
        maintenance_cost_per_year: Some(a.maintenance_per_year),
        miles_per_year: Some(a.miles_per_year),
        gas_price: Some(a.gas_price_per_gallon),
        electricity_rate: Some(a.electricity_rate_per_kwh),
        ..VehicleInputDraft::default()
    };

    let (input, results) = run_full_calculation(&draft)?;
    print_results(tr, &input, &results);

    if read_bool(tr.t(keys::QUOTE_SAVE_PROMPT))? {
        let name = read_line(tr.t(keys::QUOTE_NAME_PROMPT))?;
        let record = store.save_record(name.trim(), input, results)?;
        println!("{} {} ({})", tr.t(keys::QUOTE_SAVED_AS), record.name, record.id);
        if read_bool(tr.t(keys::QUOTE_SHARE_PROMPT))? {
            if let Some(share) = store.create_share(record.id)? {
                println!("{} {}", tr.t(keys::QUOTE_SHARE_CODE), share.code);
            }
        }
    }
    Ok(())
}

/// 저장된 계산 메뉴를 처리한다.
pub fn handle_saved(tr: &Translator, store: &mut CalculationStore) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SAVED_HEADING));
    if store.list().is_empty() {
        println!("{}", tr.t(keys::SAVED_EMPTY));
    } else {
        for (idx, record) in store.list().iter().enumerate() {
            let total = record
                .results
                .ttl
                .map(|t| format_usd(t.total_ttl))
                .unwrap_or_default();
            println!(
                "{}) {}  {}  {}",
                idx + 1,
                record.name,
                record.timestamp.format("%Y-%m-%d %H:%M"),
                total
            );
        }
    }
    println!("{}", tr.t(keys::SAVED_ACTIONS));
    let sel = read_line(tr.t(keys::SAVED_SELECT_PROMPT))?;
    match sel.trim() {
        "1" => {
            if let Some(record) = pick_record(tr, store)? {
                print_results(tr, &record.inputs, &record.results);
            }
        }
        "2" => {
            if let Some(record) = pick_record(tr, store)? {
                if let Some(share) = store.create_share(record.id)? {
                    println!("{} {}", tr.t(keys::SAVED_SHARE_CREATED), share.code);
                }
            }
        }
        "3" => {
            if let Some(record) = pick_record(tr, store)? {
                store.delete(record.id)?;
                println!("{}", tr.t(keys::SAVED_DELETED));
            }
        }
        "4" => {
            let code = read_line(tr.t(keys::SAVED_RESOLVE_PROMPT))?;
            match store.resolve_share(code.trim())? {
                Some(record) => print_results(tr, &record.inputs, &record.results),
                None => println!("{}", tr.t(keys::SAVED_CODE_INVALID)),
            }
        }
        _ => {}
    }
    Ok(())
}

fn pick_record(
    tr: &Translator,
    store: &CalculationStore,
) -> Result<Option<crate::store::SavedCalculation>, AppError> {
    let sel = read_line(tr.t(keys::SAVED_SELECT_PROMPT))?;
    let picked = sel
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|idx| store.list().get(idx))
        .cloned();
    if picked.is_none() {
        println!("{}", tr.t(keys::SAVED_NOT_FOUND));
    }
    Ok(picked)
}

/// 설정 메뉴를 처리한다. 변경 여부와 무관하게 호출측에서 저장한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_LANGUAGE),
        cfg.language.as_deref().unwrap_or("auto")
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" | "0" => return Ok(()),
        "1" => {
            let lang = read_line(tr.t(keys::SETTINGS_CURRENT_LANGUAGE))?;
            match lang.trim() {
                "ko" | "en" => cfg.language = Some(lang.trim().to_string()),
                _ => {
                    println!("{}", tr.t(keys::SETTINGS_INVALID));
                    return Ok(());
                }
            }
        }
        "2" => cfg.assumptions.gas_price_per_gallon = read_f64(tr, tr.t(keys::SETTINGS_GAS_PRICE))?,
        "3" => {
            cfg.assumptions.electricity_rate_per_kwh = read_f64(tr, tr.t(keys::SETTINGS_ELECTRICITY))?
        }
        "4" => cfg.assumptions.miles_per_year = read_f64(tr, tr.t(keys::SETTINGS_MILES))?,
        "5" => cfg.assumptions.maintenance_per_year = read_f64(tr, tr.t(keys::SETTINGS_MAINTENANCE))?,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn print_ttl(tr: &Translator, input: &VehicleInput, ttl: &TtlResult) {
    println!(
        "{} {}",
        tr.t(keys::TTL_COUNTY_USED),
        county_or_default(&input.county).name
    );
    println!("{} {}", tr.t(keys::TTL_SALES_TAX), format_usd(ttl.sales_tax));
    println!("{} {}", tr.t(keys::TTL_TITLE_FEE), format_usd(ttl.title_fee));
    println!(
        "{} {}",
        tr.t(keys::TTL_REGISTRATION),
        format_usd(ttl.registration_fees)
    );
    if ttl.ev_fee > 0.0 {
        println!("{} {}", tr.t(keys::TTL_EV_FEE), format_usd(ttl.ev_fee));
    }
    if ttl.emissions > 0.0 {
        println!("{} {}", tr.t(keys::TTL_EMISSIONS), format_usd(ttl.emissions));
    }
    println!("{} {}", tr.t(keys::TTL_TOTAL), format_usd(ttl.total_ttl));
}

fn print_payment(tr: &Translator, payment: &PaymentResult) {
    println!(
        "{} {}",
        tr.t(keys::PAYMENT_LOAN_AMOUNT),
        format_usd(payment.loan_amount)
    );
    println!(
        "{} {}",
        tr.t(keys::PAYMENT_MONTHLY),
        format_usd(payment.monthly_payment)
    );
    println!(
        "{} {}",
        tr.t(keys::PAYMENT_BIWEEKLY),
        format_usd(payment.biweekly_payment)
    );
    println!(
        "{} {}",
        tr.t(keys::PAYMENT_TOTAL_INTEREST),
        format_usd(payment.total_interest)
    );
    println!(
        "{} {}",
        tr.t(keys::PAYMENT_TOTAL_FINANCED),
        format_usd(payment.total_financed)
    );
}

fn print_schedule_preview(tr: &Translator, principal: f64, rate: f64, term_months: u32) {
    let schedule = amortization_schedule(principal, rate, term_months);
    println!("{}", tr.t(keys::PAYMENT_SCHEDULE_HEADING));
    for entry in schedule.iter().take(SCHEDULE_PREVIEW_MONTHS) {
        println!(
            "{:>4}  {:>10}  {:>10}  {:>12}",
            entry.month,
            format_usd(entry.interest),
            format_usd(entry.principal),
            format_usd(entry.balance)
        );
    }
    if schedule.len() > SCHEDULE_PREVIEW_MONTHS {
        println!("{}", tr.t(keys::PAYMENT_SCHEDULE_MORE));
    }
}

fn print_lease(tr: &Translator, comparison: &LeaseComparisonResult) {
    println!(
        "{} {}",
        tr.t(keys::LEASE_MONTHLY_PAYMENT),
        format_usd(comparison.monthly_lease_payment)
    );
    println!(
        "{} {}",
        tr.t(keys::LEASE_TOTAL_COST),
        format_usd(comparison.total_lease_cost)
    );
    println!(
        "{} {}",
        tr.t(keys::LEASE_PURCHASE_OPTION),
        format_usd(comparison.purchase_option)
    );
    println!(
        "{} {}",
        tr.t(keys::LEASE_RECOMMENDATION),
        comparison.lease_vs_buy
    );
}

fn print_tco(tr: &Translator, tco: &TcoResult) {
    println!(
        "{} {}",
        tr.t(keys::TCO_TOTAL),
        format_usd(tco.total_cost_of_ownership)
    );
    println!("{} {}", tr.t(keys::TCO_ANNUAL), format_usd(tco.annual_cost));
    println!(
        "{} {}",
        tr.t(keys::TCO_MAINTENANCE),
        format_usd(tco.maintenance_cost)
    );
    println!("{} {}", tr.t(keys::TCO_FUEL), format_usd(tco.fuel_cost));
}

/// 전체 계산 결과를 섹션별로 출력한다.
pub fn print_results(tr: &Translator, input: &VehicleInput, results: &CalculationResults) {
    if let Some(ref ttl) = results.ttl {
        println!("{}", tr.t(keys::TTL_HEADING));
        print_ttl(tr, input, ttl);
    }
    if let Some(ref payment) = results.payment {
        println!("{}", tr.t(keys::PAYMENT_HEADING));
        print_payment(tr, payment);
        if let Some(payoff) = input
            .loan_start_date
            .checked_add_months(Months::new(input.loan_term_months))
        {
            println!(
                "{} {}",
                tr.t(keys::PAYMENT_PAYOFF_DATE),
                payoff.format("%Y-%m-%d")
            );
        }
    }
    if let Some(ref comparison) = results.lease_comparison {
        println!("{}", tr.t(keys::LEASE_HEADING));
        print_lease(tr, comparison);
    }
    if let Some(ref tco) = results.tco {
        println!("{}", tr.t(keys::TCO_HEADING));
        print_tco(tr, tco);
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

/// 빈 입력이면 None을 돌려주는 한 줄 읽기.
fn read_opt_line(prompt: &str) -> Result<Option<String>, AppError> {
    let s = read_line(prompt)?;
    let trimmed = s.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 빈 입력은 None, 그 외에는 숫자가 나올 때까지 다시 묻는다.
fn read_opt_f64(tr: &Translator, prompt: &str) -> Result<Option<f64>, AppError> {
    loop {
        let s = read_line(prompt)?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(Some(v)),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_u32(tr: &Translator, prompt: &str) -> Result<u32, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<u32>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_opt_u32(tr: &Translator, prompt: &str) -> Result<Option<u32>, AppError> {
    loop {
        let s = read_line(prompt)?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        match trimmed.parse::<u32>() {
            Ok(v) => return Ok(Some(v)),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// y/Y로 시작하면 true. 그 외는 전부 false.
fn read_bool(prompt: &str) -> Result<bool, AppError> {
    let s = read_line(prompt)?;
    Ok(matches!(s.trim().chars().next(), Some('y') | Some('Y')))
}

/// 납부 주기 선택. 빈 입력은 None.
fn read_opt_frequency(prompt: &str) -> Result<Option<String>, AppError> {
    let s = read_line(prompt)?;
    Ok(match s.trim() {
        "1" => Some("monthly".to_string()),
        "2" => Some("biweekly".to_string()),
        "3" => Some("weekly".to_string()),
        _ => None,
    })
}
