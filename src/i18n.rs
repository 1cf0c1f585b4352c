use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_TTL_FEES: &str = "main_menu.ttl_fees";
    pub const MAIN_MENU_LOAN_PAYMENT: &str = "main_menu.loan_payment";
    pub const MAIN_MENU_LEASE_VS_BUY: &str = "main_menu.lease_vs_buy";
    pub const MAIN_MENU_COST_OF_OWNERSHIP: &str = "main_menu.cost_of_ownership";
    pub const MAIN_MENU_FULL_QUOTE: &str = "main_menu.full_quote";
    pub const MAIN_MENU_SAVED: &str = "main_menu.saved";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const NOTE_BLANK_DEFAULT: &str = "note.blank_default";

    pub const PROMPT_PURCHASE_PRICE: &str = "prompt.purchase_price";
    pub const PROMPT_TRADE_IN: &str = "prompt.trade_in";
    pub const PROMPT_COUNTY: &str = "prompt.county";
    pub const PROMPT_WEIGHT: &str = "prompt.weight";
    pub const PROMPT_IS_ELECTRIC: &str = "prompt.is_electric";
    pub const PROMPT_IS_NEW: &str = "prompt.is_new";
    pub const PROMPT_DOWN_PAYMENT: &str = "prompt.down_payment";
    pub const PROMPT_APR: &str = "prompt.apr";
    pub const PROMPT_TERM_MONTHS: &str = "prompt.term_months";
    pub const PROMPT_FREQUENCY: &str = "prompt.frequency";
    pub const PROMPT_ZIP: &str = "prompt.zip";
    pub const PROMPT_START_DATE: &str = "prompt.start_date";
    pub const PROMPT_TTL_AMOUNT: &str = "prompt.ttl_amount";

    pub const PROMPT_LEASE_MODE: &str = "prompt.lease_mode";
    pub const PROMPT_RESIDUAL_VALUE: &str = "prompt.residual_value";
    pub const PROMPT_MONEY_FACTOR: &str = "prompt.money_factor";
    pub const PROMPT_LEASE_TERM: &str = "prompt.lease_term";
    pub const PROMPT_LEASE_DOWN: &str = "prompt.lease_down";

    pub const PROMPT_MAINTENANCE: &str = "prompt.maintenance";
    pub const PROMPT_MPG: &str = "prompt.mpg";
    pub const PROMPT_MILES_PER_YEAR: &str = "prompt.miles_per_year";
    pub const PROMPT_GAS_PRICE: &str = "prompt.gas_price";
    pub const PROMPT_ELECTRICITY_RATE: &str = "prompt.electricity_rate";

    pub const TTL_HEADING: &str = "ttl.heading";
    pub const TTL_COUNTY_USED: &str = "ttl.county_used";
    pub const TTL_SALES_TAX: &str = "ttl.sales_tax";
    pub const TTL_TITLE_FEE: &str = "ttl.title_fee";
    pub const TTL_REGISTRATION: &str = "ttl.registration";
    pub const TTL_EV_FEE: &str = "ttl.ev_fee";
    pub const TTL_EMISSIONS: &str = "ttl.emissions";
    pub const TTL_TOTAL: &str = "ttl.total";

    pub const PAYMENT_HEADING: &str = "payment.heading";
    pub const PAYMENT_LOAN_AMOUNT: &str = "payment.loan_amount";
    pub const PAYMENT_MONTHLY: &str = "payment.monthly";
    pub const PAYMENT_BIWEEKLY: &str = "payment.biweekly";
    pub const PAYMENT_TOTAL_INTEREST: &str = "payment.total_interest";
    pub const PAYMENT_TOTAL_FINANCED: &str = "payment.total_financed";
    pub const PAYMENT_PAYOFF_DATE: &str = "payment.payoff_date";
    pub const PAYMENT_SCHEDULE_HEADING: &str = "payment.schedule_heading";
    pub const PAYMENT_SCHEDULE_MORE: &str = "payment.schedule_more";

    pub const LEASE_HEADING: &str = "lease.heading";
    pub const LEASE_MONTHLY_PAYMENT: &str = "lease.monthly_payment";
    pub const LEASE_TOTAL_COST: &str = "lease.total_cost";
    pub const LEASE_PURCHASE_OPTION: &str = "lease.purchase_option";
    pub const LEASE_RECOMMENDATION: &str = "lease.recommendation";

    pub const TCO_HEADING: &str = "tco.heading";
    pub const TCO_TOTAL: &str = "tco.total";
    pub const TCO_ANNUAL: &str = "tco.annual";
    pub const TCO_MAINTENANCE: &str = "tco.maintenance";
    pub const TCO_FUEL: &str = "tco.fuel";

    pub const QUOTE_HEADING: &str = "quote.heading";
    pub const QUOTE_SAVE_PROMPT: &str = "quote.save_prompt";
    pub const QUOTE_NAME_PROMPT: &str = "quote.name_prompt";
    pub const QUOTE_SAVED_AS: &str = "quote.saved_as";
    pub const QUOTE_SHARE_PROMPT: &str = "quote.share_prompt";
    pub const QUOTE_SHARE_CODE: &str = "quote.share_code";

    pub const SAVED_HEADING: &str = "saved.heading";
    pub const SAVED_EMPTY: &str = "saved.empty";
    pub const SAVED_ACTIONS: &str = "saved.actions";
    pub const SAVED_SELECT_PROMPT: &str = "saved.select_prompt";
    pub const SAVED_DELETED: &str = "saved.deleted";
    pub const SAVED_NOT_FOUND: &str = "saved.not_found";
    pub const SAVED_RESOLVE_PROMPT: &str = "saved.resolve_prompt";
    pub const SAVED_SHARE_CREATED: &str = "saved.share_created";
    pub const SAVED_CODE_INVALID: &str = "saved.code_invalid";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_GAS_PRICE: &str = "settings.gas_price";
    pub const SETTINGS_ELECTRICITY: &str = "settings.electricity";
    pub const SETTINGS_MILES: &str = "settings.miles";
    pub const SETTINGS_MAINTENANCE: &str = "settings.maintenance";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Texas Vehicle Cost Toolbox ===",
        MAIN_MENU_TTL_FEES => "1) TTL 수수료 (Title/Tax/License)",
        MAIN_MENU_LOAN_PAYMENT => "2) 대출 납부액",
        MAIN_MENU_LEASE_VS_BUY => "3) 리스 vs 구매",
        MAIN_MENU_COST_OF_OWNERSHIP => "4) 총 보유 비용",
        MAIN_MENU_FULL_QUOTE => "5) 전체 계산",
        MAIN_MENU_SAVED => "6) 저장된 계산/공유 코드",
        MAIN_MENU_SETTINGS => "7) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        NOTE_BLANK_DEFAULT => "참고: 빈 입력은 기본값을 사용합니다.",
        PROMPT_PURCHASE_PRICE => "구매가 [USD]: ",
        PROMPT_TRADE_IN => "트레이드인 가치 [USD] (없으면 0): ",
        PROMPT_COUNTY => "카운티 (예: Dallas, Harris): ",
        PROMPT_WEIGHT => "차량 중량 [lb]: ",
        PROMPT_IS_ELECTRIC => "전기차입니까? (y/n): ",
        PROMPT_IS_NEW => "신차입니까? (y/n): ",
        PROMPT_DOWN_PAYMENT => "선납금 [USD]: ",
        PROMPT_APR => "연이율 APR [%]: ",
        PROMPT_TERM_MONTHS => "대출 기간 [개월, 12~84]: ",
        PROMPT_FREQUENCY => "납부 주기 (1=월, 2=격주, 3=주): ",
        PROMPT_ZIP => "우편번호 (5자리): ",
        PROMPT_START_DATE => "대출 개시일 (YYYY-MM-DD): ",
        PROMPT_TTL_AMOUNT => "대출에 합산할 TTL 총액 [USD] (없으면 0): ",
        PROMPT_LEASE_MODE => "잔존가치/머니팩터를 직접 입력합니까? (y=직접, n=추정): ",
        PROMPT_RESIDUAL_VALUE => "잔존가치 [USD]: ",
        PROMPT_MONEY_FACTOR => "머니 팩터 (예: 0.0027): ",
        PROMPT_LEASE_TERM => "리스 기간 [개월, 12~60]: ",
        PROMPT_LEASE_DOWN => "리스 선납금 [USD]: ",
        PROMPT_MAINTENANCE => "연간 정비비 [USD/년]: ",
        PROMPT_MPG => "연비 [mi/gal]: ",
        PROMPT_MILES_PER_YEAR => "연간 주행거리 [mi]: ",
        PROMPT_GAS_PRICE => "휘발유 단가 [USD/gal]: ",
        PROMPT_ELECTRICITY_RATE => "전기 단가 [USD/kWh]: ",
        TTL_HEADING => "\n-- TTL 수수료 내역 --",
        TTL_COUNTY_USED => "적용 카운티:",
        TTL_SALES_TAX => "판매세 (6.25%):",
        TTL_TITLE_FEE => "타이틀 수수료:",
        TTL_REGISTRATION => "등록 수수료:",
        TTL_EV_FEE => "전기차 수수료:",
        TTL_EMISSIONS => "배출가스 검사:",
        TTL_TOTAL => "TTL 총액:",
        PAYMENT_HEADING => "\n-- 대출 납부액 --",
        PAYMENT_LOAN_AMOUNT => "대출 원금:",
        PAYMENT_MONTHLY => "월 납부액:",
        PAYMENT_BIWEEKLY => "격주 납부액 (월/2 근사):",
        PAYMENT_TOTAL_INTEREST => "총 이자:",
        PAYMENT_TOTAL_FINANCED => "총 상환액:",
        PAYMENT_PAYOFF_DATE => "상환 완료 예정:",
        PAYMENT_SCHEDULE_HEADING => "회차    이자        원금        잔액",
        PAYMENT_SCHEDULE_MORE => "... (이후 회차 생략)",
        LEASE_HEADING => "\n-- 리스 vs 구매 --",
        LEASE_MONTHLY_PAYMENT => "월 리스 납부액:",
        LEASE_TOTAL_COST => "리스 총 비용:",
        LEASE_PURCHASE_OPTION => "만기 매수 옵션:",
        LEASE_RECOMMENDATION => "권고:",
        TCO_HEADING => "\n-- 총 보유 비용 --",
        TCO_TOTAL => "총 보유 비용:",
        TCO_ANNUAL => "연 환산:",
        TCO_MAINTENANCE => "정비비 합계:",
        TCO_FUEL => "연료/전기 합계:",
        QUOTE_HEADING => "\n-- 전체 계산 --",
        QUOTE_SAVE_PROMPT => "이 계산을 저장합니까? (y/n): ",
        QUOTE_NAME_PROMPT => "저장 이름: ",
        QUOTE_SAVED_AS => "저장되었습니다:",
        QUOTE_SHARE_PROMPT => "공유 코드를 발급합니까? (y/n): ",
        QUOTE_SHARE_CODE => "공유 코드 (30일 유효):",
        SAVED_HEADING => "\n-- 저장된 계산 --",
        SAVED_EMPTY => "저장된 계산이 없습니다.",
        SAVED_ACTIONS => "1) 열기  2) 공유 코드 발급  3) 삭제  4) 공유 코드로 찾기  0) 뒤로",
        SAVED_SELECT_PROMPT => "번호 선택: ",
        SAVED_DELETED => "삭제되었습니다.",
        SAVED_NOT_FOUND => "해당 항목이 없습니다.",
        SAVED_RESOLVE_PROMPT => "공유 코드 입력: ",
        SAVED_SHARE_CREATED => "공유 코드 (30일 유효):",
        SAVED_CODE_INVALID => "코드가 없거나 만료되었습니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_OPTIONS => "1) 언어(ko/en)  2) 휘발유 단가  3) 전기 단가  4) 연간 주행거리  5) 연간 정비비  0) 뒤로",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        SETTINGS_GAS_PRICE => "휘발유 단가 [USD/gal]: ",
        SETTINGS_ELECTRICITY => "전기 단가 [USD/kWh]: ",
        SETTINGS_MILES => "연간 주행거리 [mi]: ",
        SETTINGS_MAINTENANCE => "연간 정비비 [USD/년]: ",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Texas Vehicle Cost Toolbox ===",
        MAIN_MENU_TTL_FEES => "1) TTL fees (Title/Tax/License)",
        MAIN_MENU_LOAN_PAYMENT => "2) Loan payment",
        MAIN_MENU_LEASE_VS_BUY => "3) Lease vs Buy",
        MAIN_MENU_COST_OF_OWNERSHIP => "4) Cost of ownership",
        MAIN_MENU_FULL_QUOTE => "5) Full calculation",
        MAIN_MENU_SAVED => "6) Saved calculations & share codes",
        MAIN_MENU_SETTINGS => "7) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        NOTE_BLANK_DEFAULT => "Note: leave a prompt blank to use the default.",
        PROMPT_PURCHASE_PRICE => "Purchase price [USD]: ",
        PROMPT_TRADE_IN => "Trade-in value [USD] (0 if none): ",
        PROMPT_COUNTY => "County (e.g. Dallas, Harris): ",
        PROMPT_WEIGHT => "Vehicle weight [lb]: ",
        PROMPT_IS_ELECTRIC => "Electric vehicle? (y/n): ",
        PROMPT_IS_NEW => "New vehicle? (y/n): ",
        PROMPT_DOWN_PAYMENT => "Down payment [USD]: ",
        PROMPT_APR => "Interest rate APR [%]: ",
        PROMPT_TERM_MONTHS => "Loan term [months, 12-84]: ",
        PROMPT_FREQUENCY => "Payment frequency (1=monthly, 2=biweekly, 3=weekly): ",
        PROMPT_ZIP => "ZIP code (5 digits): ",
        PROMPT_START_DATE => "Loan start date (YYYY-MM-DD): ",
        PROMPT_TTL_AMOUNT => "TTL amount financed [USD] (0 if none): ",
        PROMPT_LEASE_MODE => "Enter residual/money factor directly? (y=direct, n=estimate): ",
        PROMPT_RESIDUAL_VALUE => "Residual value [USD]: ",
        PROMPT_MONEY_FACTOR => "Money factor (e.g. 0.0027): ",
        PROMPT_LEASE_TERM => "Lease term [months, 12-60]: ",
        PROMPT_LEASE_DOWN => "Lease down payment [USD]: ",
        PROMPT_MAINTENANCE => "Maintenance per year [USD/yr]: ",
        PROMPT_MPG => "Fuel economy [mi/gal]: ",
        PROMPT_MILES_PER_YEAR => "Miles per year [mi]: ",
        PROMPT_GAS_PRICE => "Gas price [USD/gal]: ",
        PROMPT_ELECTRICITY_RATE => "Electricity rate [USD/kWh]: ",
        TTL_HEADING => "\n-- TTL fee breakdown --",
        TTL_COUNTY_USED => "County applied:",
        TTL_SALES_TAX => "Sales tax (6.25%):",
        TTL_TITLE_FEE => "Title fee:",
        TTL_REGISTRATION => "Registration fees:",
        TTL_EV_FEE => "EV fee:",
        TTL_EMISSIONS => "Emissions:",
        TTL_TOTAL => "Total TTL:",
        PAYMENT_HEADING => "\n-- Loan payment --",
        PAYMENT_LOAN_AMOUNT => "Loan amount:",
        PAYMENT_MONTHLY => "Monthly payment:",
        PAYMENT_BIWEEKLY => "Biweekly payment (monthly/2 approx.):",
        PAYMENT_TOTAL_INTEREST => "Total interest:",
        PAYMENT_TOTAL_FINANCED => "Total financed:",
        PAYMENT_PAYOFF_DATE => "Payoff date:",
        PAYMENT_SCHEDULE_HEADING => "Month   Interest    Principal   Balance",
        PAYMENT_SCHEDULE_MORE => "... (remaining months omitted)",
        LEASE_HEADING => "\n-- Lease vs Buy --",
        LEASE_MONTHLY_PAYMENT => "Monthly lease payment:",
        LEASE_TOTAL_COST => "Total lease cost:",
        LEASE_PURCHASE_OPTION => "Purchase option at lease end:",
        LEASE_RECOMMENDATION => "Recommendation:",
        TCO_HEADING => "\n-- Cost of ownership --",
        TCO_TOTAL => "Total cost of ownership:",
        TCO_ANNUAL => "Annualized:",
        TCO_MAINTENANCE => "Maintenance total:",
        TCO_FUEL => "Fuel/energy total:",
        QUOTE_HEADING => "\n-- Full calculation --",
        QUOTE_SAVE_PROMPT => "Save this calculation? (y/n): ",
        QUOTE_NAME_PROMPT => "Name: ",
        QUOTE_SAVED_AS => "Saved:",
        QUOTE_SHARE_PROMPT => "Create a share code? (y/n): ",
        QUOTE_SHARE_CODE => "Share code (valid 30 days):",
        SAVED_HEADING => "\n-- Saved calculations --",
        SAVED_EMPTY => "No saved calculations.",
        SAVED_ACTIONS => "1) Open  2) Create share code  3) Delete  4) Look up by share code  0) Back",
        SAVED_SELECT_PROMPT => "Select number: ",
        SAVED_DELETED => "Deleted.",
        SAVED_NOT_FOUND => "No such entry.",
        SAVED_RESOLVE_PROMPT => "Enter share code: ",
        SAVED_SHARE_CREATED => "Share code (valid 30 days):",
        SAVED_CODE_INVALID => "Code not found or expired.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_OPTIONS => "1) Language (ko/en)  2) Gas price  3) Electricity rate  4) Miles per year  5) Maintenance per year  0) Back",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings saved.",
        SETTINGS_GAS_PRICE => "Gas price [USD/gal]: ",
        SETTINGS_ELECTRICITY => "Electricity rate [USD/kWh]: ",
        SETTINGS_MILES => "Miles per year [mi]: ",
        SETTINGS_MAINTENANCE => "Maintenance per year [USD/yr]: ",
        _ => return None,
    })
}
