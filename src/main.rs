use std::path::PathBuf;

use clap::Parser;

use vehicle_cost_toolbox::{app, config, i18n, store::CalculationStore};

/// 텍사스 차량 TTL/금융 비용 계산 CLI.
#[derive(Debug, Parser)]
#[command(name = "vehicle_cost_toolbox", version, about)]
struct Cli {
    /// UI 언어 (ko, en, auto)
    #[arg(long, default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(long)]
    config: Option<PathBuf>,
    /// 저장된 계산 파일 경로
    #[arg(long)]
    store: Option<PathBuf>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(config::default_config_path);
    let store_path = cli.store.unwrap_or_else(config::default_store_path);

    let mut cfg = config::load_or_default(&config_path)?;
    let lang = i18n::resolve_language(&cli.lang, cfg.language.as_deref());
    let tr = i18n::Translator::new_with_pack(&lang, None);
    let mut store = CalculationStore::open(&store_path)?;

    app::run(&mut cfg, &config_path, &mut store, &tr)?;
    Ok(())
}
