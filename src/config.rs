use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::vehicle::{
    DEFAULT_ELECTRICITY_RATE, DEFAULT_GAS_PRICE, DEFAULT_MAINTENANCE_PER_YEAR,
    DEFAULT_MILES_PER_YEAR,
};

/// CLI 프롬프트를 미리 채우는 비용 가정값.
/// 정규화 기본값과는 별개다: 정규화 상수는 고정이고, 여기 값은 세션 편의용이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostAssumptions {
    /// 휘발유 단가 [USD/gal]
    pub gas_price_per_gallon: f64,
    /// 전기 단가 [USD/kWh]
    pub electricity_rate_per_kwh: f64,
    /// 연간 주행거리 [mi]
    pub miles_per_year: f64,
    /// 연간 정비비 [USD/년]
    pub maintenance_per_year: f64,
}

impl Default for CostAssumptions {
    fn default() -> Self {
        Self {
            gas_price_per_gallon: DEFAULT_GAS_PRICE,
            electricity_rate_per_kwh: DEFAULT_ELECTRICITY_RATE,
            miles_per_year: DEFAULT_MILES_PER_YEAR,
            maintenance_per_year: DEFAULT_MAINTENANCE_PER_YEAR,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// UI 언어 코드 (ko/en). 없으면 시스템 로케일로 추정한다.
    pub language: Option<String>,
    #[serde(default)]
    pub assumptions: CostAssumptions,
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성해 저장한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 지정 경로에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        save_config(self, path)
    }
}

/// 기본 설정 파일 경로.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("config.toml")
}

/// 기본 스토어 파일 경로.
pub fn default_store_path() -> PathBuf {
    PathBuf::from("saved_calculations.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");

        let mut cfg = load_or_default(&path).expect("create default");
        assert_eq!(cfg, Config::default());
        assert!(path.exists());

        cfg.language = Some("en".into());
        cfg.assumptions.gas_price_per_gallon = 3.45;
        cfg.save(&path).expect("save");

        let loaded = load_or_default(&path).expect("reload");
        assert_eq!(loaded, cfg);
    }
}
