//! 저장된 계산과 공유 코드의 JSON 파일 스토어.
//!
//! 스토어는 `{ 입력, 결과 }` 불변 스냅샷만 다루며 계산기에는 관여하지 않는다.
//! 직렬화/입출력 오류는 전부 이 계층에서 끝난다.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::vehicle::VehicleInput;
use crate::worksheet::CalculationResults;

/// 공유 코드 유효 기간 [일].
pub const SHARE_CODE_TTL_DAYS: i64 = 30;
/// 공유 코드 길이 (uuid v4 앞부분).
const SHARE_CODE_LEN: usize = 8;

/// 저장된 계산 레코드.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedCalculation {
    pub id: Uuid,
    pub name: String,
    pub timestamp: DateTime<Utc>,
    pub inputs: VehicleInput,
    pub results: CalculationResults,
}

/// 공유 코드. 만료 시각이 지나면 조회 시 제거된다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareCode {
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub record_id: Uuid,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreDocument {
    saved: Vec<SavedCalculation>,
    shares: Vec<ShareCode>,
}

/// 스토어 입출력 오류.
#[derive(Debug)]
pub enum StoreError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// JSON 직렬화/역직렬화 오류
    Serde(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            StoreError::Serde(e) => write!(f, "저장 데이터 파싱 오류: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        StoreError::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        StoreError::Serde(value)
    }
}

/// JSON 파일 기반 계산 스토어.
#[derive(Debug)]
pub struct CalculationStore {
    path: PathBuf,
    doc: StoreDocument,
}

impl CalculationStore {
    /// 파일을 로드하거나, 없으면 빈 스토어로 시작한다.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let doc = if path.exists() {
            let content = fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        } else {
            StoreDocument::default()
        };
        Ok(Self {
            path: path.to_path_buf(),
            doc,
        })
    }

    fn persist(&self) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(&self.doc)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// 스냅샷을 저장하고 레코드를 반환한다.
    pub fn save_record(
        &mut self,
        name: &str,
        inputs: VehicleInput,
        results: CalculationResults,
    ) -> Result<SavedCalculation, StoreError> {
        let record = SavedCalculation {
            id: Uuid::new_v4(),
            name: name.to_string(),
            timestamp: Utc::now(),
            inputs,
            results,
        };
        self.doc.saved.push(record.clone());
        self.persist()?;
        Ok(record)
    }

    pub fn list(&self) -> &[SavedCalculation] {
        &self.doc.saved
    }

    pub fn get(&self, id: Uuid) -> Option<&SavedCalculation> {
        self.doc.saved.iter().find(|r| r.id == id)
    }

    /// 레코드와 그 레코드를 가리키는 공유 코드를 함께 삭제한다.
    pub fn delete(&mut self, id: Uuid) -> Result<bool, StoreError> {
        let before = self.doc.saved.len();
        self.doc.saved.retain(|r| r.id != id);
        self.doc.shares.retain(|s| s.record_id != id);
        let removed = self.doc.saved.len() != before;
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    /// 저장된 레코드에 대한 공유 코드를 발급한다 (30일 만료).
    pub fn create_share(&mut self, record_id: Uuid) -> Result<Option<ShareCode>, StoreError> {
        if self.get(record_id).is_none() {
            return Ok(None);
        }
        let code = Uuid::new_v4().simple().to_string()[..SHARE_CODE_LEN].to_uppercase();
        let share = ShareCode {
            code,
            expires_at: Utc::now() + Duration::days(SHARE_CODE_TTL_DAYS),
            record_id,
        };
        self.doc.shares.push(share.clone());
        self.persist()?;
        Ok(Some(share))
    }

    /// 공유 코드로 레코드를 찾는다. 만료된 코드는 지우고 None을 반환한다.
    pub fn resolve_share(&mut self, code: &str) -> Result<Option<SavedCalculation>, StoreError> {
        let now = Utc::now();
        let expired = self.doc.shares.iter().any(|s| s.expires_at <= now);
        if expired {
            self.doc.shares.retain(|s| s.expires_at > now);
            self.persist()?;
        }
        let record = self
            .doc
            .shares
            .iter()
            .find(|s| s.code.eq_ignore_ascii_case(code.trim()))
            .and_then(|s| self.get(s.record_id))
            .cloned();
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::VehicleInput;
    use crate::worksheet::calculate_all;

    fn sample() -> (VehicleInput, CalculationResults) {
        let input = VehicleInput::default();
        let results = calculate_all(&input);
        (input, results)
    }

    #[test]
    fn record_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("store.json");

        let (input, results) = sample();
        let id = {
            let mut store = CalculationStore::open(&path).expect("open");
            let record = store
                .save_record("first quote", input.clone(), results.clone())
                .expect("save");
            record.id
        };

        let store = CalculationStore::open(&path).expect("reopen");
        let loaded = store.get(id).expect("record exists");
        assert_eq!(loaded.name, "first quote");
        assert_eq!(loaded.inputs, input);
        assert_eq!(loaded.results, results);
    }

    #[test]
    fn share_code_resolves_until_expiry() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("store.json");
        let mut store = CalculationStore::open(&path).expect("open");

        let (input, results) = sample();
        let record = store.save_record("shared", input, results).expect("save");
        let share = store
            .create_share(record.id)
            .expect("share io")
            .expect("record exists");
        assert_eq!(share.code.len(), 8);

        let resolved = store.resolve_share(&share.code).expect("resolve");
        assert_eq!(resolved.map(|r| r.id), Some(record.id));

        // 소문자로도 풀린다
        let lower = share.code.to_lowercase();
        let resolved = store.resolve_share(&lower).expect("resolve");
        assert!(resolved.is_some());

        let missing = store.resolve_share("ZZZZZZZZ").expect("resolve");
        assert!(missing.is_none());
    }

    #[test]
    fn delete_removes_shares_too() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("store.json");
        let mut store = CalculationStore::open(&path).expect("open");

        let (input, results) = sample();
        let record = store.save_record("gone", input, results).expect("save");
        let share = store
            .create_share(record.id)
            .expect("share io")
            .expect("record exists");

        assert!(store.delete(record.id).expect("delete"));
        assert!(store.resolve_share(&share.code).expect("resolve").is_none());
        assert!(store.list().is_empty());
    }
}
