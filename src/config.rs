//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::detection::{DecisionPolicy, HeuristicConfig, DEFAULT_TIMEOUT};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("설정 파일 입출력 실패: {0}")]
    Io(#[from] io::Error),
    #[error("설정 파일 파싱 실패: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("잘못된 설정 값 {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// autohangul 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// 자동 교정 사용 여부
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// 판단 보류 구간 폭 (0 < ε < 0.5)
    #[serde(default = "default_uncertainty_band")]
    pub uncertainty_band: f32,
    /// 분류기 응답 제한 시간 (ms)
    #[serde(default = "default_classifier_timeout_ms")]
    pub classifier_timeout_ms: u64,
    /// 한 단어로 모을 최대 문자 수
    #[serde(default = "default_max_word_length")]
    pub max_word_length: usize,
    /// 휴리스틱 분류기의 한글 판정 신뢰도 (0 ~ 100)
    #[serde(default = "default_detector_threshold")]
    pub detector_threshold: f32,
    #[serde(default = "default_detector_min_length")]
    pub detector_min_length: usize,
    #[serde(default = "default_enabled")]
    pub snippets_enabled: bool,
    /// 없으면 설정 파일 옆의 snippets.json
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippets_path: Option<PathBuf>,
    /// env_logger 필터 (RUST_LOG가 우선)
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_enabled() -> bool {
    true
}

fn default_uncertainty_band() -> f32 {
    0.05
}

fn default_classifier_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT.as_millis() as u64
}

fn default_max_word_length() -> usize {
    100
}

fn default_detector_threshold() -> f32 {
    70.0
}

fn default_detector_min_length() -> usize {
    3
}

pub fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            uncertainty_band: default_uncertainty_band(),
            classifier_timeout_ms: default_classifier_timeout_ms(),
            max_word_length: default_max_word_length(),
            detector_threshold: default_detector_threshold(),
            detector_min_length: default_detector_min_length(),
            snippets_enabled: default_enabled(),
            snippets_path: None,
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.uncertainty_band > 0.0 && self.uncertainty_band < 0.5) {
            return Err(ConfigError::Invalid {
                field: "uncertainty_band",
                reason: format!("{}는 (0, 0.5) 범위 밖", self.uncertainty_band),
            });
        }
        if self.classifier_timeout_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "classifier_timeout_ms",
                reason: "0일 수 없음".to_string(),
            });
        }
        if self.max_word_length == 0 {
            return Err(ConfigError::Invalid {
                field: "max_word_length",
                reason: "0일 수 없음".to_string(),
            });
        }
        if !(0.0..100.0).contains(&self.detector_threshold) {
            return Err(ConfigError::Invalid {
                field: "detector_threshold",
                reason: format!("{}는 [0, 100) 범위 밖", self.detector_threshold),
            });
        }
        Ok(())
    }

    pub fn policy(&self) -> DecisionPolicy {
        DecisionPolicy::new(self.uncertainty_band).unwrap_or_default()
    }

    pub fn heuristic_config(&self) -> HeuristicConfig {
        HeuristicConfig {
            threshold: self.detector_threshold,
            min_length: self.detector_min_length,
        }
    }

    pub fn classifier_timeout(&self) -> Duration {
        Duration::from_millis(self.classifier_timeout_ms)
    }

    pub fn snippets_file(&self) -> PathBuf {
        self.snippets_path
            .clone()
            .unwrap_or_else(|| config_dir().join("snippets.json"))
    }
}

const FALLBACK_HOME: &str = "/var/tmp";

/// 사용할 수 있는 HOME 경로. 없거나 디렉토리가 아니면 경고 후 대체 경로
fn resolve_home(home: Option<String>) -> PathBuf {
    match home.map(PathBuf::from) {
        Some(path) if path.is_absolute() && path.is_dir() => path,
        other => {
            log::warn!(
                "HOME을 사용할 수 없음 ({:?}), 설정 경로를 {} 아래로 변경",
                other,
                FALLBACK_HOME
            );
            PathBuf::from(FALLBACK_HOME)
        }
    }
}

/// 설정 디렉토리: ~/Library/Application Support/autohangul
pub fn config_dir() -> PathBuf {
    resolve_home(std::env::var("HOME").ok())
        .join("Library")
        .join("Application Support")
        .join("autohangul")
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// 파일이 없으면 기본값. 읽을 수 없거나 값이 잘못되었으면 에러
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(e) => return Err(e.into()),
    };
    let config: AppConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

pub fn write_config(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    config.validate()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
