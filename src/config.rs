use crate::error::AppError;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// 환경 변수 기반 설정
#[derive(Debug, Clone)]
pub struct Config {
    /// 서버 리스닝 주소 (`BIND_ADDR`, 기본값 0.0.0.0:3000)
    pub bind_addr: SocketAddr,
    /// JSON 시드 파일 경로 (`SEED_FILE`). 없으면 내장 시드를 사용한다.
    pub seed_file: Option<PathBuf>,
}

impl Config {
    /// 환경 변수에서 설정 로드
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(
            std::env::var("BIND_ADDR").ok(),
            std::env::var("SEED_FILE").ok(),
        )
    }

    fn from_vars(bind_addr: Option<String>, seed_file: Option<String>) -> Result<Self, AppError> {
        let raw = bind_addr.unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Config(format!("BIND_ADDR '{}' is invalid: {}", raw, e)))?;

        let seed_file = seed_file
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_addr,
            seed_file,
        })
    }
}
