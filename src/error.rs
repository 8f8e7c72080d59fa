use thiserror::Error;

/// 서비스 시작 단계에서 발생하는 오류
/// 필터/정렬 자체는 실패하지 않으므로 여기에 포함되지 않는다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("seed file error: {0}")]
    SeedIo(#[from] std::io::Error),

    #[error("seed parse error: {0}")]
    SeedParse(#[from] serde_json::Error),

    #[error("invalid seed listing {id}: {message}")]
    InvalidListing { id: i64, message: String },
}
