#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Parsing error: {0}")]
    Parsing(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
