use thiserror::Error;

pub type Result<T> = std::result::Result<T, SquishError>;

#[derive(Debug, Error)]
pub enum SquishError {
    #[error("config error: {0}")]
    Config(String),

    #[error("key buffer allocation failed: requested {requested} bytes")]
    Alloc { requested: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
