#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl EngineError {
    pub(crate) fn size(size: usize) -> Self {
        EngineError::InvalidConfiguration(format!(
            "board size {size} outside {}..={}",
            super::MIN_SIZE,
            super::MAX_SIZE
        ))
    }
}
