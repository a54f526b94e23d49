use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("test '{name}' not found in patient record")]
    UnknownTest { name: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
