use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersonaEngineError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("content store error: {0}")]
    Store(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("runtime error: {0}")]
    Runtime(String),
}

pub use crate::Result;
