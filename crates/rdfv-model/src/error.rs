use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown data format: {0} (expected ntriples or turtle)")]
    UnknownDataFormat(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
