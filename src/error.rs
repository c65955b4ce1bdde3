use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenkoError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("candle sequence is empty")]
    EmptyInput,

    #[error("chart not initialized: call process_data before process_incremental")]
    NotInitialized,

    #[error("cannot anchor brick grid on non-finite close {0}")]
    NonFiniteOrigin(f64),
}
