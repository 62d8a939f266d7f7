use thiserror::Error;

pub type PqResult<T> = Result<T, PqError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PqError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
