use thiserror::Error;

pub type GenResult<T> = Result<T, GenError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    #[error("invalid generator parameters: {what}")]
    InvalidParams { what: &'static str },
}
